//! RV64I pipeline simulator CLI.
//!
//! Loads a flat binary into memory, runs it to the test end marker, and
//! reports run statistics. The default execution mode is the non-pipelined
//! reference; `--pipeline` enables the five-stage pipeline and `--debug`
//! dumps each decoded instruction to stderr.

use clap::Parser;
use std::path::PathBuf;
use std::process;

use rv64emu_core::sim::loader;
use rv64emu_core::soc::bus::MainMemory;
use rv64emu_core::{Config, CycleOutcome, Simulator};

#[derive(Parser, Debug)]
#[command(
    name = "rv64emu",
    author,
    version,
    about = "RV64I five-stage pipeline simulator",
    long_about = "Run a flat RV64I binary until the test end marker.\n\nExamples:\n  rv64emu tests/basic.bin\n  rv64emu -p -d tests/hazards.bin"
)]
struct Cli {
    /// Flat binary image to execute.
    file: PathBuf,

    /// Enable the five-stage pipeline (default: non-pipelined).
    #[arg(short, long)]
    pipeline: bool,

    /// Dump each decoded instruction to stderr.
    #[arg(short, long)]
    debug: bool,

    /// Load address of the image; execution starts there.
    #[arg(long, default_value_t = 0)]
    base: u64,

    /// Size of the memory image in bytes.
    #[arg(long)]
    memory_size: Option<usize>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = Config {
        pipelining: cli.pipeline,
        debug: cli.debug,
        memory_base: cli.base,
        ..Config::default()
    };
    if let Some(size) = cli.memory_size {
        config.memory_size = size;
    }

    let image = loader::read_image(&cli.file).unwrap_or_else(|e| {
        eprintln!("error: cannot read '{}': {}", cli.file.display(), e);
        process::exit(1);
    });

    let mut memory = MainMemory::new(config.memory_base, config.memory_size);
    if let Err(e) = loader::load_image(&mut memory, &image, cli.base) {
        eprintln!("error: cannot load '{}': {}", cli.file.display(), e);
        process::exit(1);
    }

    let mut sim = Simulator::new(memory, &config);
    sim.pc = cli.base;

    loop {
        match sim.tick() {
            Ok(CycleOutcome::Continue) => {}
            Ok(CycleOutcome::EndOfTest(addr)) => {
                println!("test end marker encountered at {:#x}", addr);
                sim.stats.print();
                process::exit(0);
            }
            Err(e) => {
                eprintln!("error: {} (pc = {:#x})", e, sim.pc);
                sim.regs.dump();
                sim.stats.print();
                process::exit(1);
            }
        }
    }
}
