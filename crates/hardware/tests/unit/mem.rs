//! Memory port and main memory tests.

use rv64emu_core::SimError;
use rv64emu_core::core::mem::{DataMemory, InstructionMemory};
use rv64emu_core::soc::bus::{MainMemory, MemoryBus};

fn memory_with(addr: u64, value: u64) -> MainMemory {
    let mut mem = MainMemory::new(0, 4096);
    mem.write_double_word(addr, value).unwrap();
    mem
}

#[test]
fn instruction_port_rejects_bad_sizes() {
    let mut imem = InstructionMemory::new();
    assert_eq!(imem.set_size(3), Err(SimError::IllegalAccess(3)));
    assert_eq!(imem.set_size(8), Err(SimError::IllegalAccess(8)));
    assert!(imem.set_size(2).is_ok());
    assert!(imem.set_size(4).is_ok());
}

#[test]
fn instruction_port_reads_words_and_half_words() {
    let mut mem = memory_with(0x100, 0x1122_3344_5566_7788);
    let mut imem = InstructionMemory::new();
    imem.set_address(0x100);

    imem.set_size(4).unwrap();
    assert_eq!(imem.value(&mut mem).unwrap(), 0x5566_7788);

    imem.set_size(2).unwrap();
    assert_eq!(imem.value(&mut mem).unwrap(), 0x7788);
}

#[test]
fn data_port_rejects_bad_sizes() {
    let mut dmem = DataMemory::new();
    assert_eq!(dmem.set_size(3), Err(SimError::IllegalAccess(3)));
    assert_eq!(dmem.set_size(16), Err(SimError::IllegalAccess(16)));
    for size in [1, 2, 4, 8] {
        assert!(dmem.set_size(size).is_ok());
    }
}

#[test]
fn disabled_read_returns_zero() {
    let mut mem = memory_with(0x40, 0xFFFF_FFFF_FFFF_FFFF);
    let mut dmem = DataMemory::new();
    dmem.set_address(0x40);
    dmem.set_size(8).unwrap();
    dmem.set_read_enable(false);
    assert_eq!(dmem.data_out(&mut mem, false).unwrap(), 0);
}

#[test]
fn reads_extend_per_size() {
    let mut mem = memory_with(0x40, 0xFFFF_FFFF_FFFF_FF80);
    let mut dmem = DataMemory::new();
    dmem.set_address(0x40);
    dmem.set_read_enable(true);

    dmem.set_size(1).unwrap();
    assert_eq!(dmem.data_out(&mut mem, true).unwrap(), 0xFFFF_FFFF_FFFF_FF80);
    assert_eq!(dmem.data_out(&mut mem, false).unwrap(), 0x80);

    dmem.set_size(2).unwrap();
    assert_eq!(dmem.data_out(&mut mem, true).unwrap(), 0xFFFF_FFFF_FFFF_FF80);
    assert_eq!(dmem.data_out(&mut mem, false).unwrap(), 0xFF80);

    dmem.set_size(4).unwrap();
    assert_eq!(dmem.data_out(&mut mem, false).unwrap(), 0xFFFF_FF80);

    dmem.set_size(8).unwrap();
    assert_eq!(
        dmem.data_out(&mut mem, false).unwrap(),
        0xFFFF_FFFF_FFFF_FF80
    );
}

#[test]
fn write_commits_only_on_the_pulse() {
    let mut mem = MainMemory::new(0, 4096);
    let mut dmem = DataMemory::new();
    dmem.set_address(0x80);
    dmem.set_size(8).unwrap();
    dmem.set_data_in(0xCAFE);
    dmem.set_write_enable(true);
    assert_eq!(mem.read_double_word(0x80).unwrap(), 0);

    dmem.clock_pulse(&mut mem).unwrap();
    assert_eq!(mem.read_double_word(0x80).unwrap(), 0xCAFE);
}

#[test]
fn disabled_write_commits_nothing() {
    let mut mem = MainMemory::new(0, 4096);
    let mut dmem = DataMemory::new();
    dmem.set_address(0x80);
    dmem.set_size(8).unwrap();
    dmem.set_data_in(0xCAFE);
    dmem.set_write_enable(false);
    dmem.clock_pulse(&mut mem).unwrap();
    assert_eq!(mem.read_double_word(0x80).unwrap(), 0);
}

#[test]
fn partial_writes_leave_neighbors_intact() {
    let mut mem = memory_with(0x40, 0x1111_1111_1111_1111);
    let mut dmem = DataMemory::new();
    dmem.set_address(0x42);
    dmem.set_size(2).unwrap();
    dmem.set_data_in(0xABCD);
    dmem.set_write_enable(true);
    dmem.clock_pulse(&mut mem).unwrap();
    assert_eq!(mem.read_double_word(0x40).unwrap(), 0x1111_1111_ABCD_1111);
}

#[test]
fn misaligned_access_splits_without_fault() {
    let mut mem = memory_with(0x40, 0x8877_6655_4433_2211);
    assert_eq!(mem.read_word(0x41).unwrap(), 0x5544_3322);
    assert_eq!(mem.read_double_word(0x3D).unwrap(), 0x5544_3322_1100_0000);
}

#[test]
fn out_of_range_accesses_fault() {
    let mut mem = MainMemory::new(0, 4096);
    assert_eq!(mem.read_word(4096), Err(SimError::BusFault(4096)));
    assert_eq!(mem.read_double_word(4092), Err(SimError::BusFault(4092)));
    assert_eq!(mem.write_byte(5000, 1), Err(SimError::BusFault(5000)));
    assert_eq!(
        mem.read_word(u64::MAX - 1),
        Err(SimError::BusFault(u64::MAX - 1))
    );
}
