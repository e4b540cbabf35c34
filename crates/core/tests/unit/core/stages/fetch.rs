//! Instruction Fetch Stage Tests.

use rv64sim_core::common::data::{AccessType, AccessWidth};
use rv64sim_core::common::error::Trap;
use rv64sim_core::core::machine::Machine;
use rv64sim_core::core::stages::fetch_stage;
use rv64sim_core::mem::{Bus, Memory};

#[test]
fn fetch_reads_word_at_pc() {
    let mut mem = Memory::new(64);
    mem.write(8, AccessWidth::Word, 0x0040_0093).unwrap();
    let machine = Machine::new(8);
    let word = fetch_stage(&machine, &mem).unwrap();
    assert_eq!(word, 0x0040_0093);
}

#[test]
fn fetch_does_not_advance_pc() {
    let mut mem = Memory::new(64);
    mem.write(0, AccessWidth::Word, 0x13).unwrap();
    let machine = Machine::new(0);
    let _ = fetch_stage(&machine, &mem).unwrap();
    assert_eq!(machine.pc, 0, "fetch must leave the PC untouched");
}

#[test]
fn fetch_truncates_to_one_word() {
    let mut mem = Memory::new(64);
    mem.write(0, AccessWidth::Double, 0xAAAA_BBBB_1111_2222).unwrap();
    let machine = Machine::new(0);
    let word = fetch_stage(&machine, &mem).unwrap();
    assert_eq!(word, 0x1111_2222, "fetch reads exactly the low word");
}

#[test]
fn fetch_outside_image_faults() {
    let mem = Memory::new(64);
    let machine = Machine::new(64);
    let err = fetch_stage(&machine, &mem).unwrap_err();
    assert_eq!(
        err,
        Trap::AccessFault {
            access: AccessType::Fetch,
            addr: 64,
            width: AccessWidth::Word,
        }
    );
}

#[test]
fn fetch_straddling_image_end_faults() {
    // The last byte of the word falls outside a 62-byte image.
    let mem = Memory::new(62);
    let machine = Machine::new(60);
    let err = fetch_stage(&machine, &mem).unwrap_err();
    assert!(matches!(
        err,
        Trap::AccessFault {
            access: AccessType::Fetch,
            addr: 60,
            ..
        }
    ));
}
