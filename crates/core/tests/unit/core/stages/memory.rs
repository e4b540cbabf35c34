//! Memory Access Stage Tests.
//!
//! Covers the sized loads with their extension rules, the sized stores, and
//! the fault path that leaves the record without a result.

use rv64sim_core::common::data::{AccessType, AccessWidth};
use rv64sim_core::common::error::Trap;
use rv64sim_core::core::record::Record;
use rv64sim_core::core::stages::{DecodeOutcome, decode_stage, memory_stage};
use rv64sim_core::mem::{Bus, Memory};

use crate::common::builder::instruction::InstructionBuilder;

/// Decodes a word and pins its effective address.
fn record_with_addr(word: u32, addr: u64) -> Record {
    match decode_stage(0, word).unwrap() {
        DecodeOutcome::Inst(mut record) => {
            record.addr = Some(addr);
            record
        }
        other => panic!("expected an instruction record, got {other:?}"),
    }
}

#[test]
fn memory_lb_sign_extends() {
    let mut mem = Memory::new(64);
    mem.write(4, AccessWidth::Byte, 0x80).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lb(1, 2, 0).build(), 4);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0xFFFF_FFFF_FFFF_FF80));
}

#[test]
fn memory_lbu_zero_extends() {
    let mut mem = Memory::new(64);
    mem.write(4, AccessWidth::Byte, 0x80).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lbu(1, 2, 0).build(), 4);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0x80));
}

#[test]
fn memory_lh_sign_extends() {
    let mut mem = Memory::new(64);
    mem.write(8, AccessWidth::Half, 0xFFFE).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lh(1, 2, 0).build(), 8);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some((-2i64) as u64));
}

#[test]
fn memory_lhu_zero_extends() {
    let mut mem = Memory::new(64);
    mem.write(8, AccessWidth::Half, 0xFFFE).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lhu(1, 2, 0).build(), 8);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0xFFFE));
}

#[test]
fn memory_lw_sign_extends() {
    let mut mem = Memory::new(64);
    mem.write(12, AccessWidth::Word, 0x8000_0000).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lw(1, 2, 0).build(), 12);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0xFFFF_FFFF_8000_0000));
}

#[test]
fn memory_lwu_zero_extends() {
    let mut mem = Memory::new(64);
    mem.write(12, AccessWidth::Word, 0x8000_0000).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().lwu(1, 2, 0).build(), 12);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0x8000_0000));
}

#[test]
fn memory_ld_reads_doubleword() {
    let mut mem = Memory::new(64);
    mem.write(16, AccessWidth::Double, 0xDEAD_BEEF_CAFE_F00D).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().ld(1, 2, 0).build(), 16);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, Some(0xDEAD_BEEF_CAFE_F00D));
}

#[test]
fn memory_sb_writes_only_one_byte() {
    let mut mem = Memory::new(64);
    mem.write(0, AccessWidth::Double, 0x1111_1111_1111_1111).unwrap();
    let mut record = record_with_addr(InstructionBuilder::new().sb(2, 3, 0).build(), 3);
    record.op2 = 0xAB;
    memory_stage(&mut record, &mut mem).unwrap();
    let after = mem.read(0, AccessWidth::Double, AccessType::Read).unwrap();
    assert_eq!(after, 0x1111_1111_AB11_1111, "neighbors must be preserved");
}

#[test]
fn memory_sh_sw_sd_write_their_width() {
    let mut mem = Memory::new(64);

    let mut record = record_with_addr(InstructionBuilder::new().sh(2, 3, 0).build(), 0);
    record.op2 = 0xFFFF_FFFF_FFFF_BEEF;
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(mem.read(0, AccessWidth::Double, AccessType::Read).unwrap(), 0xBEEF);

    let mut record = record_with_addr(InstructionBuilder::new().sw(2, 3, 0).build(), 8);
    record.op2 = 0xFFFF_FFFF_CAFE_BABE;
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(
        mem.read(8, AccessWidth::Double, AccessType::Read).unwrap(),
        0xCAFE_BABE
    );

    let mut record = record_with_addr(InstructionBuilder::new().sd(2, 3, 0).build(), 16);
    record.op2 = 0x0123_4567_89AB_CDEF;
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(
        mem.read(16, AccessWidth::Double, AccessType::Read).unwrap(),
        0x0123_4567_89AB_CDEF
    );
}

#[test]
fn memory_load_outside_image_faults_without_result() {
    let mut mem = Memory::new(64);
    let mut record = record_with_addr(InstructionBuilder::new().ld(1, 2, 0).build(), 60);
    let err = memory_stage(&mut record, &mut mem).unwrap_err();
    assert_eq!(
        err,
        Trap::AccessFault {
            access: AccessType::Read,
            addr: 60,
            width: AccessWidth::Double,
        }
    );
    assert_eq!(record.result, None, "a faulting load must not produce a result");
}

#[test]
fn memory_store_outside_image_faults() {
    let mut mem = Memory::new(64);
    let mut record = record_with_addr(InstructionBuilder::new().sw(2, 3, 0).build(), 64);
    record.op2 = 1;
    let err = memory_stage(&mut record, &mut mem).unwrap_err();
    assert!(matches!(
        err,
        Trap::AccessFault {
            access: AccessType::Write,
            addr: 64,
            ..
        }
    ));
}

#[test]
fn memory_non_memory_categories_pass_through() {
    let mut mem = Memory::new(64);
    let DecodeOutcome::Inst(mut record) =
        decode_stage(0, InstructionBuilder::new().addi(1, 2, 3).build()).unwrap()
    else {
        panic!("expected an instruction record");
    };
    assert_eq!(record.addr, None);
    memory_stage(&mut record, &mut mem).unwrap();
    assert_eq!(record.result, None);
}
