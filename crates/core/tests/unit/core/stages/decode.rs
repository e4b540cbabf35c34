//! Classification and Validation Stage Tests.

use rv64sim_core::common::constants::{HALT_WORD, NOP_WORD};
use rv64sim_core::common::error::Trap;
use rv64sim_core::core::stages::{DecodeOutcome, decode_stage};
use rv64sim_core::isa::instruction::OpClass;

use crate::common::builder::instruction::InstructionBuilder;

#[test]
fn decode_halt_sentinel() {
    let outcome = decode_stage(0x100, HALT_WORD).unwrap();
    assert!(matches!(outcome, DecodeOutcome::Halt));
}

#[test]
fn decode_nop_sentinel() {
    let outcome = decode_stage(0, NOP_WORD).unwrap();
    assert!(matches!(outcome, DecodeOutcome::Nop));
}

#[test]
fn decode_sentinels_win_over_field_extraction() {
    // The canonical no-op is also a well-formed addi x0, x0, 0; the sentinel
    // match must claim it before validation sees it.
    let word = InstructionBuilder::new().nop().build();
    assert_eq!(word, NOP_WORD);
    assert!(matches!(decode_stage(0, word).unwrap(), DecodeOutcome::Nop));
}

#[test]
fn decode_opens_record_with_pc_and_fields() {
    let word = InstructionBuilder::new().addi(5, 6, -12).build();
    let outcome = decode_stage(0x40, word).unwrap();
    let DecodeOutcome::Inst(record) = outcome else {
        panic!("expected an instruction record");
    };
    assert_eq!(record.pc, 0x40);
    assert_eq!(record.class, OpClass::IntImm);
    assert_eq!(record.decoded.rd, 5);
    assert_eq!(record.decoded.rs1, 6);
    assert_eq!(record.decoded.imm, -12);
    assert_eq!(record.result, None);
    assert_eq!(record.addr, None);
}

#[test]
fn decode_assigns_class_per_opcode() {
    let cases: [(u32, OpClass); 8] = [
        (InstructionBuilder::new().add(1, 2, 3).build(), OpClass::IntReg),
        (InstructionBuilder::new().addw(1, 2, 3).build(), OpClass::IntRegW),
        (InstructionBuilder::new().addiw(1, 2, 3).build(), OpClass::IntImmW),
        (InstructionBuilder::new().ld(1, 2, 0).build(), OpClass::Load),
        (InstructionBuilder::new().sd(1, 2, 0).build(), OpClass::Store),
        (InstructionBuilder::new().beq(1, 2, 8).build(), OpClass::Branch),
        (InstructionBuilder::new().jal(1, 8).build(), OpClass::Jal),
        (InstructionBuilder::new().lui(1, 1).build(), OpClass::Lui),
    ];
    for (word, expected) in cases {
        let DecodeOutcome::Inst(record) = decode_stage(0, word).unwrap() else {
            panic!("word {word:#010x} should decode to a record");
        };
        assert_eq!(record.class, expected, "word {word:#010x}");
    }
}

#[test]
fn decode_illegal_word_reports_pc_and_word() {
    let err = decode_stage(0x200, 0xFFFF_FFFF).unwrap_err();
    assert_eq!(
        err,
        Trap::IllegalInstruction {
            pc: 0x200,
            word: 0xFFFF_FFFF,
        }
    );
}

#[test]
fn decode_rejects_bad_funct3() {
    // Load funct3 0b111 is the one reserved load encoding.
    let word = InstructionBuilder::new().lb(1, 2, 0).funct3(0b111).build();
    let err = decode_stage(0, word).unwrap_err();
    assert!(matches!(err, Trap::IllegalInstruction { pc: 0, .. }));
}

#[test]
fn decode_rejects_bad_funct7() {
    let word = InstructionBuilder::new().add(1, 2, 3).funct7(0b101_0101).build();
    assert!(decode_stage(0, word).is_err());
}

#[test]
fn decode_all_zeros_word_is_illegal() {
    assert!(decode_stage(0, 0).is_err());
}
