//! Engine stage implementations.
//!
//! This module contains the individual stages an instruction passes through,
//! in execution order:
//! 1. **Fetch:** Reads the word addressed by the PC.
//! 2. **Decode:** Classifies the word, validates it, and opens its record.
//! 3. **Operands:** Reads the source registers the operation needs.
//! 4. **Next PC:** Resolves sequential, branch, or jump successor address.
//! 5. **Execute:** Computes the ALU result or link value.
//! 6. **Address Generation:** Computes the load/store effective address.
//! 7. **Memory:** Performs the sized read or write.
//! 8. **Commit:** Writes the result back to the register file.
//!
//! Each stage is a free function over the instruction record and the state
//! it needs, so every stage can be driven in isolation by tests.

/// Effective address generation stage implementation.
pub mod addr_gen;

/// Commit (register writeback) stage implementation.
pub mod commit;

/// Classification and validation stage implementation.
pub mod decode;

/// ALU execution stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Next-PC resolution stage implementation.
pub mod next_pc;

/// Operand collection stage implementation.
pub mod operands;

/// Address generation stage entry point.
pub use addr_gen::addr_gen_stage;
/// Commit stage entry point.
pub use commit::commit_stage;
/// Decode stage entry point and outcome type.
pub use decode::{DecodeOutcome, decode_stage};
/// Execute stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Memory stage entry point.
pub use memory::memory_stage;
/// Next-PC stage entry point and branch comparator.
pub use next_pc::{branch_taken, next_pc_stage};
/// Operand collection stage entry point.
pub use operands::operand_stage;
