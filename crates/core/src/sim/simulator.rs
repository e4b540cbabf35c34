//! Instruction Driver.
//!
//! This module implements the top-level simulation loop. It performs:
//! 1. **Stage sequencing:** Drives one instruction through fetch, decode,
//!    operand collection, next-PC resolution, execute, address generation,
//!    memory access, and commit.
//! 2. **Sentinel handling:** Retires the no-op without touching the ALU and
//!    stops on the halt word.
//! 3. **Termination:** Tracks the driver state; `Halted` and `Faulted` are
//!    the only terminal states, and a trap leaves all architectural state as
//!    it was before the faulting instruction.
//! 4. **Diagnostics:** Final register and memory dumps, per-run statistics.

use tracing::trace;

use crate::common::constants::{DOUBLEWORD_SIZE, INSTRUCTION_SIZE};
use crate::common::data::{AccessType, AccessWidth};
use crate::common::error::Trap;
use crate::config::Config;
use crate::core::machine::Machine;
use crate::core::record::Record;
use crate::core::stages::{
    DecodeOutcome, addr_gen_stage, branch_taken, commit_stage, decode_stage, execute_stage,
    fetch_stage, memory_stage, next_pc_stage, operand_stage,
};
use crate::isa::instruction::OpClass;
use crate::mem::{Bus, Memory};
use crate::stats::SimStats;

/// Driver state of a simulator instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Ready to fetch and classify the word at the current PC.
    FetchDecode,
    /// A validated instruction is moving through the stage chain.
    Execute,
    /// The halt sentinel was reached; terminal, a successful run.
    Halted,
    /// A trap ended the run; terminal.
    Faulted,
}

/// Top-level simulator owning the machine state, the memory, and the loop.
///
/// The memory is generic over [`Bus`] so tests can substitute an image that
/// injects faults; production runs use [`Memory`] via [`Simulator::new`].
#[derive(Debug)]
pub struct Simulator<M: Bus> {
    /// Architectural state (PC and registers).
    pub machine: Machine,
    /// Memory image holding program text and data.
    pub mem: M,
    /// Retired-instruction statistics for this run.
    pub stats: SimStats,
    state: State,
    max_steps: u64,
    trace_instructions: bool,
}

impl Simulator<Memory> {
    /// Creates a simulator backed by a zero-filled [`Memory`] image.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_bus(Memory::new(config.memory.size_bytes), config)
    }
}

impl<M: Bus> Simulator<M> {
    /// Creates a simulator over an existing memory implementation.
    ///
    /// The PC starts at the configured reset address and all registers are
    /// zero.
    pub fn with_bus(mem: M, config: &Config) -> Self {
        Self {
            machine: Machine::new(config.general.start_pc),
            mem,
            stats: SimStats::default(),
            state: State::FetchDecode,
            max_steps: config.general.max_steps,
            trace_instructions: config.general.trace_instructions,
        }
    }

    /// Returns the current driver state.
    #[must_use]
    pub const fn state(&self) -> State {
        self.state
    }

    /// Executes one instruction.
    ///
    /// Returns the driver state after the step. Stepping a machine already in
    /// a terminal state does nothing and returns that state.
    ///
    /// # Errors
    ///
    /// Returns the [`Trap`] that faulted the run: an illegal instruction, a
    /// memory access fault, or the step limit. The driver transitions to
    /// [`State::Faulted`] and the faulting instruction mutates no
    /// architectural state.
    pub fn step(&mut self) -> Result<State, Trap> {
        if matches!(self.state, State::Halted | State::Faulted) {
            return Ok(self.state);
        }
        match self.step_inner() {
            Ok(state) => Ok(state),
            Err(trap) => {
                self.state = State::Faulted;
                Err(trap)
            }
        }
    }

    fn step_inner(&mut self) -> Result<State, Trap> {
        if self.max_steps != 0 && self.stats.steps >= self.max_steps {
            return Err(Trap::StepLimit {
                pc: self.machine.pc,
                limit: self.max_steps,
            });
        }
        self.stats.steps += 1;

        let pc = self.machine.pc;
        let word = fetch_stage(&self.machine, &self.mem)?;
        if self.trace_instructions {
            println!("Fetched instruction {word:#010x} at PC={pc:#x}");
        }

        let mut record = match decode_stage(pc, word)? {
            DecodeOutcome::Halt => {
                self.state = State::Halted;
                return Ok(self.state);
            }
            DecodeOutcome::Nop => {
                self.machine.pc = pc.wrapping_add(INSTRUCTION_SIZE);
                self.stats.instructions_retired += 1;
                self.stats.inst_nop += 1;
                return Ok(self.state);
            }
            DecodeOutcome::Inst(record) => record,
        };

        self.state = State::Execute;
        operand_stage(&mut record, &self.machine.regs);
        next_pc_stage(&mut record);
        execute_stage(&mut record);
        addr_gen_stage(&mut record);
        memory_stage(&mut record, &mut self.mem)?;
        commit_stage(&record, &mut self.machine.regs);

        self.machine.pc = record.next_pc;
        self.retire(&record);
        self.state = State::FetchDecode;
        trace!("retired {:#010x}, next PC={:#x}", word, record.next_pc);
        Ok(self.state)
    }

    /// Runs until the program halts.
    ///
    /// Returns immediately when the driver is already in a terminal state.
    ///
    /// # Errors
    ///
    /// Propagates the first [`Trap`] raised by [`Simulator::step`].
    pub fn run(&mut self) -> Result<(), Trap> {
        loop {
            match self.step()? {
                State::Halted | State::Faulted => return Ok(()),
                State::FetchDecode | State::Execute => {}
            }
        }
    }

    /// Dumps the final machine and memory state to stdout.
    ///
    /// All 32 registers print in pairs; memory prints only the nonzero
    /// doublewords of the image, each with its address.
    pub fn dump_state(&self) {
        self.machine.dump();
        let limit = self.mem.size().saturating_sub(DOUBLEWORD_SIZE - 1);
        for addr in (0..limit).step_by(DOUBLEWORD_SIZE as usize) {
            let value = self
                .mem
                .read(addr, AccessWidth::Double, AccessType::Read)
                .unwrap_or(0);
            if value != 0 {
                println!("mem[{addr:#010x}] = {value:#018x}");
            }
        }
    }

    /// Counts a retired instruction into its statistics category.
    fn retire(&mut self, record: &Record) {
        self.stats.instructions_retired += 1;
        match record.class {
            OpClass::Load => self.stats.inst_load += 1,
            OpClass::Store => self.stats.inst_store += 1,
            OpClass::Branch => {
                self.stats.inst_branch += 1;
                if branch_taken(record.decoded.funct3, record.op1, record.op2) {
                    self.stats.branches_taken += 1;
                } else {
                    self.stats.branches_not_taken += 1;
                }
            }
            OpClass::Jal | OpClass::Jalr => self.stats.inst_jump += 1,
            OpClass::IntImm
            | OpClass::IntImmW
            | OpClass::IntReg
            | OpClass::IntRegW
            | OpClass::Lui
            | OpClass::Auipc => self.stats.inst_alu += 1,
        }
    }
}
