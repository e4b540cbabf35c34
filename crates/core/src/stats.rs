//! Simulation statistics collection and reporting.
//!
//! This module tracks per-run metrics for the simulator. It provides:
//! 1. **Step and retire counts:** Driver steps taken and instructions retired.
//! 2. **Instruction mix:** Retired counts by category (ALU, load, store, branch, jump, no-op).
//! 3. **Branch outcomes:** Taken and not-taken counts.
//!
//! The driver increments the counters directly; this module only stores and
//! reports them.

use std::time::Instant;

/// Statistics for one simulation run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Driver steps taken, counting every fetch including the halt word.
    pub steps: u64,
    /// Number of instructions retired (no-ops included, the halt word not).
    pub instructions_retired: u64,

    /// Count of ALU instructions retired (register, immediate, `lui`, `auipc`).
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions retired (`jal`, `jalr`).
    pub inst_jump: u64,
    /// Count of no-op sentinels retired.
    pub inst_nop: u64,

    /// Number of retired branches that were taken.
    pub branches_taken: u64,
    /// Number of retired branches that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    /// Returns a zeroed statistics block with the clock started.
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_nop: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

impl SimStats {
    /// Prints the statistics report to stdout.
    ///
    /// Division by zero is prevented by clamping the retired-instruction
    /// count to one before any rate is derived.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = if self.instructions_retired == 0 {
            1
        } else {
            self.instructions_retired
        };
        let total_inst = instr as f64;
        let mips = (self.instructions_retired as f64 / seconds) / 1_000_000.0;

        println!("\n==========================================================");
        println!("RV64I CORE SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {seconds:.4} s");
        println!("sim_steps                {}", self.steps);
        println!("sim_insts                {}", self.instructions_retired);
        println!("sim_mips                 {mips:.2}");
        println!("----------------------------------------------------------");
        println!("INSTRUCTION MIX");
        println!(
            "  op.alu                 {} ({:.2}%)",
            self.inst_alu,
            (self.inst_alu as f64 / total_inst) * 100.0
        );
        println!(
            "  op.load                {} ({:.2}%)",
            self.inst_load,
            (self.inst_load as f64 / total_inst) * 100.0
        );
        println!(
            "  op.store               {} ({:.2}%)",
            self.inst_store,
            (self.inst_store as f64 / total_inst) * 100.0
        );
        println!(
            "  op.branch              {} ({:.2}%)",
            self.inst_branch,
            (self.inst_branch as f64 / total_inst) * 100.0
        );
        println!(
            "  op.jump                {} ({:.2}%)",
            self.inst_jump,
            (self.inst_jump as f64 / total_inst) * 100.0
        );
        println!(
            "  op.nop                 {} ({:.2}%)",
            self.inst_nop,
            (self.inst_nop as f64 / total_inst) * 100.0
        );
        println!("----------------------------------------------------------");
        let br_total = self.branches_taken + self.branches_not_taken;
        let taken_rate = if br_total > 0 {
            100.0 * (self.branches_taken as f64 / br_total as f64)
        } else {
            0.0
        };
        println!("BRANCH OUTCOMES");
        println!("  br.taken               {}", self.branches_taken);
        println!("  br.not_taken           {}", self.branches_not_taken);
        println!("  br.taken_rate          {taken_rate:.2}%");
        println!("==========================================================");
    }
}
