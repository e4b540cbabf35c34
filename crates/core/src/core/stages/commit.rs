//! Commit Stage.
//!
//! This module implements the final stage of the engine. It writes the
//! record's result to the destination register for every category that
//! writes `rd`. The register file itself enforces the x0 invariant, so a
//! commit targeting x0 is silently discarded and x0 reads zero afterwards.

use crate::core::gpr::Gpr;
use crate::core::record::Record;

/// Executes the commit stage.
///
/// Branches and stores carry no result and commit nothing. This is the only
/// stage that mutates the register file.
///
/// # Arguments
///
/// * `record` - Completed instruction record
/// * `regs` - Register file to write back into
pub fn commit_stage(record: &Record, regs: &mut Gpr) {
    if record.class.writes_rd() {
        if let Some(result) = record.result {
            regs.write(record.decoded.rd, result);
        }
    }
}
