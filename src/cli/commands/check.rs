//! check command - Report whether a string is balanced

use anyhow::{anyhow, Result};

use crate::core::verify::check_balanced;
use crate::engine::Context;
use crate::ui::output;

/// Check `value` and report its pair count if it is balanced.
///
/// An unbalanced string is an error, so the process exits non-zero.
pub fn check(ctx: &Context, value: &str) -> Result<()> {
    match check_balanced(value) {
        Ok(pairs) => {
            output::print(format!("balanced ({} pairs)", pairs), ctx.verbosity());
            Ok(())
        }
        Err(e) => Err(anyhow!("not balanced: {}", e)),
    }
}
