//! count command - Print C(n) without generating

use anyhow::{anyhow, Result};

use crate::core::generator::catalan;
use crate::engine::Context;

/// Print the number of combinations `pairs` would produce.
pub fn count(ctx: &Context, pairs: Option<&str>) -> Result<()> {
    let pairs = super::resolve_pairs(pairs, ctx)?;

    let total = catalan(pairs.get())
        .ok_or_else(|| anyhow!("C({}) does not fit in 128 bits", pairs))?;

    println!("{}", total);
    Ok(())
}
