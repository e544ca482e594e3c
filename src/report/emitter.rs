use crate::estimator::convention::Convention;
use crate::report::row::{HEADER, Row};
use crate::sweep::sweep::Sweep;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, warn};

/// Writes the header and one tab-separated line per sweep point to `out`.
/// Returns the number of data rows written.
pub fn emit<W: Write>(out: &mut W, sweep: &Sweep, convention: Convention) -> Result<usize> {
    writeln!(out, "{}", HEADER.join("\t")).context("failed to write report header")?;

    let mut rows = 0;
    for point in sweep.points() {
        let row = Row::evaluate(point, convention);
        if !row.is_finite() {
            warn!(
                "non-finite queue length at servers={} util={}",
                row.servers(),
                row.utilization()
            );
        }
        writeln!(out, "{}", row).with_context(|| {
            format!(
                "failed to write row servers={} util={:.3}",
                row.servers(),
                row.utilization()
            )
        })?;
        rows += 1;
    }
    out.flush().context("failed to flush report")?;

    debug!("emitted {} rows ({:?})", rows, convention);
    Ok(rows)
}
