//! Decision-threshold extraction from a policy table.

use pathrisk_core::constants::{GRID_POINTS, GRID_SCALE};

use super::types::{PolicyTable, PolicyThreshold};

/// Find every sign change between adjacent columns of each policy row.
///
/// A row with no change gets one synthetic threshold at the grid boundary: column 0 when
/// it trusts everywhere, `GRID_POINTS` when it intervenes everywhere. Results are ordered
/// by decreasing row, columns ascending within a row.
pub fn extract_thresholds(policy: &PolicyTable) -> Vec<PolicyThreshold> {
    let mut thresholds = Vec::new();
    for row in (0..policy.rows()).rev() {
        let flags = policy.row(row);
        let mut changed = false;
        for (column, pair) in flags.windows(2).enumerate() {
            if pair[0] != pair[1] {
                thresholds.push(threshold(row, column));
                changed = true;
            }
        }
        if !changed {
            let column = if flags.iter().all(|&trust| trust) { 0 } else { GRID_POINTS };
            thresholds.push(threshold(row, column));
        }
    }
    thresholds
}

fn threshold(row: usize, column: usize) -> PolicyThreshold {
    PolicyThreshold {
        row,
        column,
        belief: column as f64 / GRID_SCALE,
    }
}
