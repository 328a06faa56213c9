//! The duplicate-value comparison.

use super::types::DuplicateFinding;
use crate::document::FlatTable;

/// Report every overlay key whose value equals the base value at the same
/// dotted path.
///
/// Keys present only in the overlay are legitimate additions and keys present
/// only in the base are correctly omitted; neither is reported. Findings come
/// back in sorted path order, following the table's iteration order.
pub fn duplicate_keys(base: &FlatTable, overlay: &FlatTable) -> Vec<DuplicateFinding> {
    let mut findings = Vec::new();

    for (path, value) in overlay {
        if base.get(path).is_some_and(|base_value| base_value == value) {
            findings.push(DuplicateFinding::new(path, value.clone()));
        }
    }

    findings
}
