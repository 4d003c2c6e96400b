//! Severity-weighted compliance score

use shared_types::Issue;

/// Points deducted per unit of severity weight
pub const POINTS_PER_WEIGHT: u32 = 5;

pub const MAX_SCORE: u8 = 100;

/// 100 minus five points per weight unit (Critical=3, Major=2, Minor=1),
/// floored at zero
pub fn calculate_compliance_score(issues: &[Issue]) -> u8 {
    let deductions: u32 = issues.iter().map(|i| i.severity.weight()).sum();
    let penalty = deductions.saturating_mul(POINTS_PER_WEIGHT);
    u32::from(MAX_SCORE).saturating_sub(penalty) as u8
}
