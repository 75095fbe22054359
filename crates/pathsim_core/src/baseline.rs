//! Fixed-duration baseline pathway.
//!
//! The baseline is the intensive program the simulated pathway is compared
//! against. It is not simulated; its length is a constant-time weeks-to-
//! months conversion.

/// Average weeks per month used for the conversion.
pub const WEEKS_PER_MONTH: f64 = 4.345;

/// Reference length of the fixed-duration intensive program, in weeks.
pub const DEFAULT_FIXED_PATHWAY_WEEKS: f64 = 26.0;

/// Length of a fixed-duration pathway in months.
#[must_use]
pub fn fixed_pathway_months(fixed_weeks: f64) -> f64 {
    fixed_weeks / WEEKS_PER_MONTH
}
