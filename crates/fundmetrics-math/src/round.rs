//! Fixed-decimal rounding for reportable figures.

/// Rounds `x` to `decimals` decimal places, half away from zero.
///
/// The return metrics report at fixed precisions (3 decimals for rates,
/// 6 for XIRR, 2/4 for SIP money and units); this is the one rounding
/// rule they all share.
///
/// # Example
///
/// ```rust
/// use fundmetrics_math::round_to;
///
/// assert_eq!(round_to(0.123456, 3), 0.123);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[must_use]
pub fn round_to(x: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (x * factor).round() / factor
}
