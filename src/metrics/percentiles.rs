/// 95th percentile, in whole percent.
pub const PERCENTILE_P95: u64 = 95;
/// Divisor turning whole percent into a fraction.
const PERCENT_DIVISOR: u64 = 100;

/// Zero-based rank of the "lower" percentile in a sorted sample of `count`
/// values: `floor(percentile * (count - 1) / 100)`.
///
/// Never interpolates, so the rank always points at an observed value.
#[must_use]
pub fn lower_rank(count: usize, percentile: u64) -> Option<usize> {
    if count == 0 {
        return None;
    }
    let last = count.saturating_sub(1) as u64;
    let rank = percentile
        .min(PERCENT_DIVISOR)
        .saturating_mul(last)
        .checked_div(PERCENT_DIVISOR)
        .unwrap_or(0);
    Some(usize::try_from(rank).unwrap_or_else(|_| count.saturating_sub(1)))
}

/// Selects the "lower" percentile from ascending-sorted `values`.
#[must_use]
pub fn lower_percentile(sorted: &[f64], percentile: u64) -> Option<f64> {
    let rank = lower_rank(sorted.len(), percentile)?;
    sorted.get(rank).copied()
}
