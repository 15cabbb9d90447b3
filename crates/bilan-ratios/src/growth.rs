//! Period-over-period growth.

/// Relative change of each value versus the one before it.
///
/// `out[i] = (values[i] - values[i - 1]) / values[i - 1]` and `out[0]` is
/// `None`. The denominator is deliberately not stabilized: a zero prior value
/// yields an infinity (or NaN when both values are zero), which is passed on
/// as data.
///
/// # Examples
///
/// ```
/// use bilan_ratios::period_over_period;
///
/// let growth = period_over_period([100.0, 150.0, 75.0]);
/// assert_eq!(growth, vec![None, Some(0.5), Some(-0.5)]);
/// ```
pub fn period_over_period<I>(values: I) -> Vec<Option<f64>>
where
    I: IntoIterator<Item = f64>,
{
    let mut previous: Option<f64> = None;
    values
        .into_iter()
        .map(|current| {
            let growth = previous.map(|prior| (current - prior) / prior);
            previous = Some(current);
            growth
        })
        .collect()
}
