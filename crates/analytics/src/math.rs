use crate::error::AnalyticsError;
use rust_decimal::prelude::*;

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// The error for a figure that falls outside the range `Decimal` can represent.
pub(crate) fn out_of_range(metric: &str) -> AnalyticsError {
    AnalyticsError::Calculation(format!("'{metric}' exceeds the representable decimal range"))
}

pub(crate) fn try_add(a: Decimal, b: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    a.checked_add(b).ok_or_else(|| out_of_range(metric))
}

pub(crate) fn try_sub(a: Decimal, b: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    a.checked_sub(b).ok_or_else(|| out_of_range(metric))
}

pub(crate) fn try_mul(a: Decimal, b: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    a.checked_mul(b).ok_or_else(|| out_of_range(metric))
}

pub(crate) fn try_sum(values: &[Decimal], metric: &str) -> Result<Decimal, AnalyticsError> {
    values
        .iter()
        .try_fold(Decimal::ZERO, |acc, v| try_add(acc, *v, metric))
}

/// Divides, resolving a zero denominator to zero instead of an undefined value.
pub(crate) fn ratio_or_zero(
    numerator: Decimal,
    denominator: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    if denominator.is_zero() {
        return Ok(Decimal::ZERO);
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| out_of_range(metric))
}

/// `part / whole * 100`, or zero for an empty whole.
pub(crate) fn percentage(part: usize, whole: usize) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(part) * HUNDRED / Decimal::from(whole)
}

/// Arithmetic mean, zero for an empty series.
pub(crate) fn mean(values: &[Decimal], metric: &str) -> Result<Decimal, AnalyticsError> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }
    ratio_or_zero(try_sum(values, metric)?, Decimal::from(values.len()), metric)
}

pub(crate) fn sqrt(value: Decimal, metric: &str) -> Result<Decimal, AnalyticsError> {
    value.sqrt().ok_or_else(|| {
        AnalyticsError::Calculation(format!(
            "failed to take the square root of {value} for '{metric}'"
        ))
    })
}

/// Population standard deviation of `values` around `center`.
pub(crate) fn std_dev_around(
    values: &[Decimal],
    center: Decimal,
    metric: &str,
) -> Result<Decimal, AnalyticsError> {
    if values.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let mut squares = Decimal::ZERO;
    for value in values {
        let deviation = try_sub(*value, center, metric)?;
        squares = try_add(squares, try_mul(deviation, deviation, metric)?, metric)?;
    }
    let variance = ratio_or_zero(squares, Decimal::from(values.len()), metric)?;
    sqrt(variance, metric)
}

/// The rounding applied to every currency, ratio and percentage in the snapshot:
/// two decimal places, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
