use crate::error::AnalyticsError;
use crate::math::{mean, percentage, ratio_or_zero, sqrt, try_add, try_mul, try_sub};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Psychological metrics and their correlation with results. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct PsychologyStatistics {
    pub average_confidence_before: Decimal,
    pub average_discipline: Decimal,
    pub plan_follow_rate: Decimal,
    pub confidence_correlation: Decimal,
    pub discipline_correlation: Decimal,
    pub emotional_patterns: BTreeMap<String, usize>,
}

const SCORE_RANGE: std::ops::RangeInclusive<i32> = 1..=10;

const METRIC: &str = "correlation";

/// Pearson correlation coefficient of two equal-length series.
///
/// `r = (nΣxy − ΣxΣy) / sqrt((nΣx² − (Σx)²)(nΣy² − (Σy)²))`, resolving to zero for
/// an empty or constant series.
pub fn pearson(xs: &[Decimal], ys: &[Decimal]) -> Result<Decimal, AnalyticsError> {
    if xs.len() != ys.len() {
        return Err(AnalyticsError::Calculation(format!(
            "correlation needs equal-length series, got {} and {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let n = Decimal::from(xs.len());
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
        Decimal::ZERO,
    );
    for (&x, &y) in xs.iter().zip(ys) {
        sum_x = try_add(sum_x, x, METRIC)?;
        sum_y = try_add(sum_y, y, METRIC)?;
        sum_xy = try_add(sum_xy, try_mul(x, y, METRIC)?, METRIC)?;
        sum_x2 = try_add(sum_x2, try_mul(x, x, METRIC)?, METRIC)?;
        sum_y2 = try_add(sum_y2, try_mul(y, y, METRIC)?, METRIC)?;
    }

    // n·Σab − Σa·Σb
    let spread = |sum_ab: Decimal, sum_a: Decimal, sum_b: Decimal| {
        try_sub(
            try_mul(n, sum_ab, METRIC)?,
            try_mul(sum_a, sum_b, METRIC)?,
            METRIC,
        )
    };
    let numerator = spread(sum_xy, sum_x, sum_y)?;
    let spread_x = spread(sum_x2, sum_x, sum_x)?;
    let spread_y = spread(sum_y2, sum_y, sum_y)?;
    if spread_x <= Decimal::ZERO || spread_y <= Decimal::ZERO {
        return Ok(Decimal::ZERO);
    }

    // Root each factor separately so the product cannot overflow.
    let denominator = try_mul(sqrt(spread_x, METRIC)?, sqrt(spread_y, METRIC)?, METRIC)?;
    let r = ratio_or_zero(numerator, denominator, METRIC)?;

    // Rounding in the roots can push a perfect fit a hair past ±1.
    Ok(r.clamp(Decimal::NEGATIVE_ONE, Decimal::ONE))
}

pub fn analyze(trades: &[TradeRecord]) -> Result<PsychologyStatistics, AnalyticsError> {
    let results: Vec<Decimal> = trades.iter().map(TradeRecord::pnl).collect();
    let confidence: Vec<Decimal> = trades
        .iter()
        .map(|t| Decimal::from(t.psychology.confidence_level))
        .collect();
    let discipline: Vec<Decimal> = trades
        .iter()
        .map(|t| Decimal::from(t.psychology.discipline_level))
        .collect();

    let out_of_range = trades
        .iter()
        .filter(|t| {
            !SCORE_RANGE.contains(&t.psychology.confidence_level)
                || !SCORE_RANGE.contains(&t.psychology.discipline_level)
        })
        .count();
    if out_of_range > 0 {
        tracing::warn!(
            trades = out_of_range,
            "Confidence or discipline scores outside 1-10; using them as recorded."
        );
    }

    let followed_plan = trades.iter().filter(|t| t.quality.followed_plan).count();

    Ok(PsychologyStatistics {
        average_confidence_before: mean(&confidence, "average_confidence_before")?,
        average_discipline: mean(&discipline, "average_discipline")?,
        plan_follow_rate: percentage(followed_plan, trades.len()),
        confidence_correlation: pearson(&confidence, &results)?,
        discipline_correlation: pearson(&discipline, &results)?,
        emotional_patterns: emotional_patterns(trades),
    })
}

/// How often each emotion label was recorded, before or after a trade.
fn emotional_patterns(trades: &[TradeRecord]) -> BTreeMap<String, usize> {
    let mut patterns = BTreeMap::new();
    let labels = trades
        .iter()
        .flat_map(|t| [&t.psychology.emotion_before, &t.psychology.emotion_after]);
    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        *patterns.entry(label.to_string()).or_insert(0) += 1;
    }
    patterns
}
