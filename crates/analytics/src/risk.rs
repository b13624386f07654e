use crate::aggregator::CoreAggregates;
use crate::error::AnalyticsError;
use crate::math::{mean, ratio_or_zero, std_dev_around, try_add, try_mul, try_sub};
use crate::report::RiskRewardBucket;
use core_types::TradeRecord;
use rust_decimal::Decimal;

/// Risk-adjusted and distribution statistics. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskStatistics {
    pub average_risk_reward: Decimal,
    pub max_drawdown: Decimal,
    pub expectancy: Decimal,
    pub sharpe_ratio: Decimal,
    pub sortino_ratio: Decimal,
    pub recovery_factor: Decimal,
    /// Population standard deviation of `resultUsd`.
    pub volatility: Decimal,
    pub average_risk_per_trade: Decimal,
    pub average_reward_per_trade: Decimal,
    pub risk_reward_distribution: Vec<RiskRewardBucket>,
}

/// Upper bounds (exclusive) and labels of the risk/reward buckets, in report order.
const RISK_REWARD_BUCKETS: [(Option<i64>, &str); 4] = [
    (Some(1), "< 1:1"),
    (Some(2), "1:1 - 2:1"),
    (Some(3), "2:1 - 3:1"),
    (None, "3:1+"),
];

/// Price distance from entry to stop-loss.
pub fn risk(trade: &TradeRecord) -> Result<Decimal, AnalyticsError> {
    let e = &trade.execution;
    Ok(try_sub(e.entry_price, e.stop_loss, "risk")?.abs())
}

/// Price distance from entry to take-profit.
pub fn reward(trade: &TradeRecord) -> Result<Decimal, AnalyticsError> {
    let e = &trade.execution;
    Ok(try_sub(e.take_profit, e.entry_price, "reward")?.abs())
}

/// `reward / risk` for one trade, zero when the stop sits on the entry.
pub fn risk_reward_ratio(trade: &TradeRecord) -> Result<Decimal, AnalyticsError> {
    ratio_or_zero(reward(trade)?, risk(trade)?, "risk_reward_ratio")
}

/// Largest peak-to-trough fall of the cumulative P&L curve.
///
/// The curve starts flat at zero and follows `sequence` in the order given, so the
/// caller is responsible for passing a chronological history.
pub fn max_drawdown(sequence: &[TradeRecord]) -> Result<Decimal, AnalyticsError> {
    let mut cumulative = Decimal::ZERO;
    let mut peak = Decimal::ZERO;
    let mut max_drawdown = Decimal::ZERO;

    for trade in sequence {
        cumulative = try_add(cumulative, trade.pnl(), "max_drawdown")?;
        if cumulative > peak {
            peak = cumulative;
        }
        let drawdown = try_sub(peak, cumulative, "max_drawdown")?;
        if drawdown > max_drawdown {
            max_drawdown = drawdown;
        }
    }

    Ok(max_drawdown)
}

/// Computes the risk family.
///
/// `trades` feeds the order-independent figures; `sequence` is the same history
/// in chronological order and only drives the drawdown.
pub fn analyze(
    trades: &[TradeRecord],
    sequence: &[TradeRecord],
    core: &CoreAggregates,
) -> Result<RiskStatistics, AnalyticsError> {
    let ratios = trades
        .iter()
        .map(risk_reward_ratio)
        .collect::<Result<Vec<_>, _>>()?;
    let risks = trades.iter().map(risk).collect::<Result<Vec<_>, _>>()?;
    let rewards = trades.iter().map(reward).collect::<Result<Vec<_>, _>>()?;

    // --- Drawdown ---
    let max_drawdown = max_drawdown(sequence)?;
    let recovery_factor = ratio_or_zero(core.total_pnl, max_drawdown, "recovery_factor")?;

    // --- Expectancy ---
    let win_probability = core.win_rate / Decimal::ONE_HUNDRED;
    let expectancy = try_sub(
        try_mul(win_probability, core.average_win, "expectancy")?,
        try_mul(Decimal::ONE - win_probability, core.average_loss, "expectancy")?,
        "expectancy",
    )?;

    // --- Sharpe / Sortino ---
    // Per-trade results, not annualized, no risk-free rate.
    let results: Vec<Decimal> = trades.iter().map(TradeRecord::pnl).collect();
    let mean_result = mean(&results, "mean_result")?;
    let volatility = std_dev_around(&results, mean_result, "volatility")?;
    let sharpe_ratio = ratio_or_zero(mean_result, volatility, "sharpe_ratio")?;

    // Downside is measured against the series mean, not against zero.
    let downside: Vec<Decimal> = results
        .iter()
        .copied()
        .filter(|r| *r < mean_result)
        .collect();
    let downside_deviation = std_dev_around(&downside, mean_result, "sortino_ratio")?;
    let sortino_ratio = ratio_or_zero(mean_result, downside_deviation, "sortino_ratio")?;

    tracing::debug!(
        %max_drawdown,
        %volatility,
        %downside_deviation,
        "Risk statistics computed."
    );

    Ok(RiskStatistics {
        average_risk_reward: mean(&ratios, "average_risk_reward")?,
        max_drawdown,
        expectancy,
        sharpe_ratio,
        sortino_ratio,
        recovery_factor,
        volatility,
        average_risk_per_trade: mean(&risks, "average_risk_per_trade")?,
        average_reward_per_trade: mean(&rewards, "average_reward_per_trade")?,
        risk_reward_distribution: distribute(&ratios),
    })
}

fn distribute(ratios: &[Decimal]) -> Vec<RiskRewardBucket> {
    let mut counts = [0usize; RISK_REWARD_BUCKETS.len()];
    for ratio in ratios {
        let index = RISK_REWARD_BUCKETS
            .iter()
            .position(|(upper, _)| upper.is_none_or(|upper| *ratio < Decimal::from(upper)))
            .unwrap_or(RISK_REWARD_BUCKETS.len() - 1);
        counts[index] += 1;
    }

    RISK_REWARD_BUCKETS
        .iter()
        .zip(counts)
        .map(|((_, label), count)| RiskRewardBucket {
            range: label.to_string(),
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;
    use crate::math::round2;
    use crate::test_support::{trade, trades};
    use rust_decimal_macros::dec;

    fn priced(entry: Decimal, stop: Decimal, target: Decimal) -> TradeRecord {
        let mut t = trade(dec!(10));
        t.execution.entry_price = entry;
        t.execution.stop_loss = stop;
        t.execution.take_profit = target;
        t
    }

    fn run(history: &[TradeRecord]) -> RiskStatistics {
        analyze(history, history, &aggregate(history).unwrap()).unwrap()
    }

    #[test]
    fn risk_reward_per_trade() {
        assert_eq!(risk_reward_ratio(&priced(dec!(100), dec!(95), dec!(115))), Ok(dec!(3)));
        // Short side: distances are absolute.
        assert_eq!(risk_reward_ratio(&priced(dec!(100), dec!(104), dec!(92))), Ok(dec!(2)));
    }

    #[test]
    fn zero_risk_trade_has_zero_ratio() {
        let flat = priced(dec!(100), dec!(100), dec!(110));
        assert_eq!(risk_reward_ratio(&flat), Ok(Decimal::ZERO));

        let history = vec![flat, priced(dec!(100), dec!(90), dec!(130))];
        let stats = run(&history);
        assert_eq!(stats.average_risk_reward, dec!(1.5));
        assert_eq!(stats.average_risk_per_trade, dec!(5));
        assert_eq!(stats.average_reward_per_trade, dec!(20));
    }

    #[test]
    fn drawdown_follows_sequence_order() {
        let history = trades(&[dec!(100), dec!(-30), dec!(-40), dec!(50), dec!(-10)]);
        assert_eq!(max_drawdown(&history), Ok(dec!(70)));

        let reordered = trades(&[dec!(100), dec!(50), dec!(-10), dec!(-30), dec!(-40)]);
        assert_eq!(max_drawdown(&reordered), Ok(dec!(80)));
    }

    #[test]
    fn drawdown_starts_from_flat_equity() {
        assert_eq!(max_drawdown(&trades(&[dec!(-25), dec!(10)])), Ok(dec!(25)));
        assert_eq!(max_drawdown(&trades(&[dec!(5), dec!(5)])), Ok(Decimal::ZERO));
    }

    #[test]
    fn recovery_factor_is_zero_without_drawdown() {
        let stats = run(&trades(&[dec!(10), dec!(20)]));
        assert_eq!(stats.max_drawdown, Decimal::ZERO);
        assert_eq!(stats.recovery_factor, Decimal::ZERO);

        let stats = run(&trades(&[dec!(100), dec!(-50), dec!(50)]));
        assert_eq!(stats.recovery_factor, dec!(2));
    }

    #[test]
    fn expectancy_weights_average_outcomes() {
        // 50% * 100 - 50% * 50
        let stats = run(&trades(&[dec!(100), dec!(-50)]));
        assert_eq!(stats.expectancy, dec!(25));
    }

    #[test]
    fn sharpe_and_sortino() {
        // mean 25, population sd 75, downside {-50}: sd around the mean 75
        let stats = run(&trades(&[dec!(100), dec!(-50)]));
        assert_eq!(round2(stats.volatility), dec!(75));
        assert_eq!(round2(stats.sharpe_ratio), dec!(0.33));
        assert_eq!(round2(stats.sortino_ratio), dec!(0.33));
    }

    #[test]
    fn constant_series_has_zero_ratios() {
        let stats = run(&trades(&[dec!(20), dec!(20), dec!(20)]));
        assert_eq!(stats.volatility, Decimal::ZERO);
        assert_eq!(stats.sharpe_ratio, Decimal::ZERO);
        assert_eq!(stats.sortino_ratio, Decimal::ZERO);
    }

    #[test]
    fn buckets_ratios() {
        let history = vec![
            priced(dec!(100), dec!(100), dec!(110)), // 0
            priced(dec!(100), dec!(90), dec!(105)),  // 0.5
            priced(dec!(100), dec!(90), dec!(110)),  // 1
            priced(dec!(100), dec!(90), dec!(125)),  // 2.5
            priced(dec!(100), dec!(90), dec!(130)),  // 3
        ];
        let stats = run(&history);
        let counts: Vec<(String, usize)> = stats
            .risk_reward_distribution
            .into_iter()
            .map(|b| (b.range, b.count))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("< 1:1".to_string(), 2),
                ("1:1 - 2:1".to_string(), 1),
                ("2:1 - 3:1".to_string(), 1),
                ("3:1+".to_string(), 1),
            ]
        );
    }

    #[test]
    fn ratio_against_a_vanishing_stop_is_an_error() {
        // reward 1e10 over risk 1e-20
        let tight = priced(
            Decimal::ZERO,
            dec!(0.00000000000000000001),
            dec!(10000000000),
        );
        assert!(matches!(
            risk_reward_ratio(&tight),
            Err(AnalyticsError::Calculation(_))
        ));
    }
}
