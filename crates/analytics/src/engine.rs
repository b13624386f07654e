use crate::assembler::{StageOutputs, assemble};
use crate::error::AnalyticsError;
use crate::report::TradingMetrics;
use crate::{aggregator, categories, guard, psychology, risk, streaks, tags, temporal};
use configuration::{AnalyticsSettings, TradeOrdering};
use core_types::TradeRecord;
use std::borrow::Cow;

/// A stateless calculator for deriving performance metrics from a trade history.
#[derive(Debug, Clone, Default)]
pub struct AnalyticsEngine {
    settings: AnalyticsSettings,
}

impl AnalyticsEngine {
    pub fn new(settings: AnalyticsSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AnalyticsSettings {
        &self.settings
    }

    /// The main entry point for calculating performance metrics.
    ///
    /// # Arguments
    ///
    /// * `trades` - Every closed trade of the history. Drawdown and streaks read it
    ///   in sequence, so with `TradeOrdering::AsGiven` it must already be
    ///   chronological; `TradeOrdering::Chronological` sorts a copy first.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `TradingMetrics`, `AnalyticsError::EmptyDataset`
    /// when there is nothing to analyze, or `AnalyticsError::Calculation` when a
    /// figure falls outside the decimal range.
    pub fn calculate(&self, trades: &[TradeRecord]) -> Result<TradingMetrics, AnalyticsError> {
        let trades = guard::require_trades(trades)?;
        let sequence = self.sequence(trades);

        let core = aggregator::aggregate(trades)?;
        if core.breakeven_trades > 0 {
            // Breakeven trades are neither wins nor losses in the aggregates but
            // extend losing streaks.
            tracing::warn!(
                breakeven = core.breakeven_trades,
                "History contains breakeven trades; they count as losses for streaks only."
            );
        }

        let risk = risk::analyze(trades, &sequence, &core)?;
        let streaks = streaks::analyze(&sequence);
        let psychology = psychology::analyze(trades)?;
        let categories = categories::analyze(trades)?;
        let temporal = temporal::analyze(trades)?;
        let tags = tags::analyze(
            trades,
            self.settings.most_used_tags_limit,
            self.settings.most_profitable_tags_limit,
        )?;

        tracing::debug!(
            total_trades = core.total_trades,
            win_rate = %core.win_rate,
            total_pnl = %core.total_pnl,
            "Trading metrics calculated."
        );

        Ok(assemble(StageOutputs {
            core,
            risk,
            streaks,
            psychology,
            categories,
            temporal,
            tags,
        }))
    }

    /// The history in the order the order-dependent stages should read it.
    fn sequence<'a>(&self, trades: &'a [TradeRecord]) -> Cow<'a, [TradeRecord]> {
        match self.settings.ordering {
            TradeOrdering::AsGiven => {
                if !is_chronological(trades) {
                    tracing::warn!(
                        "Trade history is not in chronological order; drawdown and streaks follow the order given."
                    );
                }
                Cow::Borrowed(trades)
            }
            TradeOrdering::Chronological => {
                let mut sorted = trades.to_vec();
                // Stable: trades at the same moment keep their relative order.
                sorted.sort_by_key(TradeRecord::executed_at);
                Cow::Owned(sorted)
            }
        }
    }
}

fn is_chronological(trades: &[TradeRecord]) -> bool {
    trades
        .windows(2)
        .all(|w| w[0].executed_at() <= w[1].executed_at())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::StreakKind;
    use crate::test_support::{day, trades};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn out_of_order() -> Vec<TradeRecord> {
        // Recorded newest first.
        let mut history = trades(&[dec!(-60), dec!(-40), dec!(100)]);
        history[0].entry.date = day(2024, 1, 3);
        history[1].entry.date = day(2024, 1, 2);
        history[2].entry.date = day(2024, 1, 1);
        history
    }

    #[test]
    fn empty_history_fails() {
        let engine = AnalyticsEngine::default();
        assert_eq!(engine.calculate(&[]), Err(AnalyticsError::EmptyDataset));
    }

    #[test]
    fn as_given_uses_input_order() {
        let metrics = AnalyticsEngine::default().calculate(&out_of_order()).unwrap();

        // -60, -100, 0: peak stays at zero.
        assert_eq!(metrics.max_drawdown, dec!(100));
        assert_eq!(metrics.current_streak.kind, StreakKind::Win);
    }

    #[test]
    fn chronological_sorts_before_sequencing() {
        let engine = AnalyticsEngine::new(AnalyticsSettings {
            ordering: TradeOrdering::Chronological,
            ..AnalyticsSettings::default()
        });
        let metrics = engine.calculate(&out_of_order()).unwrap();

        // 100, 60, 0
        assert_eq!(metrics.max_drawdown, dec!(100));
        assert_eq!(metrics.longest_loss_streak, 2);
        assert_eq!(metrics.current_streak.kind, StreakKind::Loss);
        assert_eq!(metrics.current_streak.count, 2);
        // Order-independent figures do not move.
        assert_eq!(metrics.total_pnl, Decimal::ZERO);
        assert_eq!(metrics.recovery_factor, Decimal::ZERO);
    }

    #[test]
    fn tag_limits_come_from_settings() {
        let mut history = trades(&[dec!(5)]);
        history[0].quality.tags = vec!["a".into(), "b".into(), "c".into()];
        let engine = AnalyticsEngine::new(AnalyticsSettings {
            most_used_tags_limit: 2,
            most_profitable_tags_limit: 1,
            ..AnalyticsSettings::default()
        });
        let metrics = engine.calculate(&history).unwrap();

        assert_eq!(metrics.most_used_tags.len(), 2);
        assert_eq!(metrics.most_profitable_tags.len(), 1);
    }
}
