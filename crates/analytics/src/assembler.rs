use crate::aggregator::CoreAggregates;
use crate::categories::CategoryStatistics;
use crate::math::round2;
use crate::psychology::PsychologyStatistics;
use crate::report::{
    CategoryPerformance, MonthlyActivity, TagProfit, TradingMetrics, WeekdayPerformance,
};
use crate::risk::RiskStatistics;
use crate::streaks::StreakSummary;
use crate::tags::TagRankings;
use crate::temporal::TemporalStatistics;

/// Everything the stages produced for one history.
#[derive(Debug, Clone)]
pub struct StageOutputs {
    pub core: CoreAggregates,
    pub risk: RiskStatistics,
    pub streaks: StreakSummary,
    pub psychology: PsychologyStatistics,
    pub categories: CategoryStatistics,
    pub temporal: TemporalStatistics,
    pub tags: TagRankings,
}

/// Merges the stage outputs into the final snapshot, rounding every currency,
/// ratio and percentage to 2 dp. Cross-field consistency is not re-checked.
pub fn assemble(outputs: StageOutputs) -> TradingMetrics {
    let StageOutputs {
        core,
        risk,
        streaks,
        psychology,
        categories,
        temporal,
        tags,
    } = outputs;

    TradingMetrics {
        total_trades: core.total_trades,
        profitable_trades: core.profitable_trades,
        losing_trades: core.losing_trades,
        breakeven_trades: core.breakeven_trades,
        win_rate: round2(core.win_rate),

        total_pnl: round2(core.total_pnl),
        net_pnl: round2(core.total_pnl),
        gross_profit: round2(core.gross_profit),
        gross_loss: round2(core.gross_loss),
        average_win: round2(core.average_win),
        average_loss: round2(core.average_loss),
        profit_factor: round2(core.profit_factor),
        largest_win: round2(core.largest_win),
        largest_loss: round2(core.largest_loss),

        average_risk_reward: round2(risk.average_risk_reward),
        max_drawdown: round2(risk.max_drawdown),
        expectancy: round2(risk.expectancy),
        sharpe_ratio: round2(risk.sharpe_ratio),
        sortino_ratio: round2(risk.sortino_ratio),
        recovery_factor: round2(risk.recovery_factor),

        longest_win_streak: streaks.longest_win_streak,
        longest_loss_streak: streaks.longest_loss_streak,
        current_streak: streaks.current_streak,
        volatility: round2(risk.volatility),

        average_confidence_before: round2(psychology.average_confidence_before),
        average_discipline: round2(psychology.average_discipline),
        plan_follow_rate: round2(psychology.plan_follow_rate),
        confidence_correlation: round2(psychology.confidence_correlation),
        discipline_correlation: round2(psychology.discipline_correlation),
        emotional_patterns: psychology.emotional_patterns,

        asset_distribution: categories.asset_distribution,
        setup_distribution: categories.setup_distribution,
        trade_type_distribution: categories.trade_type_distribution,
        best_asset: categories.best_asset.map(round_category),
        best_setup: categories.best_setup.map(round_category),
        worst_asset: categories.worst_asset.map(round_category),
        worst_setup: categories.worst_setup.map(round_category),

        average_risk_per_trade: round2(risk.average_risk_per_trade),
        average_reward_per_trade: round2(risk.average_reward_per_trade),
        risk_reward_distribution: risk.risk_reward_distribution,

        trades_per_month: temporal
            .trades_per_month
            .into_iter()
            .map(|m| MonthlyActivity {
                pnl: round2(m.pnl),
                ..m
            })
            .collect(),
        performance_by_day_of_week: temporal
            .performance_by_day_of_week
            .into_iter()
            .map(|d| WeekdayPerformance {
                pnl: round2(d.pnl),
                win_rate: round2(d.win_rate),
                ..d
            })
            .collect(),

        most_used_tags: tags.most_used_tags,
        most_profitable_tags: tags
            .most_profitable_tags
            .into_iter()
            .map(|t| TagProfit {
                pnl: round2(t.pnl),
                ..t
            })
            .collect(),
    }
}

fn round_category(category: CategoryPerformance) -> CategoryPerformance {
    CategoryPerformance {
        win_rate: round2(category.win_rate),
        pnl: round2(category.pnl),
        ..category
    }
}
