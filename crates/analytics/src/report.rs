use core_types::TradeType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The full performance snapshot of a trade history.
///
/// This struct is the final output of the `AnalyticsEngine`. It is rebuilt from
/// scratch on every call and serializes with the camelCase field names the
/// dashboard reads. Every currency, ratio and percentage is rounded to 2 dp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradingMetrics {
    // I. General Performance
    pub total_trades: usize,
    pub profitable_trades: usize,
    pub losing_trades: usize,
    pub breakeven_trades: usize,
    pub win_rate: Decimal,

    // II. Financial
    #[serde(rename = "totalPnL")]
    pub total_pnl: Decimal,
    #[serde(rename = "netPnL")]
    pub net_pnl: Decimal,
    pub gross_profit: Decimal,
    pub gross_loss: Decimal,
    pub average_win: Decimal,
    pub average_loss: Decimal,
    pub profit_factor: Decimal,
    pub largest_win: Decimal,
    pub largest_loss: Decimal,

    // III. Risk
    pub average_risk_reward: Decimal,
    pub max_drawdown: Decimal,
    pub expectancy: Decimal,
    pub sharpe_ratio: Decimal,
    pub sortino_ratio: Decimal,
    pub recovery_factor: Decimal,

    // IV. Consistency
    pub longest_win_streak: usize,
    pub longest_loss_streak: usize,
    pub current_streak: CurrentStreak,
    pub volatility: Decimal,

    // V. Psychology
    pub average_confidence_before: Decimal,
    pub average_discipline: Decimal,
    pub plan_follow_rate: Decimal,
    pub confidence_correlation: Decimal,
    pub discipline_correlation: Decimal,
    pub emotional_patterns: BTreeMap<String, usize>,

    // VI. Categorical
    pub asset_distribution: BTreeMap<String, usize>,
    pub setup_distribution: BTreeMap<String, usize>,
    pub trade_type_distribution: BTreeMap<TradeType, usize>,
    pub best_asset: Option<CategoryPerformance>,
    pub best_setup: Option<CategoryPerformance>,
    pub worst_asset: Option<CategoryPerformance>,
    pub worst_setup: Option<CategoryPerformance>,

    // VII. Risk Management
    pub average_risk_per_trade: Decimal,
    pub average_reward_per_trade: Decimal,
    pub risk_reward_distribution: Vec<RiskRewardBucket>,

    // VIII. Temporal
    pub trades_per_month: Vec<MonthlyActivity>,
    pub performance_by_day_of_week: Vec<WeekdayPerformance>,

    // IX. Tags
    pub most_used_tags: Vec<TagUsage>,
    pub most_profitable_tags: Vec<TagProfit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    Win,
    Loss,
    None,
}

impl StreakKind {
    /// The label used in serialized snapshots.
    pub fn as_str(&self) -> &'static str {
        match self {
            StreakKind::Win => "win",
            StreakKind::Loss => "loss",
            StreakKind::None => "none",
        }
    }
}

impl fmt::Display for StreakKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The run that is still open at the last trade of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentStreak {
    #[serde(rename = "type")]
    pub kind: StreakKind,
    pub count: usize,
}

/// How one asset or setup performed across the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPerformance {
    pub name: String,
    pub trades: usize,
    pub win_rate: Decimal,
    pub pnl: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskRewardBucket {
    pub range: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyActivity {
    /// e.g. "January 2024".
    pub month: String,
    pub trades: usize,
    pub pnl: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekdayPerformance {
    /// e.g. "Monday".
    pub day: String,
    pub trades: usize,
    pub pnl: Decimal,
    pub win_rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagUsage {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagProfit {
    pub tag: String,
    pub pnl: Decimal,
}
