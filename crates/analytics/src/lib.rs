//! # Trading Performance Analytics
//!
//! This crate turns a trader's history of closed positions into a `TradingMetrics`
//! snapshot: win/loss aggregates, risk-adjusted ratios, streaks, psychological
//! correlations and categorical rankings.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No I/O and no global state. The crate depends only on
//!   `core-types` for its input and `configuration` for its settings.
//! - **Stage Decomposition:** Each metric family is a separate function over the
//!   same immutable trade slice (`aggregator`, `risk`, `streaks`, `psychology`,
//!   `categories`, `tags`, `temporal`). Only `risk` reads another stage's output.
//!   The `assembler` merges the results and applies the 2 dp rounding.
//! - **Zero, not Undefined:** Every ratio with a zero denominator resolves to 0.
//!   The only rejected input is an empty history.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: Orchestrates the stages.
//! - `TradingMetrics`: The snapshot handed back to the caller.
//! - `AnalyticsError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod aggregator;
pub mod assembler;
pub mod categories;
pub mod engine;
pub mod error;
pub mod guard;
mod math;
pub mod psychology;
pub mod report;
pub mod risk;
pub mod streaks;
pub mod tags;
pub mod temporal;

#[cfg(test)]
mod test_support;

// Re-export the key components to create a clean, public-facing API.
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use math::round2;
pub use report::{
    CategoryPerformance, CurrentStreak, MonthlyActivity, RiskRewardBucket, StreakKind, TagProfit,
    TagUsage, TradingMetrics, WeekdayPerformance,
};
