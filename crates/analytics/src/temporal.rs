use crate::error::AnalyticsError;
use crate::math::{percentage, try_add};
use crate::report::{MonthlyActivity, WeekdayPerformance};
use chrono::{Datelike, Weekday};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TemporalStatistics {
    pub trades_per_month: Vec<MonthlyActivity>,
    pub performance_by_day_of_week: Vec<WeekdayPerformance>,
}

/// Groups the history by the month and weekday of `step1.date`.
///
/// Months come out oldest first; weekdays Monday to Sunday, skipping days with no
/// trades.
pub fn analyze(trades: &[TradeRecord]) -> Result<TemporalStatistics, AnalyticsError> {
    Ok(TemporalStatistics {
        trades_per_month: trades_per_month(trades)?,
        performance_by_day_of_week: performance_by_day_of_week(trades)?,
    })
}

fn month_label(trade: &TradeRecord) -> String {
    trade.entry.date.format("%B %Y").to_string()
}

fn weekday_label(trade: &TradeRecord) -> String {
    trade.entry.date.format("%A").to_string()
}

fn trades_per_month(trades: &[TradeRecord]) -> Result<Vec<MonthlyActivity>, AnalyticsError> {
    let mut months: BTreeMap<(i32, u32), MonthlyActivity> = BTreeMap::new();
    for trade in trades {
        let date = trade.entry.date;
        let month = months
            .entry((date.year(), date.month()))
            .or_insert_with(|| MonthlyActivity {
                month: month_label(trade),
                trades: 0,
                pnl: Decimal::ZERO,
            });
        month.trades += 1;
        month.pnl = try_add(month.pnl, trade.pnl(), "monthly_pnl")?;
    }
    Ok(months.into_values().collect())
}

fn performance_by_day_of_week(
    trades: &[TradeRecord],
) -> Result<Vec<WeekdayPerformance>, AnalyticsError> {
    let mut days: BTreeMap<u32, WeekdayPerformance> = BTreeMap::new();
    for trade in trades {
        let weekday: Weekday = trade.entry.date.weekday();
        let day = days
            .entry(weekday.num_days_from_monday())
            .or_insert_with(|| WeekdayPerformance {
                day: weekday_label(trade),
                trades: 0,
                pnl: Decimal::ZERO,
                win_rate: Decimal::ZERO,
            });
        day.trades += 1;
        day.pnl = try_add(day.pnl, trade.pnl(), "weekday_pnl")?;
    }

    // Win rate is a second pass over the full history, filtered by day label.
    Ok(days
        .into_values()
        .map(|mut day| {
            let on_day: Vec<&TradeRecord> = trades
                .iter()
                .filter(|t| weekday_label(t) == day.day)
                .collect();
            let wins = on_day.iter().filter(|t| t.is_win()).count();
            day.win_rate = percentage(wins, on_day.len());
            day
        })
        .collect())
}
