//! Trade fixtures for the unit tests.

use chrono::NaiveDate;
use core_types::{EntryContext, Execution, ExecutionQuality, Psychology, TradeRecord, TradeType};
use rust_decimal::Decimal;

/// A long EURUSD trade on 2024-01-01 with the given result and neutral defaults
/// everywhere else.
pub(crate) fn trade(result_usd: Decimal) -> TradeRecord {
    TradeRecord {
        id: "t".to_string(),
        date: None,
        user: "tester".to_string(),
        entry: EntryContext {
            date: day(2024, 1, 1),
            time: None,
            asset: "EURUSD".to_string(),
            trade_type: TradeType::Long,
            setup: "Breakout".to_string(),
            account_id: "acc".to_string(),
        },
        execution: Execution {
            entry_price: Decimal::from(100),
            exit_price: Decimal::from(100) + result_usd,
            stop_loss: Decimal::from(90),
            take_profit: Decimal::from(120),
            result_usd,
        },
        psychology: Psychology {
            emotion_before: "calm".to_string(),
            emotion_after: "calm".to_string(),
            confidence_level: 5,
            discipline_level: 5,
        },
        quality: ExecutionQuality {
            followed_plan: true,
            tags: Vec::new(),
            notes: String::new(),
            media_url: None,
        },
    }
}

pub(crate) fn trades(results: &[Decimal]) -> Vec<TradeRecord> {
    results.iter().map(|r| trade(*r)).collect()
}

pub(crate) fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}
