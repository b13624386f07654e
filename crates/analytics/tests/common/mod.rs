#![allow(dead_code)]

use chrono::NaiveDate;
use core_types::{EntryContext, Execution, ExecutionQuality, Psychology, TradeRecord, TradeType};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A long EURUSD trade, 1:2 risk/reward, opened on 2024-01-01 plus `offset` days.
pub fn trade(offset: u64, result_usd: Decimal) -> TradeRecord {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .checked_add_days(chrono::Days::new(offset))
        .unwrap();
    TradeRecord {
        id: format!("trade-{offset}"),
        date: None,
        user: "trader".to_string(),
        entry: EntryContext {
            date,
            time: None,
            asset: "EURUSD".to_string(),
            trade_type: TradeType::Long,
            setup: "Breakout".to_string(),
            account_id: "main".to_string(),
        },
        execution: Execution {
            entry_price: dec!(100),
            exit_price: dec!(100) + result_usd,
            stop_loss: dec!(95),
            take_profit: dec!(110),
            result_usd,
        },
        psychology: Psychology {
            emotion_before: "focused".to_string(),
            emotion_after: "calm".to_string(),
            confidence_level: 6,
            discipline_level: 7,
        },
        quality: ExecutionQuality {
            followed_plan: true,
            tags: Vec::new(),
            notes: String::new(),
            media_url: None,
        },
    }
}

/// One trade per day, in order.
pub fn history(results: &[Decimal]) -> Vec<TradeRecord> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| trade(i as u64, *r))
        .collect()
}

/// A varied two-week history touching every metric family.
pub fn journal() -> Vec<TradeRecord> {
    let rows: [(&str, &str, TradeType, Decimal, i32, i32, bool, &[&str]); 8] = [
        ("EURUSD", "Breakout", TradeType::Long, dec!(120.50), 8, 9, true, &["trend", "london"]),
        ("BTCUSD", "Reversal", TradeType::Short, dec!(-75.25), 4, 5, false, &["fomo"]),
        ("EURUSD", "Pullback", TradeType::Buy, dec!(60), 7, 8, true, &["trend"]),
        ("XAUUSD", "Breakout", TradeType::Sell, dec!(0), 5, 6, true, &[]),
        ("BTCUSD", "Breakout", TradeType::Long, dec!(210), 9, 9, true, &["trend", "news"]),
        ("XAUUSD", "Reversal", TradeType::Short, dec!(-40), 3, 4, false, &["fomo", "news"]),
        ("EURUSD", "Pullback", TradeType::Long, dec!(-15.75), 6, 7, true, &["london"]),
        ("BTCUSD", "Breakout", TradeType::Long, dec!(95), 8, 8, true, &["trend"]),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (asset, setup, kind, result, confidence, discipline, plan, tags))| {
            let mut t = trade(i as u64 * 2, *result);
            t.entry.asset = asset.to_string();
            t.entry.setup = setup.to_string();
            t.entry.trade_type = *kind;
            t.psychology.confidence_level = *confidence;
            t.psychology.discipline_level = *discipline;
            t.quality.followed_plan = *plan;
            t.quality.tags = tags.iter().map(|s| s.to_string()).collect();
            t
        })
        .collect()
}
