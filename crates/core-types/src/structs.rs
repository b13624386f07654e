use crate::enums::TradeType;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single closed position as recorded in the trading journal.
///
/// The journal API groups the fields into four wizard steps (`step1`..`step4`);
/// each step maps onto its own typed sub-structure here. Numeric leaves are
/// required, so a record missing a price or a psychology score is rejected when
/// the payload is parsed rather than flowing through the calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    /// When the record was created in the journal (not the trade date).
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub user: String,
    #[serde(rename = "step1")]
    pub entry: EntryContext,
    #[serde(rename = "step2")]
    pub execution: Execution,
    #[serde(rename = "step3")]
    pub psychology: Psychology,
    #[serde(rename = "step4")]
    pub quality: ExecutionQuality,
}

/// Where and why the position was opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryContext {
    pub date: NaiveDate,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// The instrument symbol (e.g., "EURUSD").
    pub asset: String,
    pub trade_type: TradeType,
    /// The strategy label the trader filed the trade under.
    #[serde(default)]
    pub setup: String,
    #[serde(default)]
    pub account_id: String,
}

/// Prices and the realized result of the position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Execution {
    pub entry_price: Decimal,
    pub exit_price: Decimal,
    pub stop_loss: Decimal,
    pub take_profit: Decimal,
    /// Realized P&L in USD, signed.
    pub result_usd: Decimal,
}

/// The trader's self-assessment around the trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Psychology {
    #[serde(default)]
    pub emotion_before: String,
    #[serde(default)]
    pub emotion_after: String,
    /// Expected in 1..=10, not enforced.
    pub confidence_level: i32,
    /// Expected in 1..=10, not enforced.
    pub discipline_level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionQuality {
    pub followed_plan: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub media_url: Option<String>,
}

impl TradeRecord {
    /// The realized P&L of the trade.
    pub fn pnl(&self) -> Decimal {
        self.execution.result_usd
    }

    pub fn is_win(&self) -> bool {
        self.execution.result_usd > Decimal::ZERO
    }

    pub fn is_loss(&self) -> bool {
        self.execution.result_usd < Decimal::ZERO
    }

    pub fn is_breakeven(&self) -> bool {
        self.execution.result_usd.is_zero()
    }

    /// The moment the trade was taken, used to order a history chronologically.
    /// A missing time sorts to the start of the day.
    pub fn executed_at(&self) -> NaiveDateTime {
        self.entry
            .date
            .and_time(self.entry.time.unwrap_or_default())
    }
}
