use crate::error::CoreError;
use crate::structs::TradeRecord;
use serde_json::Value;

/// A trade history as handed over by the trade-fetch layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeBatch {
    /// The count the payload declared, if it came wrapped as `{ count, trades }`.
    pub declared_count: Option<usize>,
    pub trades: Vec<TradeRecord>,
}

/// Parses a trade history payload.
///
/// Two shapes are accepted: a bare JSON array of records, or an object with a
/// `trades` array and an optional `count`. A `null` or missing `trades` yields an
/// empty batch; rejecting that is the analytics engine's job.
pub fn parse_trades(json: &str) -> Result<TradeBatch, CoreError> {
    let payload: Value = serde_json::from_str(json)?;

    match payload {
        Value::Array(_) => Ok(TradeBatch {
            declared_count: None,
            trades: serde_json::from_value(payload)?,
        }),
        Value::Object(mut map) => {
            let declared_count = match map.remove("count") {
                None | Some(Value::Null) => None,
                Some(value) => Some(serde_json::from_value(value).map_err(|e| {
                    CoreError::InvalidInput("count".to_string(), e.to_string())
                })?),
            };
            let trades = match map.remove("trades") {
                None | Some(Value::Null) => Vec::new(),
                Some(value) => serde_json::from_value(value)?,
            };
            if let Some(count) = declared_count {
                if count != trades.len() {
                    tracing::warn!(
                        declared = count,
                        actual = trades.len(),
                        "Declared trade count does not match the number of records."
                    );
                }
            }
            Ok(TradeBatch {
                declared_count,
                trades,
            })
        }
        other => Err(CoreError::InvalidInput(
            "payload".to_string(),
            format!("expected an array or an object, found {}", kind_of(&other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
