use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The direction label a trader attached to a position.
///
/// The journal lets users pick either the order-side vocabulary (buy/sell) or the
/// position vocabulary (long/short), so all four are kept distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
    Long,
    Short,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::Buy => "buy",
            TradeType::Sell => "sell",
            TradeType::Long => "long",
            TradeType::Short => "short",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "buy" => Ok(TradeType::Buy),
            "sell" => Ok(TradeType::Sell),
            "long" => Ok(TradeType::Long),
            "short" => Ok(TradeType::Short),
            other => Err(CoreError::InvalidInput(
                "tradeType".to_string(),
                format!("unknown trade type '{other}'"),
            )),
        }
    }
}

impl TryFrom<String> for TradeType {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_any_case() {
        assert_eq!("BUY".parse::<TradeType>().unwrap(), TradeType::Buy);
        assert_eq!(" Short ".parse::<TradeType>().unwrap(), TradeType::Short);
        assert!("hedge".parse::<TradeType>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&TradeType::Long).unwrap();
        assert_eq!(json, "\"long\"");
        let back: TradeType = serde_json::from_str("\"Sell\"").unwrap();
        assert_eq!(back, TradeType::Sell);
    }
}
