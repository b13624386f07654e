use crate::error::AnalyticsError;
use core_types::TradeRecord;

/// Rejects an empty history before any stage runs; otherwise hands it back untouched.
///
/// Field shape is enforced when records are parsed, so this is the only check
/// the engine makes.
pub fn require_trades(trades: &[TradeRecord]) -> Result<&[TradeRecord], AnalyticsError> {
    if trades.is_empty() {
        return Err(AnalyticsError::EmptyDataset);
    }
    Ok(trades)
}
