use crate::error::AnalyticsError;
use crate::math::{percentage, ratio_or_zero, try_add};
use core_types::TradeRecord;
use rust_decimal::Decimal;

/// Counts and raw P&L sums shared by every later stage. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreAggregates {
    pub total_trades: usize,
    /// `resultUsd > 0`.
    pub profitable_trades: usize,
    /// `resultUsd < 0`.
    pub losing_trades: usize,
    /// `resultUsd == 0`; counted in neither of the above.
    pub breakeven_trades: usize,
    /// Percentage of all trades that were profitable.
    pub win_rate: Decimal,
    pub total_pnl: Decimal,
    pub gross_profit: Decimal,
    /// Magnitude of the summed losses.
    pub gross_loss: Decimal,
    pub average_win: Decimal,
    /// Magnitude of the mean loss.
    pub average_loss: Decimal,
    /// `average_win / average_loss`, zero without losses.
    pub profit_factor: Decimal,
    /// Highest `resultUsd`, whatever its sign.
    pub largest_win: Decimal,
    /// Lowest `resultUsd`, whatever its sign.
    pub largest_loss: Decimal,
}

pub fn aggregate(trades: &[TradeRecord]) -> Result<CoreAggregates, AnalyticsError> {
    let mut profitable_trades = 0;
    let mut losing_trades = 0;
    let mut total_pnl = Decimal::ZERO;
    let mut gross_profit = Decimal::ZERO;
    let mut gross_loss = Decimal::ZERO;

    for trade in trades {
        let pnl = trade.pnl();
        total_pnl = try_add(total_pnl, pnl, "total_pnl")?;

        if trade.is_win() {
            gross_profit = try_add(gross_profit, pnl, "gross_profit")?;
            profitable_trades += 1;
        } else if trade.is_loss() {
            gross_loss = try_add(gross_loss, pnl.abs(), "gross_loss")?;
            losing_trades += 1;
        }
    }

    let total_trades = trades.len();
    let average_win = ratio_or_zero(gross_profit, Decimal::from(profitable_trades), "average_win")?;
    let average_loss = ratio_or_zero(gross_loss, Decimal::from(losing_trades), "average_loss")?;

    Ok(CoreAggregates {
        total_trades,
        profitable_trades,
        losing_trades,
        breakeven_trades: total_trades - profitable_trades - losing_trades,
        win_rate: percentage(profitable_trades, total_trades),
        total_pnl,
        gross_profit,
        gross_loss,
        average_win,
        average_loss,
        profit_factor: ratio_or_zero(average_win, average_loss, "profit_factor")?,
        largest_win: trades.iter().map(TradeRecord::pnl).max().unwrap_or_default(),
        largest_loss: trades.iter().map(TradeRecord::pnl).min().unwrap_or_default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::trades;
    use rust_decimal_macros::dec;

    #[test]
    fn single_winner() {
        let core = aggregate(&trades(&[dec!(100)])).unwrap();

        assert_eq!(core.total_trades, 1);
        assert_eq!(core.profitable_trades, 1);
        assert_eq!(core.losing_trades, 0);
        assert_eq!(core.win_rate, dec!(100));
        assert_eq!(core.total_pnl, dec!(100));
        assert_eq!(core.average_loss, Decimal::ZERO);
        assert_eq!(core.profit_factor, Decimal::ZERO);
        assert_eq!(core.largest_win, dec!(100));
        assert_eq!(core.largest_loss, dec!(100));
    }

    #[test]
    fn win_and_loss() {
        let core = aggregate(&trades(&[dec!(100), dec!(-50)])).unwrap();

        assert_eq!(core.win_rate, dec!(50));
        assert_eq!(core.total_pnl, dec!(50));
        assert_eq!(core.average_win, dec!(100));
        assert_eq!(core.average_loss, dec!(50));
        assert_eq!(core.profit_factor, dec!(2));
        assert_eq!(core.gross_profit, dec!(100));
        assert_eq!(core.gross_loss, dec!(50));
        assert_eq!(core.largest_loss, dec!(-50));
    }

    #[test]
    fn breakeven_trades_are_neither_wins_nor_losses() {
        let core = aggregate(&trades(&[dec!(10), dec!(0), dec!(-5), dec!(0)])).unwrap();

        assert_eq!(core.total_trades, 4);
        assert_eq!(core.profitable_trades, 1);
        assert_eq!(core.losing_trades, 1);
        assert_eq!(core.breakeven_trades, 2);
        assert_eq!(core.win_rate, dec!(25));
    }

    #[test]
    fn averages_use_each_subset() {
        let core = aggregate(&trades(&[dec!(30), dec!(10), dec!(-20), dec!(-40), dec!(-30)])).unwrap();

        assert_eq!(core.average_win, dec!(20));
        assert_eq!(core.average_loss, dec!(30));
        assert_eq!(crate::math::round2(core.profit_factor), dec!(0.67));
    }

    #[test]
    fn totals_beyond_decimal_range_are_an_error() {
        let result = aggregate(&trades(&[Decimal::MAX, Decimal::MAX]));
        assert!(matches!(result, Err(AnalyticsError::Calculation(_))));
    }
}
