use crate::report::{CurrentStreak, StreakKind};
use core_types::TradeRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakSummary {
    pub longest_win_streak: usize,
    pub longest_loss_streak: usize,
    pub current_streak: CurrentStreak,
}

/// Scans `sequence` once, in the order given.
///
/// Only a strictly positive result extends a winning run; a breakeven trade
/// extends the losing run. This differs from the win/loss partition of the core
/// aggregates, where breakeven trades count as neither.
pub fn analyze(sequence: &[TradeRecord]) -> StreakSummary {
    let mut current_win_streak = 0;
    let mut current_loss_streak = 0;
    let mut longest_win_streak = 0;
    let mut longest_loss_streak = 0;

    for trade in sequence {
        if trade.is_win() {
            current_win_streak += 1;
            current_loss_streak = 0;
            longest_win_streak = longest_win_streak.max(current_win_streak);
        } else {
            current_loss_streak += 1;
            current_win_streak = 0;
            longest_loss_streak = longest_loss_streak.max(current_loss_streak);
        }
    }

    let current_streak = if current_win_streak > 0 {
        CurrentStreak {
            kind: StreakKind::Win,
            count: current_win_streak,
        }
    } else if current_loss_streak > 0 {
        CurrentStreak {
            kind: StreakKind::Loss,
            count: current_loss_streak,
        }
    } else {
        CurrentStreak {
            kind: StreakKind::None,
            count: 0,
        }
    };

    StreakSummary {
        longest_win_streak,
        longest_loss_streak,
        current_streak,
    }
}
