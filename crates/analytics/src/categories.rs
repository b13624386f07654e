use crate::error::AnalyticsError;
use crate::math::{percentage, try_add};
use crate::report::CategoryPerformance;
use core_types::{TradeRecord, TradeType};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Frequency maps and best/worst performers per category. Values are unrounded.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStatistics {
    pub asset_distribution: BTreeMap<String, usize>,
    pub setup_distribution: BTreeMap<String, usize>,
    pub trade_type_distribution: BTreeMap<TradeType, usize>,
    pub best_asset: Option<CategoryPerformance>,
    pub worst_asset: Option<CategoryPerformance>,
    pub best_setup: Option<CategoryPerformance>,
    pub worst_setup: Option<CategoryPerformance>,
}

pub fn analyze(trades: &[TradeRecord]) -> Result<CategoryStatistics, AnalyticsError> {
    let assets = group_performance(trades, |t| &t.entry.asset)?;
    let setups = group_performance(trades, |t| &t.entry.setup)?;

    let mut trade_type_distribution = BTreeMap::new();
    for trade in trades {
        *trade_type_distribution
            .entry(trade.entry.trade_type)
            .or_insert(0) += 1;
    }

    let (best_asset, worst_asset) = rank(&assets);
    let (best_setup, worst_setup) = rank(&setups);

    Ok(CategoryStatistics {
        asset_distribution: distribution(&assets),
        setup_distribution: distribution(&setups),
        trade_type_distribution,
        best_asset,
        worst_asset,
        best_setup,
        worst_setup,
    })
}

/// Per-label totals, in the order each label first appears.
fn group_performance<F>(
    trades: &[TradeRecord],
    label: F,
) -> Result<Vec<CategoryPerformance>, AnalyticsError>
where
    F: Fn(&TradeRecord) -> &String,
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(CategoryPerformance, usize)> = Vec::new();

    for trade in trades {
        let name = label(trade).as_str();
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push((
                CategoryPerformance {
                    name: name.to_string(),
                    trades: 0,
                    win_rate: Decimal::ZERO,
                    pnl: Decimal::ZERO,
                },
                0,
            ));
            groups.len() - 1
        });
        let (group, wins) = &mut groups[slot];
        group.trades += 1;
        group.pnl = try_add(group.pnl, trade.pnl(), "category_pnl")?;
        if trade.is_win() {
            *wins += 1;
        }
    }

    Ok(groups
        .into_iter()
        .map(|(mut group, wins)| {
            group.win_rate = percentage(wins, group.trades);
            group
        })
        .collect())
}

fn distribution(groups: &[CategoryPerformance]) -> BTreeMap<String, usize> {
    groups.iter().map(|g| (g.name.clone(), g.trades)).collect()
}

/// Highest and lowest P&L group. On a tie the group seen first keeps its place.
fn rank(
    groups: &[CategoryPerformance],
) -> (Option<CategoryPerformance>, Option<CategoryPerformance>) {
    let mut best: Option<&CategoryPerformance> = None;
    let mut worst: Option<&CategoryPerformance> = None;

    for group in groups {
        if best.is_none_or(|b| group.pnl > b.pnl) {
            best = Some(group);
        }
        if worst.is_none_or(|w| group.pnl < w.pnl) {
            worst = Some(group);
        }
    }

    (best.cloned(), worst.cloned())
}
