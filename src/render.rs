use analytics::{CategoryPerformance, TradingMetrics};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Table};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::Display;

/// Prints the snapshot as one table per metric family.
pub fn print_report(m: &TradingMetrics) {
    section(
        "Performance",
        [
            ("Total trades", m.total_trades.to_string()),
            ("Profitable", m.profitable_trades.to_string()),
            ("Losing", m.losing_trades.to_string()),
            ("Breakeven", m.breakeven_trades.to_string()),
            ("Win rate", pct(m.win_rate)),
        ],
    );
    section(
        "Financial",
        [
            ("Net P&L", usd(m.net_pnl)),
            ("Gross profit", usd(m.gross_profit)),
            ("Gross loss", usd(m.gross_loss)),
            ("Average win", usd(m.average_win)),
            ("Average loss", usd(m.average_loss)),
            ("Profit factor", m.profit_factor.to_string()),
            ("Largest win", usd(m.largest_win)),
            ("Largest loss", usd(m.largest_loss)),
        ],
    );
    section(
        "Risk",
        [
            ("Average R:R", m.average_risk_reward.to_string()),
            ("Average risk / trade", m.average_risk_per_trade.to_string()),
            ("Average reward / trade", m.average_reward_per_trade.to_string()),
            ("Max drawdown", usd(m.max_drawdown)),
            ("Recovery factor", m.recovery_factor.to_string()),
            ("Expectancy", usd(m.expectancy)),
            ("Sharpe ratio", m.sharpe_ratio.to_string()),
            ("Sortino ratio", m.sortino_ratio.to_string()),
            ("Volatility", usd(m.volatility)),
        ],
    );
    section(
        "Consistency",
        [
            ("Longest win streak", m.longest_win_streak.to_string()),
            ("Longest loss streak", m.longest_loss_streak.to_string()),
            (
                "Current streak",
                format!("{} x{}", m.current_streak.kind, m.current_streak.count),
            ),
        ],
    );
    section(
        "Psychology",
        [
            ("Average confidence", m.average_confidence_before.to_string()),
            ("Average discipline", m.average_discipline.to_string()),
            ("Plan followed", pct(m.plan_follow_rate)),
            ("Confidence vs P&L", m.confidence_correlation.to_string()),
            ("Discipline vs P&L", m.discipline_correlation.to_string()),
        ],
    );
    section(
        "Rankings",
        [
            ("Best asset", category(&m.best_asset)),
            ("Worst asset", category(&m.worst_asset)),
            ("Best setup", category(&m.best_setup)),
            ("Worst setup", category(&m.worst_setup)),
        ],
    );

    counts("Assets", &m.asset_distribution);
    counts("Setups", &m.setup_distribution);
    counts("Trade types", &m.trade_type_distribution);
    counts("Emotions", &m.emotional_patterns);

    table(
        "Risk / reward",
        &["Range", "Trades"],
        m.risk_reward_distribution
            .iter()
            .map(|b| vec![b.range.clone(), b.count.to_string()]),
    );
    table(
        "Months",
        &["Month", "Trades", "P&L"],
        m.trades_per_month
            .iter()
            .map(|row| vec![row.month.clone(), row.trades.to_string(), usd(row.pnl)]),
    );
    table(
        "Weekdays",
        &["Day", "Trades", "P&L", "Win rate"],
        m.performance_by_day_of_week.iter().map(|row| {
            vec![
                row.day.clone(),
                row.trades.to_string(),
                usd(row.pnl),
                pct(row.win_rate),
            ]
        }),
    );
    table(
        "Most used tags",
        &["Tag", "Trades"],
        m.most_used_tags
            .iter()
            .map(|t| vec![t.tag.clone(), t.count.to_string()]),
    );
    table(
        "Most profitable tags",
        &["Tag", "P&L"],
        m.most_profitable_tags
            .iter()
            .map(|t| vec![t.tag.clone(), usd(t.pnl)]),
    );
}

fn section<const N: usize>(title: &str, rows: [(&str, String); N]) {
    table(
        title,
        &["Metric", "Value"],
        rows.into_iter()
            .map(|(label, value)| vec![label.to_string(), value]),
    );
}

fn counts<K: Display>(title: &str, map: &BTreeMap<K, usize>) {
    table(
        title,
        &["Label", "Trades"],
        map.iter().map(|(k, v)| vec![k.to_string(), v.to_string()]),
    );
}

fn table<I>(title: &str, header: &[&str], rows: I)
where
    I: IntoIterator<Item = Vec<String>>,
{
    let rows: Vec<Vec<String>> = rows.into_iter().collect();
    if rows.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(header.iter().map(Cell::new).collect::<Vec<_>>());
    for row in rows {
        table.add_row(row);
    }
    println!("\n{title}");
    println!("{table}");
}

fn category(entry: &Option<CategoryPerformance>) -> String {
    match entry {
        Some(c) => format!(
            "{} ({} trades, {}, {})",
            c.name,
            c.trades,
            usd(c.pnl),
            pct(c.win_rate)
        ),
        None => "-".to_string(),
    }
}

fn usd(value: Decimal) -> String {
    format!("${value:.2}")
}

fn pct(value: Decimal) -> String {
    format!("{value:.2}%")
}
