use crate::error::AnalyticsError;
use crate::math::try_add;
use crate::report::{TagProfit, TagUsage};
use core_types::TradeRecord;
use rust_decimal::Decimal;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct TagRankings {
    pub most_used_tags: Vec<TagUsage>,
    pub most_profitable_tags: Vec<TagProfit>,
}

/// Ranks tags by usage and by summed P&L.
///
/// A trade counts once for every entry in its tag list, and its full P&L is
/// credited to each of those tags, so bucket totals can exceed the history total.
/// Both rankings are stable: tags that tie stay in first-seen order.
pub fn analyze(
    trades: &[TradeRecord],
    used_limit: usize,
    profitable_limit: usize,
) -> Result<TagRankings, AnalyticsError> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut buckets: Vec<(&str, usize, Decimal)> = Vec::new();

    for trade in trades {
        for tag in &trade.quality.tags {
            let slot = *index.entry(tag.as_str()).or_insert_with(|| {
                buckets.push((tag.as_str(), 0, Decimal::ZERO));
                buckets.len() - 1
            });
            let (_, count, pnl) = &mut buckets[slot];
            *count += 1;
            *pnl = try_add(*pnl, trade.pnl(), "tag_pnl")?;
        }
    }

    let mut by_usage = buckets.clone();
    by_usage.sort_by(|a, b| b.1.cmp(&a.1));
    let most_used_tags = by_usage
        .into_iter()
        .take(used_limit)
        .map(|(tag, count, _)| TagUsage {
            tag: tag.to_string(),
            count,
        })
        .collect();

    let mut by_profit = buckets;
    by_profit.sort_by(|a, b| b.2.cmp(&a.2));
    let most_profitable_tags = by_profit
        .into_iter()
        .take(profitable_limit)
        .map(|(tag, _, pnl)| TagProfit {
            tag: tag.to_string(),
            pnl,
        })
        .collect();

    Ok(TagRankings {
        most_used_tags,
        most_profitable_tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::trade;
    use rust_decimal_macros::dec;

    fn tagged(result: Decimal, tags: &[&str]) -> TradeRecord {
        let mut t = trade(result);
        t.quality.tags = tags.iter().map(|s| s.to_string()).collect();
        t
    }

    #[test]
    fn multi_tag_trades_count_in_every_bucket() {
        let history = vec![
            tagged(dec!(100), &["trend", "london"]),
            tagged(dec!(-40), &["trend"]),
            tagged(dec!(25), &["news", "london"]),
        ];
        let rankings = analyze(&history, 10, 5).unwrap();

        let used: Vec<(&str, usize)> = rankings
            .most_used_tags
            .iter()
            .map(|t| (t.tag.as_str(), t.count))
            .collect();
        assert_eq!(used, vec![("trend", 2), ("london", 2), ("news", 1)]);

        let profitable: Vec<(&str, Decimal)> = rankings
            .most_profitable_tags
            .iter()
            .map(|t| (t.tag.as_str(), t.pnl))
            .collect();
        assert_eq!(
            profitable,
            vec![("london", dec!(125)), ("trend", dec!(60)), ("news", dec!(25))]
        );
    }

    #[test]
    fn rankings_are_truncated() {
        let tags: Vec<String> = (0..12).map(|i| format!("tag{i}")).collect();
        let tag_refs: Vec<&str> = tags.iter().map(String::as_str).collect();
        let history = vec![tagged(dec!(1), &tag_refs)];

        let rankings = analyze(&history, 10, 5).unwrap();
        assert_eq!(rankings.most_used_tags.len(), 10);
        assert_eq!(rankings.most_profitable_tags.len(), 5);
        assert_eq!(rankings.most_used_tags[0].tag, "tag0");
        assert_eq!(rankings.most_profitable_tags[4].tag, "tag4");
    }

    #[test]
    fn untagged_history_yields_empty_rankings() {
        let rankings = analyze(&[trade(dec!(10))], 10, 5).unwrap();
        assert!(rankings.most_used_tags.is_empty());
        assert!(rankings.most_profitable_tags.is_empty());
    }
}
