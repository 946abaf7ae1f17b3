//! Sentiment aggregation.

use super::NEUTRAL_SCORE;
use crate::domain::NewsItem;

/// Mean of `(s + 1) / 2` over the items; 0.5 for an empty collection.
pub fn aggregate_sentiment(items: &[NewsItem]) -> f64 {
    if items.is_empty() {
        return NEUTRAL_SCORE;
    }
    let total: f64 = items.iter().map(|item| (item.sentiment + 1.0) / 2.0).sum();
    total / items.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;

    #[test]
    fn empty_is_neutral() {
        assert_eq!(aggregate_sentiment(&[]), 0.5);
    }

    #[test]
    fn single_item_extremes() {
        assert_eq!(aggregate_sentiment(&[NewsItem::new("up", 1.0)]), 1.0);
        assert_eq!(aggregate_sentiment(&[NewsItem::new("down", -1.0)]), 0.0);
    }

    #[test]
    fn mean_of_mapped_values() {
        let items = [
            NewsItem::new("a", 0.5),
            NewsItem::new("b", -0.5),
            NewsItem::new("c", 0.2),
        ];
        // (0.75 + 0.25 + 0.6) / 3
        assert_approx(aggregate_sentiment(&items), 1.6 / 3.0, 1e-12);
    }
}
