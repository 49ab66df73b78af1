//! Chart derivation — trend and axis bounds for a price series.

use super::CoinHistory;
use rust_decimal::Decimal;
use std::sync::OnceLock;

static FLOOR_PADDING: OnceLock<Decimal> = OnceLock::new();

/// Fraction of the lowest price left below the curve.
fn floor_padding() -> &'static Decimal {
    FLOOR_PADDING.get_or_init(|| Decimal::new(5, 2))
}

/// Price direction across the sampled window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Increase,
    Decrease,
}

/// Derived chart inputs for a price series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub trend: Trend,
    /// Lower axis bound: lowest price padded 5% down, so the curve never
    /// touches the frame.
    pub min_y: Decimal,
    /// Upper axis bound: the highest price.
    pub max_y: Decimal,
    /// Time-ascending `(timestamp_ms, price)` pairs.
    pub points: Vec<(i64, Decimal)>,
}

impl ChartView {
    /// Derive chart inputs; `None` when the series has no points.
    ///
    /// A flat series counts as an increase — only a strictly lower newest
    /// price reads as a decline.
    pub fn of(history: &CoinHistory) -> Option<Self> {
        let oldest = history.oldest()?;
        let newest = history.newest()?;
        let lowest = history.lowest()?;
        let highest = history.highest()?;

        let trend = if newest < oldest {
            Trend::Decrease
        } else {
            Trend::Increase
        };

        Some(Self {
            trend,
            min_y: lowest - lowest * floor_padding(),
            max_y: highest,
            points: history.points().collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn history(points: Vec<(i64, &str)>) -> CoinHistory {
        let mut h = CoinHistory::new();
        for (t, p) in points {
            h.insert(t, dec(p));
        }
        h
    }

    #[test]
    fn test_empty_history_has_no_chart() {
        assert_eq!(ChartView::of(&CoinHistory::new()), None);
    }

    #[test]
    fn test_single_point_counts_as_increase() {
        let chart = ChartView::of(&history(vec![(100, "2.0")])).unwrap();
        assert_eq!(chart.trend, Trend::Increase);
        assert_eq!(chart.min_y, dec("1.90"));
        assert_eq!(chart.max_y, dec("2.0"));
        assert_eq!(chart.points, vec![(100, dec("2.0"))]);
    }

    #[test]
    fn test_falling_series_is_decrease() {
        let chart = ChartView::of(&history(vec![(1, "3.0"), (2, "2.5"), (3, "2.9")])).unwrap();
        assert_eq!(chart.trend, Trend::Decrease);
    }

    #[test]
    fn test_two_point_decline_bounds() {
        let chart = ChartView::of(&history(vec![(0, "100"), (1, "90")])).unwrap();
        assert_eq!(chart.trend, Trend::Decrease);
        assert_eq!(chart.min_y, dec("85.5"));
        assert_eq!(chart.max_y, dec("100"));
    }

    #[test]
    fn test_rising_series_is_increase() {
        let chart = ChartView::of(&history(vec![(1, "2.0"), (2, "1.8"), (3, "2.4")])).unwrap();
        assert_eq!(chart.trend, Trend::Increase);
    }

    #[test]
    fn test_flat_series_is_increase() {
        let chart = ChartView::of(&history(vec![(1, "2.0"), (2, "2.0")])).unwrap();
        assert_eq!(chart.trend, Trend::Increase);
    }

    #[test]
    fn test_axis_bounds() {
        let chart = ChartView::of(&history(vec![(1, "100"), (2, "80"), (3, "120")])).unwrap();
        assert_eq!(chart.min_y, dec("76.00"));
        assert_eq!(chart.max_y, dec("120"));
    }

    #[test]
    fn test_points_time_ascending() {
        let chart = ChartView::of(&history(vec![(3, "3"), (1, "1"), (2, "2")])).unwrap();
        let times: Vec<i64> = chart.points.iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![1, 2, 3]);
    }
}
