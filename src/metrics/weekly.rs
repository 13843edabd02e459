//! Preparing the weekly spending bar chart.
//!
//! The backend sends seven day buckets; this module turns them into bars
//! with relative heights, marking today's bucket for highlighting. Heights
//! are percentages of the tallest bucket so the chart fills its box
//! regardless of scale.

use time::Date;

use crate::model::WeeklyBucket;

/// The rendered height of a zero-amount bar.
///
/// Zero days keep a visible stub instead of collapsing to nothing, so the
/// week always shows seven bars.
pub const ZERO_BAR_HEIGHT_PERCENT: f64 = 2.0;

/// The minimum rendered height of a non-zero bar.
///
/// A day that is tiny relative to the week's peak must still read as "some
/// spending" at a glance.
pub const MIN_BAR_HEIGHT_PERCENT: f64 = 10.0;

/// One bar in the weekly chart.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyBar {
    /// The three-letter weekday label, e.g. "Mon".
    pub label: String,
    /// The amount spent that day.
    pub amount: f64,
    /// The bar's height as a percentage of the chart box.
    pub height_percent: f64,
    /// Whether this bucket is today's, for highlighting.
    pub is_today: bool,
}

impl WeeklyBar {
    /// Whether this bar represents a day with no spending.
    pub fn is_zero(&self) -> bool {
        self.amount == 0.0
    }
}

/// The weekly chart's bars plus the scale they were computed against.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySeries {
    /// The bars, in the order the buckets were supplied (oldest first).
    pub bars: Vec<WeeklyBar>,
    /// The largest bucket amount, floored at 1 so an all-zero week does not
    /// divide by zero.
    pub max_amount: f64,
}

/// Turn server day buckets into chart bars, marking the bucket whose date
/// is `today`.
pub fn weekly_series(buckets: &[WeeklyBucket], today: Date) -> WeeklySeries {
    let max_amount = buckets
        .iter()
        .map(|bucket| bucket.amount)
        .fold(1.0_f64, f64::max);

    let bars = buckets
        .iter()
        .map(|bucket| {
            let height_percent = if bucket.amount == 0.0 {
                ZERO_BAR_HEIGHT_PERCENT
            } else {
                (bucket.amount / max_amount * 100.0).max(MIN_BAR_HEIGHT_PERCENT)
            };

            WeeklyBar {
                label: bucket.day.clone(),
                amount: bucket.amount,
                height_percent,
                is_today: bucket.full_date == Some(today),
            }
        })
        .collect();

    WeeklySeries { bars, max_amount }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::model::WeeklyBucket;

    use super::{MIN_BAR_HEIGHT_PERCENT, ZERO_BAR_HEIGHT_PERCENT, weekly_series};

    fn bucket(day: &str, amount: f64, full_date: Option<time::Date>) -> WeeklyBucket {
        WeeklyBucket {
            day: day.to_owned(),
            amount,
            full_date,
        }
    }

    #[test]
    fn max_amount_is_the_largest_bucket() {
        let buckets = [
            bucket("Mon", 0.0, None),
            bucket("Tue", 50.0, None),
            bucket("Wed", 100.0, None),
        ];

        let series = weekly_series(&buckets, date!(2026-08-07));

        assert_eq!(series.max_amount, 100.0);
    }

    #[test]
    fn zero_bars_keep_a_floor_below_the_tallest_bar() {
        let buckets = [
            bucket("Mon", 0.0, None),
            bucket("Tue", 50.0, None),
            bucket("Wed", 100.0, None),
        ];

        let series = weekly_series(&buckets, date!(2026-08-07));

        let zero_bar = &series.bars[0];
        let tallest = &series.bars[2];

        assert!(zero_bar.is_zero());
        assert!(zero_bar.height_percent > 0.0);
        assert!(zero_bar.height_percent < tallest.height_percent);
        assert_eq!(tallest.height_percent, 100.0);
    }

    #[test]
    fn all_zero_week_does_not_divide_by_zero() {
        let buckets = [bucket("Mon", 0.0, None), bucket("Tue", 0.0, None)];

        let series = weekly_series(&buckets, date!(2026-08-07));

        assert_eq!(series.max_amount, 1.0);
        assert!(
            series
                .bars
                .iter()
                .all(|bar| bar.height_percent == ZERO_BAR_HEIGHT_PERCENT)
        );
    }

    #[test]
    fn tiny_non_zero_bars_are_floored_for_readability() {
        let buckets = [bucket("Mon", 1.0, None), bucket("Tue", 1000.0, None)];

        let series = weekly_series(&buckets, date!(2026-08-07));

        assert_eq!(series.bars[0].height_percent, MIN_BAR_HEIGHT_PERCENT);
    }

    #[test]
    fn todays_bucket_is_marked_current() {
        let buckets = [
            bucket("Thu", 10.0, Some(date!(2026-08-06))),
            bucket("Fri", 20.0, Some(date!(2026-08-07))),
        ];

        let series = weekly_series(&buckets, date!(2026-08-07));

        assert!(!series.bars[0].is_today);
        assert!(series.bars[1].is_today);
    }

    #[test]
    fn buckets_without_dates_are_never_today() {
        let buckets = [bucket("Sat", 5.0, None)];

        let series = weekly_series(&buckets, date!(2026-08-07));

        assert!(!series.bars[0].is_today);
    }
}
