//! Pure reductions from raw snapshots to display-ready aggregates.
//!
//! Every function here is stateless and re-entrant: it recomputes from the
//! snapshot it is handed, never patches a previous result, and never touches
//! the network or the cache. By the time records reach this module their
//! numeric fields are already coerced (see [model](crate::model)), so
//! nothing in here can fail: a corrupt record degrades one term of a sum to
//! zero rather than blanking the whole view.

mod breakdown;
mod budget_band;
#[cfg(test)]
pub(crate) mod test_utils;
mod distribution;
mod today;
mod totals;
mod weekly;

pub use breakdown::{CategoryTotal, UNCATEGORIZED_LABEL, category_breakdown, top_category};
pub use budget_band::{BudgetBand, BudgetUtilization, FALLBACK_MONTHLY_BUDGET};
pub use distribution::{LegendEntry, distribution_legend};
pub use today::transactions_on;
pub use totals::{net_balance, total_by_type};
pub use weekly::{MIN_BAR_HEIGHT_PERCENT, WeeklyBar, WeeklySeries, ZERO_BAR_HEIGHT_PERCENT, weekly_series};
