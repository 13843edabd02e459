//! The pre-aggregated dashboard summary.
//!
//! The backend computes these totals itself; the client's job is to reshape
//! them for specific widgets (see [metrics::weekly](crate::metrics)), not to
//! recompute them from the raw transaction list.

use serde::{Deserialize, Deserializer};
use time::{Date, macros::format_description};

use crate::model::{Transaction, amount};

/// The home-screen summary returned by the dashboard endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardSummary {
    /// Income minus expenses over all time.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub balance: f64,
    /// Total income.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub income: f64,
    /// Total expenses.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub expense: f64,
    /// Percentage change in balance since the start of the month.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub month_change: f64,
    /// The monthly budget limit, zero when unset.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub total_budget: f64,
    /// The most recent transactions, newest first.
    #[serde(default)]
    pub recent_transactions: Vec<Transaction>,
    /// Expense totals for each of the last seven days, oldest first.
    #[serde(default)]
    pub weekly_spending: Vec<WeeklyBucket>,
}

impl DashboardSummary {
    /// Whether the balance trend since the start of the month is flat or
    /// upward.
    pub fn month_change_is_positive(&self) -> bool {
        self.month_change >= 0.0
    }
}

/// One day's expense total in the weekly spending series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyBucket {
    /// The three-letter weekday label, e.g. "Mon".
    #[serde(default)]
    pub day: String,
    /// The total spent on that day.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub amount: f64,
    /// The bucket's calendar date. `None` when the server sent an
    /// unparseable date; such a bucket still renders, it just can never be
    /// highlighted as "today".
    #[serde(deserialize_with = "lenient_date", default)]
    pub full_date: Option<Date>,
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = Option::<String>::deserialize(deserializer)?;
    let format = format_description!("[year]-[month]-[day]");

    Ok(text.and_then(|text| Date::parse(&text, &format).ok()))
}
