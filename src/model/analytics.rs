//! The pre-aggregated analytics summary for the statistics screen.

use serde::Deserialize;

use crate::model::amount;

/// The payload of the analytics endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalyticsSummary {
    /// Expense totals per category, largest first.
    #[serde(default)]
    pub category_distribution: Vec<CategorySlice>,
    /// Expense totals per month over the last six months, oldest first.
    #[serde(default)]
    pub monthly_trend: Vec<TrendPoint>,
    /// Headline totals.
    pub summary: SpendingSummary,
}

/// One category's share of total spending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySlice {
    /// The category name; the server substitutes "Uncategorized" for
    /// transactions without one.
    pub name: String,
    /// The total spent in this category.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub value: f64,
    /// The icon identifier for the category.
    #[serde(default)]
    pub icon: Option<String>,
}

/// One month's expense total in the trend series.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendPoint {
    /// The three-letter month label, e.g. "Mar".
    pub month: String,
    /// The total spent in that month.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub amount: f64,
}

/// Headline spending totals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpendingSummary {
    /// Total spent over the analyzed period.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub total_spent: f64,
    /// Rough average daily spend.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub avg_daily: f64,
    /// The number of expense transactions analyzed.
    #[serde(default)]
    pub transaction_count: u64,
}
