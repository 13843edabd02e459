//! Grouping expenses by category for the spending breakdown widgets.

use std::collections::HashMap;

use crate::model::{Transaction, TransactionType};

/// The label used for expenses without a category.
pub const UNCATEGORIZED_LABEL: &str = "General";

/// One category's share of total expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category name, or [UNCATEGORIZED_LABEL] for uncategorized
    /// expenses.
    pub name: String,
    /// The summed expense amount for this category.
    pub total: f64,
    /// This category's percentage of all expenses. Zero when the overall
    /// total is zero.
    pub percent: f64,
}

/// Group expense transactions by category name and sum each group.
///
/// Income transactions are ignored. Groups are sorted by descending total,
/// with the name as a tie-break so equal totals order deterministically.
/// `top_n` caps the result for compact displays (the UI shows 4); `None`
/// returns every group.
pub fn category_breakdown(transactions: &[Transaction], top_n: Option<usize>) -> Vec<CategoryTotal> {
    let mut totals: HashMap<&str, f64> = HashMap::new();

    for transaction in transactions
        .iter()
        .filter(|t| t.transaction_type == TransactionType::Expense)
    {
        let name = transaction.category_name().unwrap_or(UNCATEGORIZED_LABEL);
        *totals.entry(name).or_insert(0.0) += transaction.amount;
    }

    let overall: f64 = totals.values().sum();

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(name, total)| CategoryTotal {
            name: name.to_owned(),
            total,
            percent: if overall > 0.0 {
                total / overall * 100.0
            } else {
                0.0
            },
        })
        .collect();

    breakdown.sort_by(|a, b| {
        b.total
            .total_cmp(&a.total)
            .then_with(|| a.name.cmp(&b.name))
    });

    if let Some(cap) = top_n {
        breakdown.truncate(cap);
    }

    breakdown
}

/// The name of the category with the largest expense total, or `None` when
/// the snapshot has no expenses.
pub fn top_category(transactions: &[Transaction]) -> Option<String> {
    category_breakdown(transactions, Some(1))
        .pop()
        .map(|category| category.name)
}

#[cfg(test)]
mod tests {
    use crate::{
        metrics::test_utils::transaction,
        model::TransactionType::{Expense, Income},
    };

    use super::{UNCATEGORIZED_LABEL, category_breakdown, top_category};

    #[test]
    fn groups_expenses_and_sorts_descending() {
        let transactions = [
            transaction(100.0, Expense, Some("Food")),
            transaction(50.0, Expense, Some("Travel")),
            transaction(200.0, Expense, Some("Food")),
            transaction(999.0, Income, Some("Salary")),
        ];

        let breakdown = category_breakdown(&transactions, None);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].name, "Food");
        assert_eq!(breakdown[0].total, 300.0);
        assert_eq!(breakdown[1].name, "Travel");
        assert_eq!(breakdown[1].total, 50.0);
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let transactions = [
            transaction(30.0, Expense, Some("Food")),
            transaction(30.0, Expense, Some("Travel")),
            transaction(40.0, Expense, None),
        ];

        let breakdown = category_breakdown(&transactions, None);
        let percent_sum: f64 = breakdown.iter().map(|c| c.percent).sum();

        assert!((percent_sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn uncategorized_expenses_use_the_fallback_label() {
        let transactions = [transaction(10.0, Expense, None)];

        let breakdown = category_breakdown(&transactions, None);

        assert_eq!(breakdown[0].name, UNCATEGORIZED_LABEL);
        assert_eq!(breakdown[0].percent, 100.0);
    }

    #[test]
    fn zero_total_yields_zero_percentages_not_nan() {
        let transactions = [
            transaction(0.0, Expense, Some("Food")),
            transaction(0.0, Expense, Some("Travel")),
        ];

        let breakdown = category_breakdown(&transactions, None);

        assert!(breakdown.iter().all(|c| c.percent == 0.0));
    }

    #[test]
    fn empty_snapshot_yields_empty_breakdown() {
        assert!(category_breakdown(&[], None).is_empty());
        assert_eq!(top_category(&[]), None);
    }

    #[test]
    fn top_n_caps_the_result() {
        let transactions = [
            transaction(40.0, Expense, Some("Food")),
            transaction(30.0, Expense, Some("Travel")),
            transaction(20.0, Expense, Some("Bills")),
            transaction(10.0, Expense, Some("Fun")),
            transaction(5.0, Expense, Some("Misc")),
        ];

        let breakdown = category_breakdown(&transactions, Some(4));

        assert_eq!(breakdown.len(), 4);
        assert_eq!(breakdown.last().unwrap().name, "Fun");
    }

    #[test]
    fn equal_totals_order_by_name() {
        let transactions = [
            transaction(25.0, Expense, Some("Zoo")),
            transaction(25.0, Expense, Some("Art")),
        ];

        let breakdown = category_breakdown(&transactions, None);

        assert_eq!(breakdown[0].name, "Art");
        assert_eq!(breakdown[1].name, "Zoo");
    }

    #[test]
    fn top_category_returns_largest_group() {
        let transactions = [
            transaction(10.0, Expense, Some("Food")),
            transaction(90.0, Expense, Some("Rent")),
        ];

        assert_eq!(top_category(&transactions), Some("Rent".to_owned()));
    }
}
