//! Whole-list totals over a transaction snapshot.

use crate::model::{Transaction, TransactionType};

/// The sum of amounts over transactions of `transaction_type`.
///
/// An empty snapshot sums to zero. Together, the income and expense totals
/// partition the full amount sum: every transaction is counted exactly once.
pub fn total_by_type(transactions: &[Transaction], transaction_type: TransactionType) -> f64 {
    transactions
        .iter()
        .filter(|transaction| transaction.transaction_type == transaction_type)
        .map(|transaction| transaction.amount)
        .sum()
}

/// Income minus expenses over the whole snapshot.
pub fn net_balance(transactions: &[Transaction]) -> f64 {
    total_by_type(transactions, TransactionType::Income)
        - total_by_type(transactions, TransactionType::Expense)
}

#[cfg(test)]
mod tests {
    use crate::{metrics::test_utils::transaction, model::TransactionType};

    use super::{net_balance, total_by_type};

    #[test]
    fn totals_partition_the_amount_sum() {
        let transactions = [
            transaction(100.0, TransactionType::Income, None),
            transaction(40.0, TransactionType::Expense, Some("Food")),
            transaction(60.0, TransactionType::Expense, None),
            transaction(25.5, TransactionType::Income, None),
        ];

        let income = total_by_type(&transactions, TransactionType::Income);
        let expense = total_by_type(&transactions, TransactionType::Expense);
        let all: f64 = transactions.iter().map(|t| t.amount).sum();

        assert_eq!(income, 125.5);
        assert_eq!(expense, 100.0);
        assert_eq!(income + expense, all);
    }

    #[test]
    fn empty_snapshot_sums_to_zero() {
        assert_eq!(total_by_type(&[], TransactionType::Expense), 0.0);
        assert_eq!(net_balance(&[]), 0.0);
    }

    #[test]
    fn net_balance_subtracts_expenses_from_income() {
        let transactions = [
            transaction(500.0, TransactionType::Income, None),
            transaction(120.0, TransactionType::Expense, None),
        ];

        assert_eq!(net_balance(&transactions), 380.0);
    }
}
