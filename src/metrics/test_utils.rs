//! Helpers for building transaction fixtures in metrics tests.

use time::OffsetDateTime;

use crate::model::{Category, Transaction, TransactionType};

/// A transaction fixture with the fields the metrics engine looks at.
pub(crate) fn transaction(
    amount: f64,
    transaction_type: TransactionType,
    category: Option<&str>,
) -> Transaction {
    transaction_at(amount, transaction_type, category, OffsetDateTime::UNIX_EPOCH)
}

/// A transaction fixture with an explicit timestamp.
pub(crate) fn transaction_at(
    amount: f64,
    transaction_type: TransactionType,
    category: Option<&str>,
    date: OffsetDateTime,
) -> Transaction {
    Transaction {
        id: 0,
        title: "test".to_owned(),
        amount,
        transaction_type,
        category: category.map(|name| Category {
            id: 0,
            name: name.to_owned(),
            icon: None,
        }),
        payment_method: None,
        date,
        description: String::new(),
    }
}
