//! Transactions, the core records everything else is derived from.

use serde::{Deserialize, Deserializer, Serialize};
use time::{
    OffsetDateTime, format_description::well_known::Rfc3339, macros::format_description,
};

use crate::{
    Error,
    model::{Category, PaymentMethod, amount},
};

/// Whether a transaction added or removed money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money earned.
    Income,
    /// Money spent.
    Expense,
}

/// An expense or income, i.e. an event where money was either spent or
/// earned.
///
/// Amounts are positive regardless of direction; [Transaction::transaction_type]
/// carries the sign. Once a transaction has been rendered into an aggregate
/// it is never patched in place; aggregates are recomputed from scratch from
/// the full snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: i64,
    /// A short label, e.g. "Groceries".
    #[serde(default)]
    pub title: String,
    /// The amount of money spent or earned in this transaction.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub amount: f64,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The category the transaction belongs to, if any.
    #[serde(default)]
    pub category: Option<Category>,
    /// The payment method used, if any.
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// When the transaction happened.
    #[serde(deserialize_with = "lenient_datetime", default = "epoch")]
    pub date: OffsetDateTime,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: String,
}

impl Transaction {
    /// The name of this transaction's category, or `None` when it has no
    /// category.
    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().map(|category| category.name.as_str())
    }
}

fn epoch() -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH
}

/// Deserialize an ISO-8601 timestamp, accepting a bare calendar date as
/// midnight UTC. Unparseable dates fall back to the epoch so one bad record
/// cannot fail a whole list; an epoch date simply never matches "today".
fn lenient_datetime<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match Option::<String>::deserialize(deserializer)? {
        Some(text) => text,
        None => return Ok(epoch()),
    };

    if let Ok(datetime) = OffsetDateTime::parse(&text, &Rfc3339) {
        return Ok(datetime);
    }

    let date_only = format_description!("[year]-[month]-[day]");
    if let Ok(date) = time::Date::parse(&text, &date_only) {
        return Ok(date.midnight().assume_utc());
    }

    Ok(epoch())
}

/// The payload for creating or replacing a transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTransaction {
    /// A short label, e.g. "Groceries".
    pub title: String,
    /// The amount of money spent or earned. Must be greater than zero.
    pub amount: f64,
    /// Whether this transaction is income or an expense.
    pub transaction_type: TransactionType,
    /// The ID of the category to file the transaction under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// The ID of the payment method used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<i64>,
    /// When the transaction happened. `None` lets the backend stamp it.
    #[serde(with = "time::serde::rfc3339::option")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<OffsetDateTime>,
    /// A text description of what the transaction was for.
    pub description: String,
}

impl NewTransaction {
    /// Create a payload with the required fields and everything else unset.
    pub fn new(title: &str, amount: f64, transaction_type: TransactionType) -> Self {
        Self {
            title: title.to_owned(),
            amount,
            transaction_type,
            category_id: None,
            payment_method_id: None,
            date: None,
            description: String::new(),
        }
    }

    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !(self.amount > 0.0) {
            return Err(Error::NonPositiveAmount(self.amount.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use time::macros::datetime;

    use crate::Error;

    use super::{NewTransaction, Transaction, TransactionType};

    #[test]
    fn transaction_decodes_full_record() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 12,
            "title": "Groceries",
            "amount": "450.00",
            "transaction_type": "expense",
            "category": {"id": 3, "name": "Food", "icon": "Utensils"},
            "payment_method": {"id": 1, "name": "Debit card", "icon": "CreditCard"},
            "date": "2026-08-07T10:30:00Z",
            "description": "Weekly shop"
        }))
        .unwrap();

        assert_eq!(transaction.amount, 450.0);
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.category_name(), Some("Food"));
        assert_eq!(transaction.date, datetime!(2026-08-07 10:30:00 UTC));
    }

    #[test]
    fn transaction_decodes_with_missing_optional_fields() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 1,
            "amount": 20,
            "transaction_type": "income",
            "date": "2026-08-07"
        }))
        .unwrap();

        assert_eq!(transaction.title, "");
        assert_eq!(transaction.category, None);
        assert_eq!(transaction.date, datetime!(2026-08-07 00:00:00 UTC));
    }

    #[test]
    fn malformed_amount_coerces_to_zero() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 1,
            "amount": "garbage",
            "transaction_type": "expense",
            "date": "2026-08-07T10:30:00Z"
        }))
        .unwrap();

        assert_eq!(transaction.amount, 0.0);
    }

    #[test]
    fn unparseable_date_falls_back_to_epoch() {
        let transaction: Transaction = serde_json::from_value(json!({
            "id": 1,
            "amount": 5,
            "transaction_type": "expense",
            "date": "last tuesday"
        }))
        .unwrap();

        assert_eq!(transaction.date, time::OffsetDateTime::UNIX_EPOCH);

        let null_date: Transaction = serde_json::from_value(json!({
            "id": 2,
            "amount": 5,
            "transaction_type": "expense",
            "date": null
        }))
        .unwrap();

        assert_eq!(null_date.date, time::OffsetDateTime::UNIX_EPOCH);
    }

    #[test]
    fn new_transaction_rejects_non_positive_amounts() {
        let mut payload = NewTransaction::new("Coffee", 0.0, TransactionType::Expense);

        assert_eq!(
            payload.validate(),
            Err(Error::NonPositiveAmount("0".to_owned()))
        );

        payload.amount = -5.0;
        assert!(matches!(
            payload.validate(),
            Err(Error::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn new_transaction_rejects_blank_titles() {
        let payload = NewTransaction::new("  ", 5.0, TransactionType::Expense);

        assert_eq!(payload.validate(), Err(Error::EmptyTitle));
    }

    #[test]
    fn new_transaction_serializes_without_unset_fields() {
        let payload = NewTransaction::new("Coffee", 4.5, TransactionType::Expense);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["transaction_type"], "expense");
        assert!(value.get("category_id").is_none());
        assert!(value.get("date").is_none());
    }
}
