//! The monthly budget limit.

use serde_json::Value;

use crate::model::amount;

/// The single monthly spending limit for the signed-in user.
///
/// The budget endpoint is shape-polymorphic: it returns either a bare object
/// `{"amount": ...}` or a list whose first element carries the amount.
/// [MonthlyBudget::from_response] normalizes both into this one type at the
/// client boundary so nothing downstream has to care.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyBudget {
    /// The limit. Zero when the user has not set one.
    pub amount: f64,
}

impl MonthlyBudget {
    /// Normalize either server shape into a budget.
    ///
    /// Unrecognized shapes and empty lists normalize to a zero amount, which
    /// the metrics layer treats as "no budget set" (see
    /// [BudgetUtilization](crate::metrics::BudgetUtilization)).
    pub fn from_response(value: &Value) -> Self {
        let amount_field = match value {
            Value::Array(items) => items.first().and_then(|item| item.get("amount")),
            Value::Object(_) => value.get("amount"),
            _ => None,
        };

        Self {
            amount: amount_field.map(amount::coerce).unwrap_or(0.0),
        }
    }
}
