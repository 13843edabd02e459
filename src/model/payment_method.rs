//! Payment methods, e.g. "Visa ending 4242" or "Cash".

use serde::{Deserialize, Serialize};

use crate::Error;

/// A way of paying for transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethod {
    /// The ID of the payment method.
    pub id: i64,
    /// The display name of the payment method.
    pub name: String,
    /// The icon identifier for the payment method.
    #[serde(default)]
    pub icon: Option<String>,
}

/// The payload for creating a payment method.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewPaymentMethod {
    /// The display name of the new payment method.
    pub name: String,
    /// The icon identifier for the new payment method.
    pub icon: Option<String>,
}

impl NewPaymentMethod {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        Ok(())
    }
}
