//! Spending categories and their month-to-date budget statistics.

use serde::{Deserialize, Serialize};

use crate::{Error, model::amount};

/// A spending category, e.g. "Food" or "Travel".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The ID of the category.
    pub id: i64,
    /// The display name of the category.
    pub name: String,
    /// The icon identifier for the category, resolved through
    /// [Icon::from_name](crate::icon::Icon::from_name).
    #[serde(default)]
    pub icon: Option<String>,
}

/// Month-to-date spending for one category, as reported by the
/// budget-statistics endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategorySpending {
    /// The ID of the category.
    pub id: i64,
    /// The display name of the category.
    pub category: String,
    /// The amount spent in this category since the start of the month.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub amount: f64,
    /// The per-category budget limit, zero when none is set.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub budget: f64,
    /// An explicit display color, when the backend provides one.
    #[serde(default)]
    pub color: Option<String>,
    /// The icon identifier for the category.
    #[serde(default)]
    pub icon: Option<String>,
}

/// The payload for creating a category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategory {
    /// The display name of the new category.
    pub name: String,
    /// The icon identifier for the new category.
    pub icon: Option<String>,
}

impl NewCategory {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::Error;

    use super::{CategorySpending, NewCategory};

    #[test]
    fn category_spending_decodes_string_amounts() {
        let spending: CategorySpending = serde_json::from_value(json!({
            "id": 3,
            "category": "Food",
            "amount": "450.00",
            "budget": 2000,
            "color": "#10b981",
            "icon": "Utensils"
        }))
        .unwrap();

        assert_eq!(spending.amount, 450.0);
        assert_eq!(spending.budget, 2000.0);
    }

    #[test]
    fn new_category_requires_a_name() {
        let unnamed = NewCategory {
            name: "   ".to_owned(),
            icon: None,
        };

        assert_eq!(unnamed.validate(), Err(Error::EmptyTitle));
    }
}
