//! Savings goals and their progress.

use serde::{Deserialize, Serialize};

use crate::{Error, model::amount};

/// A savings target the user is putting money aside for.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SavingsGoal {
    /// The ID of the goal.
    pub id: i64,
    /// The display name of the goal, e.g. "New laptop".
    pub name: String,
    /// The amount the user wants to reach.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub target_amount: f64,
    /// The amount saved so far.
    ///
    /// The backend does not reject `saved_amount` above `target_amount`;
    /// over-saving shows as 100% fill with a rounded percentage above 100.
    #[serde(deserialize_with = "amount::lenient", default)]
    pub saved_amount: f64,
    /// The display color name, e.g. "blue".
    #[serde(default)]
    pub color: String,
    /// The icon identifier for the goal.
    #[serde(default)]
    pub icon: Option<String>,
}

impl SavingsGoal {
    /// The percentage of the target saved so far, rounded to the nearest
    /// integer. Zero when the target is zero. Not capped: an over-saved
    /// goal reports more than 100.
    pub fn progress_percent(&self) -> i64 {
        if self.target_amount <= 0.0 {
            return 0;
        }

        (self.saved_amount / self.target_amount * 100.0).round() as i64
    }

    /// The progress-bar fill width as a percentage, clamped to 100 so an
    /// over-saved goal cannot overflow its track.
    pub fn fill_percent(&self) -> f64 {
        if self.target_amount <= 0.0 {
            return 0.0;
        }

        (self.saved_amount / self.target_amount * 100.0).min(100.0)
    }
}

/// The payload for creating or replacing a savings goal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewSavingsGoal {
    /// The display name of the goal.
    pub name: String,
    /// The amount to reach. Must be greater than zero.
    pub target_amount: f64,
    /// The amount already saved.
    pub saved_amount: f64,
    /// The display color name.
    pub color: String,
    /// The icon identifier for the goal.
    pub icon: Option<String>,
}

impl NewSavingsGoal {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.name.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        if !(self.target_amount > 0.0) {
            return Err(Error::NonPositiveAmount(self.target_amount.to_string()));
        }

        Ok(())
    }
}
