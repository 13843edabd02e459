//! Reshaping the server-aggregated category distribution for the legend.
//!
//! The analytics endpoint already sums spending per category; this module
//! only decorates those slices with percentages and colors and caps them
//! for the compact legend. It never recomputes the sums.

use crate::{model::CategorySlice, palette};

/// One legend row on the statistics screen.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// The category name.
    pub name: String,
    /// The summed amount for this category.
    pub value: f64,
    /// This category's rounded percentage of `total_spent`. Zero when the
    /// total is zero.
    pub percent: i64,
    /// The display color, assigned by hashing the name into the palette.
    pub color: &'static str,
}

/// Decorate the top `top_n` distribution slices with percentages of
/// `total_spent` and stable palette colors.
pub fn distribution_legend(
    distribution: &[CategorySlice],
    total_spent: f64,
    top_n: usize,
) -> Vec<LegendEntry> {
    distribution
        .iter()
        .take(top_n)
        .map(|slice| LegendEntry {
            name: slice.name.clone(),
            value: slice.value,
            percent: if total_spent > 0.0 {
                (slice.value / total_spent * 100.0).round() as i64
            } else {
                0
            },
            color: palette::category_color(&slice.name),
        })
        .collect()
}
