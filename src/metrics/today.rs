//! Filtering a snapshot down to today's activity.

use time::{Date, UtcOffset};

use crate::model::Transaction;

/// The transactions whose local calendar date equals `date`.
///
/// "Today" is a calendar comparison in the caller's timezone (year, month
/// and day after shifting each timestamp by `offset`), not a rolling
/// 24-hour window: a transaction at 00:05 this morning matches, one at
/// 23:55 yesterday does not. The result keeps snapshot order and is capped
/// at `limit` entries (the budget screen shows 5).
pub fn transactions_on<'a>(
    transactions: &'a [Transaction],
    date: Date,
    offset: UtcOffset,
    limit: usize,
) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|transaction| transaction.date.to_offset(offset).date() == date)
        .take(limit)
        .collect()
}
