//! The backend API endpoint paths.
//!
//! All paths are relative to [ClientConfig::base_url](crate::ClientConfig).
//! For endpoints that take a parameter, e.g. '/transactions/{transaction_id}/',
//! use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions/";
/// The route to update or delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}/";
/// The route for the pre-aggregated dashboard summary.
pub const DASHBOARD_STATS: &str = "/transactions/dashboard_stats/";
/// The route for the pre-aggregated analytics summary.
pub const ANALYTICS_STATS: &str = "/transactions/analytics_stats/";
/// The route to list and create categories.
pub const CATEGORIES: &str = "/categories/";
/// The route for per-category month-to-date spending.
pub const CATEGORY_BUDGET_STATS: &str = "/categories/budget_stats/";
/// The route to list and create savings goals.
pub const SAVINGS_GOALS: &str = "/savings-goals/";
/// The route to update or delete a single savings goal.
pub const SAVINGS_GOAL: &str = "/savings-goals/{goal_id}/";
/// The route to add an amount to a savings goal's saved total.
pub const SAVINGS_GOAL_ADD_AMOUNT: &str = "/savings-goals/{goal_id}/add_amount/";
/// The route to list and create payment methods.
pub const PAYMENT_METHODS: &str = "/payment-methods/";
/// The route to update or delete a single payment method.
pub const PAYMENT_METHOD: &str = "/payment-methods/{payment_method_id}/";
/// The route to list notifications.
pub const NOTIFICATIONS: &str = "/notifications/";
/// The route to read and replace the monthly budget limit.
pub const MONTHLY_BUDGET: &str = "/monthly-budget/";
/// The route for the signed-in user's profile.
pub const USER: &str = "/user/";
/// The route that exchanges a username and password for a bearer token.
pub const TOKEN_AUTH: &str = "/token/";
/// The route that registers a new user.
pub const SIGN_UP: &str = "/signup/";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in the endpoint path '/savings-goals/{goal_id}/', '{goal_id}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII
/// characters and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
