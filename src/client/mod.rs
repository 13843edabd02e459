//! The typed API client.
//!
//! Every screen's data goes through [ApiClient]: reads are served from the
//! request cache when fresh, mutations clear that cache before they return,
//! and a rejected credential resets the session in one place instead of in
//! every screen.

mod credentials;
mod transport;

pub use credentials::{CredentialStore, MemoryCredentialStore};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Method, Transport};

use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use time::{Date, UtcOffset};

use crate::{
    Error,
    cache::{CacheKey, RequestCache},
    config::ClientConfig,
    endpoints,
    model::{
        AnalyticsSummary, Category, CategorySpending, DashboardSummary, MonthlyBudget,
        NewCategory, NewPaymentMethod, NewSavingsGoal, NewTransaction, Notification,
        PaymentMethod, SavingsGoal, Transaction, UserProfile,
    },
    timezone,
};

/// The client for the tracker's REST backend.
///
/// Holds the request cache, the credential store and the transport; all
/// three are injectable, so tests drive the full read/mutate/invalidate
/// cycle against an in-memory transport and a host application can supply
/// its own credential storage.
pub struct ApiClient {
    transport: Box<dyn Transport>,
    credentials: Box<dyn CredentialStore>,
    cache: Mutex<RequestCache>,
    local_offset: UtcOffset,
}

impl ApiClient {
    /// Create a client for the backend described by `config`.
    ///
    /// # Errors
    /// Returns [Error::InvalidBaseUrl] when the configured base URL does
    /// not parse.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let transport = HttpTransport::new(&config.base_url, config.request_timeout)?;

        let local_offset = match &config.timezone {
            Some(name) => match timezone::get_local_offset(name) {
                Some(offset) => offset,
                None => {
                    tracing::warn!("unknown timezone {name:?}, falling back to UTC");
                    UtcOffset::UTC
                }
            },
            None => UtcOffset::UTC,
        };

        Ok(Self::with_parts(
            Box::new(transport),
            Box::new(MemoryCredentialStore::new()),
            RequestCache::new(config.cache_ttl),
            local_offset,
        ))
    }

    /// Assemble a client from explicit parts.
    pub fn with_parts(
        transport: Box<dyn Transport>,
        credentials: Box<dyn CredentialStore>,
        cache: RequestCache,
        local_offset: UtcOffset,
    ) -> Self {
        Self {
            transport,
            credentials,
            cache: Mutex::new(cache),
            local_offset,
        }
    }

    /// The UTC offset used to resolve local calendar dates.
    pub fn local_offset(&self) -> UtcOffset {
        self.local_offset
    }

    /// Today's calendar date in the configured timezone.
    pub fn today(&self) -> Date {
        timezone::today(self.local_offset)
    }

    // ========================================================================
    // AUTH
    // ========================================================================

    /// Exchange a username and password for a session token and store it.
    ///
    /// # Errors
    /// Returns [Error::InvalidCredentials] when the backend rejects the
    /// pair; the stored session state is left untouched so a typo does not
    /// log the user out.
    pub async fn log_in(&self, username: &str, password: &str) -> Result<(), Error> {
        let body = json!({"username": username, "password": password});

        let response = self
            .send(Method::Post, endpoints::TOKEN_AUTH, &[], Some(body))
            .await?;

        let token = response
            .get("access")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::Decode("token response is missing \"access\"".to_owned()))?;

        self.credentials.set(token.to_owned());

        // The session changed hands, nothing cached before it applies.
        self.cache.lock().unwrap().invalidate_all();

        Ok(())
    }

    /// Register a new account.
    ///
    /// # Errors
    /// Returns [Error::PasswordMismatch] when `password` and
    /// `confirm_password` differ, before any network call is made.
    pub async fn sign_up(
        &self,
        username: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<(), Error> {
        if password != confirm_password {
            return Err(Error::PasswordMismatch);
        }

        let body = json!({"username": username, "password": password});

        self.mutate(Method::Post, endpoints::SIGN_UP, Some(body))
            .await?;

        Ok(())
    }

    /// Discard the session token and everything cached under it.
    pub fn log_out(&self) {
        self.credentials.clear();
        self.cache.lock().unwrap().invalidate_all();
        tracing::info!("logged out, session state cleared");
    }

    /// Whether a session token is currently stored.
    pub fn is_authenticated(&self) -> bool {
        self.credentials.get().is_some()
    }

    /// Store a previously issued token, e.g. one persisted by the host
    /// application between sessions.
    pub fn store_token(&self, token: &str) {
        self.credentials.set(token.to_owned());
    }

    // ========================================================================
    // READS
    // ========================================================================

    /// All transactions, newest first.
    pub async fn transactions(&self) -> Result<Vec<Transaction>, Error> {
        let value = self.read(endpoints::TRANSACTIONS, &[]).await?;
        decode(unwrap_results(value))
    }

    /// All spending categories.
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        let value = self.read(endpoints::CATEGORIES, &[]).await?;
        decode(unwrap_results(value))
    }

    /// The user's savings goals.
    pub async fn savings_goals(&self) -> Result<Vec<SavingsGoal>, Error> {
        let value = self.read(endpoints::SAVINGS_GOALS, &[]).await?;
        decode(unwrap_results(value))
    }

    /// The user's payment methods.
    pub async fn payment_methods(&self) -> Result<Vec<PaymentMethod>, Error> {
        let value = self.read(endpoints::PAYMENT_METHODS, &[]).await?;
        decode(unwrap_results(value))
    }

    /// The user's notifications, newest first.
    pub async fn notifications(&self) -> Result<Vec<Notification>, Error> {
        let value = self.read(endpoints::NOTIFICATIONS, &[]).await?;
        decode(unwrap_results(value))
    }

    /// The monthly budget limit, normalized from either server shape.
    pub async fn monthly_budget(&self) -> Result<MonthlyBudget, Error> {
        let value = self.read(endpoints::MONTHLY_BUDGET, &[]).await?;
        Ok(MonthlyBudget::from_response(&value))
    }

    /// The pre-aggregated home-screen summary.
    pub async fn dashboard(&self) -> Result<DashboardSummary, Error> {
        let value = self.read(endpoints::DASHBOARD_STATS, &[]).await?;
        decode(value)
    }

    /// The pre-aggregated statistics-screen summary.
    pub async fn analytics(&self) -> Result<AnalyticsSummary, Error> {
        let value = self.read(endpoints::ANALYTICS_STATS, &[]).await?;
        decode(value)
    }

    /// Month-to-date spending per category.
    pub async fn category_spending(&self) -> Result<Vec<CategorySpending>, Error> {
        let value = self.read(endpoints::CATEGORY_BUDGET_STATS, &[]).await?;
        decode(unwrap_results(value))
    }

    /// The signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile, Error> {
        let value = self.read(endpoints::USER, &[]).await?;
        decode(value)
    }

    // ========================================================================
    // MUTATIONS
    // ========================================================================

    /// Create a transaction.
    pub async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, Error> {
        transaction.validate()?;

        let value = self
            .mutate(
                Method::Post,
                endpoints::TRANSACTIONS,
                Some(encode(transaction)?),
            )
            .await?;

        decode(value)
    }

    /// Replace the transaction with `id`.
    pub async fn update_transaction(
        &self,
        id: i64,
        transaction: &NewTransaction,
    ) -> Result<Transaction, Error> {
        transaction.validate()?;

        let path = endpoints::format_endpoint(endpoints::TRANSACTION, id);
        let value = self
            .mutate(
                Method::Put,
                &path,
                Some(encode(transaction)?),
            )
            .await?;

        decode(value)
    }

    /// Delete the transaction with `id`.
    pub async fn delete_transaction(&self, id: i64) -> Result<(), Error> {
        let path = endpoints::format_endpoint(endpoints::TRANSACTION, id);
        self.mutate(Method::Delete, &path, None).await?;

        Ok(())
    }

    /// Create a category.
    pub async fn create_category(&self, category: &NewCategory) -> Result<Category, Error> {
        category.validate()?;

        let value = self
            .mutate(
                Method::Post,
                endpoints::CATEGORIES,
                Some(encode(category)?),
            )
            .await?;

        decode(value)
    }

    /// Create a savings goal.
    pub async fn create_savings_goal(&self, goal: &NewSavingsGoal) -> Result<SavingsGoal, Error> {
        goal.validate()?;

        let value = self
            .mutate(
                Method::Post,
                endpoints::SAVINGS_GOALS,
                Some(encode(goal)?),
            )
            .await?;

        decode(value)
    }

    /// Update the savings goal with `id`.
    pub async fn update_savings_goal(
        &self,
        id: i64,
        goal: &NewSavingsGoal,
    ) -> Result<SavingsGoal, Error> {
        goal.validate()?;

        let path = endpoints::format_endpoint(endpoints::SAVINGS_GOAL, id);
        let value = self
            .mutate(
                Method::Patch,
                &path,
                Some(encode(goal)?),
            )
            .await?;

        decode(value)
    }

    /// Delete the savings goal with `id`.
    pub async fn delete_savings_goal(&self, id: i64) -> Result<(), Error> {
        let path = endpoints::format_endpoint(endpoints::SAVINGS_GOAL, id);
        self.mutate(Method::Delete, &path, None).await?;

        Ok(())
    }

    /// Add `amount` to the saved total of the goal with `id`.
    ///
    /// # Errors
    /// Returns [Error::NonPositiveAmount] for a zero or negative amount,
    /// before any network call is made.
    pub async fn add_to_savings_goal(&self, id: i64, amount: f64) -> Result<(), Error> {
        if !(amount > 0.0) {
            return Err(Error::NonPositiveAmount(amount.to_string()));
        }

        let path = endpoints::format_endpoint(endpoints::SAVINGS_GOAL_ADD_AMOUNT, id);
        self.mutate(Method::Post, &path, Some(json!({"amount": amount})))
            .await?;

        Ok(())
    }

    /// Create a payment method.
    pub async fn create_payment_method(
        &self,
        payment_method: &NewPaymentMethod,
    ) -> Result<PaymentMethod, Error> {
        payment_method.validate()?;

        let value = self
            .mutate(
                Method::Post,
                endpoints::PAYMENT_METHODS,
                Some(encode(payment_method)?),
            )
            .await?;

        decode(value)
    }

    /// Delete the payment method with `id`.
    pub async fn delete_payment_method(&self, id: i64) -> Result<(), Error> {
        let path = endpoints::format_endpoint(endpoints::PAYMENT_METHOD, id);
        self.mutate(Method::Delete, &path, None).await?;

        Ok(())
    }

    /// Replace the monthly budget limit.
    ///
    /// # Errors
    /// Returns [Error::NonPositiveAmount] for a zero or negative amount,
    /// before any network call is made.
    pub async fn set_monthly_budget(&self, amount: f64) -> Result<(), Error> {
        if !(amount > 0.0) {
            return Err(Error::NonPositiveAmount(amount.to_string()));
        }

        self.mutate(
            Method::Post,
            endpoints::MONTHLY_BUDGET,
            Some(json!({"amount": amount})),
        )
        .await?;

        Ok(())
    }

    // ========================================================================
    // CORE
    // ========================================================================

    /// Perform a read, serving it from the cache when fresh.
    ///
    /// A hit never reaches the transport; a miss performs the network read
    /// and stores the payload for next time.
    async fn read(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, Error> {
        let key = CacheKey::new(path, query);

        if let Some(payload) = self.cache.lock().unwrap().get(&key) {
            tracing::debug!("cache hit for {path}");
            return Ok(payload);
        }

        tracing::debug!("cache miss for {path}");
        let payload = self.send(Method::Get, path, query, None).await?;

        self.cache.lock().unwrap().put(key, payload.clone());

        Ok(payload)
    }

    /// Perform a mutation and clear the cache once it succeeds.
    ///
    /// The cache is cleared before this returns, so invalidation
    /// happens-before any read issued after the mutation.
    async fn mutate(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, Error> {
        debug_assert!(!method.is_read());

        let payload = self.send(method, path, &[], body).await?;

        self.cache.lock().unwrap().invalidate_all();

        Ok(payload)
    }

    /// Send one request and translate the response status.
    ///
    /// A 401 from any endpoint except the auth endpoints resets the session
    /// (credential and cache) and surfaces as [Error::Unauthorized]; on the
    /// auth endpoints it stays a plain [Error::InvalidCredentials] so a
    /// failed log-in does not bounce the caller back through the log-in
    /// flow it is already in.
    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, Error> {
        let request = ApiRequest {
            method,
            path: path.to_owned(),
            query: query
                .iter()
                .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
                .collect(),
            body,
            bearer: self.credentials.get(),
        };

        let response = self.transport.execute(request).await?;

        if response.is_success() {
            return Ok(response.body);
        }

        if response.status == 401 {
            if is_auth_endpoint(path) {
                return Err(Error::InvalidCredentials);
            }

            self.credentials.clear();
            self.cache.lock().unwrap().invalidate_all();
            tracing::info!("session credential rejected, cleared credential and cache");

            return Err(Error::Unauthorized);
        }

        Err(Error::Api {
            status: response.status,
            message: error_message(&response.body),
        })
    }
}

fn is_auth_endpoint(path: &str) -> bool {
    path == endpoints::TOKEN_AUTH || path == endpoints::SIGN_UP
}

/// Pull a human-readable message out of an error body.
///
/// The backend uses "detail" for framework errors and "error" for its own.
fn error_message(body: &Value) -> String {
    for field in ["error", "detail", "message"] {
        if let Some(message) = body.get(field).and_then(Value::as_str) {
            return message.to_owned();
        }
    }

    "no details provided".to_owned()
}

/// Unwrap a paginated list response to its `results` array.
///
/// List endpoints answer either a bare array or `{"count": ..., "results":
/// [...]}` depending on whether pagination is enabled server-side.
fn unwrap_results(value: Value) -> Value {
    match value {
        Value::Object(mut object) => object.remove("results").unwrap_or(Value::Array(vec![])),
        other => other,
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|error| Error::Decode(error.to_string()))
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<Value, Error> {
    serde_json::to_value(payload).map_err(|error| Error::Decode(error.to_string()))
}
