//! A terminal rendition of the tracker's home screen.
//!
//! Fetches the dashboard through the caching client and prints the same
//! aggregates the UI renders: balance and month change, budget utilization
//! with its severity band, the weekly spending bars, the category
//! breakdown, today's activity and savings-goal progress.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use spendwise::{
    ApiClient, ClientConfig, Error,
    currency::format_currency,
    icon::Icon,
    metrics::{
        BudgetBand, BudgetUtilization, category_breakdown, distribution_legend, transactions_on,
        weekly_series,
    },
    model::{AnalyticsSummary, SavingsGoal, Transaction, TransactionType, WeeklyBucket, unread_count},
};

/// Print an overview of your finances from the tracker backend.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The root URL of the backend API.
    #[arg(long, default_value = "http://localhost:8000/api")]
    base_url: String,

    /// The username to log in as. Prompts for the password.
    #[arg(short, long)]
    username: Option<String>,

    /// A previously issued bearer token, skipping the log-in prompt.
    #[arg(long, conflicts_with = "username")]
    token: Option<String>,

    /// The canonical timezone used to resolve "today", e.g. "Asia/Kolkata".
    #[arg(long)]
    timezone: Option<String>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    if let Err(error) = run(args).await {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let mut config = ClientConfig::new(&args.base_url);
    config.timezone = args.timezone;

    let client = ApiClient::new(&config)?;

    if let Some(token) = &args.token {
        client.store_token(token);
    } else if let Some(username) = &args.username {
        let password = rpassword::prompt_password(format!("Password for {username}: "))
            .map_err(|error| Error::Transport(error.to_string()))?;

        client.log_in(username, &password).await?;
        tracing::info!("logged in as {username}");
    }

    let profile = client.profile().await?;
    let dashboard = client.dashboard().await?;
    let transactions = client.transactions().await?;
    let goals = client.savings_goals().await?;
    let notifications = client.notifications().await?;

    println!("Welcome back, {}!", profile.display_name());

    let unread = unread_count(&notifications);
    if unread > 0 {
        println!("You have {unread} unread notifications.");
    }

    println!();
    println!("Balance: {}", format_currency(dashboard.balance));

    let trend = if dashboard.month_change_is_positive() {
        "up"
    } else {
        "down"
    };
    println!("{trend} {:+.1}% this month", dashboard.month_change);

    print_budget(dashboard.expense, dashboard.total_budget);
    print_week(&client, &dashboard.weekly_spending);
    print_breakdown(&transactions);
    print_today(&client, &transactions);
    print_goals(&goals);

    let analytics = client.analytics().await?;
    print_stats(&analytics);

    Ok(())
}

fn print_stats(analytics: &AnalyticsSummary) {
    println!();
    println!(
        "Total spent: {} across {} transactions (avg {} / day)",
        format_currency(analytics.summary.total_spent),
        analytics.summary.transaction_count,
        format_currency(analytics.summary.avg_daily),
    );

    let legend = distribution_legend(
        &analytics.category_distribution,
        analytics.summary.total_spent,
        4,
    );

    for entry in &legend {
        println!(
            "  {:<16} {:>12}  {}%  {}",
            entry.name,
            format_currency(entry.value),
            entry.percent,
            entry.color,
        );
    }

    if !analytics.monthly_trend.is_empty() {
        let months: Vec<String> = analytics
            .monthly_trend
            .iter()
            .map(|point| format!("{} {}", point.month, format_currency(point.amount)))
            .collect();

        println!("Trend: {}", months.join("  "));
    }
}

fn print_budget(expense: f64, total_budget: f64) {
    let utilization = BudgetUtilization::new(expense, total_budget);

    println!();
    println!(
        "Monthly spending: {} / {} ({}% used)",
        format_currency(utilization.expense),
        format_currency(utilization.total_budget),
        utilization.rounded_percent(),
    );

    match utilization.band {
        BudgetBand::Exceeded => println!(
            "  !! Budget exceeded: you've spent {}% of your monthly limit.",
            utilization.rounded_percent()
        ),
        BudgetBand::Warning => println!(
            "  ! Budget warning: you've used {}% of your monthly limit.",
            utilization.rounded_percent()
        ),
        BudgetBand::Alert => println!(
            "  Budget alert: you've used {}% of your monthly limit.",
            utilization.rounded_percent()
        ),
        BudgetBand::Normal => {}
    }
}

fn print_week(client: &ApiClient, buckets: &[WeeklyBucket]) {
    if buckets.is_empty() {
        return;
    }

    let series = weekly_series(buckets, client.today());

    println!();
    println!("This week:");

    for bar in &series.bars {
        let width = (bar.height_percent / 5.0).round() as usize;
        let marker = if bar.is_today { " <- today" } else { "" };

        println!(
            "  {:<3} {:<20} {}{marker}",
            bar.label,
            "#".repeat(width),
            format_currency(bar.amount),
        );
    }
}

fn print_breakdown(transactions: &[Transaction]) {
    let breakdown = category_breakdown(transactions, Some(4));

    if breakdown.is_empty() {
        return;
    }

    println!();
    println!("Top spending categories:");

    for category in &breakdown {
        println!(
            "  {:<16} {:>12}  {:.0}%",
            category.name,
            format_currency(category.total),
            category.percent,
        );
    }
}

fn print_today(client: &ApiClient, transactions: &[Transaction]) {
    let today = transactions_on(transactions, client.today(), client.local_offset(), 5);

    if today.is_empty() {
        return;
    }

    println!();
    println!("Today:");

    for transaction in today {
        let sign = match transaction.transaction_type {
            TransactionType::Income => '+',
            TransactionType::Expense => '-',
        };
        let icon = Icon::from_name(
            transaction
                .category
                .as_ref()
                .and_then(|category| category.icon.as_deref())
                .unwrap_or(""),
        );

        println!(
            "  {} {:<20} {sign}{}",
            icon.glyph(),
            transaction.title,
            format_currency(transaction.amount),
        );
    }
}

fn print_goals(goals: &[SavingsGoal]) {
    if goals.is_empty() {
        return;
    }

    println!();
    println!("Savings goals:");

    for goal in goals {
        let fill = (goal.fill_percent() / 10.0).round() as usize;

        println!(
            "  {:<16} [{}{}] {}%  {} / {}",
            goal.name,
            "#".repeat(fill),
            "-".repeat(10 - fill),
            goal.progress_percent(),
            format_currency(goal.saved_amount),
            format_currency(goal.target_amount),
        );
    }
}

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}
