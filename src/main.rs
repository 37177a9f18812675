//! Demo entry point: boots the stores against the configured database,
//! seeds first-run sample data, and renders the dashboard view models to
//! stdout.

use chrono::{Datelike, Utc};
use dotenvy::dotenv;
use moneyboard::errors::Result;
use moneyboard::view::state::UiState;
use moneyboard::{config, core, store, view};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Connect and make sure the key-value table exists
    std::fs::create_dir_all("data")?;
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection established."))
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    config::database::create_tables(&db).await?;

    // 4. Load the stores
    let mut transactions = store::load_transactions(&db).await?;
    let notifications = store::load_notifications(&db).await?;
    info!(
        transactions = transactions.len(),
        notifications = notifications.len(),
        "Stores loaded."
    );

    // 5. First-run sample data
    if core::transaction::seed_sample_data(&db, &mut transactions).await? {
        info!("Seeded sample transactions.");
    }

    let now = Utc::now();
    let today = now.date_naive();

    // Keep the previous-month snapshot slot current
    core::period::snapshot_previous_month(&db, transactions.all(), today.year(), today.month())
        .await?;

    // 6. Render the dashboard
    let dashboard = view::dashboard::dashboard(transactions.all(), today);
    println!("== {} ==", UiState::Dashboard.title());
    for (label, card) in [
        ("Balance", &dashboard.balance),
        ("Income", &dashboard.income),
        ("Expense", &dashboard.expense),
        ("Savings", &dashboard.savings),
    ] {
        println!("{label:>8}: {:>12}  ({})", card.amount, card.trend.text);
    }

    println!("\nRecent transactions:");
    for row in &dashboard.recent {
        println!("  {:>10}  {}  [{}]  {}", row.amount, row.date, row.category, row.description);
    }

    // 7. Render the analytics series
    let points = core::series::trailing_months(transactions.all(), today);
    let line = view::charts::income_expense_series(&points);
    println!("\nTrailing months: {}", line.labels.join(" "));

    let bars = view::charts::monthly_balance_series(&points);
    let balances: Vec<String> = bars.values.iter().map(|v| view::format::inr(*v)).collect();
    println!("Net balances:    {}", balances.join(" "));

    let doughnut =
        view::charts::category_doughnut(&core::category::category_totals(transactions.all()));
    println!("\nCategory breakdown:");
    for (label, value) in doughnut.labels.iter().zip(&doughnut.values) {
        println!("  {label}: {}", view::format::inr(*value));
    }

    let budgets = config::budgets::load_or_default();
    let radar = view::charts::budget_radar(&core::budget::budget_vs_actual(
        transactions.all(),
        &budgets,
    ));
    println!("\nBudget vs actual:");
    for ((label, budgeted), actual) in radar.labels.iter().zip(&radar.budgeted).zip(&radar.actual) {
        println!(
            "  {label}: {} budgeted, {} spent",
            view::format::inr(*budgeted),
            view::format::inr(*actual)
        );
    }

    let feed = view::dashboard::notification_view(notifications.all(), now);
    println!("\n{} unread notifications", feed.unread);

    Ok(())
}
