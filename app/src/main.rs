use nutrivision_app::{Args, build_session};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Args::from_env()?;
    let session = build_session(args)?;

    let overview = session.weekly_overview();
    for day in &overview.days {
        tracing::info!(
            date = %day.date,
            meals = day.meals.len(),
            calories = day.total_calories,
            "{}",
            day.label
        );
    }
    tracing::info!(calories = overview.total_calories(), "Week total");

    if !session.journal().is_persisted() {
        tracing::warn!("Meal journal could not be read from disk");
    }

    Ok(())
}
