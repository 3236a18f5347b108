use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sofra_core::config::SofraConfig;
use sofra_core::prayer::{PrayerTimes, PrayerTimesClient};

use super::{AppStore, today};
use crate::render::Render;
use crate::utils::tui::create_spinner;

pub async fn run(store: &mut AppStore, config: &SofraConfig, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(|| today(store));

    let Some(times) = fetch(store, config, date).await? else {
        anyhow::bail!("No prayer times available");
    };

    let prefs = store.preferences();
    println!(
        "{}",
        format!("{}, {}", prefs.selected_city, prefs.selected_country).bold()
    );
    println!("{}", date.format("%A, %-d %B %Y").to_string().dimmed());
    println!("{}", times.render());

    Ok(())
}

/// Fetch prayer times for the selected city, with a spinner.
///
/// A failed lookup is printed and yields `None` so views can go on without
/// the times.
pub async fn fetch(
    store: &mut AppStore,
    config: &SofraConfig,
    date: NaiveDate,
) -> Result<Option<PrayerTimes>> {
    let client = PrayerTimesClient::from_config(config)?;

    let spinner = create_spinner(format!("Fetching prayer times for {}", store.preferences().selected_city));
    store.refresh_prayer_times(&client, date).await;
    spinner.finish_and_clear();

    if let Some(error) = store.prayer().error() {
        eprintln!("{}", error.red());
    }

    Ok(store.prayer().times().copied())
}
