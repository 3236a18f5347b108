use anyhow::Result;
use owo_colors::OwoColorize;
use sofra_core::calendar::{countdown, now_in};
use sofra_core::config::SofraConfig;

use super::{AppStore, prayer};
use crate::render::Render;

pub async fn run(store: &mut AppStore, config: &SofraConfig) -> Result<()> {
    let prefs = store.preferences().clone();
    let now = now_in(prefs.selected_country);
    let today = now.date();

    let greeting = if prefs.user_name.is_empty() {
        "Ramadan Mubarak!".to_string()
    } else {
        format!("Ramadan Mubarak, {}!", prefs.user_name)
    };
    println!("{}", greeting.bold());

    let city = prefs
        .city()
        .map(|c| c.display_name(prefs.language))
        .unwrap_or(prefs.selected_city.as_str());
    println!("{}", format!("{} · {city}", today.format("%A, %-d %B %Y")).dimmed());
    println!();

    if let Some(times) = prayer::fetch(store, config, today).await? {
        println!("{}", times.render());
        println!();
        println!("{}", countdown(now, times.iftar(), times.sahur()).render());
        println!();
    }

    let events = store.events_by_date(today);
    if events.is_empty() {
        println!("{}", "No events today".dimmed());
    } else {
        println!("{}", "Today".bold());
        for event in events {
            println!("  {}", event.render());
        }
    }

    let (completed, total) = store.shopping_progress();
    if total > 0 {
        println!();
        println!(
            "{}",
            format!("Shopping list: {completed}/{total} done").dimmed()
        );
    }

    Ok(())
}
