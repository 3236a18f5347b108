use owo_colors::OwoColorize;

use super::{AppStore, format_date_label, today};
use crate::render::Render;

pub fn run(store: &AppStore) {
    let today = today(store);
    let events = store.upcoming_events(today);

    if events.is_empty() {
        println!("{}", "No events in the coming week".dimmed());
    } else {
        // Group events by day
        let mut current_date = None;

        for event in events {
            if current_date != Some(event.date) {
                if current_date.is_some() {
                    println!();
                }
                println!("{}", format_date_label(event.date, today).bold());
                current_date = Some(event.date);
            }
            println!("  {}", event.render());
        }
    }

    let stats = store.event_stats();
    println!();
    println!(
        "{}",
        format!("Hosting {} · Invited {}", stats.hosting, stats.invited).dimmed()
    );
}
