use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use sofra_core::calendar::{Day, month_grid, week_days};

use super::{AppStore, today};
use crate::render::Render;

const WEEKDAY_HEADER: &str = " Mo  Tu  We  Th  Fr  Sa  Su";

pub fn run(store: &AppStore, date: Option<NaiveDate>, week: bool) {
    let today = today(store);
    let anchor = date.unwrap_or(today);

    if week {
        print_week(store, anchor, today);
    } else {
        print_month(store, anchor, today);
    }
}

fn print_month(store: &AppStore, anchor: NaiveDate, today: NaiveDate) {
    println!("{}", anchor.format("%B %Y").to_string().bold());
    println!("{}", WEEKDAY_HEADER.dimmed());

    for week in month_grid(anchor).chunks(7) {
        let cells: Vec<String> = week.iter().map(|day| render_cell(store, day, today)).collect();
        println!("{}", cells.join(""));
    }

    let in_month: Vec<_> = store
        .sorted_events()
        .into_iter()
        .filter(|e| e.date.year() == anchor.year() && e.date.month() == anchor.month())
        .collect();

    if !in_month.is_empty() {
        println!();
        for event in in_month {
            println!("{} {}", event.date.format("%d").to_string().bold(), event.render());
        }
    }
}

/// A 4-wide cell: day number plus an event marker.
fn render_cell(store: &AppStore, day: &Day, today: NaiveDate) -> String {
    let number = format!("{:>3}", day.date.format("%-d"));
    let marker = if store.events_by_date(day.date).is_empty() {
        " "
    } else {
        "•"
    };

    let number = if day.date == today {
        number.reversed().to_string()
    } else if !day.is_in_current_month {
        number.dimmed().to_string()
    } else {
        number
    };

    format!("{number}{}", marker.yellow())
}

fn print_week(store: &AppStore, anchor: NaiveDate, today: NaiveDate) {
    for day in week_days(anchor) {
        let label = day.date.format("%a %-d %b").to_string();
        let label = if day.date == today {
            label.bold().underline().to_string()
        } else {
            label.bold().to_string()
        };
        println!("{label}");

        let events = store.events_by_date(day.date);
        if events.is_empty() {
            println!("  {}", "-".dimmed());
        }
        for event in events {
            println!("  {}", event.render());
        }
    }
}
