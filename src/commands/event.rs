use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use sofra_core::calendar::ClockTime;
use sofra_core::model::{EventPatch, EventType, NewEvent};

use super::{AppStore, format_date_label, today};
use crate::render::Render;
use crate::utils::ids;

pub struct EventArgs {
    pub name: String,
    pub date: NaiveDate,
    pub event_type: EventType,
    pub location: Option<String>,
    pub address: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub menu: Vec<String>,
}

pub struct EditArgs {
    pub name: Option<String>,
    pub date: Option<NaiveDate>,
    pub event_type: Option<EventType>,
    pub location: Option<String>,
    pub address: Option<String>,
    pub time: Option<String>,
    pub notes: Option<String>,
    pub menu: Option<Vec<String>>,
}

pub fn resolve_id(store: &AppStore, input: &str) -> Result<String> {
    ids::resolve(store.events().iter().map(|e| e.id.as_str()), input, "event")
}

fn parse_time(input: &str) -> Result<ClockTime> {
    input
        .parse()
        .with_context(|| format!("Could not parse time '{input}'"))
}

pub fn list(store: &AppStore) {
    let events = store.sorted_events();

    if events.is_empty() {
        println!("{}", "No events yet".dimmed());
        return;
    }

    let today = today(store);
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

pub fn add(store: &mut AppStore, args: EventArgs) -> Result<()> {
    let time = args.time.as_deref().map(parse_time).transpose()?;

    let event = store.add_event(NewEvent {
        location: args.location.unwrap_or_default(),
        address: args.address.unwrap_or_default(),
        time,
        notes: args.notes.unwrap_or_default(),
        menu: args.menu,
        ..NewEvent::new(args.date, args.event_type, args.name)
    })?;

    println!("{} {}", "Created".green(), event.render());
    Ok(())
}

pub fn edit(store: &mut AppStore, input: &str, args: EditArgs) -> Result<()> {
    let id = resolve_id(store, input)?;

    // An empty --time clears the time of day
    let time = match args.time.as_deref() {
        None => None,
        Some(t) if t.trim().is_empty() => Some(None),
        Some(t) => Some(Some(parse_time(t)?)),
    };

    let patch = EventPatch {
        date: args.date,
        event_type: args.event_type,
        name: args.name,
        location: args.location,
        address: args.address,
        time,
        notes: args.notes,
        menu: args.menu,
        guests: None,
    };

    if patch.is_empty() {
        anyhow::bail!("Nothing to change. See `sofra event edit --help`");
    }

    let Some(event) = store.update_event(&id, patch)? else {
        anyhow::bail!("Event '{input}' not found");
    };

    println!("{} {}", "Updated".yellow(), event.render());
    Ok(())
}

pub fn remove(store: &mut AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let name = store.event(&id).map(|e| e.name.clone()).unwrap_or_default();

    store.remove_event(&id);
    println!("{} {}", "Deleted".red(), name);
    Ok(())
}

pub fn show(store: &AppStore, input: &str) -> Result<()> {
    let id = resolve_id(store, input)?;
    let Some(event) = store.event(&id) else {
        anyhow::bail!("Event '{input}' not found");
    };

    println!("{}", event.name.bold());
    println!("  {:<9} {}", "Date".dimmed(), event.date.format("%A, %-d %B %Y"));
    if let Some(time) = event.time {
        println!("  {:<9} {}", "Time".dimmed(), time);
    }
    println!("  {:<9} {}", "Type".dimmed(), event.event_type.render());
    if !event.location.is_empty() {
        println!("  {:<9} {}", "Location".dimmed(), event.location);
    }
    if !event.address.is_empty() {
        println!("  {:<9} {}", "Address".dimmed(), event.address);
    }
    if !event.notes.is_empty() {
        println!("  {:<9} {}", "Notes".dimmed(), event.notes);
    }
    if !event.menu.is_empty() {
        println!("  {:<9} {}", "Menu".dimmed(), event.menu.join(", "));
    }
    println!("  {:<9} {}", "Id".dimmed(), event.id.dimmed());

    if !event.guests.is_empty() {
        println!();
        println!("{}", "Guests".bold());
        for guest in &event.guests {
            println!("  {}", guest.render());
        }
    }

    Ok(())
}
