use anyhow::Result;
use owo_colors::OwoColorize;
use sofra_core::model::GuestStatus;

use super::{AppStore, event};
use crate::render::Render;
use crate::utils::ids;

fn resolve_guest_id(store: &AppStore, event_id: &str, input: &str) -> Result<String> {
    let guests = store
        .event(event_id)
        .map(|e| e.guests.as_slice())
        .unwrap_or_default();

    ids::resolve(guests.iter().map(|g| g.id.as_str()), input, "guest")
}

pub fn add(store: &mut AppStore, event_input: &str, name: &str) -> Result<()> {
    let event_id = event::resolve_id(store, event_input)?;

    let Some(guest) = store.add_guest(&event_id, name)? else {
        anyhow::bail!("Event '{event_input}' not found");
    };

    println!("{} {}", "Invited".green(), guest.render());
    Ok(())
}

pub fn set_status(
    store: &mut AppStore,
    event_input: &str,
    guest_input: &str,
    status: GuestStatus,
) -> Result<()> {
    let event_id = event::resolve_id(store, event_input)?;
    let guest_id = resolve_guest_id(store, &event_id, guest_input)?;

    let Some(guest) = store.set_guest_status(&event_id, &guest_id, status) else {
        anyhow::bail!("Guest '{guest_input}' not found");
    };

    println!("{}", guest.render());
    Ok(())
}

pub fn remove(store: &mut AppStore, event_input: &str, guest_input: &str) -> Result<()> {
    let event_id = event::resolve_id(store, event_input)?;
    let guest_id = resolve_guest_id(store, &event_id, guest_input)?;

    let name = store
        .event(&event_id)
        .and_then(|e| e.guest(&guest_id))
        .map(|g| g.name.clone())
        .unwrap_or_default();

    store.remove_guest(&event_id, &guest_id);
    println!("{} {}", "Removed".red(), name);
    Ok(())
}
