//! Terminal rendering for sofra-core types.
//!
//! Extension traits that add colored output with owo_colors.

use owo_colors::OwoColorize;
use sofra_core::calendar::Countdown;
use sofra_core::model::{
    Event, EventType, Guest, GuestStatus, Language, Recipe, ShoppingItem,
};
use sofra_core::prayer::PrayerTimes;

use crate::utils::ids::short_id;

pub trait Render {
    fn render(&self) -> String;
}

/// Rendering that depends on the display language.
pub trait RenderLocalized {
    fn render(&self, language: Language) -> String;
}

impl Render for EventType {
    fn render(&self) -> String {
        match self {
            EventType::Hosting => "hosting".green().to_string(),
            EventType::Invited => "invited".cyan().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = self
            .time
            .map(|t| t.to_string())
            .unwrap_or_else(|| "--:--".to_string());
        let mut line = format!(
            "{} {:>5}  {} {}",
            short_id(&self.id).dimmed(),
            time,
            self.name.bold(),
            format!("[{}]", self.event_type.render()),
        );

        if !self.location.is_empty() {
            line.push_str(&format!("  {}", self.location.dimmed()));
        }
        if !self.guests.is_empty() {
            let accepted = self.guests_with_status(GuestStatus::Accepted);
            let guests = format!("{accepted}/{} guests", self.guests.len());
            line.push_str(&format!("  {}", guests.dimmed()));
        }
        line
    }
}

impl Render for GuestStatus {
    fn render(&self) -> String {
        match self {
            GuestStatus::Pending => "?".yellow().to_string(),
            GuestStatus::Accepted => "✓".green().to_string(),
            GuestStatus::Declined => "✗".red().to_string(),
        }
    }
}

impl Render for Guest {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.status.render(),
            self.name,
            short_id(&self.id).dimmed()
        )
    }
}

impl Render for ShoppingItem {
    fn render(&self) -> String {
        let check = if self.completed {
            "[x]".green().to_string()
        } else {
            "[ ]".to_string()
        };
        let name = if self.completed {
            self.name.strikethrough().dimmed().to_string()
        } else {
            self.name.clone()
        };

        format!(
            "{} {} {} {}",
            short_id(&self.id).dimmed(),
            check,
            name,
            self.quantity.dimmed()
        )
        .trim_end()
        .to_string()
    }
}

impl RenderLocalized for Recipe {
    fn render(&self, language: Language) -> String {
        let star = if self.is_favorite {
            "★".yellow().to_string()
        } else {
            " ".to_string()
        };
        let details = format!("{}, {} min", self.category, self.prep_time);

        format!(
            "{} {} {} {}",
            short_id(&self.id).dimmed(),
            star,
            self.display_name(language).bold(),
            details.dimmed()
        )
    }
}

impl Render for PrayerTimes {
    fn render(&self) -> String {
        self.iter()
            .map(|(name, time)| {
                let line = format!("  {:<8} {}", name.to_string(), time);
                if time == self.iftar() || time == self.sahur() {
                    line.bold().to_string()
                } else {
                    line
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Render for Countdown {
    fn render(&self) -> String {
        let label = if self.target_is_a { "Iftar" } else { "Sahur" };
        format!(
            "{} in {} {}",
            label,
            self.to_string().bold(),
            format!("({})", self.target.format("%a %H:%M")).dimmed()
        )
    }
}
