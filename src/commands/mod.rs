pub mod calendar;
pub mod countdown;
pub mod event;
pub mod guest;
pub mod prayer;
pub mod recipe;
pub mod settings;
pub mod shop;
pub mod today;
pub mod upcoming;

use chrono::NaiveDate;
use sofra_core::calendar::now_in;
use sofra_core::store::{FileStore, Store};

pub type AppStore = Store<FileStore>;

/// Today's calendar day in the selected country's time zone.
pub fn today(store: &AppStore) -> NaiveDate {
    now_in(store.preferences().selected_country).date()
}

/// "Today", "Tomorrow" or e.g. "Wed Feb 25".
pub fn format_date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
