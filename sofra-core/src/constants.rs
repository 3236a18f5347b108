/// How far ahead the dashboard looks for upcoming events.
pub const UPCOMING_WINDOW_DAYS: i64 = 7;

/// Maximum number of upcoming events shown on the dashboard.
pub const UPCOMING_LIMIT: usize = 5;

pub const DEFAULT_PRAYER_API_URL: &str = "https://api.aladhan.com";

pub const DEFAULT_REQUEST_TIMEOUT: &str = "10s";

pub const DEFAULT_DATA_DIR: &str = "~/.local/share/sofra";
