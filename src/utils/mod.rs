pub mod ids;
pub mod tui;
