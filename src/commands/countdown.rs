use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use sofra_core::calendar::{countdown, now_in};
use sofra_core::config::SofraConfig;
use sofra_core::ticker::CountdownTicker;

use super::{AppStore, prayer};
use crate::render::Render;

pub async fn run(store: &mut AppStore, config: &SofraConfig, watch: bool) -> Result<()> {
    let country = store.preferences().selected_country;
    let mut fetched_for = now_in(country).date();

    let Some(mut times) = prayer::fetch(store, config, fetched_for).await? else {
        anyhow::bail!("Countdown needs prayer times");
    };

    if !watch {
        println!("{}", countdown(now_in(country), times.iftar(), times.sahur()).render());
        return Ok(());
    }

    let mut stdout = std::io::stdout();
    'watch: loop {
        let (ticker, mut rx) =
            CountdownTicker::spawn(move || now_in(country), times.iftar(), times.sahur());

        loop {
            let line = rx.borrow_and_update().render();
            // Clear the line and redraw in place
            write!(stdout, "\r\x1b[2K{line}")?;
            stdout.flush()?;

            tokio::select! {
                changed = rx.changed() => {
                    if changed.is_err() {
                        break 'watch;
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    ticker.cancel();
                    break 'watch;
                }
            }

            if is_new_day(fetched_for, now_in(country)) {
                ticker.cancel();
                break;
            }
        }

        // A new day has its own prayer times; a failed lookup keeps the old ones
        fetched_for = now_in(country).date();
        writeln!(stdout)?;
        if let Some(fresh) = prayer::fetch(store, config, fetched_for).await? {
            times = fresh;
        }
    }

    writeln!(stdout)?;

    Ok(())
}

fn is_new_day(fetched_for: NaiveDate, now: NaiveDateTime) -> bool {
    now.date() != fetched_for
}
