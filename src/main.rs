mod commands;
mod render;
mod utils;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sofra_core::config::SofraConfig;
use sofra_core::model::{
    Country, EventType, GuestStatus, Language, RecipeCategory, RecipeFilter, ShoppingCategory,
};
use sofra_core::store::{FileStore, Store};
use tracing_subscriber::EnvFilter;

use crate::commands::AppStore;

#[derive(Parser)]
#[command(name = "sofra")]
#[command(about = "Plan iftars, guests, recipes and shopping for Ramadan")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Greeting, prayer times, countdown and today's events
    Today,
    /// Events in the coming week
    Upcoming,
    /// Month (or week) view with event markers
    Calendar {
        /// Show only the week around the date
        #[arg(short, long)]
        week: bool,

        /// Any day of the month/week to show (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Manage iftar events
    #[command(subcommand)]
    Event(EventCommand),
    /// Manage guests of an event
    #[command(subcommand)]
    Guest(GuestCommand),
    /// Manage the shopping list
    #[command(subcommand)]
    Shop(ShopCommand),
    /// Manage recipes
    #[command(subcommand)]
    Recipe(RecipeCommand),
    /// Show or change language, location and name
    Settings {
        #[arg(long)]
        language: Option<Language>,

        #[arg(long)]
        country: Option<Country>,

        /// City of the selected country (e.g. "Köln" or "Cologne")
        #[arg(long)]
        city: Option<String>,

        /// Name used in the greeting
        #[arg(long)]
        name: Option<String>,
    },
    /// Prayer times for the selected city
    Prayer {
        /// Day to look up (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },
    /// Time left until iftar (or sahur)
    Countdown {
        /// Keep updating every second until interrupted, refetching the
        /// prayer times when the day changes
        #[arg(short, long)]
        watch: bool,
    },
}

#[derive(Subcommand)]
enum EventCommand {
    /// List all events by date
    List,
    Add {
        name: String,

        /// Day of the event (YYYY-MM-DD)
        #[arg(short, long)]
        date: NaiveDate,

        /// hosting or invited
        #[arg(short = 't', long = "type", default_value = "hosting")]
        event_type: EventType,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Dish on the menu (repeatable)
        #[arg(short, long = "menu")]
        menu: Vec<String>,
    },
    Edit {
        /// Event id (or a unique prefix)
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(short, long)]
        date: Option<NaiveDate>,

        #[arg(short = 't', long = "type")]
        event_type: Option<EventType>,

        #[arg(short, long)]
        location: Option<String>,

        #[arg(long)]
        address: Option<String>,

        /// Time of day (HH:MM), or "" to clear
        #[arg(long)]
        time: Option<String>,

        #[arg(long)]
        notes: Option<String>,

        /// Replace the menu (repeatable)
        #[arg(short, long = "menu")]
        menu: Option<Vec<String>>,
    },
    Rm {
        id: String,
    },
    Show {
        id: String,
    },
}

#[derive(Subcommand)]
enum GuestCommand {
    Add {
        /// Event id (or a unique prefix)
        event: String,
        name: String,
    },
    Status {
        event: String,
        /// Guest id (or a unique prefix)
        guest: String,
        /// pending, accepted or declined
        status: GuestStatus,
    },
    Rm {
        event: String,
        guest: String,
    },
}

#[derive(Subcommand)]
enum ShopCommand {
    /// Items grouped by category
    List,
    Add {
        name: String,

        #[arg(short, long, default_value = "")]
        quantity: String,

        #[arg(short, long, default_value = "other")]
        category: ShoppingCategory,
    },
    /// Add several items at once, e.g. "Datteln (1 Packung), Milch"
    Bulk {
        /// Items separated by newlines, commas or semicolons (read from stdin if omitted)
        text: Option<String>,

        #[arg(short, long, default_value = "other")]
        category: ShoppingCategory,
    },
    /// Mark an item done (or not done)
    Toggle {
        id: String,
    },
    Rm {
        id: String,
    },
    /// Remove completed items
    Clear {
        /// Remove every item, not only completed ones
        #[arg(long)]
        all: bool,
    },
}

#[derive(Subcommand)]
enum RecipeCommand {
    List {
        /// all, favorites, or a category (soup, main, dessert, salad, drink)
        #[arg(short, long, default_value = "all")]
        filter: RecipeFilter,
    },
    Add {
        name: String,

        #[arg(short, long)]
        category: RecipeCategory,

        /// Minutes
        #[arg(short, long, default_value_t = 30)]
        prep_time: u32,

        #[arg(long)]
        name_de: Option<String>,

        #[arg(long)]
        name_tr: Option<String>,

        #[arg(long)]
        image: Option<String>,

        /// Ingredient (repeatable)
        #[arg(short, long = "ingredient")]
        ingredients: Vec<String>,

        #[arg(long, default_value = "")]
        instructions: String,
    },
    /// Toggle favorite
    Fav {
        id: String,
    },
    Rm {
        id: String,
    },
    Show {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = SofraConfig::load()?;
    let backend = FileStore::new(config.data_path());
    let data_dir = backend.dir().display().to_string();
    let mut store: AppStore = Store::open(backend)
        .with_context(|| format!("Failed to open the sofra data directory {data_dir}"))?;

    match cli.command {
        Commands::Today => commands::today::run(&mut store, &config).await?,
        Commands::Upcoming => commands::upcoming::run(&store),
        Commands::Calendar { week, date } => commands::calendar::run(&store, date, week),
        Commands::Event(command) => run_event(&mut store, command)?,
        Commands::Guest(command) => run_guest(&mut store, command)?,
        Commands::Shop(command) => run_shop(&mut store, command)?,
        Commands::Recipe(command) => run_recipe(&mut store, command)?,
        Commands::Settings {
            language,
            country,
            city,
            name,
        } => {
            let changes = commands::settings::Changes {
                language,
                country,
                city,
                name,
            };
            commands::settings::run(&mut store, changes)?
        }
        Commands::Prayer { date } => commands::prayer::run(&mut store, &config, date).await?,
        Commands::Countdown { watch } => commands::countdown::run(&mut store, &config, watch).await?,
    }

    store.flush().context("Failed to save your changes")?;

    Ok(())
}

/// Log to stderr, filtered by SOFRA_LOG (default: warnings only).
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("SOFRA_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run_event(store: &mut AppStore, command: EventCommand) -> Result<()> {
    use commands::event;

    match command {
        EventCommand::List => event::list(store),
        EventCommand::Add {
            name,
            date,
            event_type,
            location,
            address,
            time,
            notes,
            menu,
        } => event::add(
            store,
            event::EventArgs {
                name,
                date,
                event_type,
                location,
                address,
                time,
                notes,
                menu,
            },
        )?,
        EventCommand::Edit {
            id,
            name,
            date,
            event_type,
            location,
            address,
            time,
            notes,
            menu,
        } => event::edit(
            store,
            &id,
            event::EditArgs {
                name,
                date,
                event_type,
                location,
                address,
                time,
                notes,
                menu,
            },
        )?,
        EventCommand::Rm { id } => event::remove(store, &id)?,
        EventCommand::Show { id } => event::show(store, &id)?,
    }

    Ok(())
}

fn run_guest(store: &mut AppStore, command: GuestCommand) -> Result<()> {
    use commands::guest;

    match command {
        GuestCommand::Add { event, name } => guest::add(store, &event, &name),
        GuestCommand::Status {
            event,
            guest,
            status,
        } => guest::set_status(store, &event, &guest, status),
        GuestCommand::Rm { event, guest } => guest::remove(store, &event, &guest),
    }
}

fn run_shop(store: &mut AppStore, command: ShopCommand) -> Result<()> {
    use commands::shop;

    match command {
        ShopCommand::List => {
            shop::list(store);
            Ok(())
        }
        ShopCommand::Add {
            name,
            quantity,
            category,
        } => shop::add(store, name, quantity, category),
        ShopCommand::Bulk { text, category } => shop::bulk(store, text, category),
        ShopCommand::Toggle { id } => shop::toggle(store, &id),
        ShopCommand::Rm { id } => shop::remove(store, &id),
        ShopCommand::Clear { all } => {
            shop::clear(store, all);
            Ok(())
        }
    }
}

fn run_recipe(store: &mut AppStore, command: RecipeCommand) -> Result<()> {
    use commands::recipe;

    match command {
        RecipeCommand::List { filter } => {
            recipe::list(store, filter);
            Ok(())
        }
        RecipeCommand::Add {
            name,
            category,
            prep_time,
            name_de,
            name_tr,
            image,
            ingredients,
            instructions,
        } => recipe::add(
            store,
            recipe::RecipeArgs {
                name,
                category,
                prep_time,
                name_de,
                name_tr,
                image,
                ingredients,
                instructions,
            },
        ),
        RecipeCommand::Fav { id } => recipe::toggle_favorite(store, &id),
        RecipeCommand::Rm { id } => recipe::remove(store, &id),
        RecipeCommand::Show { id } => recipe::show(store, &id),
    }
}
