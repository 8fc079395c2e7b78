//! Landscape CLI - drive the landscape designer from the command line.
//!
//! Browse the catalog, manage saved designs, and run JSON commands and
//! queries against a design either from a script or interactively.

mod logger;

use anyhow::{bail, Context, Result};
use api::{process_message, Command, Query, QueryResult, Session};
use canvas::CanvasConfig;
use clap::{Parser, Subcommand};
use design::{Catalog, Design};
use logger::{log_section, parse_level, LandscapeLogger};
use project::{DesignStore, StoreConfig};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Landscape CLI - plan gardens from the terminal
#[derive(Parser)]
#[command(name = "landscape")]
#[command(about = "Command-line interface for the landscape designer")]
struct Cli {
    /// Directory holding saved designs (default: $LANDSCAPE_DESIGNS_DIR, then ~/Documents/LandscapeDesigns)
    #[arg(short, long, global = true)]
    store: Option<PathBuf>,

    /// Log level for ~/.landscape/logs
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Run without pen mode and the 3D preview
    #[arg(long, global = true)]
    basic: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List catalog items
    Catalog {
        /// Only items in this category
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List catalog categories
    Categories,

    /// List saved designs, newest first
    List,

    /// Print the inventory and cost report of a saved design
    Show { name: String },

    /// Create and save an empty design
    New {
        name: String,
        /// Width in feet
        #[arg(long, default_value_t = design::DEFAULT_DESIGN_WIDTH)]
        width: f64,
        /// Height in feet
        #[arg(long, default_value_t = design::DEFAULT_DESIGN_HEIGHT)]
        height: f64,
    },

    /// Delete a saved design
    Delete { name: String },

    /// Execute a single JSON command or query
    Exec {
        json: String,
        /// Load this saved design first
        #[arg(short, long)]
        design: Option<String>,
    },

    /// Run a file of JSON commands and queries, one per line
    Run {
        script: PathBuf,
        /// Load this saved design first
        #[arg(short, long)]
        design: Option<String>,
    },

    /// Start interactive mode
    Repl {
        /// Load this saved design first
        #[arg(short, long)]
        design: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = parse_level(&cli.log_level)?;
    if let Err(e) = LandscapeLogger::init(level) {
        eprintln!("File logging disabled: {e:#}");
    }

    let config = match &cli.store {
        Some(root) => StoreConfig::with_root(root),
        None => StoreConfig::default(),
    };
    let store = Arc::new(DesignStore::from_config(&config));
    log::info!("Design store: {}", store.root().display());

    let catalog = Arc::new(Catalog::builtin());
    let canvas_config = if cli.basic {
        CanvasConfig::basic()
    } else {
        CanvasConfig::default()
    };
    let session = Session::new(catalog, store, canvas_config);

    match cli.command {
        Commands::Catalog { category } => list_catalog(&session, category.as_deref()),
        Commands::Categories => list_categories(&session),
        Commands::List => list_designs(&session),
        Commands::Show { name } => show_design(&session, &name),
        Commands::New {
            name,
            width,
            height,
        } => new_design(&session, name, width, height),
        Commands::Delete { name } => {
            session
                .store
                .delete(&name)
                .with_context(|| format!("Failed to delete {name:?}"))?;
            println!("Deleted {name}");
            Ok(())
        }
        Commands::Exec { json, design } => {
            let mut session = open(session, design)?;
            println!("{}", process_message(&mut session, &json));
            Ok(())
        }
        Commands::Run { script, design } => run_script(open(session, design)?, &script),
        Commands::Repl { design } => repl(open(session, design)?),
    }
}

/// Load a saved design into the session, if one was named.
fn open(mut session: Session, design: Option<String>) -> Result<Session> {
    if let Some(name) = design {
        let loaded = session
            .load_design(&name)
            .with_context(|| format!("Failed to open design {name:?}"))?;
        session.canvas.replace_design(loaded);
    }
    Ok(session)
}

fn list_catalog(session: &Session, category: Option<&str>) -> Result<()> {
    let items: Vec<_> = match category {
        Some(category) => session.catalog.by_category(category).collect(),
        None => session.catalog.items().iter().collect(),
    };
    if items.is_empty() {
        bail!("No catalog items in category {:?}", category.unwrap_or_default());
    }
    for item in items {
        println!("{:>3}  {:<24} {}", item.id.0, item.category, item.summary());
    }
    Ok(())
}

fn list_categories(session: &Session) -> Result<()> {
    for category in session.catalog.categories() {
        println!("{category}");
    }
    Ok(())
}

fn list_designs(session: &Session) -> Result<()> {
    let designs = session.store.list_all().context("Failed to list designs")?;
    if designs.is_empty() {
        println!("No saved designs in {}", session.store.root().display());
        return Ok(());
    }
    for design in designs {
        println!(
            "{:<30} {:>5}ft x {:<5}ft {:>3} items  {}",
            design.name,
            design.width(),
            design.height(),
            design.items.len(),
            design.modified_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

fn show_design(session: &Session, name: &str) -> Result<()> {
    let design = session
        .load_design(name)
        .with_context(|| format!("Failed to open design {name:?}"))?;
    println!("{} ({}ft x {}ft)", design.name, design.width(), design.height());
    if !design.notes.is_empty() {
        println!("{}", design.notes);
    }
    println!();
    print!("{}", design.inventory().report());
    Ok(())
}

fn new_design(session: &Session, name: String, width: f64, height: f64) -> Result<()> {
    if session.store.exists(&name) {
        bail!("A design named {name:?} already exists");
    }
    let mut design = Design::new(name, width, height)?;
    let path = session
        .store
        .save(&mut design)
        .with_context(|| format!("Failed to save {:?}", design.name))?;
    println!("Created {}", path.display());
    Ok(())
}

fn run_script(mut session: Session, script: &Path) -> Result<()> {
    let file = std::fs::File::open(script)
        .with_context(|| format!("Failed to open script {}", script.display()))?;
    log_section(&format!("script {}", script.display()));

    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", script.display()))?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        log::debug!("{}:{}: {}", script.display(), number + 1, line);
        println!("{}", process_message(&mut session, line));
        drain_events(&mut session);
    }
    Ok(())
}

/// Interactive REPL over the JSON protocol.
fn repl(mut session: Session) -> Result<()> {
    log_section("interactive");
    println!(
        "Editing {:?}. Enter commands (JSON) or 'help' for usage. Ctrl+D to exit.\n",
        session.design().name
    );
    let stdin = std::io::stdin();

    loop {
        print!("landscape> ");
        std::io::stdout().flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        match input {
            "help" | "?" => print_help(),
            "quit" | "exit" => break,
            "items" => print_json(&mut session, &Query::GetItems { target: None })?,
            "inventory" => match api::execute_query(&session, Query::GetInventoryReport) {
                QueryResult::Report { text } => print!("{text}"),
                other => println!("{}", serde_json::to_string_pretty(&other)?),
            },
            "save" => print_json(&mut session, &Command::Save)?,
            _ => {
                let response = process_message(&mut session, input);
                pretty_print(&response)?;
            }
        }
        drain_events(&mut session);
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(session: &mut Session, message: &T) -> Result<()> {
    let json = serde_json::to_string(message)?;
    pretty_print(&process_message(session, &json))
}

fn pretty_print(response: &str) -> Result<()> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(response) {
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("{}", response.trim());
    }
    Ok(())
}

fn drain_events(session: &mut Session) {
    for event in session.canvas.take_events() {
        log::debug!("canvas event: {event:?}");
    }
}

fn print_help() {
    println!("Landscape CLI Interactive Mode");
    println!("==============================");
    println!();
    println!("Built-in commands:");
    println!("  items       - List placed items");
    println!("  inventory   - Print the inventory and cost report");
    println!("  save        - Save the current design");
    println!("  help, ?     - Show this help");
    println!("  quit, exit  - Exit interactive mode");
    println!();
    println!("JSON Commands (examples):");
    println!("  {{\"type\": \"add_item\", \"item\": \"Hosta\"}}");
    println!("  {{\"type\": \"add_item\", \"item\": 12, \"position\": [20, 15]}}");
    println!("  {{\"type\": \"pointer_down\", \"point\": [400, 300]}}");
    println!("  {{\"type\": \"set_tool\", \"tool\": \"pen\"}}");
    println!("  {{\"type\": \"remove_item\", \"target\": \"selection\"}}");
    println!("  {{\"type\": \"new_design\", \"name\": \"Back Yard\", \"width\": 60, \"height\": 40}}");
    println!();
    println!("JSON Queries:");
    println!("  {{\"type\": \"get_inventory\"}}");
    println!("  {{\"type\": \"get_scene\"}}");
    println!("  {{\"type\": \"list_designs\"}}");
    println!("  {{\"type\": \"get_catalog\", \"category\": \"Vines\"}}");
}
