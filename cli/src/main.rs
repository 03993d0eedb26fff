//! splitbill CLI - receipt scanning and bill splitting

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use splitbill::{ocr, render, Error, JsonFormat, OcrResponse, ReconstructOptions, Session};

#[derive(Parser)]
#[command(name = "splitbill")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Split scanned receipt bills across participants", long_about = None)]
struct Cli {
    /// Session file
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = "SPLITBILL_SESSION",
        default_value = "splitbill.json"
    )]
    session: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstruct line-item tables from a saved OCR response
    Scan {
        /// OCR response JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Also add reconstructed rows to the session as items
        #[arg(long)]
        import: bool,

        /// Disable parallel reconstruction
        #[arg(long)]
        sequential: bool,
    },

    /// Add, update, or remove items
    Item {
        #[command(subcommand)]
        action: ItemAction,
    },

    /// Add a participant
    Person {
        /// Participant name
        name: String,
    },

    /// Assign or unassign a participant to an item
    Assign {
        /// Item id (see `show`)
        item_id: String,

        /// Participant name
        person: String,

        /// Remove the assignment instead of adding it
        #[arg(long)]
        remove: bool,
    },

    /// Add, update, or remove fees
    Fee {
        #[command(subcommand)]
        action: FeeAction,
    },

    /// Compute and display per-person totals
    Totals,

    /// Show session state
    Show {
        /// Dump the raw session as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// Add an item
    Add {
        /// Item name
        name: String,

        /// Item price (currency symbols are fine)
        price: String,
    },

    /// Update an item's name and price
    Update {
        /// Item id
        id: String,

        /// New name
        name: String,

        /// New price
        price: String,
    },

    /// Remove an item
    Rm {
        /// Item id
        id: String,
    },
}

#[derive(Subcommand)]
enum FeeAction {
    /// Add a fee (negative price for a discount)
    Add {
        /// Fee name
        name: String,

        /// Fee amount
        #[arg(allow_hyphen_values = true)]
        price: f64,

        /// Split evenly instead of proportionally to item spend
        #[arg(long)]
        even: bool,
    },

    /// Update a fee
    Update {
        /// Existing fee name
        name: String,

        /// New amount
        #[arg(allow_hyphen_values = true)]
        price: f64,

        /// New name
        #[arg(long, value_name = "NAME")]
        rename: Option<String>,

        /// Split evenly instead of proportionally to item spend
        #[arg(long)]
        even: bool,
    },

    /// Remove a fee
    Rm {
        /// Fee name
        name: String,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Fixed-width text grid
    Text,
    /// Markdown tables
    Markdown,
    /// Pretty-printed JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let session_path = cli.session;

    let result = match cli.command {
        Commands::Scan {
            input,
            format,
            import,
            sequential,
        } => cmd_scan(&session_path, &input, format, import, sequential),
        Commands::Item { action } => cmd_item(&session_path, action),
        Commands::Person { name } => cmd_person(&session_path, &name),
        Commands::Assign {
            item_id,
            person,
            remove,
        } => cmd_assign(&session_path, &item_id, &person, !remove),
        Commands::Fee { action } => cmd_fee(&session_path, action),
        Commands::Totals => cmd_totals(&session_path),
        Commands::Show { json } => cmd_show(&session_path, json),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Load the session file, or start a fresh session if it does not exist.
fn load_session(path: &Path) -> Result<Session, Error> {
    if path.exists() {
        Session::load(path)
    } else {
        Ok(Session::new())
    }
}

fn cmd_scan(
    session_path: &Path,
    input: &Path,
    format: Format,
    import: bool,
    sequential: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = OcrResponse::from_path(input)?;
    let options = ReconstructOptions::new().with_parallel(!sequential);
    let tables = ocr::reconstruct_with_options(&response.blocks, &options);

    match format {
        Format::Text => println!("{}", render::to_text(&tables)),
        Format::Markdown => println!("{}", render::to_markdown(&tables)),
        Format::Json => println!("{}", render::to_json(&tables, JsonFormat::Pretty)?),
    }

    let mut session = load_session(session_path)?;
    if import {
        let mut imported = 0;
        let mut skipped = 0;
        for table in &tables {
            let report = session.import_table(table);
            imported += report.imported.len();
            skipped += report.skipped.len();
        }
        println!(
            "{} {} items ({} rows without a price skipped)",
            "Imported".green().bold(),
            imported,
            skipped
        );
    }
    session.add_tables(tables);
    session.save(session_path)?;

    Ok(())
}

fn cmd_item(
    session_path: &Path,
    action: ItemAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(session_path)?;

    match action {
        ItemAction::Add { name, price } => {
            let price = parse_price_arg(&price)?;
            let id = session.add_item(name.as_str(), price);
            println!("{} {} ({:.2}) as {}", "Added".green().bold(), name, price, id);
        }
        ItemAction::Update { id, name, price } => {
            let price = parse_price_arg(&price)?;
            session.update_item(&id, name.as_str(), price)?;
            println!("{} {}", "Updated".green().bold(), id);
        }
        ItemAction::Rm { id } => {
            let item = session.remove_item(&id)?;
            println!("{} {}", "Removed".green().bold(), item.name);
        }
    }

    session.save(session_path)?;
    Ok(())
}

fn cmd_person(session_path: &Path, name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(session_path)?;
    session.add_person(name)?;
    println!("{} {}", "Added".green().bold(), name);
    session.save(session_path)?;
    Ok(())
}

fn cmd_assign(
    session_path: &Path,
    item_id: &str,
    person: &str,
    assigned: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(session_path)?;
    session.set_assignment(item_id, person, assigned)?;

    let verb = if assigned { "Assigned" } else { "Unassigned" };
    println!("{} {} -> {}", verb.green().bold(), person, item_id);
    session.save(session_path)?;
    Ok(())
}

fn cmd_fee(session_path: &Path, action: FeeAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(session_path)?;

    match action {
        FeeAction::Add { name, price, even } => {
            session.add_fee(name.as_str(), price, even);
            println!(
                "{} {} ({:.2}, {})",
                "Added".green().bold(),
                name,
                price,
                split_kind(even)
            );
        }
        FeeAction::Update {
            name,
            price,
            rename,
            even,
        } => {
            let new_name = rename.unwrap_or_else(|| name.clone());
            session.update_fee(&name, new_name.as_str(), price, even)?;
            println!("{} {}", "Updated".green().bold(), new_name);
        }
        FeeAction::Rm { name } => {
            session.remove_fee(&name)?;
            println!("{} {}", "Removed".green().bold(), name);
        }
    }

    session.save(session_path)?;
    Ok(())
}

fn cmd_totals(session_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = load_session(session_path)?;
    session.calculate();

    println!("{}", "Totals".bold());
    for person in &session.people {
        let total = session.totals.get(person).copied().unwrap_or(0.0);
        println!("  {:<20} {:>8.2}", person, total);
    }
    let sum: f64 = session.totals.values().sum();
    println!("  {:<20} {:>8.2}", "Sum".dimmed(), sum);

    session.save(session_path)?;
    Ok(())
}

fn cmd_show(session_path: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let session = load_session(session_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
        return Ok(());
    }

    println!("{}", "People".bold());
    for person in &session.people {
        println!("  {}", person);
    }

    println!("{}", "Items".bold());
    let subtotals = session.subtotals();
    for (id, item) in &session.items {
        println!(
            "  {} {:<30} {:>8.2}  [{}]",
            id.as_str().dimmed(),
            item.name,
            item.price,
            item.assignments.join(", ")
        );
    }

    println!("{}", "Fees".bold());
    for fee in &session.fees {
        println!(
            "  {:<20} {:>8.2}  {}",
            fee.name,
            fee.price,
            split_kind(fee.even_split)
        );
    }

    println!("{}", "Subtotals".bold());
    for person in &session.people {
        let subtotal = subtotals.get(person).copied().unwrap_or(0.0);
        println!("  {:<20} {:>8.2}", person, subtotal);
    }

    if !session.tables.is_empty() {
        println!("{} {} table(s) scanned", "Scans".bold(), session.tables.len());
    }

    Ok(())
}

fn parse_price_arg(raw: &str) -> Result<f64, Error> {
    splitbill::parse_price(raw).ok_or_else(|| Error::InvalidPrice(raw.to_string()))
}

fn split_kind(even: bool) -> &'static str {
    if even {
        "even split"
    } else {
        "proportional"
    }
}
