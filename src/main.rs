use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use flow::cli::{
    handle_add, handle_category_command, handle_currency_command, handle_delete, handle_edit,
    handle_export_command, handle_import, handle_list, CategoryCommands, CurrencyCommands,
    ExportCommands,
};
use flow::config::paths::FlowPaths;
use flow::display::format_summary;
use flow::store::Tracker;

#[derive(Parser)]
#[command(
    name = "flow",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Flow is a terminal-based personal expense tracker. Record expenses \
                  against categories, view spending summaries, switch the display \
                  currency between USD and NGN, and import or export your data as \
                  CSV/JSON. Everything is stored locally."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new expense
    Add {
        /// Amount in USD
        amount: f64,
        /// What the money was spent on
        description: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Delete an expense by id
    Delete {
        /// Expense id
        id: String,
    },

    /// Edit an existing expense
    Edit {
        /// Expense id
        id: String,
        /// New amount in USD
        #[arg(short, long)]
        amount: Option<f64>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New category name
        #[arg(short, long)]
        category: Option<String>,
        /// New expense date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Show spending summary
    Summary,

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Display currency commands
    #[command(subcommand)]
    Currency(CurrencyCommands),

    /// Export data as CSV or JSON
    #[command(subcommand)]
    Export(ExportCommands),

    /// Import a JSON export file
    Import {
        /// Path to the file to import
        file: std::path::PathBuf,
        /// Merge strategy: replace, merge, or keep-both
        #[arg(short, long, default_value = "merge")]
        strategy: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = FlowPaths::new()?;
    let tracker = Tracker::open(paths.clone())?;

    match cli.command {
        Some(Commands::Add {
            amount,
            description,
            category,
            date,
        }) => handle_add(&tracker, amount, description, category, date)?,
        Some(Commands::List { limit }) => handle_list(&tracker, limit)?,
        Some(Commands::Delete { id }) => handle_delete(&tracker, id)?,
        Some(Commands::Edit {
            id,
            amount,
            description,
            category,
            date,
        }) => handle_edit(&tracker, id, amount, description, category, date)?,
        Some(Commands::Summary) => {
            print!("{}", format_summary(&tracker.summary(), tracker.currency()));
        }
        Some(Commands::Category(cmd)) => handle_category_command(&tracker, cmd)?,
        Some(Commands::Currency(cmd)) => handle_currency_command(&tracker, cmd)?,
        Some(Commands::Export(cmd)) => handle_export_command(&tracker, cmd)?,
        Some(Commands::Import { file, strategy }) => handle_import(&tracker, file, strategy)?,
        Some(Commands::Config) => {
            println!("Flow configuration");
            println!("==================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!();
            println!("Expenses:   {}", paths.expenses_file().display());
            println!("Categories: {}", paths.categories_file().display());
            println!("Currency:   {}", paths.currency_file().display());
        }
        None => {
            println!("Flow - terminal-based personal expense tracker");
            println!();
            println!("Run 'flow --help' for usage information.");
            println!("Run 'flow add <amount> <description>' to record an expense.");
        }
    }

    Ok(())
}
