use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use ledgerly::auth::LocalIdentityProvider;
use ledgerly::cli::{
    handle_ask_command, handle_categories_command, handle_config_command, handle_routes_command,
    AskArgs,
};
use ledgerly::config::{LedgerlyPaths, Settings};
use ledgerly::logging::{self, LogTarget};
use ledgerly::store::AppContext;

#[derive(Parser)]
#[command(
    name = "ledgerly",
    version,
    about = "Personal and business finance tracker for the terminal",
    long_about = "Ledgerly tracks personal income, expenses and budgets, or a small \
                  business's revenue, costs, catalog and investments, in one \
                  terminal session. Nothing is saved between sessions except settings."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (the default)
    #[command(alias = "ui")]
    Tui,

    /// Show current configuration and paths
    Config,

    /// Ask the finance assistant a question
    Ask(AskArgs),

    /// List every screen route and its navigation key
    Routes,

    /// List the category palettes offered by the entry forms
    Categories {
        /// Show business entry categories instead of personal ones
        #[arg(short, long)]
        business: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerlyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let target = match cli.command {
        None | Some(Commands::Tui) => LogTarget::File,
        Some(_) => LogTarget::Stderr,
    };
    logging::init(&settings, &paths, target)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let provider = Arc::new(LocalIdentityProvider::new(
                settings.demo_verification_code.clone(),
            ));
            let context = AppContext::new(settings, paths);
            ledgerly::tui::run_tui(context, provider)?;
        }
        Some(Commands::Config) => handle_config_command(&paths, &settings)?,
        Some(Commands::Ask(args)) => handle_ask_command(&args)?,
        Some(Commands::Routes) => handle_routes_command()?,
        Some(Commands::Categories { business }) => handle_categories_command(business)?,
    }

    Ok(())
}
