use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;

use budget_tracker::cli::{handle_command, AppContext, Commands};
use budget_tracker::config::{BudgetPaths, Settings, DATA_DIR_ENV};
use budget_tracker::display::Theme;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Terminal monthly budget and expense tracker",
    long_about = "Set a budget for each month, record expenses against it and \
                  get warned when the month's remaining balance runs low."
)]
struct Cli {
    /// Directory holding budget data
    #[arg(long, global = true, env = DATA_DIR_ENV)]
    data_dir: Option<PathBuf>,

    /// Budget period (e.g., "2025-01", "January", "current", "last")
    #[arg(short, long, global = true)]
    period: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::resolve(cli.data_dir);
    let settings = Settings::load_or_create(&paths)?;
    let theme = Theme::new(!cli.no_color && settings.color && io::stdout().is_tty());

    let ctx = AppContext::new(paths, settings, theme);
    let period = ctx.resolve_period(cli.period.as_deref())?;

    handle_command(&ctx, period, cli.command.unwrap_or(Commands::Menu))?;

    Ok(())
}
