//! Budget CLI commands
//!
//! One-shot subcommands over the same service layer the interactive menu
//! uses.

use std::io;

use clap::Subcommand;

use crate::audit::AuditLogger;
use crate::config::{BudgetPaths, Settings};
use crate::display::{
    format_budget_set, format_budget_status, format_expense_recorded, format_summary,
    format_transactions, format_warning, Theme,
};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Period};
use crate::services::BudgetService;
use crate::storage::LedgerStore;

use super::menu::Menu;

/// Budget subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Set the budget for the period, resetting the remaining balance
    Set {
        /// Amount (e.g., "500" or "500.00")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Record an expense dated today
    Add {
        /// Expense category
        category: String,
        /// Amount (e.g., "12.50")
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },

    /// Show the expense summary by category
    Summary,

    /// Show budget, spent and remaining for the period
    Status,

    /// List the period's expenses
    Transactions,

    /// List months that have stored data
    Periods,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        count: usize,
    },

    /// Show data locations and settings
    Config,
}

/// Everything a command needs, built once by the entry point
pub struct AppContext {
    pub paths: BudgetPaths,
    pub settings: Settings,
    pub theme: Theme,
}

impl AppContext {
    pub fn new(paths: BudgetPaths, settings: Settings, theme: Theme) -> Self {
        Self {
            paths,
            settings,
            theme,
        }
    }

    /// Resolve a period argument, defaulting to the current month
    pub fn resolve_period(&self, period: Option<&str>) -> BudgetResult<Period> {
        match period {
            Some(s) => Period::parse_relative(s, Period::current())
                .map_err(|e| BudgetError::Validation(e.to_string())),
            None => Ok(Period::current()),
        }
    }

    fn store(&self, period: Period) -> LedgerStore {
        LedgerStore::new(self.paths.clone(), period)
    }
}

fn parse_amount(raw: &str) -> BudgetResult<Money> {
    Money::parse(raw)
        .map_err(|e| BudgetError::Validation(format!("Invalid amount '{}': {}", raw, e)))
}

/// Handle a command against the given period
pub fn handle_command(ctx: &AppContext, period: Period, cmd: Commands) -> BudgetResult<()> {
    let settings = &ctx.settings;
    let theme = &ctx.theme;

    match cmd {
        Commands::Menu => {
            let stdin = io::stdin();
            let mut menu = Menu::new(
                stdin.lock(),
                io::stdout(),
                ctx.store(period),
                settings,
                ctx.theme,
                chrono::Local::now().date_naive(),
            );
            menu.run()?;
        }

        Commands::Set { amount } => {
            let amount = parse_amount(&amount)?;
            let store = ctx.store(period);
            let confirmation = BudgetService::new(&store).set_budget(amount)?;
            println!("{}", format_budget_set(&confirmation, settings));
        }

        Commands::Add { category, amount } => {
            let amount = parse_amount(&amount)?;
            let store = ctx.store(period);
            let service = BudgetService::new(&store);

            let recorded = service.record_expense(&category, amount)?;
            println!("{}", format_expense_recorded(&recorded, settings, theme));

            if let Some(warning) = service.check_budget_warning()? {
                println!("{}", format_warning(&warning, settings, theme));
            }
        }

        Commands::Summary => {
            let store = ctx.store(period);
            let report = BudgetService::new(&store).summarize()?;
            match report {
                Some(report) => print!("{}", format_summary(&report, settings, theme)),
                None => println!("{}", theme.warning("No budget data available for this month.")),
            }
        }

        Commands::Status => {
            let store = ctx.store(period);
            let service = BudgetService::new(&store);
            let record = service.load_budget()?;

            println!("{}", format_budget_status(period, record.as_ref(), settings, theme));
            if let Some(warning) = service.check_budget_warning()? {
                println!("{}", format_warning(&warning, settings, theme));
            }
        }

        Commands::Transactions => {
            let store = ctx.store(period);
            let transactions = store.load_transactions()?;
            println!("{}", format_transactions(period, &transactions, settings));
        }

        Commands::Periods => {
            let store = ctx.store(period);
            let periods = store.list_periods()?;

            if periods.is_empty() {
                println!("No months with stored data.");
                return Ok(());
            }

            println!("{:<16} {:>12} {:>12} {:>9}", "Month", "Budget", "Remaining", "Expenses");
            println!("{}", "-".repeat(52));
            for p in periods {
                let mut store = store.clone();
                store.bind_period(p);
                let count = store.load_transactions()?.len();
                let (budget, remaining) = match store.load_budget()? {
                    Some(record) => (
                        settings.format_money(record.budget),
                        settings.format_money(record.remaining),
                    ),
                    None => ("-".to_string(), "-".to_string()),
                };
                let marker = if p == period { "*" } else { " " };
                println!(
                    "{}{:<15} {:>12} {:>12} {:>9}",
                    marker,
                    p.to_string(),
                    budget,
                    remaining,
                    count
                );
            }
        }

        Commands::Audit { count } => {
            let logger = AuditLogger::new(ctx.paths.audit_log());
            let entries = logger.read_recent(count)?;

            if entries.is_empty() {
                println!("No audit entries yet.");
                return Ok(());
            }

            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }

        Commands::Config => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:  {}", ctx.paths.base_dir().display());
            println!("Data directory:  {}", ctx.paths.data_dir().display());
            println!("Settings file:   {}", ctx.paths.settings_file().display());
            println!("Audit log:       {}", ctx.paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Color:           {}", settings.color);
        }
    }

    Ok(())
}
