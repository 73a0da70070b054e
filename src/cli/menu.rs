//! Interactive text menu
//!
//! Main menu picks a month (or sets this month's budget), then a period
//! menu records expenses and shows the summary. Input and output are
//! generic so the whole flow can be driven from a script.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_budget_set, format_expense_recorded, format_summary, format_warning, Theme};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Period, MONTH_NAMES};
use crate::services::{BudgetService, FixedClock};
use crate::storage::LedgerStore;

/// Outcome of a sub-flow: keep going, or input ran out
enum Flow {
    Continue,
    Quit,
}

/// The interactive menu loop
pub struct Menu<'a, R, W> {
    input: R,
    output: W,
    store: LedgerStore,
    settings: &'a Settings,
    theme: Theme,
    today: NaiveDate,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    /// `today` dates new expenses and decides the "current" month
    pub fn new(
        input: R,
        output: W,
        store: LedgerStore,
        settings: &'a Settings,
        theme: Theme,
        today: NaiveDate,
    ) -> Self {
        Self {
            input,
            output,
            store,
            settings,
            theme,
            today,
        }
    }

    /// Consume the menu, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    fn service(&self) -> BudgetService<'_> {
        BudgetService::new(&self.store).with_clock(FixedClock(self.today))
    }

    fn current_period(&self) -> Period {
        Period::containing(self.today)
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> BudgetResult<()> {
        loop {
            writeln!(self.output, "{}", self.theme.header("Daily Budget Tracker"))?;
            writeln!(
                self.output,
                "{}",
                self.theme.info(&format!("Current Date: {}", self.today))
            )?;
            writeln!(
                self.output,
                "{}",
                self.theme.menu_option(1, "Yes, I have set a budget for this month")
            )?;
            writeln!(self.output, "{}", self.theme.menu_option(2, "No, I need to set a budget"))?;
            writeln!(self.output, "{}", self.theme.menu_option(3, "Exit"))?;

            let Some(choice) = self.prompt("\nEnter your choice (1-3): ")? else {
                return Ok(());
            };

            let ready = match choice.as_str() {
                "1" => self.choose_existing_month()?,
                "2" => {
                    let current = self.current_period();
                    self.store.bind_period(current);
                    self.set_budget_flow()?
                }
                "3" => {
                    writeln!(self.output, "{}", self.theme.info("Goodbye!"))?;
                    return Ok(());
                }
                _ => {
                    self.warn("Invalid choice. Please try again.")?;
                    Some(false)
                }
            };

            match ready {
                None => return Ok(()),
                Some(false) => continue,
                Some(true) => {
                    if let Flow::Quit = self.period_menu()? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Pick a month of the current year; offer to set a budget if it has none.
    ///
    /// `Some(true)` enters the period menu, `Some(false)` returns to the main
    /// menu, `None` means input ended.
    fn choose_existing_month(&mut self) -> BudgetResult<Option<bool>> {
        let Some(month) = self.choose_month()? else {
            return Ok(None);
        };
        let period = self
            .current_period()
            .with_month(month)
            .map_err(|e| BudgetError::Validation(e.to_string()))?;
        self.store.bind_period(period);

        if self.store.storage_exists() {
            return Ok(Some(true));
        }

        self.warn(&format!("Budget hasn't been set for {}.", period))?;
        let Some(answer) = self.prompt("Would you like to set a budget now? (y/n): ")? else {
            return Ok(None);
        };
        if answer.to_lowercase() != "y" {
            return Ok(Some(false));
        }

        self.set_budget_flow()
    }

    fn choose_month(&mut self) -> BudgetResult<Option<u32>> {
        writeln!(self.output, "{}", self.theme.header("Available Months"))?;
        for (i, name) in MONTH_NAMES.iter().enumerate() {
            writeln!(self.output, "{}", self.theme.submenu_option(i + 1, name))?;
        }

        loop {
            let Some(choice) = self.prompt("\nChoose a month (1-12): ")? else {
                return Ok(None);
            };
            match choice.parse::<u32>() {
                Ok(month) if (1..=12).contains(&month) => return Ok(Some(month)),
                _ => self.warn("Invalid choice. Please enter a number between 1 and 12.")?,
            }
        }
    }

    /// Create storage, ask for an amount and set the bound period's budget
    fn set_budget_flow(&mut self) -> BudgetResult<Option<bool>> {
        self.store.ensure_storage_exists()?;
        let period = self.store.period();

        let prompt = format!("Enter budget for {}: {}", period, self.settings.currency_symbol);
        let Some(amount) = self.prompt_amount(&prompt)? else {
            return Ok(None);
        };

        let result = self.service().set_budget(amount);
        match result {
            Ok(confirmation) => {
                writeln!(self.output, "{}", format_budget_set(&confirmation, self.settings))?;
                Ok(Some(true))
            }
            Err(e) => {
                self.report_error(e)?;
                Ok(Some(false))
            }
        }
    }

    fn period_menu(&mut self) -> BudgetResult<Flow> {
        loop {
            let title = format!("Current Month: {}", self.store.period());
            writeln!(self.output, "{}", self.theme.header(&title))?;
            writeln!(self.output, "{}", self.theme.submenu_option(1, "Add Expense"))?;
            writeln!(self.output, "{}", self.theme.submenu_option(2, "View Expense Summary"))?;
            writeln!(self.output, "{}", self.theme.submenu_option(3, "Back to Main Menu"))?;

            let Some(choice) = self.prompt("\nEnter your choice (1-3): ")? else {
                return Ok(Flow::Quit);
            };

            let flow = match choice.as_str() {
                "1" => self.add_expense()?,
                "2" => {
                    self.show_summary()?;
                    Flow::Continue
                }
                "3" => return Ok(Flow::Continue),
                _ => {
                    self.warn("Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                return Ok(Flow::Quit);
            }
        }
    }

    fn add_expense(&mut self) -> BudgetResult<Flow> {
        let category = loop {
            let Some(category) = self.prompt("Enter expense category: ")? else {
                return Ok(Flow::Quit);
            };
            if !category.is_empty() {
                break category;
            }
            self.warn("Category cannot be empty.")?;
        };

        let prompt = format!("Enter expense amount: {}", self.settings.currency_symbol);
        let Some(amount) = self.prompt_amount(&prompt)? else {
            return Ok(Flow::Quit);
        };

        let result = {
            let service = self.service();
            let outcome = service
                .record_expense(&category, amount)
                .and_then(|recorded| Ok((recorded, service.check_budget_warning()?)));
            outcome
        };

        match result {
            Ok((recorded, warning)) => {
                writeln!(
                    self.output,
                    "{}",
                    format_expense_recorded(&recorded, self.settings, &self.theme)
                )?;
                if let Some(warning) = warning {
                    writeln!(
                        self.output,
                        "{}",
                        format_warning(&warning, self.settings, &self.theme)
                    )?;
                }
            }
            Err(e) => self.report_error(e)?,
        }

        Ok(Flow::Continue)
    }

    fn show_summary(&mut self) -> BudgetResult<()> {
        let result = self.service().summarize();
        match result {
            Ok(Some(report)) => {
                write!(
                    self.output,
                    "{}",
                    format_summary(&report, self.settings, &self.theme)
                )?;
            }
            Ok(None) => self.warn("No budget data available for this month.")?,
            Err(e) => self.report_error(e)?,
        }
        Ok(())
    }

    /// Prompt until a valid amount is entered; `None` on end of input
    fn prompt_amount(&mut self, prompt: &str) -> BudgetResult<Option<Money>> {
        loop {
            let Some(raw) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match Money::parse(&raw) {
                Ok(amount) => return Ok(Some(amount)),
                Err(e) => self.warn(&format!("Invalid amount ({}). Please enter a number.", e))?,
            }
        }
    }

    /// Print a prompt and read one trimmed line; `None` on end of input
    fn prompt(&mut self, prompt: &str) -> BudgetResult<Option<String>> {
        write!(self.output, "{}", self.theme.prompt(prompt))?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Show a failed operation and carry on; storage failures end the session
    fn report_error(&mut self, err: BudgetError) -> BudgetResult<()> {
        if err.is_storage() {
            return Err(err);
        }
        self.warn(&format!("Error: {}", err))
    }

    fn warn(&mut self, text: &str) -> BudgetResult<()> {
        writeln!(self.output, "{}", self.theme.warning(text))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BudgetPaths;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// Run the menu over `script` and return (output, store)
    fn run_script(temp_dir: &TempDir, script: &str) -> (String, LedgerStore) {
        run_script_with(temp_dir, script, Settings::default())
    }

    fn run_script_with(
        temp_dir: &TempDir,
        script: &str,
        settings: Settings,
    ) -> (String, LedgerStore) {
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = LedgerStore::new(paths, Period::containing(today()));

        let mut menu = Menu::new(
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
            store.clone(),
            &settings,
            Theme::plain(),
            today(),
        );
        menu.run().unwrap();
        let output = String::from_utf8(menu.into_output()).unwrap();
        (output, store)
    }

    fn march_service(store: &LedgerStore) -> BudgetService<'_> {
        BudgetService::new(store)
    }

    #[test]
    fn test_exit_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let (output, _) = run_script(&temp_dir, "3\n");
        assert!(output.contains("Daily Budget Tracker"));
        assert!(output.contains("Current Date: 2025-03-14"));
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let temp_dir = TempDir::new().unwrap();
        let (output, _) = run_script(&temp_dir, "");
        assert!(output.contains("Enter your choice (1-3): "));
    }

    #[test]
    fn test_set_budget_add_expenses_and_summarize() {
        let temp_dir = TempDir::new().unwrap();
        let script = "2\n100\n1\nFood\n30\n1\nTransport\n20\n2\n3\n3\n";
        let (output, store) = run_script(&temp_dir, script);

        assert!(output.contains("Budget of $100.00 set for March 2025."));
        assert!(output.contains("Expense added. Remaining budget: $70.00"));
        assert!(output.contains("Expense added. Remaining budget: $50.00"));
        assert!(output.contains("Expense Summary for March 2025"));
        assert!(output.contains("Total Expenses: $50.00"));
        assert!(!output.contains("REMINDER"));

        let record = march_service(&store).load_budget().unwrap().unwrap();
        assert_eq!(record.remaining, Money::from_cents(5000));
        let txns = march_service(&store).transactions().unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, today());
    }

    #[test]
    fn test_warnings_follow_expenses() {
        let temp_dir = TempDir::new().unwrap();
        let script = "2\n100\n1\nRent\n95\n1\nFood\n10\n3\n3\n";
        let (output, _) = run_script(&temp_dir, script);

        assert!(output.contains("WARNING: You are within 10% of your budget limit for this month!"));
        assert!(output.contains("Remaining: $5.00"));
        assert!(output.contains("WARNING: You have exceeded your budget for this month!"));
    }

    #[test]
    fn test_choose_month_without_budget_declined() {
        let temp_dir = TempDir::new().unwrap();
        let (output, store) = run_script(&temp_dir, "1\n13\nabc\n5\nn\n3\n");

        assert!(output.contains("Invalid choice. Please enter a number between 1 and 12."));
        assert!(output.contains("Budget hasn't been set for May 2025."));
        let mut may = store.clone();
        may.bind_period(Period::new(2025, 5).unwrap());
        assert!(!may.storage_exists());
    }

    #[test]
    fn test_choose_month_and_set_budget() {
        let temp_dir = TempDir::new().unwrap();
        let (output, store) = run_script(&temp_dir, "1\n5\ny\n250.50\n3\n3\n");

        assert!(output.contains("Budget of $250.50 set for May 2025."));
        assert!(output.contains("Current Month: May 2025"));

        let mut may = store.clone();
        may.bind_period(Period::new(2025, 5).unwrap());
        assert_eq!(
            may.load_budget().unwrap().unwrap().budget,
            Money::from_cents(25050)
        );
    }

    #[test]
    fn test_existing_month_goes_straight_to_period_menu() {
        let temp_dir = TempDir::new().unwrap();
        let script = "2\n80\n3\n1\n3\n2\n3\n3\n";
        let (output, _) = run_script(&temp_dir, script);

        assert!(!output.contains("Would you like to set a budget now?"));
        assert!(output.contains("Remaining Budget: $80.00"));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let temp_dir = TempDir::new().unwrap();
        let script = "9\n2\nlots\n50\n7\n1\n\nGym\nfree\n5\n3\n3\n";
        let (output, store) = run_script(&temp_dir, script);

        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.contains("Invalid amount"));
        assert!(output.contains("Category cannot be empty."));
        assert!(output.contains("Expense added. Remaining budget: $45.00"));
        assert_eq!(march_service(&store).transactions().unwrap().len(), 1);
    }

    #[test]
    fn test_summary_without_budget() {
        let temp_dir = TempDir::new().unwrap();
        // Storage exists for March but the budget file does not
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        LedgerStore::new(paths, Period::containing(today()))
            .ensure_storage_exists()
            .unwrap();

        let (output, _) = run_script(&temp_dir, "1\n3\n1\nFood\n5\n2\n3\n3\n");
        assert!(output.contains("could not be updated"));
        assert!(output.contains("No budget data available for this month."));
    }

    #[test]
    fn test_currency_symbol_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        let (output, _) = run_script_with(&temp_dir, "2\n100\n1\nRent\n95\n3\n3\n", settings);

        assert!(output.contains("Enter budget for March 2025: €"));
        assert!(output.contains("Enter expense amount: €"));
        assert!(output.contains("Budget of €100.00 set for March 2025."));
        assert!(output.contains("Expense added. Remaining budget: €5.00"));
        assert!(output.contains("Remaining: €5.00"));
        assert!(!output.contains('$'));
    }

    #[test]
    fn test_refund_typed_with_symbol_and_sign() {
        let temp_dir = TempDir::new().unwrap();
        let (output, store) = run_script(&temp_dir, "2\n100\n1\nRefund\n$-1.50\n3\n3\n");

        assert!(output.contains("Expense added. Remaining budget: $101.50"));
        let txns = march_service(&store).transactions().unwrap();
        assert_eq!(txns[0].amount, Money::from_cents(-150));
    }

    #[test]
    fn test_overflowing_expense_keeps_menu_running() {
        let temp_dir = TempDir::new().unwrap();
        let script = "2\n100\n1\nRefund\n-92233720368547758.07\n1\nFood\n10\n3\n3\n";
        let (output, store) = run_script(&temp_dir, script);

        assert!(output.contains("would overflow the remaining budget"));
        assert!(output.contains("Expense added. Remaining budget: $90.00"));
        assert_eq!(march_service(&store).transactions().unwrap().len(), 1);
    }
}
