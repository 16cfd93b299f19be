//! Interactive column selection.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use tabcard_core::types::PhoneType;
use tabcard_service::mapping::{
    ColumnMapping, ColumnSelection, ContactField, parse_index, parse_index_list,
    parse_optional_index, parse_phone_types,
};
use tabcard_service::table::Table;

use crate::error::{AppError, AppResult};

/// Rows shown before asking for columns.
pub const PREVIEW_ROWS: usize = 5;

/// Line-oriented conversation with the user.
pub trait Prompter {
    /// ## Summary
    /// Asks a question and returns the raw answer.
    ///
    /// ## Errors
    /// Returns an error if the answer cannot be read.
    fn ask(&mut self, prompt: &str, allow_empty: bool) -> AppResult<String>;

    /// Shows a message that needs no answer.
    fn say(&mut self, message: &str);
}

/// [`Prompter`] on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str, allow_empty: bool) -> AppResult<String> {
        Ok(dialoguer::Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(allow_empty)
            .interact_text()?)
    }

    fn say(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Shows the first rows and the indexed column list.
pub fn show_table(table: &Table, prompter: &mut dyn Prompter) {
    prompter.say(&format!("First {PREVIEW_ROWS} rows:"));
    prompter.say(&table.headers.join(" | "));
    for row in table.preview(PREVIEW_ROWS) {
        prompter.say(&row.join(" | "));
    }

    prompter.say("\nAvailable columns:");
    for (index, header) in table.headers.iter().enumerate() {
        prompter.say(&format!("  [{index}] {header}"));
    }
}

/// ## Summary
/// Asks the user which column feeds each field.
///
/// An invalid answer is reported and the whole selection starts over, up to
/// `max_attempts` times.
///
/// ## Errors
/// Returns `SelectionAttemptsExhausted` when every attempt had an invalid
/// answer, or the prompter's error if reading an answer fails.
#[tracing::instrument(skip(headers, prompter), fields(columns = headers.len()))]
pub fn select_columns(
    headers: &[String],
    prompter: &mut dyn Prompter,
    max_attempts: NonZeroUsize,
) -> AppResult<ColumnMapping> {
    let max_attempts = max_attempts.get();
    for attempt in 1..=max_attempts {
        let result = ask_selection(headers, prompter)
            .and_then(|selection| {
                ColumnMapping::from_selection(headers, &selection).map_err(AppError::from)
            });

        match result {
            Ok(mapping) => return Ok(mapping),
            Err(AppError::ServiceError(e)) => {
                tracing::warn!(attempt, error = %e, "Invalid column selection");
                prompter.say(&format!("\nError: {e}"));
                if attempt < max_attempts {
                    prompter.say("Please restart column selection\n");
                }
            }
            Err(e) => return Err(e),
        }
    }

    Err(AppError::SelectionAttemptsExhausted(max_attempts))
}

fn ask_selection(headers: &[String], prompter: &mut dyn Prompter) -> AppResult<ColumnSelection> {
    let columns = headers.len();
    prompter.say("\n=== Column Selection ===");
    prompter.say(&format!(
        "Found {columns} columns. Enter indices (0-{})",
        columns.saturating_sub(1)
    ));

    let label = ContactField::FirstName.label();
    let first_name = parse_index(
        label,
        &prompter.ask(&format!("{label} column index"), false)?,
        columns,
    )?;

    let mut optional = BTreeMap::new();
    for field in ContactField::OPTIONAL {
        let label = field.label();
        let answer = prompter.ask(&format!("{label} column index (ENTER to skip)"), true)?;
        if let Some(index) = parse_optional_index(label, &answer, columns)? {
            optional.insert(field, index);
        }
    }

    let phones = parse_index_list(
        "Phone numbers",
        &prompter.ask(
            "Phone numbers column indices (comma-separated, ENTER for none)",
            true,
        )?,
        columns,
    )?;

    let phone_types = if phones.is_empty() {
        Vec::new()
    } else {
        let tags = PhoneType::ALL.map(PhoneType::as_str).join("/");
        let answer = prompter.ask(
            &format!(
                "Enter {} phone types (comma-separated, {tags})",
                phones.len()
            ),
            true,
        )?;
        parse_phone_types(&answer, phones.len())
    };

    Ok(ColumnSelection {
        first_name,
        optional,
        phones,
        phone_types,
    })
}
