//! One conversion from input table to output file.

use std::fs;
use std::path::PathBuf;

use tabcard_core::config::Settings;
use tabcard_service::convert::convert;
use tabcard_service::mapping::ColumnMapping;
use tabcard_service::table::read_table;

use crate::cli::Cli;
use crate::error::AppResult;
use crate::prompt::{Prompter, select_columns, show_table};

/// Result of a finished conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub contacts: usize,
    pub output: PathBuf,
}

/// ## Summary
/// Reads the input table, binds its columns, and writes the vCard file.
///
/// Columns come from the `[mapping]` settings when present; otherwise the
/// table is shown (unless `--no-preview`) and the user is asked through
/// `prompter`.
///
/// ## Side Effects
/// - Writes (or overwrites) the output file
///
/// ## Errors
/// Returns an error if the table cannot be read, the mapping does not match
/// its headers, column selection fails, or the output cannot be written.
#[tracing::instrument(skip_all, fields(input = %cli.input.display()))]
pub fn run(cli: &Cli, settings: &Settings, prompter: &mut dyn Prompter) -> AppResult<Summary> {
    let table = read_table(&cli.input)?;

    let mapping = if let Some(config) = &settings.mapping {
        tracing::debug!("Using column mapping from configuration");
        ColumnMapping::from_config(config)
    } else {
        if !cli.no_preview {
            show_table(&table, prompter);
        }
        select_columns(&table.headers, prompter, cli.attempts)?
    };
    let resolved = mapping.resolve(&table.headers)?;

    let conversion = convert(&table, &resolved, cli.parallel || settings.output.parallel);

    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.output.path));
    fs::write(&output, conversion.vcf.as_bytes())?;

    tracing::info!(
        contacts = conversion.contacts,
        output = %output.display(),
        "Saved contacts"
    );
    Ok(Summary {
        contacts: conversion.contacts,
        output,
    })
}
