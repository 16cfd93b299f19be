//! The `tabcard` command: read a contact table, bind its columns, write vCards.

pub mod cli;
pub mod error;
pub mod prompt;
pub mod run;
