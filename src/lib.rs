//! Split bills with friends from the terminal.
//!
//! [`ledger`] holds the friend registry, selection and split arithmetic;
//! [`ui`] is the ratatui front end built on MVI reducers.

pub mod config;
pub mod ledger;
pub mod logging;
pub mod ui;
