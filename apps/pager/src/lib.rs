//! Offset/limit users pager: fetches a page of user records, renders cards and
//! page-number controls, and re-fetches when a control is activated.

pub mod config;
pub mod controller;
pub mod ui;

pub use controller::{LoadOutcome, PagerController};
