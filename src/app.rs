//! Terminal presentation layer
//!
//! `App` owns the stopwatch engine and everything the UI needs around it.
//! The engine never calls back into this module.

mod app_events;
mod app_render;
mod app_state;

pub use app_render::{lap_row, lap_rows};
pub use app_state::{App, IDLE_POLL_INTERVAL};
