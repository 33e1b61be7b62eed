//! Terminal presentation for Skyglass
//!
//! Holds the dashboard state machine, turns snapshots into display strings
//! and draws them with `crossterm` styling.

pub mod capabilities;
pub mod dashboard;
pub mod error_mapping;
pub mod layers;
pub mod render;
pub mod view;

#[cfg(test)]
mod fixtures;

pub use capabilities::{initial_theme, Capabilities};
pub use dashboard::{
    unit_from_preference, unit_to_preference, Collaborators, Dashboard, DashboardOptions,
    Outcome, RequestTicket,
};
pub use error_mapping::IntoAppError;
pub use layers::TerminalLayers;
pub use render::{render, render_recent, Palette};
pub use view::WeatherView;
