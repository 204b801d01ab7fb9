//! Console driver for the adventure map.
//!
//! ```text
//! stdin ─→ command::Command ─→ app::Session ─→ GameEngine (heroes-core)
//!                                   │
//!                                   └─→ view (ASCII map, stats, log) ─→ stdout
//! ```
//!
//! The session owns the game state and builds a short-lived engine for each
//! move, so every command observes a fully settled state. Diagnostics go to a
//! per-session log file, never to stdout.

pub mod app;
pub mod command;
pub mod config;
pub mod logging;
pub mod view;

pub use app::{Flow, Session};
pub use command::{Command, Direction, ParseCommandError};
pub use config::ClientConfig;
