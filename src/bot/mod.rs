//! Bot module for handling Telegram interactions
//!
//! This module is split into several submodules for better organization:
//! - `message_handler`: Handles incoming commands (`/start`)
//! - `callback_handler`: Handles inline keyboard callback queries
//! - `ui_builder`: Creates keyboards and formats messages

pub mod callback_handler;
pub mod message_handler;
pub mod ui_builder;

// Re-export main handler functions for use in main.rs
pub use callback_handler::callback_handler;
pub use message_handler::message_handler;

use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::localization::LocalizationManager;

/// Shared read-only state injected into every handler.
///
/// Constructed once at startup; safe for concurrent reads, so handlers for
/// different users never contend.
pub struct AppState {
    pub config: Config,
    pub localization: LocalizationManager,
    pub catalog: CatalogClient,
}
