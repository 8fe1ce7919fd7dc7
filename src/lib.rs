//! Credential vault core: account registration/login and per-user storage of
//! website credentials grouped by category, backed by PostgreSQL.
//!
//! The crate is the storage and authentication layer of a desktop password
//! manager. The presentation layer constructs one [`AppState`] at startup,
//! runs [`MIGRATOR`], and calls into [`auth`], [`entries`] and [`categories`]
//! from its worker runtime.

pub mod auth;
pub mod categories;
pub mod config;
pub mod entries;
pub mod error;
pub mod logging;
pub mod state;

pub use config::AppConfig;
pub use error::StorageError;
pub use state::AppState;

/// Embedded schema migrations; the host process runs these once at startup.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
