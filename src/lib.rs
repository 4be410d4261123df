// src/lib.rs

//! Client-side problem-catalog view engine for the Code Sphere practice
//! site: category filtering, stable sorting, per-row solved/revisit flags,
//! the persisted dark/light preference and the landing-page carousel.

pub mod app;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod database;
pub mod error;
pub mod listing;
pub mod models;
pub mod preference;
pub mod repository;
pub mod storage;
pub mod store;
pub mod toggles;

pub use app::{init_logging, AppState};
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use models::{CatalogEntry, Difficulty, Section, SortDirection, SortField, Theme, ViewKind};
pub use preference::{ClassList, Preference, RenderRoot};
pub use storage::{MemoryStorage, SqliteStorage, Storage};
pub use store::{CatalogStore, Row, ViewState};
pub use toggles::{ToggleKind, ToggleSet};
