// src/app.rs

use crate::carousel::{Autoplay, Carousel};
use crate::catalog;
use crate::config::AppConfig;
use crate::database;
use crate::error::Result;
use crate::models::{Slide, Theme, ViewKind};
use crate::preference::{ClassList, Preference};
use crate::storage::SqliteStorage;
use crate::store::CatalogStore;
use log::info;
use std::sync::{Arc, Mutex};

/// Installs the env_logger backend. Later calls are no-ops.
pub fn init_logging(filter: &str) {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .try_init();
}

// --- App State ---

/// Everything the listing pages and the landing slideshow bind to.
pub struct AppState {
    pub data_structures: CatalogStore,
    pub problems: CatalogStore,
    pub preference: Preference<SqliteStorage, ClassList>,
    pub slides: Vec<Slide>,
    pub carousel: Arc<Mutex<Carousel>>,
    config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        config.validate()?;
        info!("Starting Code Sphere catalog...");

        let conn = database::open(config.storage_path.as_deref())?;
        let preference = Preference::load(SqliteStorage::new(conn), ClassList::new());

        let slides = catalog::builtin_slides()?;
        let carousel = Arc::new(Mutex::new(Carousel::for_slides(&slides)));

        Ok(AppState {
            data_structures: CatalogStore::new(
                ViewKind::DataStructures,
                catalog::builtin(ViewKind::DataStructures)?,
            ),
            problems: CatalogStore::new(ViewKind::Problems, catalog::builtin(ViewKind::Problems)?),
            preference,
            slides,
            carousel,
            config,
        })
    }

    pub fn view(&self, kind: ViewKind) -> &CatalogStore {
        match kind {
            ViewKind::DataStructures => &self.data_structures,
            ViewKind::Problems => &self.problems,
        }
    }

    pub fn view_mut(&mut self, kind: ViewKind) -> &mut CatalogStore {
        match kind {
            ViewKind::DataStructures => &mut self.data_structures,
            ViewKind::Problems => &mut self.problems,
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.preference.is_dark()
    }

    pub fn toggle_dark_mode(&mut self) -> Theme {
        self.preference.toggle()
    }

    /// Starts the slideshow timer; it stops when the handle is dropped.
    pub fn start_autoplay(&self) -> Result<Autoplay> {
        Autoplay::start(Arc::clone(&self.carousel), self.config.autoplay_interval())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
