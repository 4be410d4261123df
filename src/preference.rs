// src/preference.rs

use crate::constants::*;
use crate::models::Theme;
use crate::storage::Storage;
use log::{debug, info, warn};
use std::collections::BTreeSet;

// --- Rendering Root ---

/// Document-level element that carries style-scope markers.
pub trait RenderRoot {
    fn set_marker(&mut self, marker: &str, present: bool);
}

/// In-memory class list standing in for the document root element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: BTreeSet<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class)
    }
}

impl RenderRoot for ClassList {
    fn set_marker(&mut self, marker: &str, present: bool) {
        if present {
            self.classes.insert(marker.to_string());
        } else {
            self.classes.remove(marker);
        }
    }
}

// --- Preference ---

pub type Subscriber = Box<dyn FnMut(Theme)>;

/// Process-wide dark/light preference.
///
/// The in-memory theme, the stored sentinel and the root marker are
/// brought into agreement once at load and once per actual change.
/// Setting the current value again only retries a storage write that
/// previously failed.
pub struct Preference<S: Storage, R: RenderRoot> {
    theme: Theme,
    storage: S,
    root: R,
    subscribers: Vec<Subscriber>,
    applied: Option<Theme>,
    persisted: Option<Theme>,
}

impl<S: Storage, R: RenderRoot> Preference<S, R> {
    pub fn load(storage: S, root: R) -> Self {
        let theme = read_theme(&storage);
        info!("Loaded display preference: {:?}", theme);
        let mut pref = Preference {
            theme,
            storage,
            root,
            subscribers: Vec::new(),
            applied: None,
            persisted: None,
        };
        pref.sync();
        pref
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.theme = theme;
        self.sync();
        self.theme
    }

    /// Registers a callback run with the new theme after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(Theme) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    fn sync(&mut self) {
        if self.applied != Some(self.theme) {
            self.root.set_marker(DARK_CLASS, self.theme.is_dark());
            for subscriber in self.subscribers.iter_mut() {
                subscriber(self.theme);
            }
            self.applied = Some(self.theme);
            debug!("Preference applied: {:?}", self.theme);
        }

        // A failed write stays pending and is retried on the next sync.
        if self.persisted != Some(self.theme) {
            match self.storage.set_item(PREFERENCE_KEY, self.theme.as_stored()) {
                Ok(()) => self.persisted = Some(self.theme),
                Err(e) => warn!("Failed to persist display preference: {}", e),
            }
        }
    }
}

fn read_theme<S: Storage>(storage: &S) -> Theme {
    match storage.get_item(PREFERENCE_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            warn!("Display preference unreadable, defaulting to light: {}", e);
            Theme::Light
        }
    }
}
