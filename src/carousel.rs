// src/carousel.rs

use crate::error::Result;
use crate::models::Slide;
use log::{debug, info};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

// --- Carousel State ---

/// Circular slide index plus one "loaded" flag per slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    loaded: Vec<bool>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            current: 0,
            loaded: vec![false; len],
        }
    }

    pub fn for_slides(slides: &[Slide]) -> Self {
        Self::new(slides.len())
    }

    pub fn len(&self) -> usize {
        self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaded.is_empty()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len();
        }
        self.current
    }

    pub fn prev(&mut self) -> usize {
        if !self.is_empty() {
            self.current = (self.current + self.len() - 1) % self.len();
        }
        self.current
    }

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len() {
            self.current = index;
        } else {
            debug!("Ignoring go_to({}) on {} slides", index, self.len());
        }
        self.current
    }

    /// Marks a slide's asset as loaded. Flags never reset.
    pub fn mark_loaded(&mut self, index: usize) {
        if let Some(flag) = self.loaded.get_mut(index) {
            *flag = true;
        }
    }

    pub fn is_loaded(&self, index: usize) -> bool {
        self.loaded.get(index).copied().unwrap_or(false)
    }
}

// --- Autoplay ---

/// Advances a shared carousel on a fixed period until dropped or stopped.
pub struct Autoplay {
    handle: Option<JoinHandle<()>>,
}

impl Autoplay {
    /// Fails with `CatalogError::Runtime` outside a tokio runtime.
    pub fn start(carousel: Arc<Mutex<Carousel>>, period: Duration) -> Result<Self> {
        let runtime = Handle::try_current()?;
        info!("Autoplay started ({:?})", period);
        let handle = runtime.spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                match carousel.lock() {
                    Ok(mut c) => {
                        let index = c.next();
                        debug!("Autoplay advanced to slide {}", index);
                    }
                    Err(_) => break,
                }
            }
        });
        Ok(Autoplay {
            handle: Some(handle),
        })
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            info!("Autoplay stopped");
        }
    }
}

impl Drop for Autoplay {
    fn drop(&mut self) {
        self.stop();
    }
}
