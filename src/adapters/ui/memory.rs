//! In-memory presentation surface. Records every write in order.
//!
//! Used by tests and by embedders that want the rendered strings instead of a terminal.

use crate::ports::{LIST_ITEM_COUNT, PresentationPort};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceWrite {
    Title(String),
    Temperature(String),
    ListItem(usize, String),
    Alert(String),
}

#[derive(Debug, Default)]
pub struct MemorySurface {
    writes: Mutex<Vec<SurfaceWrite>>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first.
    pub fn writes(&self) -> Vec<SurfaceWrite> {
        self.writes.lock().clone()
    }

    /// Alert messages only.
    pub fn alerts(&self) -> Vec<String> {
        self.writes
            .lock()
            .iter()
            .filter_map(|w| match w {
                SurfaceWrite::Alert(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    /// Element writes (title, temperature, list rows), alerts excluded.
    pub fn element_writes(&self) -> Vec<SurfaceWrite> {
        self.writes
            .lock()
            .iter()
            .filter(|w| !matches!(w, SurfaceWrite::Alert(_)))
            .cloned()
            .collect()
    }
}

impl PresentationPort for MemorySurface {
    fn set_title(&self, text: &str) {
        self.writes.lock().push(SurfaceWrite::Title(text.to_string()));
    }

    fn set_temperature(&self, text: &str) {
        self.writes
            .lock()
            .push(SurfaceWrite::Temperature(text.to_string()));
    }

    fn set_list_item(&self, index: usize, text: &str) {
        if index < LIST_ITEM_COUNT {
            self.writes
                .lock()
                .push(SurfaceWrite::ListItem(index, text.to_string()));
        }
    }

    fn alert(&self, message: &str) {
        self.writes
            .lock()
            .push(SurfaceWrite::Alert(message.to_string()));
    }
}
