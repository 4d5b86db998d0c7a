//! # Session State
//!
//! Owns the catalog for the lifetime of the console run. There is no global
//! catalog; handlers receive the session explicitly.

use stockroom_store::{CatalogStore, RecordEditor};

use super::ConfigState;

/// Everything a menu handler may touch.
#[derive(Debug)]
pub struct Session {
    catalog: CatalogStore,
    config: ConfigState,
}

impl Session {
    pub fn new(catalog: CatalogStore, config: ConfigState) -> Self {
        Session { catalog, config }
    }

    /// Read access for listings, lookups, searches and statistics.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// Write access for removals.
    pub fn catalog_mut(&mut self) -> &mut CatalogStore {
        &mut self.catalog
    }

    /// An editor for add/modify drafts.
    pub fn editor(&mut self) -> RecordEditor<'_> {
        RecordEditor::new(&mut self.catalog)
    }

    pub fn config(&self) -> &ConfigState {
        &self.config
    }
}
