//! JSON configuration helpers for the workbench catalog.

use std::{fs, path::Path};

use crate::catalog::{Catalog, CatalogError, WorkbenchSpec};

#[derive(thiserror::Error, Debug)]
pub enum WorkbenchIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Either the config could not be read or it does not describe a valid catalog.
#[derive(thiserror::Error, Debug)]
pub enum WorkbenchConfigError {
    #[error(transparent)]
    Io(#[from] WorkbenchIoError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl WorkbenchSpec {
    pub fn from_json_str(raw: &str) -> Result<Self, WorkbenchIoError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, WorkbenchIoError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), WorkbenchIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Build a validated catalog from the config.
    pub fn build_catalog(self) -> Result<Catalog, CatalogError> {
        Catalog::new(self)
    }
}

impl Catalog {
    /// Load and validate a catalog from a JSON config file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, WorkbenchConfigError> {
        let spec = WorkbenchSpec::load_json(path)?;
        Ok(Catalog::new(spec)?)
    }
}
