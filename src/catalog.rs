use crate::models::Scheme;
use serde::Deserialize;
use std::collections::HashSet;

/// Default catalog compiled into the binary.
const EMBEDDED_SCHEMES: &str = include_str!("../data/schemes.json");

#[derive(Deserialize)]
struct CatalogFile {
    schemes: Vec<Scheme>,
}

/// Read-only collection of schemes, loaded once at startup and shared
/// behind an `Arc` for the process lifetime.
#[derive(Debug)]
pub struct SchemeCatalog {
    schemes: Vec<Scheme>,
}

impl SchemeCatalog {
    /// Load the catalog compiled into the binary.
    pub fn embedded() -> anyhow::Result<Self> {
        Self::from_json(EMBEDDED_SCHEMES)
    }

    /// Load the catalog from an operator-supplied JSON file.
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read scheme catalog '{}': {}", path, e))?;
        Self::from_json(&raw)
    }

    /// Parse and validate a catalog document.
    ///
    /// Validation failures are fatal: a broken catalog must stop startup,
    /// not ship a bot that silently never matches.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)
            .map_err(|e| anyhow::anyhow!("Invalid scheme catalog JSON: {}", e))?;

        if file.schemes.is_empty() {
            anyhow::bail!("Scheme catalog is empty");
        }

        let mut seen_ids = HashSet::new();
        for scheme in &file.schemes {
            if !seen_ids.insert(scheme.id.as_str()) {
                anyhow::bail!("Duplicate scheme id '{}' in catalog", scheme.id);
            }
            if scheme.keywords.is_empty() {
                anyhow::bail!(
                    "Scheme '{}' has no keywords and could never be matched",
                    scheme.id
                );
            }
        }

        Ok(Self {
            schemes: file.schemes,
        })
    }

    /// All schemes in catalog order. Catalog order is the matcher's
    /// tie-break, so callers must not reorder.
    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }
}
