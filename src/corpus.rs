//! Color-name catalog retrieval: on-disk cache first, HTTPS second.
//!
//! The catalog is an external collaborator; the pipeline only sees the
//! materialized `(hex, name)` list this module returns.

#[cfg(test)]
#[path = "corpus_test.rs"]
mod corpus_test;

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::PaletteError;

/// Default catalog location (the `color-name-list` distribution).
pub const DEFAULT_URL: &str = "https://unpkg.com/color-name-list/dist/colornames.min.json";

/// The raw catalog: `(hex, name)` pairs in catalog file order.
///
/// Decoded with an explicit map visitor because entry order carries
/// meaning downstream: nearest-neighbor distance ties resolve to the
/// first listed entry, and `serde_json`'s default map type would re-sort
/// the keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog(pub Vec<(String, String)>);

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = Catalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of hex color to color name")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, String>()? {
                    entries.push(entry);
                }
                Ok(Catalog(entries))
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Parse catalog JSON.
///
/// # Errors
///
/// Returns [`PaletteError::CorpusUnavailable`] when the payload is not a
/// hex-to-name object.
pub fn parse(json: &str) -> Result<Catalog, PaletteError> {
    serde_json::from_str(json)
        .map_err(|e| PaletteError::CorpusUnavailable(format!("catalog parse failed: {e}")))
}

/// Load the catalog, preferring the local cache.
///
/// A missing or unreadable cache falls through to the network. A fetched
/// catalog is written back to the cache path; failing to persist it only
/// logs a warning, since the in-memory catalog is already usable.
///
/// # Errors
///
/// Returns [`PaletteError::CorpusUnavailable`] when neither the cache nor
/// the network yields a catalog.
pub async fn load(cache: &Path, url: &str) -> Result<Catalog, PaletteError> {
    if let Ok(json) = fs::read_to_string(cache) {
        match parse(&json) {
            Ok(catalog) => {
                tracing::info!(
                    path = %cache.display(),
                    entries = catalog.0.len(),
                    "loaded color name cache"
                );
                return Ok(catalog);
            }
            Err(e) => {
                tracing::warn!(path = %cache.display(), error = %e, "ignoring unreadable cache");
            }
        }
    }

    tracing::info!(%url, "downloading color name catalog");
    let client = reqwest::Client::new();
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| PaletteError::CorpusUnavailable(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(PaletteError::CorpusUnavailable(format!(
            "catalog fetch returned HTTP {}",
            status.as_u16()
        )));
    }
    let json = response
        .text()
        .await
        .map_err(|e| PaletteError::CorpusUnavailable(e.to_string()))?;
    let catalog = parse(&json)?;

    if let Err(e) = fs::write(cache, &json) {
        tracing::warn!(path = %cache.display(), error = %e, "failed to persist catalog cache");
    }
    Ok(catalog)
}
