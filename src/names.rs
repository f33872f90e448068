//! Nearest-neighbor name resolution over the color catalog.

#[cfg(test)]
#[path = "names_test.rs"]
mod names_test;

use crate::color::{self, Rgb};
use crate::corpus::Catalog;
use crate::error::PaletteError;

/// One catalog entry with its normalized color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedColor {
    pub name: String,
    pub rgb: Rgb,
}

/// A resolved name: the matched entry plus its index in the corpus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedName {
    pub name: String,
    pub rgb: Rgb,
    pub index: usize,
}

/// Read-only nearest-neighbor index, built once per run and shared by
/// every query after that.
pub struct NameIndex {
    entries: Vec<NamedColor>,
}

impl NameIndex {
    /// Normalize and index catalog entries, keeping first-inserted order.
    ///
    /// Entries whose hex does not normalize are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::CorpusEmpty`] when no entry survives —
    /// a silently wrong name would corrupt every downstream artifact.
    pub fn build(catalog: &Catalog) -> Result<Self, PaletteError> {
        let mut entries = Vec::with_capacity(catalog.0.len());
        for (hex, name) in &catalog.0 {
            match color::normalize(hex) {
                Ok(rgb) => entries.push(NamedColor {
                    name: name.clone(),
                    rgb,
                }),
                Err(_) => {
                    tracing::warn!(%hex, %name, "skipping unparseable catalog entry");
                }
            }
        }
        if entries.is_empty() {
            return Err(PaletteError::CorpusEmpty);
        }
        Ok(Self { entries })
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find the entry nearest to `rgb` by squared Euclidean distance over
    /// the RGB channels.
    ///
    /// Strict `<` keeps the earliest entry on ties, so resolution is
    /// deterministic for a given catalog regardless of query order.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::CorpusEmpty`] if the index has no entries.
    pub fn resolve(&self, rgb: Rgb) -> Result<ResolvedName, PaletteError> {
        let first = self.entries.first().ok_or(PaletteError::CorpusEmpty)?;
        let mut best_index = 0;
        let mut best_distance = squared_distance(rgb, first.rgb);
        for (index, entry) in self.entries.iter().enumerate().skip(1) {
            if best_distance == 0 {
                break;
            }
            let distance = squared_distance(rgb, entry.rgb);
            if distance < best_distance {
                best_index = index;
                best_distance = distance;
            }
        }
        let entry = &self.entries[best_index];
        Ok(ResolvedName {
            name: entry.name.clone(),
            rgb: entry.rgb,
            index: best_index,
        })
    }
}

/// Lowercase a display name into a CSS-safe slug. Every non-alphanumeric
/// character becomes a single `-`, uncollapsed, matching the variable
/// families emitted in the artifacts.
#[must_use]
pub fn slugify(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

fn squared_distance(a: Rgb, b: Rgb) -> i64 {
    let dr = i64::from(a.r) - i64::from(b.r);
    let dg = i64::from(a.g) - i64::from(b.g);
    let db = i64::from(a.b) - i64::from(b.b);
    dr * dr + dg * dg + db * db
}
