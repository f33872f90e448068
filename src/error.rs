//! Error taxonomy for the token pipeline.

use crate::ramp::Role;

/// Errors produced while turning seed colors into token artifacts.
///
/// [`PaletteError::InvalidColor`] is scoped to one seed argument; every
/// other kind means the run cannot produce trustworthy output and aborts
/// the batch.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// The input is not a 3, 6, or 8 digit hex color.
    #[error("invalid color input '{0}'; accepted formats: #RRGGBB RRGGBB #RGB RGB #AARRGGBB")]
    InvalidColor(String),
    /// The name catalog contained no usable entries.
    #[error("color name corpus is empty")]
    CorpusEmpty,
    /// The name catalog could not be read from cache or fetched.
    #[error("color name corpus unavailable: {0}")]
    CorpusUnavailable(String),
    /// A tonal ramp was sampled outside its tone domain.
    #[error("ramp derivation failed for role {role}: tone {tone} outside 0-100")]
    RampDerivationFailed { role: Role, tone: u8 },
    /// An artifact could not be persisted.
    #[error("failed to write `{path}`: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
