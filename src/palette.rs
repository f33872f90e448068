//! Palette construction: one seed in, five named token ramps out.

#[cfg(test)]
#[path = "palette_test.rs"]
mod palette_test;

use crate::color::{self, Rgb};
use crate::error::PaletteError;
use crate::names::{NameIndex, slugify};
use crate::ramp::{RampSet, Role};
use crate::tone::Theme;

/// One sampled token: the tone it came from, its display step, and the
/// rendered hex value (already inverted for dark tokens).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub tone: u8,
    pub step: u16,
    pub hex: String,
}

/// Tokens for one role under one theme, in that theme's sampling order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ThemeTokens {
    /// Hex at the role's representative tone — the DEFAULT declaration.
    pub default_hex: String,
    pub tokens: Vec<Token>,
}

/// Tokens for one role across both themes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoleTokens {
    pub role: Role,
    pub light: ThemeTokens,
    pub dark: ThemeTokens,
}

/// The fully resolved artifact for one seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Seed as supplied on the command line, trimmed.
    pub source: String,
    pub seed: Rgb,
    /// Display name of the catalog entry nearest the primary ramp's
    /// light representative tone.
    pub name: String,
    /// The matched catalog entry's own color, shown in preview headings.
    pub name_rgb: Rgb,
    /// CSS-safe form of `name`; the variable family prefix.
    pub slug: String,
    /// Role token sets in emission order, all five always present.
    pub roles: Vec<RoleTokens>,
}

/// Outcome of building a whole argument batch.
#[derive(Debug, Default)]
pub struct Batch {
    /// Successfully built palettes, in argument order.
    pub palettes: Vec<Palette>,
    /// Seeds that failed to parse, with their errors.
    pub rejected: Vec<(String, PaletteError)>,
}

impl Palette {
    /// Build the palette for one seed argument.
    ///
    /// The display name resolves from the primary ramp's representative
    /// tone rather than the raw seed, so near-identical seeds that land
    /// in the same ramp bucket share a name.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidColor`] when the seed does not parse (the
    /// caller skips just that seed); any resolver or ramp error otherwise.
    pub fn build(source: &str, index: &NameIndex) -> Result<Self, PaletteError> {
        let seed = color::normalize(source)?;
        let ramps = RampSet::new(seed);

        let probe = ramps.tone(Role::Primary, Role::Primary.default_tone(Theme::Light))?;
        let resolved = index.resolve(probe)?;
        tracing::debug!(
            corpus_index = resolved.index,
            name = %resolved.name,
            "resolved display name"
        );
        let slug = slugify(&resolved.name);

        let mut roles = Vec::with_capacity(Role::ALL.len());
        for role in Role::ALL {
            roles.push(RoleTokens {
                role,
                light: theme_tokens(&ramps, role, Theme::Light)?,
                dark: theme_tokens(&ramps, role, Theme::Dark)?,
            });
        }

        Ok(Self {
            source: source.trim().to_owned(),
            seed,
            name: resolved.name,
            name_rgb: resolved.rgb,
            slug,
            roles,
        })
    }
}

/// Build every seed in argument order.
///
/// A malformed seed lands in the rejected list without disturbing its
/// siblings; any other failure aborts the batch.
///
/// # Errors
///
/// Propagates resolver and ramp errors from [`Palette::build`].
pub fn build_batch(sources: &[String], index: &NameIndex) -> Result<Batch, PaletteError> {
    let mut batch = Batch::default();
    for source in sources {
        match Palette::build(source, index) {
            Ok(palette) => batch.palettes.push(palette),
            Err(e @ PaletteError::InvalidColor(_)) => batch.rejected.push((source.clone(), e)),
            Err(e) => return Err(e),
        }
    }
    Ok(batch)
}

fn theme_tokens(ramps: &RampSet, role: Role, theme: Theme) -> Result<ThemeTokens, PaletteError> {
    let mut default_hex = ramps.tone(role, role.default_tone(theme))?.to_hex();
    let mut tokens = Vec::new();
    for tone in theme.sample_tones() {
        tokens.push(Token {
            tone,
            step: theme.step(tone),
            hex: ramps.tone(role, tone)?.to_hex(),
        });
    }

    // Dark is an inversion of the rendered hex strings, not a
    // re-derivation of the ramp.
    if theme == Theme::Dark {
        default_hex = color::invert_hex(&default_hex)?;
        for token in &mut tokens {
            token.hex = color::invert_hex(&token.hex)?;
        }
    }

    Ok(ThemeTokens {
        default_hex,
        tokens,
    })
}
