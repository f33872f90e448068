//! Role definitions and the tonal-ramp provider.
//!
//! The perceptual color math lives in `material-color-utilities`; this
//! module derives the five role palettes from a seed's HCT hue and chroma
//! and exposes plain `(role, tone) -> Rgb` sampling to the rest of the
//! pipeline.

#[cfg(test)]
#[path = "ramp_test.rs"]
mod ramp_test;

use material_color_utilities::hct::Hct;
use material_color_utilities::palettes::TonalPalette;

use crate::color::Rgb;
use crate::error::PaletteError;
use crate::tone::Theme;

/// The five semantic color families derived from one seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
}

impl Role {
    /// All roles in emission order.
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Neutral,
        Self::NeutralVariant,
    ];

    /// Name used in variable families and config keys.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Neutral => "neutral",
            Self::NeutralVariant => "neutralVariant",
        }
    }

    /// Human label for preview headings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "Primary",
            Self::Secondary => "Secondary",
            Self::Tertiary => "Tertiary",
            Self::Neutral => "Neutral",
            Self::NeutralVariant => "Neutral Variant",
        }
    }

    /// Representative tone backing the role's DEFAULT token.
    #[must_use]
    pub fn default_tone(self, theme: Theme) -> u8 {
        match theme {
            Theme::Light => match self {
                Self::Primary | Self::Secondary | Self::Tertiary => 40,
                Self::Neutral => 90,
                Self::NeutralVariant => 80,
            },
            Theme::Dark => match self {
                Self::Primary | Self::Secondary | Self::Tertiary => 80,
                Self::Neutral => 20,
                Self::NeutralVariant => 30,
            },
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// The five tonal ramps derived from one seed color.
///
/// Construction is deterministic: the same seed always yields the same
/// ramps, and sampling never mutates shared state.
pub struct RampSet {
    primary: TonalPalette,
    secondary: TonalPalette,
    tertiary: TonalPalette,
    neutral: TonalPalette,
    neutral_variant: TonalPalette,
}

impl RampSet {
    /// Derive the role ramps from the seed's hue and chroma.
    ///
    /// Accent roles share the seed hue (tertiary rotates +60°); neutrals
    /// keep the hue at near-zero chroma.
    #[must_use]
    pub fn new(seed: Rgb) -> Self {
        let hct = Hct::from_int(seed.to_argb());
        let hue = hct.hue();
        let chroma = hct.chroma();
        Self {
            primary: TonalPalette::from_hue_and_chroma(hue, chroma.max(48.0)),
            secondary: TonalPalette::from_hue_and_chroma(hue, 16.0),
            tertiary: TonalPalette::from_hue_and_chroma((hue + 60.0) % 360.0, 24.0),
            neutral: TonalPalette::from_hue_and_chroma(hue, 4.0),
            neutral_variant: TonalPalette::from_hue_and_chroma(hue, 8.0),
        }
    }

    /// Sample one ramp at the given tone.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::RampDerivationFailed`] for tones outside
    /// the 0-100 domain.
    pub fn tone(&self, role: Role, tone: u8) -> Result<Rgb, PaletteError> {
        if tone > 100 {
            return Err(PaletteError::RampDerivationFailed { role, tone });
        }
        let palette = match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Tertiary => &self.tertiary,
            Role::Neutral => &self.neutral,
            Role::NeutralVariant => &self.neutral_variant,
        };
        Ok(Rgb::from_argb(palette.tone(tone)))
    }
}
