//! Tone-to-step mapping and per-theme sampling order.
//!
//! Tones are the abstract 0-100 lightness coordinates of the tonal-ramp
//! model; steps are the display suffixes emitted on tokens (50..950).

#[cfg(test)]
#[path = "tone_test.rs"]
mod tone_test;

/// Tones sampled for every emitted ramp, ascending.
pub const MATERIAL_TONES: [u8; 11] = [10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 98];

/// Output theme. Selects the tone-to-step table and the sampling order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Map a tone to its display step label.
    ///
    /// Tones absent from the table pass through as their own numeric
    /// label. The fallback is deliberate leniency, not an error path.
    #[must_use]
    pub fn step(self, tone: u8) -> u16 {
        match self {
            Self::Light => match tone {
                0 | 10 => 950,
                20 => 900,
                30 => 800,
                40 => 700,
                50 => 600,
                60 => 500,
                70 => 400,
                80 => 300,
                90 => 200,
                95 => 100,
                98 | 100 => 50,
                other => u16::from(other),
            },
            Self::Dark => match tone {
                98 | 100 => 950,
                95 => 900,
                90 => 800,
                80 => 700,
                70 => 600,
                60 => 500,
                50 => 400,
                40 => 300,
                30 => 200,
                20 => 100,
                0 | 10 => 50,
                other => u16::from(other),
            },
        }
    }

    /// Sampling order for ramp emission: ascending tones for light, the
    /// reversed list for dark.
    ///
    /// Always a fresh `Vec`. Reversing a buffer shared across ramps would
    /// make the order depend on how many ramps came before, so callers
    /// never see the same allocation twice.
    #[must_use]
    pub fn sample_tones(self) -> Vec<u8> {
        let mut tones = MATERIAL_TONES.to_vec();
        if self == Self::Dark {
            tones.reverse();
        }
        tones
    }
}
