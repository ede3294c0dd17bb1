//! Interpolation modes and their metadata.

use std::{fmt, str::FromStr};

use crate::error::{Error, Result};

/// How samples between two consecutive control points are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CurveMode {
    /// Straight lines between control points.
    #[default]
    Linear,
    /// Per-segment `3t² − 2t³` easing; horizontal at every control point.
    SmoothStep,
    /// Cubic Hermite spline with neighbour-estimated tangents (C¹).
    Hermite,
}

/// Metadata for one mode.
#[derive(Debug, Clone, Copy)]
pub struct ModeEntry {
    /// The mode itself.
    pub mode: CurveMode,
    /// Stable key used on the command line.
    pub key: &'static str,
    /// Human-readable label.
    pub display: &'static str,
    /// One-line description.
    pub info: &'static str,
}

/// All modes in cycling order.
pub const MODES: &[ModeEntry] = &[
    ModeEntry {
        mode: CurveMode::Linear,
        key: "linear",
        display: "Linear",
        info: "Straight segments; identical to sampling a line.",
    },
    ModeEntry {
        mode: CurveMode::SmoothStep,
        key: "smoothstep",
        display: "Smooth Step",
        info: "Each segment eased with 3t^2 - 2t^3; flat at every control point.",
    },
    ModeEntry {
        mode: CurveMode::Hermite,
        key: "hermite",
        display: "Hermite",
        info: "Cubic Hermite spline with tension/bias tangents; continuous slope.",
    },
];

/// Keys of all modes, in cycling order.
pub const MODE_KEYS: &[&str] = &["linear", "smoothstep", "hermite"];

impl CurveMode {
    /// Registry entry for this mode.
    pub fn entry(self) -> &'static ModeEntry {
        &MODES[self.index()]
    }

    /// Stable command-line key.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        self.entry().display
    }

    /// Position in [`MODES`].
    pub fn index(self) -> usize {
        match self {
            Self::Linear => 0,
            Self::SmoothStep => 1,
            Self::Hermite => 2,
        }
    }

    /// The following mode, wrapping back to the first.
    pub fn next(self) -> Self {
        MODES[(self.index() + 1) % MODES.len()].mode
    }

    /// Look a mode up by its numeric index.
    pub fn from_index(index: usize) -> Result<Self> {
        MODES
            .get(index)
            .map(|e| e.mode)
            .ok_or_else(|| Error::invalid(format!("unrecognised curve mode index {index}")))
    }
}

impl FromStr for CurveMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        MODES
            .iter()
            .find(|e| e.key == wanted || e.display.eq_ignore_ascii_case(&wanted))
            .map(|e| e.mode)
            .ok_or_else(|| {
                Error::invalid(format!(
                    "unrecognised curve mode '{s}'. Valid options: {}",
                    MODE_KEYS.join(", ")
                ))
            })
    }
}

impl TryFrom<u32> for CurveMode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::from_index(value as usize)
    }
}

impl fmt::Display for CurveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_registry() {
        let keys: Vec<_> = MODES.iter().map(|e| e.key).collect();
        assert_eq!(keys, MODE_KEYS);
        for (i, e) in MODES.iter().enumerate() {
            assert_eq!(e.mode.index(), i);
        }
    }

    #[test]
    fn parse() -> Result<()> {
        assert_eq!("linear".parse::<CurveMode>()?, CurveMode::Linear);
        assert_eq!("SmoothStep".parse::<CurveMode>()?, CurveMode::SmoothStep);
        assert_eq!("Smooth Step".parse::<CurveMode>()?, CurveMode::SmoothStep);
        assert_eq!(" hermite ".parse::<CurveMode>()?, CurveMode::Hermite);
        Ok(())
    }

    #[test]
    fn unknown_mode_is_invalid() {
        assert!(matches!(
            "bezier".parse::<CurveMode>(),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            CurveMode::try_from(3),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(CurveMode::Linear.next(), CurveMode::SmoothStep);
        assert_eq!(CurveMode::SmoothStep.next(), CurveMode::Hermite);
        assert_eq!(CurveMode::Hermite.next(), CurveMode::Linear);
    }

    #[test]
    fn labels() {
        assert_eq!(CurveMode::SmoothStep.to_string(), "Smooth Step");
        assert_eq!(CurveMode::Hermite.key(), "hermite");
    }
}
