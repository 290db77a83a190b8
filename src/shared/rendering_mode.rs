//! Rendering-Modus des Tomogramms (Volumen vs. Schnittebene).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Darstellung des Volumens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderingMode {
    /// Volles Volumen-Rendering
    #[default]
    Volume,
    /// Dünne Schicht um die Schnittebene
    Plane,
}

impl RenderingMode {
    /// Ob in diesem Modus die Schnittebene aktiv ist.
    pub fn renders_plane(self) -> bool {
        self == RenderingMode::Plane
    }

    /// Modus passend zum Enabled-Zustand der Schnittebene.
    pub fn from_plane_enabled(enabled: bool) -> Self {
        if enabled {
            RenderingMode::Plane
        } else {
            RenderingMode::Volume
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RenderingMode::Volume => "volume",
            RenderingMode::Plane => "plane",
        }
    }
}

impl fmt::Display for RenderingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RenderingMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "volume" => Ok(RenderingMode::Volume),
            "plane" => Ok(RenderingMode::Plane),
            other => anyhow::bail!("Unbekannter Rendering-Modus: {other}"),
        }
    }
}
