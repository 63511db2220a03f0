//! Display settings and preferences
//!
//! Only affects what the projector emits, never the simulation.

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    Medium,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Fraction of the trail palette slots that get drawn (1.0 = full)
    pub fn trail_quality(&self) -> f32 {
        match self {
            QualityPreset::Low => 0.25,
            QualityPreset::Medium => 0.6,
            QualityPreset::High => 1.0,
        }
    }
}

/// How trail rectangles are coloured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TrailStyle {
    /// Colour of the side that last touched the ball
    #[default]
    Owner,
    /// Fading rainbow gradient, one colour per slot
    Rainbow,
}

/// Display settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub quality: QualityPreset,
    /// Ball trails
    pub trails: bool,
    pub trail_style: TrailStyle,
    /// Drop shadows under walls, paddles and balls
    pub shadows: bool,
    /// Score pips above the court
    pub show_score: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::High,
            trails: true,
            trail_style: TrailStyle::Owner,
            shadows: false,
            show_score: true,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset
    pub fn from_preset(preset: QualityPreset) -> Self {
        Self {
            quality: preset,
            ..Self::default()
        }
    }

    /// Parse settings from JSON, falling back to defaults on malformed input
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Number of trail samples drawn per ball for a palette of `palette_len` colours
    pub fn trail_slots(&self, palette_len: usize) -> usize {
        if !self.trails || palette_len == 0 {
            return 0;
        }
        let slots = (palette_len as f32 * self.quality.trail_quality()).ceil() as usize;
        slots.clamp(1, palette_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parsing() {
        assert_eq!(QualityPreset::from_str("MED"), Some(QualityPreset::Medium));
        assert_eq!(QualityPreset::from_str("ultra"), None);
        assert_eq!(QualityPreset::High.as_str(), "High");
    }

    #[test]
    fn test_trail_slots() {
        let mut settings = Settings::default();
        assert_eq!(settings.trail_slots(22), 22);

        settings.quality = QualityPreset::Low;
        assert_eq!(settings.trail_slots(22), 6);

        settings.trails = false;
        assert_eq!(settings.trail_slots(22), 0);
    }

    #[test]
    fn test_from_json_partial_and_malformed() {
        let settings = Settings::from_json(r#"{ "shadows": true, "trail_style": "Rainbow" }"#);
        assert!(settings.shadows);
        assert_eq!(settings.trail_style, TrailStyle::Rainbow);
        assert!(settings.trails);

        assert_eq!(Settings::from_json("[1, 2"), Settings::default());
    }
}
