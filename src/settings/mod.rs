//! The persisted settings record.
//!
//! Storage is the embedding UI's job; this crate defines the record, its
//! defaults, and the normalization the settings panel's sliders imply.
//! The round machine itself reads only `difficulty`.

use serde::{Deserialize, Serialize};

use crate::deck::Difficulty;

/// Device orientation preference.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Follow the device.
    #[default]
    Auto,
    Portrait,
    Landscape,
}

/// Everything the settings panel persists.
///
/// Unknown or missing fields fall back to defaults on load, so records
/// written by older versions keep working.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Card count per round; one of 12, 16, 20, 24.
    pub difficulty: usize,
    /// Overall board scale, slider range 0.5 to 1.2.
    pub board_size_scale: f32,
    /// Aspect tuning for landscape boards, slider range 1.0 to 2.5.
    pub board_aspect: f32,
    /// Background color, hex string.
    pub bg_color: String,
    /// Card back color, hex string.
    pub card_back: String,
    /// Opacity of matched cards, 0 to 1.
    pub matched_opacity: f32,
    pub orientation: Orientation,
    /// Scale of the terminal overlay, 0.5 to 2.0.
    pub modal_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: 12,
            board_size_scale: 1.0,
            board_aspect: 1.618,
            bg_color: "#2c3e50".to_string(),
            card_back: "#34495e".to_string(),
            matched_opacity: 0.2,
            orientation: Orientation::Auto,
            modal_scale: 1.0,
        }
    }
}

impl Settings {
    /// The validated difficulty, falling back to the default for a
    /// count outside the allowed set.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        Difficulty::from_count(self.difficulty).unwrap_or_default()
    }

    /// Clamp every numeric field into its slider range and snap the
    /// difficulty to the allowed set. Applied after loading a record.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.difficulty = self.difficulty().card_count();
        self.board_size_scale = self.board_size_scale.clamp(0.5, 1.2);
        self.board_aspect = self.board_aspect.clamp(1.0, 2.5);
        self.matched_opacity = self.matched_opacity.clamp(0.0, 1.0);
        self.modal_scale = self.modal_scale.clamp(0.5, 2.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.difficulty, 12);
        assert_eq!(settings.difficulty().card_count(), 12);
        assert_eq!(settings.bg_color, "#2c3e50");
        assert_eq!(settings.orientation, Orientation::Auto);
    }

    #[test]
    fn test_clamped_normalizes_out_of_range_values() {
        let settings = Settings {
            difficulty: 14,
            board_size_scale: 3.0,
            board_aspect: 0.1,
            matched_opacity: -1.0,
            modal_scale: 9.0,
            ..Settings::default()
        }
        .clamped();

        assert_eq!(settings.difficulty, 12);
        assert_eq!(settings.board_size_scale, 1.2);
        assert_eq!(settings.board_aspect, 1.0);
        assert_eq!(settings.matched_opacity, 0.0);
        assert_eq!(settings.modal_scale, 2.0);
    }

    #[test]
    fn test_clamped_keeps_valid_values() {
        let settings = Settings {
            difficulty: 24,
            board_size_scale: 0.8,
            ..Settings::default()
        };
        assert_eq!(settings.clone().clamped(), settings);
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings {
            difficulty: 20,
            orientation: Orientation::Landscape,
            ..Settings::default()
        };

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_record_falls_back_to_defaults() {
        // A record written before `modal_scale` existed
        let loaded: Settings = serde_json::from_str(r#"{"difficulty": 16}"#).unwrap();
        assert_eq!(loaded.difficulty, 16);
        assert_eq!(loaded.modal_scale, 1.0);
        assert_eq!(loaded.card_back, "#34495e");
    }
}
