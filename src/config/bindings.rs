use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default seconds between forwarded empty frames (combo grace window).
pub const DEFAULT_DEBOUNCE_DELAY: f32 = 0.2;

/// Button and axis names for one player's device.
///
/// One parameterized layout replaces per-player input interpreter subclasses;
/// a second player is just a different set of names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonLayout {
    pub light_punch: String,
    pub heavy_punch: String,
    pub light_kick: String,
    pub heavy_kick: String,
    pub taunt1: String,
    pub taunt2: String,
    pub horizontal_axis: String,
    pub vertical_axis: String,
}

impl ButtonLayout {
    pub fn player1() -> Self {
        Self {
            light_punch: "LightPunch".into(),
            heavy_punch: "HeavyPunch".into(),
            light_kick: "LightKick".into(),
            heavy_kick: "HeavyKick".into(),
            taunt1: "Taunt1".into(),
            taunt2: "Taunt2".into(),
            horizontal_axis: "Horizontal".into(),
            vertical_axis: "Vertical".into(),
        }
    }

    pub fn player2() -> Self {
        Self {
            light_punch: "P2LightPunch".into(),
            heavy_punch: "P2HeavyPunch".into(),
            light_kick: "P2LightKick".into(),
            heavy_kick: "P2HeavyKick".into(),
            taunt1: "P2Taunt1".into(),
            taunt2: "P2Taunt2".into(),
            horizontal_axis: "P2Horizontal".into(),
            vertical_axis: "P2Vertical".into(),
        }
    }

    /// Button names in device scan order.
    pub fn buttons(&self) -> [&str; 6] {
        [
            &self.light_punch,
            &self.heavy_punch,
            &self.light_kick,
            &self.heavy_kick,
            &self.taunt1,
            &self.taunt2,
        ]
    }
}

impl Default for ButtonLayout {
    fn default() -> Self {
        Self::player1()
    }
}

/// Input tuning and per-player bindings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSettings {
    /// Seconds an empty frame is suppressed after the last observation.
    pub debounce_delay: f32,
    pub player1: ButtonLayout,
    pub player2: ButtonLayout,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE_DELAY,
            player1: ButtonLayout::player1(),
            player2: ButtonLayout::player2(),
        }
    }
}

impl InputSettings {
    /// Load settings from a path. A missing file yields the defaults.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save settings to a path as pretty JSON.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layouts_differ_per_player() {
        let settings = InputSettings::default();
        assert_ne!(settings.player1, settings.player2);
        assert_eq!(settings.player2.horizontal_axis, "P2Horizontal");
    }

    #[test]
    fn test_scan_order_starts_with_punches() {
        let layout = ButtonLayout::player1();
        let buttons = layout.buttons();
        assert_eq!(buttons[0], "LightPunch");
        assert_eq!(buttons[5], "Taunt2");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = InputSettings::load_from("does/not/exist.json").unwrap();
        assert_eq!(settings, InputSettings::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.json");

        let mut settings = InputSettings::default();
        settings.debounce_delay = 0.35;
        settings.player1.heavy_punch = "Fire2".into();
        settings.save_to(&path).unwrap();

        let loaded = InputSettings::load_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }
}
