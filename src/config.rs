use std::path::{Path, PathBuf};

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SketchError};

/// A marker button: its label and the stroke thickness it selects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPreset {
    pub label: String,
    pub thickness: f32,
}

impl MarkerPreset {
    pub fn new(label: &str, thickness: f32) -> Self {
        Self {
            label: label.to_owned(),
            thickness,
        }
    }
}

/// Startup configuration for the sketchpad.
///
/// Every field has a default, so a config file only needs the keys it
/// wants to override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct SketchConfig {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Background fill as opaque RGB.
    pub background: [u8; 3],
    pub export_scale: f32,
    pub export_path: PathBuf,
    pub markers: Vec<MarkerPreset>,
    pub stamps: Vec<String>,
    /// Seed for marker colors and stamp rotations. Random when absent.
    pub seed: Option<u64>,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            background: [255, 255, 255],
            export_scale: 4.0,
            export_path: PathBuf::from("sketchpad.png"),
            markers: vec![MarkerPreset::new("thin", 2.0), MarkerPreset::new("thick", 8.0)],
            stamps: vec!["🐣".to_owned(), "🌮".to_owned(), "🎃".to_owned()],
            seed: None,
        }
    }
}

impl SketchConfig {
    /// Read a JSON config file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.markers.is_empty() {
            return Err(SketchError::InvalidConfig("at least one marker is required".into()));
        }
        if let Some(bad) = self
            .markers
            .iter()
            .find(|m| !(m.thickness.is_finite() && m.thickness > 0.0))
        {
            return Err(SketchError::InvalidConfig(format!(
                "marker '{}' has non-positive thickness {}",
                bad.label, bad.thickness
            )));
        }
        if !(self.export_scale.is_finite() && self.export_scale > 0.0) {
            return Err(SketchError::InvalidConfig(format!(
                "export scale must be positive, got {}",
                self.export_scale
            )));
        }
        Ok(())
    }

    pub fn background_color(&self) -> Color32 {
        let [r, g, b] = self.background;
        Color32::from_rgb(r, g, b)
    }

    pub fn canvas_size(&self) -> egui::Vec2 {
        egui::vec2(self.canvas_width as f32, self.canvas_height as f32)
    }
}
