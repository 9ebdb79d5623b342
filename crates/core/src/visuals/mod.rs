use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::{Item, Result, ShowcaseError};

/// Placeholder presentation of an asset in the 3D viewport: a tinted box with
/// a non-uniform scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetVisual {
    pub name: String,
    /// `#rrggbb` hex colour.
    pub color: String,
    #[serde(default = "unit_scale")]
    pub scale: [f32; 3],
}

fn unit_scale() -> [f32; 3] {
    [1.0; 3]
}

impl AssetVisual {
    pub fn new(name: impl Into<String>, color: impl Into<String>, scale: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            scale,
        }
    }

    /// Decodes the hex colour into RGB components.
    pub fn rgb(&self) -> Result<[u8; 3]> {
        parse_hex_color(&self.color)
    }
}

impl Default for AssetVisual {
    fn default() -> Self {
        Self {
            name: String::new(),
            color: "#ffffff".to_string(),
            scale: unit_scale(),
        }
    }
}

/// Registry of visuals keyed by the catalog's `visual_key`.
#[derive(Debug, Default, Clone)]
pub struct VisualRegistry {
    visuals: HashMap<String, AssetVisual>,
}

impl VisualRegistry {
    pub fn new() -> Self {
        Self {
            visuals: HashMap::new(),
        }
    }

    /// Registers a visual under `key`, replacing any previous entry.
    pub fn register(&mut self, key: impl Into<String>, visual: AssetVisual) -> Result<()> {
        parse_hex_color(&visual.color)?;
        self.visuals.insert(key.into(), visual);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&AssetVisual> {
        self.visuals.get(key)
    }

    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }

    /// Looks up the visual an item refers to.
    pub fn resolve(&self, item: &Item) -> Result<&AssetVisual> {
        self.visuals
            .get(&item.visual_key)
            .ok_or_else(|| ShowcaseError::UnknownVisual(item.visual_key.clone()))
    }
}

fn parse_hex_color(color: &str) -> Result<[u8; 3]> {
    let invalid = || ShowcaseError::InvalidColor(color.to_string());
    let hex = color.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }

    let mut rgb = [0_u8; 3];
    for (channel, chunk) in rgb.iter_mut().zip(hex.as_bytes().chunks(2)) {
        let digits = std::str::from_utf8(chunk).map_err(|_| invalid())?;
        *channel = u8::from_str_radix(digits, 16).map_err(|_| invalid())?;
    }
    Ok(rgb)
}
