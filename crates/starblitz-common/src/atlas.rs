// atlas.rs -- texture atlas description parsing and UV resolution
//
// The atlas description is a JSON object mapping a texture file name to a
// table of sprite-name -> pixel rectangle [x, y, w, h], origin top-left.
// Image decoding lives in the frontend; the core only needs the texture's
// pixel dimensions to normalize the rectangles.

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

/// One sprite's normalized texture rectangle plus half-extents in scene
/// units. Immutable after load; shared read-only by every particle of a
/// kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvMapping {
    pub u0: f32,
    pub v0: f32,
    pub u1: f32,
    pub v1: f32,
    /// Half width of the sprite, in scene units.
    pub su: f32,
    /// Half height of the sprite, in scene units.
    pub sv: f32,
}

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("atlas read failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("atlas parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("atlas contains no texture entry")]
    Empty,
    #[error("sprite '{0}' not present in atlas")]
    MissingSprite(String),
}

/// Resolved atlas: the texture file name and the per-sprite UV table.
#[derive(Debug, Clone)]
pub struct Atlas {
    texture: String,
    sprites: HashMap<String, UvMapping>,
}

impl Atlas {
    /// Reads and resolves an atlas description file. Any failure here is
    /// fatal to startup; no partial atlas is ever produced.
    pub fn load<P: AsRef<Path>>(
        path: P,
        tex_width: u32,
        tex_height: u32,
    ) -> Result<Atlas, AtlasError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text, tex_width, tex_height)
    }

    /// Resolves an atlas description string against the texture's pixel
    /// dimensions. Exactly one texture entry is consumed.
    pub fn from_json(text: &str, tex_width: u32, tex_height: u32) -> Result<Atlas, AtlasError> {
        let raw: HashMap<String, HashMap<String, [f32; 4]>> = serde_json::from_str(text)?;
        let (texture, rects) = raw.into_iter().next().ok_or(AtlasError::Empty)?;

        let tw = tex_width as f32;
        let th = tex_height as f32;
        let sprites = rects
            .into_iter()
            .map(|(name, [x, y, w, h])| {
                let uv = UvMapping {
                    u0: x / tw,
                    v0: 1.0 - (y + h) / th,
                    u1: (x + w) / tw,
                    v1: 1.0 - y / th,
                    su: 0.5 * w,
                    sv: 0.5 * h,
                };
                (name, uv)
            })
            .collect();

        Ok(Atlas { texture, sprites })
    }

    /// Texture file name the sprite rectangles refer to.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Looks up one sprite's UV mapping. Absence is fatal to the setup
    /// path that requested it.
    pub fn sprite(&self, name: &str) -> Result<&UvMapping, AtlasError> {
        self.sprites
            .get(name)
            .ok_or_else(|| AtlasError::MissingSprite(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ATLAS_JSON: &str = r#"{
        "game.png": {
            "star":   [0, 0, 24, 24],
            "player": [24, 0, 96, 64],
            "bullet": [120, 0, 24, 12]
        }
    }"#;

    #[test]
    fn test_resolution_math() {
        let atlas = Atlas::from_json(ATLAS_JSON, 256, 128).unwrap();
        assert_eq!(atlas.texture(), "game.png");

        let p = atlas.sprite("player").unwrap();
        assert_eq!(p.u0, 24.0 / 256.0);
        assert_eq!(p.u1, 120.0 / 256.0);
        // v axis flips: pixel origin is top-left, UV origin bottom-left.
        assert_eq!(p.v0, 1.0 - 64.0 / 128.0);
        assert_eq!(p.v1, 1.0);
        assert_eq!(p.su, 48.0);
        assert_eq!(p.sv, 32.0);
    }

    #[test]
    fn test_missing_sprite() {
        let atlas = Atlas::from_json(ATLAS_JSON, 256, 128).unwrap();
        match atlas.sprite("ufo") {
            Err(AtlasError::MissingSprite(name)) => assert_eq!(name, "ufo"),
            other => panic!("expected MissingSprite, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            Atlas::from_json("{ not json", 256, 256),
            Err(AtlasError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_atlas() {
        assert!(matches!(
            Atlas::from_json("{}", 256, 256),
            Err(AtlasError::Empty)
        ));
    }
}
