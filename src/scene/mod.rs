//! Scene files.
//!
//! A scene is a canvas size, a background colour, and an ordered list of
//! draw commands. Scenes are loaded from YAML (or JSON, by extension) and
//! rendered in one pass onto a fresh canvas.

mod preview;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, Result};
use crate::render::{PixelCanvas, Rasterizer};
use crate::types::{Colour, DrawCommand};

/// A complete image description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: u32,
    pub height: u32,

    /// Canvas fill colour before any command runs.
    #[serde(default = "default_background")]
    pub background: Colour,

    #[serde(default)]
    pub commands: Vec<DrawCommand>,
}

fn default_background() -> Colour {
    Colour::BLACK
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            background,
            commands: Vec::new(),
        }
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) -> &mut Self {
        self.commands.push(command);
        self
    }

    /// Load a scene file. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CanvasError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a scene from YAML.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| CanvasError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Scenes need width, height and a list of commands".to_string()),
        })
    }

    /// Parse a scene from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| CanvasError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Scenes need width, height and a list of commands".to_string()),
        })
    }

    /// Render every command, in order, onto a fresh canvas.
    pub fn render(&self) -> Result<PixelCanvas> {
        let mut canvas = PixelCanvas::new(self.width, self.height, self.background)?;
        let mut raster = Rasterizer::new(&mut canvas);
        for command in &self.commands {
            raster.apply(command);
        }
        Ok(canvas)
    }
}
