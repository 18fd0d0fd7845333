pub mod completions;
pub mod preview;
pub mod render;

use std::fs;
use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::{CanvasError, Result};
use crate::output::{display_path, Printer};
use crate::render::write_png;
use crate::scene::Scene;

/// pxcanvas - rasterize simple scenes to PNG
#[derive(Parser, Debug)]
#[command(name = "pxcanvas")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a scene file to PNG
    Render(render::RenderArgs),

    /// Render the built-in live stream preview image
    Preview(preview::PreviewArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Render `scene` and write it to `output`, creating parent directories.
pub(crate) fn render_to(scene: &Scene, output: &Path, printer: &Printer) -> Result<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| CanvasError::Io {
                path: parent.to_path_buf(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    let canvas = scene.render()?;
    write_png(&canvas, output)?;
    printer.success(
        "Rendered",
        &format!("{}x{} -> {}", canvas.width(), canvas.height(), display_path(output)),
    );
    Ok(())
}
