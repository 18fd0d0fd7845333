//! Render command implementation.
//!
//! Loads a scene file, rasterizes it, and writes a PNG.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::output::{display_path, plural, Printer};
use crate::scene::Scene;

/// Render a scene file to PNG
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Scene file (YAML, or JSON with a .json extension)
    #[arg(required = true)]
    pub scene: PathBuf,

    /// Output PNG path (defaults to the scene path with a .png extension)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let scene = Scene::load(&args.scene)?;
    printer.status(
        "Loaded",
        &format!(
            "{} ({}x{}, {})",
            display_path(&args.scene),
            scene.width,
            scene.height,
            plural(scene.commands.len(), "command", "commands")
        ),
    );

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output(&args.scene));
    super::render_to(&scene, &output, printer)
}

/// `scene.yaml` -> `scene.png`, next to the scene.
fn default_output(scene: &Path) -> PathBuf {
    scene.with_extension("png")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_output_swaps_extension() {
        assert_eq!(
            default_output(Path::new("scenes/title.yaml")),
            PathBuf::from("scenes/title.png")
        );
        assert_eq!(default_output(Path::new("plain")), PathBuf::from("plain.png"));
    }

    #[test]
    fn test_run_writes_png() {
        let dir = tempdir().unwrap();
        let scene_path = dir.path().join("tiny.yaml");
        std::fs::write(
            &scene_path,
            "width: 3\nheight: 2\ncommands:\n  - kind: rect\n    x: 0\n    y: 0\n    w: 1\n    h: 1\n    colour: \"#f00\"\n",
        )
        .unwrap();

        let args = RenderArgs {
            scene: scene_path,
            output: None,
        };
        run(args, &Printer::new()).unwrap();

        let img = image::open(dir.path().join("tiny.png")).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(1, 0).0, [0, 0, 0, 255]);
    }
}
