//! Preview command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::output::Printer;
use crate::scene::Scene;

use super::render_to;

/// Render the built-in live stream preview image
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Output PNG path
    #[arg(long, short, default_value = "web/preview.png")]
    pub output: PathBuf,
}

pub fn run(args: PreviewArgs, printer: &Printer) -> Result<()> {
    render_to(&Scene::stream_preview(), &args.output, printer)
}
