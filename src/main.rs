use clap::Parser;
use miette::Result;
use pxcanvas::cli::{Cli, Commands};
use pxcanvas::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => pxcanvas::cli::render::run(args, &printer)?,
        Commands::Preview(args) => pxcanvas::cli::preview::run(args, &printer)?,
        Commands::Completions(args) => pxcanvas::cli::completions::run(args)?,
    }

    Ok(())
}
