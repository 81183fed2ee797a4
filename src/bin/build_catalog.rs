//! Generates a starter poster catalog from a folder of JPEGs.
//!
//! Every record gets a title from its file name and placeholder analysis
//! text, ready to be filled in by hand.

use clap::Parser;
use cold_war_posters::Catalog;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "build-catalog",
    version,
    about = "Create posters.json from a folder of .jpg files"
)]
struct Args {
    /// Folder containing the poster images
    folder: PathBuf,

    /// Where to write the catalog
    #[arg(short, long, default_value = "posters.json")]
    output: PathBuf,

    /// Assets directory the viewer resolves image paths against
    #[arg(short, long, default_value = "assets")]
    assets_dir: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if !args.folder.is_dir() {
        tracing::error!("❌ {} is not a folder", args.folder.display());
        return ExitCode::FAILURE;
    }

    let catalog = Catalog::from_image_folder(&args.folder, &args.assets_dir);

    match catalog.save(&args.output) {
        Ok(()) => {
            tracing::info!(
                "✅ Created {} with {} posters",
                args.output.display(),
                catalog.len()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
