//! Converts the app photo into web app icons.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pwa_icons::commands::{Progress, ProgressAction, convert};
use pwa_icons::icon::{OUTPUT_DIR, SOURCE_FILENAME};
use pwa_icons::utils::capability::{self, Capability};

#[derive(Parser)]
#[command(name = "process-icon")]
#[command(about = "Resize a photo into the web app's PNG icons")]
struct Cli {
    /// Source image
    #[arg(short, long, default_value = SOURCE_FILENAME)]
    source: PathBuf,

    /// Existing directory to write the icons into
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,

    /// Web app manifest whose icon list should be updated
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = Capability::check(capability::CONVERT).into_result() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let result = convert::run(
        &cli.source,
        &cli.output,
        cli.manifest.as_deref(),
        Some(|p: Progress| match p.action {
            ProgressAction::Created => println!("✓ Created {}", p.file.display()),
            ProgressAction::ManifestUpdated => println!("✓ Updated {}", p.file.display()),
        }),
    );

    match result {
        Ok(_) => println!("\n✨ Icon updated successfully!"),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
