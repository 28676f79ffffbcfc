//! Generates placeholder web app icons.
//!
//! Draws a bottle on a blue background at each icon size and writes
//! `icons/icon-{size}x{size}.png`.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pwa_icons::commands::{Progress, ProgressAction, generate};
use pwa_icons::icon::OUTPUT_DIR;
use pwa_icons::utils::capability::{self, Capability};

#[derive(Parser)]
#[command(name = "generate-icons")]
#[command(about = "Generate placeholder PNG icons for the web app")]
struct Cli {
    /// Directory to write the icons into (created if missing)
    #[arg(short, long, default_value = OUTPUT_DIR)]
    output: PathBuf,

    /// Web app manifest whose icon list should be updated
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = Capability::check(capability::GENERATE).into_result() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let result = generate::run(
        &cli.output,
        cli.manifest.as_deref(),
        Some(|p: Progress| match p.action {
            ProgressAction::Created => println!("Created {}", p.file.display()),
            ProgressAction::ManifestUpdated => println!("Updated {}", p.file.display()),
        }),
    );

    match result {
        Ok(_) => {
            println!("\nIcons generated successfully!");
            println!("The app is now ready to be deployed.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
