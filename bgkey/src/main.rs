use anyhow::Result;
use clap::Parser;
use color_key::KeyerConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Convert a solid image background color to transparency")]
struct Args {
    /// Image files to rewrite in place as PNG
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Per-channel tolerance for matching the background color (exclusive)
    #[arg(short, long, default_value_t = 5)]
    tolerance: u8,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = KeyerConfig::new().with_tolerance(args.tolerance);

    // One failing file never stops the rest of the batch
    for path in &args.paths {
        match config.key_file(path) {
            Ok(()) => println!("Processed {}", path.display()),
            Err(e) => eprintln!("Error processing {}: {e}", path.display()),
        }
    }

    Ok(())
}
