use std::io::Write;

use anyhow::Context;
use clap::Parser;
use quadrant_frames::{
    glyph,
    SpriteSheetEncoder,
};

#[derive(Debug, Parser)]
#[clap(version, about)]
struct Args {
    /// The sprite sheet to convert. Frames are 32x16 pixels, four across.
    #[clap(default_value = "archie.png")]
    image_path: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    glyph::verify_table().context("Glyph table is inconsistent")?;

    let frames = SpriteSheetEncoder::encode_path(&args.image_path)
        .with_context(|| format!("Failed to convert {}", args.image_path))?;

    log::info!("Converted {} frames", frames.frames().len());

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(frames.to_literal().as_bytes())?;
    stdout.flush()?;

    Ok(())
}
