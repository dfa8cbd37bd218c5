use anyhow::Result;
use color_key::KeyerConfig;
use image::{Rgba, RgbaImage};
use std::{fs, path::PathBuf};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let output_dir = PathBuf::from("./output");
    if !output_dir.exists() {
        fs::create_dir(&output_dir)?;
    }

    // Solid grey background with a red square in the middle
    let mut img = RgbaImage::from_pixel(256, 256, Rgba([230, 230, 230, 255]));
    for y in 96..160 {
        for x in 96..160 {
            img.put_pixel(x, y, Rgba([200, 30, 30, 255]));
        }
    }

    let input_path = output_dir.join("demo_input.png");
    img.save(&input_path)?;
    log::info!("Created test image: {}", input_path.display());

    let config = KeyerConfig::new();

    let keyed = config.key(&img);
    let keyed_path = output_dir.join("demo_keyed.png");
    keyed.save(&keyed_path)?;
    log::info!("Saving result to: {:?}", keyed_path);

    let mask = config.mask(&img);
    let mask_path = output_dir.join("demo_mask.png");
    mask.save(&mask_path)?;
    log::info!("Saving mask to: {:?}", mask_path);

    // Same result through the in-place file path
    let in_place_path = output_dir.join("demo_in_place.png");
    img.save(&in_place_path)?;
    config.key_file(&in_place_path)?;
    log::info!("Keyed {} in place", in_place_path.display());

    log::info!("Color keying completed successfully!");

    Ok(())
}
