//! Terrain Snapshot Tool
//!
//! Run with: `cargo run --bin terrain-snapshot [scene_config.json]`
//!
//! Headless companion to the flyover: generates a heightmap and its
//! shaded texture with the same pipeline the interactive demo uses, then
//! writes both to PNG files for inspection. Pin `terrain.phase` in the
//! config to regenerate the same terrain.

use overflight_engine::config::SceneConfig;
use overflight_engine::terrain::{HeightmapConfig, generate_heightmap, generate_texture};

const HEIGHTMAP_PATH: &str = "heightmap.png";
const TEXTURE_PATH: &str = "terrain_texture.png";

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            println!("[Snapshot] Loading scene config from {path}");
            SceneConfig::load(&path)?
        }
        None => SceneConfig::default(),
    };

    let phase = config.terrain.phase.unwrap_or_else(|| {
        use rand::Rng;
        rand::thread_rng().gen_range(0.0..2.0)
    });

    println!(
        "[Snapshot] Generating {}x{} terrain (phase {:.4})...",
        config.terrain.grid_width, config.terrain.grid_depth, phase
    );
    let grid = generate_heightmap(
        config.terrain.grid_width,
        config.terrain.grid_depth,
        phase,
        &HeightmapConfig::default(),
    )?;
    let image = generate_texture(&grid);

    grid.to_luma_image().save(HEIGHTMAP_PATH)?;
    println!("[Snapshot] Wrote {HEIGHTMAP_PATH}");

    image.to_rgba_image().save(TEXTURE_PATH)?;
    println!("[Snapshot] Wrote {TEXTURE_PATH}");

    Ok(())
}

fn main() {
    println!("=== Terrain Snapshot ===");
    if let Err(e) = run() {
        eprintln!("[Snapshot] Failed: {e}");
        std::process::exit(1);
    }
}
