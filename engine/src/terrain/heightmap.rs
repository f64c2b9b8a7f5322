//! Heightmap Generation
//!
//! Builds a grid of terrain elevation samples by summing octaves of 3D
//! gradient noise. Each octave samples the noise lattice at a coarser
//! scale than the last and is weighted by that scale, so late passes
//! contribute the large hills and early passes the fine detail.
//!
//! All run-to-run variation comes from a single `phase` value used as the
//! third noise coordinate. Callers that need reproducible terrain pass a
//! fixed phase; the unseeded wrapper exists only for the app boundary.

use fastnoise_lite::{FastNoiseLite, NoiseType};
use rand::Rng;

/// Permutation seed for the noise lattice. Fixed so that `phase` alone
/// determines the generated terrain.
const NOISE_SEED: i32 = 1337;

/// Errors from terrain grid construction.
#[derive(Debug)]
pub enum TerrainError {
    /// Grid dimensions must both be at least 1.
    InvalidDimensions { width: usize, depth: usize },
    /// Raw sample buffer does not match width * depth.
    SampleCountMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for TerrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerrainError::InvalidDimensions { width, depth } => {
                write!(f, "invalid grid dimensions: {width}x{depth}")
            }
            TerrainError::SampleCountMismatch { expected, actual } => {
                write!(f, "sample buffer holds {actual} values, expected {expected}")
            }
        }
    }
}

impl std::error::Error for TerrainError {}

/// Tunable parameters for heightmap synthesis.
#[derive(Clone, Copy, Debug)]
pub struct HeightmapConfig {
    /// Number of octave passes over the grid.
    pub octaves: u32,
    /// Amplitude gain applied to every octave (empirically tuned).
    pub gain: f32,
    /// Scale multiplier between octaves. Each pass samples the lattice
    /// at `step` times coarser spacing and `step` times the amplitude.
    pub frequency_step: f32,
}

impl Default for HeightmapConfig {
    fn default() -> Self {
        Self {
            octaves: 4,
            gain: 1.75,
            frequency_step: 5.0,
        }
    }
}

/// A read-only grid of terrain elevation samples.
///
/// Samples are one byte each, row-major (`index = y * width + x`), and
/// non-negative by construction. Built once at scene setup; consumed by
/// both the texture bake and mesh displacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightGrid {
    width: usize,
    depth: usize,
    data: Vec<u8>,
}

impl HeightGrid {
    /// Wrap an existing sample buffer. The buffer must hold exactly
    /// `width * depth` values.
    pub fn from_raw(width: usize, depth: usize, data: Vec<u8>) -> Result<Self, TerrainError> {
        if width == 0 || depth == 0 {
            return Err(TerrainError::InvalidDimensions { width, depth });
        }
        let expected = width * depth;
        if data.len() != expected {
            return Err(TerrainError::SampleCountMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, depth, data })
    }

    /// Grid width in samples.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid depth in samples.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Total number of samples (`width * depth`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Raw row-major sample buffer.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Elevation at (x, y). Panics if out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        debug_assert!(x < self.width && y < self.depth);
        self.data[y * self.width + x]
    }

    /// Elevation at (x, y) with clamp-to-edge semantics: coordinates
    /// outside the grid read the nearest border sample. Neighbor lookups
    /// in the texture bake and mesh normals go through this, so border
    /// pixels see a flat extension of the terrain instead of garbage.
    #[inline]
    pub fn sample_clamped(&self, x: isize, y: isize) -> u8 {
        let cx = x.clamp(0, self.width as isize - 1) as usize;
        let cy = y.clamp(0, self.depth as isize - 1) as usize;
        self.data[cy * self.width + cx]
    }

    /// Export the grid as an 8-bit grayscale image.
    pub fn to_luma_image(&self) -> image::GrayImage {
        image::GrayImage::from_raw(self.width as u32, self.depth as u32, self.data.clone())
            .expect("sample buffer matches grid dimensions")
    }
}

/// Generate a heightmap deterministically from `phase`.
///
/// Accumulates `|noise(x / q, y / q, phase)| * q * gain` per cell over
/// `config.octaves` passes, with `q` starting at 1 and multiplying by
/// `config.frequency_step` after each full pass. The accumulated sum is
/// saturated into the one-byte sample range (values never wrap).
pub fn generate_heightmap(
    width: usize,
    depth: usize,
    phase: f32,
    config: &HeightmapConfig,
) -> Result<HeightGrid, TerrainError> {
    if width == 0 || depth == 0 {
        return Err(TerrainError::InvalidDimensions { width, depth });
    }

    let mut noise = FastNoiseLite::with_seed(NOISE_SEED);
    noise.set_noise_type(Some(NoiseType::Perlin));
    // Unit lattice: grid coordinates map directly to noise space.
    noise.set_frequency(Some(1.0));

    let mut accum = vec![0.0_f32; width * depth];
    let mut quality = 1.0_f32;

    for _ in 0..config.octaves {
        for y in 0..depth {
            for x in 0..width {
                let sample = noise.get_noise_3d(x as f32 / quality, y as f32 / quality, phase);
                accum[y * width + x] += (sample * quality * config.gain).abs();
            }
        }
        quality *= config.frequency_step;
    }

    let data = accum.iter().map(|&h| h.min(255.0) as u8).collect();
    HeightGrid::from_raw(width, depth, data)
}

/// Generate a heightmap with a random phase, giving a unique terrain per
/// invocation. Convenience wrapper for the app boundary; everything else
/// should take an explicit phase.
pub fn generate_heightmap_random(
    width: usize,
    depth: usize,
    config: &HeightmapConfig,
) -> Result<HeightGrid, TerrainError> {
    let phase = rand::thread_rng().gen_range(0.0..2.0);
    generate_heightmap(width, depth, phase, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions() {
        let grid = generate_heightmap(64, 32, 0.5, &HeightmapConfig::default()).unwrap();
        assert_eq!(grid.width(), 64);
        assert_eq!(grid.depth(), 32);
        assert_eq!(grid.len(), 64 * 32);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let config = HeightmapConfig::default();
        assert!(generate_heightmap(0, 32, 0.5, &config).is_err());
        assert!(generate_heightmap(32, 0, 0.5, &config).is_err());
    }

    #[test]
    fn test_from_raw_length_mismatch() {
        let result = HeightGrid::from_raw(4, 4, vec![0; 15]);
        assert!(matches!(
            result,
            Err(TerrainError::SampleCountMismatch { expected: 16, actual: 15 })
        ));
    }

    #[test]
    fn test_sample_clamped_borders() {
        let grid = HeightGrid::from_raw(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(grid.sample_clamped(-5, 0), 1);
        assert_eq!(grid.sample_clamped(7, 0), 2);
        assert_eq!(grid.sample_clamped(0, -1), 1);
        assert_eq!(grid.sample_clamped(1, 9), 4);
    }

    #[test]
    fn test_fixed_phase_is_deterministic() {
        let config = HeightmapConfig::default();
        let a = generate_heightmap(32, 32, 1.25, &config).unwrap();
        let b = generate_heightmap(32, 32, 1.25, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_phases_differ() {
        let config = HeightmapConfig::default();
        let a = generate_heightmap(32, 32, 0.1, &config).unwrap();
        let b = generate_heightmap(32, 32, 1.9, &config).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_terrain_is_not_flat() {
        let grid = generate_heightmap(64, 64, 0.7, &HeightmapConfig::default()).unwrap();
        let first = grid.as_slice()[0];
        assert!(grid.as_slice().iter().any(|&h| h != first));
    }
}
