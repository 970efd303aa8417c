//! Procedural surface textures, looked up by [`TextureRef`] name.

use three_d::{CpuTexture, TextureData};
use tracing::warn;

use crate::sim::catalog::TextureRef;

pub const TEXTURE_WIDTH: u32 = 256;
pub const TEXTURE_HEIGHT: u32 = 128;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pattern {
    Granules,
    Bands { contrast: u8 },
    Oceans,
    Speckle,
    Flat,
}

impl Pattern {
    fn of(texture: TextureRef) -> Self {
        match texture.name() {
            "sun" => Self::Granules,
            "jupiter" | "saturn" => Self::Bands { contrast: 48 },
            "uranus" | "neptune" => Self::Bands { contrast: 16 },
            "earth" => Self::Oceans,
            "mercury" | "venus" | "mars" => Self::Speckle,
            other => {
                warn!("no texture named {other:?}, using a flat tint");
                Self::Flat
            }
        }
    }
}

/// Integer hash of a lattice point, in `0..=255`.
fn hash(x: u32, y: u32, seed: u32) -> u8 {
    let mut h = x
        .wrapping_mul(0x27d4_eb2d)
        .wrapping_add(y.wrapping_mul(0x1656_67b1))
        .wrapping_add(seed.wrapping_mul(0x9e37_79b9));
    h ^= h >> 15;
    h = h.wrapping_mul(0x85eb_ca6b);
    h ^= h >> 13;
    (h >> 24) as u8
}

/// Smooth noise in `0.0..=1.0`, sampled on a lattice of `cell` pixels.
fn value_noise(x: u32, y: u32, cell: u32, seed: u32) -> f32 {
    let (cx, cy) = (x / cell, y / cell);
    let fx = (x % cell) as f32 / cell as f32;
    let fy = (y % cell) as f32 / cell as f32;
    let lerp = |a: f32, b: f32, t: f32| a + (b - a) * (t * t * (3.0 - 2.0 * t));

    let top = lerp(
        hash(cx, cy, seed) as f32,
        hash(cx + 1, cy, seed) as f32,
        fx,
    );
    let bottom = lerp(
        hash(cx, cy + 1, seed) as f32,
        hash(cx + 1, cy + 1, seed) as f32,
        fx,
    );
    lerp(top, bottom, fy) / 255.0
}

fn shade([r, g, b]: [u8; 3], factor: f32) -> [u8; 4] {
    let apply = |c: u8| (c as f32 * factor).clamp(0.0, 255.0) as u8;
    [apply(r), apply(g), apply(b), 255]
}

fn seed_of(texture: TextureRef) -> u32 {
    texture
        .name()
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ b as u32).wrapping_mul(0x0100_0193))
}

/// Generates the RGBA pixels of a texture tinted by `color`, row by row.
pub fn pixels(texture: TextureRef, color: [u8; 3], width: u32, height: u32) -> Vec<[u8; 4]> {
    let pattern = Pattern::of(texture);
    let seed = seed_of(texture);

    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let factor = match pattern {
                Pattern::Granules => 0.75 + 0.5 * value_noise(x, y, 6, seed),
                Pattern::Bands { contrast } => {
                    let band = value_noise(0, y, 9, seed);
                    let swirl = value_noise(x, y, 24, seed.wrapping_add(1));
                    1.0 + (band - 0.5 + (swirl - 0.5) * 0.3) * contrast as f32 / 64.0
                }
                Pattern::Oceans => {
                    if value_noise(x, y, 20, seed) > 0.55 {
                        0.6
                    } else {
                        1.0
                    }
                }
                Pattern::Speckle => 0.8 + 0.35 * value_noise(x, y, 4, seed),
                Pattern::Flat => 1.0,
            };
            data.push(shade(color, factor));
        }
    }
    data
}

pub fn cpu_texture(texture: TextureRef, color: [u8; 3]) -> CpuTexture {
    CpuTexture {
        name: texture.name().to_owned(),
        data: TextureData::RgbaU8(pixels(texture, color, TEXTURE_WIDTH, TEXTURE_HEIGHT)),
        width: TEXTURE_WIDTH,
        height: TEXTURE_HEIGHT,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::catalog::{bodies, star};

    #[test]
    fn test_every_body_has_a_pattern() {
        for body in bodies().iter().chain(std::iter::once(star())) {
            assert_ne!(Pattern::of(body.texture), Pattern::Flat, "{}", body.name);
        }
        assert_eq!(Pattern::of(TextureRef("pluto")), Pattern::Flat);
    }

    #[test]
    fn test_size_and_opacity() {
        let data = pixels(TextureRef("earth"), [0x6B, 0x93, 0xD6], 32, 16);
        assert_eq!(data.len(), 32 * 16);
        assert!(data.iter().all(|p| p[3] == 255));
    }

    #[test]
    fn test_deterministic() {
        let a = pixels(TextureRef("jupiter"), [200, 180, 150], 64, 32);
        let b = pixels(TextureRef("jupiter"), [200, 180, 150], 64, 32);
        assert_eq!(a, b);
    }

    #[test]
    fn test_flat_is_tint() {
        let data = pixels(TextureRef("unknown"), [10, 20, 30], 4, 4);
        assert!(data.iter().all(|&p| p == [10, 20, 30, 255]));
    }
}
