//! Fractal Brownian motion: octave sums of gradient noise.

use crate::perlin::Perlin;

/// Octave parameters for fractal sums.
///
/// Octave `k` samples at frequency `lacunarity^k` with amplitude `gain^k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fbm {
    /// Number of octaves; zero yields a flat field
    pub octaves: u32,
    /// Frequency multiplier between octaves
    pub lacunarity: f32,
    /// Amplitude multiplier between octaves
    pub gain: f32,
}

impl Default for Fbm {
    fn default() -> Self {
        Self {
            octaves: 4,
            lacunarity: 2.0,
            gain: 0.5,
        }
    }
}

impl Fbm {
    /// Creates parameters with the default lacunarity and gain.
    pub fn new(octaves: u32) -> Self {
        Self {
            octaves,
            ..Self::default()
        }
    }

    /// Sum of octave amplitudes, a loose bound on the output magnitude.
    pub fn amplitude_sum(&self) -> f32 {
        self.accumulate(|_| 1.0)
    }

    /// 2D fractal sum over `noise`.
    pub fn sample2(&self, noise: &Perlin, x: f32, y: f32) -> f32 {
        self.accumulate(|freq| noise.noise2d(x * freq, y * freq))
    }

    /// 3D fractal sum over `noise`.
    pub fn sample3(&self, noise: &Perlin, x: f32, y: f32, z: f32) -> f32 {
        self.accumulate(|freq| noise.noise3d(x * freq, y * freq, z * freq))
    }

    fn accumulate(&self, mut octave: impl FnMut(f32) -> f32) -> f32 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        let mut freq = 1.0;
        for _ in 0..self.octaves {
            sum += amp * octave(freq);
            amp *= self.gain;
            freq *= self.lacunarity;
        }
        sum
    }
}

impl Perlin {
    /// 2D fractal sum with this table.
    #[inline]
    pub fn fbm2(&self, x: f32, y: f32, params: &Fbm) -> f32 {
        params.sample2(self, x, y)
    }

    /// 3D fractal sum with this table.
    #[inline]
    pub fn fbm3(&self, x: f32, y: f32, z: f32, params: &Fbm) -> f32 {
        params.sample3(self, x, y, z)
    }
}

/// 2D fractal sum from the shared table.
pub fn fbm2(x: f32, y: f32, params: &Fbm) -> f32 {
    Perlin::global().fbm2(x, y, params)
}

/// 3D fractal sum from the shared table.
pub fn fbm3(x: f32, y: f32, z: f32, params: &Fbm) -> f32 {
    Perlin::global().fbm3(x, y, z, params)
}
