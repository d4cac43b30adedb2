//! Noise command
//!
//! Samples fractal noise over the image and writes an 8-bit binary PGM.
//! Values are mapped from `[-amp, amp]` to `[0, 255]`, where `amp` is the
//! sum of octave amplitudes.

use std::io::Write;

use anyhow::{Result, bail};
use glsm_noise::{Fbm, Perlin};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::NoiseArgs;
use crate::config::SceneConfig;

pub fn run(args: NoiseArgs, scene: &SceneConfig, verbose: u8) -> Result<()> {
    if args.width == 0 || args.height == 0 {
        bail!("image size must be positive, got {}x{}", args.width, args.height);
    }

    let mut cfg = scene.noise.clone();
    if let Some(s) = args.scale {
        cfg.scale = s;
    }
    if let Some(o) = args.octaves {
        cfg.octaves = o;
    }
    if let Some(s) = args.seed {
        cfg.seed = s;
    }
    debug!(?cfg, z = ?args.z, "noise settings");

    let perlin = cfg.perlin();
    let pixels = render(&perlin, &cfg.fbm(), args.width, args.height, cfg.scale, args.z);

    super::write_file(&args.output, |w| {
        w.write_all(&pgm_header(args.width, args.height))?;
        w.write_all(&pixels)
    })?;

    info!(path = %args.output.display(), "wrote noise image");
    if verbose > 0 {
        println!(
            "Wrote {}x{} noise ({} octaves, seed {}) to {}",
            args.width,
            args.height,
            cfg.octaves,
            cfg.seed,
            args.output.display()
        );
    }
    Ok(())
}

/// Renders the field, one byte per pixel, rows top to bottom.
///
/// `scale` noise cells span the longer image side. With `z` set the image
/// is a slice of the 3D field at that depth.
pub fn render(
    perlin: &Perlin,
    fbm: &Fbm,
    width: u32,
    height: u32,
    scale: f32,
    z: Option<f32>,
) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; w * h];
    if out.is_empty() {
        return out;
    }
    let step = scale / width.max(height) as f32;
    let amp = fbm.amplitude_sum().max(f32::EPSILON);

    out.par_chunks_mut(w).enumerate().for_each(|(y, row)| {
        let v = y as f32 * step;
        for (x, px) in row.iter_mut().enumerate() {
            let u = x as f32 * step;
            let n = match z {
                Some(z) => fbm.sample3(perlin, u, v, z),
                None => fbm.sample2(perlin, u, v),
            };
            *px = to_byte(n / amp);
        }
    });
    out
}

/// Maps `[-1, 1]` to `[0, 255]`, clamping outside values.
fn to_byte(v: f32) -> u8 {
    ((v * 0.5 + 0.5).clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Binary greyscale PGM header.
fn pgm_header(width: u32, height: u32) -> Vec<u8> {
    format!("P5\n{} {}\n255\n", width, height).into_bytes()
}
