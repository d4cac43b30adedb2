//! CLI command implementations

pub mod camera;
pub mod check;
pub mod grid;
pub mod noise;
pub mod ray;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result, bail};
use glsm_math::camera::{CameraFrame, CameraInput, OrbitCamera, PointerButtons};
use glsm_math::{Mat4, Vec2};
use serde::Serialize;

use crate::config::SceneConfig;

/// Parses one camera step: `mode:dx,dy`.
///
/// Modes map to the button/modifier combination the orbit camera reacts
/// to: `turn` (left), `dolly` (right), `pan` (left+ctrl), `light`
/// (left+shift), `idle` (no buttons).
pub fn parse_step(step: &str) -> Result<CameraInput> {
    let Some((mode, delta)) = step.split_once(':') else {
        bail!("camera step '{}' is not of the form mode:dx,dy", step);
    };
    let Some((dx, dy)) = delta.split_once(',') else {
        bail!("camera step '{}' needs two deltas", step);
    };
    let dx: f64 = dx.trim().parse().with_context(|| format!("bad dx in '{}'", step))?;
    let dy: f64 = dy.trim().parse().with_context(|| format!("bad dy in '{}'", step))?;

    let left = PointerButtons {
        left: true,
        ..Default::default()
    };
    let mut input = CameraInput {
        pointer_delta: Vec2::new(dx, dy),
        ..Default::default()
    };
    match mode.trim().to_lowercase().as_str() {
        "turn" | "t" => input.buttons = left,
        "dolly" | "d" => input.buttons.right = true,
        "pan" | "p" => {
            input.buttons = left;
            input.ctrl = true;
        }
        "light" | "l" => {
            input.buttons = left;
            input.shift = true;
        }
        "idle" | "i" => {}
        other => bail!("unknown camera step mode '{}'", other),
    }
    Ok(input)
}

/// Runs `steps` through the configured orbit camera.
pub fn replay(scene: &SceneConfig, steps: &[String]) -> Result<(OrbitCamera, CameraFrame)> {
    let mut cam = scene.camera.orbit();
    let mut frame = cam.frame();
    for (i, step) in steps.iter().enumerate() {
        let input = parse_step(step)?;
        frame = cam.update(&input);
        tracing::trace!(step = i, ?input, "camera step");
    }
    tracing::debug!(steps = steps.len(), dist = cam.cam_dist, "replayed camera input");
    Ok((cam, frame))
}

/// Creates `path` and hands a buffered writer to `write`.
pub fn write_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file =
        File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut out = BufWriter::new(file);
    write(&mut out)
        .and_then(|_| out.flush())
        .with_context(|| format!("Failed to write: {}", path.display()))
}

/// Prints a value as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Matrix rows as they read on paper.
pub fn mat4_rows(m: &Mat4) -> [[f64; 4]; 4] {
    std::array::from_fn(|r| m.row(r).to_array())
}

/// Prints a 4x4 matrix row by row under a label.
pub fn print_mat4(label: &str, m: &Mat4) {
    println!("{}:", label);
    for row in mat4_rows(m) {
        println!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", row[0], row[1], row[2], row[3]);
    }
}
