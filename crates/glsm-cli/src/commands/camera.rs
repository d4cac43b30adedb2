//! Camera command
//!
//! Replays pointer steps through the orbit camera and reports the final
//! state, view matrix and light direction.

use anyhow::Result;
use glsm_math::camera::{CameraFrame, OrbitCamera};
use serde::Serialize;

use crate::CameraArgs;
use crate::config::SceneConfig;

/// Final camera state, matrices in visual row order.
#[derive(Debug, Serialize)]
pub struct CameraReport {
    pub cam_ang: [f64; 2],
    pub light_ang: [f64; 2],
    pub cam_pos: [f64; 3],
    pub cam_dist: f64,
    pub eye: [f64; 3],
    pub light_dir: [f64; 3],
    pub view: [[f64; 4]; 4],
    pub projection: [[f64; 4]; 4],
}

impl CameraReport {
    pub fn new(cam: &OrbitCamera, frame: &CameraFrame, scene: &SceneConfig) -> Self {
        Self {
            cam_ang: cam.cam_ang.to_array(),
            light_ang: cam.light_ang.to_array(),
            cam_pos: cam.cam_pos.to_array(),
            cam_dist: cam.cam_dist,
            eye: frame.view.camera_position().to_array(),
            light_dir: frame.light_dir.to_array(),
            view: super::mat4_rows(&frame.view),
            projection: super::mat4_rows(&scene.projection()),
        }
    }
}

pub fn run(args: CameraArgs, scene: &SceneConfig, verbose: u8) -> Result<()> {
    let (cam, frame) = super::replay(scene, &args.steps)?;
    let report = CameraReport::new(&cam, &frame, scene);

    if args.json {
        return super::print_json(&report);
    }

    println!("Camera after {} step(s):", args.steps.len());
    println!("  Angles:    yaw {:.5} pitch {:.5}", report.cam_ang[0], report.cam_ang[1]);
    println!("  Distance:  {:.5}", report.cam_dist);
    println!(
        "  Pivot:     ({:.5}, {:.5}, {:.5})",
        report.cam_pos[0], report.cam_pos[1], report.cam_pos[2]
    );
    println!(
        "  Eye:       ({:.5}, {:.5}, {:.5})",
        report.eye[0], report.eye[1], report.eye[2]
    );
    println!(
        "  Light dir: ({:.5}, {:.5}, {:.5})",
        report.light_dir[0], report.light_dir[1], report.light_dir[2]
    );
    super::print_mat4("View", &frame.view);
    if verbose > 0 {
        super::print_mat4("Projection", &scene.projection());
        super::print_mat4("Normal matrix (padded)", &frame.view.normal_matrix().into());
    }
    Ok(())
}
