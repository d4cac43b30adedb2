//! Ray command
//!
//! Unprojects a window pixel through the scene camera and reports the ray
//! and where it meets the `z = 0` ground plane.

use anyhow::Result;
use glsm_math::camera::calculate_ray;
use glsm_math::{Ray, Vec2, Vec3};
use serde::Serialize;

use crate::RayArgs;
use crate::config::SceneConfig;

#[derive(Debug, Serialize)]
pub struct RayReport {
    pub pixel: [f64; 2],
    pub origin: [f64; 3],
    pub direction: [f64; 3],
    /// Hit on the `z = 0` plane in front of the camera
    pub ground: Option<[f64; 3]>,
}

/// Intersection with the `z = 0` plane, if it lies ahead of the origin.
pub fn ground_hit(ray: &Ray<f64>) -> Option<Vec3> {
    let dz = ray.direction.z();
    if dz == 0.0 {
        return None;
    }
    let t = -ray.origin.z() / dz;
    (t >= 0.0).then(|| ray.at(t))
}

pub fn unproject(scene: &SceneConfig, steps: &[String], x: f64, y: f64) -> Result<RayReport> {
    let (_, frame) = super::replay(scene, steps)?;
    let ray = calculate_ray(
        Vec2::new(x, y),
        &frame.view,
        &scene.projection(),
        scene.viewport(),
    );
    Ok(RayReport {
        pixel: [x, y],
        origin: ray.origin.to_array(),
        direction: ray.direction.to_array(),
        ground: ground_hit(&ray).map(|p| p.to_array()),
    })
}

pub fn run(args: RayArgs, scene: &SceneConfig, verbose: u8) -> Result<()> {
    let report = unproject(scene, &args.steps, args.x, args.y)?;

    if args.json {
        return super::print_json(&report);
    }

    let [ox, oy, oz] = report.origin;
    let [dx, dy, dz] = report.direction;
    println!("Pixel ({}, {})", args.x, args.y);
    println!("  Origin:    ({:.5}, {:.5}, {:.5})", ox, oy, oz);
    println!("  Direction: ({:.5}, {:.5}, {:.5})", dx, dy, dz);
    match report.ground {
        Some([gx, gy, gz]) => println!("  Ground:    ({:.5}, {:.5}, {:.5})", gx, gy, gz),
        None => println!("  Ground:    miss"),
    }
    if verbose > 0 {
        let len = Vec3::from_array(report.direction).length();
        println!("  |dir|:     {:.6}", len);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_pixel() {
        // Default camera sits on +z looking down -z at the origin
        let scene = SceneConfig::default();
        let r = unproject(&scene, &[], 640.0, 360.0).unwrap();
        assert_relative_eq!(r.origin[2], 3.6, epsilon = 1e-12);
        assert!(r.direction[2] < 0.0);
        assert_relative_eq!(r.direction[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.direction[1], 0.0, epsilon = 1e-9);

        let g = r.ground.unwrap();
        assert_relative_eq!(g[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(g[1], 0.0, epsilon = 1e-9);
        assert_relative_eq!(g[2], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_top_pixel_points_up() {
        let scene = SceneConfig::default();
        let r = unproject(&scene, &[], 640.0, 0.0).unwrap();
        assert!(r.direction[1] > 0.0);
    }

    #[test]
    fn test_ground_miss() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 1.0),
            direction: Vec3::new(0.0, 0.0, 1.0),
        };
        assert_eq!(ground_hit(&ray), None);
        let flat = Ray {
            origin: Vec3::new(0.0, 0.0, 1.0),
            direction: Vec3::X,
        };
        assert_eq!(ground_hit(&flat), None);
    }
}
