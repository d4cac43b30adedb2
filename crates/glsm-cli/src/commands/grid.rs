//! Grid command
//!
//! Writes the animated wave grid or a noise terrain as Wavefront OBJ.

use anyhow::{Result, bail};
use glsm_mesh::{MeshData, TerrainParams, grid_indices, grid_vertices, terrain_vertices};
use tracing::info;

use crate::GridArgs;
use crate::config::SceneConfig;

pub fn run(args: GridArgs, scene: &SceneConfig, verbose: u8) -> Result<()> {
    let mesh = build(&args, scene)?;
    super::write_file(&args.output, |w| mesh.write_obj(w))?;

    info!(
        path = %args.output.display(),
        vertices = mesh.vertex_count(),
        triangles = mesh.primitive_count(),
        "wrote grid mesh"
    );
    if verbose > 0 {
        println!(
            "Wrote {} grid ({} vertices, {} triangles) to {}",
            if args.terrain { "terrain" } else { "wave" },
            mesh.vertex_count(),
            mesh.primitive_count(),
            args.output.display()
        );
    }
    Ok(())
}

fn build(args: &GridArgs, scene: &SceneConfig) -> Result<MeshData> {
    if args.res == 0 {
        bail!("grid resolution must be at least 1");
    }
    let vertices = if args.terrain {
        let params = TerrainParams {
            scale: scene.noise.scale,
            height: args.height,
            fbm: scene.noise.fbm(),
        };
        terrain_vertices(args.res, &scene.noise.perlin(), &params)
    } else {
        grid_vertices(args.res, args.time)
    };
    Ok(MeshData::from_ptnc(&vertices, grid_indices(args.res)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(output: PathBuf, terrain: bool) -> GridArgs {
        GridArgs {
            output,
            res: 4,
            time: 0.5,
            terrain,
            height: 0.3,
        }
    }

    #[test]
    fn test_build_counts() {
        let scene = SceneConfig::default();
        for terrain in [false, true] {
            let mesh = build(&args(PathBuf::new(), terrain), &scene).unwrap();
            assert_eq!(mesh.vertex_count(), 25);
            assert_eq!(mesh.primitive_count(), 32);
        }
    }

    #[test]
    fn test_zero_res() {
        let mut a = args(PathBuf::new(), false);
        a.res = 0;
        assert!(build(&a, &SceneConfig::default()).is_err());
    }

    #[test]
    fn test_run_writes_obj() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("grid.obj");
        run(args(output.clone(), true), &SceneConfig::default(), 0).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 25);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 25);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 32);
    }
}
