//! Integration tests for the glsm crates.
//!
//! End-to-end checks that span crates: camera rays against generated
//! meshes, mesh export to disk, and the math kernel against `glam`.

#[cfg(test)]
mod glam_parity;
