//! Procedural RGBA8 textures.

use rayon::prelude::*;

/// Checkerboard palette: four tile colors and the gap color.
pub const CHECKER_PALETTE: [[u8; 4]; 5] = [
    [0x70, 0x80, 0xa0, 0xff],
    [0x70, 0x90, 0x70, 0xff],
    [0x90, 0x90, 0x60, 0xff],
    [0xa0, 0x80, 0x70, 0xff],
    [0xd0, 0xd0, 0xd0, 0xff],
];

/// Palette index of the tile at cell `(kx, ky)`.
#[inline]
fn checker_cell(kx: u32, ky: u32) -> usize {
    if (kx + (ky & 1)) & 1 != 0 {
        (kx.wrapping_mul(7).wrapping_add(ky.wrapping_mul(kx)) % 4) as usize
    } else {
        4
    }
}

/// Checkerboard with `radx x rady` pixel cells.
///
/// Alternate cells are the light gap color; the others cycle through four
/// muted tile colors. Returns `width * height * 4` bytes, rows top to
/// bottom. Zero cell sizes are treated as one pixel.
pub fn checker_rgba8(width: u32, height: u32, radx: u32, rady: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut data = vec![0u8; w * h * 4];
    if data.is_empty() {
        return data;
    }
    let (radx, rady) = (radx.max(1), rady.max(1));

    data.par_chunks_mut(w * 4).enumerate().for_each(|(y, row)| {
        let ky = y as u32 / rady;
        for (x, px) in row.chunks_exact_mut(4).enumerate() {
            px.copy_from_slice(&CHECKER_PALETTE[checker_cell(x as u32 / radx, ky)]);
        }
    });
    tracing::trace!(width, height, radx, rady, "generated checker texture");
    data
}
