//! Classic gradient noise over a 256-periodic lattice.
//!
//! Every [`Perlin`] owns a 768-entry permutation table: a seeded shuffle of
//! `0..256` followed by two copies of itself, so chained lookups like
//! `p[p[x] + y + 1]` never wrap explicitly. The free functions sample one
//! shared table built lazily from [`DEFAULT_SEED`].

use std::fmt;
use std::sync::OnceLock;

/// Lattice period along every axis.
pub const PERIOD: usize = 256;

/// Length of a permutation table.
pub const TABLE_LEN: usize = PERIOD * 3;

/// Seed of the shared table behind [`noise1d`], [`noise2d`] and [`noise3d`].
pub const DEFAULT_SEED: u32 = 1;

static SHARED: OnceLock<Perlin> = OnceLock::new();

/// Linear congruential generator yielding 15-bit draws.
///
/// Uses the multiplier/increment pair `214013 / 2531011` and returns bits
/// 16..30 of the updated state, so a given seed reproduces the same table on
/// every platform.
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator from a seed.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns a value in `0..32768`.
    #[inline]
    pub fn next_u15(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(214013).wrapping_add(2531011);
        (self.state >> 16) & 0x7fff
    }
}

/// Gradient noise generator with its own permutation table.
#[derive(Clone, PartialEq, Eq)]
pub struct Perlin {
    seed: u32,
    perm: [u8; TABLE_LEN],
}

impl fmt::Debug for Perlin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Perlin")
            .field("seed", &self.seed)
            .field("head", &&self.perm[..8])
            .finish_non_exhaustive()
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Perlin {
    /// Builds a table by Fisher-Yates shuffling `0..256` with [`Lcg`] draws.
    pub fn new(seed: u32) -> Self {
        let mut rng = Lcg::new(seed);
        let mut base = [0u8; PERIOD];
        for (i, v) in base.iter_mut().enumerate() {
            *v = i as u8;
        }
        for i in (1..PERIOD).rev() {
            let j = ((rng.next_u15() * (i as u32 + 1)) >> 15) as usize;
            base.swap(i, j);
        }

        let mut perm = [0u8; TABLE_LEN];
        for chunk in perm.chunks_exact_mut(PERIOD) {
            chunk.copy_from_slice(&base);
        }
        Self { seed, perm }
    }

    /// Shared generator seeded with [`DEFAULT_SEED`].
    pub fn global() -> &'static Perlin {
        SHARED.get_or_init(|| {
            let p = Perlin::new(DEFAULT_SEED);
            tracing::debug!(seed = DEFAULT_SEED, len = TABLE_LEN, "built shared noise table");
            p
        })
    }

    /// Seed the table was built from.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// The full permutation table.
    #[inline]
    pub fn permutation(&self) -> &[u8; TABLE_LEN] {
        &self.perm
    }

    #[inline(always)]
    fn p(&self, i: usize) -> usize {
        self.perm[i] as usize
    }

    /// 1D noise.
    pub fn noise1d(&self, x: f32) -> f32 {
        let (l0, fx, t0) = lattice(x);

        let f0 = grad(self.p(self.p(self.p(l0))), fx, 0.0, 0.0);
        let f1 = grad(self.p(self.p(self.p(l0 + 1))), fx - 1.0, 0.0, 0.0);
        lerp(f0, f1, t0)
    }

    /// 2D noise.
    pub fn noise2d(&self, x: f32, y: f32) -> f32 {
        let (l0, fx, t0) = lattice(x);
        let (l1, fy, t1) = lattice(y);

        let [a0, a1, a2, a3] = self.corners(l0, l1);

        let f0 = grad(self.p(a0), fx, fy, 0.0);
        let f1 = grad(self.p(a1), fx - 1.0, fy, 0.0);
        let f2 = grad(self.p(a2), fx, fy - 1.0, 0.0);
        let f3 = grad(self.p(a3), fx - 1.0, fy - 1.0, 0.0);

        lerp(lerp(f0, f1, t0), lerp(f2, f3, t0), t1)
    }

    /// 3D noise.
    pub fn noise3d(&self, x: f32, y: f32, z: f32) -> f32 {
        let (l0, fx, t0) = lattice(x);
        let (l1, fy, t1) = lattice(y);
        let (l2, fz, t2) = lattice(z);

        let [a0, a1, a2, a3] = self.corners(l0, l1);

        // Near face
        let f0 = grad(self.p(a0 + l2), fx, fy, fz);
        let f1 = grad(self.p(a1 + l2), fx - 1.0, fy, fz);
        let f2 = grad(self.p(a2 + l2), fx, fy - 1.0, fz);
        let f3 = grad(self.p(a3 + l2), fx - 1.0, fy - 1.0, fz);

        // Far face
        let gz = fz - 1.0;
        let f4 = grad(self.p(a0 + l2 + 1), fx, fy, gz);
        let f5 = grad(self.p(a1 + l2 + 1), fx - 1.0, fy, gz);
        let f6 = grad(self.p(a2 + l2 + 1), fx, fy - 1.0, gz);
        let f7 = grad(self.p(a3 + l2 + 1), fx - 1.0, fy - 1.0, gz);

        let near = lerp(lerp(f0, f1, t0), lerp(f2, f3, t0), t1);
        let far = lerp(lerp(f4, f5, t0), lerp(f6, f7, t0), t1);
        lerp(near, far, t2)
    }

    /// Hashes of the four xy cell corners, ordered `(0,0) (1,0) (0,1) (1,1)`.
    #[inline(always)]
    fn corners(&self, l0: usize, l1: usize) -> [usize; 4] {
        let i = self.p(l0);
        let j = self.p(l0 + 1);
        [self.p(i + l1), self.p(j + l1), self.p(i + l1 + 1), self.p(j + l1 + 1)]
    }
}

/// 1D noise from the shared table.
#[inline]
pub fn noise1d(x: f32) -> f32 {
    Perlin::global().noise1d(x)
}

/// 2D noise from the shared table.
#[inline]
pub fn noise2d(x: f32, y: f32) -> f32 {
    Perlin::global().noise2d(x, y)
}

/// 3D noise from the shared table.
#[inline]
pub fn noise3d(x: f32, y: f32, z: f32) -> f32 {
    Perlin::global().noise3d(x, y, z)
}

/// Splits a coordinate into wrapped cell index, offset in the cell and faded offset.
#[inline(always)]
fn lattice(x: f32) -> (usize, f32, f32) {
    let cell = x.floor();
    let f = x - cell;
    (wrap_cell(cell), f, fade(f))
}

/// Floor-based modulo 256 of an integral float.
///
/// Negative cells wrap continuously: `-1 -> 255`, `-256 -> 0`.
#[inline(always)]
fn wrap_cell(cell: f32) -> usize {
    if cell < 0.0 {
        255 - ((-cell - 1.0) as u32 & 255) as usize
    } else {
        (cell as u32 & 255) as usize
    }
}

/// `3t^2 - 2t^3`
#[inline(always)]
fn fade(t: f32) -> f32 {
    (3.0 - 2.0 * t) * t * t
}

#[inline(always)]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (b - a) * t + a
}

/// Dot product with one of 16 gradients (12 cube edges, 4 repeated).
#[inline(always)]
fn grad(hash: usize, x: f32, y: f32, z: f32) -> f32 {
    match hash & 15 {
        0 | 12 => x + y,
        1 | 13 => -x + y,
        2 => x - y,
        3 => -x - y,
        4 => x + z,
        5 => -x + z,
        6 => x - z,
        7 => -x - z,
        8 => y + z,
        9 => -y + z,
        10 | 14 => y - z,
        _ => -y - z,
    }
}
