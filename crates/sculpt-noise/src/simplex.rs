//! 3D simplex noise over fixed gradient and permutation tables.

/// Factor applied to the raw corner sum to bring the result into `[-1, 1]`.
pub const NOISE_SCALE: f32 = 32.0;

/// Skew factor for 3D: `(sqrt(4) - 1) / 3`.
const F3: f64 = 1.0 / 3.0;
/// Unskew factor for 3D: `(1 - 1 / sqrt(4)) / 3`.
const G3: f32 = 1.0 / 6.0;

/// Squared radius beyond which a corner stops contributing.
const CORNER_RADIUS_SQ: f32 = 0.6;

/// Per-axis seed multipliers. Distinct values keep a seed change from
/// degenerating into a shift along the main diagonal.
const SEED_MULTIPLIERS: [f64; 3] = [12.9898, 78.233, 37.719];

/// Seed offsets wrap at this distance so coordinates stay in a range where
/// `f32` still resolves fine detail.
const SEED_OFFSET_PERIOD: f64 = 1024.0;

/// Edge midpoints of a cube, the classic simplex gradient set.
const GRADIENTS: [[f32; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

/// Ken Perlin's reference permutation of `0..=255`.
const PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209, 76,
    132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173,
    186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212, 207, 206,
    59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44, 154, 163,
    70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232,
    178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162,
    241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157, 184, 84, 204,
    176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29, 24, 72, 243, 141,
    128, 195, 78, 66, 215, 61, 156, 180,
];

/// The permutation repeated twice so `PERM[i + PERM[j]]` never needs wrapping.
const PERM: [u8; 512] = duplicate_permutation();

const fn duplicate_permutation() -> [u8; 512] {
    let mut table = [0u8; 512];
    let mut i = 0;
    while i < 512 {
        table[i] = PERMUTATION[i & 255];
        i += 1;
    }
    table
}

/// Lattice cell of a skewed coordinate: the cell index reduced into the
/// permutation table, and the fractional position inside the cell.
///
/// Stays in floating point so coordinates of any magnitude are accepted.
#[inline]
fn skewed_cell(v: f64) -> (usize, f32) {
    let cell = v.floor();
    let fraction = ((v - cell) as f32).clamp(0.0, 1.0);
    (cell.rem_euclid(256.0) as usize, fraction)
}

#[inline]
fn perm(index: usize) -> usize {
    PERM[index] as usize
}

/// Contribution of one simplex corner at offset `(x, y, z)` from the sample.
#[inline]
fn corner(gradient_index: usize, x: f32, y: f32, z: f32) -> f32 {
    let t = CORNER_RADIUS_SQ - x * x - y * y - z * z;
    if t < 0.0 {
        return 0.0;
    }
    let g = &GRADIENTS[gradient_index];
    let t2 = t * t;
    t2 * t2 * (g[0] * x + g[1] * y + g[2] * z)
}

/// Unseeded 3D simplex noise.
///
/// Returns a value in `[-1, 1]`. The field is C¹-continuous: every corner's
/// falloff reaches zero with zero slope before the neighbouring cell begins.
/// Non-finite coordinates yield `0`.
pub fn noise3d(x: f32, y: f32, z: f32) -> f32 {
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return 0.0;
    }

    // Skew input space to find the containing simplex cell.
    let (x, y, z) = (f64::from(x), f64::from(y), f64::from(z));
    let s = (x + y + z) * F3;
    let (ii, fx) = skewed_cell(x + s);
    let (jj, fy) = skewed_cell(y + s);
    let (kk, fz) = skewed_cell(z + s);

    // Unskew the in-cell position back to the first corner's offset.
    let t = (fx + fy + fz) * G3;
    let x0 = fx - t;
    let y0 = fy - t;
    let z0 = fz - t;

    // Offsets of the second and third corners, picked by coordinate order.
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1, 0, 0, 1, 1, 0)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f32 + G3;
    let y1 = y0 - j1 as f32 + G3;
    let z1 = z0 - k1 as f32 + G3;
    let x2 = x0 - i2 as f32 + 2.0 * G3;
    let y2 = y0 - j2 as f32 + 2.0 * G3;
    let z2 = z0 - k2 as f32 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let gi0 = perm(ii + perm(jj + perm(kk))) % 12;
    let gi1 = perm(ii + i1 + perm(jj + j1 + perm(kk + k1))) % 12;
    let gi2 = perm(ii + i2 + perm(jj + j2 + perm(kk + k2))) % 12;
    let gi3 = perm(ii + 1 + perm(jj + 1 + perm(kk + 1))) % 12;

    let sum = corner(gi0, x0, y0, z0)
        + corner(gi1, x1, y1, z1)
        + corner(gi2, x2, y2, z2)
        + corner(gi3, x3, y3, z3);

    NOISE_SCALE * sum
}

/// Per-axis coordinate offset derived from `seed`.
///
/// Seed `0` maps to the zero offset, so `noise3d_seeded(.., 0)` equals
/// [`noise3d`].
pub fn seed_offset(seed: u32) -> [f32; 3] {
    let s = f64::from(seed);
    SEED_MULTIPLIERS.map(|m| (s * m).rem_euclid(SEED_OFFSET_PERIOD) as f32)
}

/// Seeded 3D simplex noise in `[-1, 1]`.
pub fn noise3d_seeded(x: f32, y: f32, z: f32, seed: u32) -> f32 {
    let [ox, oy, oz] = seed_offset(seed);
    noise3d(x + ox, y + oy, z + oz)
}
