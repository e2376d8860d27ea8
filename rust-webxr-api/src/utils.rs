use std::sync::atomic::AtomicU32;
use std::sync::atomic::Ordering::SeqCst;

/// A 4x4 homogeneous matrix in column-major order.
///
/// Matrices act on column vectors (`M × p`), so translation lives in
/// elements 12, 13 and 14.
pub type Matrix = [f32; 16];

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

// Generates a unique identifier for sessions and input sources
pub fn new_id() -> u32 {
    ID_COUNTER.fetch_add(1, SeqCst)
}

/// Multiplies two 4x4 matrices, returning `a × b`.
///
/// Applied to a vector, the result transforms by `b` first and then by `a`.
pub fn multiply_matrix(a: &Matrix, b: &Matrix) -> Matrix {
    let mut out = [0f32; 16];
    for col in 0..4 {
        for row in 0..4 {
            out[col * 4 + row] = a[row] * b[col * 4]
                + a[4 + row] * b[col * 4 + 1]
                + a[8 + row] * b[col * 4 + 2]
                + a[12 + row] * b[col * 4 + 3];
        }
    }
    out
}

/// Inverts a 4x4 matrix through its adjugate.
///
/// Returns `None` when the matrix is singular.
pub fn inverse_matrix(m: &Matrix) -> Option<Matrix> {
    let det = determinant4x4(m);
    if det == 0.0 || !det.is_finite() {
        return None;
    }

    let mut out = adjoint_matrix(m);
    for value in out.iter_mut() {
        *value /= det;
    }
    Some(out)
}

fn adjoint_matrix(m: &Matrix) -> Matrix {
    let mut out = [0f32; 16];

    out[0]  =   determinant3x3(m[5], m[9], m[13], m[6], m[10], m[14], m[7], m[11], m[15]);
    out[4]  = - determinant3x3(m[4], m[8], m[12], m[6], m[10], m[14], m[7], m[11], m[15]);
    out[8]  =   determinant3x3(m[4], m[8], m[12], m[5], m[9], m[13], m[7], m[11], m[15]);
    out[12] = - determinant3x3(m[4], m[8], m[12], m[5], m[9], m[13], m[6], m[10], m[14]);

    out[1]  = - determinant3x3(m[1], m[9], m[13], m[2], m[10], m[14], m[3], m[11], m[15]);
    out[5]  =   determinant3x3(m[0], m[8], m[12], m[2], m[10], m[14], m[3], m[11], m[15]);
    out[9]  = - determinant3x3(m[0], m[8], m[12], m[1], m[9], m[13], m[3], m[11], m[15]);
    out[13] =   determinant3x3(m[0], m[8], m[12], m[1], m[9], m[13], m[2], m[10], m[14]);

    out[2]  =   determinant3x3(m[1], m[5], m[13], m[2], m[6], m[14], m[3], m[7], m[15]);
    out[6]  = - determinant3x3(m[0], m[4], m[12], m[2], m[6], m[14], m[3], m[7], m[15]);
    out[10] =   determinant3x3(m[0], m[4], m[12], m[1], m[5], m[13], m[3], m[7], m[15]);
    out[14] = - determinant3x3(m[0], m[4], m[12], m[1], m[5], m[13], m[2], m[6], m[14]);

    out[3]  = - determinant3x3(m[1], m[5], m[9], m[2], m[6], m[10], m[3], m[7], m[11]);
    out[7]  =   determinant3x3(m[0], m[4], m[8], m[2], m[6], m[10], m[3], m[7], m[11]);
    out[11] = - determinant3x3(m[0], m[4], m[8], m[1], m[5], m[9], m[3], m[7], m[11]);
    out[15] =   determinant3x3(m[0], m[4], m[8], m[1], m[5], m[9], m[2], m[6], m[10]);

    out
}

pub fn determinant4x4(m: &Matrix) -> f32 {
    m[0] * determinant3x3(m[5], m[9], m[13], m[6], m[10], m[14], m[7], m[11], m[15])
    - m[1] * determinant3x3(m[4], m[8], m[12], m[6], m[10], m[14], m[7], m[11], m[15])
    + m[2] * determinant3x3(m[4], m[8], m[12], m[5], m[9], m[13], m[7], m[11], m[15])
    - m[3] * determinant3x3(m[4], m[8], m[12], m[5], m[9], m[13], m[6], m[10], m[14])
}

fn determinant3x3(a1: f32, a2: f32, a3: f32, b1: f32, b2: f32, b3: f32, c1: f32, c2: f32, c3: f32) -> f32 {
    a1 * determinant2x2(b2, b3, c2, c3)
    - b1 * determinant2x2(a2, a3, c2, c3)
    + c1 * determinant2x2(a2, a3, b2, b3)
}

#[inline]
fn determinant2x2(a: f32, b: f32, c: f32, d: f32) -> f32 {
    a * d - b * c
}

// Adapted from http://www.euclideanspace.com/maths/geometry/rotations/conversions/matrixToQuaternion/index.htm
// Element (row, col) of a column-major matrix lives at `col * 4 + row`.
pub fn matrix_to_quat(m: &Matrix) -> [f32; 4] {
    let (m00, m11, m22) = (m[0], m[5], m[10]);
    let w = f32::max(0.0, 1.0 + m00 + m11 + m22).sqrt() * 0.5;
    let mut x = f32::max(0.0, 1.0 + m00 - m11 - m22).sqrt() * 0.5;
    let mut y = f32::max(0.0, 1.0 - m00 + m11 - m22).sqrt() * 0.5;
    let mut z = f32::max(0.0, 1.0 - m00 - m11 + m22).sqrt() * 0.5;

    // m21 - m12, m02 - m20, m10 - m01
    x = copysign(x, m[6] - m[9]);
    y = copysign(y, m[8] - m[2]);
    z = copysign(z, m[1] - m[4]);

    [x, y, z, w]
}

#[inline]
fn copysign(a: f32, b: f32) -> f32 {
    if b == 0.0 {
        0.0
    } else {
        a.abs() * b.signum()
    }
}

/// A pure translation matrix.
pub fn translation_matrix(x: f32, y: f32, z: f32) -> Matrix {
    let mut m: Matrix = identity_matrix!();
    m[12] = x;
    m[13] = y;
    m[14] = z;
    m
}

/// The translation part of a rigid transform matrix.
pub fn matrix_translation(m: &Matrix) -> [f32; 3] {
    [m[12], m[13], m[14]]
}
