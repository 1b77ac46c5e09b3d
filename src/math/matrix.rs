use std::{fmt, ops::Mul};

use bytemuck::{Pod, Zeroable};

use super::{Vector3, Vector4};

/// A 4x4 `f32` matrix stored column-major: `m[column * 4 + row]`.
///
/// This is the layout `glUniformMatrix4fv` expects with `transpose = false`,
/// so [`Matrix4::as_array`] can be uploaded directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Matrix4 {
    pub m: [f32; 16],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        m: [
            1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.0, //
            0.0, 0.0, 1.0, 0.0, //
            0.0, 0.0, 0.0, 1.0,
        ],
    };

    /// Creates a matrix with every element set to zero, same as [`Default`].
    pub fn new() -> Self {
        Self { m: [0.0; 16] }
    }

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn from_array(m: [f32; 16]) -> Self {
        Self { m }
    }

    pub fn as_array(&self) -> &[f32; 16] {
        &self.m
    }

    /// Raw bytes of the matrix, ready for a uniform or buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    pub fn get(&self, column: usize, row: usize) -> f32 {
        self.m[column * 4 + row]
    }

    /// Multiplies the raw arrays of `a` and `b` group by group.
    ///
    /// With column-major storage the result applies `a` first and `b`
    /// second, so a view matrix `v` and a projection `p` compose as
    /// `Matrix4::multiply(&v, &p)`. The [`Mul`] operator uses the usual
    /// math order instead: `p * v` is the same matrix.
    pub fn multiply(a: &Self, b: &Self) -> Self {
        let mut out = Self::new();

        for i in 0..4 {
            let r = i * 4;
            for j in 0..4 {
                out.m[r + j] = a.m[r] * b.m[j]
                    + a.m[r + 1] * b.m[j + 4]
                    + a.m[r + 2] * b.m[j + 8]
                    + a.m[r + 3] * b.m[j + 12];
            }
        }

        out
    }

    /// Applies the matrix to a homogeneous vector.
    pub fn transform(&self, v: Vector4) -> Vector4 {
        let m = &self.m;

        Vector4 {
            x: m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            y: m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            z: m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            w: m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        }
    }

    /// Transforms a point (`w = 1`) and divides by the resulting `w`
    /// unless it is zero.
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        let v = self.transform(Vector4::from_point(point));
        if v.w == 0.0 {
            return v.xyz();
        }

        v.xyz() / v.w
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::multiply(&rhs, &self)
    }
}

impl Mul<Vector4> for Matrix4 {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Vector4 {
        self.transform(rhs)
    }
}

// Dumps the raw array four floats per line.
impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.m.chunks_exact(4) {
            writeln!(
                f,
                " {:5.3}, {:5.3}, {:5.3}, {:5.3},",
                chunk[0], chunk[1], chunk[2], chunk[3]
            )?;
        }

        Ok(())
    }
}
