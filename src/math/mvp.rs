//! Projection and view builders used to assemble a model-view-projection matrix.
//!
//! None of these validate their inputs. Degenerate values (zero field of
//! view, `far <= near`, an `up` vector parallel to the view direction, ...)
//! produce a singular or NaN matrix instead of an error.

use num_traits::ToPrimitive;

use super::{Matrix4, Vector3, utils::scalar};

impl Matrix4 {
    /// Symmetric perspective projection from a field of view in radians.
    ///
    /// `aspect` is `width / height`, but note the convention: the horizontal
    /// half-extent is `near * tan(fov / 2)` and `aspect` *divides* the
    /// vertical extent. `fov` is therefore the horizontal field of view, and
    /// `aspect = 1.0` gives the same angle on both axes.
    pub fn perspective<T: ToPrimitive>(fov: T, aspect: T, near: T, far: T) -> Self {
        let fov = scalar(fov);
        let aspect = scalar(aspect);
        let near = scalar(near);
        let far = scalar(far);

        let size = near * (fov * 0.5).tan();
        let left = -size;
        let right = size;
        let bottom = -size / aspect;
        let top = size / aspect;

        Self {
            m: [
                2.0 * near / (right - left),
                0.0,
                0.0,
                0.0,
                //
                0.0,
                2.0 * near / (top - bottom),
                0.0,
                0.0,
                //
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                -1.0,
                //
                0.0,
                0.0,
                -(2.0 * far * near) / (far - near),
                0.0,
            ],
        }
    }

    /// View matrix for a camera at `eye` looking at `target`.
    ///
    /// The side axis is `up x forward`, so the camera's x axis points to
    /// the viewer's left of `forward` in a right-handed world.
    pub fn look_at(eye: Vector3, target: Vector3, up: Vector3) -> Self {
        let forward = (target - eye).normalized();
        let side = up.cross(&forward).normalized();
        // forward and side are orthonormal already
        let true_up = forward.cross(&side);

        let mut rotation = Self::identity();
        rotation.m[0] = side.x;
        rotation.m[4] = side.y;
        rotation.m[8] = side.z;

        rotation.m[1] = true_up.x;
        rotation.m[5] = true_up.y;
        rotation.m[9] = true_up.z;

        rotation.m[2] = -forward.x;
        rotation.m[6] = -forward.y;
        rotation.m[10] = -forward.z;

        let mut translation = Self::identity();
        translation.m[12] = -eye.x;
        translation.m[13] = -eye.y;
        translation.m[14] = -eye.z;

        Self::multiply(&translation, &rotation)
    }

    /// [`Matrix4::look_at`] followed by [`Matrix4::perspective`].
    pub fn camera<T: ToPrimitive>(
        fov: T,
        aspect: T,
        near: T,
        far: T,
        eye: Vector3,
        target: Vector3,
        up: Vector3,
    ) -> Self {
        let projection = Self::perspective(fov, aspect, near, far);
        let view = Self::look_at(eye, target, up);

        Self::multiply(&view, &projection)
    }

    /// 2D orthographic projection mapping `[left, right] x [bottom, top]`
    /// onto `[-1, 1]` on X and Y.
    ///
    /// Z and W pass through unchanged; there are no near/far planes. Meant
    /// for screen-space overlays.
    pub fn ortho<T: ToPrimitive>(left: T, bottom: T, right: T, top: T) -> Self {
        let x0 = scalar(left);
        let y0 = scalar(bottom);
        let x1 = scalar(right);
        let y1 = scalar(top);

        let mut m = [0.0; 16];
        m[0] = 2.0 / (x1 - x0);
        m[5] = 2.0 / (y1 - y0);
        m[10] = 1.0;
        m[15] = 1.0;

        m[12] = -(x1 + x0) / (x1 - x0);
        m[13] = -(y1 + y0) / (y1 - y0);
        m[14] = 0.0;

        Self { m }
    }
}
