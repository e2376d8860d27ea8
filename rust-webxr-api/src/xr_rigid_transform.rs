use crate::utils::{self, Matrix};
use crate::XRError;
use euclid::{RigidTransform3D, Rotation3D, UnknownUnit, Vector3D};
use std::fmt;
use std::sync::{Arc, OnceLock};

// Storage shared by a transform and its inverse.
struct TransformPair {
    matrix: Matrix,
    inverse: OnceLock<Matrix>,
}

impl TransformPair {
    fn inverse(&self) -> &Matrix {
        self.inverse.get_or_init(|| {
            match utils::inverse_matrix(&self.matrix) {
                Some(inverse) => inverse,
                None => {
                    // Only reachable through a composed matrix that underflowed.
                    error!("Inverting a singular rigid transform: {:?}", self.matrix);
                    [f32::NAN; 16]
                }
            }
        })
    }
}

/// An immutable rigid transform (rotation followed by translation) with a
/// lazily computed, cached inverse.
///
/// A transform and its inverse share storage: the inverse matrix is computed
/// at most once, and `t.inverse().inverse()` is `t` itself rather than a
/// re-inverted copy. Cloning is cheap and keeps the cache shared.
#[derive(Clone)]
pub struct XRRigidTransform {
    pair: Arc<TransformPair>,
    inverted: bool,
}

impl XRRigidTransform {
    /// Wraps `matrix`, which must be finite and invertible.
    pub fn new(matrix: Matrix) -> Result<XRRigidTransform, XRError> {
        let det = utils::determinant4x4(&matrix);
        if det == 0.0 || !det.is_finite() || matrix.iter().any(|v| !v.is_finite()) {
            return Err(XRError::NonInvertibleTransform);
        }
        Ok(XRRigidTransform::from_matrix(matrix))
    }

    /// Wraps `matrix` together with its already known inverse.
    pub fn new_with_inverse(matrix: Matrix, inverse: Matrix) -> XRRigidTransform {
        XRRigidTransform {
            pair: Arc::new(TransformPair {
                matrix,
                inverse: OnceLock::from(inverse),
            }),
            inverted: false,
        }
    }

    pub fn identity() -> XRRigidTransform {
        XRRigidTransform::new_with_inverse(identity_matrix!(), identity_matrix!())
    }

    /// Builds the transform that rotates by `orientation` (x, y, z, w) and then
    /// translates by `position`. The quaternion does not need to be normalized.
    pub fn from_position_orientation(
        position: [f32; 3],
        orientation: [f32; 4],
    ) -> Result<XRRigidTransform, XRError> {
        let [x, y, z, w] = orientation;
        let length = (x * x + y * y + z * z + w * w).sqrt();
        if length == 0.0 || !length.is_finite() {
            return Err(XRError::InvalidOrientation);
        }

        let rotation: Rotation3D<f32, UnknownUnit, UnknownUnit> =
            Rotation3D::quaternion(x / length, y / length, z / length, w / length);
        let translation = Vector3D::new(position[0], position[1], position[2]);
        let rigid = RigidTransform3D::new(rotation, translation);

        // euclid stores row-vector matrices, which is our column-major layout.
        let matrix = rigid.to_transform().to_array();
        let inverse = rigid.inverse().to_transform().to_array();
        Ok(XRRigidTransform::new_with_inverse(matrix, inverse))
    }

    // Composition results skip validation; products of invertible matrices are invertible.
    pub(crate) fn from_matrix(matrix: Matrix) -> XRRigidTransform {
        XRRigidTransform {
            pair: Arc::new(TransformPair {
                matrix,
                inverse: OnceLock::new(),
            }),
            inverted: false,
        }
    }

    pub fn matrix(&self) -> &Matrix {
        if self.inverted {
            self.pair.inverse()
        } else {
            &self.pair.matrix
        }
    }

    pub fn inverse(&self) -> XRRigidTransform {
        XRRigidTransform {
            pair: self.pair.clone(),
            inverted: !self.inverted,
        }
    }

    /// Returns `self × other`: the result applies `other` first, then `self`.
    pub fn multiply(&self, other: &XRRigidTransform) -> XRRigidTransform {
        let matrix = utils::multiply_matrix(self.matrix(), other.matrix());
        let inverse = utils::multiply_matrix(other.inverse().matrix(), self.inverse().matrix());
        XRRigidTransform::new_with_inverse(matrix, inverse)
    }

    pub fn position(&self) -> [f32; 3] {
        utils::matrix_translation(self.matrix())
    }

    pub fn orientation(&self) -> [f32; 4] {
        utils::matrix_to_quat(self.matrix())
    }

    /// True when both handles refer to the same transform, not merely equal matrices.
    pub fn ptr_eq(a: &XRRigidTransform, b: &XRRigidTransform) -> bool {
        Arc::ptr_eq(&a.pair, &b.pair) && a.inverted == b.inverted
    }
}

impl fmt::Debug for XRRigidTransform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("XRRigidTransform")
            .field("matrix", self.matrix())
            .finish()
    }
}
