use crate::utils::{self, Matrix};
use crate::XRRigidTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XREye {
    Left,
    Right,
}

/// One eye's view of the scene for the current frame.
#[derive(Debug, Clone)]
pub struct XRView {
    eye: XREye,
    session_id: u32,
    view_matrix: Matrix,
    projection_matrix: Matrix,
}

impl XRView {
    pub fn new(eye: XREye, session_id: u32) -> XRView {
        XRView {
            eye,
            session_id,
            view_matrix: identity_matrix!(),
            projection_matrix: identity_matrix!(),
        }
    }

    pub fn eye(&self) -> XREye {
        self.eye
    }

    // Views of different sessions are never interchangeable.
    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    // column-major matrix describing the view transform of this eye
    pub fn view_matrix(&self) -> &Matrix {
        &self.view_matrix
    }

    // column-major matrix describing the projection of this eye
    pub fn projection_matrix(&self) -> &Matrix {
        &self.projection_matrix
    }

    /// The pose of this eye in the reference space the view was computed for.
    ///
    /// View matrices are inverted camera transforms, so the pose is the inverse
    /// of the view matrix and the view matrix is its known inverse.
    pub fn transform(&self) -> Option<XRRigidTransform> {
        let pose = utils::inverse_matrix(&self.view_matrix)?;
        Some(XRRigidTransform::new_with_inverse(pose, self.view_matrix))
    }

    pub(crate) fn update_view_matrix(&mut self, view_matrix: &Matrix) {
        self.view_matrix = *view_matrix;
    }

    pub(crate) fn update_projection_matrix(&mut self, projection_matrix: &Matrix) {
        self.projection_matrix = *projection_matrix;
    }
}
