use crate::utils::Matrix;
use crate::{XRDevice, XREye, XRError, XRReferenceSpace, XRRigidTransform, XRView};

/// The viewer's pose and per-eye views for one frame.
///
/// Owned by an `XRFrame` and overwritten in place on every update; no history
/// is kept. The number of views and their eyes never change after construction.
#[derive(Debug, Clone)]
pub struct XRViewerPose {
    pose_model_matrix: Matrix,
    left_view_matrix: Matrix,
    right_view_matrix: Matrix,
    views: Vec<XRView>,
    emulated_position: bool,
    // The device has supplied a pose at least once.
    tracked: bool,
    // The device supplied no pose on the last update.
    stale: bool,
}

impl XRViewerPose {
    pub fn new(views: Vec<XRView>) -> XRViewerPose {
        XRViewerPose {
            pose_model_matrix: identity_matrix!(),
            left_view_matrix: identity_matrix!(),
            right_view_matrix: identity_matrix!(),
            views,
            emulated_position: false,
            tracked: false,
            stale: true,
        }
    }

    // column-major matrix of the viewer pose in reference-space coordinates
    pub fn pose_model_matrix(&self) -> &Matrix {
        &self.pose_model_matrix
    }

    pub fn views(&self) -> &[XRView] {
        &self.views
    }

    /// Returns the view matrix for `eye`, failing if this pose has no view for it.
    pub fn view_matrix(&self, eye: XREye) -> Result<&Matrix, XRError> {
        if !self.views.iter().any(|view| view.eye() == eye) {
            return Err(XRError::UnsupportedEye(eye));
        }
        match eye {
            XREye::Left => Ok(&self.left_view_matrix),
            XREye::Right => Ok(&self.right_view_matrix),
        }
    }

    pub fn emulated_position(&self) -> bool {
        self.emulated_position
    }

    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    /// True when the last update got no pose and the pose matrix is the previous one.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    pub fn transform(&self) -> Result<XRRigidTransform, XRError> {
        XRRigidTransform::new(self.pose_model_matrix)
    }

    /// Recomputes the pose and view matrices from the device's current data,
    /// expressed relative to `space`.
    pub fn update_from_reference_space(&mut self, device: &dyn XRDevice, space: &XRReferenceSpace) {
        let pose = device.base_pose_matrix();
        let left_view_matrix = device.base_view_matrix(XREye::Left);
        let right_view_matrix = device.base_view_matrix(XREye::Right);

        match pose {
            Some(pose) => {
                space.transform_base_pose_matrix(&mut self.pose_model_matrix, &pose);
                space.adjust_for_origin_offset(&mut self.pose_model_matrix);
                self.tracked = true;
                self.stale = false;
            },
            None => {
                // Keep the previous pose around, flagged as stale.
                self.stale = true;
            },
        }
        self.emulated_position = device.emulated_position();

        if let (Some(left), Some(right)) = (left_view_matrix, right_view_matrix) {
            space.transform_base_view_matrix(&mut self.left_view_matrix, &left);
            space.transform_base_view_matrix(&mut self.right_view_matrix, &right);

            space.adjust_view_for_origin_offset(&mut self.left_view_matrix);
            space.adjust_view_for_origin_offset(&mut self.right_view_matrix);
        }

        for view in &mut self.views {
            let eye = view.eye();
            match eye {
                XREye::Left => view.update_view_matrix(&self.left_view_matrix),
                XREye::Right => view.update_view_matrix(&self.right_view_matrix),
            }
            if let Some(projection) = device.projection_matrix(eye) {
                view.update_projection_matrix(&projection);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::{translation, StubDevice};
    use crate::{XRReferenceSpaceOptions, XRReferenceSpaceType};

    fn local() -> XRReferenceSpace {
        XRReferenceSpace::new(XRReferenceSpaceType::Local, XRReferenceSpaceOptions::default(), None, None).unwrap()
    }

    fn stereo_pose() -> XRViewerPose {
        XRViewerPose::new(vec![XRView::new(XREye::Left, 1), XRView::new(XREye::Right, 1)])
    }

    #[test]
    fn missing_pose_keeps_previous_matrix() {
        let device = StubDevice::new();
        let space = local();
        let mut viewer_pose = stereo_pose();

        device.pose.set(Some(translation(0.0, 1.0, 0.0)));
        viewer_pose.update_from_reference_space(&device, &space);
        assert!(viewer_pose.is_tracked());
        assert!(!viewer_pose.is_stale());

        device.pose.set(None);
        viewer_pose.update_from_reference_space(&device, &space);
        assert!(viewer_pose.is_tracked());
        assert!(viewer_pose.is_stale());
        assert_eq!(viewer_pose.pose_model_matrix(), &translation(0.0, 1.0, 0.0));
    }

    #[test]
    fn views_follow_their_eye() {
        let device = StubDevice::new();
        let floor = XRReferenceSpace::new(XRReferenceSpaceType::LocalFloor, Default::default(), None, None).unwrap();
        let mut viewer_pose = stereo_pose();

        device.left_view.set(Some(translation(0.03, 0.0, 0.0)));
        device.right_view.set(Some(translation(-0.03, 0.0, 0.0)));
        viewer_pose.update_from_reference_space(&device, &floor);

        // The emulated floor lifts the viewer, so the views move down.
        assert_eq!(viewer_pose.views()[0].view_matrix(), &translation(0.03, -1.6, 0.0));
        assert_eq!(viewer_pose.views()[1].view_matrix(), &translation(-0.03, -1.6, 0.0));
        assert_eq!(viewer_pose.view_matrix(XREye::Right).unwrap(), &translation(-0.03, -1.6, 0.0));
    }

    #[test]
    fn one_view_matrix_is_not_enough() {
        let device = StubDevice::new();
        let mut viewer_pose = stereo_pose();
        device.left_view.set(Some(translation(0.03, 0.0, 0.0)));
        viewer_pose.update_from_reference_space(&device, &local());
        let identity: Matrix = identity_matrix!();
        assert_eq!(viewer_pose.views()[0].view_matrix(), &identity);
    }

    #[test]
    fn monoscopic_pose_has_no_right_eye() {
        let viewer_pose = XRViewerPose::new(vec![XRView::new(XREye::Left, 1)]);
        assert!(viewer_pose.view_matrix(XREye::Left).is_ok());
        assert_eq!(
            viewer_pose.view_matrix(XREye::Right).unwrap_err(),
            XRError::UnsupportedEye(XREye::Right)
        );
    }

    #[test]
    fn emulated_position_is_passed_through() {
        let device = StubDevice::new();
        let mut viewer_pose = stereo_pose();
        device.pose.set(Some(translation(0.0, 0.0, 0.0)));
        device.emulated_position.set(true);
        viewer_pose.update_from_reference_space(&device, &local());
        assert!(viewer_pose.emulated_position());
    }
}
