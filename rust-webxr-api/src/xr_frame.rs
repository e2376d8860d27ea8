use crate::{XRDevice, XREye, XRError, XRPose, XRReferenceSpace, XRRigidTransform, XRSession,
            XRSpace, XRSpecialSpaceType, XRView, XRViewerPose};

/// The tracking state of one tick, as seen by one session.
///
/// Frames are built per tick and never reused. Every query recomputes from
/// the device's current data.
pub struct XRFrame<'a> {
    device: &'a dyn XRDevice,
    session: &'a XRSession,
    viewer_pose: XRViewerPose,
}

impl<'a> XRFrame<'a> {
    pub fn new(device: &'a dyn XRDevice, session: &'a XRSession) -> XRFrame<'a> {
        // Non-immersive sessions only have a monoscopic view.
        let mut views = vec![XRView::new(XREye::Left, session.id())];
        if session.immersive() {
            views.push(XRView::new(XREye::Right, session.id()));
        }

        XRFrame {
            device,
            session,
            viewer_pose: XRViewerPose::new(views),
        }
    }

    pub fn session(&self) -> &XRSession {
        self.session
    }

    pub fn views(&self) -> &[XRView] {
        self.viewer_pose.views()
    }

    /// Updates the viewer pose for `space` and returns it, or `None` while the
    /// device has never reported a pose.
    pub fn get_viewer_pose(&mut self, space: &XRReferenceSpace) -> Option<&XRViewerPose> {
        self.viewer_pose.update_from_reference_space(self.device, space);
        if self.viewer_pose.is_tracked() {
            Some(&self.viewer_pose)
        } else {
            None
        }
    }

    /// Returns the pose of `space` relative to `base_space`.
    ///
    /// Only the viewer space and input-source spaces are supported; other
    /// spaces, and spaces without tracking data this tick, give `None`.
    pub fn get_pose(&mut self, space: &XRSpace, base_space: &XRReferenceSpace) -> Result<Option<XRPose>, XRError> {
        match *space {
            XRSpace::Reference(_) => {
                if space.special_type() != Some(XRSpecialSpaceType::Viewer) {
                    return Ok(None);
                }
                // Only the transform: a plain pose does not carry the views.
                match self.get_viewer_pose(base_space) {
                    Some(viewer_pose) => {
                        let transform = viewer_pose.transform()?;
                        let emulated_position = viewer_pose.emulated_position();
                        if viewer_pose.is_stale() {
                            Ok(Some(XRPose::new_stale(transform, emulated_position)))
                        } else {
                            Ok(Some(XRPose::new(transform, emulated_position)))
                        }
                    },
                    None => Ok(None),
                }
            },
            XRSpace::TargetRay(ref source) => {
                let input_pose = match self.device.input_pose(source, base_space) {
                    Some(input_pose) => input_pose,
                    None => return Ok(None),
                };
                let transform = XRRigidTransform::new(input_pose.target_ray_matrix)?;
                Ok(Some(XRPose::new(transform, input_pose.emulated_position)))
            },
            XRSpace::Grip(ref source) => {
                let input_pose = match self.device.input_pose(source, base_space) {
                    Some(input_pose) => input_pose,
                    None => return Ok(None),
                };
                match input_pose.grip_matrix {
                    Some(grip_matrix) => {
                        let transform = XRRigidTransform::new(grip_matrix)?;
                        Ok(Some(XRPose::new(transform, input_pose.emulated_position)))
                    },
                    None => Ok(None),
                }
            },
        }
    }
}
