use crate::utils::Matrix;
use crate::{XREye, XRInputPose, XRInputSource, XRReferenceSpace, XRReferenceSpaceType, XRStageBounds};

/// The XRDevice trait is the tracking side of a frame.
///
/// Every query returns immediately; `None` means "no tracking data this tick",
/// which is expected and distinct from a failure.
pub trait XRDevice {
    /// Returns unique device identifier
    fn id(&self) -> u32;

    /// Returns the current viewer pose in device space.
    fn base_pose_matrix(&self) -> Option<Matrix>;

    /// Returns the current view matrix of `eye` in device space.
    fn base_view_matrix(&self, eye: XREye) -> Option<Matrix>;

    /// Returns the projection matrix of `eye`.
    fn projection_matrix(&self, _eye: XREye) -> Option<Matrix> {
        None
    }

    /// Whether the current viewer pose is estimated rather than fully tracked.
    fn emulated_position(&self) -> bool {
        false
    }

    /// Returns the pose of an input source, already expressed relative to `space`.
    /// Implementations use `XRReferenceSpace::transform_base_input_pose` for it.
    fn input_pose(&self, source: &XRInputSource, space: &XRReferenceSpace) -> Option<XRInputPose>;

    /// A native transform for reference spaces of `space_type`, e.g. the
    /// sitting-to-standing transform of a room-scale device.
    fn reference_space_transform(&self, _space_type: XRReferenceSpaceType) -> Option<Matrix> {
        None
    }

    /// Returns the play-area bounds, if the device knows them.
    fn stage_bounds(&self) -> Option<XRStageBounds> {
        None
    }
}
