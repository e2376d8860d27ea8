use crate::utils::Matrix;
use crate::{XRInputPose, XRStageBounds};

/// Messages driving a mock device from a test or a remote controller.
#[derive(Debug, Clone)]
pub enum MockXRControlMsg {
    // Position and orientation (x, y, z, w) of the viewer in device space.
    SetViewerPose([f32; 3], [f32; 4]),
    // The viewer stops being tracked; pose queries report no data.
    ClearViewerPose,
    // Per-eye offsets from the viewer, left then right.
    SetEyeOffsets([f32; 3], [f32; 3]),
    SetProjectionMatrices(Matrix, Matrix),
    SetFloorTransform(Option<Matrix>),
    SetStageBounds(Option<XRStageBounds>),
    SetEmulatedPosition(bool),
    // Device-space pose of the input source with the given id.
    SetInputPose(u32, XRInputPose),
    ClearInputPose(u32),
}
