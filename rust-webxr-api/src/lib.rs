macro_rules! identity_matrix {
    () => ([1.0, 0.0, 0.0, 0.0,  0.0, 1.0, 0.0, 0.0,  0.0, 0.0, 1.0, 0.0,  0.0, 0.0, 0.0, 1.0]);
}

#[macro_use]
extern crate log;

#[cfg(feature = "serde-serialization")]
#[macro_use]
extern crate serde_derive;

pub mod utils;
pub mod gamepad_mappings;
pub mod mock;
pub mod xr_device;
pub mod xr_error;
pub mod xr_frame;
pub mod xr_input_source;
pub mod xr_pose;
pub mod xr_reference_space;
pub mod xr_rigid_transform;
pub mod xr_session;
pub mod xr_space;
pub mod xr_stage_bounds;
pub mod xr_view;
pub mod xr_viewer_pose;

#[cfg(test)]
mod stub;

pub use utils::Matrix;
pub use gamepad_mappings::{GamepadMapping, TransformOffset};
pub use mock::MockXRControlMsg;
pub use xr_device::XRDevice;
pub use xr_error::XRError;
pub use xr_frame::XRFrame;
pub use xr_input_source::{XRHandedness, XRInputPose, XRInputSource, XRTargetRayMode};
pub use xr_pose::XRPose;
pub use xr_reference_space::{XRReferenceSpace, XRReferenceSpaceOptions, XRReferenceSpaceType,
                             DEFAULT_EMULATION_HEIGHT};
pub use xr_rigid_transform::XRRigidTransform;
pub use xr_session::{XRSession, XRSessionMode};
pub use xr_space::{XRSpace, XRSpecialSpaceType};
pub use xr_stage_bounds::XRStageBounds;
pub use xr_view::{XREye, XRView};
pub use xr_viewer_pose::XRViewerPose;
