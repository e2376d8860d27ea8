//! Fixed pose offsets for known physical controllers.
//!
//! Controllers report their grip and pointing poses at slightly different
//! places than the WebXR conventions expect. Each entry carries the extra
//! rigid transform to apply, in the controller's local frame, on top of the
//! tracked pose. Button and axis remapping is handled by the host gamepad
//! layer and is not described here.

use crate::{XRError, XRRigidTransform};
use std::f32::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformOffset {
    pub position: [f32; 3],
    // Not necessarily normalized.
    pub orientation: [f32; 4],
}

impl TransformOffset {
    pub fn to_transform(&self) -> Result<XRRigidTransform, XRError> {
        XRRigidTransform::from_position_orientation(self.position, self.orientation)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamepadMapping {
    // Overrides the reported Gamepad.mapping
    pub mapping: &'static str,
    // Profile id reported instead of the raw gamepad id
    pub profile_id: &'static str,
    pub grip_offset: Option<TransformOffset>,
    pub target_ray_offset: Option<TransformOffset>,
}

// Grip adjustments determined experimentally.
const TILTED_GRIP: TransformOffset = TransformOffset {
    position: [0.0, -0.02, 0.04],
    orientation: [PI * 0.11, 0.0, 0.0, 1.0],
};

// Applies to both left and right Oculus Touch controllers.
static OCULUS_TOUCH: GamepadMapping = GamepadMapping {
    mapping: "xr-standard",
    profile_id: "oculus-touch",
    grip_offset: Some(TILTED_GRIP),
    target_ray_offset: None,
};

static OCULUS_GO: GamepadMapping = GamepadMapping {
    mapping: "xr-standard",
    profile_id: "oculus-go",
    grip_offset: Some(TransformOffset {
        position: [0.0, 0.0, 0.0],
        orientation: [PI * 0.11, 0.0, 0.0, 1.0],
    }),
    target_ray_offset: None,
};

static WINDOWS_MIXED_REALITY: GamepadMapping = GamepadMapping {
    mapping: "xr-standard",
    profile_id: "windows-mixed-reality",
    grip_offset: Some(TILTED_GRIP),
    target_ray_offset: None,
};

/// Looks up the mapping for a gamepad by the id string it reports.
pub fn gamepad_mapping(gamepad_id: &str) -> Option<&'static GamepadMapping> {
    match gamepad_id {
        "Oculus Touch (Right)" | "Oculus Touch (Left)" => Some(&OCULUS_TOUCH),
        "Oculus Go Controller" => Some(&OCULUS_GO),
        "Windows Mixed Reality (Right)" | "Windows Mixed Reality (Left)" => Some(&WINDOWS_MIXED_REALITY),
        _ => None,
    }
}
