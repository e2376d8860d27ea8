use crate::gamepad_mappings::{self, GamepadMapping, TransformOffset};
use crate::utils::{self, Matrix};
use crate::XRRigidTransform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRHandedness {
    None,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRTargetRayMode {
    Gaze,
    TrackedPointer,
    Screen,
}

/// An input source as far as pose queries are concerned.
///
/// Enumeration of sources and their buttons belongs to the host; here a source
/// is an identity plus the fixed offsets of its gamepad mapping, if any.
#[derive(Debug, Clone)]
pub struct XRInputSource {
    id: u32,
    handedness: XRHandedness,
    target_ray_mode: XRTargetRayMode,
    gamepad_id: Option<String>,
    mapping: Option<&'static GamepadMapping>,
}

impl XRInputSource {
    pub fn new(handedness: XRHandedness, target_ray_mode: XRTargetRayMode) -> XRInputSource {
        XRInputSource {
            id: utils::new_id(),
            handedness,
            target_ray_mode,
            gamepad_id: None,
            mapping: None,
        }
    }

    /// Attaches the physical gamepad backing this source.
    pub fn with_gamepad(mut self, gamepad_id: &str) -> XRInputSource {
        self.mapping = gamepad_mappings::gamepad_mapping(gamepad_id);
        if self.mapping.is_none() {
            debug!("No gamepad mapping for {:?}", gamepad_id);
        }
        self.gamepad_id = Some(gamepad_id.to_owned());
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn handedness(&self) -> XRHandedness {
        self.handedness
    }

    pub fn target_ray_mode(&self) -> XRTargetRayMode {
        self.target_ray_mode
    }

    pub fn gamepad_id(&self) -> Option<&str> {
        self.gamepad_id.as_ref().map(|id| &id[..])
    }

    pub fn mapping(&self) -> Option<&'static GamepadMapping> {
        self.mapping
    }

    /// The reported profile: the mapping's profile id, else the raw gamepad id.
    pub fn profile(&self) -> Option<&str> {
        match self.mapping {
            Some(mapping) => Some(mapping.profile_id),
            None => self.gamepad_id(),
        }
    }

    pub fn grip_offset(&self) -> Option<XRRigidTransform> {
        offset_transform(self.mapping.and_then(|m| m.grip_offset))
    }

    pub fn target_ray_offset(&self) -> Option<XRRigidTransform> {
        offset_transform(self.mapping.and_then(|m| m.target_ray_offset))
    }
}

fn offset_transform(offset: Option<TransformOffset>) -> Option<XRRigidTransform> {
    match offset?.to_transform() {
        Ok(transform) => Some(transform),
        Err(e) => {
            warn!("Ignoring gamepad offset: {}", e);
            None
        }
    }
}

/// Pose matrices of an input source for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRInputPose {
    pub target_ray_matrix: Matrix,
    // None for sources without a grip, like gaze.
    pub grip_matrix: Option<Matrix>,
    pub emulated_position: bool,
}
