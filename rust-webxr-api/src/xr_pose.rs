use crate::XRRigidTransform;

/// A point-in-time pose of a space relative to a base space.
#[derive(Debug, Clone)]
pub struct XRPose {
    pub transform: XRRigidTransform,
    // Opaque device flag, passed through unchanged.
    pub emulated_position: bool,
    /// Set when the device reported no pose this tick and `transform` is the
    /// last one it did report.
    pub stale: bool,
}

impl XRPose {
    pub fn new(transform: XRRigidTransform, emulated_position: bool) -> XRPose {
        XRPose {
            transform,
            emulated_position,
            stale: false,
        }
    }

    pub fn new_stale(transform: XRRigidTransform, emulated_position: bool) -> XRPose {
        XRPose {
            stale: true,
            ..XRPose::new(transform, emulated_position)
        }
    }
}
