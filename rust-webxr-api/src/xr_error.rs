use crate::XREye;

/// Failures surfaced by reference-space construction and pose queries.
///
/// "No tracking data yet" is never an error: pose queries return `None` for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum XRError {
    #[error("XRReferenceSpaceType must be one of viewer, local, local-floor, bounded-floor, unbounded (got {0:?})")]
    UnknownReferenceSpaceType(String),

    #[error("creating bounded reference spaces is not supported")]
    BoundedReferenceSpaceUnsupported,

    #[error("floor reference spaces need a device transform when stage emulation is disabled")]
    StageEmulationDisabled,

    #[error("stage emulation height must be finite (got {0})")]
    InvalidEmulationHeight(f32),

    #[error("the viewer pose has no view for the {0:?} eye")]
    UnsupportedEye(XREye),

    #[error("matrix is not an invertible rigid transform")]
    NonInvertibleTransform,

    #[error("orientation quaternion has zero length")]
    InvalidOrientation,
}
