// The XRStageBounds struct describes the play area of a room-scale
// device, centered on the floor-level origin.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRStageBounds {
    // Width of the play-area bounds in meters.
    pub size_x: f32,
    // Depth of the play-area bounds in meters
    pub size_z: f32
}
