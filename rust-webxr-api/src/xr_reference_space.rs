use crate::utils::{self, Matrix};
use crate::{XRDevice, XRError, XRInputPose, XRInputSource, XRRigidTransform, XRStageBounds};
use std::fmt;
use std::str::FromStr;

// Eye height used when a floor-level space has to be emulated, in meters.
pub const DEFAULT_EMULATION_HEIGHT: f32 = 1.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub enum XRReferenceSpaceType {
    Viewer,
    Local,
    LocalFloor,
    BoundedFloor,
    Unbounded,
}

impl XRReferenceSpaceType {
    pub fn as_str(&self) -> &'static str {
        match *self {
            XRReferenceSpaceType::Viewer => "viewer",
            XRReferenceSpaceType::Local => "local",
            XRReferenceSpaceType::LocalFloor => "local-floor",
            XRReferenceSpaceType::BoundedFloor => "bounded-floor",
            XRReferenceSpaceType::Unbounded => "unbounded",
        }
    }

    /// Floor-level spaces have their origin on the floor rather than at eye level.
    pub fn is_floor(&self) -> bool {
        match *self {
            XRReferenceSpaceType::LocalFloor | XRReferenceSpaceType::BoundedFloor => true,
            XRReferenceSpaceType::Viewer
            | XRReferenceSpaceType::Local
            | XRReferenceSpaceType::Unbounded => false,
        }
    }
}

impl FromStr for XRReferenceSpaceType {
    type Err = XRError;

    fn from_str(s: &str) -> Result<XRReferenceSpaceType, XRError> {
        match s {
            "viewer" => Ok(XRReferenceSpaceType::Viewer),
            "local" => Ok(XRReferenceSpaceType::Local),
            "local-floor" => Ok(XRReferenceSpaceType::LocalFloor),
            "bounded-floor" => Ok(XRReferenceSpaceType::BoundedFloor),
            "unbounded" => Ok(XRReferenceSpaceType::Unbounded),
            _ => Err(XRError::UnknownReferenceSpaceType(s.to_owned())),
        }
    }
}

impl fmt::Display for XRReferenceSpaceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct XRReferenceSpaceOptions {
    // Refuse to fake a floor-level space when the device has none.
    pub disable_stage_emulation: bool,
    // Emulated eye height; 0 selects DEFAULT_EMULATION_HEIGHT.
    pub stage_emulation_height: f32,
}

impl Default for XRReferenceSpaceOptions {
    fn default() -> XRReferenceSpaceOptions {
        XRReferenceSpaceOptions {
            disable_stage_emulation: false,
            stage_emulation_height: 0.0,
        }
    }
}

// Where device space sits inside the reference space.
#[derive(Debug, Clone)]
enum BaseTransform {
    // Provided by the device, e.g. a stage transform.
    Device(XRRigidTransform),
    // Synthesized to emulate a floor at `height` below the device origin.
    Emulated { transform: XRRigidTransform, height: f32 },
    // Device space is used as is.
    PassThrough,
}

/// A frame of reference poses are reported against.
///
/// The space type and base transform are fixed at construction. The origin
/// offset is fixed too: `get_offset_reference_space` produces a new space
/// instead of mutating this one, so spaces can be shared freely.
#[derive(Debug, Clone)]
pub struct XRReferenceSpace {
    space_type: XRReferenceSpaceType,
    options: XRReferenceSpaceOptions,
    base: BaseTransform,
    bounds: Option<XRStageBounds>,
    origin_offset: XRRigidTransform,
}

impl XRReferenceSpace {
    /// Creates a reference space, optionally using a `transform` from the
    /// device so devices can provide their own stage (or head-model) transform.
    pub fn new(
        space_type: XRReferenceSpaceType,
        options: XRReferenceSpaceOptions,
        transform: Option<Matrix>,
        bounds: Option<XRStageBounds>,
    ) -> Result<XRReferenceSpace, XRError> {
        // Emulating a floor the caller asked us not to emulate would report a
        // made-up height as tracking data.
        if space_type.is_floor() && options.disable_stage_emulation && transform.is_none() {
            warn!("Refusing to emulate a {} reference space with stage emulation disabled", space_type);
            return Err(XRError::StageEmulationDisabled);
        }

        let base = match space_type {
            XRReferenceSpaceType::BoundedFloor => {
                warn!("Bounded reference spaces are not supported");
                return Err(XRError::BoundedReferenceSpaceUnsupported);
            },
            XRReferenceSpaceType::LocalFloor => match transform {
                Some(matrix) => BaseTransform::Device(XRRigidTransform::new(matrix)?),
                None => {
                    if !options.stage_emulation_height.is_finite() {
                        warn!("Refusing to emulate a floor at height {}", options.stage_emulation_height);
                        return Err(XRError::InvalidEmulationHeight(options.stage_emulation_height));
                    }
                    let height = if options.stage_emulation_height != 0.0 {
                        options.stage_emulation_height
                    } else {
                        DEFAULT_EMULATION_HEIGHT
                    };
                    debug!("Emulating {} reference space at height {}", space_type, height);
                    BaseTransform::Emulated {
                        transform: emulated_floor_transform(height),
                        height,
                    }
                },
            },
            XRReferenceSpaceType::Viewer
            | XRReferenceSpaceType::Local
            | XRReferenceSpaceType::Unbounded => match transform {
                Some(matrix) => BaseTransform::Device(XRRigidTransform::new(matrix)?),
                None => BaseTransform::PassThrough,
            },
        };

        debug!("Created {} reference space", space_type);

        Ok(XRReferenceSpace {
            space_type,
            options,
            base,
            bounds,
            origin_offset: XRRigidTransform::identity(),
        })
    }

    /// Creates a reference space using whatever native transform and bounds
    /// `device` offers for `space_type`.
    pub fn from_device(
        device: &dyn XRDevice,
        space_type: XRReferenceSpaceType,
        options: XRReferenceSpaceOptions,
    ) -> Result<XRReferenceSpace, XRError> {
        let transform = device.reference_space_transform(space_type);
        XRReferenceSpace::new(space_type, options, transform, device.stage_bounds())
    }

    pub fn space_type(&self) -> XRReferenceSpaceType {
        self.space_type
    }

    pub fn options(&self) -> &XRReferenceSpaceOptions {
        &self.options
    }

    pub fn bounds(&self) -> Option<&XRStageBounds> {
        self.bounds.as_ref()
    }

    /// The emulated floor height, or 0 when the floor is not emulated.
    pub fn emulated_height(&self) -> f32 {
        match self.base {
            BaseTransform::Emulated { height, .. } => height,
            BaseTransform::Device(_) | BaseTransform::PassThrough => 0.0,
        }
    }

    /// The device or emulated transform in use, `None` for pass-through spaces.
    pub fn base_transform(&self) -> Option<&XRRigidTransform> {
        match self.base {
            BaseTransform::Device(ref transform) | BaseTransform::Emulated { ref transform, .. } => Some(transform),
            BaseTransform::PassThrough => None,
        }
    }

    pub fn origin_offset(&self) -> &XRRigidTransform {
        &self.origin_offset
    }

    pub fn origin_offset_matrix(&self) -> &Matrix {
        self.origin_offset.matrix()
    }

    /// Takes a base pose model matrix and expresses it in this space,
    /// before the origin offset: `out = D × pose`.
    pub fn transform_base_pose_matrix(&self, out: &mut Matrix, pose: &Matrix) {
        match self.base_transform() {
            Some(transform) => *out = utils::multiply_matrix(transform.matrix(), pose),
            // 'local' and friends treat device space as eye level: a plain copy.
            None => *out = *pose,
        }
    }

    /// Takes a base view matrix and expresses it in this space, before the
    /// origin offset: `out = view × D⁻¹`.
    ///
    /// View matrices are inverted camera poses, so `D` is applied inverted and
    /// on the right, the mirror image of `transform_base_pose_matrix`.
    pub fn transform_base_view_matrix(&self, out: &mut Matrix, view: &Matrix) {
        match self.base_transform() {
            Some(transform) => *out = utils::multiply_matrix(view, transform.inverse().matrix()),
            None => *out = *view,
        }
    }

    /// Applies the origin offset to a pose-space matrix: `matrix = O⁻¹ × matrix`.
    pub fn adjust_for_origin_offset(&self, matrix: &mut Matrix) {
        *matrix = utils::multiply_matrix(self.origin_offset.inverse().matrix(), matrix);
    }

    /// Applies the origin offset to a view matrix: `view = view × O`.
    pub fn adjust_view_for_origin_offset(&self, view: &mut Matrix) {
        *view = utils::multiply_matrix(view, self.origin_offset.matrix());
    }

    /// Returns a space of the same type and base transform whose origin is
    /// further offset by `additional_offset`. Bounds are carried over as is.
    pub fn get_offset_reference_space(&self, additional_offset: &XRRigidTransform) -> XRReferenceSpace {
        XRReferenceSpace {
            origin_offset: self.origin_offset.multiply(additional_offset),
            ..self.clone()
        }
    }

    /// Expresses a device-space input pose in this space, applying the fixed
    /// offsets of the source's gamepad mapping in the controller's own frame.
    pub fn transform_base_input_pose(&self, source: &XRInputSource, base: &XRInputPose) -> XRInputPose {
        let mut target_ray_matrix = match source.target_ray_offset() {
            Some(offset) => utils::multiply_matrix(&base.target_ray_matrix, offset.matrix()),
            None => base.target_ray_matrix,
        };
        self.transform_pose_in_place(&mut target_ray_matrix);

        let grip_matrix = base.grip_matrix.map(|grip| {
            let mut grip = match source.grip_offset() {
                Some(offset) => utils::multiply_matrix(&grip, offset.matrix()),
                None => grip,
            };
            self.transform_pose_in_place(&mut grip);
            grip
        });

        XRInputPose {
            target_ray_matrix,
            grip_matrix,
            emulated_position: base.emulated_position,
        }
    }

    fn transform_pose_in_place(&self, matrix: &mut Matrix) {
        let base = *matrix;
        self.transform_base_pose_matrix(matrix, &base);
        self.adjust_for_origin_offset(matrix);
    }
}

// Identity raised by `height` along +y.
fn emulated_floor_transform(height: f32) -> XRRigidTransform {
    XRRigidTransform::new_with_inverse(
        utils::translation_matrix(0.0, height, 0.0),
        utils::translation_matrix(0.0, -height, 0.0),
    )
}
