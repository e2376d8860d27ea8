use crate::{XRInputSource, XRReferenceSpace, XRReferenceSpaceType};

/// Spaces that have a pose special to the frame rather than to the reference-space math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XRSpecialSpaceType {
    Viewer,
    TargetRay,
    Grip,
}

#[derive(Debug, Clone)]
pub enum XRSpace {
    Reference(XRReferenceSpace),
    // Input-source anchored spaces
    TargetRay(XRInputSource),
    Grip(XRInputSource),
}

impl XRSpace {
    pub fn special_type(&self) -> Option<XRSpecialSpaceType> {
        match self {
            XRSpace::Reference(space) => match space.space_type() {
                XRReferenceSpaceType::Viewer => Some(XRSpecialSpaceType::Viewer),
                XRReferenceSpaceType::Local
                | XRReferenceSpaceType::LocalFloor
                | XRReferenceSpaceType::BoundedFloor
                | XRReferenceSpaceType::Unbounded => None,
            },
            XRSpace::TargetRay(_) => Some(XRSpecialSpaceType::TargetRay),
            XRSpace::Grip(_) => Some(XRSpecialSpaceType::Grip),
        }
    }
}

impl From<XRReferenceSpace> for XRSpace {
    fn from(space: XRReferenceSpace) -> XRSpace {
        XRSpace::Reference(space)
    }
}
