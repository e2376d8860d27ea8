use crate::utils::Matrix;
use crate::{XRDevice, XREye, XRInputPose, XRInputSource, XRReferenceSpace};
use std::cell::Cell;

pub use crate::utils::translation_matrix as translation;

// A device whose tracking data is set directly by the test.
pub struct StubDevice {
    pub pose: Cell<Option<Matrix>>,
    pub left_view: Cell<Option<Matrix>>,
    pub right_view: Cell<Option<Matrix>>,
    pub input: Cell<Option<XRInputPose>>,
    pub emulated_position: Cell<bool>,
}

impl StubDevice {
    pub fn new() -> StubDevice {
        StubDevice {
            pose: Cell::new(None),
            left_view: Cell::new(None),
            right_view: Cell::new(None),
            input: Cell::new(None),
            emulated_position: Cell::new(false),
        }
    }
}

impl XRDevice for StubDevice {
    fn id(&self) -> u32 {
        0
    }

    fn base_pose_matrix(&self) -> Option<Matrix> {
        self.pose.get()
    }

    fn base_view_matrix(&self, eye: XREye) -> Option<Matrix> {
        match eye {
            XREye::Left => self.left_view.get(),
            XREye::Right => self.right_view.get(),
        }
    }

    fn emulated_position(&self) -> bool {
        self.emulated_position.get()
    }

    fn input_pose(&self, source: &XRInputSource, space: &XRReferenceSpace) -> Option<XRInputPose> {
        self.input.get().map(|base| space.transform_base_input_pose(source, &base))
    }
}
