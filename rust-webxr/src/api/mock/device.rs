use rust_webxr_api::utils::{self, Matrix};
use rust_webxr_api::{MockXRControlMsg, XRDevice, XREye, XRInputPose, XRInputSource, XRReferenceSpace,
                     XRReferenceSpaceType, XRRigidTransform, XRStageBounds};
use std::collections::HashMap;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Mutex, MutexGuard};

/// Initial state of a mock device. The default simulates a standing HTC Vive.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde-serialization", derive(Deserialize, Serialize))]
pub struct MockXRInit {
    // Position and orientation of the viewer, None if not tracking yet.
    pub viewer_origin: Option<([f32; 3], [f32; 4])>,
    pub left_eye_offset: [f32; 3],
    pub right_eye_offset: [f32; 3],
    pub left_projection_matrix: Matrix,
    pub right_projection_matrix: Matrix,
    // Sitting-to-standing transform reported for floor-level spaces.
    pub floor_transform: Option<Matrix>,
    pub stage_bounds: Option<XRStageBounds>,
}

impl Default for MockXRInit {
    fn default() -> MockXRInit {
        MockXRInit {
            viewer_origin: Some(([0.5, -0.7, -0.3], [0.9385081, -0.08066622, -0.3347714, 0.024972256])),
            left_eye_offset: [-0.035949998, 0.0, -0.015],
            right_eye_offset: [0.035949998, 0.0, -0.015],

            // Simulates HTC Vive projections
            left_projection_matrix: [0.75620246, 0.0, 0.0, 0.0,
                                     0.0, 0.68050665, 0.0, 0.0,
                                    -0.05713458, -0.0021225351, -1.0000999, -1.0,
                                     0.0, 0.0, -0.10000999, 0.0],
            right_projection_matrix: [0.75646526, 0.0, 0.0, 0.0,
                                      0.0, 0.68069947, 0.0, 0.0,
                                      0.055611316, -0.005315368, -1.0000999, -1.0,
                                      0.0, 0.0, -0.10000999, 0.0],

            floor_transform: Some([-0.9317312, 0.0, 0.36314875, 0.0,
                                    0.0, 0.99999994, 0.0, 0.0,
                                   -0.36314875, 0.0, -0.9317312, 0.0,
                                    0.23767996, 1.6813644, 0.45370483, 1.0]),
            stage_bounds: Some(XRStageBounds {
                size_x: 2.0,
                size_z: 2.0,
            }),
        }
    }
}

struct MockXRState {
    viewer: Option<XRRigidTransform>,
    left_eye: XRRigidTransform,
    right_eye: XRRigidTransform,
    left_projection_matrix: Matrix,
    right_projection_matrix: Matrix,
    floor_transform: Option<Matrix>,
    stage_bounds: Option<XRStageBounds>,
    emulated_position: bool,
    input_poses: HashMap<u32, XRInputPose>,
}

/// A device reporting scripted tracking data.
///
/// The state is changed through `MockXRControlMsg`s, either applied directly
/// or sent over the channel returned by `new_with_remote`. Pending messages
/// are applied before every query, so a message sent before a frame query is
/// always visible to it.
pub struct MockXRDevice {
    device_id: u32,
    state: Mutex<MockXRState>,
    receiver: Option<Mutex<Receiver<MockXRControlMsg>>>,
}

impl MockXRDevice {
    pub fn new(init: MockXRInit) -> MockXRDevice {
        MockXRDevice {
            device_id: utils::new_id(),
            state: Mutex::new(MockXRState::new(init)),
            receiver: None,
        }
    }

    pub fn new_with_remote(init: MockXRInit) -> (MockXRDevice, Sender<MockXRControlMsg>) {
        let (sender, receiver) = channel();
        let mut device = MockXRDevice::new(init);
        device.receiver = Some(Mutex::new(receiver));
        (device, sender)
    }

    pub fn handle_msg(&self, msg: MockXRControlMsg) {
        self.state.lock().unwrap().handle_msg(msg);
    }

    // Applies pending remote messages and returns the up to date state.
    fn sync_state(&self) -> MutexGuard<MockXRState> {
        let mut state = self.state.lock().unwrap();
        if let Some(ref receiver) = self.receiver {
            let receiver = receiver.lock().unwrap();
            while let Ok(msg) = receiver.try_recv() {
                state.handle_msg(msg);
            }
        }
        state
    }
}

impl XRDevice for MockXRDevice {
    fn id(&self) -> u32 {
        self.device_id
    }

    fn base_pose_matrix(&self) -> Option<Matrix> {
        self.sync_state().viewer.as_ref().map(|viewer| *viewer.matrix())
    }

    fn base_view_matrix(&self, eye: XREye) -> Option<Matrix> {
        let state = self.sync_state();
        let viewer = state.viewer.as_ref()?;
        let eye = match eye {
            XREye::Left => &state.left_eye,
            XREye::Right => &state.right_eye,
        };
        // The view matrix is the inverse of the eye's pose.
        let view = *viewer.multiply(eye).inverse().matrix();
        Some(view)
    }

    fn projection_matrix(&self, eye: XREye) -> Option<Matrix> {
        let state = self.sync_state();
        match eye {
            XREye::Left => Some(state.left_projection_matrix),
            XREye::Right => Some(state.right_projection_matrix),
        }
    }

    fn emulated_position(&self) -> bool {
        self.sync_state().emulated_position
    }

    fn input_pose(&self, source: &XRInputSource, space: &XRReferenceSpace) -> Option<XRInputPose> {
        let state = self.sync_state();
        let base = state.input_poses.get(&source.id())?;
        Some(space.transform_base_input_pose(source, base))
    }

    fn reference_space_transform(&self, space_type: XRReferenceSpaceType) -> Option<Matrix> {
        match space_type {
            XRReferenceSpaceType::LocalFloor | XRReferenceSpaceType::BoundedFloor => {
                self.sync_state().floor_transform
            },
            XRReferenceSpaceType::Viewer | XRReferenceSpaceType::Local | XRReferenceSpaceType::Unbounded => None,
        }
    }

    fn stage_bounds(&self) -> Option<XRStageBounds> {
        self.sync_state().stage_bounds
    }
}

impl MockXRState {
    fn new(init: MockXRInit) -> MockXRState {
        let mut state = MockXRState {
            viewer: None,
            left_eye: XRRigidTransform::identity(),
            right_eye: XRRigidTransform::identity(),
            left_projection_matrix: init.left_projection_matrix,
            right_projection_matrix: init.right_projection_matrix,
            floor_transform: init.floor_transform,
            stage_bounds: init.stage_bounds,
            emulated_position: false,
            input_poses: HashMap::new(),
        };
        state.handle_msg(MockXRControlMsg::SetEyeOffsets(init.left_eye_offset, init.right_eye_offset));
        if let Some((position, orientation)) = init.viewer_origin {
            state.handle_msg(MockXRControlMsg::SetViewerPose(position, orientation));
        }
        state
    }

    fn handle_msg(&mut self, msg: MockXRControlMsg) {
        debug!("Mock device handling {:?}", msg);
        match msg {
            MockXRControlMsg::SetViewerPose(position, orientation) => {
                match XRRigidTransform::from_position_orientation(position, orientation) {
                    Ok(viewer) => self.viewer = Some(viewer),
                    Err(e) => warn!("Ignoring mock viewer pose: {}", e),
                }
            },
            MockXRControlMsg::ClearViewerPose => self.viewer = None,
            MockXRControlMsg::SetEyeOffsets(left, right) => {
                self.left_eye = eye_transform(left);
                self.right_eye = eye_transform(right);
            },
            MockXRControlMsg::SetProjectionMatrices(left, right) => {
                self.left_projection_matrix = left;
                self.right_projection_matrix = right;
            },
            MockXRControlMsg::SetFloorTransform(transform) => self.floor_transform = transform,
            MockXRControlMsg::SetStageBounds(bounds) => self.stage_bounds = bounds,
            MockXRControlMsg::SetEmulatedPosition(emulated) => self.emulated_position = emulated,
            MockXRControlMsg::SetInputPose(id, pose) => {
                self.input_poses.insert(id, pose);
            },
            MockXRControlMsg::ClearInputPose(id) => {
                self.input_poses.remove(&id);
            },
        }
    }
}

fn eye_transform(offset: [f32; 3]) -> XRRigidTransform {
    let [x, y, z] = offset;
    XRRigidTransform::new_with_inverse(
        utils::translation_matrix(x, y, z),
        utils::translation_matrix(-x, -y, -z),
    )
}
