use approx::assert_abs_diff_eq;
use rust_webxr::api::{MockXRDevice, MockXRInit};
use rust_webxr::utils::{self, Matrix};
use rust_webxr::{MockXRControlMsg, XRDevice, XREye, XRError, XRFrame, XRHandedness, XRInputPose, XRInputSource,
                 XRReferenceSpace, XRReferenceSpaceOptions, XRReferenceSpaceType, XRRigidTransform, XRSession,
                 XRSessionMode, XRSpace, XRTargetRayMode};

fn assert_matrix_eq(a: &Matrix, b: &Matrix) {
    for i in 0..16 {
        assert_abs_diff_eq!(a[i], b[i], epsilon = 1e-4);
    }
}

fn reference_space(device: &MockXRDevice, space_type: XRReferenceSpaceType) -> XRReferenceSpace {
    XRReferenceSpace::from_device(device, space_type, XRReferenceSpaceOptions::default()).unwrap()
}

#[test]
fn local_space_reports_device_pose() {
    let device = MockXRDevice::new(MockXRInit::default());
    let session = XRSession::new(XRSessionMode::ImmersiveVR);
    let local = reference_space(&device, XRReferenceSpaceType::Local);
    let mut frame = XRFrame::new(&device, &session);

    let base_pose = device.base_pose_matrix().unwrap();
    let viewer_pose = frame.get_viewer_pose(&local).unwrap();
    assert_matrix_eq(viewer_pose.pose_model_matrix(), &base_pose);
    assert_eq!(viewer_pose.views().len(), 2);

    let position = viewer_pose.transform().unwrap().position();
    assert_abs_diff_eq!(position[0], 0.5, epsilon = 1e-5);
    assert_abs_diff_eq!(position[1], -0.7, epsilon = 1e-5);
    assert_abs_diff_eq!(position[2], -0.3, epsilon = 1e-5);
}

#[test]
fn floor_space_uses_device_stage_transform() {
    let init = MockXRInit::default();
    let stage = init.floor_transform.unwrap();
    let device = MockXRDevice::new(init);
    let session = XRSession::new(XRSessionMode::ImmersiveVR);
    let floor = reference_space(&device, XRReferenceSpaceType::LocalFloor);
    assert_eq!(floor.emulated_height(), 0.0);
    assert_eq!(floor.bounds().unwrap().size_x, 2.0);

    let base_pose = device.base_pose_matrix().unwrap();
    let mut frame = XRFrame::new(&device, &session);
    let viewer_pose = frame.get_viewer_pose(&floor).unwrap();
    let expected = utils::multiply_matrix(&stage, &base_pose);
    assert_matrix_eq(viewer_pose.pose_model_matrix(), &expected);

    // Each eye sits at the head pose plus its offset, in floor coordinates.
    let left = viewer_pose.views()[0].transform().unwrap();
    let left_offset = utils::translation_matrix(-0.035949998, 0.0, -0.015);
    assert_matrix_eq(left.matrix(), &utils::multiply_matrix(&expected, &left_offset));
    assert_eq!(viewer_pose.views()[1].eye(), XREye::Right);
    assert_eq!(viewer_pose.views()[1].projection_matrix()[0], 0.75646526);
}

#[test]
fn floor_space_emulation() {
    let device = MockXRDevice::new(MockXRInit {
        floor_transform: None,
        ..MockXRInit::default()
    });
    let floor = reference_space(&device, XRReferenceSpaceType::LocalFloor);
    assert_eq!(floor.emulated_height(), 1.6);

    let options = XRReferenceSpaceOptions {
        disable_stage_emulation: true,
        stage_emulation_height: 0.0,
    };
    assert_eq!(
        XRReferenceSpace::from_device(&device, XRReferenceSpaceType::LocalFloor, options).unwrap_err(),
        XRError::StageEmulationDisabled
    );

    // Unsupported even when the device does have a stage.
    let device = MockXRDevice::new(MockXRInit::default());
    assert_eq!(
        XRReferenceSpace::from_device(&device, XRReferenceSpaceType::BoundedFloor, options).unwrap_err(),
        XRError::BoundedReferenceSpaceUnsupported
    );
    assert!(XRReferenceSpace::from_device(&device, XRReferenceSpaceType::LocalFloor, options).is_ok());
}

#[test]
fn untracked_device_has_no_viewer_pose() {
    let (device, remote) = MockXRDevice::new_with_remote(MockXRInit {
        viewer_origin: None,
        ..MockXRInit::default()
    });
    let session = XRSession::new(XRSessionMode::Inline);
    let local = reference_space(&device, XRReferenceSpaceType::Local);
    let viewer = XRSpace::Reference(reference_space(&device, XRReferenceSpaceType::Viewer));

    let mut frame = XRFrame::new(&device, &session);
    assert!(frame.get_viewer_pose(&local).is_none());
    assert!(frame.get_pose(&viewer, &local).unwrap().is_none());

    remote.send(MockXRControlMsg::SetViewerPose([0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0])).unwrap();
    remote.send(MockXRControlMsg::SetEmulatedPosition(true)).unwrap();
    let mut frame = XRFrame::new(&device, &session);
    let pose = frame.get_pose(&viewer, &local).unwrap().unwrap();
    assert_eq!(pose.transform.position(), [0.0, 1.0, 0.0]);
    assert!(pose.emulated_position);
    assert_eq!(frame.views().len(), 1);
}

#[test]
fn lost_tracking_keeps_last_pose() {
    let (device, remote) = MockXRDevice::new_with_remote(MockXRInit::default());
    let session = XRSession::new(XRSessionMode::ImmersiveVR);
    let local = reference_space(&device, XRReferenceSpaceType::Local);
    let mut frame = XRFrame::new(&device, &session);

    let tracked = *frame.get_viewer_pose(&local).unwrap().pose_model_matrix();

    remote.send(MockXRControlMsg::ClearViewerPose).unwrap();
    let viewer_pose = frame.get_viewer_pose(&local).unwrap();
    assert!(viewer_pose.is_stale());
    assert_eq!(viewer_pose.pose_model_matrix(), &tracked);

    let viewer = XRSpace::Reference(reference_space(&device, XRReferenceSpaceType::Viewer));
    let pose = frame.get_pose(&viewer, &local).unwrap().unwrap();
    assert!(pose.stale);
    assert_eq!(pose.transform.matrix(), &tracked);
}

#[test]
fn offset_spaces_shift_the_viewer() {
    let device = MockXRDevice::new(MockXRInit {
        viewer_origin: Some(([0.0, 1.5, 0.0], [0.0, 0.0, 0.0, 1.0])),
        ..MockXRInit::default()
    });
    let session = XRSession::new(XRSessionMode::ImmersiveVR);
    let local = reference_space(&device, XRReferenceSpaceType::Local);
    let step = XRRigidTransform::from_position_orientation([0.0, 0.0, -1.0], [0.0, 0.0, 0.0, 1.0]).unwrap();
    let moved = local.get_offset_reference_space(&step);

    let mut frame = XRFrame::new(&device, &session);
    // Moving the origin forward puts the viewer behind it.
    let position = frame.get_viewer_pose(&moved).unwrap().transform().unwrap().position();
    assert_abs_diff_eq!(position[1], 1.5, epsilon = 1e-6);
    assert_abs_diff_eq!(position[2], 1.0, epsilon = 1e-6);

    let view = frame.get_viewer_pose(&moved).unwrap().view_matrix(XREye::Left).unwrap();
    assert_abs_diff_eq!(view[14], -1.0 + 0.015, epsilon = 1e-6);
}

#[test]
fn input_source_poses() {
    let (device, remote) = MockXRDevice::new_with_remote(MockXRInit {
        floor_transform: None,
        ..MockXRInit::default()
    });
    let session = XRSession::new(XRSessionMode::ImmersiveVR);
    let floor = reference_space(&device, XRReferenceSpaceType::LocalFloor);
    let source = XRInputSource::new(XRHandedness::Left, XRTargetRayMode::TrackedPointer)
        .with_gamepad("Oculus Touch (Left)");
    assert_eq!(source.profile(), Some("oculus-touch"));
    let target_ray = XRSpace::TargetRay(source.clone());
    let grip = XRSpace::Grip(source.clone());

    let mut frame = XRFrame::new(&device, &session);
    assert!(frame.get_pose(&grip, &floor).unwrap().is_none());

    let hand = utils::translation_matrix(-0.2, 0.0, -0.3);
    remote.send(MockXRControlMsg::SetInputPose(source.id(), XRInputPose {
        target_ray_matrix: hand,
        grip_matrix: Some(hand),
        emulated_position: false,
    })).unwrap();

    let ray = frame.get_pose(&target_ray, &floor).unwrap().unwrap();
    assert_eq!(ray.transform.position(), [-0.2, 1.6, -0.3]);

    // The grip gets the controller's fixed offset on top of the tracked pose.
    let grip_pose = frame.get_pose(&grip, &floor).unwrap().unwrap();
    let offset = source.grip_offset().unwrap();
    let expected = utils::multiply_matrix(
        &utils::translation_matrix(0.0, 1.6, 0.0),
        &utils::multiply_matrix(&hand, offset.matrix()),
    );
    assert_matrix_eq(grip_pose.transform.matrix(), &expected);

    remote.send(MockXRControlMsg::ClearInputPose(source.id())).unwrap();
    assert!(frame.get_pose(&target_ray, &floor).unwrap().is_none());
}
