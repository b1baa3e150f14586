use glam::Vec3;
use rigbake_core::{
    bake_animation, bake_scene, export_baked_json, Animation, AnimationTrack, BakeConfig,
    BakedAnimation, BakedSamples, BakedTarget, BoneProperty, RigError, SLOT_SIGNAL_UNCHANGED,
};
use rigbake_test_fixtures as fixtures;

fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// it should bake a rotation track into a quaternion stream pinned at both ends
#[test]
fn bake_rotation_track() {
    let scene = fixtures::skeleton_scene();
    let anim = fixtures::rot_animation();
    let baked = bake_animation(&scene, &anim, &BakeConfig::default()).unwrap();

    assert_eq!(baked.sample_count, 32);
    assert_eq!(baked.tracks.len(), 1);
    assert_eq!(
        baked.tracks[0].target,
        BakedTarget::Bone {
            bone: 1,
            property: BoneProperty::Rotation
        }
    );
    let BakedSamples::Rotations(samples) = &baked.tracks[0].samples else {
        panic!("expected a rotation stream");
    };
    assert_eq!(samples.len(), 32);
    let half_sqrt2 = 2.0f32.sqrt() / 2.0;
    approx(samples[0].w, 1.0, 1e-6);
    approx(samples[31].z, half_sqrt2, 1e-6);
    approx(samples[31].w, half_sqrt2, 1e-6);
}

/// it should default a keyless bone track to the bone's setup pose
#[test]
fn bake_defaults_to_setup_pose() {
    let scene = fixtures::skeleton_scene();
    let anim = Animation {
        name: "setup_hold".into(),
        duration: 0.5,
        tracks: vec![AnimationTrack {
            bone: 3,
            property: BoneProperty::Position,
            keys: Vec::new(),
        }],
        slot_tracks: Vec::new(),
        event_tracks: Vec::new(),
    };
    let baked = bake_animation(&scene, &anim, &BakeConfig::default()).unwrap();

    let BakedSamples::Positions(samples) = &baked.tracks[0].samples else {
        panic!("expected a position stream");
    };
    let setup = Vec3::new(100.0, 100.0, 0.0);
    assert_eq!(samples.len(), 17);
    assert!(samples.iter().all(|p| *p == setup));
}

/// it should default attachment streams to the slot's active attachment
#[test]
fn bake_attachment_track_with_slot_default() {
    let scene = fixtures::visibility_scene();
    let anim = scene.animation("animation").unwrap();
    let baked = bake_animation(&scene, anim, &BakeConfig::default()).unwrap();

    let BakedSamples::Attachments(samples) = &baked.tracks[0].samples else {
        panic!("expected an attachment stream");
    };
    assert_eq!(samples, &vec![1, 2, 3, 4, 0, 0]);
}

/// it should thread the configured draw-order sentinel through the bake
#[test]
fn bake_draw_order_with_configured_sentinel() {
    let scene = fixtures::draw_order_scene();
    let anim = scene.animation("draw_order_dense").unwrap();

    let default_cfg = BakeConfig::default();
    let baked = bake_animation(&scene, anim, &default_cfg).unwrap();
    let BakedSamples::OrderOffsets(samples) = &baked.tracks[0].samples else {
        panic!("expected an order-offset stream");
    };
    let u = SLOT_SIGNAL_UNCHANGED;
    assert_eq!(samples, &vec![u, 2, 1, u, u, u]);

    let custom = BakeConfig {
        slot_signal_unchanged: -1,
        ..BakeConfig::default()
    };
    let baked = bake_animation(&scene, anim, &custom).unwrap();
    let BakedSamples::OrderOffsets(samples) = &baked.tracks[0].samples else {
        panic!("expected an order-offset stream");
    };
    assert_eq!(samples, &vec![-1, 2, 1, -1, -1, -1]);
}

/// it should pass event tracks through with their authored times and payloads
#[test]
fn bake_passes_events_through() {
    let scene = fixtures::skeleton_scene();
    let anim = fixtures::event_animation();
    let baked = bake_animation(&scene, &anim, &BakeConfig::default()).unwrap();

    assert!(baked.tracks.is_empty());
    assert_eq!(baked.event_tracks.len(), 1);
    let track = &baked.event_tracks[0];
    assert_eq!(track.name, "test_event");
    assert_eq!(track.keys[0].int_payload, 1);
    approx(track.keys[0].float_payload, 0.5, 1e-6);
    assert_eq!(track.keys[0].string_payload, "test_string");
    approx(track.keys[0].t, 0.5, 1e-6);
}

/// it should abort the bake when a track addresses an unknown bone
#[test]
fn bake_rejects_unknown_bone() {
    let scene = fixtures::skeleton_scene();
    let anim = Animation {
        name: "broken".into(),
        duration: 1.0,
        tracks: vec![AnimationTrack {
            bone: 42,
            property: BoneProperty::Rotation,
            keys: Vec::new(),
        }],
        slot_tracks: Vec::new(),
        event_tracks: Vec::new(),
    };
    let err = bake_animation(&scene, &anim, &BakeConfig::default()).unwrap_err();
    assert!(matches!(err, RigError::UnknownBone { bone: 42, .. }));
}

/// it should bake a whole scene deterministically in name order
#[test]
fn bake_scene_is_name_ordered() {
    let scene = fixtures::skeleton_scene();
    let baked = bake_scene(&scene, &BakeConfig::default()).unwrap();

    let names: Vec<&str> = baked.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["anim_curve", "anim_event", "anim_pos", "anim_rot", "anim_stepped"]
    );
    for animation in &baked {
        for track in &animation.tracks {
            assert_eq!(track.samples.len(), animation.sample_count);
        }
    }
}

/// it should fall back to the default rate when the configured one is degenerate
#[test]
fn degenerate_sample_rate_falls_back() {
    let scene = fixtures::skeleton_scene();
    let anim = fixtures::rot_animation();
    let cfg = BakeConfig {
        sample_rate: 0.0,
        ..BakeConfig::default()
    };
    let baked = bake_animation(&scene, &anim, &cfg).unwrap();
    approx(baked.sample_rate, 30.0, 1e-6);
    assert_eq!(baked.sample_count, 32);
}

/// it should reduce a zero-duration animation to boundary samples
#[test]
fn zero_duration_animation_bakes_boundary_samples() {
    let scene = fixtures::skeleton_scene();
    let mut anim = fixtures::pos_animation();
    anim.duration = 0.0;
    let baked = bake_animation(&scene, &anim, &BakeConfig::default()).unwrap();
    assert_eq!(baked.sample_count, 2);
    assert_eq!(baked.tracks[0].samples.len(), 2);
}

/// it should round-trip the baked result through serde
#[test]
fn baked_output_serde_round_trip() {
    let scene = fixtures::visibility_scene();
    let anim = scene.animation("animation").unwrap();
    let baked = bake_animation(&scene, anim, &BakeConfig::default()).unwrap();

    let json = serde_json::to_string(&baked).unwrap();
    let restored: BakedAnimation = serde_json::from_str(&json).unwrap();
    assert_eq!(baked, restored);

    let value = export_baked_json(&baked);
    assert!(value.is_object());
}
