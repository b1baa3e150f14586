//! Programmatic rig fixtures shared by the core integration tests.
//!
//! Document parsing is outside the bake core, so these scenes are built in
//! code rather than loaded from files: a small mixed skeleton, simple
//! one-track clips, a slot visibility clip, and draw-order clips in dense,
//! sparse, and sparse-with-reset flavors.

use glam::{Quat, Vec3};
use rigbake_core::{
    Animation, AnimationCurve, AnimationKey, AnimationTrack, BaseSlot, BoneProperty, EventKey,
    EventTrack, KeyValue, Scene, SlotAnimationKey, SlotAnimationTrack, SlotProperty,
};
use rigbake_core::{Bone, Transform};

/// All fixtures are authored at 30 Hz.
pub const SAMPLE_RATE: f32 = 30.0;
/// Seconds per frame at [`SAMPLE_RATE`]. Key times are expressed as frame
/// multiples of this exact value so sampler cursors land on them bit-exactly.
pub const SPF: f32 = 1.0 / SAMPLE_RATE;

/// Symmetric ease-in-out control points.
pub const EASE_IN_OUT: AnimationCurve = AnimationCurve {
    x0: 0.42,
    y0: 0.0,
    x1: 0.58,
    y1: 1.0,
};

pub fn bone_key(t: f32, value: KeyValue) -> AnimationKey {
    AnimationKey {
        t,
        value,
        stepped: false,
        curve: None,
    }
}

pub fn offset_key(t: f32, order_offset: Option<i32>) -> SlotAnimationKey {
    SlotAnimationKey {
        t,
        attachment: None,
        order_offset,
    }
}

pub fn attachment_key(t: f32, attachment: Option<u32>) -> SlotAnimationKey {
    SlotAnimationKey {
        t,
        attachment,
        order_offset: None,
    }
}

/// Six-bone skeleton exercising every hierarchy rule:
///
/// - `root` carries a non-uniform scale `(2, 1, 1)`
/// - `carrier` offsets its children by `(0, 50, 0)`
/// - `bone_scale` inherits ancestor scale, `bone_noscale` does not
/// - `bone_rotated` is rotated 90° about Z
/// - `bone_animated` is the target of the clip fixtures
///
/// World transforms are left unbaked so tests can drive the bake themselves.
pub fn skeleton_scene() -> Scene {
    let root = Bone::new(
        0,
        "root",
        None,
        Transform {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::new(2.0, 1.0, 1.0),
        },
    );
    let animated = Bone::new(1, "bone_animated", Some(0), Transform::IDENTITY);
    let carrier = Bone::new(
        2,
        "carrier",
        Some(0),
        Transform {
            position: Vec3::new(0.0, 50.0, 0.0),
            ..Transform::IDENTITY
        },
    );
    let scale = Bone::new(
        3,
        "bone_scale",
        Some(2),
        Transform {
            position: Vec3::new(100.0, 100.0, 0.0),
            ..Transform::IDENTITY
        },
    );
    let noscale = Bone::new(
        4,
        "bone_noscale",
        Some(2),
        Transform {
            position: Vec3::new(100.0, 100.0, 0.0),
            ..Transform::IDENTITY
        },
    )
    .with_inherit_scale(false);
    let rotated = Bone::new(5, "bone_rotated", Some(0), Transform::from_z_angle_deg(90.0));

    let mut scene = Scene {
        bones: vec![root, animated, carrier, scale, noscale, rotated],
        slots: Vec::new(),
        animations: Default::default(),
    };
    for anim in [
        rot_animation(),
        pos_animation(),
        stepped_animation(),
        eased_pos_animation(),
        event_animation(),
    ] {
        scene.animations.insert(anim.name.clone(), anim);
    }
    scene
}

/// 0° → 90° about Z on `bone_animated` over one second.
pub fn rot_animation() -> Animation {
    Animation {
        name: "anim_rot".into(),
        duration: 1.0,
        tracks: vec![AnimationTrack {
            bone: 1,
            property: BoneProperty::Rotation,
            keys: vec![
                bone_key(0.0, KeyValue::Angle(0.0)),
                bone_key(1.0, KeyValue::Angle(90.0)),
            ],
        }],
        slot_tracks: Vec::new(),
        event_tracks: Vec::new(),
    }
}

/// Origin → `(100, 0, 0)` on `bone_animated` over one second, linear.
pub fn pos_animation() -> Animation {
    Animation {
        name: "anim_pos".into(),
        duration: 1.0,
        tracks: vec![AnimationTrack {
            bone: 1,
            property: BoneProperty::Position,
            keys: vec![
                bone_key(0.0, KeyValue::Vector(Vec3::ZERO)),
                bone_key(1.0, KeyValue::Vector(Vec3::new(100.0, 0.0, 0.0))),
            ],
        }],
        slot_tracks: Vec::new(),
        event_tracks: Vec::new(),
    }
}

/// Same span as [`pos_animation`] but the first key is stepped.
pub fn stepped_animation() -> Animation {
    let mut anim = pos_animation();
    anim.name = "anim_stepped".into();
    anim.tracks[0].keys[0].stepped = true;
    anim
}

/// Same span as [`pos_animation`] but eased through [`EASE_IN_OUT`].
pub fn eased_pos_animation() -> Animation {
    let mut anim = pos_animation();
    anim.name = "anim_curve".into();
    anim.tracks[0].keys[0].curve = Some(EASE_IN_OUT);
    anim
}

/// One named event with all three payload kinds.
pub fn event_animation() -> Animation {
    Animation {
        name: "anim_event".into(),
        duration: 1.0,
        tracks: Vec::new(),
        slot_tracks: Vec::new(),
        event_tracks: vec![EventTrack {
            name: "test_event".into(),
            keys: vec![EventKey {
                t: 0.5,
                int_payload: 1,
                float_payload: 0.5,
                string_payload: "test_string".into(),
            }],
        }],
    }
}

/// One slot with five attachments (`_5` is the default, so it carries
/// index 0) and a clip that steps through `_1`…`_5` one frame apart.
///
/// Sampled over its four-frame duration the attachment stream is
/// `[1, 2, 3, 4, 0, 0]`.
pub fn visibility_scene() -> Scene {
    let root = Bone::new(0, "root", None, Transform::IDENTITY);
    let slot = BaseSlot {
        index: 0,
        name: "slot".into(),
        bone: 0,
        attachments: vec![
            "_5".into(),
            "_1".into(),
            "_2".into(),
            "_3".into(),
            "_4".into(),
        ],
        active_attachment: Some(0),
    };
    let animation = Animation {
        name: "animation".into(),
        duration: 4.0 / 30.0,
        tracks: Vec::new(),
        slot_tracks: vec![SlotAnimationTrack {
            slot: 0,
            property: SlotProperty::Attachment,
            keys: (0u32..5)
                .map(|i| attachment_key(i as f32 * SPF, Some(if i < 4 { i + 1 } else { 0 })))
                .collect(),
        }],
        event_tracks: Vec::new(),
    };
    let mut scene = Scene {
        bones: vec![root],
        slots: vec![slot],
        animations: Default::default(),
    };
    scene.animations.insert(animation.name.clone(), animation);
    scene
}

fn draw_order_slot(index: usize, name: &str) -> BaseSlot {
    BaseSlot {
        index,
        name: name.into(),
        bone: 0,
        attachments: vec![name.into()],
        active_attachment: Some(0),
    }
}

/// Three slots (`_3`, `_4`, `_5`) and four draw-order clips:
///
/// - `draw_order_dense`: one key per frame; `_3`/`_4` shift by 2 then 1 then
///   return, `_5` shifts by 4 for two frames
/// - `draw_order_sparse`: the same shifts keyed every third frame and held
/// - `draw_order_sparse_duplicates`: as sparse on `_4`, but the return to the
///   base position is an explicit zero-offset run before the final no-change
///   key
/// - `draw_order_collapsed_runs`: per-frame keys after the loader collapsed
///   each run of identical authored offsets to a single `Some` key
pub fn draw_order_scene() -> Scene {
    let root = Bone::new(0, "root", None, Transform::IDENTITY);
    let slots = vec![
        draw_order_slot(0, "_3"),
        draw_order_slot(1, "_4"),
        draw_order_slot(2, "_5"),
    ];

    let dense_front = |slot: usize| SlotAnimationTrack {
        slot,
        property: SlotProperty::DrawOrder,
        keys: vec![
            offset_key(0.0, None),
            offset_key(SPF, Some(2)),
            offset_key(2.0 * SPF, Some(1)),
            offset_key(3.0 * SPF, None),
        ],
    };
    let dense = Animation {
        name: "draw_order_dense".into(),
        duration: 4.0 / 30.0,
        tracks: Vec::new(),
        slot_tracks: vec![
            dense_front(0),
            dense_front(1),
            SlotAnimationTrack {
                slot: 2,
                property: SlotProperty::DrawOrder,
                keys: vec![
                    offset_key(0.0, None),
                    offset_key(2.0 * SPF, Some(4)),
                    offset_key(4.0 * SPF, None),
                ],
            },
        ],
        event_tracks: Vec::new(),
    };

    let sparse_front = |slot: usize| SlotAnimationTrack {
        slot,
        property: SlotProperty::DrawOrder,
        keys: vec![
            offset_key(3.0 * SPF, Some(2)),
            offset_key(6.0 * SPF, Some(1)),
            offset_key(9.0 * SPF, None),
        ],
    };
    let sparse = Animation {
        name: "draw_order_sparse".into(),
        duration: 13.0 / 30.0,
        tracks: Vec::new(),
        slot_tracks: vec![
            sparse_front(0),
            sparse_front(1),
            SlotAnimationTrack {
                slot: 2,
                property: SlotProperty::DrawOrder,
                keys: vec![
                    offset_key(6.0 * SPF, Some(4)),
                    offset_key(12.0 * SPF, None),
                ],
            },
        ],
        event_tracks: Vec::new(),
    };

    let sparse_duplicates = Animation {
        name: "draw_order_sparse_duplicates".into(),
        duration: 13.0 / 30.0,
        tracks: Vec::new(),
        slot_tracks: vec![SlotAnimationTrack {
            slot: 1,
            property: SlotProperty::DrawOrder,
            keys: vec![
                offset_key(3.0 * SPF, Some(2)),
                offset_key(6.0 * SPF, Some(1)),
                offset_key(9.0 * SPF, Some(0)),
                offset_key(12.0 * SPF, None),
            ],
        }],
        event_tracks: Vec::new(),
    };

    let collapsed_offsets: [Option<i32>; 12] = [
        None,
        None,
        None,
        Some(2),
        None,
        None,
        Some(1),
        None,
        None,
        Some(0),
        None,
        None,
    ];
    let collapsed_runs = Animation {
        name: "draw_order_collapsed_runs".into(),
        duration: 12.0 / 30.0,
        tracks: Vec::new(),
        slot_tracks: vec![SlotAnimationTrack {
            slot: 0,
            property: SlotProperty::DrawOrder,
            keys: collapsed_offsets
                .iter()
                .enumerate()
                .map(|(i, offset)| offset_key(i as f32 * SPF, *offset))
                .collect(),
        }],
        event_tracks: Vec::new(),
    };

    let mut scene = Scene {
        bones: vec![root],
        slots,
        animations: Default::default(),
    };
    for anim in [dense, sparse, sparse_duplicates, collapsed_runs] {
        scene.animations.insert(anim.name.clone(), anim);
    }
    scene
}
