//! Model matrices for bodies and limbs
//!
//! Limb matrices are local to the body matrix (body * limb gives world).
//! Rotation order matters: wings rotate about X first, then Y.

use glam::{Mat4, Quat, Vec3};

/// Arm swing about X. Positive displayed angles tilt the arm backwards.
pub fn arm_transform(offset: Vec3, angle_deg: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_rotation_x(-angle_deg.to_radians()), offset)
}

/// Leg march about X
pub fn leg_transform(offset: Vec3, angle_deg: f32) -> Mat4 {
    Mat4::from_rotation_translation(Quat::from_rotation_x(angle_deg.to_radians()), offset)
}

/// Wing flap about X followed by sweep about Y
pub fn wing_transform(offset: Vec3, flap_deg: f32, sweep_deg: f32) -> Mat4 {
    let rotation = Quat::from_rotation_y(-sweep_deg.to_radians())
        * Quat::from_rotation_x(-flap_deg.to_radians());
    Mat4::from_rotation_translation(rotation, offset)
}

/// Body placement: uniform scale, heading about Y (models face -90° off
/// the heading axis), then lift above the ground position.
pub fn body_transform(position: Vec3, lift: f32, heading_deg: f32, scale: f32) -> Mat4 {
    const MODEL_YAW_OFFSET: f32 = -90.0;
    Mat4::from_scale_rotation_translation(
        Vec3::splat(scale),
        Quat::from_rotation_y((heading_deg + MODEL_YAW_OFFSET).to_radians()),
        position + Vec3::Y * lift,
    )
}
