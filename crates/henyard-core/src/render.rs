//! Draw lists for the presentation layer
//!
//! Each command pairs a model with its world matrix. Entities without a
//! body model are not drawn at all; a missing limb model only drops that
//! limb.

use glam::Mat4;

use crate::entity::{Hen, ModelHandle, Robot};
use crate::pose::transform::{arm_transform, body_transform, leg_transform, wing_transform};

/// One model to draw with its world transform
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand<'a> {
    pub model: &'a ModelHandle,
    pub transform: Mat4,
}

fn push<'a>(out: &mut Vec<DrawCommand<'a>>, model: Option<&'a ModelHandle>, transform: Mat4) {
    if let Some(model) = model {
        out.push(DrawCommand { model, transform });
    }
}

/// Body and arms of the robot
pub fn robot_commands<'a>(robot: &'a Robot, out: &mut Vec<DrawCommand<'a>>) {
    let Some(body_model) = robot.models.body.as_ref() else {
        return;
    };

    let body = body_transform(robot.position, robot.lift(), robot.heading, robot.scale);
    out.push(DrawCommand {
        model: body_model,
        transform: body,
    });

    let (left, right) = robot.arms.display_angles();
    push(
        out,
        robot.models.left_arm.as_ref(),
        body * arm_transform(Robot::LEFT_ARM_OFFSET, left),
    );
    push(
        out,
        robot.models.right_arm.as_ref(),
        body * arm_transform(Robot::RIGHT_ARM_OFFSET, right),
    );
}

/// Body, legs and wings of a hen
pub fn hen_commands<'a>(hen: &'a Hen, out: &mut Vec<DrawCommand<'a>>) {
    let Some(body_model) = hen.models.body.as_ref() else {
        return;
    };

    let body = body_transform(hen.position, hen.lift(), hen.heading, hen.scale);
    out.push(DrawCommand {
        model: body_model,
        transform: body,
    });

    let models = &hen.models;
    let (left_leg, right_leg) = hen.legs.display_angles();
    push(
        out,
        models.left_leg.as_ref(),
        body * leg_transform(Hen::LEFT_LEG_OFFSET, left_leg),
    );
    push(
        out,
        models.right_leg.as_ref(),
        body * leg_transform(Hen::RIGHT_LEG_OFFSET, right_leg),
    );

    let (left_wing, right_wing) = hen.wings.display_angles();
    push(
        out,
        models.left_wing.as_ref(),
        body * wing_transform(Hen::LEFT_WING_OFFSET, left_wing.flap, left_wing.sweep),
    );
    push(
        out,
        models.right_wing.as_ref(),
        body * wing_transform(Hen::RIGHT_WING_OFFSET, right_wing.flap, right_wing.sweep),
    );
}
