//! End-to-end simulation tests driven through `World`

use glam::{Vec2, Vec3};
use henyard_core::capture::CaptureEvent;
use henyard_core::collision::CollisionHandler;
use henyard_core::entity::{Hen, HenState, MovementMode, RobotInput};
use henyard_core::pose::LimbOscillator;
use henyard_core::protocol::{AgentGoal, GoalPosition, GoalUpdate};
use henyard_core::settings::{HenSettings, SimulationSettings};
use henyard_core::sync::PositionReporter;
use henyard_core::World;

fn open_world(spawns: Vec<(f32, f32)>) -> World {
    let settings = SimulationSettings {
        hen: HenSettings {
            spawn_points: spawns,
            ..HenSettings::default()
        },
        ..SimulationSettings::default()
    };
    World::new(settings, CollisionHandler::empty())
}

fn turn_right() -> RobotInput {
    RobotInput {
        turn_right: true,
        ..RobotInput::default()
    }
}

// ============================================================================
// Pose and motion
// ============================================================================

#[test]
fn test_oscillator_flip_timing() {
    let mut osc = LimbOscillator::new(5.0, 30.0, 5.0);
    for _ in 0..6 {
        osc.update(true);
    }
    assert_eq!(osc.angle, 30.0);
    assert_eq!(osc.direction, 1.0);

    osc.update(true);
    assert_eq!(osc.angle, 35.0);
    assert_eq!(osc.direction, -1.0);

    osc.update(true);
    assert_eq!(osc.angle, 30.0);
}

#[test]
fn test_hen_arrives_without_overshoot() {
    let mut hen = Hen::new(Vec3::ZERO, &HenSettings::default());
    hen.set_target(Vec2::new(10.0, 0.0));

    let mut last_x = 0.0;
    for _ in 0..19 {
        hen.advance();
        assert!(hen.position.x > last_x);
        last_x = hen.position.x;
    }
    // 0.5 left: next tick snaps
    assert!(hen.is_moving());
    hen.advance();
    assert_eq!(hen.position, Vec3::new(10.0, 0.0, 0.0));
    assert!(!hen.is_moving());

    for _ in 0..5 {
        hen.advance();
        assert_eq!(hen.position, Vec3::new(10.0, 0.0, 0.0));
    }
}

// ============================================================================
// Capture and delivery
// ============================================================================

#[test]
fn test_pickup_and_teleported_delivery() {
    let mut world = open_world(vec![(3.0, 0.0)]);

    let event = world.tick(&RobotInput::new());
    assert_eq!(event, Some(CaptureEvent::PickedUp { hen: 0 }));
    assert_eq!(world.hens()[0].state(), HenState::Captured);
    assert!(world.robot().is_holding());

    world.robot_mut().position = Vec3::new(95.0, 0.0, 98.0);
    let event = world.tick(&RobotInput::new());
    assert_eq!(event, Some(CaptureEvent::Delivered { hen: 0, total: 1 }));

    let corral = world.settings().capture.corral_point();
    assert_eq!(world.hens()[0].position, corral);
    assert_eq!(world.hens()[0].state(), HenState::Delivered);
    assert!(!world.robot().is_holding());

    for _ in 0..10 {
        assert_eq!(world.tick(&RobotInput::new()), None);
    }
    assert_eq!(world.delivered_count(), 1);
}

#[test]
fn test_drive_hen_to_drop_zone() {
    let mut world = open_world(vec![(3.0, 0.0), (-60.0, -60.0)]);

    // Face the drop point at (100, 100): heading 315
    for _ in 0..30 {
        world.tick(&turn_right());
    }
    assert_eq!(world.robot().heading, 315.0);
    assert!(world.hens()[0].is_captured());

    let mut deliveries = Vec::new();
    for _ in 0..300 {
        if let Some(event) = world.tick(&RobotInput::forward()) {
            deliveries.push(event);
        }
        if let Some(hen) = world.hens().iter().find(|h| h.is_captured()) {
            // Carried hen stays at the standoff in front of the robot
            let ahead = hen.planar_position() - world.robot().planar_position();
            assert!((ahead.length() - 6.0).abs() < 1e-3);
        }
    }

    assert_eq!(
        deliveries,
        vec![CaptureEvent::Delivered { hen: 0, total: 1 }]
    );
    assert_eq!(world.delivered_count(), 1);
    assert!(world.hens()[1].is_free());
}

#[test]
fn test_captured_hen_ignores_goals() {
    let mut world = open_world(vec![(3.0, 0.0)]);
    world.tick(&RobotInput::new());

    let update = GoalUpdate {
        agents: vec![AgentGoal {
            id: 2,
            position: GoalPosition::World { x: 50.0, z: 50.0 },
            mode: Some("fleeing".to_string()),
        }],
    };
    assert_eq!(world.apply_goal_update(&update), 0);
    // Mode still switches so the carried hen flaps
    assert_eq!(world.hens()[0].mode(), MovementMode::Fleeing);

    let before = world.hens()[0].position;
    world.tick(&RobotInput::new());
    assert_eq!(world.hens()[0].position, before);
    assert_ne!(world.hens()[0].wings.left.angle, 0.0);
}

// ============================================================================
// Goals and reports
// ============================================================================

#[test]
fn test_goal_update_drives_hens_on_farm() {
    let mut world = World::farm();
    let goals = GoalUpdate {
        agents: (0..world.hens().len() as u32)
            .map(|i| AgentGoal {
                id: i + 2,
                position: GoalPosition::Grid { x: 16, y: 16 },
                mode: None,
            })
            .collect(),
    };
    world.apply_goal_update(&goals);

    for _ in 0..400 {
        world.tick(&RobotInput::new());
        for hen in world.hens() {
            if hen.is_free() {
                assert!(world.bounds().contains(hen.planar_position()));
            }
        }
    }
}

#[test]
fn test_reports_only_on_cell_change() {
    let mut world = open_world(vec![]);
    let mut reporter = PositionReporter::new(world.settings().world.report_interval_ticks);
    let mut reports = Vec::new();

    for _ in 0..300 {
        world.tick(&RobotInput::forward());
        if let Some(report) = reporter.due(world.tick_count(), world.robot_cell()) {
            reporter.record_sent(&report);
            reports.push(report);
        }
    }

    // Standing still adds nothing
    for _ in 0..300 {
        world.tick(&RobotInput::new());
        if let Some(report) = reporter.due(world.tick_count(), world.robot_cell()) {
            reports.push(report);
        }
    }

    assert!(!reports.is_empty());
    assert!(reports.iter().all(|r| r.tick % 30 == 0 && r.tick <= 300));
    for pair in reports.windows(2) {
        assert_ne!(pair[0].robot, pair[1].robot);
    }
}
