//! Office construction: every trackable object with its computed default transform

use std::f64::consts::FRAC_PI_2;

use shared::ObjectKind;

use super::live::{SceneObject, TrackedObjects};
use crate::agent::{AgentId, Presence, Roster};

/// Radius of the circular meeting room
const MEETING_RADIUS: f64 = 6.0;
const CORRIDOR_LENGTH: f64 = 8.0;
const OFFICE_WIDTH: f64 = 6.0;
const OFFICE_DEPTH: f64 = 5.0;
const WALL_HEIGHT: f64 = 3.0;

/// Offset from `(x, z)` by `dist` along the direction `angle` (clockwise from +Z)
fn along(x: f64, z: f64, angle: f64, dist: f64) -> (f64, f64) {
    (x + angle.sin() * dist, z + angle.cos() * dist)
}

/// Build the base office for `roster`.
///
/// Tracking order matches construction order: meeting room, director avatars,
/// one wing per teammate, then the ground.
pub fn build_office(roster: &Roster) -> TrackedObjects {
    let mut objects = TrackedObjects::new();

    // Meeting room
    objects.track(SceneObject::new("meetingFloor", ObjectKind::Cylinder).at(0.0, 0.05, 0.0));
    objects.track(SceneObject::new("meetingTable", ObjectKind::Cylinder).at(0.0, 0.4, 0.0));
    objects.track(SceneObject::new("lightFixture", ObjectKind::Cylinder).at(0.0, 3.5, 0.0));

    track_avatar(&mut objects, AgentId::Ad, 2.0, -2.0);
    track_avatar(&mut objects, AgentId::Manager, -2.0, -2.0);

    for teammate in &roster.teammates {
        let profile = teammate.profile();
        let member = profile.id.as_str();
        let angle = teammate.angle_rad();
        let perp = angle + FRAC_PI_2;

        let (cx, cz) = along(0.0, 0.0, angle, MEETING_RADIUS + CORRIDOR_LENGTH / 2.0);
        objects.track(
            SceneObject::new(format!("corridor_{member}"), ObjectKind::Box)
                .at(cx, 0.05, cz)
                .yaw(-angle),
        );
        objects.track(
            SceneObject::new(format!("lightStrip_{member}"), ObjectKind::Box)
                .at(cx, 0.06, cz)
                .yaw(-angle),
        );

        let (ox, oz) = along(0.0, 0.0, angle, MEETING_RADIUS + CORRIDOR_LENGTH + OFFICE_DEPTH / 2.0);
        objects.track(
            SceneObject::new(format!("officeFloor_{member}"), ObjectKind::Box)
                .at(ox, 0.05, oz)
                .yaw(-angle),
        );

        let back = OFFICE_DEPTH / 2.0;
        let (x, z) = along(ox, oz, angle, back);
        objects.track(
            SceneObject::new(format!("backWall_{member}"), ObjectKind::Box)
                .at(x, WALL_HEIGHT / 2.0, z)
                .yaw(-angle),
        );
        for side in [-1.0, 1.0] {
            let (x, z) = along(ox, oz, perp, OFFICE_WIDTH / 2.0 * side);
            objects.track(
                SceneObject::new(format!("sideWall_{member}_{}", side as i32), ObjectKind::Box)
                    .at(x, WALL_HEIGHT / 2.0, z)
                    .yaw(-angle),
            );
        }

        let (x, z) = along(ox, oz, angle, back - 0.1);
        objects.track(
            SceneObject::new(format!("window_{member}"), ObjectKind::Box)
                .at(x, 1.7, z)
                .yaw(-angle),
        );
        let (x, z) = along(ox, oz, angle, 1.0);
        objects.track(
            SceneObject::new(format!("desk_{member}"), ObjectKind::Box)
                .at(x, 0.375, z)
                .yaw(-angle),
        );
        let (x, z) = along(ox, oz, angle, 1.3);
        objects.track(
            SceneObject::new(format!("monitor_{member}"), ObjectKind::Box)
                .at(x, 1.0, z)
                .yaw(-angle),
        );

        let (ax, az) = along(ox, oz, angle, -0.5);
        track_avatar(&mut objects, profile.id, ax, az);

        // Online teammates get an AL companion beside them
        if profile.presence == Presence::Online {
            let (x, z) = along(ax, az, perp, 1.2);
            objects.track(
                SceneObject::new(format!("body_al_near_{member}"), ObjectKind::Agent).at(x, 0.85, z),
            );
        }

        objects.track(
            SceneObject::new(format!("label_{}", profile.name), ObjectKind::Box).at(ox, 3.2, oz),
        );
    }

    objects.track(SceneObject::new("ground", ObjectKind::Plane).at(0.0, -0.01, 0.0));

    tracing::debug!("Built office with {} trackable objects", objects.len());
    objects
}

fn track_avatar(objects: &mut TrackedObjects, agent: AgentId, x: f64, z: f64) {
    objects.track(SceneObject::new(format!("body_{agent}"), ObjectKind::Character).at(x, 0.9, z));
}
