//! Movement domain: displacement rules shared by both combatants.

use bevy::prelude::*;

use crate::content::ArenaLayout;

/// Ground band the controlled actor may walk in.
pub fn walkable_bounds(layout: &ArenaLayout) -> Rect {
    Rect::new(
        layout.edge_margin,
        layout.height * layout.ground_line + layout.edge_margin,
        layout.width - layout.edge_margin,
        layout.height - layout.edge_margin,
    )
}

/// Move by `intent * speed` and clamp into `bounds`.
pub fn apply_intent(position: Vec2, intent: Vec2, speed: f32, bounds: Rect) -> Vec2 {
    let intent = intent.clamp(Vec2::NEG_ONE, Vec2::ONE);
    (position + intent * speed).clamp(bounds.min, bounds.max)
}

/// Walk toward `target` at `speed` per step. Stops once within `epsilon`.
pub fn step_toward(position: Vec2, target: Vec2, speed: f32, epsilon: f32) -> Vec2 {
    let delta = target - position;
    let distance = delta.length();
    if distance <= epsilon {
        return position;
    }
    position + delta / distance * speed.min(distance)
}
