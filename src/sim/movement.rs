//! Player movement and camera follow

use super::geometry::camera_for;
use super::input::{InputState, MoveBinding};
use super::state::{Direction, GameState};
use crate::consts::{PLAYER_HALF_EXTENT, PLAYER_SPEED};

/// Move the player from held keys, clamp to the map and re-derive the camera.
///
/// Each held binding adds its own axis step, so diagonals are faster than
/// straight lines. Bindings are evaluated left, right, up, down and the last
/// held one sets the facing direction. With nothing held the facing is kept.
pub fn update_player(state: &mut GameState, input: &InputState) {
    let mut pos = state.player.pos;
    let mut moving = false;
    let mut direction = state.player.direction;

    for binding in MoveBinding::ORDER {
        if !input.is_held(binding) {
            continue;
        }
        let dir = match binding {
            MoveBinding::Left => Direction::Left,
            MoveBinding::Right => Direction::Right,
            MoveBinding::Up => Direction::Up,
            MoveBinding::Down => Direction::Down,
        };
        pos += dir.unit() * PLAYER_SPEED;
        moving = true;
        direction = dir;
    }

    state.player.pos = state.map.clamp_inset(pos, PLAYER_HALF_EXTENT);
    state.player.moving = moving;
    state.player.direction = direction;
    state.camera = camera_for(state.player.pos, &state.viewport, &state.map);
}
