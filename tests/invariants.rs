//! Whole-run invariants under arbitrary input scripts

use fruit_survivor::consts::PLAYER_HALF_EXTENT;
use fruit_survivor::sim::{GameState, InputState, TickInput, Viewport, tick};
use proptest::prelude::*;

const KEYS: [&str; 8] = [
    "a",
    "D",
    "w",
    "S",
    "ArrowLeft",
    "ArrowRight",
    "ArrowUp",
    "ArrowDown",
];

fn keys_from_mask(mask: u8) -> InputState {
    let held: Vec<&str> = KEYS
        .iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, k)| *k)
        .collect();
    InputState::with_keys(&held)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn player_and_camera_stay_in_bounds(
        seed in any::<u64>(),
        width in 100.0f32..2000.0,
        height in 100.0f32..1400.0,
        script in prop::collection::vec((any::<u8>(), 1usize..120), 1..12),
    ) {
        let viewport = Viewport::from_window(width, height);
        let mut state = GameState::new(viewport, seed);
        let mut now = 0.0;

        for (mask, hold) in script {
            let keys = keys_from_mask(mask);
            for _ in 0..hold {
                now += 16.7;
                let prev_time = state.game_time;
                let prev_score = state.score;
                tick(&mut state, &TickInput { keys: keys.clone(), now_ms: now });

                let map = state.map;
                let p = state.player.pos;
                prop_assert!(p.x >= PLAYER_HALF_EXTENT && p.x <= map.width - PLAYER_HALF_EXTENT);
                prop_assert!(p.y >= PLAYER_HALF_EXTENT && p.y <= map.height - PLAYER_HALF_EXTENT);

                let cam = state.camera;
                prop_assert!(cam.x >= 0.0 && cam.x <= map.width - viewport.width);
                prop_assert!(cam.y >= 0.0 && cam.y <= map.height - viewport.height);

                prop_assert!(state.game_time >= prev_time);
                prop_assert!(state.score >= prev_score);
                prop_assert!(state.player.health >= 0);
                prop_assert!(state.enemies.iter().all(|e| e.health > 0));
                prop_assert!(state.projectiles.iter().all(|pr| map.contains(pr.pos)));
            }
        }
    }

    #[test]
    fn reset_twice_equals_reset_once(seed in any::<u64>(), ticks in 0usize..400) {
        let mut state = GameState::new(Viewport::from_window(1024.0, 768.0), seed);
        let keys = InputState::with_keys(&["d", "s"]);
        for i in 0..ticks {
            tick(&mut state, &TickInput { keys: keys.clone(), now_ms: i as f64 * 16.7 });
        }

        state.reset();
        let once = state.clone();
        state.reset();
        prop_assert_eq!(state, once);
    }
}
