//! Held-key tracking
//!
//! The platform glue feeds raw key identifiers in as they arrive; the
//! simulation only samples the held set at tick boundaries.

use std::collections::HashSet;

/// One of the four movement bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBinding {
    Left,
    Right,
    Up,
    Down,
}

impl MoveBinding {
    /// Evaluation order for movement. Later bindings win the facing direction.
    pub const ORDER: [MoveBinding; 4] = [
        MoveBinding::Left,
        MoveBinding::Right,
        MoveBinding::Up,
        MoveBinding::Down,
    ];

    /// Key identifiers (both letter cases plus the arrow key) for this binding
    pub fn keys(&self) -> &'static [&'static str] {
        match self {
            MoveBinding::Left => &["a", "A", "ArrowLeft"],
            MoveBinding::Right => &["d", "D", "ArrowRight"],
            MoveBinding::Up => &["w", "W", "ArrowUp"],
            MoveBinding::Down => &["s", "S", "ArrowDown"],
        }
    }
}

/// Set of currently held key identifiers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    held: HashSet<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// True if any alias of the binding is held
    pub fn is_held(&self, binding: MoveBinding) -> bool {
        binding.keys().iter().any(|k| self.held.contains(*k))
    }

    /// Drop everything (focus loss, restart)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Builder used by tests and scripted runs
    pub fn with_keys(keys: &[&str]) -> Self {
        let mut input = Self::new();
        for key in keys {
            input.press(key);
        }
        input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_map_to_binding() {
        for key in ["a", "A", "ArrowLeft"] {
            assert!(InputState::with_keys(&[key]).is_held(MoveBinding::Left));
        }
        let down = InputState::with_keys(&["ArrowDown"]);
        assert!(down.is_held(MoveBinding::Down));
        assert!(!InputState::with_keys(&["x"]).is_held(MoveBinding::Up));
    }

    #[test]
    fn test_release_one_alias_keeps_other() {
        let mut input = InputState::with_keys(&["a", "A"]);
        input.release("A");
        assert!(input.is_held(MoveBinding::Left));
        input.release("a");
        assert!(!input.is_held(MoveBinding::Left));
    }

    #[test]
    fn test_clear() {
        let mut input = InputState::with_keys(&["w", "d"]);
        input.clear();
        assert!(MoveBinding::ORDER.iter().all(|b| !input.is_held(*b)));
    }
}
