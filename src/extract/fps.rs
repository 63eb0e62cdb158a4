//! Playback rate lookup per action.

/// Rate used when an action has no entry in the table.
pub const DEFAULT_FPS: u32 = 10;

/// Playback rate for an action, by exact name match.
pub fn fps_for_action(action: &str) -> u32 {
    match action {
        "Idle" => 8,
        "Walk" => 12,
        "Run" => 15,
        "Jump" => 10,
        "Attack" | "Attack_1" | "Attack_2" | "Attack_3" => 15,
        "Run_Attack" | "Walk_Attack" => 15,
        "Shield" => 6,
        "Hurt" => 12,
        "Death" | "Dead" => 8,
        _ => DEFAULT_FPS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_actions() {
        assert_eq!(fps_for_action("Idle"), 8);
        assert_eq!(fps_for_action("Run_Attack"), 15);
        assert_eq!(fps_for_action("Shield"), 6);
    }

    #[test]
    fn test_unknown_action_defaults() {
        assert_eq!(fps_for_action("Teleport"), DEFAULT_FPS);
        assert_eq!(fps_for_action(""), DEFAULT_FPS);
    }

    #[test]
    fn test_match_is_exact() {
        // Case and partial matches fall through to the default.
        assert_eq!(fps_for_action("idle"), DEFAULT_FPS);
        assert_eq!(fps_for_action("Attack_4"), DEFAULT_FPS);
    }
}
