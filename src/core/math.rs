// Math utilities for raw device readings

/// Zero out readings whose absolute value does not exceed the deadzone
pub fn apply_deadzone(value: f32, deadzone: f32) -> f32 {
    if value.abs() <= deadzone {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_deadzone() {
        assert_eq!(apply_deadzone(0.05, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.1, 0.1), 0.0);
        assert_eq!(apply_deadzone(-0.4, 0.1), -0.4);
        assert_eq!(apply_deadzone(0.0, 0.0), 0.0);
        assert_eq!(apply_deadzone(0.01, 0.0), 0.01);
    }

    #[test]
    fn test_apply_deadzone_after_range_clamp() {
        // Out-of-range readings are clamped by the caller first
        assert_eq!(apply_deadzone(1.7f32.clamp(-1.0, 1.0), 0.1), 1.0);
        assert_eq!(apply_deadzone((-3.0f32).clamp(-1.0, 1.0), 0.1), -1.0);
    }
}
