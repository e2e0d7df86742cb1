// Gamepad layout profiles - button and axis indices per controller family

/// Xbox 360 controller as reported by common desktop drivers
pub mod xbox360 {
    pub const A: u32 = 0;
    pub const B: u32 = 1;
    pub const X: u32 = 2;
    pub const Y: u32 = 3;
    pub const LB: u32 = 4;
    pub const RB: u32 = 5;
    pub const BACK: u32 = 6;
    pub const START: u32 = 7;
    pub const LS: u32 = 8;
    pub const RS: u32 = 9;

    pub const BUTTON_COUNT: u32 = 10;

    // The left stick reports vertical before horizontal
    pub const STICK_LEFT_VERTICAL: u32 = 0;
    pub const STICK_LEFT_HORIZONTAL: u32 = 1;
    pub const STICK_RIGHT_HORIZONTAL: u32 = 2;
    pub const STICK_RIGHT_VERTICAL: u32 = 3;
    /// Both triggers on one axis: left positive, right negative
    pub const TRIGGERS: u32 = 4;

    pub const AXIS_COUNT: u32 = 5;
}

#[cfg(test)]
mod tests {
    use super::xbox360;

    #[test]
    fn test_xbox360_indices_are_unique() {
        let buttons = [
            xbox360::A,
            xbox360::B,
            xbox360::X,
            xbox360::Y,
            xbox360::LB,
            xbox360::RB,
            xbox360::BACK,
            xbox360::START,
            xbox360::LS,
            xbox360::RS,
        ];
        for (i, button) in buttons.iter().enumerate() {
            assert!(*button < xbox360::BUTTON_COUNT);
            assert!(!buttons[i + 1..].contains(button));
        }

        let axes = [
            xbox360::STICK_LEFT_VERTICAL,
            xbox360::STICK_LEFT_HORIZONTAL,
            xbox360::STICK_RIGHT_HORIZONTAL,
            xbox360::STICK_RIGHT_VERTICAL,
            xbox360::TRIGGERS,
        ];
        for (i, axis) in axes.iter().enumerate() {
            assert!(*axis < xbox360::AXIS_COUNT);
            assert!(!axes[i + 1..].contains(axis));
        }
    }
}
