/// Physical controls found on the target handhelds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    A,
    B,
    X,
    Y,
    L,
    R,
    Start,
    Select,
    Power,
    Hold,
}

impl Button {
    pub const COUNT: usize = 14;

    pub const ALL: [Button; Button::COUNT] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::A,
        Button::B,
        Button::X,
        Button::Y,
        Button::L,
        Button::R,
        Button::Start,
        Button::Select,
        Button::Power,
        Button::Hold,
    ];

    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
            Button::A => 4,
            Button::B => 5,
            Button::X => 6,
            Button::Y => 7,
            Button::L => 8,
            Button::R => 9,
            Button::Start => 10,
            Button::Select => 11,
            Button::Power => 12,
            Button::Hold => 13,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    #[default]
    Released,
    Pressed,
}

/// A state change reported by the platform input backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonEvent {
    pub button: Button,
    pub state: ButtonState,
}

/// Current and previous state per button. The previous snapshot is refreshed
/// per queried button, not globally: every `check_press` or `check_release`
/// call copies the current state of that one button into the previous slot
/// after testing, so each edge is observed exactly once per query site.
#[derive(Debug, Clone, Default)]
pub struct GamepadState {
    current: [ButtonState; Button::COUNT],
    previous: [ButtonState; Button::COUNT],
}

impl GamepadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ButtonEvent) {
        self.current[event.button.index()] = event.state;
    }

    pub fn state(&self, button: Button) -> ButtonState {
        self.current[button.index()]
    }

    /// True exactly once per released-to-pressed transition.
    pub fn check_press(&mut self, button: Button) -> bool {
        let index = button.index();
        let pressed = self.current[index] == ButtonState::Pressed
            && self.previous[index] == ButtonState::Released;
        self.previous[index] = self.current[index];
        pressed
    }

    /// True exactly once per pressed-to-released transition.
    pub fn check_release(&mut self, button: Button) -> bool {
        let index = button.index();
        let released = self.current[index] == ButtonState::Released
            && self.previous[index] == ButtonState::Pressed;
        self.previous[index] = self.current[index];
        released
    }

    /// Level-triggered: true for as long as the button stays down.
    pub fn check_hold(&self, button: Button) -> bool {
        self.current[button.index()] == ButtonState::Pressed
    }
}

#[cfg(test)]
mod tests {
    use super::{Button, ButtonEvent, ButtonState, GamepadState};

    fn press(button: Button) -> ButtonEvent {
        ButtonEvent {
            button,
            state: ButtonState::Pressed,
        }
    }

    fn release(button: Button) -> ButtonEvent {
        ButtonEvent {
            button,
            state: ButtonState::Released,
        }
    }

    #[test]
    fn press_edge_fires_once() {
        let mut pad = GamepadState::new();
        pad.apply(press(Button::A));

        assert!(pad.check_press(Button::A));
        assert!(!pad.check_press(Button::A));
    }

    #[test]
    fn press_edge_fires_again_after_release() {
        let mut pad = GamepadState::new();
        pad.apply(press(Button::Start));
        assert!(pad.check_press(Button::Start));

        pad.apply(release(Button::Start));
        assert!(!pad.check_press(Button::Start));

        pad.apply(press(Button::Start));
        assert!(pad.check_press(Button::Start));
    }

    #[test]
    fn release_edge_fires_once() {
        let mut pad = GamepadState::new();
        pad.apply(press(Button::B));
        assert!(pad.check_press(Button::B));

        pad.apply(release(Button::B));
        assert!(pad.check_release(Button::B));
        assert!(!pad.check_release(Button::B));
    }

    #[test]
    fn hold_is_level_triggered() {
        let mut pad = GamepadState::new();
        pad.apply(press(Button::Left));

        assert!(pad.check_hold(Button::Left));
        assert!(pad.check_hold(Button::Left));

        pad.apply(release(Button::Left));
        assert!(!pad.check_hold(Button::Left));
    }

    #[test]
    fn queries_track_buttons_independently() {
        let mut pad = GamepadState::new();
        pad.apply(press(Button::Up));
        pad.apply(press(Button::Down));

        // Consuming Up's edge must not consume Down's.
        assert!(pad.check_press(Button::Up));
        assert!(pad.check_press(Button::Down));
    }

    #[test]
    fn release_without_prior_press_query_still_fires() {
        // check_release only needs the previous slot to hold Pressed, which
        // check_press's snapshot copy provides.
        let mut pad = GamepadState::new();
        pad.apply(press(Button::R));
        pad.check_press(Button::R);
        pad.apply(release(Button::R));

        assert!(pad.check_release(Button::R));
    }
}
