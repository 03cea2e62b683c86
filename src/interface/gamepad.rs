use gilrs::{EventType, Gilrs};

use crate::domain::{Button, ButtonEvent, ButtonState, GamepadState};

/// Polls the system gamepad layer and feeds state changes into a
/// [`GamepadState`]. Construction fails quietly when no input backend is
/// available, which is normal on headless builds.
pub struct GamepadBackend {
    gilrs: Gilrs,
}

impl GamepadBackend {
    pub fn new() -> Option<Self> {
        Gilrs::new().ok().map(|gilrs| Self { gilrs })
    }

    /// Drains all pending events into the state. Unmapped buttons are
    /// dropped.
    pub fn pump(&mut self, state: &mut GamepadState) {
        while let Some(event) = self.gilrs.next_event() {
            if let Some(button_event) = translate(event.event) {
                state.apply(button_event);
            }
        }
    }
}

fn translate(event: EventType) -> Option<ButtonEvent> {
    match event {
        EventType::ButtonPressed(button, _) => edge(button, ButtonState::Pressed),
        EventType::ButtonReleased(button, _) => edge(button, ButtonState::Released),
        _ => None,
    }
}

fn edge(button: gilrs::Button, state: ButtonState) -> Option<ButtonEvent> {
    map_button(button).map(|button| ButtonEvent { button, state })
}

fn map_button(button: gilrs::Button) -> Option<Button> {
    match button {
        gilrs::Button::DPadUp => Some(Button::Up),
        gilrs::Button::DPadDown => Some(Button::Down),
        gilrs::Button::DPadLeft => Some(Button::Left),
        gilrs::Button::DPadRight => Some(Button::Right),
        gilrs::Button::South => Some(Button::A),
        gilrs::Button::East => Some(Button::B),
        gilrs::Button::West => Some(Button::Y),
        gilrs::Button::North => Some(Button::X),
        gilrs::Button::LeftTrigger => Some(Button::L),
        gilrs::Button::RightTrigger => Some(Button::R),
        gilrs::Button::Start => Some(Button::Start),
        gilrs::Button::Select => Some(Button::Select),
        gilrs::Button::Mode => Some(Button::Power),
        _ => None,
    }
}
