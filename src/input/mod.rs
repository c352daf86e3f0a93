use macroquad::prelude::*;

use crate::application::{Command, Layout};
use crate::ui::{cell_at, Button};

/// Keys and the command each one triggers
const KEY_ACTIONS: [(KeyCode, Command); 3] = [
    (KeyCode::R, Command::NewGame),
    (KeyCode::C, Command::ResetScores),
    (KeyCode::Escape, Command::Quit),
];

/// Raw input captured for one frame
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Window position of a left click this frame
    pub click: Option<(f32, f32)>,
    /// Commands from keys pressed this frame
    pub key_commands: Vec<Command>,
}

/// Read this frame's mouse and keyboard state from macroquad
pub fn poll() -> FrameInput {
    let click = is_mouse_button_pressed(MouseButton::Left).then(mouse_position);
    let key_commands = KEY_ACTIONS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect();
    FrameInput { click, key_commands }
}

/// Translate a click into a command: a button press, a board move, or nothing
pub fn process_click(
    click: (f32, f32),
    layout: &Layout,
    buttons: &[Button],
) -> Option<Command> {
    let point = layout.to_logical(click.0, click.1)?;
    buttons
        .iter()
        .find(|button| button.is_hovered(point))
        .map(Button::action)
        .or_else(|| cell_at(point.0, point.1).map(Command::Move))
}

/// Turn one frame of raw input into commands, keys first
pub fn process_input(input: &FrameInput, layout: &Layout, buttons: &[Button]) -> Vec<Command> {
    input
        .key_commands
        .iter()
        .copied()
        .chain(input.click.and_then(|click| process_click(click, layout, buttons)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{create_buttons, cell_center, BOARD_X, BOARD_Y};

    #[test]
    fn test_click_on_cell_at_native_scale() {
        let layout = Layout::default();
        let (x, y) = cell_center(0, 2);
        assert_eq!(process_click((x, y), &layout, &create_buttons()), Some(Command::Move(2)));
    }

    #[test]
    fn test_click_is_scaled_to_logical() {
        // half-size surface, letterboxed vertically by 165px
        let layout = Layout::fit(480.0, 600.0, 1.0);
        let (x, y) = cell_center(2, 1);
        let (sx, sy) = layout.to_screen(x, y);
        assert_eq!(process_click((sx, sy), &layout, &create_buttons()), Some(Command::Move(7)));
    }

    #[test]
    fn test_click_outside_board_is_ignored() {
        let layout = Layout::default();
        let buttons = create_buttons();
        assert_eq!(process_click((BOARD_X - 5.0, BOARD_Y + 5.0), &layout, &buttons), None);
        assert_eq!(process_click((5.0, 5.0), &layout, &buttons), None);

        let letterboxed = Layout::fit(480.0, 600.0, 1.0);
        assert_eq!(process_click((240.0, 10.0), &letterboxed, &buttons), None);
    }

    #[test]
    fn test_click_on_button() {
        let layout = Layout::default();
        let buttons = create_buttons();
        let reset = &buttons[1];
        let hit = (BOARD_X + 300.0 - 10.0, BOARD_Y + 300.0 + 30.0);
        assert!(reset.is_hovered(hit));
        assert_eq!(process_click(hit, &layout, &buttons), Some(Command::ResetScores));
    }

    #[test]
    fn test_process_input_orders_keys_before_click() {
        let layout = Layout::default();
        let (x, y) = cell_center(1, 1);
        let input = FrameInput {
            click: Some((x, y)),
            key_commands: vec![Command::NewGame],
        };
        assert_eq!(
            process_input(&input, &layout, &create_buttons()),
            vec![Command::NewGame, Command::Move(4)]
        );
    }

    #[test]
    fn test_empty_frame_has_no_commands() {
        let layout = Layout::default();
        assert!(process_input(&FrameInput::default(), &layout, &create_buttons()).is_empty());
    }
}
