mod button;

pub use button::Button;

use crate::application::{Command, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::domain::{Board, SIDE};

// Board geometry in logical pixels
pub const BOARD_SIZE: f32 = 300.0;
pub const CELL_SIZE: f32 = BOARD_SIZE / SIDE as f32;
pub const BOARD_X: f32 = (LOGICAL_WIDTH - BOARD_SIZE) / 2.0;
pub const BOARD_Y: f32 = (LOGICAL_HEIGHT - BOARD_SIZE) / 2.0;

pub const BUTTON_WIDTH: f32 = 140.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
const BUTTON_Y: f32 = BOARD_Y + BOARD_SIZE + 20.0;

/// Map a logical point to the board cell under it.
///
/// The board rectangle is half-open so its far edges belong to the
/// neighbouring space, never to a tenth cell.
pub fn cell_at(x: f32, y: f32) -> Option<usize> {
    let inside = |v: f32, origin: f32| v >= origin && v < origin + BOARD_SIZE;
    if !inside(x, BOARD_X) || !inside(y, BOARD_Y) {
        return None;
    }

    let col = (((x - BOARD_X) / CELL_SIZE) as usize).min(SIDE - 1);
    let row = (((y - BOARD_Y) / CELL_SIZE) as usize).min(SIDE - 1);
    Some(Board::index(row, col))
}

/// Center of a cell in logical coordinates
pub fn cell_center(row: usize, col: usize) -> (f32, f32) {
    (
        BOARD_X + col as f32 * CELL_SIZE + CELL_SIZE / 2.0,
        BOARD_Y + row as f32 * CELL_SIZE + CELL_SIZE / 2.0,
    )
}

/// Create the two action buttons below the board
pub fn create_buttons() -> Vec<Button> {
    vec![
        Button::new(BOARD_X, BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT, "New Game", Command::NewGame),
        Button::new(
            BOARD_X + BOARD_SIZE - BUTTON_WIDTH,
            BUTTON_Y,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
            "Reset Scores",
            Command::ResetScores,
        ),
    ]
}
