use macroquad::prelude::*;

use crate::application::{GameSession, Layout, LOGICAL_HEIGHT, LOGICAL_WIDTH};
use crate::domain::{Board, Cell, Game, MatchHistory, Outcome, ScoreTally};
use crate::storage::Store;
use crate::ui::{cell_center, Button, BOARD_SIZE, BOARD_X, BOARD_Y, CELL_SIZE};

const GRID_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.3);
const X_COLOR: Color = Color::new(0.231, 0.510, 0.965, 1.0); // #3B82F6
const O_COLOR: Color = Color::new(0.937, 0.267, 0.267, 1.0); // #EF4444
const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.9);
const HINT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.7);
const BACKGROUND: Color = Color::new(0.06, 0.07, 0.10, 1.0);
const SURFACE: Color = Color::new(0.09, 0.10, 0.14, 1.0);

const MARK_WIDTH: f32 = 8.0;
const X_ARM: f32 = 30.0;
const O_RADIUS: f32 = 35.0;
const RECENT_RESULTS: usize = 5;

/// Text shown around the board for the current state
#[derive(Debug, PartialEq, Eq)]
pub struct HudText {
    pub status: String,
    pub scores: [String; 4],
    pub instruction: &'static str,
    pub recent: String,
}

impl HudText {
    pub fn new(game: &Game, tally: &ScoreTally, history: &MatchHistory) -> Self {
        let status = match game.outcome() {
            Outcome::InProgress => format!("Current Player: {}", game.turn().symbol()),
            Outcome::Won(player) => format!("{} Wins!", player.symbol()),
            Outcome::Draw => "It's a Draw!".to_string(),
        };
        let instruction = if game.outcome().is_terminal() {
            "Click \"New Game\" to play again"
        } else {
            "Click on the grid to make your move"
        };
        let recent = history
            .recent(RECENT_RESULTS)
            .map(|record| record.result.short())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            status,
            scores: [
                format!("X Wins: {}", tally.x_wins),
                format!("O Wins: {}", tally.o_wins),
                format!("Draws: {}", tally.draws),
                format!("Games: {}", tally.games_played),
            ],
            instruction,
            recent,
        }
    }
}

/// Draw one full frame of the session
pub fn draw_frame<S: Store>(
    session: &GameSession<S>,
    layout: &Layout,
    buttons: &[Button],
    pointer: Option<(f32, f32)>,
) {
    clear_background(BACKGROUND);
    let (sx, sy) = layout.to_screen(0.0, 0.0);
    let (w, h) = layout.display_size();
    draw_rectangle(sx, sy, w, h, SURFACE);

    draw_board(session.game().board(), layout);
    let hud = HudText::new(session.game(), session.tally(), session.history());
    draw_hud(&hud, layout);
    buttons.iter().for_each(|button| button.draw(layout, pointer));
}

/// Draw the grid, the marks, and a strike through a winning line
pub fn draw_board(board: &Board, layout: &Layout) {
    let line = |x1: f32, y1: f32, x2: f32, y2: f32, width: f32, color: Color| {
        let (ax, ay) = layout.to_screen(x1, y1);
        let (bx, by) = layout.to_screen(x2, y2);
        draw_line(ax, ay, bx, by, layout.scaled(width), color);
    };

    for i in 1..3 {
        let offset = i as f32 * CELL_SIZE;
        line(BOARD_X + offset, BOARD_Y, BOARD_X + offset, BOARD_Y + BOARD_SIZE, 3.0, GRID_COLOR);
        line(BOARD_X, BOARD_Y + offset, BOARD_X + BOARD_SIZE, BOARD_Y + offset, 3.0, GRID_COLOR);
    }

    for (row, col, cell) in board.iter_cells() {
        let (x, y) = cell_center(row, col);
        match cell {
            Cell::X => {
                line(x - X_ARM, y - X_ARM, x + X_ARM, y + X_ARM, MARK_WIDTH, X_COLOR);
                line(x + X_ARM, y - X_ARM, x - X_ARM, y + X_ARM, MARK_WIDTH, X_COLOR);
            }
            Cell::O => {
                let (cx, cy) = layout.to_screen(x, y);
                draw_circle_lines(cx, cy, layout.scaled(O_RADIUS), layout.scaled(MARK_WIDTH), O_COLOR);
            }
            Cell::Empty => {}
        }
    }

    if let Some((_, [first, _, last])) = board.winning_line() {
        let (ar, ac) = Board::position(first);
        let (br, bc) = Board::position(last);
        let (x1, y1) = cell_center(ar, ac);
        let (x2, y2) = cell_center(br, bc);
        line(x1, y1, x2, y2, 4.0, Color::new(1.0, 1.0, 1.0, 0.6));
    }
}

/// Helper to draw text at a logical position
fn draw_text_label(text: &str, x: f32, y: f32, size: f32, color: Color, layout: &Layout) {
    let (sx, sy) = layout.to_screen(x, y);
    draw_text(text, sx, sy, layout.scaled(size), color);
}

/// Same as `draw_text_label`, centered horizontally on `x`
fn draw_centered_label(text: &str, x: f32, y: f32, size: f32, color: Color, layout: &Layout) {
    let width = measure_text(text, None, size as u16, 1.0).width;
    draw_text_label(text, x - width / 2.0, y, size, color, layout);
}

/// Draw the status line, tallies, instruction, and recent results
pub fn draw_hud(hud: &HudText, layout: &Layout) {
    draw_centered_label(&hud.status, LOGICAL_WIDTH / 2.0, 60.0, 24.0, TEXT_COLOR, layout);

    hud.scores.iter().enumerate().for_each(|(i, text)| {
        draw_text_label(text, 20.0, 30.0 + i as f32 * 25.0, 18.0, TEXT_COLOR, layout);
    });

    draw_centered_label(hud.instruction, LOGICAL_WIDTH / 2.0, LOGICAL_HEIGHT - 30.0, 16.0, HINT_COLOR, layout);

    if !hud.recent.is_empty() {
        let right = LOGICAL_WIDTH - 20.0;
        let title_width = measure_text("Recent", None, 18, 1.0).width;
        let recent_width = measure_text(&hud.recent, None, 18, 1.0).width;
        draw_text_label("Recent", right - title_width, 30.0, 18.0, TEXT_COLOR, layout);
        draw_text_label(&hud.recent, right - recent_width, 55.0, 18.0, HINT_COLOR, layout);
    }
}
