use super::GameSession;
use crate::storage::Store;

/// An action requested by the player during a frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play the cell at this index
    Move(usize),
    NewGame,
    ResetScores,
    /// Leave the redraw loop
    Quit,
}

/// Start/stop handle for the redraw loop.
///
/// `main` keeps drawing while the handle is running; tests call `step`
/// directly to run single frames without a window.
#[derive(Debug, Default)]
pub struct FrameLoop {
    running: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Number of frames stepped so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Apply one frame's commands to the session, in order.
    /// Does nothing once the loop is stopped.
    pub fn step<S: Store>(&mut self, session: &mut GameSession<S>, commands: &[Command]) {
        if !self.running {
            return;
        }

        for command in commands {
            match *command {
                Command::Move(index) => {
                    session.apply_move(index);
                }
                Command::NewGame => session.new_game(),
                Command::ResetScores => session.reset_scores(),
                Command::Quit => {
                    log::info!("Quit requested after {} frames", self.frames);
                    self.stop();
                    break;
                }
            }
        }
        self.frames += 1;
    }
}
