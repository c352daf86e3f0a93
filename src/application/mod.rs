mod session;
mod layout;
mod frame_loop;

pub use session::{system_clock, Clock, GameSession};
pub use layout::{Layout, LOGICAL_HEIGHT, LOGICAL_WIDTH};
pub use frame_loop::{Command, FrameLoop};
