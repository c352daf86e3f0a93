// Domain layer - Core game rules
pub mod domain;

// Persistence layer - key-value store
pub mod storage;

// Application layer - Session, layout and loop coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;

// Re-exports for convenience
pub use domain::{Board, Cell, Game, MatchHistory, Outcome, Player, ScoreTally};
pub use application::{Command, FrameLoop, GameSession, Layout};
pub use storage::{FileStore, MemoryStore, Store};
pub use config::Config;
