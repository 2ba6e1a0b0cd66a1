pub mod input;
pub mod physics;
pub mod serve;
pub mod state;

pub use input::{Bindings, InputEvent, InputSnapshot, InputSource, Key, TerminalInput};
pub use physics::{update, PaddleInput, PaddleMove, PhysicsEvents};
pub use serve::{RandomSigns, SignSource};
pub use state::{Command, GameState, MatchState, Rect, Side};
