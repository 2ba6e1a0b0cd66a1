// Bot trait for the scripted opponent

use crate::game::{GameState, PaddleMove};

/// Trait for AI paddle controllers
///
/// A bot looks at the current game state once per tick and decides whether
/// the opponent paddle should move. Movement speed and clamping are applied
/// by the physics step, so bots only pick a direction.
pub trait Bot {
    /// Decide which way the opponent paddle moves this tick
    ///
    /// # Returns
    /// * `Some(PaddleMove)` - Direction to move
    /// * `None` - Hold position
    fn get_action(&mut self, game_state: &GameState) -> Option<PaddleMove>;

    /// Bot name for logging
    fn name(&self) -> &str;
}
