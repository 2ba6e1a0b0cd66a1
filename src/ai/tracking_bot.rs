// Tracking bot - follows the ball center with a dead-zone

use super::Bot;
use crate::game::{GameState, PaddleMove};

pub const AI_DEAD_ZONE: i32 = 10;

/// Bang-bang controller that chases the ball's vertical center
///
/// - Moves down when the ball center is more than the dead-zone below the paddle center
/// - Moves up when it is more than the dead-zone above
/// - Holds otherwise, which keeps the paddle from jittering around the ball
pub struct TrackingBot {
    name: String,
    dead_zone: i32,
}

impl TrackingBot {
    pub fn new() -> Self {
        Self {
            name: "Tracker".to_string(),
            dead_zone: AI_DEAD_ZONE,
        }
    }
}

impl Bot for TrackingBot {
    fn get_action(&mut self, game_state: &GameState) -> Option<PaddleMove> {
        let paddle_center_y = game_state.opponent.rect.center_y();
        let ball_center_y = game_state.ball.rect.center_y();

        if paddle_center_y < ball_center_y - self.dead_zone {
            Some(PaddleMove::Down)
        } else if paddle_center_y > ball_center_y + self.dead_zone {
            Some(PaddleMove::Up)
        } else {
            None
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
