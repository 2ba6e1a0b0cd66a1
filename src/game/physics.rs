use super::serve::SignSource;
use super::state::{GameState, MatchState, Paddle, Side, FIELD_HEIGHT, FIELD_WIDTH};
use crate::ai::Bot;

pub const PADDLE_SPEED: i32 = 6;
pub const AI_SPEED: i32 = 5;

/// Held-key state for the player paddle this tick
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleMove {
    Up,
    Down,
}

/// Things that happened during a tick; each one rings a tone cue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PhysicsEvents {
    pub wall_collision: bool,
    pub paddle_collisions: u8,
    pub goal: Option<Side>,
    pub game_over: bool,
}

impl PhysicsEvents {
    pub fn any(&self) -> bool {
        self.cue_count() > 0
    }

    /// Number of tone cues to trigger for this tick
    pub fn cue_count(&self) -> usize {
        usize::from(self.wall_collision)
            + usize::from(self.paddle_collisions)
            + usize::from(self.goal.is_some())
    }
}

/// Advance the match by one fixed step. Does nothing unless the match is being played.
pub fn update(
    state: &mut GameState,
    input: PaddleInput,
    bot: &mut dyn Bot,
    signs: &mut dyn SignSource,
) -> PhysicsEvents {
    let mut events = PhysicsEvents::default();
    if !state.is_playing() {
        return events;
    }

    move_player(&mut state.player, input);

    let ai_move = bot.get_action(state);
    move_opponent(&mut state.opponent, ai_move);

    // Truncate toward zero before stepping the integer rect
    state.ball.rect.x += state.ball.velocity.x as i32;
    state.ball.rect.y += state.ball.velocity.y as i32;

    // No positional correction against walls: the ball may clip by one step
    if state.ball.rect.top() <= 0 || state.ball.rect.bottom() >= FIELD_HEIGHT {
        state.ball.velocity.y = -state.ball.velocity.y;
        events.wall_collision = true;
    }

    events.paddle_collisions = check_paddle_collisions(state);

    if state.ball.rect.left() <= 0 {
        score_goal(state, Side::Opponent, signs);
        events.goal = Some(Side::Opponent);
    } else if state.ball.rect.right() >= FIELD_WIDTH {
        score_goal(state, Side::Player, signs);
        events.goal = Some(Side::Player);
    }

    if state.score.winner().is_some() {
        state.state = MatchState::GameOver;
        events.game_over = true;
    }

    events
}

/// Up and down are independent adjustments; holding both cancels out.
fn move_player(paddle: &mut Paddle, input: PaddleInput) {
    if input.up {
        paddle.rect.y -= PADDLE_SPEED;
    }
    if input.down {
        paddle.rect.y += PADDLE_SPEED;
    }
    paddle.clamp();
}

fn move_opponent(paddle: &mut Paddle, action: Option<PaddleMove>) {
    match action {
        Some(PaddleMove::Up) => paddle.rect.y -= AI_SPEED,
        Some(PaddleMove::Down) => paddle.rect.y += AI_SPEED,
        None => {}
    }
    paddle.clamp();
}

// A hit only counts while the ball travels toward the paddle, so an
// overlap left over from the previous reflection cannot bounce it back.
fn check_paddle_collisions(state: &mut GameState) -> u8 {
    let mut hits = 0;
    let ball = &mut state.ball;

    if ball.rect.overlaps(&state.player.rect) && ball.velocity.x < 0.0 {
        ball.rect.set_left(state.player.rect.right());
        ball.velocity.x = -ball.velocity.x;
        hits += 1;
    }

    if ball.rect.overlaps(&state.opponent.rect) && ball.velocity.x > 0.0 {
        ball.rect.set_right(state.opponent.rect.left());
        ball.velocity.x = -ball.velocity.x;
        hits += 1;
    }

    hits
}

fn score_goal(state: &mut GameState, scorer: Side, signs: &mut dyn SignSource) {
    match scorer {
        Side::Player => state.score.player += 1,
        Side::Opponent => state.score.opponent += 1,
    }
    state.reset_positions(signs);
}
