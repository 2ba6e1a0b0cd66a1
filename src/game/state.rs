use super::serve::SignSource;

// Logical field, independent of the terminal the game is drawn on
pub const FIELD_WIDTH: i32 = 800;
pub const FIELD_HEIGHT: i32 = 600;

pub const PADDLE_WIDTH: i32 = 10;
pub const PADDLE_HEIGHT: i32 = 100;
pub const PADDLE_MARGIN: i32 = 20; // Gap between the field edge and the player paddle
pub const BALL_SIZE: i32 = 15;

pub const BALL_SPEED: f32 = 5.0;
pub const WIN_SCORE: u32 = 5;

/// Integer axis-aligned rectangle in field units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.w / 2
    }

    pub fn center_y(&self) -> i32 {
        self.y + self.h / 2
    }

    pub fn set_left(&mut self, left: i32) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: i32) {
        self.x = right - self.w;
    }

    pub fn set_center_y(&mut self, center_y: i32) {
        self.y = center_y - self.h / 2;
    }

    pub fn set_center(&mut self, center_x: i32, center_y: i32) {
        self.x = center_x - self.w / 2;
        self.set_center_y(center_y);
    }

    /// Strict overlap: rectangles that only share an edge do not collide.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    pub velocity: Velocity,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(
                FIELD_WIDTH / 2 - BALL_SIZE / 2,
                FIELD_HEIGHT / 2 - BALL_SIZE / 2,
                BALL_SIZE,
                BALL_SIZE,
            ),
            velocity: Velocity {
                x: BALL_SPEED,
                y: BALL_SPEED,
            },
        }
    }

    /// Center the ball and pick a fresh diagonal direction (x sign first, then y).
    pub fn relaunch(&mut self, signs: &mut dyn SignSource) {
        self.rect.set_center(FIELD_WIDTH / 2, FIELD_HEIGHT / 2);
        let sx = signs.next_sign() as f32;
        let sy = signs.next_sign() as f32;
        self.velocity = Velocity {
            x: sx * BALL_SPEED,
            y: sy * BALL_SPEED,
        };
    }
}

#[derive(Debug, Clone)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    pub fn new(x: i32) -> Self {
        Self {
            rect: Rect::new(
                x,
                FIELD_HEIGHT / 2 - PADDLE_HEIGHT / 2,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }

    pub fn y(&self) -> i32 {
        self.rect.y
    }

    pub fn recenter(&mut self) {
        self.rect.set_center_y(FIELD_HEIGHT / 2);
    }

    /// Keep the paddle inside the vertical extent of the field.
    pub fn clamp(&mut self) {
        self.rect.y = self.rect.y.clamp(0, FIELD_HEIGHT - self.rect.h);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub opponent: u32,
}

impl Score {
    pub fn winner(&self) -> Option<Side> {
        if self.player >= WIN_SCORE {
            Some(Side::Player)
        } else if self.opponent >= WIN_SCORE {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Playing,
    GameOver,
    Terminated,
}

/// Discrete commands derived from key presses and quit signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    Decline,
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub player: Paddle,
    pub opponent: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub state: MatchState,
}

impl GameState {
    pub fn new(signs: &mut dyn SignSource) -> Self {
        let mut game = Self {
            player: Paddle::new(PADDLE_MARGIN),
            opponent: Paddle::new(FIELD_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH),
            ball: Ball::new(),
            score: Score::default(),
            state: MatchState::Playing,
        };
        game.reset_positions(signs);
        game
    }

    /// Center both paddles and the ball, then relaunch the ball.
    pub fn reset_positions(&mut self, signs: &mut dyn SignSource) {
        self.player.recenter();
        self.opponent.recenter();
        self.ball.relaunch(signs);
    }

    /// Reset the whole match for another round of play
    pub fn restart(&mut self, signs: &mut dyn SignSource) {
        self.score = Score::default();
        self.state = MatchState::Playing;
        self.reset_positions(signs);
    }

    pub fn is_playing(&self) -> bool {
        self.state == MatchState::Playing
    }

    pub fn is_terminated(&self) -> bool {
        self.state == MatchState::Terminated
    }

    /// Apply a discrete command. Restart and decline only mean something once
    /// the match is over; quit is honoured in every state.
    pub fn apply(&mut self, command: Command, signs: &mut dyn SignSource) {
        match (self.state, command) {
            (MatchState::Terminated, _) => {}
            (_, Command::Quit) => self.state = MatchState::Terminated,
            (MatchState::GameOver, Command::Restart) => self.restart(signs),
            (MatchState::GameOver, Command::Decline) => self.state = MatchState::Terminated,
            (MatchState::Playing, Command::Restart | Command::Decline) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::serve::ScriptedSigns;

    #[test]
    fn test_new_game_is_centered() {
        let mut signs = ScriptedSigns::new(&[1, -1]);
        let game = GameState::new(&mut signs);

        assert_eq!(game.player.rect, Rect::new(20, 250, 10, 100));
        assert_eq!(game.opponent.rect, Rect::new(770, 250, 10, 100));
        assert_eq!(game.ball.rect, Rect::new(393, 293, 15, 15));
        assert_eq!(game.ball.velocity, Velocity { x: 5.0, y: -5.0 });
        assert_eq!(game.score, Score::default());
        assert!(game.is_playing());
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Rect::new(0, 0, 10, 10);
        assert!(a.overlaps(&Rect::new(9, 9, 5, 5)));
        assert!(!a.overlaps(&Rect::new(10, 0, 5, 5)));
        assert!(!a.overlaps(&Rect::new(0, 10, 5, 5)));
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut signs = ScriptedSigns::new(&[1, 1, -1, 1]);
        let mut game = GameState::new(&mut signs);
        game.score = Score {
            player: 5,
            opponent: 3,
        };
        game.state = MatchState::GameOver;
        game.player.rect.y = 0;
        game.ball.rect.x = 700;

        game.apply(Command::Restart, &mut signs);

        assert_eq!(game.score, Score::default());
        assert_eq!(game.state, MatchState::Playing);
        assert_eq!(game.player.y(), 250);
        assert_eq!(game.opponent.y(), 250);
        assert_eq!(game.ball.rect.center_x(), FIELD_WIDTH / 2);
        assert_eq!(game.ball.rect.center_y(), FIELD_HEIGHT / 2);
        assert_eq!(game.ball.velocity, Velocity { x: -5.0, y: 5.0 });
    }

    #[test]
    fn test_commands_by_state() {
        let mut signs = ScriptedSigns::new(&[1]);
        let mut game = GameState::new(&mut signs);

        // Restart/decline are ignored mid-match
        game.apply(Command::Decline, &mut signs);
        game.apply(Command::Restart, &mut signs);
        assert_eq!(game.state, MatchState::Playing);

        game.state = MatchState::GameOver;
        game.apply(Command::Decline, &mut signs);
        assert_eq!(game.state, MatchState::Terminated);

        // Terminated is absorbing
        game.apply(Command::Restart, &mut signs);
        assert!(game.is_terminated());

        let mut game = GameState::new(&mut signs);
        game.apply(Command::Quit, &mut signs);
        assert!(game.is_terminated());
    }

    #[test]
    fn test_winner() {
        let score = Score {
            player: 4,
            opponent: 5,
        };
        assert_eq!(score.winner(), Some(Side::Opponent));
        assert_eq!(Score::default().winner(), None);
    }
}
