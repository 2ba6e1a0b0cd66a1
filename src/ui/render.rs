use super::renderer::{Palette, Point, Renderer};
use crate::game::state::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::game::{GameState, MatchState};

pub const SCORE_FONT_SIZE: u16 = 48;
pub const TITLE_FONT_SIZE: u16 = 72;

// Vertical layout in field units
const SCORE_Y: i32 = 20;
const GAME_OVER_Y: i32 = FIELD_HEIGHT / 2 - 60;
const PROMPT_Y: i32 = FIELD_HEIGHT / 2 + 10;

/// Draw one frame of the match. The caller presents it.
pub fn render<R: Renderer + ?Sized>(renderer: &mut R, state: &GameState, palette: &Palette) {
    renderer.clear(palette.background);

    renderer.draw_rect(state.player.rect, palette.foreground);
    renderer.draw_rect(state.opponent.rect, palette.foreground);
    renderer.draw_ellipse(state.ball.rect, palette.foreground);
    renderer.draw_line(
        Point::new(FIELD_WIDTH / 2, 0),
        Point::new(FIELD_WIDTH / 2, FIELD_HEIGHT),
        palette.foreground,
        true,
    );

    let score = format!("{}   {}", state.score.player, state.score.opponent);
    draw_centered(renderer, &score, SCORE_FONT_SIZE, palette.foreground, SCORE_Y);

    if state.state == MatchState::GameOver {
        draw_centered(renderer, "GAME OVER", TITLE_FONT_SIZE, palette.game_over, GAME_OVER_Y);
        draw_centered(
            renderer,
            "Restart? (Y/N)",
            SCORE_FONT_SIZE,
            palette.foreground,
            PROMPT_Y,
        );
    }
}

fn draw_centered<R: Renderer + ?Sized>(
    renderer: &mut R,
    text: &str,
    font_size: u16,
    color: super::Rgb,
    y: i32,
) {
    let surface = renderer.draw_text(text, font_size, color);
    let x = FIELD_WIDTH / 2 - surface.width / 2;
    renderer.blit(&surface, Point::new(x, y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::game::serve::ScriptedSigns;
    use crate::game::state::Score;
    use crate::ui::renderer::testing::{DrawOp, RecordingRenderer};
    use crate::ui::Rgb;

    fn palette() -> Palette {
        Palette::from(&DisplayConfig::default())
    }

    #[test]
    fn test_playing_frame_layout() {
        let mut signs = ScriptedSigns::new(&[1]);
        let mut state = GameState::new(&mut signs);
        state.score = Score {
            player: 2,
            opponent: 3,
        };
        let mut renderer = RecordingRenderer::default();

        render(&mut renderer, &state, &palette());

        let white = Rgb(255, 255, 255);
        assert_eq!(renderer.ops[0], DrawOp::Clear(Rgb(0, 0, 0)));
        assert_eq!(renderer.ops[1], DrawOp::Rect(state.player.rect, white));
        assert_eq!(renderer.ops[2], DrawOp::Rect(state.opponent.rect, white));
        assert_eq!(renderer.ops[3], DrawOp::Ellipse(state.ball.rect, white));
        assert_eq!(
            renderer.ops[4],
            DrawOp::Line(Point::new(400, 0), Point::new(400, 600), white, true)
        );
        // "2   3" is 5 chars * 24 units wide
        assert_eq!(
            renderer.texts(),
            vec![("2   3".to_string(), Point::new(340, 20))]
        );
    }

    #[test]
    fn test_game_over_frame_adds_prompt() {
        let mut signs = ScriptedSigns::new(&[1]);
        let mut state = GameState::new(&mut signs);
        state.state = MatchState::GameOver;
        let mut renderer = RecordingRenderer::default();

        render(&mut renderer, &state, &palette());

        let texts = renderer.texts();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[1], ("GAME OVER".to_string(), Point::new(238, 240)));
        assert_eq!(texts[2], ("Restart? (Y/N)".to_string(), Point::new(232, 310)));
        assert!(renderer
            .ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text(t, TITLE_FONT_SIZE, Rgb(255, 0, 0), _) if t == "GAME OVER")));
    }
}
