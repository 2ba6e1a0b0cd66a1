//! The match loop: one fixed step of input, simulation, sound and drawing
//! per iteration, until the player quits.

use std::io;

use tracing::{debug, info};

use crate::ai::{self, Bot};
use crate::audio::{AudioSink, ToneCue};
use crate::clock::Clock;
use crate::game::{self, Bindings, Command, GameState, InputSource, Side, SignSource};
use crate::ui::{self, Palette, Renderer};

/// Whether the loop should keep going after a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Loop settings resolved from the config
pub struct Settings {
    pub bindings: Bindings,
    pub palette: Palette,
    pub target_fps: u32,
}

/// Collaborators the loop drives but never waits on
pub struct Devices<R, I> {
    pub renderer: R,
    pub input: I,
    pub audio: Box<dyn AudioSink>,
    pub clock: Box<dyn Clock>,
}

pub struct MatchLoop<R: Renderer, I: InputSource> {
    state: GameState,
    bot: Box<dyn Bot>,
    signs: Box<dyn SignSource>,
    devices: Devices<R, I>,
    settings: Settings,
}

impl<R: Renderer, I: InputSource> MatchLoop<R, I> {
    pub fn new(devices: Devices<R, I>, mut signs: Box<dyn SignSource>, settings: Settings) -> Self {
        let state = GameState::new(signs.as_mut());
        let bot = ai::create_bot();
        info!(bot = bot.name(), fps = settings.target_fps, "match started");

        Self {
            state,
            bot,
            signs,
            devices,
            settings,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run until the match is terminated
    pub fn run(&mut self) -> Result<(), io::Error> {
        while self.step()? == Flow::Continue {}
        Ok(())
    }

    /// One iteration: input, commands, tick, tone cues, draw, rate cap
    pub fn step(&mut self) -> Result<Flow, io::Error> {
        let snapshot = self.devices.input.poll()?;

        for event in &snapshot.events {
            if let Some(command) = self.settings.bindings.command_for(event) {
                self.apply(command);
            }
            if self.state.is_terminated() {
                info!(
                    player = self.state.score.player,
                    opponent = self.state.score.opponent,
                    "match terminated"
                );
                return Ok(Flow::Exit);
            }
        }

        let input = self.settings.bindings.paddle_input(&snapshot);
        let events = game::update(&mut self.state, input, self.bot.as_mut(), self.signs.as_mut());

        for _ in 0..events.cue_count() {
            self.devices.audio.play(ToneCue::Beep);
        }
        if let Some(scorer) = events.goal {
            let side = match scorer {
                Side::Player => "player",
                Side::Opponent => "opponent",
            };
            debug!(
                scorer = side,
                player = self.state.score.player,
                opponent = self.state.score.opponent,
                "goal"
            );
        }
        if events.game_over {
            info!(
                player = self.state.score.player,
                opponent = self.state.score.opponent,
                "game over"
            );
        }

        ui::render(&mut self.devices.renderer, &self.state, &self.settings.palette);
        self.devices.renderer.present()?;

        self.devices.clock.tick(self.settings.target_fps);
        Ok(Flow::Continue)
    }

    fn apply(&mut self, command: Command) {
        let before = self.state.state;
        self.state.apply(command, self.signs.as_mut());
        if before != self.state.state {
            debug!(?command, from = ?before, to = ?self.state.state, "match state changed");
        }
    }
}
