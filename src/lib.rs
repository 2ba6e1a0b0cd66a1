//! Terminal Pong against a scripted opponent.

pub mod ai;
pub mod audio;
pub mod clock;
pub mod config;
pub mod game;
pub mod logging;
pub mod match_loop;
pub mod ui;
