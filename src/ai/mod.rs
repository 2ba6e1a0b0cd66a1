// AI module for the scripted opponent

mod bot;
mod tracking_bot;

pub use bot::Bot;
pub use tracking_bot::TrackingBot;

/// Create the opponent used for every match
pub fn create_bot() -> Box<dyn Bot> {
    Box::new(TrackingBot::new())
}
