//! Score/UI notifications raised synchronously during `update`

/// Recorded notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// The world scrolled by this many units
    ScoreChanged(f32),
    /// The character fell out of the world; fires once per session
    GameEnded,
}

/// Receiver for score and game-over notifications
pub trait GameEvents {
    fn on_score_changed(&mut self, _delta: f32) {}
    fn on_game_ended(&mut self) {}
}

/// Discards every notification
impl GameEvents for () {}

/// Records notifications in order
impl GameEvents for Vec<GameEvent> {
    fn on_score_changed(&mut self, delta: f32) {
        self.push(GameEvent::ScoreChanged(delta));
    }

    fn on_game_ended(&mut self) {
        self.push(GameEvent::GameEnded);
    }
}
