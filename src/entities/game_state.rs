#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Waiting on the play button
    Menu,
    Playing,
    Paused,
    GameOver,
}
