// events.rs -- per-tick simulation events for the frontend

/// Events emitted by one tick, in emission order. The frontend drains them
/// after `World::update` and maps them onto the audio collaborator (see
/// `snd::play_frame_sounds`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// A bullet activated this tick.
    Fired,
    /// An ufo was destroyed by the player's body or a bullet.
    UfoDown,
}
