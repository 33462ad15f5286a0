// input.rs -- pointer/touch events delivered by the input collaborator
//
// Coordinates are scene units, same space the particles move in. The
// frontend translates whatever raw device events it captures into these
// before each tick.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Press: moves the player and starts firing with the cooldown cleared.
    Down { x: f32, y: f32 },
    /// Drag: moves the player only.
    Move { x: f32, y: f32 },
    /// Release: stops firing.
    Up,
}
