// lib.rs -- starblitz-game: fixed-pool particle simulation for the
// scrolling shooter
//
// The crate owns the whole per-frame loop: a shared quad mesh rebuilt in
// place each tick, five fixed-capacity particle pools recycled via reset,
// and the collision logic between ufos, bullets and the player. Window,
// GPU submission, audio devices and image decoding live in the frontend;
// it feeds pointer events in and consumes the vertex/index snapshot and
// the frame events coming back out.

pub mod bullet;
pub mod events;
pub mod game;
pub mod input;
pub mod mesh;
pub mod particle;
pub mod player;
pub mod snd;
pub mod star;
pub mod trail;
pub mod ufo;

pub use events::FrameEvent;
pub use game::World;
pub use input::PointerEvent;
pub use mesh::{MeshBuffer, Vertex, VERTEX_STRIDE};
pub use snd::{AudioSink, SoundClip};
