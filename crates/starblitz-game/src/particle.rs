// particle.rs -- common accessor contract for every particle kind
//
// The behavior side (reset/advance) is inherent to each variant struct,
// since the context each kind needs differs; what every kind shares is a
// stable slot in the mesh and a transform the scheduler writes back after
// each advance. The variant set is closed at compile time: star, trail,
// player marker, bullet, ufo.

/// Read side of a particle, consumed by `MeshBuffer::write` after each
/// advance.
pub trait Particle {
    /// Stable quad slot, assigned once at pool allocation.
    fn slot(&self) -> usize;
    fn x(&self) -> f32;
    fn y(&self) -> f32;
    fn size(&self) -> f32;
}
