// mesh.rs -- shared quad mesh owned by the geometry buffer manager
//
// One flat vertex array and one flat index array back every particle on
// screen. Quads are handed out once during setup, one slot per particle,
// and only rewritten in place afterwards; the arrays never grow once the
// buffer is sealed.

use std::ops::Range;

use starblitz_common::atlas::UvMapping;

use crate::particle::Particle;

/// Floats per vertex: center (2), scale (1), corner offset (2), UV (2).
/// This is the attribute layout the render backend binds.
pub const VERTEX_STRIDE: usize = 7;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub center: [f32; 2],
    pub scale: f32,
    pub offset: [f32; 2],
    pub uv: [f32; 2],
}

/// Geometry buffer manager. Exclusively owns the vertex and index arrays;
/// everything else goes through `alloc_quads` / `set_transform` /
/// `snapshot`.
pub struct MeshBuffer {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    quad_capacity: usize,
    sealed: bool,
}

impl MeshBuffer {
    /// Preallocates room for exactly `quads` quads. All pool sizes are
    /// known constants at startup, so there is no growth path.
    pub fn with_capacity(quads: usize) -> MeshBuffer {
        MeshBuffer {
            vertices: Vec::with_capacity(4 * quads),
            indices: Vec::with_capacity(6 * quads),
            quad_capacity: quads,
            sealed: false,
        }
    }

    /// Float offset of a slot's first vertex within the flat array.
    pub fn base(slot: usize) -> usize {
        4 * slot * VERTEX_STRIDE
    }

    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 4
    }

    /// Appends `count` quads for one sprite and returns their slot range.
    /// Setup-phase only: allocating after `seal`, or past the capacity
    /// given at construction, is a programming error.
    pub fn alloc_quads(&mut self, count: usize, uv: &UvMapping) -> Range<usize> {
        assert!(!self.sealed, "alloc_quads called after setup was sealed");
        let first = self.quad_count();
        assert!(
            first + count <= self.quad_capacity,
            "quad capacity exceeded: {} + {} > {}",
            first,
            count,
            self.quad_capacity
        );

        for slot in first..first + count {
            let j = (4 * slot) as u16;
            self.indices
                .extend_from_slice(&[j, j + 1, j + 2, j + 2, j + 3, j]);

            // Counter-clockwise from bottom-left; v runs bottom-up.
            let corners = [
                [-uv.su, -uv.sv, uv.u0, uv.v1],
                [uv.su, -uv.sv, uv.u1, uv.v1],
                [uv.su, uv.sv, uv.u1, uv.v0],
                [-uv.su, uv.sv, uv.u0, uv.v0],
            ];
            for [ox, oy, u, v] in corners {
                self.vertices.push(Vertex {
                    center: [0.0, 0.0],
                    scale: 1.0,
                    offset: [ox, oy],
                    uv: [u, v],
                });
            }
        }

        first..first + count
    }

    /// Ends the setup phase. Called once, before the first tick.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Rewrites center and scale of the four vertices of one slot.
    /// Constant time; corner offsets and UVs are untouched.
    pub fn set_transform(&mut self, slot: usize, x: f32, y: f32, size: f32) {
        let first = 4 * slot;
        for v in &mut self.vertices[first..first + 4] {
            v.center = [x, y];
            v.scale = size;
        }
    }

    /// Writes one particle's transform into its slot.
    pub fn write<P: Particle>(&mut self, p: &P) {
        self.set_transform(p.slot(), p.x(), p.y(), p.size());
    }

    /// Flat views of the buffers for the render backend. Read-only; taken
    /// between ticks, never during one.
    pub fn snapshot(&self) -> (&[f32], &[u16]) {
        (bytemuck::cast_slice(&self.vertices), &self.indices)
    }
}
