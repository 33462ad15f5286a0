// game.rs -- world state and the fixed-rate frame scheduler
//
// One `World` owns the five particle pools, the shared mesh and the
// injected random source. Everything happens synchronously inside
// `update`: cooldowns tick down, every pool advances in creation order,
// and each particle's transform lands in the mesh right after its
// advance. The caller takes the snapshot and drains the frame events only
// between ticks, so the render backend never sees a half-updated buffer.

use starblitz_common::atlas::{Atlas, AtlasError};
use starblitz_common::shared::RandSource;

use crate::bullet::Bullet;
use crate::events::FrameEvent;
use crate::input::PointerEvent;
use crate::mesh::{MeshBuffer, VERTEX_STRIDE};
use crate::player::Marker;
use crate::star::Star;
use crate::trail::Trail;
use crate::ufo::Ufo;

/// Target tick length, seconds.
pub const TICK: f32 = 1.0 / 60.0;

pub const NUM_STARS: usize = 200;
pub const NUM_TRAILS: usize = 200;
pub const NUM_BULLETS: usize = 25;
pub const NUM_UFOS: usize = 25;
pub const NUM_QUADS: usize = NUM_STARS + NUM_TRAILS + 1 + NUM_BULLETS + NUM_UFOS;

pub struct World {
    pub width: f32,
    pub height: f32,

    pub player_x: f32,
    pub player_y: f32,
    pub firing: bool,
    pub fire_delay: f32,
    pub spawn_delay: f32,

    pub stars: Vec<Star>,
    pub trails: Vec<Trail>,
    pub marker: Marker,
    pub bullets: Vec<Bullet>,
    pub ufos: Vec<Ufo>,

    mesh: MeshBuffer,
    rng: Box<dyn RandSource>,
    events: Vec<FrameEvent>,
    texture: String,
}

impl World {
    /// Builds every pool and the sealed mesh. Fails (with no partial
    /// state kept) if the atlas lacks one of the five sprite names.
    ///
    /// Pool creation order is also advance order, and bullets are created
    /// before ufos on purpose: an ufo's hit check reads the bullet pool,
    /// and it must observe this tick's bullet movement and deactivations,
    /// so ufos advance strictly after bullets.
    pub fn new(
        width: f32,
        height: f32,
        atlas: &Atlas,
        mut rng: Box<dyn RandSource>,
    ) -> Result<World, AtlasError> {
        let star_uv = *atlas.sprite("star")?;
        let trail_uv = *atlas.sprite("trail")?;
        let player_uv = *atlas.sprite("player")?;
        let bullet_uv = *atlas.sprite("bullet")?;
        let ufo_uv = *atlas.sprite("ufo")?;

        let player_x = 0.5 * width;
        let player_y = 0.5 * height;

        let mut mesh = MeshBuffer::with_capacity(NUM_QUADS);

        let stars: Vec<Star> = mesh
            .alloc_quads(NUM_STARS, &star_uv)
            .map(|slot| Star::new(slot, width, height, rng.as_mut()))
            .collect();
        let trails: Vec<Trail> = mesh
            .alloc_quads(NUM_TRAILS, &trail_uv)
            .map(|slot| Trail::new(slot, player_x, player_y, rng.as_mut()))
            .collect();
        let marker = Marker::new(mesh.alloc_quads(1, &player_uv).start, player_x, player_y);
        let bullets: Vec<Bullet> = mesh
            .alloc_quads(NUM_BULLETS, &bullet_uv)
            .map(Bullet::new)
            .collect();
        let ufos: Vec<Ufo> = mesh.alloc_quads(NUM_UFOS, &ufo_uv).map(Ufo::new).collect();

        mesh.seal();
        log::info!(
            "world up: {} quads ({} vertex floats, {} indices), scene {}x{}",
            NUM_QUADS,
            NUM_QUADS * 4 * VERTEX_STRIDE,
            NUM_QUADS * 6,
            width,
            height
        );

        Ok(World {
            width,
            height,
            player_x,
            player_y,
            firing: false,
            fire_delay: 0.0,
            spawn_delay: 1.0,
            stars,
            trails,
            marker,
            bullets,
            ufos,
            mesh,
            rng,
            events: Vec::new(),
            texture: atlas.texture().to_string(),
        })
    }

    /// Input collaborator entry point, called before the tick.
    pub fn pointer(&mut self, ev: PointerEvent) {
        match ev {
            PointerEvent::Down { x, y } => {
                self.player_x = x;
                self.player_y = y;
                self.firing = true;
                self.fire_delay = 0.0;
            }
            PointerEvent::Move { x, y } => {
                self.player_x = x;
                self.player_y = y;
            }
            PointerEvent::Up => self.firing = false,
        }
    }

    /// One fixed-rate tick. The fire cooldown only runs down while the
    /// button is held; the spawn cooldown always runs.
    pub fn update(&mut self, dt: f32) {
        if self.firing {
            self.fire_delay -= dt;
        }
        self.spawn_delay -= dt;

        let (w, h) = (self.width, self.height);
        let (px, py) = (self.player_x, self.player_y);
        let firing = self.firing;

        for s in &mut self.stars {
            s.advance(dt, w, h, self.rng.as_mut());
            self.mesh.write(s);
        }
        for t in &mut self.trails {
            t.advance(dt, px, py, self.rng.as_mut());
            self.mesh.write(t);
        }
        self.marker.advance(px, py);
        self.mesh.write(&self.marker);
        for b in &mut self.bullets {
            b.advance(dt, w, firing, &mut self.fire_delay, px, py, &mut self.events);
            self.mesh.write(b);
        }
        // Ufos advance after bullets so check_hit sees this tick's bullet
        // positions and deactivations.
        for u in &mut self.ufos {
            u.advance(
                dt,
                w,
                h,
                px,
                py,
                &mut self.spawn_delay,
                &mut self.bullets,
                self.rng.as_mut(),
                &mut self.events,
            );
            self.mesh.write(u);
        }
    }

    /// Current vertex/index buffers for the render backend. Only valid
    /// between ticks.
    pub fn snapshot(&self) -> (&[f32], &[u16]) {
        self.mesh.snapshot()
    }

    /// Atlas texture the sprite UVs refer to; handed to the render
    /// backend alongside the snapshot.
    pub fn texture(&self) -> &str {
        &self.texture
    }

    /// Takes this tick's events, oldest first.
    pub fn drain_events(&mut self) -> Vec<FrameEvent> {
        std::mem::take(&mut self.events)
    }
}
