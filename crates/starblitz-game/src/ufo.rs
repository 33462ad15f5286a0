// ufo.rs -- adversary saucer and its collision resolution
//
// Ufos spawn off the right edge once the spawn cooldown allows, sweep left
// while bouncing vertically, and park back off-screen when destroyed or
// once they leave on the left. The hit check runs first in each active
// update; the player's body always wins over bullets, and an ufo consumes
// at most one bullet per tick.

use starblitz_common::shared::{dist, RandSource};

use crate::bullet::Bullet;
use crate::events::FrameEvent;
use crate::particle::Particle;

pub const UFO_SPEED: f32 = 200.0;
/// Seconds added to the spawn cooldown per spawn.
pub const SPAWN_COOLDOWN: f32 = 1.0;
/// Collision radius against the player's body.
pub const PLAYER_HIT_RANGE: f32 = 60.0;
/// Collision radius against a bullet.
pub const BULLET_HIT_RANGE: f32 = 30.0;
const SPAWN_MARGIN: f32 = 50.0;
const DESPAWN_X: f32 = -50.0;
const PARKED: f32 = -100.0;

pub struct Ufo {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub active: bool,
    /// Vertical velocity, sign flipped at the scene edges.
    pub v: f32,
}

impl Ufo {
    pub fn new(slot: usize) -> Ufo {
        let mut ufo = Ufo {
            slot,
            x: 0.0,
            y: 0.0,
            active: false,
            v: 0.0,
        };
        ufo.reset();
        ufo
    }

    /// Idempotent: always parks the ufo regardless of prior state.
    pub fn reset(&mut self) {
        self.active = false;
        self.x = PARKED;
        self.y = PARKED;
        self.v = 0.0;
    }

    #[allow(clippy::too_many_arguments)]
    pub fn advance(
        &mut self,
        dt: f32,
        width: f32,
        height: f32,
        player_x: f32,
        player_y: f32,
        spawn_delay: &mut f32,
        bullets: &mut [Bullet],
        rng: &mut dyn RandSource,
        events: &mut Vec<FrameEvent>,
    ) {
        if self.active {
            if self.check_hit(player_x, player_y, bullets) {
                events.push(FrameEvent::UfoDown);
                self.reset();
                return;
            }

            self.x -= UFO_SPEED * dt;
            if self.x < DESPAWN_X {
                self.reset();
                return;
            }

            self.y += self.v * dt;
            if self.y <= 0.0 {
                self.v = self.v.abs();
            } else if self.y >= height {
                self.v = -self.v.abs();
            }
        } else if *spawn_delay <= 0.0 {
            self.active = true;
            self.x = width + SPAWN_MARGIN;
            self.y = height * rng.frand();
            self.v = rng.irand(-100, 100) as f32;
            *spawn_delay += SPAWN_COOLDOWN;
        }
    }

    /// Collision resolution for one ufo. Player-body collision takes
    /// priority and consumes no bullet; otherwise the first active bullet
    /// in pool order within range is consumed, at most one per tick.
    pub(crate) fn check_hit(&self, player_x: f32, player_y: f32, bullets: &mut [Bullet]) -> bool {
        if dist(player_x, player_y, self.x, self.y) < PLAYER_HIT_RANGE {
            return true;
        }

        for b in bullets.iter_mut() {
            if !b.active {
                continue;
            }
            if dist(b.x, b.y, self.x, self.y) < BULLET_HIT_RANGE {
                b.reset();
                return true;
            }
        }

        false
    }
}

impl Particle for Ufo {
    fn slot(&self) -> usize {
        self.slot
    }
    fn x(&self) -> f32 {
        self.x
    }
    fn y(&self) -> f32 {
        self.y
    }
    fn size(&self) -> f32 {
        1.0
    }
}
