// trail.rs -- exhaust puff trailing the player
//
// Puffs shrink by dt per second and respawn just behind the player's
// current position once they fall below the visibility floor. Created
// puffs start at size 0 so the trail fades in instead of popping.

use starblitz_common::shared::RandSource;

use crate::particle::Particle;

const DRIFT_SPEED: f32 = 120.0;
const MIN_SIZE: f32 = 0.1;

pub struct Trail {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

impl Trail {
    pub fn new(slot: usize, player_x: f32, player_y: f32, rng: &mut dyn RandSource) -> Trail {
        let mut trail = Trail {
            slot,
            x: 0.0,
            y: 0.0,
            size: 0.0,
        };
        trail.reset(true, player_x, player_y, rng);
        trail
    }

    pub fn reset(&mut self, created: bool, player_x: f32, player_y: f32, rng: &mut dyn RandSource) {
        self.x = player_x + rng.irand(-30, -20) as f32;
        self.y = player_y + rng.irand(-10, 10) as f32;
        self.size = if created { 0.0 } else { rng.frand() + 0.6 };
    }

    pub fn advance(&mut self, dt: f32, player_x: f32, player_y: f32, rng: &mut dyn RandSource) {
        self.size -= dt;
        if self.size <= MIN_SIZE {
            self.reset(false, player_x, player_y, rng);
        } else {
            self.x -= DRIFT_SPEED * dt;
        }
    }
}

impl Particle for Trail {
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
        self.size
    }
}
