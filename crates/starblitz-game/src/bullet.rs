// bullet.rs -- player projectile
//
// Bullets sit parked off-screen at (-100,-100) until the fire cooldown
// lets one activate; an active bullet flies right at a fixed speed and
// parks itself again past the right edge. One pool slot per bullet, never
// freed, so activation is just flipping the flag.

use crate::events::FrameEvent;
use crate::particle::Particle;

pub const BULLET_SPEED: f32 = 250.0;
/// Seconds added to the fire cooldown per shot; roughly three shots a
/// second while the button is held.
pub const FIRE_COOLDOWN: f32 = 0.3333;
/// Muzzle offset ahead of the player.
pub const MUZZLE_OFFSET: f32 = 40.0;
const PARKED: f32 = -100.0;

pub struct Bullet {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

impl Bullet {
    pub fn new(slot: usize) -> Bullet {
        let mut bullet = Bullet {
            slot,
            x: 0.0,
            y: 0.0,
            active: false,
        };
        bullet.reset();
        bullet
    }

    pub fn reset(&mut self) {
        self.active = false;
        self.x = PARKED;
        self.y = PARKED;
    }

    /// `fire_delay` is the pool-wide cooldown owned by the world; the
    /// first inactive bullet to see it non-positive while firing claims
    /// the shot and pushes the cooldown back up.
    pub fn advance(
        &mut self,
        dt: f32,
        width: f32,
        firing: bool,
        fire_delay: &mut f32,
        player_x: f32,
        player_y: f32,
        events: &mut Vec<FrameEvent>,
    ) {
        if self.active {
            self.x += BULLET_SPEED * dt;
            if self.x > width {
                self.reset();
            }
        } else if firing && *fire_delay <= 0.0 {
            events.push(FrameEvent::Fired);
            self.active = true;
            self.x = player_x + MUZZLE_OFFSET;
            self.y = player_y;
            *fire_delay += FIRE_COOLDOWN;
        }
    }
}

impl Particle for Bullet {
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

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 960.0;

    #[test]
    fn test_parked_until_fired() {
        let mut events = Vec::new();
        let mut delay = 0.5;
        let mut b = Bullet::new(0);

        b.advance(0.1, W, true, &mut delay, 480.0, 270.0, &mut events);
        assert!(!b.active);
        assert!(events.is_empty());
        assert_eq!(delay, 0.5);
    }

    #[test]
    fn test_fires_when_cooldown_elapsed() {
        let mut events = Vec::new();
        let mut delay = 0.0;
        let mut b = Bullet::new(0);

        b.advance(0.1, W, true, &mut delay, 480.0, 270.0, &mut events);
        assert!(b.active);
        assert_eq!((b.x, b.y), (520.0, 270.0));
        assert_eq!(delay, FIRE_COOLDOWN);
        assert_eq!(events, vec![FrameEvent::Fired]);
    }

    #[test]
    fn test_not_firing_means_no_shot() {
        let mut events = Vec::new();
        let mut delay = -1.0;
        let mut b = Bullet::new(0);

        b.advance(0.1, W, false, &mut delay, 480.0, 270.0, &mut events);
        assert!(!b.active);
        assert!(events.is_empty());
    }

    #[test]
    fn test_flight_and_despawn_past_right_edge() {
        let mut events = Vec::new();
        let mut delay = 1.0;
        let mut b = Bullet::new(0);
        b.active = true;
        b.x = 900.0;
        b.y = 100.0;

        b.advance(0.1, W, false, &mut delay, 0.0, 0.0, &mut events);
        assert!(b.active);
        assert_eq!(b.x, 925.0);

        b.advance(0.2, W, false, &mut delay, 0.0, 0.0, &mut events);
        assert!(!b.active);
        assert_eq!((b.x, b.y), (-100.0, -100.0));
    }
}
