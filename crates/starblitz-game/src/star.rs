// star.rs -- background starfield particle
//
// Three parallax planes; plane number drives both drift speed and sprite
// scale, so nearer stars are bigger and faster.

use starblitz_common::shared::RandSource;

use crate::particle::Particle;

const DRIFT_SPEED: f32 = 20.0;
const PLANE_SCALE: f32 = 0.1;

pub struct Star {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    plane: i32,
}

impl Star {
    pub fn new(slot: usize, width: f32, height: f32, rng: &mut dyn RandSource) -> Star {
        let mut star = Star {
            slot,
            x: 0.0,
            y: 0.0,
            size: 1.0,
            plane: 1,
        };
        star.reset(true, width, height, rng);
        star
    }

    /// On first creation the star lands anywhere on screen so the field is
    /// full from the first frame; on recycle it re-enters at the right
    /// edge.
    pub fn reset(&mut self, created: bool, width: f32, height: f32, rng: &mut dyn RandSource) {
        self.plane = rng.irand(1, 3);
        self.x = if created { rng.frand() * width } else { width };
        self.y = rng.frand() * height;
        self.size = PLANE_SCALE * self.plane as f32;
    }

    pub fn advance(&mut self, dt: f32, width: f32, height: f32, rng: &mut dyn RandSource) {
        self.x -= DRIFT_SPEED * self.plane as f32 * dt;
        if self.x < 0.0 {
            self.reset(false, width, height, rng);
        }
    }
}

impl Particle for Star {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use starblitz_common::shared::RngSource;

    const W: f32 = 960.0;
    const H: f32 = 540.0;

    #[test]
    fn test_created_star_on_screen() {
        let mut rng = RngSource(StdRng::seed_from_u64(3));
        for slot in 0..50 {
            let s = Star::new(slot, W, H, &mut rng);
            assert!((0.0..W).contains(&s.x));
            assert!((0.0..H).contains(&s.y));
            assert!((1..=3).contains(&s.plane));
            assert_eq!(s.size, 0.1 * s.plane as f32);
        }
    }

    #[test]
    fn test_drift_speed_follows_plane() {
        let mut rng = RngSource(StdRng::seed_from_u64(4));
        let mut s = Star::new(0, W, H, &mut rng);
        s.x = 500.0;
        let plane = s.plane;
        s.advance(0.5, W, H, &mut rng);
        assert_eq!(s.x, 500.0 - 20.0 * plane as f32 * 0.5);
    }

    #[test]
    fn test_wrap_to_right_edge() {
        let mut rng = RngSource(StdRng::seed_from_u64(5));
        let mut s = Star::new(0, W, H, &mut rng);
        s.x = 0.01;
        s.advance(1.0, W, H, &mut rng);
        assert_eq!(s.x, W);
        assert!((1..=3).contains(&s.plane));
        assert_eq!(s.size, 0.1 * s.plane as f32);
    }
}
