// player.rs -- player ship marker
//
// Purely externally driven: the pointer collaborator moves the player, and
// the marker just mirrors that position into its quad every tick. Advance
// and reset are the same operation.

use crate::particle::Particle;

pub struct Marker {
    pub slot: usize,
    pub x: f32,
    pub y: f32,
}

impl Marker {
    pub fn new(slot: usize, player_x: f32, player_y: f32) -> Marker {
        Marker {
            slot,
            x: player_x,
            y: player_y,
        }
    }

    pub fn reset(&mut self, player_x: f32, player_y: f32) {
        self.x = player_x;
        self.y = player_y;
    }

    pub fn advance(&mut self, player_x: f32, player_y: f32) {
        self.reset(player_x, player_y);
    }
}

impl Particle for Marker {
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

    #[test]
    fn test_marker_mirrors_player() {
        let mut m = Marker::new(7, 480.0, 270.0);
        assert_eq!((m.x, m.y), (480.0, 270.0));

        m.advance(10.0, 20.0);
        assert_eq!((m.x, m.y), (10.0, 20.0));
        assert_eq!(m.size(), 1.0);
        assert_eq!(m.slot(), 7);
    }
}
