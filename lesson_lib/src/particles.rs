//! Short lived sparkles trailing behind a moving dot

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const TOTAL_PARTICLES: usize = 20;

/// A particle is removed once its frame counter goes past this
const LIFETIME: u32 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParticleColor {
    Red,
    Green,
    Blue,
}

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub x: i32,
    pub y: i32,
    pub color: ParticleColor,
    frame: u32,
}

impl Particle {
    /// Spawn somewhere in a 25x25 square around `(x, y)`
    pub fn spawn<R: Rng>(rng: &mut R, x: i32, y: i32) -> Particle {
        let color = match rng.random_range(0..3) {
            0 => ParticleColor::Red,
            1 => ParticleColor::Green,
            _ => ParticleColor::Blue,
        };

        Particle {
            x: x - 5 + rng.random_range(0..25),
            y: y - 5 + rng.random_range(0..25),
            color,
            frame: rng.random_range(0..5),
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// The shimmer overlay is drawn every other frame
    pub fn shimmer(&self) -> bool {
        self.frame % 2 == 0
    }

    pub fn is_dead(&self) -> bool {
        self.frame > LIFETIME
    }
}

pub struct Emitter {
    rng: StdRng,
    particles: Vec<Particle>,
}

impl Emitter {
    pub fn new(x: i32, y: i32) -> Emitter {
        Emitter::with_rng(StdRng::from_os_rng(), x, y)
    }

    /// Deterministic emitter, mostly useful for testing
    pub fn seeded(seed: u64, x: i32, y: i32) -> Emitter {
        Emitter::with_rng(StdRng::seed_from_u64(seed), x, y)
    }

    fn with_rng(mut rng: StdRng, x: i32, y: i32) -> Emitter {
        let particles = (0..TOTAL_PARTICLES)
            .map(|_| Particle::spawn(&mut rng, x, y))
            .collect();

        Emitter { rng, particles }
    }

    /// Replace dead particles with new ones around `(x, y)`
    pub fn renew(&mut self, x: i32, y: i32) {
        for p in self.particles.iter_mut().filter(|p| p.is_dead()) {
            *p = Particle::spawn(&mut self.rng, x, y);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Age every particle by one frame, called once they've been drawn
    pub fn advance(&mut self) {
        for p in self.particles.iter_mut() {
            p.frame += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_area() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, 100, 200);
            assert!((95..120).contains(&p.x));
            assert!((195..220).contains(&p.y));
            assert!(p.frame() < 5);
            assert!(!p.is_dead());
        }
    }

    #[test]
    fn dead_particles_respawn_at_the_new_position() {
        let mut emitter = Emitter::seeded(7, 0, 0);
        assert_eq!(emitter.particles().len(), TOTAL_PARTICLES);

        // Whatever the start frame, eleven frames are always enough to die
        for _ in 0..11 {
            emitter.advance();
        }
        assert!(emitter.particles().iter().all(|p| p.is_dead()));

        emitter.renew(500, 500);
        assert!(
            emitter
                .particles()
                .iter()
                .all(|p| !p.is_dead() && p.x >= 495 && p.y >= 495)
        );
    }

    #[test]
    fn shimmer_on_even_frames() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut p = Particle::spawn(&mut rng, 0, 0);
        p.frame = 4;
        assert!(p.shimmer());
        p.frame = 5;
        assert!(!p.shimmer());
    }
}
