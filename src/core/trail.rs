//! Custom cursor model: a ring that eases after the pointer, a dot that
//! snaps to it, and a small pool of ghost sprites fading out along the
//! recent path. Pure state; the shell positions the actual elements.

use glam::Vec2;

// Cursor tuning
pub const RING_EASE: f32 = 0.2; // ring follow smoothness, per frame
pub const GHOST_COUNT: usize = 10; // trail length
pub const GHOST_SPACING: u32 = 2; // frames between ghost spawns
pub const GHOST_DECAY: f32 = 0.05; // life lost per frame
pub const GHOST_GROWTH: f32 = 0.6; // extra scale gained as a ghost fades
pub const CLICK_PULSE_MS: f64 = 240.0; // dot pulse length after a press

#[derive(Clone, Copy, Debug, Default)]
struct Ghost {
    pos: Vec2,
    life: f32,
}

/// Drawable state of one ghost sprite.
#[derive(Clone, Copy, Debug, Default)]
pub struct GhostSprite {
    pub pos: Vec2,
    pub opacity: f32,
    pub scale: f32,
}

/// Sprite placements for one cursor frame.
#[derive(Clone, Copy, Debug)]
pub struct CursorFrame {
    pub ring: Vec2,
    pub dot: Vec2,
    pub ghosts: [GhostSprite; GHOST_COUNT],
    /// True while the click pulse runs on the dot.
    pub pulsing: bool,
}

pub struct CursorTrail {
    target: Vec2,
    ring: Vec2,
    ghosts: [Ghost; GHOST_COUNT],
    frame: u32,
    pulse_until_ms: f64,
}

impl CursorTrail {
    pub fn new(start: Vec2) -> Self {
        Self {
            target: start,
            ring: start,
            ghosts: [Ghost::default(); GHOST_COUNT],
            frame: 0,
            pulse_until_ms: 0.0,
        }
    }

    /// Track the pointer; the dot snaps here on the next frame.
    pub fn point_to(&mut self, x: f32, y: f32) {
        self.target = Vec2::new(x, y);
    }

    /// A press starts the dot pulse.
    pub fn click(&mut self, now_ms: f64) {
        self.pulse_until_ms = now_ms + CLICK_PULSE_MS;
    }

    /// Advance one frame: ease the ring toward the pointer, spawn a ghost
    /// every few frames into the most-faded slot, and decay the rest.
    pub fn advance(&mut self, now_ms: f64) -> CursorFrame {
        self.ring += (self.target - self.ring) * RING_EASE;

        if self.frame % GHOST_SPACING == 0 {
            let mut slot = 0;
            for i in 1..GHOST_COUNT {
                if self.ghosts[i].life < self.ghosts[slot].life {
                    slot = i;
                }
            }
            self.ghosts[slot] = Ghost {
                pos: self.target,
                life: 1.0,
            };
        }
        self.frame = self.frame.wrapping_add(1);

        let mut sprites = [GhostSprite::default(); GHOST_COUNT];
        for (ghost, sprite) in self.ghosts.iter_mut().zip(sprites.iter_mut()) {
            if ghost.life > 0.0 {
                ghost.life -= GHOST_DECAY;
            }
            let life = ghost.life.max(0.0);
            *sprite = GhostSprite {
                pos: ghost.pos,
                opacity: life,
                scale: 1.0 + (1.0 - life) * GHOST_GROWTH,
            };
        }

        CursorFrame {
            ring: self.ring,
            dot: self.target,
            ghosts: sprites,
            pulsing: now_ms < self.pulse_until_ms,
        }
    }
}
