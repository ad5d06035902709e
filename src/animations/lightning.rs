use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::ops::{draw_pixel_blend, vertical_gradient};
use crate::canvas::shapes::draw_line;
use crate::foundation::color::Rgb888;
use crate::foundation::math::scale_floor_u8;
use crate::foundation::rng::FrameRng;

/// Concurrent bolt cap.
pub const MAX_BOLTS: usize = 3;
/// Branches per bolt.
pub const MAX_BRANCHES: usize = 3;
/// Path points per branch, including the final ground point.
pub const MAX_POINTS: usize = 64;
/// Minimum horizontal distance between bolt origins.
pub const MIN_SPACING: i32 = 24;
/// Rows revealed per frame.
pub const REVEAL_SPEED: f32 = 1.5;
/// Frames a grounded bolt takes to fade out.
pub const GROUND_FADE_FRAMES: u32 = 40;

const SPAWN_CHANCE: (u32, u32) = (1, 100);
const ORIGIN_ATTEMPTS: usize = 8;
const RAIN_DROPS: usize = 60;
const STORM_TOP: Rgb888 = Rgb888::new(0, 0, 34);
const STORM_BOTTOM: Rgb888 = Rgb888::new(0, 0, 68);
const GLOW: Rgb888 = Rgb888::new(170, 190, 255);

#[derive(Clone, Copy, Debug)]
struct Branch {
    points: [(f32, f32); MAX_POINTS],
    len: usize,
}

impl Default for Branch {
    fn default() -> Self {
        Self {
            points: [(0.0, 0.0); MAX_POINTS],
            len: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Bolt {
    active: bool,
    origin_x: i32,
    progress: f32,
    grounded: bool,
    ground_frames: u32,
    branches: [Branch; MAX_BRANCHES],
    branch_count: usize,
}

impl Bolt {
    fn fade(&self) -> f32 {
        if self.grounded {
            1.0 - self.ground_frames as f32 / GROUND_FADE_FRAMES as f32
        } else {
            1.0
        }
    }
}

/// Storm scene: bolts are generated whole at spawn, revealed top-down, then fade out
/// after touching the ground. Rain streaks are redrawn every frame.
#[derive(Clone, Debug)]
pub struct Lightning {
    extent: Extent,
    bolts: [Bolt; MAX_BOLTS],
}

impl Lightning {
    /// Storm sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            bolts: [Bolt::default(); MAX_BOLTS],
        }
    }

    /// Number of bolts currently visible.
    pub fn active_bolts(&self) -> usize {
        self.bolts.iter().filter(|b| b.active).count()
    }

    /// Origin columns of the visible bolts.
    pub fn active_origins(&self) -> impl Iterator<Item = i32> + '_ {
        self.bolts.iter().filter(|b| b.active).map(|b| b.origin_x)
    }

    /// Lowest path point of every active branch.
    pub fn branch_ends(&self) -> impl Iterator<Item = (f32, f32)> + '_ {
        self.bolts
            .iter()
            .filter(|b| b.active)
            .flat_map(|b| b.branches[..b.branch_count].iter())
            .filter(|br| br.len > 0)
            .map(|br| br.points[br.len - 1])
    }

    /// Try to launch a bolt into a free pool slot.
    ///
    /// Fails when the pool is full or no origin column keeps [`MIN_SPACING`] from the
    /// bolts already in flight.
    pub fn strike(&mut self, rng: &mut FrameRng) -> bool {
        let Some(slot) = self.bolts.iter().position(|b| !b.active) else {
            return false;
        };
        let Some(origin_x) = self.pick_origin(rng) else {
            return false;
        };

        let w = self.extent.width;
        let h = self.extent.hf();
        let bolt = &mut self.bolts[slot];
        bolt.active = true;
        bolt.origin_x = origin_x;
        bolt.progress = 0.0;
        bolt.grounded = false;
        bolt.ground_frames = 0;
        let branch_count = rng.range(1, MAX_BRANCHES as i32 + 1) as usize;
        bolt.branch_count = branch_count;

        for branch in bolt.branches.iter_mut().take(branch_count) {
            let mut x = (origin_x + rng.range(-10, 11)) as f32;
            let mut y = 0.0;
            branch.len = 0;
            while y < h && branch.len < MAX_POINTS - 1 {
                x += rng.range(-2, 3) as f32;
                y += rng.range(1, 3) as f32;
                branch.points[branch.len] = (x.clamp(0.0, (w - 1).max(0) as f32), y);
                branch.len += 1;
            }
            let Some(&last) = branch.points[..branch.len].last() else {
                continue;
            };
            if last.1 < h {
                branch.points[branch.len] = (last.0, h);
                branch.len += 1;
            }
        }
        true
    }

    fn pick_origin(&self, rng: &mut FrameRng) -> Option<i32> {
        let w = self.extent.width;
        for _ in 0..ORIGIN_ATTEMPTS {
            let x = rng.range(10, (w - 10).max(11));
            let clear = self
                .active_origins()
                .all(|other| (other - x).abs() >= MIN_SPACING);
            if clear {
                return Some(x);
            }
        }
        None
    }

    fn draw_bolt(canvas: &mut dyn PixelCanvas, bolt: &Bolt) {
        let alpha = (255.0 * bolt.fade().clamp(0.0, 1.0)) as u8;
        if alpha == 0 {
            return;
        }
        let glow_alpha = alpha / 3;
        for branch in &bolt.branches[..bolt.branch_count] {
            for seg in branch.points[..branch.len].windows(2) {
                let (a, b) = (seg[0], seg[1]);
                if a.1 > bolt.progress || b.1 > bolt.progress {
                    break;
                }
                let p0 = (a.0 as i32, a.1 as i32);
                let p1 = (b.0 as i32, b.1 as i32);
                draw_line(canvas, (p0.0 - 1, p0.1), (p1.0 - 1, p1.1), GLOW, glow_alpha);
                draw_line(canvas, (p0.0 + 1, p0.1), (p1.0 + 1, p1.1), GLOW, glow_alpha);
                draw_line(canvas, p0, p1, Rgb888::WHITE, alpha);
            }
        }
    }

    fn draw_rain(&self, canvas: &mut dyn PixelCanvas, t: f32, rng: &mut FrameRng) {
        let (w, h) = (self.extent.width, self.extent.height);
        for _ in 0..RAIN_DROPS {
            if !rng.chance(20, 100) {
                continue;
            }
            let x = rng.range(0, w);
            let y = rng.range(0, (h - 3).max(1));
            let len = rng.range(2, 5);
            let alpha = ((0.3 + (t + x as f32).sin() * 0.1) * 255.0) as u8;
            for dy in 0..len {
                draw_pixel_blend(canvas, x, y + dy, Rgb888::WHITE, alpha);
                if dy > 0 && rng.chance(30, 100) {
                    draw_pixel_blend(canvas, x, y + dy - len, Rgb888::WHITE, scale_floor_u8(alpha, 85));
                }
            }
        }
    }
}

impl Animation for Lightning {
    fn init(&mut self, _rng: &mut FrameRng) {
        for bolt in &mut self.bolts {
            bolt.active = false;
            bolt.progress = 0.0;
            bolt.grounded = false;
            bolt.ground_frames = 0;
            bolt.branch_count = 0;
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, ctx: &FrameCtx, rng: &mut FrameRng) {
        vertical_gradient(canvas, STORM_TOP, STORM_BOTTOM, 0, self.extent.height);

        if rng.chance(SPAWN_CHANCE.0, SPAWN_CHANCE.1) {
            self.strike(rng);
        }

        let h = self.extent.hf();
        for bolt in self.bolts.iter_mut().filter(|b| b.active) {
            Self::draw_bolt(canvas, bolt);
            if bolt.grounded {
                bolt.ground_frames += 1;
                if bolt.ground_frames >= GROUND_FADE_FRAMES {
                    bolt.active = false;
                }
            } else {
                bolt.progress += REVEAL_SPEED;
                if bolt.progress >= h {
                    bolt.grounded = true;
                }
            }
        }

        self.draw_rain(canvas, ctx.seconds(), rng);
    }

    fn name(&self) -> &'static str {
        "Lightning"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/lightning.rs"]
mod tests;
