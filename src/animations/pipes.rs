use crate::animations::{Animation, Extent, FrameCtx};
use crate::canvas::buffer::PixelCanvas;
use crate::canvas::shapes::fill_rect;
use crate::foundation::color::Rgb888;
use crate::foundation::rng::FrameRng;
use crate::foundation::trail::Trail;

/// Number of walkers.
pub const WALKERS: usize = 5;
/// Trail capacity per walker.
pub const TRAIL_LEN: usize = 120;
/// Frames between grid steps.
pub const STEP_EVERY: u32 = 2;
/// Percent chance of a random turn after each step.
pub const TURN_PERCENT: u32 = 2;

/// Cardinal heading of a walker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Heading {
    /// Towards row 0.
    #[default]
    Up,
    /// Towards the bottom row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the right edge.
    Right,
}

impl Heading {
    const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    fn random(rng: &mut FrameRng) -> Self {
        Self::ALL[rng.range(0, 4) as usize]
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Walker {
    x: i32,
    y: i32,
    heading: Heading,
    color: Rgb888,
    counter: u32,
    trail: Trail<TRAIL_LEN>,
}

/// Walkers tracing fading pipes on a cleared canvas.
#[derive(Clone, Debug)]
pub struct Pipes {
    extent: Extent,
    walkers: [Walker; WALKERS],
}

impl Pipes {
    /// Pipes sized for `extent`.
    pub fn new(extent: Extent) -> Self {
        Self {
            extent,
            walkers: [Walker::default(); WALKERS],
        }
    }

    /// Walker grid positions.
    pub fn positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.walkers.iter().map(|w| (w.x, w.y))
    }

    /// Trail length of each walker.
    pub fn trail_lens(&self) -> impl Iterator<Item = usize> + '_ {
        self.walkers.iter().map(|w| w.trail.len())
    }

    fn bounds(&self) -> (i32, i32, i32, i32) {
        let max_x = (self.extent.width - 2).max(1);
        let max_y = (self.extent.height - 2).max(1);
        (1, 1, max_x, max_y)
    }

    fn step(walker: &mut Walker, bounds: (i32, i32, i32, i32), rng: &mut FrameRng) {
        let (min_x, min_y, max_x, max_y) = bounds;
        walker.trail.push(walker.x as f32, walker.y as f32);

        let (dx, dy) = walker.heading.delta();
        walker.x += dx;
        walker.y += dy;

        if walker.x <= min_x || walker.x >= max_x {
            walker.x = walker.x.clamp(min_x, max_x);
            walker.heading = Heading::random(rng);
        }
        if walker.y <= min_y || walker.y >= max_y {
            walker.y = walker.y.clamp(min_y, max_y);
            walker.heading = Heading::random(rng);
        }
        if rng.chance(TURN_PERCENT, 100) {
            walker.heading = Heading::random(rng);
        }
    }
}

impl Animation for Pipes {
    fn init(&mut self, rng: &mut FrameRng) {
        let (min_x, min_y, max_x, max_y) = self.bounds();
        for walker in &mut self.walkers {
            walker.x = rng.range(min_x, max_x + 1);
            walker.y = rng.range(min_y, max_y + 1);
            walker.heading = Heading::random(rng);
            walker.color = Rgb888::new(
                rng.channel(100, 255),
                rng.channel(100, 255),
                rng.channel(100, 255),
            );
            walker.counter = 0;
            walker.trail.clear();
        }
    }

    fn render(&mut self, canvas: &mut dyn PixelCanvas, _ctx: &FrameCtx, rng: &mut FrameRng) {
        canvas.clear();
        let bounds = self.bounds();
        for walker in &mut self.walkers {
            walker.counter += 1;
            if walker.counter >= STEP_EVERY {
                walker.counter = 0;
                Self::step(walker, bounds, rng);
            }

            let tail = walker.color.halved();
            for (age, (tx, ty)) in walker.trail.iter() {
                let alpha = 255 - (age * 255 / TRAIL_LEN) as u8;
                fill_rect(canvas, tx as i32 - 1, ty as i32 - 1, 2, 2, tail, alpha);
            }
            fill_rect(canvas, walker.x, walker.y, 2, 2, walker.color, 255);
        }
    }

    fn name(&self) -> &'static str {
        "Pipes"
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animations/pipes.rs"]
mod tests;
