/// Fixed-capacity ring buffer of past positions.
///
/// Storage is allocated inline at construction; `push` overwrites the oldest entry once the
/// buffer is full, so `len() <= N` holds for any number of pushes.
#[derive(Clone, Copy, Debug)]
pub struct Trail<const N: usize> {
    points: [(f32, f32); N],
    // Index the next push writes to.
    head: usize,
    len: usize,
}

impl<const N: usize> Trail<N> {
    /// Empty trail.
    pub const fn new() -> Self {
        Self {
            points: [(0.0, 0.0); N],
            head: 0,
            len: 0,
        }
    }

    /// Maximum number of retained points.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of retained points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` when no point has been recorded since the last clear.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Forget every point without touching storage.
    pub fn clear(&mut self) {
        self.head = 0;
        self.len = 0;
    }

    /// Record a position, dropping the oldest one when full.
    pub fn push(&mut self, x: f32, y: f32) {
        if N == 0 {
            return;
        }
        self.points[self.head] = (x, y);
        self.head = (self.head + 1) % N;
        if self.len < N {
            self.len += 1;
        }
    }

    /// Point recorded `age` pushes ago (`0` is the newest).
    pub fn get(&self, age: usize) -> Option<(f32, f32)> {
        if age >= self.len {
            return None;
        }
        let idx = (self.head + N - 1 - age) % N;
        Some(self.points[idx])
    }

    /// Iterate `(age, point)` from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = (usize, (f32, f32))> + '_ {
        (0..self.len).filter_map(move |age| self.get(age).map(|p| (age, p)))
    }
}

impl<const N: usize> Default for Trail<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/trail.rs"]
mod tests;
