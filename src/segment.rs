use num_traits::Float;

/// Boundary state of a single profile segment plus the query cursor.
///
/// Pairs are stored as `(start, final)`. The final time may lie before the
/// start time; the segment is then defined backwards in time and the clamp
/// still works on `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment<T> {
    /// (t0, tf)
    pub time: (T, T),

    /// (q0, qf)
    pub pos: (T, T),

    /// (v0, vf), unused by first order profiles
    pub vel: (T, T),

    /// Last queried time. Anchor for the `extend` family of setters.
    pub cursor: T,
}

impl<T: Float> Default for Segment<T> {
    fn default() -> Self {
        Self {
            time: (T::zero(), T::zero()),
            pos: (T::zero(), T::zero()),
            vel: (T::zero(), T::zero()),
            cursor: T::zero(),
        }
    }
}

impl<T: Float> Segment<T> {
    /// Creates a segment with the cursor parked at the start time.
    pub fn new(time: (T, T), pos: (T, T), vel: (T, T)) -> Self {
        Self {
            time,
            pos,
            vel,
            cursor: time.0,
        }
    }

    /// Lower and upper bound of the valid time domain.
    pub fn domain(&self) -> (T, T) {
        let (t0, tf) = self.time;
        if tf > t0 {
            (t0, tf)
        } else {
            (tf, t0)
        }
    }

    /// Signed segment length `tf - t0`.
    pub fn duration(&self) -> T {
        self.time.1 - self.time.0
    }

    /// True when start and final time coincide and the boundary system is singular.
    pub fn is_degenerate(&self) -> bool {
        self.time.0 == self.time.1
    }

    /// Clamps `t` into the segment domain.
    pub fn clamp(&self, t: T) -> T {
        let (lo, hi) = self.domain();
        // a NaN cursor resolves to the lower bound
        hi.min(lo.max(t))
    }

    /// The cursor clamped into the segment domain.
    pub fn clamped_cursor(&self) -> T {
        self.clamp(self.cursor)
    }

    /// Replaces the boundary values, leaving the cursor where it is.
    pub(crate) fn set_bounds(&mut self, time: (T, T), pos: (T, T), vel: (T, T)) {
        self.time = time;
        self.pos = pos;
        self.vel = vel;
    }
}
