use crate::error::{check_finite, ProfileError};
use crate::polynomial::Polynomial;
use crate::segment::Segment;
use crate::solver::{fit_cubic, fit_linear};
use crate::Real;

/// A profile that can be queried for position.
pub trait Position<T> {
    /// Moves the cursor to `t` and returns the position there.
    fn q_at(&mut self, t: T) -> T;

    /// Returns the position at the current cursor.
    fn q(&self) -> T;
}

/// A profile that can also be queried for velocity.
pub trait Velocity<T>: Position<T> {
    /// Moves the cursor to `t` and returns the velocity there.
    fn v_at(&mut self, t: T) -> T;

    /// Returns the velocity at the current cursor.
    fn v(&self) -> T;
}

/// First order profile: straight line from `(t0, q0)` to `(tf, qf)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Linear<T = f32> {
    seg: Segment<T>,
    poly: Polynomial<T, 2>,
}

impl<T: Real> Default for Linear<T> {
    fn default() -> Self {
        Self {
            seg: Segment::default(),
            poly: Polynomial::zero(),
        }
    }
}

impl<T: Real> Linear<T> {
    /// Creates a profile with every boundary, the cursor and the coefficients at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets start and final time and position.
    /// `time: (t0, tf)`, `pos: (q0, qf)`
    pub fn set(&mut self, time: (T, T), pos: (T, T)) {
        self.seg.set_bounds(time, pos, (T::zero(), T::zero()));
        self.poly = fit_linear(&self.seg);
    }

    /// Same as `set`, but rejects non-finite values and zero-length segments.
    /// The profile is left untouched on error.
    pub fn try_set(&mut self, time: (T, T), pos: (T, T)) -> Result<(), ProfileError> {
        check_finite(&[("t0", time.0), ("tf", time.1), ("q0", pos.0), ("qf", pos.1)])?;
        if time.0 == time.1 {
            return Err(ProfileError::Degenerate);
        }
        self.set(time, pos);
        Ok(())
    }

    /// Sets a new final time and position, starting from the cursor time and
    /// the position currently reported there.
    pub fn extend(&mut self, tf: T, qf: T) {
        let t0 = self.seg.cursor;
        let q0 = self.q();
        self.set((t0, tf), (q0, qf));
    }

    /// (t0, tf)
    pub fn time(&self) -> (T, T) {
        self.seg.time
    }

    /// (q0, qf)
    pub fn pos(&self) -> (T, T) {
        self.seg.pos
    }

    /// Last queried time.
    pub fn cursor(&self) -> T {
        self.seg.cursor
    }

    /// Boundary state and cursor.
    pub fn segment(&self) -> &Segment<T> {
        &self.seg
    }

    /// Fitted coefficients.
    pub fn polynomial(&self) -> &Polynomial<T, 2> {
        &self.poly
    }
}

impl<T: Real> Position<T> for Linear<T> {
    fn q_at(&mut self, t: T) -> T {
        self.seg.cursor = t;
        self.q()
    }

    fn q(&self) -> T {
        self.poly.value(self.seg.clamped_cursor())
    }
}

/// Third order profile: cubic Hermite fit of position and velocity at both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic<T = f32> {
    seg: Segment<T>,
    poly: Polynomial<T, 4>,
}

impl<T: Real> Default for Cubic<T> {
    fn default() -> Self {
        Self {
            seg: Segment::default(),
            poly: Polynomial::zero(),
        }
    }
}

impl<T: Real> Cubic<T> {
    /// Creates a profile with every boundary, the cursor and the coefficients at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets start and final time, position and velocity.
    /// `time: (t0, tf)`, `pos: (q0, qf)`, `vel: (v0, vf)`
    pub fn set(&mut self, time: (T, T), pos: (T, T), vel: (T, T)) {
        self.seg.set_bounds(time, pos, vel);
        self.poly = fit_cubic(&self.seg);
    }

    /// Sets a rest-to-rest move: `set` with zero velocity at both ends.
    pub fn set_rest(&mut self, time: (T, T), pos: (T, T)) {
        self.set(time, pos, (T::zero(), T::zero()));
    }

    /// Same as `set`, but rejects non-finite values and zero-length segments.
    /// The profile is left untouched on error.
    pub fn try_set(&mut self, time: (T, T), pos: (T, T), vel: (T, T)) -> Result<(), ProfileError> {
        check_finite(&[
            ("t0", time.0),
            ("tf", time.1),
            ("q0", pos.0),
            ("qf", pos.1),
            ("v0", vel.0),
            ("vf", vel.1),
        ])?;
        if time.0 == time.1 {
            return Err(ProfileError::Degenerate);
        }
        self.set(time, pos, vel);
        Ok(())
    }

    /// Sets a new final time, position and velocity, continuing smoothly from
    /// the cursor: position and velocity at the cursor become the start state.
    pub fn extend(&mut self, tf: T, qf: T, vf: T) {
        let t0 = self.seg.cursor;
        let q0 = self.q();
        let v0 = self.v();
        self.set((t0, tf), (q0, qf), (v0, vf));
    }

    /// `extend` coming to rest at the final position.
    pub fn extend_rest(&mut self, tf: T, qf: T) {
        self.extend(tf, qf, T::zero());
    }

    /// (t0, tf)
    pub fn time(&self) -> (T, T) {
        self.seg.time
    }

    /// (q0, qf)
    pub fn pos(&self) -> (T, T) {
        self.seg.pos
    }

    /// (v0, vf)
    pub fn vel(&self) -> (T, T) {
        self.seg.vel
    }

    /// Last queried time.
    pub fn cursor(&self) -> T {
        self.seg.cursor
    }

    /// Boundary state and cursor.
    pub fn segment(&self) -> &Segment<T> {
        &self.seg
    }

    /// Fitted coefficients.
    pub fn polynomial(&self) -> &Polynomial<T, 4> {
        &self.poly
    }
}

impl<T: Real> Position<T> for Cubic<T> {
    fn q_at(&mut self, t: T) -> T {
        self.seg.cursor = t;
        self.q()
    }

    fn q(&self) -> T {
        self.poly.value(self.seg.clamped_cursor())
    }
}

impl<T: Real> Velocity<T> for Cubic<T> {
    fn v_at(&mut self, t: T) -> T {
        self.seg.cursor = t;
        self.v()
    }

    fn v(&self) -> T {
        self.poly.derivative(self.seg.clamped_cursor())
    }
}

/// Either profile variant, for callers that store profiles of mixed order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyProfile<T = f32> {
    Linear(Linear<T>),
    Cubic(Cubic<T>),
}

impl<T: Real> AnyProfile<T> {
    /// Polynomial degree of the wrapped profile.
    pub fn order(&self) -> usize {
        match self {
            AnyProfile::Linear(_) => 1,
            AnyProfile::Cubic(_) => 3,
        }
    }

    /// Velocity at `t`, or `None` for a profile without velocity.
    /// The cursor moves either way.
    pub fn v_at(&mut self, t: T) -> Option<T> {
        match self {
            AnyProfile::Linear(p) => {
                p.seg.cursor = t;
                None
            }
            AnyProfile::Cubic(p) => Some(p.v_at(t)),
        }
    }

    /// Velocity at the cursor, or `None` for a profile without velocity.
    pub fn v(&self) -> Option<T> {
        match self {
            AnyProfile::Linear(_) => None,
            AnyProfile::Cubic(p) => Some(p.v()),
        }
    }

    /// Boundary state and cursor of the wrapped profile.
    pub fn segment(&self) -> &Segment<T> {
        match self {
            AnyProfile::Linear(p) => p.segment(),
            AnyProfile::Cubic(p) => p.segment(),
        }
    }
}

impl<T: Real> Position<T> for AnyProfile<T> {
    fn q_at(&mut self, t: T) -> T {
        match self {
            AnyProfile::Linear(p) => p.q_at(t),
            AnyProfile::Cubic(p) => p.q_at(t),
        }
    }

    fn q(&self) -> T {
        match self {
            AnyProfile::Linear(p) => p.q(),
            AnyProfile::Cubic(p) => p.q(),
        }
    }
}

impl<T> From<Linear<T>> for AnyProfile<T> {
    fn from(p: Linear<T>) -> Self {
        AnyProfile::Linear(p)
    }
}

impl<T> From<Cubic<T>> for AnyProfile<T> {
    fn from(p: Cubic<T>) -> Self {
        AnyProfile::Cubic(p)
    }
}
