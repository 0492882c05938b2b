//! Boundary fits for the profile polynomials.
//!
//! Both fits are the closed-form solutions of the boundary systems
//!
//! ```text
//! linear:  [1 t0] c = q0         cubic:  [1 t0 t0^2 t0^3 ] c = q0
//!          [1 tf] c = qf                 [0 1  2t0  3t0^2] c = v0
//!                                        [1 tf tf^2 tf^3 ] c = qf
//!                                        [0 1  2tf  3tf^2] c = vf
//! ```
//!
//! expressed in normalized time `s = (t - t0) / (tf - t0)`, so no matrix
//! factorisation is needed and no coefficient divides by a power of the
//! duration.
//!
//! A segment with `t0 == tf` makes both systems singular. It is treated as an
//! instantaneous step: the end conditions are kept exactly and the start
//! conditions are dropped.

use log::{debug, trace};

use crate::polynomial::Polynomial;
use crate::segment::Segment;
use crate::Real;

/// Solves `q(t0) = q0, q(tf) = qf` for a first order polynomial.
pub fn fit_linear<T: Real>(seg: &Segment<T>) -> Polynomial<T, 2> {
    let (t0, tf) = seg.time;
    let (q0, qf) = seg.pos;
    trace!("fit_linear: t = {:?} -> {:?}, q = {:?} -> {:?}", t0, tf, q0, qf);

    if seg.is_degenerate() {
        debug!("fit_linear: degenerate segment at t = {:?}, stepping to q = {:?}", tf, qf);
        return Polynomial::new(tf, T::one(), [qf, T::zero()]);
    }

    Polynomial::new(t0, seg.duration(), [q0, qf - q0])
}

/// Solves the cubic Hermite conditions `q(t0) = q0, q'(t0) = v0, q(tf) = qf, q'(tf) = vf`.
pub fn fit_cubic<T: Real>(seg: &Segment<T>) -> Polynomial<T, 4> {
    let (t0, tf) = seg.time;
    let (q0, qf) = seg.pos;
    let (v0, vf) = seg.vel;
    trace!(
        "fit_cubic: t = {:?} -> {:?}, q = {:?} -> {:?}, v = {:?} -> {:?}",
        t0, tf, q0, qf, v0, vf
    );

    if seg.is_degenerate() {
        debug!(
            "fit_cubic: degenerate segment at t = {:?}, stepping to q = {:?}, v = {:?}",
            tf, qf, vf
        );
        return Polynomial::new(tf, T::one(), [qf, vf, T::zero(), T::zero()]);
    }

    let two = T::one() + T::one();
    let three = two + T::one();

    let h = seg.duration();
    let dq = qf - q0;
    // boundary velocities per unit of normalized time
    let d0 = v0 * h;
    let df = vf * h;

    let c2 = three * dq - two * d0 - df;
    let c3 = d0 + df - two * dq;

    Polynomial::new(t0, h, [q0, d0, c2, c3])
}
