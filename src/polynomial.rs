use num_traits::Float;

/// Polynomial of fixed size `N` (degree `N - 1`) in normalized time:
///
/// `p(t) = c[0] + c[1]*s + ... + c[N-1]*s^(N-1)` with `s = (t - origin) / scale`
///
/// A fitted segment uses `origin = t0` and `scale = tf - t0`, so `s` runs from
/// 0 to 1 over the segment and no coefficient carries a power of the duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Polynomial<T, const N: usize> {
    origin: T,
    scale: T,
    coef: [T; N],
}

impl<T: Float, const N: usize> Default for Polynomial<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Float, const N: usize> Polynomial<T, N> {
    /// Creates a polynomial from coefficients in `s = (t - origin) / scale`.
    pub fn new(origin: T, scale: T, coef: [T; N]) -> Self {
        Self { origin, scale, coef }
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::new(T::zero(), T::one(), [T::zero(); N])
    }

    /// Time at which `s = 0`.
    pub fn origin(&self) -> T {
        self.origin
    }

    /// Time span covered by one unit of `s`.
    pub fn scale(&self) -> T {
        self.scale
    }

    /// Coefficients in powers of `s`.
    pub fn coefficients(&self) -> &[T; N] {
        &self.coef
    }

    /// Normalized time of `t`.
    pub fn normalize(&self, t: T) -> T {
        (t - self.origin) / self.scale
    }

    /// Basis row for the value: `[1, s, s^2, ...]`.
    pub fn position_basis(&self, t: T) -> [T; N] {
        let s = self.normalize(t);
        let mut row = [T::zero(); N];
        let mut pow = T::one();
        for cell in row.iter_mut() {
            *cell = pow;
            pow = pow * s;
        }
        row
    }

    /// Basis row for the derivative with respect to `s`: `[0, 1, 2*s, 3*s^2, ...]`.
    ///
    /// Divide the dot product by `scale` to get the time derivative.
    pub fn velocity_basis(&self, t: T) -> [T; N] {
        let s = self.normalize(t);
        let mut row = [T::zero(); N];
        let mut pow = T::one();
        let mut k = T::zero();
        for cell in row.iter_mut().skip(1) {
            k = k + T::one();
            *cell = k * pow;
            pow = pow * s;
        }
        row
    }

    /// Value at `t`.
    pub fn value(&self, t: T) -> T {
        dot(&self.position_basis(t), &self.coef)
    }

    /// First time derivative at `t`.
    pub fn derivative(&self, t: T) -> T {
        dot(&self.velocity_basis(t), &self.coef) / self.scale
    }

    /// Expands into plain monomial coefficients `a` with `p(t) = sum(a[i] * t^i)`.
    pub fn monomial(&self) -> [T; N] {
        // Horner over polynomials: acc = acc * (t - origin) / scale + c[k]
        let mut acc = [T::zero(); N];
        for &c in self.coef.iter().rev() {
            let mut next = [T::zero(); N];
            for i in 0..N {
                let shifted = if i > 0 { acc[i - 1] } else { T::zero() };
                next[i] = (shifted - self.origin * acc[i]) / self.scale;
            }
            next[0] = next[0] + c;
            acc = next;
        }
        acc
    }
}

fn dot<T: Float, const N: usize>(row: &[T; N], coef: &[T; N]) -> T {
    row.iter()
        .zip(coef.iter())
        .fold(T::zero(), |sum, (&b, &c)| sum + b * c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_polynomial_evaluates_to_zero() {
        let p = Polynomial::<f32, 4>::zero();
        assert_eq!(p.value(12.0), 0.0);
        assert_eq!(p.derivative(-3.0), 0.0);
    }

    #[test]
    fn basis_rows() {
        let p = Polynomial::new(1.0_f64, 1.0, [0.0; 4]);
        assert_eq!(p.position_basis(3.0), [1.0, 2.0, 4.0, 8.0]);
        assert_eq!(p.velocity_basis(3.0), [0.0, 1.0, 4.0, 12.0]);

        let p = Polynomial::new(1.0_f64, 4.0, [0.0; 4]);
        assert_eq!(p.position_basis(3.0), [1.0, 0.5, 0.25, 0.125]);
        assert_eq!(p.velocity_basis(3.0), [0.0, 1.0, 1.0, 0.75]);
    }

    #[test]
    fn value_and_derivative() {
        // 1 + 2(t-1) - (t-1)^2 + 0.5(t-1)^3
        let p = Polynomial::new(1.0_f64, 1.0, [1.0, 2.0, -1.0, 0.5]);
        assert_relative_eq!(p.value(1.0), 1.0);
        assert_relative_eq!(p.value(3.0), 1.0 + 4.0 - 4.0 + 4.0);
        assert_relative_eq!(p.derivative(1.0), 2.0);
        assert_relative_eq!(p.derivative(3.0), 2.0 - 4.0 + 6.0);
    }

    #[test]
    fn scaled_derivative_is_per_unit_time() {
        // s = (t - 2) / 0.5, p = 3s^2, dp/dt = 6s / 0.5
        let p = Polynomial::new(2.0_f64, 0.5, [0.0, 0.0, 3.0]);
        assert_relative_eq!(p.value(2.25), 0.75);
        assert_relative_eq!(p.derivative(2.25), 6.0);
    }

    #[test]
    fn tiny_scale_stays_finite_at_both_ends() {
        let p = Polynomial::new(0.0_f32, 1e-13, [0.0, 0.0, 3.0, -2.0]);
        assert_eq!(p.value(0.0), 0.0);
        assert_eq!(p.value(1e-13), 1.0);
        assert_eq!(p.derivative(0.0), 0.0);
    }

    #[test]
    fn monomial_at_zero_origin_is_identity() {
        let p = Polynomial::new(0.0_f64, 1.0, [3.0, -1.0, 0.25, 2.0]);
        assert_eq!(p.monomial(), [3.0, -1.0, 0.25, 2.0]);
    }

    #[test]
    fn monomial_expansion_matches_normalized_form() {
        // (t - 2)^2 = 4 - 4t + t^2
        let p = Polynomial::new(2.0_f64, 1.0, [0.0, 0.0, 1.0]);
        assert_eq!(p.monomial(), [4.0, -4.0, 1.0]);

        let q = Polynomial::new(-1.5_f64, -2.5, [0.5, 1.0, -2.0, 0.75]);
        let a = q.monomial();
        for &t in &[-3.0, -1.5, 0.0, 0.7, 2.0] {
            let expanded = a[0] + a[1] * t + a[2] * t * t + a[3] * t * t * t;
            assert_relative_eq!(expanded, q.value(t), epsilon = 1e-12);
        }
    }
}
