use super::{curve::CurveCoefficientsEquiv, point::PointX};
use crate::fields::fp2::Fp2;

/// One 3-isogeny step, same shape as `FourIsogeny`: the kernel coefficients
/// set by `generate_curve` are reused by every `evaluate_point` call of the
/// same step.
#[derive(Clone, Copy, Debug)]
pub struct ThreeIsogeny {
    K1: Fp2,
    K2: Fp2,
}

impl ThreeIsogeny {
    pub fn new() -> Self {
        Self {
            K1: Fp2::ZERO,
            K2: Fp2::ZERO,
        }
    }

    /// Compute the codomain of the isogeny with kernel <K>, ord(K) = 3,
    /// returned in (A + 2C : A - 2C) form.
    /// Cost: 3S + 2M
    pub fn generate_curve(&mut self, K: &PointX) -> CurveCoefficientsEquiv {
        let (x3, z3) = (&K.X, &K.Z);

        self.K1 = *x3 - *z3;
        let t0 = self.K1.square();
        self.K2 = *x3 + *z3;
        let t1 = self.K2.square();
        let mut t2 = t0 + t1;
        let mut t3 = self.K1 + self.K2;
        t3 = t3.square();
        t3 -= t2;
        t2 = t1 + t3;
        t3 += t0;
        let mut t4 = t3 + t0;
        t4 += t4;
        t4 = t1 + t4;
        let C = t2 * t4;
        t4 = t1 + t2;
        t4 += t4;
        t4 = t0 + t4;
        let A = t3 * t4;
        CurveCoefficientsEquiv { A, C }
    }

    /// Map a point through the 3-isogeny whose kernel was last passed to
    /// `generate_curve`.
    /// Cost: 2S + 4M
    pub fn evaluate_point(&self, P: &PointX) -> PointX {
        let (xp, zp) = (&P.X, &P.Z);

        let mut t0 = *xp + *zp;
        let mut t1 = *xp - *zp;
        t0 *= self.K1;
        t1 *= self.K2;
        let mut t2 = t0 + t1;
        t0 = t1 - t0;
        t2 = t2.square();
        t0 = t0.square();
        PointX {
            X: *xp * t2,
            Z: *zp * t0,
        }
    }
}

impl Default for ThreeIsogeny {
    fn default() -> Self {
        Self::new()
    }
}
