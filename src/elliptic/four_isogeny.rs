use super::{curve::CurveCoefficientsEquiv, point::PointX};
use crate::fields::fp2::Fp2;

/// One 4-isogeny step. `generate_curve` consumes a point of order 4 on the
/// current curve and stashes the three kernel coefficients that
/// `evaluate_point` needs to push points through the same step.
#[derive(Clone, Copy, Debug)]
pub struct FourIsogeny {
    K1: Fp2,
    K2: Fp2,
    K3: Fp2,
}

impl FourIsogeny {
    pub fn new() -> Self {
        Self {
            K1: Fp2::ZERO,
            K2: Fp2::ZERO,
            K3: Fp2::ZERO,
        }
    }

    /// Compute the codomain of the isogeny with kernel <K>, ord(K) = 4,
    /// returned in (A + 2C : 4C) form.
    /// Cost: 4S + 0M
    pub fn generate_curve(&mut self, K: &PointX) -> CurveCoefficientsEquiv {
        let (x4, z4) = (&K.X, &K.Z);

        self.K2 = *x4 - *z4;
        self.K3 = *x4 + *z4;
        self.K1 = z4.square();
        self.K1 += self.K1;
        let C = self.K1.square();
        self.K1 += self.K1;
        let mut A = x4.square();
        A += A;
        A = A.square();
        CurveCoefficientsEquiv { A, C }
    }

    /// Map a point through the 4-isogeny whose kernel was last passed to
    /// `generate_curve`.
    /// Cost: 2S + 6M
    pub fn evaluate_point(&self, P: &PointX) -> PointX {
        let (xp, zp) = (&P.X, &P.Z);

        let mut t0 = *xp + *zp;
        let mut t1 = *xp - *zp;
        let mut xq = t0 * self.K2;
        let mut zq = t1 * self.K3;
        t0 *= t1;
        t0 *= self.K1;
        t1 = xq + zq;
        zq = xq - zq;
        t1 = t1.square();
        zq = zq.square();
        xq = t0 + t1;
        t0 = zq - t0;
        xq *= t1;
        zq *= t0;
        PointX { X: xq, Z: zq }
    }
}

impl Default for FourIsogeny {
    fn default() -> Self {
        Self::new()
    }
}
