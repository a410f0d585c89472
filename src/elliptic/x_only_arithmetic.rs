use crate::fields::fp2::Fp2;

use super::{
    curve::{CurveCoefficientsEquiv, CurveParams},
    point::PointX,
};

impl CurveCoefficientsEquiv {
    /// Compute [2^k]P in place. The coefficients must be in the
    /// 4-isogeny-friendly (A + 2C : 4C) form.
    /// Cost: k * (2S + 4M)
    pub fn pow2k(&self, P: &mut PointX, k: usize) {
        let (x, z) = (&mut P.X, &mut P.Z);
        for _ in 0..k {
            let mut t0 = *x - *z;
            let mut t1 = *x + *z;
            t0 = t0.square();
            t1 = t1.square();
            *z = self.C * t0;
            *x = *z * t1;
            t1 -= t0;
            t0 = self.A * t1;
            *z += t0;
            *z *= t1;
        }
    }

    /// Compute [3^k]P in place. The coefficients must be in the
    /// 3-isogeny-friendly (A + 2C : A - 2C) form.
    /// Cost: k * (5S + 7M)
    pub fn pow3k(&self, P: &mut PointX, k: usize) {
        let (x, z) = (&mut P.X, &mut P.Z);
        for _ in 0..k {
            let mut t0 = *x - *z;
            let mut t2 = t0.square();
            let t1 = *x + *z;
            let mut t3 = t1.square();
            let t4 = t1 + t0;
            t0 = t1 - t0;
            let mut t1 = t4.square();
            t1 -= t3;
            t1 -= t2;
            let t5 = t3 * self.A;
            t3 *= t5;
            let t6 = t2 * self.C;
            t2 *= t6;
            t3 = t2 - t3;
            t2 = t5 - t6;
            t1 *= t2;
            t2 = t3 + t1;
            t2 = t2.square();
            *x = t2 * t4;
            t1 = t3 - t1;
            t1 = t1.square();
            *z = t1 * t0;
        }
    }
}

/// Combined x-only doubling and differential addition: returns
/// ([2]P, P + Q) given x(Q - P) and the affine constant (A + 2C) / 4C.
/// Cost: 4S + 8M
#[inline(always)]
fn x_dbl_add(P: &PointX, Q: &PointX, QmP: &PointX, a24: &Fp2) -> (PointX, PointX) {
    let mut t0 = P.X + P.Z;
    let mut t1 = P.X - P.Z;
    let mut X2 = t0.square();
    let mut t2 = Q.X - Q.Z;
    let mut Xpq = Q.X + Q.Z;
    t0 *= t2;
    let mut Z2 = t1.square();
    t1 *= Xpq;
    t2 = X2 - Z2;
    X2 *= Z2;
    Xpq = *a24 * t2;
    let mut Zpq = t0 - t1;
    Z2 = Xpq + Z2;
    Xpq = t0 + t1;
    Z2 *= t2;
    Zpq = Zpq.square();
    Xpq = Xpq.square();
    Zpq *= QmP.X;
    Xpq *= QmP.Z;
    (
        PointX { X: X2, Z: Z2 },
        PointX { X: Xpq, Z: Zpq },
    )
}

impl CurveParams {
    /// Three-point Montgomery ladder: return x(P + [scalar]Q) given x(P),
    /// x(Q) and x(Q - P).
    ///
    /// The scalar is little-endian and processed LSB first over `nbits`
    /// bits; the loop is constant time, with the branch on each key bit
    /// replaced by a conditional swap of the two running points.
    pub fn three_point_ladder(
        &self,
        P: &PointX,
        Q: &PointX,
        QmP: &PointX,
        nbits: usize,
        scalar: &[u8],
    ) -> PointX {
        let a24 = self.a_plus2_over4();

        let mut R0 = *Q;
        let mut R1 = *P;
        let mut R2 = *QmP;

        let mut prev = 0u32;
        for i in 0..nbits {
            let bit = (((scalar[i >> 3] >> (i & 7)) as u32) & 1).wrapping_neg();
            PointX::condswap(&mut R1, &mut R2, bit ^ prev);
            (R0, R2) = x_dbl_add(&R0, &R2, &R1, &a24);
            prev = bit;
        }
        PointX::condswap(&mut R1, &mut R2, prev);
        R1
    }
}
