use crate::fields::fp2::Fp2;

/// Montgomery curve C*y^2 = x^3 + A*x^2 + x with the coefficient kept
/// projectively as (A : C).
#[derive(Clone, Copy, Debug)]
pub struct CurveParams {
    pub A: Fp2,
    pub C: Fp2,
}

/// Projective coefficient pair consumed by one isogeny family:
/// (A + 2C : 4C) for 4-isogenies, (A + 2C : A - 2C) for 3-isogenies.
#[derive(Clone, Copy, Debug)]
pub struct CurveCoefficientsEquiv {
    pub A: Fp2,
    pub C: Fp2,
}

impl CurveParams {
    /// The starting curve E0 : y^2 = x^3 + x.
    pub const fn base_curve() -> Self {
        Self {
            A: Fp2::ZERO,
            C: Fp2::ONE,
        }
    }

    /// Rewrite (A : C) into the (A + 2C : 4C) form the 4-isogeny steps use.
    pub fn calc_equiv4(&self) -> CurveCoefficientsEquiv {
        let c2 = self.C + self.C;
        CurveCoefficientsEquiv {
            A: self.A + c2,
            C: c2 + c2,
        }
    }

    /// Rewrite (A : C) into the (A + 2C : A - 2C) form the 3-isogeny steps use.
    pub fn calc_equiv3(&self) -> CurveCoefficientsEquiv {
        let c2 = self.C + self.C;
        CurveCoefficientsEquiv {
            A: self.A + c2,
            C: self.A - c2,
        }
    }

    /// Recover (A : C) from (A + 2C : A - 2C). The result is scaled to
    /// (4A : 4C), which is the same projective class.
    pub fn recover_coefficients3(coef: &CurveCoefficientsEquiv) -> Self {
        let mut A = coef.A + coef.C;
        A += A;
        Self {
            A,
            C: coef.A - coef.C,
        }
    }

    /// Recover (A : C) from (A + 2C : 4C), again as the class (4A : 4C).
    pub fn recover_coefficients4(coef: &CurveCoefficientsEquiv) -> Self {
        let mut A = coef.A + coef.A;
        A += A;
        A -= coef.C;
        A -= coef.C;
        Self { A, C: coef.C }
    }

    /// Recover the curve coefficient A from the affine x-coordinates of a
    /// basis x(P), x(Q) and x(Q - P):
    ///
    ///   A = (1 - xP*xQ - xP*xQmP - xQ*xQmP)^2 / (4*xP*xQ*xQmP)
    ///       - xP - xQ - xQmP
    ///
    /// This is how the responder reconstructs the peer's curve from a
    /// public key. The returned C is one.
    pub fn recover_coordinate_a(xP: &Fp2, xQ: &Fp2, xQmP: &Fp2) -> Self {
        let mut t1 = *xP + *xQ;
        let mut t0 = *xP * *xQ;
        let mut A = *xQmP * t1;
        A += t0;
        t0 *= *xQmP;
        A -= Fp2::ONE;
        t0 += t0;
        t1 += *xQmP;
        t0 += t0;
        A = A.square();
        t0 = t0.invert();
        A *= t0;
        A -= t1;
        Self { A, C: Fp2::ONE }
    }

    /// Compute the j-invariant j = 256*(A^2 - 3C^2)^3 / (C^4*(A^2 - 4C^2)).
    pub fn j_invariant(&self) -> Fp2 {
        let mut j = self.A.square();
        let mut t1 = self.C.square();
        let mut t0 = t1 + t1;
        t0 = j - t0;
        t0 -= t1;
        j = t0 - t1;
        t1 = t1.square();
        j *= t1;
        t0 += t0;
        t0 += t0;
        t1 = t0.square();
        t0 *= t1;
        t0 += t0;
        t0 += t0;
        j = j.invert();
        j *= t0;
        j
    }

    /// The ladder constant (A + 2C) / 4C as a single field element.
    pub(crate) fn a_plus2_over4(&self) -> Fp2 {
        let mut t = self.C + self.C;
        let ret = self.A + t;
        t += t;
        ret * t.invert()
    }
}
