//! The quadratic extension GF(p503^2) = GF(p503)[i] / (i^2 + 1).

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::utilities::ct::ct_u64_eq_zero;

use super::fp::{Fp, FpX2, FP_WORDS, MONT_ONE, P503_R2};

/// Byte length of one packed GF(p503) element.
pub const FP_ENCODED_LENGTH: usize = 63;

/// An element A + B*i of GF(p503^2), components in the Montgomery domain.
#[derive(Clone, Copy, Debug)]
pub struct Fp2 {
    pub(crate) A: Fp,
    pub(crate) B: Fp,
}

impl Fp2 {
    /// Byte length of the wire encoding of an element.
    pub const ENCODED_LENGTH: usize = 2 * FP_ENCODED_LENGTH;

    pub const ZERO: Fp2 = Fp2 {
        A: Fp::ZERO,
        B: Fp::ZERO,
    };

    pub const ONE: Fp2 = Fp2 {
        A: MONT_ONE,
        B: Fp::ZERO,
    };

    /// Squaring via (a + bi)^2 = (a+b)(a-b) + 2ab*i: two wide products and
    /// two Montgomery reductions.
    pub fn square(self) -> Fp2 {
        let a2 = Fp::add_rdc(&self.A, &self.A);
        let a_plus_b = Fp::add_rdc(&self.A, &self.B);
        let a_minus_b = Fp::sub_rdc(&self.A, &self.B);
        let a2_min_b2 = Fp::mul(&a_plus_b, &a_minus_b);
        let ab2 = Fp::mul(&a2, &self.B);
        Fp2 {
            A: Fp::mont_rdc(&a2_min_b2),
            B: Fp::mont_rdc(&ab2),
        }
    }

    /// Inversion through the norm: 1/(a + bi) = (a - bi) / (a^2 + b^2),
    /// with the norm inverted as n^-1 = p34(n^2)^2 * n, so the only
    /// variable-base exponentiation is the fixed p34 chain.
    pub fn invert(self) -> Fp2 {
        let asq = Fp::mul(&self.A, &self.A);
        let bsq = Fp::mul(&self.B, &self.B);
        let nwide = FpX2::add(&asq, &bsq);
        let n = Fp::mont_rdc(&nwide);

        let mut inv = Fp::mul_rdc(&n, &n);
        inv = Fp::p34(&inv);
        inv = Fp::mul_rdc(&inv, &inv);
        inv = Fp::mul_rdc(&inv, &n);

        let ac = Fp::mul(&self.A, &inv);
        let minus_b = Fp::sub_rdc(&Fp::ZERO, &self.B);
        let minus_bc = Fp::mul(&minus_b, &inv);
        Fp2 {
            A: Fp::mont_rdc(&ac),
            B: Fp::mont_rdc(&minus_bc),
        }
    }

    /// Simultaneously invert three elements at the cost of one inversion
    /// and a handful of multiplications.
    pub fn batch3_invert(z1: &Fp2, z2: &Fp2, z3: &Fp2) -> (Fp2, Fp2, Fp2) {
        let t0 = *z1 * *z2;
        let t1 = (t0 * *z3).invert();
        let i3 = t1 * t0;
        let t0 = t1 * *z3;
        (t0 * *z2, t0 * *z1, i3)
    }

    /// Return `0xFFFFFFFF` when the two elements are equal, zero otherwise.
    pub fn equals(&self, rhs: &Fp2) -> u32 {
        (self.A.equals(&rhs.A) & self.B.equals(&rhs.B)) as u32
    }

    /// Return `0xFFFFFFFF` for the zero element, zero otherwise.
    pub fn is_zero(&self) -> u32 {
        let mut a = self.A;
        let mut b = self.B;
        a.rdc_p();
        b.rdc_p();
        let mut acc = 0u64;
        for i in 0..FP_WORDS {
            acc |= a.0[i] | b.0[i];
        }
        ct_u64_eq_zero(acc) as u32
    }

    /// Swap x and y when `ctl` is `0xFFFFFFFF`, constant time.
    pub fn condswap(x: &mut Fp2, y: &mut Fp2, ctl: u32) {
        Fp::swap_cond(&mut x.A, &mut y.A, ctl);
        Fp::swap_cond(&mut x.B, &mut y.B, ctl);
    }

    fn to_mont(x: &Fp) -> Fp {
        Fp::mul_rdc(x, &P503_R2)
    }

    fn from_mont(x: &Fp) -> Fp {
        let mut wide = FpX2::ZERO;
        wide.0[..FP_WORDS].copy_from_slice(&x.0);
        let mut out = Fp::mont_rdc(&wide);
        out.rdc_p();
        out
    }

    /// Pack into wire form: the element leaves the Montgomery domain and
    /// each component is written little endian, A then B.
    ///
    /// The output slice must be exactly `ENCODED_LENGTH` bytes.
    pub fn encode(&self, output: &mut [u8]) {
        assert_eq!(output.len(), Self::ENCODED_LENGTH);
        let a = Self::from_mont(&self.A);
        let b = Self::from_mont(&self.B);
        for i in 0..FP_ENCODED_LENGTH {
            let j = i / 8;
            let k = (i % 8) as u32;
            output[i] = (a.0[j] >> (8 * k)) as u8;
            output[i + FP_ENCODED_LENGTH] = (b.0[j] >> (8 * k)) as u8;
        }
    }

    /// Read an element from wire form and enter the Montgomery domain.
    /// No range validation is performed on the components.
    ///
    /// The input slice must be exactly `ENCODED_LENGTH` bytes.
    pub fn decode(input: &[u8]) -> Fp2 {
        assert_eq!(input.len(), Self::ENCODED_LENGTH);
        let mut a = Fp::ZERO;
        let mut b = Fp::ZERO;
        for i in 0..FP_ENCODED_LENGTH {
            let j = i / 8;
            let k = (i % 8) as u32;
            a.0[j] |= (input[i] as u64) << (8 * k);
            b.0[j] |= (input[i + FP_ENCODED_LENGTH] as u64) << (8 * k);
        }
        Fp2 {
            A: Self::to_mont(&a),
            B: Self::to_mont(&b),
        }
    }
}

impl Add for Fp2 {
    type Output = Fp2;

    #[inline(always)]
    fn add(self, rhs: Fp2) -> Fp2 {
        Fp2 {
            A: Fp::add_rdc(&self.A, &rhs.A),
            B: Fp::add_rdc(&self.B, &rhs.B),
        }
    }
}

impl AddAssign for Fp2 {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Fp2) {
        *self = *self + rhs;
    }
}

impl Sub for Fp2 {
    type Output = Fp2;

    #[inline(always)]
    fn sub(self, rhs: Fp2) -> Fp2 {
        Fp2 {
            A: Fp::sub_rdc(&self.A, &rhs.A),
            B: Fp::sub_rdc(&self.B, &rhs.B),
        }
    }
}

impl SubAssign for Fp2 {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Fp2) {
        *self = *self - rhs;
    }
}

impl Neg for Fp2 {
    type Output = Fp2;

    #[inline(always)]
    fn neg(self) -> Fp2 {
        Fp2::ZERO - self
    }
}

impl Mul for Fp2 {
    type Output = Fp2;

    /// Karatsuba over the extension: with (a + bi)(c + di), compute ac and
    /// bd, then ad + bc = (b - a)(c - d) + ac + bd. Three wide products,
    /// two Montgomery reductions.
    fn mul(self, rhs: Fp2) -> Fp2 {
        let ac = Fp::mul(&self.A, &rhs.A);
        let bd = Fp::mul(&self.B, &rhs.B);

        let b_minus_a = Fp::sub_rdc(&self.B, &self.A);
        let c_minus_d = Fp::sub_rdc(&rhs.A, &rhs.B);

        let mut ad_plus_bc = Fp::mul(&b_minus_a, &c_minus_d);
        ad_plus_bc = FpX2::add(&ad_plus_bc, &ac);
        ad_plus_bc = FpX2::add(&ad_plus_bc, &bd);

        let ac_minus_bd = FpX2::sub(&ac, &bd);
        Fp2 {
            A: Fp::mont_rdc(&ac_minus_bd),
            B: Fp::mont_rdc(&ad_plus_bc),
        }
    }
}

impl MulAssign for Fp2 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Fp2) {
        *self = *self * rhs;
    }
}
