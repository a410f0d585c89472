//! Arithmetic over GF(p503) with p = 2^250 * 3^159 - 1.
//!
//! Elements are eight little-endian 64-bit limbs kept in the Montgomery
//! domain x*R mod p with R = 2^512, and are only lazily reduced: any
//! public-facing operation leaves its result in [0, 2p). All operations are
//! constant time; there is no branch or memory access indexed by limb data.

use crate::utilities::ct::{ct_mask_u64, ct_u64_eq_zero};

use super::utils64::{addcarry_u64, subborrow_u64, umull};

pub(crate) const FP_WORDS: usize = 8;

/// Number of zero least-significant limbs of p + 1, skipped during the
/// Montgomery reduction.
const P1_ZERO_WORDS: usize = 3;

/// A GF(p503) element as little-endian limbs, normally in Montgomery form.
#[derive(Clone, Copy, Debug)]
pub struct Fp(pub(crate) [u64; FP_WORDS]);

/// A 1006-bit unreduced product of two `Fp`, awaiting Montgomery reduction.
/// Never crosses the public API boundary.
#[derive(Clone, Copy, Debug)]
pub struct FpX2(pub(crate) [u64; 2 * FP_WORDS]);

/// The prime 2^250 * 3^159 - 1 underlying the field.
pub const P503: Fp = Fp([
    0xFFFFFFFFFFFFFFFF, 0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF, 0xABFFFFFFFFFFFFFF,
    0x13085BDA2211E7A0, 0x1B9BF6C87B7E7DAF,
    0x6045C6BDDA77A4D0, 0x004066F541811E1E,
]);

/// 2 * p503, the bound for lazily reduced elements.
pub const P503_X2: Fp = Fp([
    0xFFFFFFFFFFFFFFFE, 0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF, 0x57FFFFFFFFFFFFFF,
    0x2610B7B44423CF41, 0x3737ED90F6FCFB5E,
    0xC08B8D7BB4EF49A0, 0x0080CDEA83023C3C,
]);

/// p503 + 1; its three least significant limbs are zero.
pub const P503_P1: Fp = Fp([
    0x0000000000000000, 0x0000000000000000,
    0x0000000000000000, 0xAC00000000000000,
    0x13085BDA2211E7A0, 0x1B9BF6C87B7E7DAF,
    0x6045C6BDDA77A4D0, 0x004066F541811E1E,
]);

/// R^2 mod p503 with R = 2^512, for conversion into the Montgomery domain.
pub const P503_R2: Fp = Fp([
    0x5289A0CF641D011F, 0x9B88257189FED2B9,
    0xA3B365D58DC8F17A, 0x5BC57AB6EFF168EC,
    0x9E51998BD84D4423, 0xBF8999CBAC3B5695,
    0x46E9127BCE14CDB6, 0x003F6CFCE8B81771,
]);

/// 1 in the Montgomery domain, i.e. R mod p503.
pub const MONT_ONE: Fp = Fp([
    0x00000000000003F9, 0x0000000000000000,
    0x0000000000000000, 0xB400000000000000,
    0x63CB1A6EA6DED2B4, 0x51689D8D667EB37D,
    0x8ACD77C71AB24142, 0x0026FBAEC60F5953,
]);

// Fixed sliding-window addition chain for x^((p-3)/4), window of 16 odd
// powers. POW_STRATEGY drives the squarings, MUL_STRATEGY indexes the
// window; the chain performs sum(POW_STRATEGY) + 1 squarings and
// 15 + len(MUL_STRATEGY) multiplications regardless of the operand.
static POW_STRATEGY: [u8; 92] = [
    1, 12, 5, 5, 2, 7, 11, 3, 8, 4, 11, 4, 7, 5, 6, 3, 7, 5, 7, 2, 12, 5, 6,
    4, 6, 8, 6, 4, 7, 5, 5, 8, 5, 8, 5, 5, 8, 9, 3, 6, 2, 10, 6, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5,
    5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 5, 3,
];
static MUL_STRATEGY: [u8; 92] = [
    0, 12, 11, 10, 0, 1, 8, 3, 7, 1, 8, 3, 6, 7, 14, 2, 14, 14, 9, 0, 13, 9,
    15, 5, 12, 7, 13, 7, 15, 6, 7, 9, 0, 5, 7, 6, 8, 8, 3, 7, 0, 10, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15,
    15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 15, 3,
];

impl Fp {
    pub const ZERO: Fp = Fp([0u64; FP_WORDS]);

    /// Compute x + y mod 2p.
    pub(crate) fn add_rdc(x: &Fp, y: &Fp) -> Fp {
        let mut z = Fp::ZERO;
        let mut carry = 0u8;

        for i in 0..FP_WORDS {
            (z.0[i], carry) = addcarry_u64(x.0[i], y.0[i], carry);
        }

        // z = z - 2p
        let mut borrow = 0u8;
        for i in 0..FP_WORDS {
            (z.0[i], borrow) = subborrow_u64(z.0[i], P503_X2.0[i], borrow);
        }

        // if z < 0, add 2p back
        let mask = 0u64.wrapping_sub(borrow as u64);
        carry = 0;
        for i in 0..FP_WORDS {
            (z.0[i], carry) = addcarry_u64(z.0[i], P503_X2.0[i] & mask, carry);
        }
        z
    }

    /// Compute x - y mod 2p.
    pub(crate) fn sub_rdc(x: &Fp, y: &Fp) -> Fp {
        let mut z = Fp::ZERO;
        let mut borrow = 0u8;

        for i in 0..FP_WORDS {
            (z.0[i], borrow) = subborrow_u64(x.0[i], y.0[i], borrow);
        }

        // if z < 0, add 2p back
        let mask = 0u64.wrapping_sub(borrow as u64);
        let mut carry = 0u8;
        for i in 0..FP_WORDS {
            (z.0[i], carry) = addcarry_u64(z.0[i], P503_X2.0[i] & mask, carry);
        }
        z
    }

    /// Reduce an element of [0, 2p) into [0, p).
    pub(crate) fn rdc_p(&mut self) {
        let mut borrow = 0u8;
        for i in 0..FP_WORDS {
            (self.0[i], borrow) = subborrow_u64(self.0[i], P503.0[i], borrow);
        }

        let mask = 0u64.wrapping_sub(borrow as u64);
        let mut carry = 0u8;
        for i in 0..FP_WORDS {
            (self.0[i], carry) = addcarry_u64(self.0[i], P503.0[i] & mask, carry);
        }
    }

    /// Swap x and y when `ctl` is `0xFFFFFFFF`, leave them unchanged when it
    /// is zero, without revealing `ctl` through timing.
    pub(crate) fn swap_cond(x: &mut Fp, y: &mut Fp, ctl: u32) {
        let mask = ct_mask_u64(ctl);
        for i in 0..FP_WORDS {
            let t = mask & (x.0[i] ^ y.0[i]);
            x.0[i] ^= t;
            y.0[i] ^= t;
        }
    }

    /// Schoolbook product x * y, column sums accumulated in the running
    /// three-word total (t, u, v).
    pub(crate) fn mul(x: &Fp, y: &Fp) -> FpX2 {
        let mut z = FpX2([0u64; 2 * FP_WORDS]);
        let (mut t, mut u, mut v) = (0u64, 0u64, 0u64);
        let mut carry: u8;

        for i in 0..FP_WORDS {
            for j in 0..=i {
                let (lo, hi) = umull(x.0[j], y.0[i - j]);
                (v, carry) = addcarry_u64(lo, v, 0);
                (u, carry) = addcarry_u64(hi, u, carry);
                t = t.wrapping_add(carry as u64);
            }
            z.0[i] = v;
            v = u;
            u = t;
            t = 0;
        }

        for i in FP_WORDS..(2 * FP_WORDS - 1) {
            for j in (i - FP_WORDS + 1)..FP_WORDS {
                let (lo, hi) = umull(x.0[j], y.0[i - j]);
                (v, carry) = addcarry_u64(lo, v, 0);
                (u, carry) = addcarry_u64(hi, u, carry);
                t = t.wrapping_add(carry as u64);
            }
            z.0[i] = v;
            v = u;
            u = t;
            t = 0;
        }
        z.0[2 * FP_WORDS - 1] = v;
        z
    }

    /// Montgomery reduction x * R^-1 mod 2p, with R = 2^512. Exploits that
    /// -p^-1 = 1 mod 2^64 and that the low `P1_ZERO_WORDS` limbs of p + 1
    /// are zero, so the corresponding products are skipped.
    pub(crate) fn mont_rdc(x: &FpX2) -> Fp {
        let mut z = Fp::ZERO;
        let (mut t, mut u, mut v) = (0u64, 0u64, 0u64);
        let mut carry: u8;
        let mut count = P1_ZERO_WORDS;

        for i in 0..FP_WORDS {
            for j in 0..i {
                if j < (i + 1).saturating_sub(count) {
                    let (lo, hi) = umull(z.0[j], P503_P1.0[i - j]);
                    (v, carry) = addcarry_u64(lo, v, 0);
                    (u, carry) = addcarry_u64(hi, u, carry);
                    t = t.wrapping_add(carry as u64);
                }
            }
            (v, carry) = addcarry_u64(v, x.0[i], 0);
            (u, carry) = addcarry_u64(u, 0, carry);
            t = t.wrapping_add(carry as u64);

            z.0[i] = v;
            v = u;
            u = t;
            t = 0;
        }

        for i in FP_WORDS..(2 * FP_WORDS - 1) {
            if count > 0 {
                count -= 1;
            }
            for j in (i - FP_WORDS + 1)..FP_WORDS {
                if j < (FP_WORDS - count) {
                    let (lo, hi) = umull(z.0[j], P503_P1.0[i - j]);
                    (v, carry) = addcarry_u64(lo, v, 0);
                    (u, carry) = addcarry_u64(hi, u, carry);
                    t = t.wrapping_add(carry as u64);
                }
            }
            (v, carry) = addcarry_u64(v, x.0[i], 0);
            (u, carry) = addcarry_u64(u, 0, carry);
            t = t.wrapping_add(carry as u64);

            z.0[i - FP_WORDS] = v;
            v = u;
            u = t;
            t = 0;
        }
        (v, _) = addcarry_u64(v, x.0[2 * FP_WORDS - 1], 0);
        z.0[FP_WORDS - 1] = v;
        z
    }

    /// Montgomery multiplication: x * y * R^-1 mod 2p for operands already
    /// in the Montgomery domain.
    pub(crate) fn mul_rdc(x: &Fp, y: &Fp) -> Fp {
        Fp::mont_rdc(&Fp::mul(x, y))
    }

    /// Compute x^((p-3)/4). If x is a nonzero square this is 1/sqrt(x).
    /// The chain is fixed and independent of the operand.
    pub(crate) fn p34(x: &Fp) -> Fp {
        // Precompute the window of odd powers: lookup[i] = x^(2i+1).
        let mut lookup = [Fp::ZERO; 16];
        let xx = Fp::mul_rdc(x, x);
        lookup[0] = *x;
        for i in 1..16 {
            lookup[i] = Fp::mul_rdc(&lookup[i - 1], &xx);
        }

        let mut dest = lookup[MUL_STRATEGY[0] as usize];
        for i in 1..POW_STRATEGY.len() {
            for _ in 0..POW_STRATEGY[i] {
                dest = Fp::mul_rdc(&dest, &dest);
            }
            dest = Fp::mul_rdc(&dest, &lookup[MUL_STRATEGY[i] as usize]);
        }
        dest
    }

    /// Return `0xFF..FF` when the canonical values match, zero otherwise.
    pub(crate) fn equals(&self, rhs: &Fp) -> u64 {
        let mut x = *self;
        let mut y = *rhs;
        x.rdc_p();
        y.rdc_p();
        let mut acc = 0u64;
        for i in 0..FP_WORDS {
            acc |= x.0[i] ^ y.0[i];
        }
        ct_u64_eq_zero(acc)
    }
}

impl FpX2 {
    pub(crate) const ZERO: FpX2 = FpX2([0u64; 2 * FP_WORDS]);

    /// Double-width addition without reduction.
    pub(crate) fn add(x: &FpX2, y: &FpX2) -> FpX2 {
        let mut z = FpX2::ZERO;
        let mut carry = 0u8;
        for i in 0..2 * FP_WORDS {
            (z.0[i], carry) = addcarry_u64(x.0[i], y.0[i], carry);
        }
        z
    }

    /// Double-width subtraction; a borrow is repaired by adding p to the
    /// upper half, keeping the value a valid pre-reduction product.
    pub(crate) fn sub(x: &FpX2, y: &FpX2) -> FpX2 {
        let mut z = FpX2::ZERO;
        let mut borrow = 0u8;
        for i in 0..2 * FP_WORDS {
            (z.0[i], borrow) = subborrow_u64(x.0[i], y.0[i], borrow);
        }

        let mask = 0u64.wrapping_sub(borrow as u64);
        let mut carry = 0u8;
        for i in FP_WORDS..2 * FP_WORDS {
            (z.0[i], carry) = addcarry_u64(z.0[i], P503.0[i - FP_WORDS] & mask, carry);
        }
        z
    }
}
