//! Strategy-driven traversal of the isogeny decomposition tree.
//!
//! A degree ell^e isogeny splits into e small steps; the kernel of step j
//! is the image of [ell^(e-1-j)]R, and recomputing that multiple from
//! scratch each round costs O(e^2). The strategy table instead prescribes,
//! as a flat array of e - 1 advance counts, when to snapshot the running
//! point onto a stack so that every multiple is computed once: entry
//! `strat[sidx]` is how many ell-multiplications to apply before the next
//! snapshot. Each small step then pushes the whole stack (and, for
//! public-key generation, the three companion basis points) through the
//! isogeny, keeping the invariant that after step j everything held lives
//! on the j-th image curve and R has order ell^(e-j) on it.

use super::{
    curve::{CurveCoefficientsEquiv, CurveParams},
    four_isogeny::FourIsogeny,
    point::PointX,
    three_isogeny::ThreeIsogeny,
};

/// Compute the full 2^(2n)-isogeny with kernel <R>, n = strategy.len() + 1
/// steps of degree 4, mapping `images` through every step. Returns the
/// final codomain in (A + 2C : 4C) form.
pub fn four_isogeny_chain(
    cparams: &CurveParams,
    R: &PointX,
    strategy: &[u8],
    images: &mut [PointX],
) -> CurveCoefficientsEquiv {
    let mut points: Vec<PointX> = Vec::with_capacity(8);
    let mut indices: Vec<usize> = Vec::with_capacity(8);
    let mut xR = *R;
    let mut i = 0usize;
    let mut sidx = 0usize;

    let mut cparam = cparams.calc_equiv4();
    let mut phi = FourIsogeny::new();
    let n = strategy.len();

    for j in 1..=n {
        // Advance R by [4^k] per the strategy until it has order 4,
        // snapshotting the intermediates.
        while i <= n - j {
            points.push(xR);
            indices.push(i);
            let k = strategy[sidx] as usize;
            sidx += 1;
            cparam.pow2k(&mut xR, 2 * k);
            i += k;
        }

        cparam = phi.generate_curve(&xR);
        for pt in points.iter_mut() {
            *pt = phi.evaluate_point(pt);
        }
        for pt in images.iter_mut() {
            *pt = phi.evaluate_point(pt);
        }

        // The strategy always leaves the next kernel point on the stack.
        xR = points.pop().expect("traversal stack underflow");
        i = indices.pop().expect("traversal stack underflow");
    }

    // Final step: R now has order 4 itself.
    let coef = phi.generate_curve(&xR);
    for pt in images.iter_mut() {
        *pt = phi.evaluate_point(pt);
    }
    coef
}

/// Compute the full 3^n-isogeny with kernel <R>, n = strategy.len() + 1
/// steps of degree 3, mapping `images` through every step. Returns the
/// final codomain in (A + 2C : A - 2C) form.
pub fn three_isogeny_chain(
    cparams: &CurveParams,
    R: &PointX,
    strategy: &[u8],
    images: &mut [PointX],
) -> CurveCoefficientsEquiv {
    let mut points: Vec<PointX> = Vec::with_capacity(8);
    let mut indices: Vec<usize> = Vec::with_capacity(8);
    let mut xR = *R;
    let mut i = 0usize;
    let mut sidx = 0usize;

    let mut cparam = cparams.calc_equiv3();
    let mut phi = ThreeIsogeny::new();
    let n = strategy.len();

    for j in 1..=n {
        while i <= n - j {
            points.push(xR);
            indices.push(i);
            let k = strategy[sidx] as usize;
            sidx += 1;
            cparam.pow3k(&mut xR, k);
            i += k;
        }

        cparam = phi.generate_curve(&xR);
        for pt in points.iter_mut() {
            *pt = phi.evaluate_point(pt);
        }
        for pt in images.iter_mut() {
            *pt = phi.evaluate_point(pt);
        }

        xR = points.pop().expect("traversal stack underflow");
        i = indices.pop().expect("traversal stack underflow");
    }

    let coef = phi.generate_curve(&xR);
    for pt in images.iter_mut() {
        *pt = phi.evaluate_point(pt);
    }
    coef
}
