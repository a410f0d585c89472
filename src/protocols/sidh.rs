//! SIDH key generation and shared-secret derivation over p503.
//!
//! An A-side key works over the 2^250-torsion and computes a chain of
//! 4-isogenies; a B-side (or SIKE) key works over the 3^159-torsion and
//! computes 3-isogenies. The shared secret is the j-invariant of the
//! doubly-quotiented curve, identical from both directions.

use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::elliptic::{
    curve::CurveParams,
    point::PointX,
    strategy::{four_isogeny_chain, three_isogeny_chain},
};
use crate::errors::Error;
use crate::fields::fp2::Fp2;

use super::sidh_parameters::{DomainParams, Params, SIKE_P503};

/// Which torsion side a key lives on. `Sike` keys are B-side keys that
/// additionally carry the secret `s` used by the decapsulation fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyVariant {
    SidhA,
    SidhB,
    Sike,
}

impl KeyVariant {
    pub(crate) fn is_a_side(self) -> bool {
        matches!(self, KeyVariant::SidhA)
    }

    pub(crate) fn domain(self, params: &'static Params) -> &'static DomainParams {
        if self.is_a_side() {
            &params.A
        } else {
            &params.B
        }
    }
}

/// A SIDH or SIKE private key. The scalar (and `s` for SIKE keys) is wiped
/// on drop; holders of exported copies are responsible for their erasure.
pub struct PrivateKey {
    pub(crate) params: &'static Params,
    variant: KeyVariant,
    pub(crate) scalar: Vec<u8>,
    pub(crate) s: Vec<u8>,
}

/// A SIDH or SIKE public key: the image curve is transmitted as the affine
/// x-coordinates of the pushed-through basis x(P), x(Q), x(Q - P).
#[derive(Clone, Copy, Debug)]
pub struct PublicKey {
    pub(crate) params: &'static Params,
    variant: KeyVariant,
    pub(crate) affine_xP: Fp2,
    pub(crate) affine_xQ: Fp2,
    pub(crate) affine_xQmP: Fp2,
}

impl PrivateKey {
    /// A zeroed private key of the given variant, sized for the p503
    /// parameter set.
    pub fn new(variant: KeyVariant) -> Self {
        let params = &SIKE_P503;
        let scalar = vec![0u8; variant.domain(params).secret_byte_len];
        let s = if variant == KeyVariant::Sike {
            vec![0u8; params.msg_len]
        } else {
            Vec::new()
        };
        Self {
            params,
            variant,
            scalar,
            s,
        }
    }

    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    /// Fill the key from `rng`. The scalar is masked down to
    /// `secret_bit_len` bits and its top bit is forced, restricting the
    /// keyspace to [2^(bits-1), 2^bits). For SIKE keys the fallback secret
    /// `s` is drawn as well.
    pub fn generate<R: CryptoRng + RngCore>(&mut self, rng: &mut R) -> Result<(), Error> {
        let dp = self.variant.domain(self.params);

        if self.variant == KeyVariant::Sike {
            rng.try_fill_bytes(&mut self.s).map_err(|_| Error::RngFailure)?;
        }

        rng.try_fill_bytes(&mut self.scalar)
            .map_err(|_| Error::RngFailure)?;
        let last = self.scalar.len() - 1;
        self.scalar[last] &= (1 << (dp.secret_bit_len % 8)) - 1;
        self.scalar[last] |= 1 << ((dp.secret_bit_len % 8) - 1);
        Ok(())
    }

    /// Import a key previously written by `export`. For SIKE keys the
    /// random value `s` is prepended to the scalar.
    pub fn import(&mut self, input: &[u8]) -> Result<(), Error> {
        if input.len() != self.size() {
            return Err(Error::InvalidInputLength);
        }
        let s_len = self.s.len();
        self.s.copy_from_slice(&input[..s_len]);
        self.scalar.copy_from_slice(&input[s_len..]);
        Ok(())
    }

    /// Export the key as `s || scalar` (the `s` part is empty for plain
    /// SIDH keys).
    pub fn export(&self) -> Vec<u8> {
        let mut output = Vec::with_capacity(self.size());
        output.extend_from_slice(&self.s);
        output.extend_from_slice(&self.scalar);
        output
    }

    /// Size of the exported key in bytes.
    pub fn size(&self) -> usize {
        self.scalar.len() + self.s.len()
    }

    /// Derive the public key for this private key. Constant time.
    pub fn generate_public_key(&self) -> PublicKey {
        if self.variant.is_a_side() {
            public_key_gen_a(self)
        } else {
            public_key_gen_b(self)
        }
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.s.zeroize();
    }
}

impl PublicKey {
    /// A zeroed public key of the given variant.
    pub fn new(variant: KeyVariant) -> Self {
        Self {
            params: &SIKE_P503,
            variant,
            affine_xP: Fp2::ZERO,
            affine_xQ: Fp2::ZERO,
            affine_xQmP: Fp2::ZERO,
        }
    }

    pub fn variant(&self) -> KeyVariant {
        self.variant
    }

    /// Import a key from its wire form. No validation beyond the length is
    /// performed.
    pub fn import(&mut self, input: &[u8]) -> Result<(), Error> {
        if input.len() != self.size() {
            return Err(Error::InvalidInputLength);
        }
        let ss = self.params.shared_secret_size;
        self.affine_xP = Fp2::decode(&input[0..ss]);
        self.affine_xQ = Fp2::decode(&input[ss..2 * ss]);
        self.affine_xQmP = Fp2::decode(&input[2 * ss..3 * ss]);
        Ok(())
    }

    /// Export as xP || xQ || xQmP, each packed per the wire format.
    pub fn export(&self) -> Vec<u8> {
        let mut output = vec![0u8; self.params.public_key_size];
        let ss = self.params.shared_secret_size;
        self.affine_xP.encode(&mut output[0..ss]);
        self.affine_xQ.encode(&mut output[ss..2 * ss]);
        self.affine_xQmP.encode(&mut output[2 * ss..3 * ss]);
        output
    }

    /// Size of the exported key in bytes.
    pub fn size(&self) -> usize {
        self.params.public_key_size
    }
}

/// Generate a public key over the 2-torsion.
fn public_key_gen_a(prv: &PrivateKey) -> PublicKey {
    let params = prv.params;
    let mut public = PublicKey::new(KeyVariant::SidhA);

    // Basis for the own side, defining the secret kernel.
    let xPA = PointX::from_x_coord(&params.A.affine_P);
    let xQA = PointX::from_x_coord(&params.A.affine_Q);
    let xRA = PointX::from_x_coord(&params.A.affine_R);

    // Companion basis of the opposite side, carried through the chain.
    let mut images = [
        PointX::from_x_coord(&params.B.affine_P),
        PointX::from_x_coord(&params.B.affine_Q),
        PointX::from_x_coord(&params.B.affine_R),
    ];

    let cparams = CurveParams::base_curve();
    let xR = cparams.three_point_ladder(
        &xPA,
        &xQA,
        &xRA,
        params.A.secret_bit_len,
        &prv.scalar,
    );
    four_isogeny_chain(&cparams, &xR, params.A.strategy, &mut images);

    // Normalize the three images with a single shared inversion.
    let (invZP, invZQ, invZR) =
        Fp2::batch3_invert(&images[0].Z, &images[1].Z, &images[2].Z);
    public.affine_xP = images[0].X * invZP;
    public.affine_xQ = images[1].X * invZQ;
    public.affine_xQmP = images[2].X * invZR;
    public
}

/// Generate a public key over the 3-torsion.
fn public_key_gen_b(prv: &PrivateKey) -> PublicKey {
    let params = prv.params;
    let mut public = PublicKey::new(prv.variant);

    let xPB = PointX::from_x_coord(&params.B.affine_P);
    let xQB = PointX::from_x_coord(&params.B.affine_Q);
    let xRB = PointX::from_x_coord(&params.B.affine_R);

    let mut images = [
        PointX::from_x_coord(&params.A.affine_P),
        PointX::from_x_coord(&params.A.affine_Q),
        PointX::from_x_coord(&params.A.affine_R),
    ];

    let cparams = CurveParams::base_curve();
    let xR = cparams.three_point_ladder(
        &xPB,
        &xQB,
        &xRB,
        params.B.secret_bit_len,
        &prv.scalar,
    );
    three_isogeny_chain(&cparams, &xR, params.B.strategy, &mut images);

    let (invZP, invZQ, invZR) =
        Fp2::batch3_invert(&images[0].Z, &images[1].Z, &images[2].Z);
    public.affine_xP = images[0].X * invZP;
    public.affine_xQ = images[1].X * invZQ;
    public.affine_xQmP = images[2].X * invZR;
    public
}

/// Shared secret from an A-side private key and a B-side public key.
fn derive_secret_a(prv: &PrivateKey, public: &PublicKey) -> Vec<u8> {
    let params = prv.params;

    // Reconstruct the peer's curve from the transmitted basis.
    let cparams = CurveParams::recover_coordinate_a(
        &public.affine_xP,
        &public.affine_xQ,
        &public.affine_xQmP,
    );

    let xP = PointX::from_x_coord(&public.affine_xP);
    let xQ = PointX::from_x_coord(&public.affine_xQ);
    let xQmP = PointX::from_x_coord(&public.affine_xQmP);
    let xR = cparams.three_point_ladder(&xP, &xQ, &xQmP, params.A.secret_bit_len, &prv.scalar);

    let coef = four_isogeny_chain(&cparams, &xR, params.A.strategy, &mut []);
    let jinv = CurveParams::recover_coefficients4(&coef).j_invariant();

    let mut shared = vec![0u8; params.shared_secret_size];
    jinv.encode(&mut shared);
    shared
}

/// Shared secret from a B-side private key and an A-side public key.
fn derive_secret_b(prv: &PrivateKey, public: &PublicKey) -> Vec<u8> {
    let params = prv.params;

    let cparams = CurveParams::recover_coordinate_a(
        &public.affine_xP,
        &public.affine_xQ,
        &public.affine_xQmP,
    );

    let xP = PointX::from_x_coord(&public.affine_xP);
    let xQ = PointX::from_x_coord(&public.affine_xQ);
    let xQmP = PointX::from_x_coord(&public.affine_xQmP);
    let xR = cparams.three_point_ladder(&xP, &xQ, &xQmP, params.B.secret_bit_len, &prv.scalar);

    let coef = three_isogeny_chain(&cparams, &xR, params.B.strategy, &mut []);
    let jinv = CurveParams::recover_coefficients3(&coef).j_invariant();

    let mut shared = vec![0u8; params.shared_secret_size];
    jinv.encode(&mut shared);
    shared
}

/// Compute the shared secret, the j-invariant of the common image curve,
/// as `shared_secret_size` bytes.
///
/// The keys must live on opposite torsion sides and share a parameter set;
/// a keypair should not be reused across many derivations. Constant time
/// for well-formed inputs.
pub fn derive_secret(prv: &PrivateKey, public: &PublicKey) -> Result<Vec<u8>, Error> {
    if prv.params.id != public.params.id
        || prv.variant.is_a_side() == public.variant.is_a_side()
    {
        return Err(Error::IncompatibleKeys);
    }

    if prv.variant.is_a_side() {
        Ok(derive_secret_a(prv, public))
    } else {
        Ok(derive_secret_b(prv, public))
    }
}
