//! The SIKE key encapsulation mechanism: a Fujisaki-Okamoto-style
//! transform over the SIDH primitive, with HMAC-SHA-256 standing in for
//! the random oracles G, H and F under 16-bit domain separators.

use hmac::{Hmac, Mac};
use rand_core::{CryptoRng, RngCore};
use sha2::Sha256;
use subtle::{ConditionallySelectable, ConstantTimeEq};

use crate::errors::Error;

use super::sidh::{derive_secret, KeyVariant, PrivateKey, PublicKey};

// Oracle domain separators, encoded on 16 bits.
const G: [u8; 2] = [0x00, 0x00];
const H: [u8; 2] = [0x01, 0x00];
const F: [u8; 2] = [0x02, 0x00];

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA-256 keyed with `key` over the message `S`, truncated to the
/// length of `out`.
fn hash_mac(out: &mut [u8], key: &[u8], S: &[u8]) {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(S);
    let tag = mac.finalize().into_bytes();
    out.copy_from_slice(&tag[..out.len()]);
}

/// PKE encryption with a caller-supplied ephemeral A-side key:
/// ctext = Export(pkA) || (F(j) XOR ptext).
fn encrypt_with_key(
    skA: &PrivateKey,
    pkA: &PublicKey,
    pkB: &PublicKey,
    ptext: &[u8],
) -> Result<Vec<u8>, Error> {
    if pkB.variant() != KeyVariant::Sike {
        return Err(Error::WrongKeyType);
    }

    let j = derive_secret(skA, pkB)?;
    let mut n = vec![0u8; ptext.len()];
    hash_mac(&mut n, &j, &F);
    for (ni, pi) in n.iter_mut().zip(ptext.iter()) {
        *ni ^= pi;
    }

    let mut ctext = pkA.export();
    ctext.extend_from_slice(&n);
    Ok(ctext)
}

/// Encrypt `ptext` to a SIKE public key with a fresh ephemeral key drawn
/// from `rng`. The plaintext must be exactly `kem_size + 8` bytes, the
/// security level plus 64 bits.
pub fn encrypt<R: CryptoRng + RngCore>(
    rng: &mut R,
    public: &PublicKey,
    ptext: &[u8],
) -> Result<Vec<u8>, Error> {
    if ptext.len() != public.params.kem_size + 8 {
        return Err(Error::InvalidInputLength);
    }

    let mut skA = PrivateKey::new(KeyVariant::SidhA);
    skA.generate(rng)?;
    let pkA = skA.generate_public_key();
    encrypt_with_key(&skA, &pkA, public, ptext)
}

/// Decrypt a ciphertext produced by `encrypt`. Constant time.
pub fn decrypt(prv: &PrivateKey, ctext: &[u8]) -> Result<Vec<u8>, Error> {
    if prv.variant() != KeyVariant::Sike {
        return Err(Error::WrongKeyType);
    }

    // ctext is Export(pkA) || c1 with |c1| the security level plus 64 bits.
    let pk_len = prv.params.public_key_size;
    let c1_len = match ctext.len().checked_sub(pk_len) {
        Some(len) => len,
        None => return Err(Error::InvalidInputLength),
    };
    if c1_len != prv.params.kem_size + 8 {
        return Err(Error::InvalidInputLength);
    }

    let mut c0 = PublicKey::new(KeyVariant::SidhA);
    c0.import(&ctext[..pk_len])?;
    let j = derive_secret(prv, &c0)?;

    let mut n = vec![0u8; c1_len];
    hash_mac(&mut n, &j, &F);
    for (i, ni) in n.iter_mut().enumerate() {
        *ni ^= ctext[pk_len + i];
    }
    Ok(n)
}

/// Encapsulate to a SIKE public key, returning the ciphertext and the
/// `kem_size`-byte shared secret.
pub fn encapsulate<R: CryptoRng + RngCore>(
    rng: &mut R,
    public: &PublicKey,
) -> Result<(Vec<u8>, Vec<u8>), Error> {
    if public.variant() != KeyVariant::Sike {
        return Err(Error::WrongKeyType);
    }
    let params = public.params;

    let mut ptext = vec![0u8; params.msg_len];
    rng.try_fill_bytes(&mut ptext).map_err(|_| Error::RngFailure)?;

    // r = G(m || pk), masked into the A-side keyspace.
    let mut buf = Vec::with_capacity(params.msg_len + params.ciphertext_size);
    buf.extend_from_slice(&ptext);
    buf.extend_from_slice(&public.export());
    let mut r = vec![0u8; params.A.secret_byte_len];
    hash_mac(&mut r, &buf, &G);
    let last = r.len() - 1;
    r[last] &= (1 << (params.A.secret_bit_len % 8)) - 1;

    // (c0 || c1) = Enc(pkA, m; r)
    let mut skA = PrivateKey::new(KeyVariant::SidhA);
    skA.import(&r)?;
    let pkA = skA.generate_public_key();
    let ctext = encrypt_with_key(&skA, &pkA, public, &ptext)?;

    // K = H(m || (c0 || c1))
    buf.clear();
    buf.extend_from_slice(&ptext);
    buf.extend_from_slice(&ctext);
    let mut secret = vec![0u8; params.kem_size];
    hash_mac(&mut secret, &buf, &H);
    Ok((ctext, secret))
}

/// Decapsulate a ciphertext with the SIKE keypair it was produced for.
///
/// Never reports whether the ciphertext was valid: when the re-encryption
/// check fails, the secret is recomputed from the private random value `s`
/// instead of the decrypted message, selected in constant time. An
/// attacker observing the output cannot distinguish the two cases.
pub fn decapsulate(
    prv: &PrivateKey,
    public: &PublicKey,
    ctext: &[u8],
) -> Result<Vec<u8>, Error> {
    let params = public.params;
    let m = decrypt(prv, ctext)?;

    // r' = G(m' || pk), masked exactly as during encapsulation.
    let mut buf = Vec::with_capacity(params.msg_len + params.ciphertext_size);
    buf.extend_from_slice(&m);
    buf.extend_from_slice(&public.export());
    let mut r = vec![0u8; params.A.secret_byte_len];
    hash_mac(&mut r, &buf, &G);
    let last = r.len() - 1;
    r[last] &= (1 << (params.A.secret_bit_len % 8)) - 1;

    // Re-encrypt and compare. Neither step can fail for length-correct
    // input.
    let mut skA = PrivateKey::new(KeyVariant::SidhA);
    skA.import(&r)?;
    let pkA = skA.generate_public_key();
    let c0 = pkA.export();

    let eq = c0.ct_eq(&ctext[..c0.len()]);
    let mut key_in = vec![0u8; params.msg_len];
    for i in 0..params.msg_len {
        key_in[i] = u8::conditional_select(&prv.s[i], &m[i], eq);
    }

    buf.clear();
    buf.extend_from_slice(&key_in);
    buf.extend_from_slice(ctext);
    let mut secret = vec![0u8; params.kem_size];
    hash_mac(&mut secret, &buf, &H);
    Ok(secret)
}
