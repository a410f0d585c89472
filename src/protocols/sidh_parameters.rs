//! Domain parameters for the p503 instance, p = 2^250 * 3^159 - 1.
//!
//! All field-element constants are stored in the Montgomery domain. The
//! torsion bases on E0 : y^2 = x^3 + x were generated offline by a
//! deterministic search over small x-coordinates; x(P) of the 2^250 basis
//! is pinned so that no ladder output P + [k]Q ever sits over the 2-torsion
//! point (0, 0), where the 4-isogeny codomain formulas degenerate.

use crate::fields::fp::Fp;
use crate::fields::fp2::Fp2;

/// Per-side immutable parameters: the torsion basis of E0 held as affine
/// x-coordinates, the secret-scalar shape and the traversal strategy.
#[derive(Debug)]
pub struct DomainParams {
    /// Bit length of a secret scalar on this side.
    pub secret_bit_len: usize,
    /// Byte length of a secret scalar on this side.
    pub secret_byte_len: usize,
    pub affine_P: Fp2,
    pub affine_Q: Fp2,
    pub affine_R: Fp2,
    /// Flat isogeny-tree traversal strategy, one entry per internal step.
    pub strategy: &'static [u8],
}

/// Global immutable parameters of the p503 instance.
#[derive(Debug)]
pub struct Params {
    pub id: &'static str,
    /// Byte length of a packed GF(p) element.
    pub bytelen: usize,
    pub public_key_size: usize,
    pub shared_secret_size: usize,
    /// KEM plaintext length.
    pub msg_len: usize,
    /// KEM shared-secret length.
    pub kem_size: usize,
    pub ciphertext_size: usize,
    /// 2^250-torsion side.
    pub A: DomainParams,
    /// 3^159-torsion side.
    pub B: DomainParams,
}

/// x(P) generating the 2^250-torsion basis with x(Q).
const AFFINE_P_A: Fp2 = Fp2 {
    A: Fp([
        0xE7EF4AA786D855AF, 0xED5758F03EB34D3B,
        0x09AE172535A86AA9, 0x237B9CC07D622723,
        0xE3A284CBA4E7932D, 0x27481D9176C5E63F,
        0x6A323FF55C6E71BF, 0x002ECC31A6FB8773,
    ]),
    B: Fp([
        0x64D02E4E90A620B8, 0xDAB8128537D4B9F1,
        0x4BADF77B8A228F98, 0x0F5DBDF9D1FB7D1B,
        0xBEC4DB288E1A0DCC, 0xE76A8665E80675DB,
        0x6D6F252E12929463, 0x003188BD1463FACC,
    ]),
};

/// x(Q) of the 2^250-torsion basis.
const AFFINE_Q_A: Fp2 = Fp2 {
    A: Fp([
        0x135BB6710E1E2542, 0xA2C18351EE21AC90,
        0xE0047B6F9312B31D, 0xC17CAF456731E12A,
        0x8A0DE3CFD38964E5, 0x6134BAA04EA3F9B9,
        0x927BCB97CA9258A1, 0x0008D4DDA127CB4B,
    ]),
    B: Fp([
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ]),
};

/// x(Q - P) of the 2^250-torsion basis.
const AFFINE_R_A: Fp2 = Fp2 {
    A: Fp([
        0x101A1ED2B24BEDAB, 0xF3E28214B5F4C5F9,
        0x44B0349E86DDAF36, 0x7FA313AE678E3081,
        0xB457719440E30F9C, 0xECFCD7FE9ED795DE,
        0x05E43E047548231D, 0x003F54B1B2242782,
    ]),
    B: Fp([
        0x032BB9C88A765884, 0xDCEC7FAAC936B18E,
        0xE3A07E62B12A3398, 0x2015B9B0EBBD18D3,
        0xE477D815498D1669, 0xEBF11B00F0811ACF,
        0x184B62F0ED4A428E, 0x00344AA1EFDF5A30,
    ]),
};

/// x(P) generating the 3^159-torsion basis with x(Q).
const AFFINE_P_B: Fp2 = Fp2 {
    A: Fp([
        0x5B0B94877E9C921B, 0x4853444BEFBF6191,
        0x419EC5874FADEFBD, 0xCBE91A14DF970315,
        0xA1DDA877DAFA9676, 0x91C50E5CF5D631EC,
        0xE7AA11CFC49556AB, 0x00251B68A555D9C2,
    ]),
    B: Fp([
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ]),
};

/// x(Q) of the 3^159-torsion basis.
const AFFINE_Q_B: Fp2 = Fp2 {
    A: Fp([
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
        0x0000000000000000, 0x0000000000000000,
    ]),
    B: Fp([
        0xC57228776CC91CB2, 0x7C60C87109CA5EE0,
        0x19BEA565F779CA06, 0xCB493B01317756BF,
        0x9F4EF3020A3C5032, 0x734B37A5C924399D,
        0x7DBEB4F38BF2743C, 0x003C95F380915540,
    ]),
};

/// x(Q - P) of the 3^159-torsion basis.
const AFFINE_R_B: Fp2 = Fp2 {
    A: Fp([
        0xA74725FDB604D5CA, 0xF1B942EDFC4AEB64,
        0x1F06DA5AF61DA68D, 0xD0499DB3EB95B72D,
        0x62D49D8D71958575, 0x1639E801F9CC8422,
        0x652E22850E76135B, 0x000119590C8287CB,
    ]),
    B: Fp([
        0x01E3158A28D418D1, 0xA582BE1A254E4278,
        0x80A2F9E0A9B0D84E, 0x63A1325B02803F6F,
        0x0509E8F6CAF43351, 0x5CA8A49F7B946C89,
        0x83BF9B58EA0FDB52, 0x003E1653B55AB693,
    ]),
};

/// Traversal strategy for the 125-step 4-isogeny chain.
static ISOGENY_STRATEGY_A: [u8; 124] = [
    40, 27, 18, 13, 9, 6, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1,
    3, 2, 1, 1, 1, 1, 1, 1, 4, 3, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 6, 4, 3, 2,
    1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 9, 6, 4, 3, 2, 1, 1, 1, 1, 1, 1,
    1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 1, 13, 9, 6, 4, 3, 2, 1, 1,
    1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 3, 2, 1, 1, 1, 1, 1, 1, 4, 3, 2, 1, 1,
    1, 1, 1, 1, 1, 1, 1,
];

/// Traversal strategy for the 159-step 3-isogeny chain.
static ISOGENY_STRATEGY_B: [u8; 158] = [
    65, 38, 22, 13, 8, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 3, 2, 1, 1, 1,
    1, 1, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2,
    1, 1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 16, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1,
    1, 1, 4, 2, 1, 1, 1, 2, 1, 1, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1,
    1, 27, 16, 9, 5, 3, 2, 1, 1, 1, 1, 1, 2, 1, 1, 1, 4, 2, 1, 1, 1, 2, 1,
    1, 7, 4, 2, 1, 1, 1, 2, 1, 1, 3, 2, 1, 1, 1, 1, 11, 7, 4, 2, 1, 1, 1,
    2, 1, 1, 3, 2, 1, 1, 1, 1, 4, 3, 2, 1, 1, 1, 1, 2, 1, 1,
];

/// The p503 parameter set.
pub static SIKE_P503: Params = Params {
    id: "p503",
    bytelen: 63,
    public_key_size: 3 * 2 * 63,
    shared_secret_size: 2 * 63,
    msg_len: 24,
    kem_size: 16,
    ciphertext_size: 3 * 2 * 63 + 24,
    A: DomainParams {
        secret_bit_len: 250,
        secret_byte_len: 32,
        affine_P: AFFINE_P_A,
        affine_Q: AFFINE_Q_A,
        affine_R: AFFINE_R_A,
        strategy: &ISOGENY_STRATEGY_A,
    },
    B: DomainParams {
        secret_bit_len: 252,
        secret_byte_len: 32,
        affine_P: AFFINE_P_B,
        affine_Q: AFFINE_Q_B,
        affine_R: AFFINE_R_B,
        strategy: &ISOGENY_STRATEGY_B,
    },
};
