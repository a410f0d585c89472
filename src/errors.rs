use thiserror::Error;

/// Errors surfaced by the SIDH/SIKE public API.
///
/// All preconditions are checked before any secret-dependent computation
/// begins; once the inputs are well-formed the cryptographic operations
/// cannot fail. In particular decapsulation never reports whether a
/// ciphertext was valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An imported byte string does not have the expected length.
    #[error("input does not match the expected byte length")]
    InvalidInputLength,

    /// The private and public key are on the same torsion side, or belong
    /// to different parameter sets.
    #[error("public and private keys are incompatible")]
    IncompatibleKeys,

    /// The caller-provided random number generator failed or ran short.
    #[error("random number generator failure")]
    RngFailure,

    /// The operation requires a different key variant, e.g. a SIKE key
    /// was expected but a plain SIDH key was provided.
    #[error("wrong key variant for this operation")]
    WrongKeyType,
}
