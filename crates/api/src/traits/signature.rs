//! BLS signature scheme trait
//!
//! Every scheme (Basic, Augmented, Proof-of-Possession) exposes the same
//! surface: deterministic key generation from a seed, signing, verification,
//! aggregation and the EIP-2333 derivation tree. The schemes differ only in
//! the domain-separation tag and in what bytes are actually signed.

use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

/// Length of the seed drawn by [`SignatureScheme::keypair`].
pub const KEYPAIR_SEED_LEN: usize = 32;

/// Core trait for BLS signature schemes
///
/// Verification is a predicate: malformed or invalid inputs yield `false`,
/// never an error. Construction and aggregation are fallible.
pub trait SignatureScheme {
    /// Secret key type
    type SecretKey: Zeroize + Clone;

    /// Public key type (a G1 point)
    type PublicKey: Clone;

    /// Signature type (a G2 point)
    type Signature: Clone;

    /// Returns the name of this signature scheme
    fn name() -> &'static str;

    /// Deterministically derive a secret key from seed material; 32 bytes
    /// or more of entropy is expected
    fn key_gen(seed: &[u8]) -> Result<Self::SecretKey>;

    /// Public key matching a secret key
    fn public_key(secret_key: &Self::SecretKey) -> Self::PublicKey;

    /// Generate a key pair from fresh randomness
    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> Result<(Self::SecretKey, Self::PublicKey)> {
        let mut seed = Zeroizing::new([0u8; KEYPAIR_SEED_LEN]);
        rng.fill_bytes(seed.as_mut());
        let sk = Self::key_gen(seed.as_ref())?;
        let pk = Self::public_key(&sk);
        Ok((sk, pk))
    }

    /// Sign a message with the given secret key
    fn sign(secret_key: &Self::SecretKey, message: &[u8]) -> Result<Self::Signature>;

    /// Verify a signature against a message and public key
    fn verify(public_key: &Self::PublicKey, message: &[u8], signature: &Self::Signature) -> bool;

    /// Combine signatures into one
    ///
    /// # Errors
    ///
    /// Fails on an empty list or when any input signature is invalid.
    fn aggregate(signatures: &[Self::Signature]) -> Result<Self::Signature>;

    /// Verify an aggregate signature over one message per public key
    fn aggregate_verify(
        public_keys: &[Self::PublicKey],
        messages: &[&[u8]],
        signature: &Self::Signature,
    ) -> bool;

    /// Hardened EIP-2333 child key
    fn derive_child_sk(secret_key: &Self::SecretKey, index: u32) -> Result<Self::SecretKey>;

    /// Unhardened child key; its public key can be derived from the parent public key alone
    fn derive_child_sk_unhardened(
        secret_key: &Self::SecretKey,
        index: u32,
    ) -> Result<Self::SecretKey>;

    /// Unhardened child public key
    fn derive_child_pk_unhardened(public_key: &Self::PublicKey, index: u32) -> Self::PublicKey;
}
