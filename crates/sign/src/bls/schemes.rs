//! The three BLS signature schemes
//!
//! All three sign in G2 with public keys in G1 and share key generation,
//! aggregation and the key tree. They differ in the hash-to-curve tag and
//! in how they defend aggregate verification against rogue keys:
//!
//! * Basic requires every message in an aggregate to be distinct.
//! * Augmented prefixes each message with the signer's public key.
//! * Proof of possession has each signer prove knowledge of its key once,
//!   after which signatures over one shared message verify against the sum
//!   of the keys.

use alloc::vec::Vec;

use blsmpl_algorithms::ec::bls12_381::Fp12;
use blsmpl_algorithms::{g2_map, G1Projective, G2Projective};
use blsmpl_api::{Result as ApiResult, SignatureScheme};

use super::signing::{core_aggregate, core_aggregate_verify, core_sign, core_verify, has_duplicates};
use super::{hd_keys, PrivateKey};
use crate::error::Result;

/// Hash-to-curve tag of the Basic scheme
pub const BASIC_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_NUL_";

/// Hash-to-curve tag of the Augmented scheme
pub const AUG_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_AUG_";

/// Hash-to-curve tag for signatures under the proof-of-possession scheme
pub const POP_SCHEME_DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Hash-to-curve tag for the possession proofs themselves
pub const POP_SCHEME_POP_DST: &[u8] = b"BLS_POP_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// Basic scheme: messages in an aggregate must be distinct
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicSchemeMpl;

/// Augmented scheme: every signed message is prefixed with the signer's public key
#[derive(Debug, Clone, Copy, Default)]
pub struct AugSchemeMpl;

/// Proof-of-possession scheme
#[derive(Debug, Clone, Copy, Default)]
pub struct PopSchemeMpl;

/// Operations that do not depend on the scheme's tag
macro_rules! impl_scheme_common {
    ($scheme:ty) => {
        impl $scheme {
            /// Deterministic secret key from seed material
            pub fn key_gen(seed: &[u8]) -> Result<PrivateKey> {
                hd_keys::key_gen(seed)
            }

            /// Sum signatures into one
            ///
            /// # Errors
            ///
            /// Fails on an empty list or on any signature outside the G2
            /// subgroup.
            pub fn aggregate(signatures: &[G2Projective]) -> Result<G2Projective> {
                core_aggregate(signatures)
            }

            /// Hardened EIP-2333 child secret key
            pub fn derive_child_sk(sk: &PrivateKey, index: u32) -> Result<PrivateKey> {
                hd_keys::derive_child_sk(sk, index)
            }

            /// Unhardened child secret key
            pub fn derive_child_sk_unhardened(sk: &PrivateKey, index: u32) -> PrivateKey {
                hd_keys::derive_child_sk_unhardened(sk, index)
            }

            /// Unhardened child public key, matching [`Self::derive_child_sk_unhardened`]
            pub fn derive_child_pk_unhardened(pk: &G1Projective, index: u32) -> G1Projective {
                hd_keys::derive_child_g1_unhardened(pk, index)
            }
        }
    };
}

/// Wire a scheme's inherent methods into the API trait
macro_rules! impl_signature_scheme {
    ($scheme:ident, $name:expr) => {
        impl SignatureScheme for $scheme {
            type SecretKey = PrivateKey;
            type PublicKey = G1Projective;
            type Signature = G2Projective;

            fn name() -> &'static str {
                $name
            }

            fn key_gen(seed: &[u8]) -> ApiResult<PrivateKey> {
                Ok($scheme::key_gen(seed)?)
            }

            fn public_key(secret_key: &PrivateKey) -> G1Projective {
                secret_key.g1()
            }

            fn sign(secret_key: &PrivateKey, message: &[u8]) -> ApiResult<G2Projective> {
                Ok($scheme::sign(secret_key, message)?)
            }

            fn verify(public_key: &G1Projective, message: &[u8], signature: &G2Projective) -> bool {
                $scheme::verify(public_key, message, signature)
            }

            fn aggregate(signatures: &[G2Projective]) -> ApiResult<G2Projective> {
                Ok($scheme::aggregate(signatures)?)
            }

            fn aggregate_verify(
                public_keys: &[G1Projective],
                messages: &[&[u8]],
                signature: &G2Projective,
            ) -> bool {
                $scheme::aggregate_verify(public_keys, messages, signature)
            }

            fn derive_child_sk(secret_key: &PrivateKey, index: u32) -> ApiResult<PrivateKey> {
                Ok($scheme::derive_child_sk(secret_key, index)?)
            }

            fn derive_child_sk_unhardened(
                secret_key: &PrivateKey,
                index: u32,
            ) -> ApiResult<PrivateKey> {
                Ok($scheme::derive_child_sk_unhardened(secret_key, index))
            }

            fn derive_child_pk_unhardened(public_key: &G1Projective, index: u32) -> G1Projective {
                $scheme::derive_child_pk_unhardened(public_key, index)
            }
        }
    };
}

impl_scheme_common!(BasicSchemeMpl);
impl_scheme_common!(AugSchemeMpl);
impl_scheme_common!(PopSchemeMpl);

impl_signature_scheme!(BasicSchemeMpl, "BLS-Basic");
impl_signature_scheme!(AugSchemeMpl, "BLS-Aug");
impl_signature_scheme!(PopSchemeMpl, "BLS-PoP");

/// Reject batches containing a repeated message
fn distinct_or_log<M: AsRef<[u8]>>(messages: &[M]) -> bool {
    if has_duplicates(messages) {
        tracing::debug!("rejecting aggregate with duplicate messages");
        return false;
    }
    true
}

// ============================================================================
// Basic
// ============================================================================

impl BasicSchemeMpl {
    /// Sign `message`
    pub fn sign(sk: &PrivateKey, message: &[u8]) -> Result<G2Projective> {
        core_sign(sk, message, BASIC_SCHEME_DST)
    }

    /// Verify a signature by one key over one message
    pub fn verify(pk: &G1Projective, message: &[u8], signature: &G2Projective) -> bool {
        core_verify(pk, message, signature, BASIC_SCHEME_DST)
    }

    /// Verify an aggregate over pairwise distinct messages
    pub fn aggregate_verify(
        pks: &[G1Projective],
        messages: &[&[u8]],
        signature: &G2Projective,
    ) -> bool {
        distinct_or_log(messages)
            && core_aggregate_verify(pks, messages, signature, BASIC_SCHEME_DST)
    }
}

// ============================================================================
// Augmented
// ============================================================================

fn augment(pk: &G1Projective, message: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(48 + message.len());
    out.extend_from_slice(&pk.to_bytes());
    out.extend_from_slice(message);
    out
}

impl AugSchemeMpl {
    /// Sign `pk || message`, where `pk` is this key's own public key
    pub fn sign(sk: &PrivateKey, message: &[u8]) -> Result<G2Projective> {
        Self::sign_prepend(sk, message, &sk.g1())
    }

    /// Sign `prepend_pk || message`
    ///
    /// Used when the signature will be combined with others under the
    /// aggregate public key `prepend_pk`.
    pub fn sign_prepend(
        sk: &PrivateKey,
        message: &[u8],
        prepend_pk: &G1Projective,
    ) -> Result<G2Projective> {
        core_sign(sk, &augment(prepend_pk, message), AUG_SCHEME_DST)
    }

    /// Verify a signature by one key over `pk || message`
    pub fn verify(pk: &G1Projective, message: &[u8], signature: &G2Projective) -> bool {
        core_verify(pk, &augment(pk, message), signature, AUG_SCHEME_DST)
    }

    /// Verify an aggregate; the augmented messages must be pairwise distinct
    pub fn aggregate_verify(
        pks: &[G1Projective],
        messages: &[&[u8]],
        signature: &G2Projective,
    ) -> bool {
        if pks.is_empty() || pks.len() != messages.len() {
            tracing::debug!("rejecting mismatched or empty batch");
            return false;
        }

        let augmented: Vec<Vec<u8>> = pks
            .iter()
            .zip(messages)
            .map(|(pk, m)| augment(pk, m))
            .collect();
        if !distinct_or_log(&augmented) {
            return false;
        }

        let refs: Vec<&[u8]> = augmented.iter().map(Vec::as_slice).collect();
        core_aggregate_verify(pks, &refs, signature, AUG_SCHEME_DST)
    }
}

// ============================================================================
// Proof of possession
// ============================================================================

impl PopSchemeMpl {
    /// Sign `message`
    pub fn sign(sk: &PrivateKey, message: &[u8]) -> Result<G2Projective> {
        core_sign(sk, message, POP_SCHEME_DST)
    }

    /// Verify a signature by one key over one message
    pub fn verify(pk: &G1Projective, message: &[u8], signature: &G2Projective) -> bool {
        core_verify(pk, message, signature, POP_SCHEME_DST)
    }

    /// Verify an aggregate over pairwise distinct messages
    pub fn aggregate_verify(
        pks: &[G1Projective],
        messages: &[&[u8]],
        signature: &G2Projective,
    ) -> bool {
        distinct_or_log(messages) && core_aggregate_verify(pks, messages, signature, POP_SCHEME_DST)
    }

    /// Proof that the holder of `sk` knows it: its public key hashed and signed
    pub fn pop_prove(sk: &PrivateKey) -> Result<G2Projective> {
        let pk = sk.g1();
        Ok(g2_map(&pk.to_bytes(), POP_SCHEME_POP_DST)? * *sk.scalar())
    }

    /// Check a possession proof for `pk`
    pub fn pop_verify(pk: &G1Projective, proof: &G2Projective) -> bool {
        if !proof.is_valid() || !pk.is_valid() {
            tracing::debug!("rejecting possession proof with an invalid point");
            return false;
        }
        let q = match g2_map(&pk.to_bytes(), POP_SCHEME_POP_DST) {
            Ok(q) => q,
            Err(_) => return false,
        };
        blsmpl_algorithms::ec::bls12_381::ate_pairing_multi(
            &[*pk, -G1Projective::generator()],
            &[q, *proof],
        )
        .map(|f| f == Fp12::one())
        .unwrap_or(false)
    }

    /// Verify signatures by many keys over one message, combined by
    /// [`Self::aggregate`]
    ///
    /// Every key must already have had its possession proof checked.
    pub fn fast_aggregate_verify(
        pks: &[G1Projective],
        message: &[u8],
        signature: &G2Projective,
    ) -> bool {
        if pks.is_empty() {
            tracing::debug!("rejecting fast aggregate with no keys");
            return false;
        }
        let aggregate: G1Projective = pks.iter().copied().sum();
        core_verify(&aggregate, message, signature, POP_SCHEME_DST)
    }
}
