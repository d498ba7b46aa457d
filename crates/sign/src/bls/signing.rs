//! Scheme-independent signing core
//!
//! Signatures live in G2 and public keys in G1. A signature over `m` is
//! `H(m)·sk`, where `H` hashes onto G2 under a scheme-specific tag, and
//! verification checks `e(pk, H(m)) · e(-g1, sig) = 1`.

use alloc::vec::Vec;

use blsmpl_algorithms::ec::bls12_381::{ate_pairing_multi, Fp12};
use blsmpl_algorithms::{g2_map, G1Projective, G2Projective};

use super::PrivateKey;
use crate::error::{Error, Result};

/// Sign `message` under the domain separation tag `dst`
pub fn core_sign(sk: &PrivateKey, message: &[u8], dst: &[u8]) -> Result<G2Projective> {
    Ok(g2_map(message, dst)? * *sk.scalar())
}

/// Check a single signature; invalid points make this return `false`
pub fn core_verify(pk: &G1Projective, message: &[u8], signature: &G2Projective, dst: &[u8]) -> bool {
    if !signature.is_valid() {
        tracing::debug!("rejecting signature outside the G2 subgroup");
        return false;
    }
    if !pk.is_valid() {
        tracing::debug!("rejecting public key outside the G1 subgroup");
        return false;
    }

    let q = match g2_map(message, dst) {
        Ok(q) => q,
        Err(err) => {
            tracing::debug!(%err, "hash to G2 failed");
            return false;
        }
    };

    pairing_product_is_one(&[*pk, -G1Projective::generator()], &[q, *signature])
}

/// Add signatures together
///
/// # Errors
///
/// `EmptyInput` for an empty list, `InvalidSignature` if any element is
/// not a valid G2 subgroup point.
pub fn core_aggregate(signatures: &[G2Projective]) -> Result<G2Projective> {
    if signatures.is_empty() {
        return Err(Error::EmptyInput { context: "aggregate" });
    }

    signatures
        .iter()
        .enumerate()
        .try_fold(G2Projective::identity(), |acc, (i, sig)| {
            if !sig.is_valid() {
                return Err(Error::InvalidSignature {
                    context: "aggregate",
                    details: alloc::format!("signature {} is not in the G2 subgroup", i),
                });
            }
            Ok(acc + *sig)
        })
}

/// Check an aggregate signature over `messages[i]` signed by `pks[i]`
///
/// Returns `false` for empty or mismatched inputs and for any invalid
/// point. Message distinctness is the caller's concern.
#[tracing::instrument(skip_all, name = "bls::aggregate_verify", fields(len = pks.len()))]
pub fn core_aggregate_verify(
    pks: &[G1Projective],
    messages: &[&[u8]],
    signature: &G2Projective,
    dst: &[u8],
) -> bool {
    if pks.is_empty() || pks.len() != messages.len() {
        tracing::debug!(
            keys = pks.len(),
            messages = messages.len(),
            "rejecting mismatched or empty batch"
        );
        return false;
    }
    if !signature.is_valid() {
        tracing::debug!("rejecting aggregate signature outside the G2 subgroup");
        return false;
    }

    let mut ps = Vec::with_capacity(pks.len() + 1);
    let mut qs = Vec::with_capacity(pks.len() + 1);
    ps.push(-G1Projective::generator());
    qs.push(*signature);

    for (i, (pk, message)) in pks.iter().zip(messages).enumerate() {
        if !pk.is_valid() {
            tracing::debug!(index = i, "rejecting public key outside the G1 subgroup");
            return false;
        }
        match g2_map(message, dst) {
            Ok(q) => qs.push(q),
            Err(err) => {
                tracing::debug!(%err, "hash to G2 failed");
                return false;
            }
        }
        ps.push(*pk);
    }

    pairing_product_is_one(&ps, &qs)
}

fn pairing_product_is_one(ps: &[G1Projective], qs: &[G2Projective]) -> bool {
    match ate_pairing_multi(ps, qs) {
        Ok(f) => f == Fp12::one(),
        Err(_) => false,
    }
}

/// True if any two messages are byte-for-byte equal
pub(crate) fn has_duplicates<M: AsRef<[u8]>>(messages: &[M]) -> bool {
    let mut seen = alloc::collections::BTreeSet::new();
    !messages.iter().all(|m| seen.insert(m.as_ref()))
}
