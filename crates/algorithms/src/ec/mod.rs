//! Elliptic curve primitives
//!
//! BLS12-381 is the only curve: G1 over Fp, G2 over Fp2, the optimal Ate
//! pairing into Fp12 and hashing onto G2.

pub mod bls12_381;

pub use bls12_381::{
    ate_pairing, ate_pairing_multi, g2_map, G1Affine, G1Projective, G2Affine, G2Projective,
    Scalar as Bls12_381Scalar,
};
