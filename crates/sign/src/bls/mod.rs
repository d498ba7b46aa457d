//! BLS signatures over BLS12-381 (minimal-pubkey-size variant)
//!
//! Public keys are compressed G1 points (48 bytes) and signatures are
//! compressed G2 points (96 bytes).
//!
//! ```
//! use blsmpl_sign::bls::AugSchemeMpl;
//!
//! let sk = AugSchemeMpl::key_gen(&[7u8; 32]).unwrap();
//! let pk = sk.g1();
//! let sig = AugSchemeMpl::sign(&sk, b"hello").unwrap();
//! assert!(AugSchemeMpl::verify(&pk, b"hello", &sig));
//! ```

pub mod signing;
pub mod hd_keys;
mod private_key;
mod schemes;


pub use self::private_key::PrivateKey;
pub use self::schemes::{
    AugSchemeMpl, BasicSchemeMpl, PopSchemeMpl, AUG_SCHEME_DST, BASIC_SCHEME_DST,
    POP_SCHEME_DST, POP_SCHEME_POP_DST,
};
pub use self::hd_keys::{
    derive_child_g1_unhardened, derive_child_g2_unhardened, derive_child_sk,
    derive_child_sk_unhardened, key_gen,
};
