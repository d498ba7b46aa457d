//! Serde support for group elements: a hex string of the compressed
//! encoding, with an optional `0x` prefix accepted on input.

use alloc::string::String;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

use super::{G1Projective, G2Projective};

macro_rules! impl_point_serde {
    ($point:ty) => {
        impl Serialize for $point {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_hex())
            }
        }

        impl<'de> Deserialize<'de> for $point {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                let hex_str = s.strip_prefix("0x").unwrap_or(&s);
                <$point>::from_hex(hex_str).map_err(D::Error::custom)
            }
        }
    };
}

impl_point_serde!(G1Projective);
impl_point_serde!(G2Projective);
