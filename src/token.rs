//! Serde bridge between closed-set members and JSON string tokens.
//!
//! Types declared with [`string_enum!`](crate::string_enum) already
//! serialize as bare string tokens through these functions. For
//! hand-written [`StringEnum`] impls, plug the bridge in with
//! `#[serde(with = "string_enum::token")]`, or
//! `#[serde(with = "string_enum::token::option", default)]` for fields
//! where `null`/absent must decode to `None`.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::set::StringEnum;

/// Encode a member as its wire token.
pub fn serialize<T, S>(member: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: StringEnum,
    S: Serializer,
{
    serializer.serialize_str(member.as_str())
}

/// Decode a wire token into a member of the closed set `T`.
///
/// An unrecognized token fails the surrounding deserialization with the
/// [`UnknownValueError`](crate::UnknownValueError) message, unchanged.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: StringEnum,
    D: Deserializer<'de>,
{
    let token = String::deserialize(deserializer)?;
    T::parse(&token).map_err(D::Error::custom)
}

/// Bridge for nullable fields: `null` decodes to `None` instead of
/// failing, and `None` encodes as `null`.
///
/// Absent fields additionally need `#[serde(default)]` on the field, as
/// with any `with`-attributed `Option`.
pub mod option {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::set::StringEnum;

    struct Wire<T>(T);

    impl<T: StringEnum> Serialize for Wire<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            super::serialize(&self.0, serializer)
        }
    }

    impl<'de, T: StringEnum> Deserialize<'de> for Wire<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            super::deserialize(deserializer).map(Wire)
        }
    }

    pub fn serialize<T, S>(member: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: StringEnum,
        S: Serializer,
    {
        match member {
            Some(member) => serializer.serialize_some(&Wire(*member)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: StringEnum,
        D: Deserializer<'de>,
    {
        Ok(Option::<Wire<T>>::deserialize(deserializer)?.map(|wire| wire.0))
    }
}
