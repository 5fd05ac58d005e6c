//! Serialization of [arkworks](http://arkworks.rs/) types with serde,
//! through their [CanonicalSerialize] and [CanonicalDeserialize] implementations.

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde_with::Bytes;

/// You can use [SerdeAs] with [serde_with] in order to serialize and deserialize types that implement [CanonicalSerialize] and [CanonicalDeserialize],
/// or containers of such types (Vec, arrays, etc.)
/// Simply add annotations like `#[serde_as(as = "Vec<crate::serialization::SerdeAs>")]`
pub struct SerdeAs;

impl<T> serde_with::SerializeAs<T> for SerdeAs
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = vec![];
        val.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;

        <Bytes as serde_with::SerializeAs<Vec<u8>>>::serialize_as(&bytes, serializer)
    }
}

impl<'de, T> serde_with::DeserializeAs<'de, T> for SerdeAs
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = <Bytes as serde_with::DeserializeAs<'de, Vec<u8>>>::deserialize_as(
            deserializer,
        )?;
        T::deserialize_compressed(&mut &bytes[..]).map_err(serde::de::Error::custom)
    }
}
