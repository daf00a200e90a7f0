use serde::{Deserialize, Deserializer};

/// Deserialize an explicit `null` the same way as a missing field.
///
/// Pair with `#[serde(default)]` so both shapes collapse to `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
