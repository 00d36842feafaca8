//! Jira API model types.

mod priority;

pub use priority::*;

use serde::{Deserialize, Deserializer};

/// Decode a JSON `null` as the type's empty value.
///
/// Jira sends `null` for unset attributes on some deployments; those are
/// treated the same as an absent key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
