//! Localizable strings used in tooltips.
//!
//! The renderer only knows resource keys. Hosts plug their translations in through
//! [`ResourceLookup`]; [`EnglishResources`] is the built-in fallback.

use std::{
    borrow::Cow,
    collections::HashMap,
    hash::BuildHasher,
};

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::{Error, Result};

/// Identifier of a localizable string
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter,
)]
pub enum ResourceKey {
    /// Shown when a method has exactly one other overload
    #[strum(serialize = "ToolTip_OneMethodOverload")]
    OneMethodOverload,
    /// Shown when a method has several other overloads, `{0}` is the count
    #[strum(serialize = "ToolTip_NMethodOverloads")]
    NMethodOverloads,
}

impl ResourceKey {
    /// Parse a resource identifier such as `ToolTip_NMethodOverloads`
    ///
    /// # Errors
    ///
    /// [`Error::UnknownResource`] if `id` does not name a known resource
    pub fn parse(id: &str) -> Result<Self> {
        id.parse()
            .map_err(|_| Error::UnknownResource(id.to_string()))
    }
}

/// Source of translated strings
pub trait ResourceLookup {
    /// The text for `key`
    fn lookup(&self, key: ResourceKey) -> Cow<'_, str>;
}

/// Built-in English strings
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishResources;

impl ResourceLookup for EnglishResources {
    fn lookup(&self, key: ResourceKey) -> Cow<'_, str> {
        Cow::Borrowed(match key {
            ResourceKey::OneMethodOverload => "1 overload",
            ResourceKey::NMethodOverloads => "{0} overloads",
        })
    }
}

/// A translation table. Missing entries fall back to [`EnglishResources`].
impl<S: BuildHasher> ResourceLookup for HashMap<ResourceKey, String, S> {
    fn lookup(&self, key: ResourceKey) -> Cow<'_, str> {
        match self.get(&key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => {
                log::trace!("no translation for {key}, using English");
                EnglishResources.lookup(key).into_owned().into()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(
            ResourceKey::OneMethodOverload.to_string(),
            "ToolTip_OneMethodOverload"
        );
        assert_eq!(
            ResourceKey::NMethodOverloads.as_ref(),
            "ToolTip_NMethodOverloads"
        );
    }

    #[test]
    fn test_parse() {
        for key in ResourceKey::iter() {
            assert_eq!(ResourceKey::parse(key.as_ref()), Ok(key));
        }
        assert_eq!(
            ResourceKey::parse("ToolTip_Missing"),
            Err(Error::UnknownResource("ToolTip_Missing".to_string()))
        );
    }

    #[test]
    fn test_english_covers_every_key() {
        for key in ResourceKey::iter() {
            assert!(!EnglishResources.lookup(key).is_empty());
        }
        assert!(EnglishResources
            .lookup(ResourceKey::NMethodOverloads)
            .contains("{0}"));
    }

    #[test]
    fn test_table_falls_back_to_english() {
        let mut table = HashMap::new();
        table.insert(ResourceKey::NMethodOverloads, "{0} Überladungen".to_string());

        assert_eq!(table.lookup(ResourceKey::NMethodOverloads), "{0} Überladungen");
        assert_eq!(table.lookup(ResourceKey::OneMethodOverload), "1 overload");
    }
}
