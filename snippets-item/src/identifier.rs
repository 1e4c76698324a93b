use std::{borrow::Cow, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ItemError;

pub const MINECRAFT_NAMESPACE: &str = "minecraft";

/// A `namespace:path` key, the way materials and enchantments are registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NamespacedKey(Cow<'static, str>);

impl NamespacedKey {
    /// Only for keys known to be valid at compile time.
    pub(crate) const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Parses `namespace:path`, a bare `path` lands in the `minecraft` namespace.
    pub fn parse(key: &str) -> Result<Self, ItemError> {
        let (namespace, path) = key.split_once(':').unwrap_or((MINECRAFT_NAMESPACE, key));
        let namespace_ok = !namespace.is_empty()
            && namespace
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.'));
        let path_ok = !path.is_empty()
            && path
                .chars()
                .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.' | '/'));
        if !namespace_ok || !path_ok {
            return Err(ItemError::InvalidKey(key.to_string()));
        }
        Ok(Self(Cow::Owned(format!("{namespace}:{path}"))))
    }

    pub fn namespace(&self) -> &str {
        self.0.split_once(':').map_or(MINECRAFT_NAMESPACE, |(ns, _)| ns)
    }

    pub fn path(&self) -> &str {
        self.0.split_once(':').map_or(self.0.as_ref(), |(_, path)| path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamespacedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for NamespacedKey {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for NamespacedKey {
    type Error = ItemError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<NamespacedKey> for String {
    fn from(value: NamespacedKey) -> Self {
        value.0.into_owned()
    }
}

#[cfg(test)]
mod test {
    use super::NamespacedKey;

    #[test]
    fn default_namespace() {
        let key = NamespacedKey::parse("diamond_sword").unwrap();
        assert_eq!(key.as_str(), "minecraft:diamond_sword");
        assert_eq!(key.namespace(), "minecraft");
        assert_eq!(key.path(), "diamond_sword");
    }

    #[test]
    fn custom_namespace() {
        let key = NamespacedKey::parse("myplugin:gui/back_button").unwrap();
        assert_eq!(key.namespace(), "myplugin");
        assert_eq!(key.path(), "gui/back_button");
    }

    #[test]
    fn invalid_keys() {
        for key in ["", "Stone", "minecraft:", ":stone", "a:b:c", "ns/x:stone", "white space"] {
            assert!(NamespacedKey::parse(key).is_err(), "{key}");
        }
    }
}
