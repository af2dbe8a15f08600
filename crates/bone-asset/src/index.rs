use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const MINECRAFT_NAMESPACE: &str = "minecraft";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceKeyError {
    EmptyNamespace,
    EmptyValue,
    IllegalCharacter(char),
}

impl Display for ResourceKeyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKeyError::EmptyNamespace => write!(f, "Resource key has an empty namespace"),
            ResourceKeyError::EmptyValue => write!(f, "Resource key has an empty value"),
            ResourceKeyError::IllegalCharacter(c) => {
                write!(f, "Illegal character in resource key: {:?}", c)
            }
        }
    }
}

impl Error for ResourceKeyError {}

/// A namespaced reference into an asset set, written as `namespace:value`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct ResourceKey {
    namespace: String,
    value: String,
}

impl ResourceKey {
    pub fn new(
        namespace: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<Self, ResourceKeyError> {
        let namespace = namespace.into();
        let value = value.into();
        if namespace.is_empty() {
            return Err(ResourceKeyError::EmptyNamespace);
        }
        if value.is_empty() {
            return Err(ResourceKeyError::EmptyValue);
        }
        if let Some(c) = namespace.chars().find(|c| !is_namespace_char(*c)) {
            return Err(ResourceKeyError::IllegalCharacter(c));
        }
        if let Some(c) = value.chars().find(|c| !is_value_char(*c)) {
            return Err(ResourceKeyError::IllegalCharacter(c));
        }
        Ok(Self { namespace, value })
    }

    /// Builds a key from literals that are known to be valid.
    pub fn from_static(namespace: &'static str, value: &'static str) -> Self {
        debug_assert!(!namespace.is_empty() && namespace.chars().all(is_namespace_char));
        debug_assert!(!value.is_empty() && value.chars().all(is_value_char));
        Self {
            namespace: String::from(namespace),
            value: String::from(value),
        }
    }

    pub fn minecraft(value: impl Into<String>) -> Result<Self, ResourceKeyError> {
        Self::new(MINECRAFT_NAMESPACE, value)
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn is_namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn is_value_char(c: char) -> bool {
    is_namespace_char(c) || c == '/'
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.value)
    }
}

impl FromStr for ResourceKey {
    type Err = ResourceKeyError;

    // A key without a namespace lives in the minecraft namespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((namespace, value)) => Self::new(namespace, value),
            None => Self::minecraft(s),
        }
    }
}

impl TryFrom<String> for ResourceKey {
    type Error = ResourceKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceKey> for String {
    fn from(key: ResourceKey) -> Self {
        key.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::{ResourceKey, ResourceKeyError};

    #[test]
    fn test_parse_key() {
        let key: ResourceKey = "hephaestus:bone/arm".parse().unwrap();
        assert_eq!(key.namespace(), "hephaestus");
        assert_eq!(key.value(), "bone/arm");
        assert_eq!(key.to_string(), "hephaestus:bone/arm");
    }

    #[test]
    fn test_default_namespace() {
        let key: ResourceKey = "player_head".parse().unwrap();
        assert_eq!(key, ResourceKey::minecraft("player_head").unwrap());
    }

    #[test]
    fn test_reject_bad_key() {
        assert_eq!(
            ":head".parse::<ResourceKey>(),
            Err(ResourceKeyError::EmptyNamespace)
        );
        assert_eq!(
            "minecraft:".parse::<ResourceKey>(),
            Err(ResourceKeyError::EmptyValue)
        );
        assert_eq!(
            "Minecraft:head".parse::<ResourceKey>(),
            Err(ResourceKeyError::IllegalCharacter('M'))
        );
    }
}
