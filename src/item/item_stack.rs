use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Maximum items in a single stack
pub const MAX_STACK_SIZE: u32 = 64;

const DEFAULT_NAMESPACE: &str = "minecraft";
const AIR_KEYS: [&str; 3] = ["minecraft:air", "minecraft:cave_air", "minecraft:void_air"];

/// Namespaced material key, e.g. `minecraft:stone`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Material(String);

impl Material {
    /// Create a material key. Bare names get the `minecraft` namespace.
    pub fn new(key: &str) -> Self {
        let key = key.trim().to_ascii_lowercase();
        if key.contains(':') {
            Self(key)
        } else {
            Self(format!("{}:{}", DEFAULT_NAMESPACE, key))
        }
    }

    pub fn air() -> Self {
        Self::new("air")
    }

    pub fn key(&self) -> &str {
        &self.0
    }

    /// Air materials render as an empty slot
    pub fn is_air(&self) -> bool {
        AIR_KEYS.contains(&self.0.as_str())
    }
}

impl From<&str> for Material {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Material {
    fn from(key: String) -> Self {
        Self::new(&key)
    }
}

impl From<Material> for String {
    fn from(material: Material) -> Self {
        material.0
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn default_count() -> u32 {
    1
}

/// An item as rendered into a menu slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    pub material: Material,
    #[serde(default = "default_count")]
    pub count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lore: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub enchantments: BTreeMap<String, u32>,
    #[serde(default)]
    pub damage: u16,
    #[serde(default)]
    pub unbreakable: bool,
    #[serde(default)]
    pub hide_tags: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
}

impl ItemStack {
    /// Create a new item stack
    pub fn new(material: impl Into<Material>, count: u32) -> Self {
        Self {
            material: material.into(),
            count: count.clamp(1, MAX_STACK_SIZE),
            display_name: None,
            lore: Vec::new(),
            enchantments: BTreeMap::new(),
            damage: 0,
            unbreakable: false,
            hide_tags: false,
            custom_model_data: None,
        }
    }

    /// Create a single item
    pub fn single(material: impl Into<Material>) -> Self {
        Self::new(material, 1)
    }

    /// Name shown to the viewer, falling back to the material key
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .unwrap_or_else(|| self.material.key())
    }

    pub fn is_enchanted(&self) -> bool {
        !self.enchantments.is_empty()
    }
}
