use serde::{Deserialize, Serialize};

use packrat_core::{DomainError, DomainResult, Entity, ItemId};

use crate::weight::Weight;

/// Closed set of item categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Weapon,
    Armor,
    Consumable,
    Material,
    Misc,
}

impl core::fmt::Display for ItemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            ItemType::Weapon => "weapon",
            ItemType::Armor => "armor",
            ItemType::Consumable => "consumable",
            ItemType::Material => "material",
            ItemType::Misc => "misc",
        };
        f.write_str(s)
    }
}

/// Immutable catalog entry describing an item type.
///
/// Shared by `Arc` across every stack that holds this item; never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ItemDefinitionRecord")]
pub struct ItemDefinition {
    id: ItemId,
    name: String,
    weight: Weight,
    max_stack_size: u32,
    required_level: u32,
    item_type: ItemType,
}

impl ItemDefinition {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        weight: Weight,
        max_stack_size: u32,
        required_level: u32,
        item_type: ItemType,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument(format!(
                "item '{id}': name cannot be empty"
            )));
        }
        if max_stack_size == 0 {
            return Err(DomainError::invalid_argument(format!(
                "item '{id}': max_stack_size must be positive"
            )));
        }
        Ok(Self {
            id,
            name,
            weight,
            max_stack_size,
            required_level,
            item_type,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn max_stack_size(&self) -> u32 {
        self.max_stack_size
    }

    pub fn required_level(&self) -> u32 {
        self.required_level
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }
}

impl Entity for ItemDefinition {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Wire shape of an `ItemDefinition`, validated on conversion.
#[derive(Deserialize)]
struct ItemDefinitionRecord {
    id: ItemId,
    name: String,
    weight: Weight,
    max_stack_size: u32,
    #[serde(default)]
    required_level: u32,
    item_type: ItemType,
}

impl TryFrom<ItemDefinitionRecord> for ItemDefinition {
    type Error = DomainError;

    fn try_from(r: ItemDefinitionRecord) -> Result<Self, Self::Error> {
        ItemDefinition::new(
            r.id,
            r.name,
            r.weight,
            r.max_stack_size,
            r.required_level,
            r.item_type,
        )
    }
}
