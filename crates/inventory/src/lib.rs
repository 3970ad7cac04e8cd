//! Inventory domain module.
//!
//! Data (`Weight`, `ItemDefinition`, `ItemStack`, `Inventory`, `Player`),
//! validation (`InventoryRule` implementations) and orchestration
//! (`InventoryService`) are kept apart. All of it is deterministic, in-memory
//! domain logic.

pub mod catalog;
pub mod inventory;
pub mod item;
pub mod player;
pub mod rules;
pub mod service;
pub mod stack;
pub mod weight;

pub use catalog::ItemCatalog;
pub use inventory::Inventory;
pub use item::{ItemDefinition, ItemType};
pub use player::Player;
pub use rules::{
    InventoryRule, LevelRequirementRule, RuleResult, StackLimitRule, WeightLimitRule,
};
pub use service::{AddItemResult, InventoryService};
pub use stack::ItemStack;
pub use weight::Weight;
