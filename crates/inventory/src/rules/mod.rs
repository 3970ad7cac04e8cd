//! Inventory addition rules.
//!
//! Each rule is a stateless predicate over `(player, item, quantity)`. Rules
//! only read; `InventoryService` is the single place where a passing
//! evaluation turns into a mutation.

use serde::Serialize;

use crate::item::ItemDefinition;
use crate::player::Player;

mod level;
mod stack;
mod weight;

pub use level::LevelRequirementRule;
pub use stack::StackLimitRule;
pub use weight::WeightLimitRule;

/// Verdict of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleResult {
    pub allowed: bool,

    /// Human-readable explanation when denied.
    pub reason: Option<String>,

    /// Largest quantity that would have passed this rule, if any.
    ///
    /// A hint for the caller; never applied automatically.
    pub allowed_quantity: Option<u32>,
}

impl RuleResult {
    pub fn allow() -> Self {
        Self {
            allowed: true,
            reason: None,
            allowed_quantity: None,
        }
    }

    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            allowed_quantity: None,
        }
    }

    pub fn deny_partial(reason: impl Into<String>, allowed_quantity: u32) -> Self {
        Self {
            allowed: false,
            reason: Some(reason.into()),
            allowed_quantity: Some(allowed_quantity),
        }
    }
}

/// A check run before an item is added to a player's inventory.
///
/// Implementations must not mutate anything and must not depend on other
/// rules having run.
pub trait InventoryRule {
    /// Stable short name used in logs.
    fn name(&self) -> &'static str;

    fn can_add_item(&self, player: &Player, item: &ItemDefinition, quantity: u32) -> RuleResult;
}
