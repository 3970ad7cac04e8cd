use crate::item::ItemDefinition;
use crate::player::Player;

use super::{InventoryRule, RuleResult};

/// Denies items whose `required_level` exceeds the player's level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevelRequirementRule;

impl InventoryRule for LevelRequirementRule {
    fn name(&self) -> &'static str {
        "level_requirement"
    }

    fn can_add_item(&self, player: &Player, item: &ItemDefinition, _quantity: u32) -> RuleResult {
        if item.required_level() > player.level() {
            return RuleResult::deny(format!(
                "{} requires level {} (current {})",
                item.name(),
                item.required_level(),
                player.level()
            ));
        }
        RuleResult::allow()
    }
}
