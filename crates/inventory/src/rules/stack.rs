use packrat_core::Entity;

use crate::item::ItemDefinition;
use crate::player::Player;

use super::{InventoryRule, RuleResult};

/// Keeps each stack at or below the item's `max_stack_size`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StackLimitRule;

impl InventoryRule for StackLimitRule {
    fn name(&self) -> &'static str {
        "stack_limit"
    }

    fn can_add_item(&self, player: &Player, item: &ItemDefinition, quantity: u32) -> RuleResult {
        let max = item.max_stack_size();
        match player.inventory().find_stack(item.id()) {
            Some(stack) => {
                let space = max.saturating_sub(stack.quantity());
                if space < quantity {
                    let reason = if space == 0 {
                        format!("{} stack is full ({max}/{max})", item.name())
                    } else {
                        format!(
                            "{} stack can only take {space} more (max {max})",
                            item.name()
                        )
                    };
                    return RuleResult::deny_partial(reason, space);
                }
            }
            None if quantity > max => {
                return RuleResult::deny_partial(
                    format!("{} stacks to at most {max}", item.name()),
                    max,
                );
            }
            None => {}
        }
        RuleResult::allow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{item, player};

    #[test]
    fn existing_stack_limits_to_remaining_space() {
        let arrows = item("arrow", 0.1, 20, 0);
        let mut p = player(1, 100.0);
        p.inventory_mut().add_item(&arrows, 18).unwrap();

        let r = StackLimitRule.can_add_item(&p, &arrows, 5);
        assert!(!r.allowed);
        assert_eq!(r.allowed_quantity, Some(2));
    }

    #[test]
    fn full_stack_reports_zero_space() {
        let arrows = item("arrow", 0.1, 20, 0);
        let mut p = player(1, 100.0);
        p.inventory_mut().add_item(&arrows, 20).unwrap();

        let r = StackLimitRule.can_add_item(&p, &arrows, 1);
        assert!(!r.allowed);
        assert_eq!(r.allowed_quantity, Some(0));
    }

    #[test]
    fn new_stack_capped_at_max() {
        let arrows = item("arrow", 0.1, 20, 0);
        let r = StackLimitRule.can_add_item(&player(1, 100.0), &arrows, 21);
        assert!(!r.allowed);
        assert_eq!(r.allowed_quantity, Some(20));

        assert!(StackLimitRule.can_add_item(&player(1, 100.0), &arrows, 20).allowed);
    }
}
