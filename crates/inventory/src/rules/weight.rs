use crate::item::ItemDefinition;
use crate::player::Player;

use super::{InventoryRule, RuleResult};

/// Keeps the inventory's total weight within the player's carry limit.
///
/// When the full quantity does not fit, the verdict carries the largest
/// quantity that would. Zero-weight items always fit.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightLimitRule;

impl InventoryRule for WeightLimitRule {
    fn name(&self) -> &'static str {
        "weight_limit"
    }

    fn can_add_item(&self, player: &Player, item: &ItemDefinition, quantity: u32) -> RuleResult {
        let unit = item.weight();
        if unit.is_zero() {
            return RuleResult::allow();
        }

        let current = player.inventory().calculate_total_weight();
        let max = player.max_carry_weight();
        let fits = |n: u32| current + unit * n <= max;
        if fits(quantity) {
            return RuleResult::allow();
        }

        let available = player.remaining_capacity();
        // Division only seeds the search; the suggestion must pass `fits` itself.
        let estimate = (available.value() / unit.value()).floor() as u32;
        let mut can_carry = estimate.min(quantity.saturating_sub(1));
        while can_carry > 0 && !fits(can_carry) {
            can_carry -= 1;
        }
        if can_carry == 0 {
            return RuleResult::deny(format!(
                "{} is too heavy ({} each, {} of {} capacity left)",
                item.name(),
                unit,
                available,
                max
            ));
        }
        RuleResult::deny_partial(
            format!(
                "too heavy to carry {quantity} {}; you can carry {can_carry}",
                item.name()
            ),
            can_carry,
        )
    }
}
