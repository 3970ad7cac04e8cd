//! Rule orchestration: evaluate every registered rule, then commit.
//!
//! ```text
//! try_add_item(player, item, quantity)
//!   ↓
//! 1. Reject quantity == 0 (invalid argument, no rule runs)
//!   ↓
//! 2. Evaluate rules in registration order against unchanged state
//!   ↓   first denial → AddItemResult::denied, nothing mutated
//! 3. Inventory::add_item (the only mutation)
//! ```
//!
//! New rules are appended with `add_rule`; this module does not change when a
//! rule is added.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use packrat_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::ItemDefinition;
use crate::player::Player;
use crate::rules::{
    InventoryRule, LevelRequirementRule, RuleResult, StackLimitRule, WeightLimitRule,
};

/// Outcome of `InventoryService::try_add_item`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddItemResult {
    pub success: bool,
    pub message: String,
    pub quantity_added: u32,

    /// Partial-fulfilment hint copied from the denying rule.
    pub quantity_allowed: Option<u32>,
}

impl AddItemResult {
    pub fn added(message: impl Into<String>, quantity: u32) -> Self {
        Self {
            success: true,
            message: message.into(),
            quantity_added: quantity,
            quantity_allowed: None,
        }
    }

    pub fn denied(verdict: RuleResult) -> Self {
        Self {
            success: false,
            message: verdict
                .reason
                .unwrap_or_else(|| "item cannot be added".to_string()),
            quantity_added: 0,
            quantity_allowed: verdict.allowed_quantity,
        }
    }
}

type BoxedRule = Box<dyn InventoryRule + Send + Sync>;

/// Holds the ordered rule registry and joins validation with mutation.
#[derive(Default)]
pub struct InventoryService {
    rules: Vec<BoxedRule>,
}

impl core::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InventoryService")
            .field("rules", &self.rule_names())
            .finish()
    }
}

impl InventoryService {
    /// Service with an empty registry; every addition passes until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Level, then weight, then stack.
    pub fn with_default_rules() -> Self {
        let mut service = Self::new();
        service.add_rule(LevelRequirementRule);
        service.add_rule(WeightLimitRule);
        service.add_rule(StackLimitRule);
        service
    }

    /// Append a rule after the ones already registered.
    pub fn add_rule<R>(&mut self, rule: R)
    where
        R: InventoryRule + Send + Sync + 'static,
    {
        tracing::debug!(rule = rule.name(), position = self.rules.len(), "rule registered");
        self.rules.push(Box::new(rule));
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Add `quantity` of `item` to the player's inventory if every rule allows it.
    ///
    /// A denial is an `Ok` result with `success == false`; `Err` is reserved for
    /// invalid input and for a stack quantity that would overflow `u32`.
    pub fn try_add_item(
        &self,
        player: &mut Player,
        item: &Arc<ItemDefinition>,
        quantity: u32,
    ) -> DomainResult<AddItemResult> {
        if quantity == 0 {
            tracing::warn!(player = player.name(), item = %item.id(), "rejected zero quantity");
            return Err(DomainError::invalid_argument("quantity must be positive"));
        }

        if let Some((rule, verdict)) = self.first_denial(player, item, quantity) {
            tracing::info!(
                player = player.name(),
                item = %item.id(),
                quantity,
                rule,
                reason = verdict.reason.as_deref().unwrap_or_default(),
                allowed_quantity = ?verdict.allowed_quantity,
                "add denied"
            );
            return Ok(AddItemResult::denied(verdict));
        }

        player.inventory_mut().add_item(item, quantity)?;
        tracing::info!(
            player = player.name(),
            item = %item.id(),
            quantity,
            total_weight = %player.inventory().calculate_total_weight(),
            "item added"
        );
        Ok(AddItemResult::added(
            format!("added {quantity} x {}", item.name()),
            quantity,
        ))
    }

    /// `try_add_item` for a player shared between callers.
    ///
    /// The lock is held from the first rule evaluation through the commit, so
    /// no other caller can change the inventory between check and mutation.
    pub fn try_add_item_locked(
        &self,
        player: &Mutex<Player>,
        item: &Arc<ItemDefinition>,
        quantity: u32,
    ) -> DomainResult<AddItemResult> {
        let mut guard = player
            .lock()
            .map_err(|_| DomainError::invariant("player lock poisoned"))?;
        self.try_add_item(&mut guard, item, quantity)
    }

    /// Remove `quantity` of `item_id`; `false` if the player holds fewer.
    pub fn remove_item(&self, player: &mut Player, item_id: &ItemId, quantity: u32) -> bool {
        let removed = player.inventory_mut().remove_item(item_id, quantity);
        if removed {
            tracing::info!(player = player.name(), item = %item_id, quantity, "item removed");
        } else {
            tracing::debug!(
                player = player.name(),
                item = %item_id,
                quantity,
                held = player.inventory().quantity_of(item_id),
                "remove refused"
            );
        }
        removed
    }

    fn first_denial(
        &self,
        player: &Player,
        item: &ItemDefinition,
        quantity: u32,
    ) -> Option<(&'static str, RuleResult)> {
        self.rules.iter().find_map(|rule| {
            let verdict = rule.can_add_item(player, item, quantity);
            tracing::debug!(rule = rule.name(), allowed = verdict.allowed, "rule evaluated");
            (!verdict.allowed).then(|| (rule.name(), verdict))
        })
    }
}
