//! Ordered stack container owned by a single player.

use std::sync::Arc;

use packrat_core::{DomainResult, Entity, ItemId};

use crate::item::ItemDefinition;
use crate::stack::ItemStack;
use crate::weight::Weight;

/// Ordered collection of stacks, at most one per distinct item id.
///
/// `add_item` performs no validation; rule checks happen upstream in
/// `InventoryService`. Stacks keep insertion order and are scanned linearly,
/// which is fine at backpack scale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stacks(&self) -> &[ItemStack] {
        &self.stacks
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn calculate_total_weight(&self) -> Weight {
        self.stacks.iter().map(ItemStack::total_weight).sum()
    }

    pub fn find_stack(&self, item_id: &ItemId) -> Option<&ItemStack> {
        self.stacks.iter().find(|s| s.item_id() == item_id)
    }

    pub fn find_stack_mut(&mut self, item_id: &ItemId) -> Option<&mut ItemStack> {
        self.stacks.iter_mut().find(|s| s.item_id() == item_id)
    }

    /// Quantity held of `item_id` (0 when absent).
    pub fn quantity_of(&self, item_id: &ItemId) -> u32 {
        self.find_stack(item_id).map_or(0, ItemStack::quantity)
    }

    /// Merge into the existing stack for this item, or append a new one.
    ///
    /// Adding zero is a no-op, so no empty stack is ever created. Fails only
    /// when the stack quantity would overflow, leaving the inventory unchanged.
    pub fn add_item(&mut self, item: &Arc<ItemDefinition>, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Ok(());
        }
        match self.find_stack_mut(item.id()) {
            Some(stack) => stack.add(quantity)?,
            None => self.stacks.push(ItemStack::new(Arc::clone(item), quantity)),
        }
        Ok(())
    }

    /// Remove `quantity` of `item_id`.
    ///
    /// Returns `false` without mutating when the item is absent or the stack
    /// holds fewer than `quantity`. A stack that reaches zero is dropped.
    pub fn remove_item(&mut self, item_id: &ItemId, quantity: u32) -> bool {
        let Some(pos) = self.stacks.iter().position(|s| s.item_id() == item_id) else {
            return false;
        };
        let stack = &mut self.stacks[pos];
        if stack.quantity() < quantity || stack.remove(quantity).is_err() {
            return false;
        }
        if stack.is_empty() {
            self.stacks.remove(pos);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;
    use proptest::prelude::*;

    fn def(id: &str, weight: f64) -> Arc<ItemDefinition> {
        Arc::new(
            ItemDefinition::new(
                ItemId::new(id).unwrap(),
                id,
                Weight::new(weight).unwrap(),
                99,
                0,
                ItemType::Material,
            )
            .unwrap(),
        )
    }

    #[test]
    fn empty_inventory_weighs_nothing() {
        assert_eq!(Inventory::new().calculate_total_weight(), Weight::ZERO);
    }

    #[test]
    fn same_item_merges_into_one_stack() {
        let ore = def("ore", 1.0);
        let mut inv = Inventory::new();
        inv.add_item(&ore, 3).unwrap();
        inv.add_item(&ore, 4).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.quantity_of(ore.id()), 7);
    }

    #[test]
    fn adding_zero_creates_no_stack() {
        let ore = def("ore", 1.0);
        let mut inv = Inventory::new();
        inv.add_item(&ore, 0).unwrap();
        assert!(inv.is_empty());
        assert!(inv.find_stack(ore.id()).is_none());
    }

    #[test]
    fn overflowing_add_fails_and_keeps_quantity() {
        let ore = def("ore", 1.0);
        let mut inv = Inventory::new();
        inv.add_item(&ore, u32::MAX).unwrap();

        let err = inv.add_item(&ore, 1).unwrap_err();
        assert!(matches!(err, packrat_core::DomainError::InvariantViolation(_)));
        assert_eq!(inv.quantity_of(ore.id()), u32::MAX);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn distinct_items_keep_insertion_order() {
        let (ore, wood) = (def("ore", 1.0), def("wood", 0.5));
        let mut inv = Inventory::new();
        inv.add_item(&wood, 1).unwrap();
        inv.add_item(&ore, 1).unwrap();
        inv.add_item(&wood, 1).unwrap();

        let ids: Vec<&str> = inv.stacks().iter().map(|s| s.item_id().as_str()).collect();
        assert_eq!(ids, vec!["wood", "ore"]);
    }

    #[test]
    fn total_weight_sums_all_stacks() {
        let (ore, wood) = (def("ore", 1.5), def("wood", 0.5));
        let mut inv = Inventory::new();
        inv.add_item(&ore, 2).unwrap();
        inv.add_item(&wood, 4).unwrap();
        assert_eq!(inv.calculate_total_weight(), Weight::new(5.0).unwrap());
    }

    #[test]
    fn remove_more_than_held_fails_without_mutation() {
        let ore = def("ore", 1.0);
        let mut inv = Inventory::new();
        inv.add_item(&ore, 15).unwrap();

        assert!(!inv.remove_item(ore.id(), 20));
        assert_eq!(inv.quantity_of(ore.id()), 15);
    }

    #[test]
    fn remove_unknown_item_fails() {
        let mut inv = Inventory::new();
        assert!(!inv.remove_item(&ItemId::new("ghost").unwrap(), 1));
    }

    #[test]
    fn removing_everything_drops_the_stack() {
        let ore = def("ore", 1.0);
        let mut inv = Inventory::new();
        inv.add_item(&ore, 15).unwrap();

        assert!(inv.remove_item(ore.id(), 5));
        assert_eq!(inv.quantity_of(ore.id()), 10);
        assert!(inv.remove_item(ore.id(), 10));
        assert!(inv.find_stack(ore.id()).is_none());
        assert!(inv.is_empty());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        #[test]
        fn repeated_adds_never_duplicate_stacks(
            quantities in prop::collection::vec(1u32..100u32, 1..20)
        ) {
            let ore = def("ore", 1.0);
            let mut inv = Inventory::new();
            for q in &quantities {
                inv.add_item(&ore, *q).unwrap();
            }
            prop_assert_eq!(inv.len(), 1);
            prop_assert_eq!(inv.quantity_of(ore.id()), quantities.iter().sum::<u32>());
        }
    }
}
