use std::sync::Arc;

use packrat_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::ItemDefinition;
use crate::weight::Weight;

/// A quantity of one item type held together.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    item: Arc<ItemDefinition>,
    quantity: u32,
}

impl ItemStack {
    pub fn new(item: Arc<ItemDefinition>, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub fn item(&self) -> &Arc<ItemDefinition> {
        &self.item
    }

    pub fn item_id(&self) -> &ItemId {
        self.item.id()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn total_weight(&self) -> Weight {
        self.item.weight() * self.quantity
    }

    /// Refuses to overflow; the quantity is unchanged on error.
    pub(crate) fn add(&mut self, quantity: u32) -> DomainResult<()> {
        self.quantity = self.quantity.checked_add(quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "stack of '{}' cannot hold {} + {quantity}",
                self.item.id(),
                self.quantity
            ))
        })?;
        Ok(())
    }

    /// Refuses to go below zero; callers check availability first.
    pub(crate) fn remove(&mut self, quantity: u32) -> DomainResult<()> {
        self.quantity = self.quantity.checked_sub(quantity).ok_or_else(|| {
            DomainError::invariant(format!(
                "cannot remove {quantity} x '{}' from a stack of {}",
                self.item.id(),
                self.quantity
            ))
        })?;
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.quantity == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemType;

    fn potion() -> Arc<ItemDefinition> {
        Arc::new(
            ItemDefinition::new(
                ItemId::new("potion").unwrap(),
                "Potion",
                Weight::new(0.5).unwrap(),
                20,
                1,
                ItemType::Consumable,
            )
            .unwrap(),
        )
    }

    #[test]
    fn total_weight_scales_with_quantity() {
        let stack = ItemStack::new(potion(), 4);
        assert_eq!(stack.total_weight(), Weight::new(2.0).unwrap());
    }

    #[test]
    fn over_removal_is_refused_without_mutation() {
        let mut stack = ItemStack::new(potion(), 3);
        let err = stack.remove(4).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(stack.quantity(), 3);

        stack.remove(3).unwrap();
        assert!(stack.is_empty());
    }

    #[test]
    fn overflowing_add_is_refused_without_mutation() {
        let mut stack = ItemStack::new(potion(), u32::MAX - 1);
        let err = stack.add(2).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(stack.quantity(), u32::MAX - 1);

        stack.add(1).unwrap();
        assert_eq!(stack.quantity(), u32::MAX);
    }
}
