use packrat_core::{DomainError, DomainResult};

use crate::inventory::Inventory;
use crate::weight::Weight;

/// Character identity and carry limits, plus the one inventory it owns.
///
/// Holds no inventory logic; rules and `InventoryService` operate on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    level: u32,
    max_carry_weight: Weight,
    inventory: Inventory,
}

impl Player {
    pub fn new(name: impl Into<String>, level: u32, max_carry_weight: Weight) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("player name cannot be empty"));
        }
        ensure_level(level)?;
        Ok(Self {
            name,
            level,
            max_carry_weight,
            inventory: Inventory::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) -> DomainResult<()> {
        ensure_level(level)?;
        self.level = level;
        Ok(())
    }

    pub fn level_up(&mut self) {
        self.level = self.level.saturating_add(1);
    }

    pub fn max_carry_weight(&self) -> Weight {
        self.max_carry_weight
    }

    /// Capacity left before hitting `max_carry_weight` (zero if already over).
    pub fn remaining_capacity(&self) -> Weight {
        self.max_carry_weight
            .saturating_sub(self.inventory.calculate_total_weight())
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }
}

fn ensure_level(level: u32) -> DomainResult<()> {
    if level == 0 {
        return Err(DomainError::invalid_argument("player level must be at least 1"));
    }
    Ok(())
}
