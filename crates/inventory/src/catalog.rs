//! Item catalog: the registry of `ItemDefinition`s players can pick up.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use packrat_core::{DomainError, DomainResult, Entity, ItemId};

use crate::item::ItemDefinition;

#[derive(Deserialize)]
struct CatalogDocument {
    items: Vec<ItemDefinition>,
}

/// Keyed registry of shared item definitions, iterated in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    order: Vec<ItemId>,
    items: HashMap<ItemId, Arc<ItemDefinition>>,
}

impl ItemCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `{ "items": [...] }`. Every entry is validated; ids must be unique.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: CatalogDocument =
            serde_json::from_str(json).map_err(|e| DomainError::catalog(e.to_string()))?;

        let mut catalog = Self::new();
        for def in doc.items {
            catalog.insert(def)?;
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, def: ItemDefinition) -> DomainResult<Arc<ItemDefinition>> {
        if self.items.contains_key(def.id()) {
            return Err(DomainError::invariant(format!(
                "duplicate item id '{}'",
                def.id()
            )));
        }
        let id = def.id().clone();
        let def = Arc::new(def);
        self.order.push(id.clone());
        self.items.insert(id, Arc::clone(&def));
        Ok(def)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Arc<ItemDefinition>> {
        self.items.get(id)
    }

    pub fn require(&self, id: &ItemId) -> DomainResult<Arc<ItemDefinition>> {
        self.get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(format!("item '{id}'")))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<ItemDefinition>> {
        self.order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "items": [
            { "id": "sword", "name": "Iron Sword", "weight": 3.5, "max_stack_size": 1,
              "required_level": 5, "item_type": "weapon" },
            { "id": "potion", "name": "Health Potion", "weight": 0.5, "max_stack_size": 20,
              "item_type": "consumable" }
        ]
    }"#;

    #[test]
    fn parses_entries_in_order() {
        let catalog = ItemCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);

        let names: Vec<&str> = catalog.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Iron Sword", "Health Potion"]);

        let sword = catalog.require(&ItemId::new("sword").unwrap()).unwrap();
        assert_eq!(sword.required_level(), 5);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let catalog = ItemCatalog::from_json(CATALOG).unwrap();
        let err = catalog.require(&ItemId::new("shield").unwrap()).unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = r#"{ "items": [
            { "id": "ore", "name": "Ore", "weight": 1.0, "max_stack_size": 5, "item_type": "material" },
            { "id": "ore", "name": "Ore", "weight": 1.0, "max_stack_size": 5, "item_type": "material" }
        ] }"#;
        let err = ItemCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn invalid_entries_surface_as_catalog_errors() {
        let json = r#"{ "items": [
            { "id": "ore", "name": "Ore", "weight": -1.0, "max_stack_size": 5, "item_type": "material" }
        ] }"#;
        assert!(matches!(ItemCatalog::from_json(json), Err(DomainError::Catalog(_))));

        assert!(matches!(ItemCatalog::from_json("not json"), Err(DomainError::Catalog(_))));
    }
}
