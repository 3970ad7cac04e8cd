use std::sync::Arc;

use anyhow::Context;

use packrat_core::ItemId;
use packrat_inventory::{AddItemResult, InventoryService, ItemCatalog, ItemDefinition, Player, Weight};

const CATALOG_ENV: &str = "PACKRAT_CATALOG";
const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

fn main() -> anyhow::Result<()> {
    packrat_observability::init();

    let catalog = load_catalog()?;
    tracing::info!(items = catalog.len(), "catalog loaded");

    let service = InventoryService::with_default_rules();
    let mut player = Player::new("Aria", 5, Weight::new(50.0)?)?;
    println!(
        "{} (level {}, carry limit {})",
        player.name(),
        player.level(),
        player.max_carry_weight()
    );

    let attempts: [(&str, u32); 7] = [
        ("iron_sword", 1),
        ("runeblade", 1),
        ("health_potion", 15),
        ("health_potion", 10),
        ("iron_ore", 40),
        ("gold_coin", 500),
        ("chainmail", 1),
    ];
    for (id, quantity) in attempts {
        let item = lookup(&catalog, id)?;
        let result = service.try_add_item(&mut player, &item, quantity)?;
        report(&item, quantity, &result);

        if let Some(allowed) = result.quantity_allowed.filter(|q| *q > 0) {
            let retry = service.try_add_item(&mut player, &item, allowed)?;
            report(&item, allowed, &retry);
        }
    }

    let ore = ItemId::new("iron_ore")?;
    let removed = service.remove_item(&mut player, &ore, 10);
    println!("remove 10 x iron_ore: {}", if removed { "ok" } else { "refused" });

    println!("\ninventory ({}):", player.inventory().calculate_total_weight());
    for stack in player.inventory().stacks() {
        println!(
            "  {:>4} x {:<14} {:<11} {}",
            stack.quantity(),
            stack.item().name(),
            stack.item().item_type(),
            stack.total_weight()
        );
    }
    Ok(())
}

fn load_catalog() -> anyhow::Result<ItemCatalog> {
    match std::env::var(CATALOG_ENV) {
        Ok(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read catalog {path}"))?;
            ItemCatalog::from_json(&json).with_context(|| format!("invalid catalog {path}"))
        }
        Err(_) => ItemCatalog::from_json(BUILTIN_CATALOG).context("invalid built-in catalog"),
    }
}

fn lookup(catalog: &ItemCatalog, id: &str) -> anyhow::Result<Arc<ItemDefinition>> {
    Ok(catalog.require(&id.parse::<ItemId>()?)?)
}

fn report(item: &ItemDefinition, quantity: u32, result: &AddItemResult) {
    let status = if result.success { "ok" } else { "denied" };
    print!("add {quantity} x {}: {status}: {}", item.name(), result.message);
    match result.quantity_allowed {
        Some(allowed) => println!(" (allowed: {allowed})"),
        None => println!(),
    }
}
