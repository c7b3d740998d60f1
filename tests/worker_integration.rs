//! Full pipeline through the dedicated search worker

use loadout_forge::core::config::ForgeSettings;
use loadout_forge::core::types::{ArmorSlot, ClassType, EnergyType, ItemId};
use loadout_forge::inventory::{Item, ItemEnergy, ItemPool, ItemStat};
use loadout_forge::mods::{total_stat_changes, ModSelection};
use loadout_forge::optimizer::{
    hydrate_armor_set, normalize_pool, search, Objective, SearchRequest, SearchWorker,
};
use loadout_forge::stats::StatType;

fn hunter_piece(slot: ArmorSlot, recovery: i32) -> Item {
    Item {
        id: ItemId::new(),
        name: format!("{slot:?}-{recovery}"),
        slot: Some(slot),
        class: Some(ClassType::Hunter),
        power: 1500,
        stats: Some(vec![ItemStat { stat: StatType::Recovery, value: recovery, base: recovery }]),
        energy: Some(ItemEnergy { energy_type: EnergyType::Any, capacity: 10 }),
        compatible_mod_tags: None,
    }
}

fn small_pool() -> ItemPool {
    let mut items = Vec::new();
    for &slot in ArmorSlot::all() {
        items.push(hunter_piece(slot, 20));
        items.push(hunter_piece(slot, 5));
    }
    ItemPool::new(items)
}

#[test]
fn test_pool_to_hydrated_sets_through_worker() {
    let pool = small_pool();
    let selection = ModSelection::default();
    let settings = ForgeSettings::unfiltered();
    let candidates = normalize_pool(&pool, ClassType::Hunter, &selection, &settings);

    let worker = SearchWorker::spawn().unwrap();
    let rx = worker
        .submit(SearchRequest {
            candidates,
            deltas: total_stat_changes(&selection),
            objective: Objective::Stat(StatType::Recovery),
            settings,
        })
        .unwrap();
    let outcome = rx.recv().unwrap();

    assert!(!outcome.is_empty());
    assert_eq!(outcome.sets[0].objective, 100);

    let by_id = pool.items_by_id();
    let hydrated = hydrate_armor_set(&outcome.sets[0], &by_id);
    assert!(!hydrated.is_stale());
    for item in &hydrated.items {
        assert_eq!(item.stat_value(StatType::Recovery).unwrap().value, 20);
    }
}

#[test]
fn test_worker_outcome_matches_in_thread_search() {
    let pool = small_pool();
    let selection = ModSelection::default();
    let settings = ForgeSettings::unfiltered();
    let candidates = normalize_pool(&pool, ClassType::Hunter, &selection, &settings);
    let deltas = total_stat_changes(&selection);
    let objective = Objective::Stat(StatType::Recovery);

    let direct = search(&candidates, &deltas, &objective, &settings);

    let worker = SearchWorker::spawn().unwrap();
    let rx = worker
        .submit(SearchRequest { candidates, deltas, objective, settings })
        .unwrap();
    let via_worker = rx.recv().unwrap();

    assert_eq!(via_worker.sets, direct.sets);
}

#[test]
fn test_worker_survives_abandoned_pipeline_request() {
    let pool = small_pool();
    let selection = ModSelection::default();
    let settings = ForgeSettings::unfiltered();
    let candidates = normalize_pool(&pool, ClassType::Hunter, &selection, &settings);
    let request = SearchRequest {
        candidates,
        deltas: total_stat_changes(&selection),
        objective: Objective::MaxPower,
        settings,
    };

    let worker = SearchWorker::spawn().unwrap();
    drop(worker.submit(request.clone()).unwrap());
    let rx = worker.submit(request).unwrap();
    assert_eq!(rx.recv().unwrap().sets[0].objective, 7500);
}
