//! Planning session: owned lock state plus memoized derived views.
//!
//! The planner is the single writer of its lock map. Every mutation computes a
//! replacement map with the pure operations of `loadout-core` and installs it
//! through [`Planner::set_lock_map`]. Derived views are recomputed only when
//! the digest of their inputs changes.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use loadout_core::{
    ArmorItem, ArmorSet, BuilderConfig, ClassType, Inventory, LockMap, LockedItem, Memo, MemoKey,
    Plug, Slot, SlotPerks, StatFilters, filter_generated_sets, filtered_perks, generate_sets,
    perk_catalog, power_level_options, search_perks, stat_ranges, structural_key,
};

use crate::api::{ItemPicker, PickError, PickPurpose, PickRequest, PlannerError, Result};

/// Reachable perks per slot.
pub type FilteredPerks = BTreeMap<Slot, BTreeSet<Plug>>;

/// Short hex prefix of a memo key for log lines.
fn short_key(key: &MemoKey) -> String {
    hex::encode(&key[..8])
}

/// One user's planning session over an inventory snapshot.
pub struct Planner {
    inventory: Arc<Inventory>,
    inventory_key: MemoKey,
    config: BuilderConfig,
    lock_map: LockMap,

    sets: Memo<Arc<Vec<ArmorSet>>>,
    filtered_sets: Memo<Arc<Vec<ArmorSet>>>,
    perks: Memo<Arc<FilteredPerks>>,
}

impl Planner {
    /// Create a new planner builder
    pub fn builder() -> PlannerBuilder {
        PlannerBuilder::new()
    }

    pub fn inventory(&self) -> &Arc<Inventory> {
        &self.inventory
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    pub fn class(&self) -> ClassType {
        self.config.class
    }

    pub fn lock_map(&self) -> &LockMap {
        &self.lock_map
    }

    // ===== settings =====

    /// Replace the builder settings after validating them.
    ///
    /// Switching class clears every lock, since locks name another class's
    /// items.
    pub fn set_config(&mut self, config: BuilderConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            tracing::warn!("Rejected builder config: {}", err);
            return Err(err.into());
        }
        let class_changed = config.class != self.config.class;
        self.config = config;
        if class_changed {
            tracing::info!("Class changed to {:?}; clearing locks", self.config.class);
            self.set_lock_map(LockMap::new());
        }
        Ok(())
    }

    pub fn set_class(&mut self, class: ClassType) -> Result<()> {
        let config = BuilderConfig {
            class,
            ..self.config.clone()
        };
        self.set_config(config)
    }

    pub fn set_minimum_power(&mut self, minimum_power: u32) -> Result<()> {
        let config = self.config.clone().with_minimum_power(minimum_power);
        self.set_config(config)
    }

    pub fn set_stat_filters(&mut self, stat_filters: StatFilters) -> Result<()> {
        let config = self.config.clone().with_stat_filters(stat_filters);
        self.set_config(config)
    }

    // ===== lock state =====

    /// Install a replacement lock map. All lock mutations funnel through here.
    pub fn set_lock_map(&mut self, lock_map: LockMap) {
        if lock_map == self.lock_map {
            return;
        }
        tracing::info!(
            "Lock map updated: {} slot(s) locked",
            lock_map.iter().count()
        );
        self.lock_map = lock_map;
    }

    /// Toggle an entry in one slot.
    pub fn toggle_lock(&mut self, entry: LockedItem, slot: Slot) {
        tracing::debug!("Toggling {} lock on {}", entry.kind(), slot);
        let next = self.lock_map.toggle(entry, slot);
        self.set_lock_map(next);
    }

    /// Replace one slot's entries; `None` clears the slot.
    pub fn update_slot(&mut self, slot: Slot, entries: Option<Vec<LockedItem>>) {
        let next = self.lock_map.with_slot(slot, entries);
        self.set_lock_map(next);
    }

    pub fn lock_item(&mut self, item: ArmorItem) {
        let next = self.lock_map.set_exact_item(item);
        self.set_lock_map(next);
    }

    pub fn exclude_item(&mut self, item: ArmorItem) {
        let next = self.lock_map.set_excluded_item(item);
        self.set_lock_map(next);
    }

    pub fn remove_entry(&mut self, entry: &LockedItem) {
        let next = self.lock_map.remove_entry(entry);
        self.set_lock_map(next);
    }

    /// Clear every lock.
    pub fn reset_locks(&mut self) {
        self.set_lock_map(LockMap::new());
    }

    /// Pin the class's equipped armor, keeping locks on other slots.
    pub fn lock_equipped(&mut self) {
        let next = self
            .lock_map
            .lock_equipped(self.inventory.items_for(self.config.class));
        self.set_lock_map(next);
    }

    // ===== item picker =====

    /// Build the request an [`ItemPicker`] answers for one slot.
    pub fn pick_request(&self, slot: Slot, purpose: PickPurpose) -> PickRequest {
        let candidates = self
            .inventory
            .slot(self.config.class, slot)
            .map(|identities| identities.values().flatten().cloned().collect())
            .unwrap_or_default();
        PickRequest {
            purpose,
            class: self.config.class,
            slot,
            candidates,
        }
    }

    /// Ask `picker` for an item and pin it to `slot`.
    ///
    /// A cancelled pick leaves the locks untouched and is not an error.
    pub async fn choose_lock_item(&mut self, slot: Slot, picker: &dyn ItemPicker) -> Result<()> {
        if let Some(item) = self.pick(slot, PickPurpose::Lock, picker).await? {
            self.lock_item(item);
        }
        Ok(())
    }

    /// Ask `picker` for an item and exclude it from `slot`.
    ///
    /// A cancelled pick leaves the locks untouched and is not an error.
    pub async fn choose_exclude_item(
        &mut self,
        slot: Slot,
        picker: &dyn ItemPicker,
    ) -> Result<()> {
        if let Some(item) = self.pick(slot, PickPurpose::Exclude, picker).await? {
            self.exclude_item(item);
        }
        Ok(())
    }

    async fn pick(
        &self,
        slot: Slot,
        purpose: PickPurpose,
        picker: &dyn ItemPicker,
    ) -> Result<Option<ArmorItem>> {
        let request = self.pick_request(slot, purpose);
        let candidates: BTreeSet<_> = request.candidates.iter().map(|item| item.id).collect();

        let item = match picker.pick(request).await {
            Ok(item) => item,
            Err(PickError::Cancelled) => {
                tracing::debug!("{} pick for {} cancelled", purpose, slot);
                return Ok(None);
            }
            Err(err) => return Err(PlannerError::Pick(err)),
        };

        if item.slot != slot {
            return Err(PlannerError::SlotMismatch {
                id: item.id,
                expected: slot,
                found: item.slot,
            });
        }
        if !candidates.contains(&item.id) {
            return Err(PlannerError::UnknownItem { id: item.id, slot });
        }
        Ok(Some(item))
    }

    // ===== derived views =====

    fn sets_key(&self) -> MemoKey {
        structural_key(&(&self.inventory_key, self.config.class, &self.lock_map))
    }

    /// Every generated set for the current class and locks.
    pub fn sets(&mut self) -> Arc<Vec<ArmorSet>> {
        let key = self.sets_key();
        let (inventory, class, lock_map) = (&self.inventory, self.config.class, &self.lock_map);
        let (sets, hit) = self
            .sets
            .get_or_compute(key, || Arc::new(generate_sets(inventory, class, lock_map)));
        if hit {
            tracing::debug!("Generated sets cache hit [{}]", short_key(&key));
        } else {
            tracing::debug!(
                "Generated {} sets for {:?} [{}]",
                sets.len(),
                class,
                short_key(&key)
            );
        }
        Arc::clone(sets)
    }

    /// Generated sets after power, stat, and perk-priority filtering.
    pub fn filtered_sets(&mut self) -> Arc<Vec<ArmorSet>> {
        let sets = self.sets();
        let key = structural_key(&(
            &self.sets_key(),
            self.config.minimum_power,
            &self.config.stat_filters,
            &self.config.stat_order,
        ));
        let (config, lock_map) = (&self.config, &self.lock_map);
        let (filtered, hit) = self.filtered_sets.get_or_compute(key, || {
            Arc::new(filter_generated_sets(
                &sets,
                config.minimum_power,
                lock_map,
                &config.stat_filters,
                &config.stat_order,
            ))
        });
        if hit {
            tracing::debug!("Filtered sets cache hit [{}]", short_key(&key));
        } else {
            tracing::debug!(
                "Filtered {} of {} sets [{}]",
                filtered.len(),
                sets.len(),
                short_key(&key)
            );
        }
        Arc::clone(filtered)
    }

    /// Perks still reachable in every slot with locked perks.
    pub fn filtered_perks(&mut self) -> Arc<FilteredPerks> {
        let key = structural_key(&(
            "perks",
            &self.inventory_key,
            self.config.class,
            &self.lock_map,
        ));
        let (inventory, class, lock_map) = (&self.inventory, self.config.class, &self.lock_map);
        let (perks, hit) = self
            .perks
            .get_or_compute(key, || Arc::new(filtered_perks(class, lock_map, inventory)));
        if hit {
            tracing::debug!("Filtered perks cache hit [{}]", short_key(&key));
        } else {
            tracing::debug!(
                "Filtered perks for {} slot(s) [{}]",
                perks.len(),
                short_key(&key)
            );
        }
        Arc::clone(perks)
    }

    /// Perk picker catalog for the current class.
    pub fn perk_catalog(&self) -> SlotPerks {
        let class = self.config.class;
        perk_catalog(self.inventory.items_for(class))
            .remove(&class)
            .unwrap_or_default()
    }

    /// Perks of the current class whose name contains `query`.
    pub fn search_perks(&self, query: &str) -> Vec<(Slot, Vec<Plug>)> {
        let catalog = self.perk_catalog();
        search_perks(&catalog, query)
            .into_iter()
            .map(|(slot, plugs)| (slot, plugs.into_iter().cloned().collect()))
            .collect()
    }

    /// Observed stat ranges across the generated sets.
    pub fn stat_ranges(&mut self) -> StatFilters {
        stat_ranges(&self.sets())
    }

    /// Minimum-power choices for the current class.
    pub fn power_level_options(&self) -> Vec<u32> {
        power_level_options(self.inventory.max_base_power(self.config.class))
    }
}

/// Builder for [`Planner`].
pub struct PlannerBuilder {
    inventory: Option<Arc<Inventory>>,
    config: BuilderConfig,
    lock_map: LockMap,
}

impl PlannerBuilder {
    fn new() -> Self {
        Self {
            inventory: None,
            config: BuilderConfig::default(),
            lock_map: LockMap::new(),
        }
    }

    /// Set required inventory snapshot
    pub fn inventory(mut self, inventory: impl Into<Arc<Inventory>>) -> Self {
        self.inventory = Some(inventory.into());
        self
    }

    /// Override builder configuration
    pub fn config(mut self, config: BuilderConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from saved locks
    pub fn lock_map(mut self, lock_map: LockMap) -> Self {
        self.lock_map = lock_map;
        self
    }

    pub fn build(self) -> Result<Planner> {
        let inventory = self.inventory.ok_or(PlannerError::MissingInventory)?;
        if let Err(err) = self.config.validate() {
            tracing::warn!("Rejected builder config: {}", err);
            return Err(err.into());
        }

        let inventory_key = structural_key(inventory.as_ref());
        tracing::info!(
            "Planner ready for {:?} (inventory {})",
            self.config.class,
            short_key(&inventory_key)
        );

        Ok(Planner {
            inventory,
            inventory_key,
            config: self.config,
            lock_map: self.lock_map,
            sets: Memo::new(),
            filtered_sets: Memo::new(),
            perks: Memo::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use loadout_core::{Burn, StatVector};

    use super::*;

    fn inventory() -> Inventory {
        Inventory::from_items(Slot::ARMOR.iter().enumerate().flat_map(|(i, &slot)| {
            [
                ArmorItem::new(i as u64 * 2 + 1, i as u32 * 2 + 1, slot, 600)
                    .for_class(ClassType::Titan)
                    .with_stats(StatVector::new(1, 0, 0))
                    .with_burn(Burn::Arc),
                ArmorItem::new(i as u64 * 2 + 2, i as u32 * 2 + 2, slot, 610)
                    .for_class(ClassType::Titan)
                    .with_stats(StatVector::new(0, 1, 0))
                    .with_burn(Burn::Void),
            ]
        }))
    }

    fn planner() -> Planner {
        Planner::builder().inventory(inventory()).build().unwrap()
    }

    #[test]
    fn builder_requires_inventory() {
        assert!(matches!(
            Planner::builder().build(),
            Err(PlannerError::MissingInventory)
        ));
    }

    #[test]
    fn views_are_cached_until_inputs_change() {
        let mut planner = planner();

        let first = planner.sets();
        assert_eq!(first.len(), 32);
        assert!(Arc::ptr_eq(&first, &planner.sets()));

        let filtered = planner.filtered_sets();
        assert!(Arc::ptr_eq(&filtered, &planner.filtered_sets()));

        planner.toggle_lock(LockedItem::Burn(Burn::Void), Slot::Helmet);
        let narrowed = planner.sets();
        assert!(!Arc::ptr_eq(&first, &narrowed));
        assert_eq!(narrowed.len(), 16);
        assert!(!Arc::ptr_eq(&filtered, &planner.filtered_sets()));
    }

    #[test]
    fn filter_settings_only_refresh_filtered_view() {
        let mut planner = planner();
        let sets = planner.sets();
        let all = planner.filtered_sets();

        planner.set_minimum_power(609).unwrap();
        let strong = planner.filtered_sets();
        assert!(Arc::ptr_eq(&sets, &planner.sets()));
        assert!(strong.len() < all.len());
        assert!(strong.iter().all(|set| loadout_core::set_power(set) >= 609));
    }

    #[test]
    fn class_change_clears_locks() {
        let mut planner = planner();
        planner.lock_item(ArmorItem::new(1, 1, Slot::Helmet, 600).for_class(ClassType::Titan));
        assert!(!planner.lock_map().is_empty());

        planner.set_class(ClassType::Hunter).unwrap();
        assert!(planner.lock_map().is_empty());
        assert!(planner.sets().is_empty());
    }

    #[test]
    fn burn_lock_on_pinned_slot_keeps_the_pin() {
        let mut planner = planner();
        let helmet = planner
            .inventory()
            .find(ClassType::Titan, loadout_core::ItemId(2))
            .cloned()
            .unwrap();
        planner.lock_item(helmet.clone());
        planner.toggle_lock(LockedItem::Burn(Burn::Void), Slot::Helmet);

        assert_eq!(
            planner.lock_map().get(Slot::Helmet).unwrap(),
            &[LockedItem::Item(helmet), LockedItem::Burn(Burn::Void)]
        );
        assert_eq!(planner.sets().len(), 16);
    }

    #[test]
    fn invalid_config_is_rejected_and_kept_out() {
        let mut planner = planner();
        let mut filters = StatFilters::FULL;
        filters.mobility = loadout_core::MinMax::new(9, 2);

        assert!(matches!(
            planner.set_stat_filters(filters),
            Err(PlannerError::Config(_))
        ));
        assert_eq!(planner.config().stat_filters, StatFilters::FULL);
    }

    #[test]
    fn power_options_follow_inventory() {
        let planner = planner();
        let options = planner.power_level_options();
        assert_eq!(options.first(), Some(&610));
        assert_eq!(options.last(), Some(&0));
    }
}
