//! ModelStore — owns the artifact paths, loads lazily, caches per process.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info};

use basket_core::config::{MiningConfig, StoreConfig};
use basket_core::errors::{BasketResult, StorageError};
use basket_core::models::{AssociationRule, ItemTable, ItemsetTable};
use basket_mining::derive_rules;

type Cache<T> = RwLock<Option<Arc<T>>>;

/// Process-lifetime model context.
///
/// Constructed once at startup and passed to every consumer. Each artifact
/// is loaded at most once, on first access (check-then-fill), and held until
/// [`ModelStore::reset_cache`]. Single-threaded deployments are the target;
/// a concurrent first access may load an artifact twice, harmlessly.
pub struct ModelStore {
    store: StoreConfig,
    mining: MiningConfig,
    item_table: Cache<ItemTable>,
    itemset_table: Cache<ItemsetTable>,
    rules: Cache<Vec<AssociationRule>>,
}

impl ModelStore {
    pub fn new(store: StoreConfig, mining: MiningConfig) -> Self {
        Self {
            store,
            mining,
            item_table: RwLock::new(None),
            itemset_table: RwLock::new(None),
            rules: RwLock::new(None),
        }
    }

    /// The transaction-derived item table, loaded on first access.
    pub fn item_table(&self) -> BasketResult<Arc<ItemTable>> {
        if let Some(table) = read(&self.item_table)?.as_ref() {
            return Ok(Arc::clone(table));
        }
        debug!(path = %self.store.item_table_path.display(), "loading item table");
        let table = Arc::new(crate::load_artifact::<ItemTable>(
            &self.store.item_table_path,
        )?);
        *write(&self.item_table)? = Some(Arc::clone(&table));
        Ok(table)
    }

    /// The frequent-itemset table, loaded on first access.
    pub fn itemset_table(&self) -> BasketResult<Arc<ItemsetTable>> {
        if let Some(table) = read(&self.itemset_table)?.as_ref() {
            return Ok(Arc::clone(table));
        }
        debug!(path = %self.store.itemset_table_path.display(), "loading itemset table");
        let table = Arc::new(crate::load_artifact::<ItemsetTable>(
            &self.store.itemset_table_path,
        )?);
        *write(&self.itemset_table)? = Some(Arc::clone(&table));
        Ok(table)
    }

    /// The derived rule set, computed from the itemset table on first access.
    ///
    /// Returns a defensive copy on every call so no caller observes another
    /// caller's mutations.
    pub fn rules(&self) -> BasketResult<Vec<AssociationRule>> {
        if let Some(rules) = read(&self.rules)?.as_ref() {
            return Ok(rules.as_ref().clone());
        }
        let itemsets = self.itemset_table()?;
        let rules = Arc::new(derive_rules(&itemsets, self.mining.lift_threshold)?);
        info!(rules = rules.len(), "rule cache filled");
        *write(&self.rules)? = Some(Arc::clone(&rules));
        Ok(rules.as_ref().clone())
    }

    /// Clear all three caches; the next access reloads from disk.
    /// There is no partial-reset granularity.
    pub fn reset_cache(&self) {
        if let Ok(mut guard) = write(&self.item_table) {
            guard.take();
        }
        if let Ok(mut guard) = write(&self.itemset_table) {
            guard.take();
        }
        if let Ok(mut guard) = write(&self.rules) {
            guard.take();
        }
        debug!("model caches cleared");
    }
}

fn read<T>(cache: &Cache<T>) -> Result<RwLockReadGuard<'_, Option<Arc<T>>>, StorageError> {
    cache.read().map_err(|e| StorageError::CacheLock {
        message: e.to_string(),
    })
}

fn write<T>(cache: &Cache<T>) -> Result<RwLockWriteGuard<'_, Option<Arc<T>>>, StorageError> {
    cache.write().map_err(|e| StorageError::CacheLock {
        message: e.to_string(),
    })
}
