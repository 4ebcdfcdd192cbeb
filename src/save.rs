//! Save/load boundary over a browser-style key-value store.
//!
//! The wire format is three localStorage keys, unchanged since the first
//! release so old saves keep working:
//!
//! - `eggs`: balance as a decimal string
//! - `lastUpdate`: integer milliseconds since epoch
//! - `machines`: JSON array of `{"level": n, "upgradeCost": c}` in catalog
//!   order (names and rates are static config and not persisted)
//!
//! Loading never fails: a missing or malformed field falls back to the
//! default for that field, and corrupt entries are discarded from the store.

use serde::{Deserialize, Serialize};

use crate::ledger::Ledger;

const KEY_BALANCE: &str = "eggs";
const KEY_LAST_UPDATE: &str = "lastUpdate";
const KEY_MACHINES: &str = "machines";

/// Minimal key-value store the ledger persists into. The wasm backend is
/// localStorage; native callers and tests use `MemoryStore`.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str);
    fn delete(&mut self, key: &str);
}

/// In-memory store for native use and tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// Per-machine persisted fields.
#[derive(Serialize, Deserialize)]
struct MachineSave {
    level: u32,
    #[serde(rename = "upgradeCost")]
    upgrade_cost: f64,
}

/// Persist the ledger. Write failures are the store's problem (best-effort);
/// the in-memory state is already updated by the time this runs.
pub fn save_ledger(store: &mut impl KeyValueStore, ledger: &Ledger) {
    store.write(KEY_BALANCE, &ledger.balance.to_string());
    store.write(KEY_LAST_UPDATE, &ledger.last_tick_ms.to_string());

    let machines: Vec<MachineSave> = ledger
        .machines
        .iter()
        .map(|m| MachineSave {
            level: m.level,
            upgrade_cost: m.upgrade_cost,
        })
        .collect();
    if let Ok(json) = serde_json::to_string(&machines) {
        store.write(KEY_MACHINES, &json);
    }
}

/// Load a ledger, falling back to a fresh farm at `now_ms` for any field
/// that is missing or malformed. Corrupt entries are deleted.
pub fn load_ledger(store: &mut impl KeyValueStore, now_ms: u64) -> Ledger {
    let mut ledger = Ledger::new(now_ms);

    if let Some(raw) = store.read(KEY_BALANCE) {
        match raw.trim().parse::<f64>() {
            Ok(balance) if balance.is_finite() && balance >= 0.0 => ledger.balance = balance,
            _ => discard(store, KEY_BALANCE),
        }
    }

    if let Some(raw) = store.read(KEY_LAST_UPDATE) {
        match raw.trim().parse::<u64>() {
            Ok(last_tick_ms) => ledger.last_tick_ms = last_tick_ms,
            Err(_) => discard(store, KEY_LAST_UPDATE),
        }
    }

    if let Some(raw) = store.read(KEY_MACHINES) {
        match serde_json::from_str::<Vec<MachineSave>>(&raw) {
            Ok(saved) => {
                // Entries past the catalog are ignored; short arrays leave
                // the remaining machines at their defaults.
                for (machine, save) in ledger.machines.iter_mut().zip(&saved) {
                    if save.upgrade_cost.is_finite() && save.upgrade_cost > 0.0 {
                        machine.level = save.level;
                        machine.upgrade_cost = save.upgrade_cost;
                    }
                }
            }
            Err(_) => discard(store, KEY_MACHINES),
        }
    }

    ledger
}

/// Drop a corrupt entry so the next load starts clean.
fn discard(store: &mut impl KeyValueStore, key: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(
        &format!("egg-farm: discarding malformed save entry {key}").into(),
    );
    store.delete(key);
}

/// localStorage-backed store. WASM only.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    /// Returns None when the browser denies storage access (private mode,
    /// storage disabled); the caller falls back to an unpersisted session.
    pub fn open() -> Option<Self> {
        let storage = web_sys::window()?.local_storage().ok()??;
        Some(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.storage.set_item(key, value) {
            web_sys::console::warn_1(
                &format!("egg-farm: failed to persist {key}: {e:?}").into(),
            );
        }
    }

    fn delete(&mut self, key: &str) {
        let _ = self.storage.remove_item(key);
    }
}
