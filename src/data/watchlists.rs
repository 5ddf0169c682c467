use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::Watchlist;
use crate::error::MarketError;
use crate::utils::{now_timestamp_ms, TimeUtils};

/// In-memory watchlist store. Seeded with the demo lists; everything is
/// lost on drop, which is the point of a mock.
pub struct WatchlistStore {
    lists: HashMap<String, Watchlist>,
}

impl Default for WatchlistStore {
    fn default() -> Self {
        let mut store = Self {
            lists: HashMap::new(),
        };
        for list in seed_watchlists() {
            store.lists.insert(list.id.clone(), list);
        }
        store
    }
}

impl WatchlistStore {
    pub fn empty() -> Self {
        Self {
            lists: HashMap::new(),
        }
    }

    pub fn all(&self) -> Vec<&Watchlist> {
        let mut lists: Vec<&Watchlist> = self.lists.values().collect();
        lists.sort_by(|a, b| a.created_at_ms.cmp(&b.created_at_ms));
        lists
    }

    pub fn get(&self, id: &str) -> Result<&Watchlist, MarketError> {
        self.lists
            .get(id)
            .ok_or_else(|| MarketError::NotFound(format!("watchlist {id}")))
    }

    pub fn create(&mut self, name: &str, symbols: Vec<String>) -> &Watchlist {
        let now = now_timestamp_ms();
        let id = Uuid::new_v4().to_string();
        let list = Watchlist {
            id: id.clone(),
            name: name.to_string(),
            symbols,
            is_default: false,
            created_at_ms: now,
            updated_at_ms: now,
        };
        log::info!("created watchlist {name} ({id})");
        self.lists.entry(id).or_insert(list)
    }

    pub fn rename(&mut self, id: &str, name: &str) -> Result<&Watchlist, MarketError> {
        let list = self
            .lists
            .get_mut(id)
            .ok_or_else(|| MarketError::NotFound(format!("watchlist {id}")))?;
        list.name = name.to_string();
        list.updated_at_ms = now_timestamp_ms();
        Ok(list)
    }

    /// The default list is protected from deletion.
    pub fn delete(&mut self, id: &str) -> Result<Watchlist, MarketError> {
        let list = self
            .lists
            .remove(id)
            .ok_or_else(|| MarketError::NotFound(format!("watchlist {id}")))?;
        if list.is_default {
            // Put it back untouched.
            self.lists.insert(list.id.clone(), list);
            return Err(MarketError::Forbidden(
                "cannot delete the default watchlist".to_string(),
            ));
        }
        Ok(list)
    }

    /// Adding a symbol twice is a no-op, not an error.
    pub fn add_symbol(&mut self, id: &str, symbol: &str) -> Result<&Watchlist, MarketError> {
        let list = self
            .lists
            .get_mut(id)
            .ok_or_else(|| MarketError::NotFound(format!("watchlist {id}")))?;
        if !list.contains(symbol) {
            list.symbols.push(symbol.to_string());
            list.updated_at_ms = now_timestamp_ms();
        }
        Ok(list)
    }

    pub fn remove_symbol(&mut self, id: &str, symbol: &str) -> Result<&Watchlist, MarketError> {
        let list = self
            .lists
            .get_mut(id)
            .ok_or_else(|| MarketError::NotFound(format!("watchlist {id}")))?;
        list.symbols.retain(|s| s != symbol);
        list.updated_at_ms = now_timestamp_ms();
        Ok(list)
    }
}

fn seed_watchlists() -> Vec<Watchlist> {
    let now = now_timestamp_ms();
    vec![
        Watchlist {
            id: "default".to_string(),
            name: "Default Watchlist".to_string(),
            symbols: ["AAPL", "MSFT", "GOOGL", "AMZN", "TSLA"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            is_default: true,
            created_at_ms: now - 30 * TimeUtils::MS_IN_D,
            updated_at_ms: now,
        },
        Watchlist {
            id: "crypto".to_string(),
            name: "Crypto".to_string(),
            symbols: vec!["BTC-USD".to_string(), "ETH-USD".to_string()],
            is_default: false,
            created_at_ms: now - 15 * TimeUtils::MS_IN_D,
            updated_at_ms: now - 2 * TimeUtils::MS_IN_D,
        },
        Watchlist {
            id: "forex".to_string(),
            name: "Forex".to_string(),
            symbols: vec!["EUR-USD".to_string()],
            is_default: false,
            created_at_ms: now - 10 * TimeUtils::MS_IN_D,
            updated_at_ms: now - 5 * TimeUtils::MS_IN_D,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_seeds_three_lists_with_default_first() {
        let store = WatchlistStore::default();
        let all = store.all();
        assert_eq!(all.len(), 3);
        assert!(all[0].is_default);
        assert_eq!(all[0].id, "default");
    }

    #[test]
    fn create_and_lookup() {
        let mut store = WatchlistStore::empty();
        let id = store.create("Metals", vec!["GC=F".to_string()]).id.clone();
        let list = store.get(&id).unwrap();
        assert_eq!(list.name, "Metals");
        assert!(list.contains("GC=F"));
    }

    #[test]
    fn missing_id_is_not_found() {
        let store = WatchlistStore::default();
        assert!(matches!(store.get("nope"), Err(MarketError::NotFound(_))));
    }

    #[test]
    fn default_list_cannot_be_deleted() {
        let mut store = WatchlistStore::default();
        assert!(matches!(
            store.delete("default"),
            Err(MarketError::Forbidden(_))
        ));
        assert!(store.delete("crypto").is_ok());
    }

    #[test]
    fn add_symbol_is_idempotent_and_touches_updated_at() {
        let mut store = WatchlistStore::default();
        let before = store.get("forex").unwrap().updated_at_ms;

        store.add_symbol("forex", "GBP-USD").unwrap();
        let list = store.get("forex").unwrap();
        assert_eq!(list.symbols.len(), 2);
        assert!(list.updated_at_ms >= before);

        store.add_symbol("forex", "GBP-USD").unwrap();
        assert_eq!(store.get("forex").unwrap().symbols.len(), 2);
    }

    #[test]
    fn remove_symbol() {
        let mut store = WatchlistStore::default();
        store.remove_symbol("crypto", "ETH-USD").unwrap();
        let list = store.get("crypto").unwrap();
        assert_eq!(list.symbols, vec!["BTC-USD".to_string()]);
    }
}
