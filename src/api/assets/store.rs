// In-memory asset inventory backing the demo /api/assets endpoints

use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use serde::Serialize;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    pub asset_tag: String,
    pub serial: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    assets: Arc<RwLock<BTreeMap<u64, Asset>>>,
    next_id: Arc<AtomicU64>,
}

impl AssetStore {
    pub fn new() -> Self {
        Self {
            assets: Arc::default(),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Store pre-filled with a couple of laptops.
    pub fn seeded() -> Self {
        let store: Self = Self::new();
        let seed: [(&str, &str, &str); 2] = [
            ("MacBook Pro 14", "ASSET-0001", "C02XK1JHJG5H"),
            ("ThinkPad X1 Carbon", "ASSET-0002", "PF2M8K7Q"),
        ];

        let mut assets: BTreeMap<u64, Asset> = BTreeMap::new();
        for (name, tag, serial) in seed {
            let id: u64 = store.next_id.fetch_add(1, Ordering::Relaxed);
            assets.insert(
                id,
                Asset {
                    id,
                    name: name.to_owned(),
                    asset_tag: tag.to_owned(),
                    serial: Some(serial.to_owned()),
                },
            );
        }

        Self {
            assets: Arc::new(RwLock::new(assets)),
            next_id: store.next_id,
        }
    }

    pub async fn all(&self) -> Vec<Asset> {
        self.assets.read().await.values().cloned().collect()
    }

    pub async fn find(&self, id: u64) -> Option<Asset> {
        self.assets.read().await.get(&id).cloned()
    }

    pub async fn tag_taken(&self, asset_tag: &str) -> bool {
        tag_in_use(&*self.assets.read().await, asset_tag)
    }

    /// Inserts the asset unless its tag is already in use. The check and the
    /// insert happen under the same write guard.
    pub async fn insert_unique(
        &self,
        name: String,
        asset_tag: String,
        serial: Option<String>,
    ) -> Option<Asset> {
        let mut assets = self.assets.write().await;
        if tag_in_use(&assets, &asset_tag) {
            return None;
        }

        let id: u64 = self.next_id.fetch_add(1, Ordering::Relaxed);
        let asset: Asset = Asset {
            id,
            name,
            asset_tag,
            serial,
        };
        assets.insert(id, asset.clone());
        Some(asset)
    }
}

fn tag_in_use(assets: &BTreeMap<u64, Asset>, asset_tag: &str) -> bool {
    assets
        .values()
        .any(|asset| asset.asset_tag.eq_ignore_ascii_case(asset_tag))
}
