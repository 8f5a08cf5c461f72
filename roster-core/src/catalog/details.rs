use std::sync::Arc;

use dashmap::DashMap;
use roster_model::{ItemDetails, ItemId};
use tokio::sync::OnceCell;

use super::{CatalogError, CatalogSource};

type Slot = Arc<OnceCell<Arc<ItemDetails>>>;

/// Per-id memo of detail records.
///
/// Callers asking for the same id while a fetch is outstanding wait on that
/// fetch instead of starting another. A failed fetch leaves the slot empty,
/// so the next request tries again.
#[derive(Default)]
pub struct DetailCache {
    slots: DashMap<ItemId, Slot>,
}

impl std::fmt::Debug for DetailCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailCache")
            .field("ids", &self.slots.len())
            .finish()
    }
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_fetch<S>(
        &self,
        source: &S,
        id: &ItemId,
    ) -> Result<Arc<ItemDetails>, CatalogError>
    where
        S: CatalogSource + ?Sized,
    {
        // Clone the slot out so no map guard is held across the await.
        let slot: Slot = self.slots.entry(id.clone()).or_default().clone();

        let details = slot
            .get_or_try_init(|| async {
                tracing::debug!(%id, "fetching item details");
                source.fetch_details(id).await.map(Arc::new)
            })
            .await?;
        Ok(Arc::clone(details))
    }

    pub fn get(&self, id: &ItemId) -> Option<Arc<ItemDetails>> {
        self.slots.get(id).and_then(|slot| slot.get().cloned())
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn clear(&self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MockCatalogSource;

    fn pikachu() -> ItemDetails {
        ItemDetails {
            id: 25,
            name: "pikachu".into(),
            ..ItemDetails::default()
        }
    }

    #[tokio::test]
    async fn second_open_reuses_result() {
        let mut source = MockCatalogSource::new();
        source
            .expect_fetch_details()
            .times(1)
            .returning(|_| Ok(pikachu()));

        let cache = DetailCache::new();
        let id = ItemId::new("25");
        let first = cache.get_or_fetch(&source, &id).await.unwrap();
        let second = cache.get_or_fetch(&source, &id).await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(cache.contains(&id));
    }

    #[tokio::test]
    async fn failures_are_not_memoized() {
        let mut source = MockCatalogSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_fetch_details()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|id| {
                Err(CatalogError::DetailFetch {
                    id: id.clone(),
                    reason: "HTTP 500".into(),
                })
            });
        source
            .expect_fetch_details()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(pikachu()));

        let cache = DetailCache::new();
        let id = ItemId::new("25");
        assert!(cache.get_or_fetch(&source, &id).await.is_err());
        assert!(!cache.contains(&id));
        assert_eq!(cache.get_or_fetch(&source, &id).await.unwrap().id, 25);
    }
}
