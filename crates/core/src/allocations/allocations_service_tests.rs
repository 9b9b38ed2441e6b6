//! Unit tests for the allocation service.

use super::*;
use crate::errors::{Error, Result};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock Implementations
// ============================================================================

#[derive(Default)]
struct MockAllocationApi {
    stored: Mutex<HashMap<i64, Allocation>>,
    updates: Mutex<Vec<(i64, AllocationCreateData)>>,
}

impl MockAllocationApi {
    fn with(allocation: Allocation) -> Self {
        let api = Self::default();
        api.stored.lock().unwrap().insert(allocation.id, allocation);
        api
    }
}

#[async_trait]
impl AllocationApiTrait for MockAllocationApi {
    async fn list_allocations_for_version(&self, version_id: i64) -> Result<Vec<Allocation>> {
        Ok(self
            .stored
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.simulation_version_id == version_id)
            .cloned()
            .collect())
    }

    async fn get_allocation(&self, allocation_id: i64) -> Result<Allocation> {
        self.stored
            .lock()
            .unwrap()
            .get(&allocation_id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("allocation {}", allocation_id)))
    }

    async fn create_allocation(&self, data: &AllocationCreateData) -> Result<Allocation> {
        let mut stored = self.stored.lock().unwrap();
        let id = stored.len() as i64 + 1;
        let allocation = Allocation {
            id,
            simulation_version_id: data.simulation_version_id,
            kind: data.kind,
            name: data.name.clone(),
            value: data.value,
            date: data.date.clone(),
            has_financing: data.has_financing,
            financing_start_date: data.financing_start_date.clone(),
            financing_installments: data.financing_installments,
            financing_rate: data.financing_rate,
            financing_entry_value: data.financing_entry_value,
            history: None,
        };
        stored.insert(id, allocation.clone());
        Ok(allocation)
    }

    async fn update_allocation(
        &self,
        allocation_id: i64,
        data: &AllocationCreateData,
    ) -> Result<Allocation> {
        self.updates
            .lock()
            .unwrap()
            .push((allocation_id, data.clone()));
        let mut stored = self.stored.lock().unwrap();
        let allocation = stored
            .get_mut(&allocation_id)
            .ok_or_else(|| Error::NotFound(format!("allocation {}", allocation_id)))?;
        allocation.value = data.value;
        allocation.name = data.name.clone();
        Ok(allocation.clone())
    }

    async fn delete_allocation(&self, allocation_id: i64) -> Result<()> {
        self.stored
            .lock()
            .unwrap()
            .remove(&allocation_id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("allocation {}", allocation_id)))
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

fn financed_apartment() -> Allocation {
    Allocation {
        id: 7,
        simulation_version_id: 3,
        kind: AllocationKind::Immobilized,
        name: "Apartamento".to_string(),
        value: dec!(800000),
        date: "2024-05-01".to_string(),
        has_financing: Some(true),
        financing_start_date: Some("2024-06-01".to_string()),
        financing_installments: Some(360),
        financing_rate: Some(dec!(9.5)),
        financing_entry_value: Some(dec!(160000)),
        history: None,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[tokio::test]
async fn test_update_value_keeps_every_other_field() {
    let api = Arc::new(MockAllocationApi::with(financed_apartment()));
    let service = AllocationService::new(api.clone());

    let updated = service.update_value(7, dec!(850000)).await.unwrap();

    assert_eq!(updated.value, dec!(850000));
    let updates = api.updates.lock().unwrap();
    assert_eq!(updates.len(), 1);
    let (id, sent) = &updates[0];
    assert_eq!(*id, 7);
    assert_eq!(sent.value, dec!(850000));
    assert_eq!(sent.name, "Apartamento");
    assert_eq!(sent.financing_installments, Some(360));
    assert_eq!(sent.financing_start_date.as_deref(), Some("2024-06-01"));
}

#[tokio::test]
async fn test_update_value_rejects_negative_amounts() {
    let api = Arc::new(MockAllocationApi::with(financed_apartment()));
    let service = AllocationService::new(api.clone());

    let result = service.update_value(7, dec!(-1)).await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert!(api.updates.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_update_value_of_unknown_allocation_is_not_found() {
    let service = AllocationService::new(Arc::new(MockAllocationApi::default()));
    let result = service.update_value(99, dec!(1)).await;
    assert!(matches!(result, Err(Error::NotFound(_))));
}

#[tokio::test]
async fn test_create_validates_before_calling_backend() {
    let api = Arc::new(MockAllocationApi::default());
    let service = AllocationService::new(api.clone());
    let mut data = AllocationCreateData::from(&financed_apartment());
    data.name = "  ".to_string();

    assert!(service.create(data.clone()).await.is_err());
    assert!(api.stored.lock().unwrap().is_empty());

    data.name = "Casa de praia".to_string();
    let created = service.create(data).await.unwrap();
    assert_eq!(created.name, "Casa de praia");
    assert_eq!(service.list_for_version(3).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_removes_allocation() {
    let api = Arc::new(MockAllocationApi::with(financed_apartment()));
    let service = AllocationService::new(api.clone());

    service.delete(7).await.unwrap();

    assert!(matches!(service.get(7).await, Err(Error::NotFound(_))));
}
