use crate::errors::AppError;
use crate::store::StoreData;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::{
    env,
    path::{Path, PathBuf},
};
use tokio::fs;
use tracing::error;

/// Storage slot names. Each slot is an independent JSON file holding the
/// plain array of records for one collection; there is no cross-slot
/// transaction, so multi-slot actions are durable one slot at a time.
pub const LOCATIONS_SLOT: &str = "locations";
pub const CHECK_INS_SLOT: &str = "check_ins";
pub const PLANNED_SLOT: &str = "planned_check_ins";

pub fn resolve_data_dir() -> PathBuf {
    match env::var("APP_DATA_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => PathBuf::from("data"),
    }
}

fn slot_path(dir: &Path, slot: &str) -> PathBuf {
    dir.join(format!("{slot}.json"))
}

/// Reads one slot. A missing file is a fresh install; an unreadable or
/// unparseable one is logged and treated as empty rather than blocking
/// startup.
pub async fn load_slot<T: DeserializeOwned>(dir: &Path, slot: &str) -> Vec<T> {
    let path = slot_path(dir, slot);
    match fs::read(&path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                error!("failed to parse slot {slot}: {err}");
                Vec::new()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
        Err(err) => {
            error!("failed to read slot {slot}: {err}");
            Vec::new()
        }
    }
}

/// Serializes and writes one slot synchronously with respect to the
/// triggering request; serialization or write failures abort the request
/// as an internal error with no retry.
pub async fn persist_slot<T: Serialize>(
    dir: &Path,
    slot: &str,
    records: &[T],
) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(records).map_err(AppError::internal)?;
    fs::write(slot_path(dir, slot), payload)
        .await
        .map_err(AppError::internal)?;
    Ok(())
}

pub async fn load_store(dir: &Path) -> StoreData {
    let mut store = StoreData {
        locations: load_slot(dir, LOCATIONS_SLOT).await,
        check_ins: load_slot(dir, CHECK_INS_SLOT).await,
        planned_check_ins: load_slot(dir, PLANNED_SLOT).await,
    };
    store.backfill_colors();
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn unique_dir(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut dir = std::env::temp_dir();
        dir.push(format!("checkin_app_{tag}_{}_{nanos}", std::process::id()));
        dir
    }

    #[tokio::test]
    async fn slot_round_trip_preserves_records() {
        let dir = unique_dir("roundtrip");
        fs::create_dir_all(&dir).await.unwrap();

        let written = vec![Location {
            id: "L1".into(),
            name: "Store A".into(),
            color: "#EF4444".into(),
        }];
        persist_slot(&dir, LOCATIONS_SLOT, &written).await.unwrap();

        // Fresh read, as after a restart.
        let read: Vec<Location> = load_slot(&dir, LOCATIONS_SLOT).await;
        assert_eq!(read.len(), 1);
        assert_eq!(read[0].id, written[0].id);
        assert_eq!(read[0].name, written[0].name);
        assert_eq!(read[0].color, written[0].color);

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn missing_and_corrupt_slots_load_as_empty() {
        let dir = unique_dir("corrupt");
        fs::create_dir_all(&dir).await.unwrap();

        let missing: Vec<Location> = load_slot(&dir, LOCATIONS_SLOT).await;
        assert!(missing.is_empty());

        fs::write(dir.join("locations.json"), b"not json")
            .await
            .unwrap();
        let corrupt: Vec<Location> = load_slot(&dir, LOCATIONS_SLOT).await;
        assert!(corrupt.is_empty());

        let _ = fs::remove_dir_all(&dir).await;
    }

    #[tokio::test]
    async fn load_store_backfills_missing_colors() {
        let dir = unique_dir("backfill");
        fs::create_dir_all(&dir).await.unwrap();

        fs::write(
            dir.join("locations.json"),
            br#"[{"id":"L1","name":"Store A"}]"#,
        )
        .await
        .unwrap();

        let store = load_store(&dir).await;
        assert_eq!(store.locations[0].color, crate::models::COLOR_PALETTE[0]);

        let _ = fs::remove_dir_all(&dir).await;
    }
}
