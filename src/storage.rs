use crate::models::AppData;
use std::{env, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to serialize habits: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write habits file: {0}")]
    Io(#[from] std::io::Error),
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABITS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

// Any unreadable or malformed payload falls back to an empty habit list.
pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse habits file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read habits file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), StorageError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Habit;
    use chrono::{NaiveDate, Utc};
    use std::collections::BTreeSet;
    use uuid::Uuid;

    fn scratch_path(tag: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habits_{tag}_{}_{nanos}.json", std::process::id()));
        path
    }

    #[tokio::test]
    async fn missing_file_loads_empty_list() {
        let path = scratch_path("missing");
        assert_eq!(load_data(&path).await, AppData::default());
    }

    #[tokio::test]
    async fn malformed_payload_falls_back_to_empty_list() {
        let path = scratch_path("malformed");
        fs::write(&path, b"{not json").await.unwrap();
        assert_eq!(load_data(&path).await, AppData::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn record_with_unknown_category_falls_back_to_empty_list() {
        let path = scratch_path("category");
        let payload = r#"{"habits":[{"id":"9f0c1e1e-8a3d-4e6a-9a54-0d1c6f5f7a10","name":"Read","category":"sleep","created_at":"2026-01-01T08:30:00Z","completed_dates":["2026-01-05"]}]}"#;
        fs::write(&path, payload).await.unwrap();
        assert_eq!(load_data(&path).await, AppData::default());
        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_list_loads_back_identically() {
        let path = scratch_path("roundtrip");
        let habit = Habit {
            id: Uuid::new_v4(),
            name: "Read".to_string(),
            goal: "20 pages".to_string(),
            category: None,
            created_at: Utc::now(),
            completed_dates: [NaiveDate::from_ymd_opt(2026, 1, 5).unwrap()]
                .into_iter()
                .collect::<BTreeSet<_>>(),
        };
        let data = AppData {
            habits: vec![habit],
        };

        persist_data(&path, &data).await.expect("persist");
        assert_eq!(load_data(&path).await, data);
        let _ = fs::remove_file(&path).await;
    }
}
