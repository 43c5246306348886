//! Startup wiring: database and logging initialization from a `Config`

use tempfile::TempDir;
use vet_clinic::{db, logging, Config, Database, NewClient};

#[tokio::test]
async fn test_db_init_creates_file_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("clinic.db");
    let config = Config::default().with_overrides(Some(format!("sqlite://{}", path.display())), None);

    let db = db::init(&config).await.unwrap();
    db.add_client(&NewClient::new("123456789", "Doe", "John", "Smith", "19900101").unwrap())
        .await
        .unwrap();
    db.close().await;
    assert!(path.exists());

    let db = Database::connect(config.database_url()).await.unwrap();
    let clients = db.get_clients().await.unwrap();
    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].surname, "Doe");
    db.close().await;
}

// The subscriber is process-global, so this binary installs it only here.
#[test]
fn test_logging_init_writes_to_configured_file() {
    let temp_dir = TempDir::new().unwrap();
    let log_file = temp_dir.path().join("clinic.log");
    let config = Config {
        log_level: "info".to_string(),
        ..Config::default()
    }
    .with_overrides(None, Some(log_file.clone()));

    logging::init(&config).unwrap();
    tracing::warn!("startup marker 7f3a");

    let contents = std::fs::read_to_string(&log_file).unwrap();
    assert!(contents.contains("startup marker 7f3a"));
    assert!(contents.contains("WARN"));
    // A second subscriber cannot be installed
    assert!(logging::init(&config).is_err());
}
