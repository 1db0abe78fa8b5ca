//! Test context for facade-level tests
//!
//! Every context owns a fresh temporary data directory so tests never see
//! each other's snapshots.

use std::sync::{Arc, Once};
use bde_office::config::Settings;
use bde_office::database::{DataService, LocalDocumentStore};
use bde_office::services::ServiceFactory;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("bde_office=debug")
            .with_test_writer()
            .try_init();
    });
}

/// Settings usable in tests, pointing at `data_dir`
pub fn test_settings(data_dir: &std::path::Path) -> Settings {
    let mut settings = Settings::default();
    settings.local.data_dir = data_dir.to_string_lossy().to_string();
    settings.auth.password = "bde-demo".to_string();
    settings.auth.jwt_secret = "integration-secret-0123456789".to_string();
    settings
}

pub struct TestContext {
    pub temp_dir: tempfile::TempDir,
    pub settings: Settings,
    pub store: Arc<LocalDocumentStore>,
    pub data: DataService,
}

impl TestContext {
    /// Local-storage facade over a fresh directory
    pub async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        let temp_dir = tempfile::tempdir()?;
        let settings = test_settings(temp_dir.path());
        let store = Arc::new(LocalDocumentStore::open(temp_dir.path()).await?);
        let data = DataService::local(store.clone());

        Ok(Self {
            temp_dir,
            settings,
            store,
            data,
        })
    }

    pub fn services(&self) -> ServiceFactory {
        ServiceFactory::new(self.data.clone(), &self.settings)
    }

    /// A second facade over the same directory, as after a restart
    pub async fn reopen(&self) -> DataService {
        let store = LocalDocumentStore::open(self.temp_dir.path())
            .await
            .expect("reopen local store");
        DataService::local(Arc::new(store))
    }
}
