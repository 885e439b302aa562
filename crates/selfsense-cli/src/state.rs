use selfsense_core::models::Profile;
use selfsense_questionnaire::Catalog;
use selfsense_storage::history::HistoryStore;
use selfsense_storage::profiles::ProfileStore;

use crate::config::SelfSenseConfig;

/// Everything one invocation needs, built once in `main` and passed by
/// reference to each command.
pub struct SessionState {
    pub config: SelfSenseConfig,
    pub catalog: Catalog,
    pub history: HistoryStore,
    pub profiles: ProfileStore,
    pub active_profile: Option<Profile>,
}

impl SessionState {
    pub fn new(config: SelfSenseConfig) -> eyre::Result<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => Catalog::load(path)
                .map_err(|e| eyre::eyre!("failed to load catalog {}: {e}", path.display()))?,
            None => Catalog::builtin().clone(),
        };
        let history = HistoryStore::open(config.history_path());
        let profiles = ProfileStore::open(config.profiles_path());
        let active_profile = profiles.load()?.active().cloned();

        tracing::debug!(
            data_dir = %config.data_dir.display(),
            catalog_version = catalog.version,
            profile = active_profile.as_ref().map(|p| p.name.as_str()).unwrap_or("-"),
            "session ready"
        );

        Ok(Self {
            config,
            catalog,
            history,
            profiles,
            active_profile,
        })
    }
}
