use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Directory the five output documents are written to.
    pub data_dir: PathBuf,
    pub watchlist_path: PathBuf,
    /// Synthetic records generated per outlet on every channel.
    pub posts_per_outlet: usize,
    /// Fixed RNG seed for reproducible synthetic runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
}
