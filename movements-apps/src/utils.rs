use std::path::PathBuf;

use tracing::warn;

const MOVEMENTS_NODE_CONFIG_ENV_NAME: &str = "MOVEMENTS_NODE_CONFIG_PATH";

/// Get node config from input or env MOVEMENTS_NODE_CONFIG_PATH
pub fn get_node_config_path(config: Option<PathBuf>) -> Option<PathBuf> {
    if config.is_some() {
        config
    } else {
        std::env::var(MOVEMENTS_NODE_CONFIG_ENV_NAME)
            .map(|s| {
                warn!("### ENV VAR {} is used ###", s);
                PathBuf::from(s)
            })
            .ok()
    }
}

/// Do something needed to start the program
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(tracing::level_filters::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();
}
