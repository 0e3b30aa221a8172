use crate::{
    config::Config,
    icons::IconService,
    logger::Logger,
    search::{MockOptionApi, OptionFetcher, RemoteOption},
};
use std::sync::Arc;

/// Services shared by every story
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub icons: IconService,
    pub logger: Logger,
    pub fetcher: Arc<dyn OptionFetcher<RemoteOption>>,
}

impl AppContext {
    /// Context backed by the mock option API
    pub fn new(config: Config, logger: Logger) -> Self {
        let fetcher = Arc::new(MockOptionApi::new(config.search.mock_latency()));
        Self::with_fetcher(config, logger, fetcher)
    }

    pub fn with_fetcher(config: Config, logger: Logger, fetcher: Arc<dyn OptionFetcher<RemoteOption>>) -> Self {
        Self {
            icons: IconService::new(config.ui.icon_theme),
            config,
            logger,
            fetcher,
        }
    }
}
