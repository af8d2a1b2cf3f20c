use crate::application::translate::Orchestrator;
use crate::domain::error::AppError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::transport::Transport;
use crate::infrastructure::providers::create_translator;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub orchestrator: Orchestrator,
}

impl AppState {
    /// Build the transport and translator described by `config`.
    ///
    /// An unknown provider fails here, before any request is sent.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = Arc::new(Transport::new(config.network.transport_config())?);
        let translator = create_translator(&config.provider, transport)?;
        let orchestrator = Orchestrator::new(translator, config.languages.clone());

        Ok(Self {
            config: Arc::new(config),
            orchestrator,
        })
    }
}
