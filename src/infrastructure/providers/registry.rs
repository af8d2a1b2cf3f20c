use crate::domain::error::AppError;
use crate::domain::model::ProviderId;
use crate::domain::traits::Translator;
use crate::infrastructure::network::transport::Transport;
use crate::infrastructure::providers::GoogleTranslator;
use std::sync::Arc;
use tracing::debug;

/// Supported provider identifiers, in display order
pub fn available_identifiers() -> impl Iterator<Item = ProviderId> + Clone {
    ProviderId::ALL.iter().copied()
}

/// Create a translator for `identifier`.
///
/// Fails with [`AppError::UnknownProvider`], listing every valid identifier,
/// when the name is not recognised. No request is made either way.
pub fn create_translator(
    identifier: &str,
    transport: Arc<Transport>,
) -> Result<Arc<dyn Translator>, AppError> {
    let provider: ProviderId = identifier.parse()?;
    debug!("Using translation provider: {}", provider);

    let translator: Arc<dyn Translator> = match provider {
        ProviderId::Google => Arc::new(GoogleTranslator::new(transport)),
    };
    Ok(translator)
}
