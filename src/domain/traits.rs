use crate::domain::model::{ProviderId, TranslationRequest, TranslationResult};
use async_trait::async_trait;

/// Trait for translation providers
///
/// One implementation per provider. Implementations never return an error:
/// every failure is folded into the returned [`TranslationResult`], with the
/// message prefixed by `[<provider name>]`.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Which provider this adapter talks to
    fn name(&self) -> ProviderId;

    /// Translate a single request
    async fn translate(&self, request: &TranslationRequest) -> TranslationResult;
}
