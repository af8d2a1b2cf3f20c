use crate::domain::error::ProviderError;
use crate::domain::model::{LanguageEntry, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::providers::failure_message;
use futures_util::future::join_all;
use std::sync::Arc;
use tracing::{error, info};

/// Fans one text out to many target languages through a single translator.
#[derive(Clone)]
pub struct Orchestrator {
    translator: Arc<dyn Translator>,
    languages: Arc<[LanguageEntry]>,
}

impl Orchestrator {
    pub fn new(translator: Arc<dyn Translator>, languages: Vec<LanguageEntry>) -> Self {
        Self {
            translator,
            languages: languages.into(),
        }
    }

    pub fn languages(&self) -> &[LanguageEntry] {
        &self.languages
    }

    /// Translate one request and attach the display name of its target language.
    pub async fn translate_one(&self, request: &TranslationRequest) -> TranslationResult {
        translate_with(self.translator.as_ref(), &self.languages, request).await
    }

    /// Translate `text` into every target concurrently.
    ///
    /// Returns one result per target, in the order given, whatever order the
    /// requests finish in. `None` means every configured language.
    pub async fn translate_batch(
        &self,
        source_language: &str,
        text: &str,
        target_languages: Option<&[String]>,
    ) -> Vec<TranslationResult> {
        let targets: Vec<String> = match target_languages {
            Some(targets) => targets.to_vec(),
            None => self.languages.iter().map(|l| l.code.clone()).collect(),
        };

        info!(
            "Translating {} chars from {} into {} language(s) via {}",
            text.chars().count(),
            source_language,
            targets.len(),
            self.translator.name()
        );

        let requests: Vec<TranslationRequest> = targets
            .into_iter()
            .map(|target| TranslationRequest::new(source_language, target, text))
            .collect();

        let handles: Vec<_> = requests
            .iter()
            .cloned()
            .map(|request| {
                let translator = Arc::clone(&self.translator);
                let languages = Arc::clone(&self.languages);
                tokio::spawn(async move {
                    translate_with(translator.as_ref(), &languages, &request).await
                })
            })
            .collect();

        // join_all keeps input order, so position i always belongs to requests[i]
        let outcomes = join_all(handles).await;

        let results: Vec<TranslationResult> = requests
            .iter()
            .zip(outcomes)
            .map(|(request, outcome)| match outcome {
                Ok(result) => result,
                Err(e) => {
                    error!("Translation task for {} died: {}", request.target_language, e);
                    let mut result = TranslationResult::failure(
                        request.target_language.clone(),
                        failure_message(self.translator.name(), &ProviderError::Unknown),
                    );
                    result.language_name = language_name(&self.languages, &request.target_language);
                    result
                }
            })
            .collect();

        let succeeded = results.iter().filter(|r| r.success).count();
        info!(
            "Batch finished: {} succeeded, {} failed",
            succeeded,
            results.len() - succeeded
        );

        results
    }
}

async fn translate_with(
    translator: &dyn Translator,
    languages: &[LanguageEntry],
    request: &TranslationRequest,
) -> TranslationResult {
    let mut result = translator.translate(request).await;
    result.language_name = language_name(languages, &request.target_language);
    result
}

/// Display name for `code`, or the code itself when it is not configured
pub fn language_name(languages: &[LanguageEntry], code: &str) -> String {
    languages
        .iter()
        .find(|l| l.code.eq_ignore_ascii_case(code))
        .map(|l| l.name.clone())
        .unwrap_or_else(|| code.to_string())
}
