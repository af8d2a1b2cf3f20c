use crate::domain::error::{ParseError, ProviderError};
use crate::domain::model::{ProviderId, TranslationRequest, TranslationResult};
use crate::domain::traits::Translator;
use crate::infrastructure::network::transport::Transport;
use crate::infrastructure::providers::failure_message;
use async_trait::async_trait;
use reqwest::Url;
use serde::de::{Deserializer, IgnoredAny, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

// Google response shape:
// [[["Hola ","Hello ",null,null,10],["mundo","world",null,null,10]],null,"en",...]
// Only the first slot of each fragment matters; the rest is metadata.
#[derive(Debug)]
struct Fragment {
    text: Option<String>,
}

impl<'de> Deserialize<'de> for Fragment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FragmentVisitor;

        impl<'de> Visitor<'de> for FragmentVisitor {
            type Value = Fragment;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a translation fragment array")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Fragment, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let text = match seq.next_element::<Value>()? {
                    Some(Value::String(s)) if !s.is_empty() => Some(s),
                    _ => None,
                };
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Fragment { text })
            }
        }

        deserializer.deserialize_seq(FragmentVisitor)
    }
}

/// Extract the translated text from a Google response body.
///
/// Fragments that are not arrays, or whose first slot is null or empty, are
/// dropped. If nothing survives the response counts as unparsable, even when
/// the fragment list itself was non-empty.
pub fn parse_response(body: &str) -> Result<String, ParseError> {
    let payload: Value =
        serde_json::from_str(body).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let Value::Array(top) = payload else {
        return Err(ParseError::NotArray);
    };
    let Some(Value::Array(fragments)) = top.into_iter().next() else {
        return Err(ParseError::FragmentsNotArray);
    };

    let text: String = fragments
        .into_iter()
        .filter_map(|raw| serde_json::from_value::<Fragment>(raw).ok())
        .filter_map(|fragment| fragment.text)
        .collect();

    if text.is_empty() {
        return Err(ParseError::NoValidFragments);
    }
    Ok(text)
}

/// Adapter for the public Google Translate web endpoint
pub struct GoogleTranslator {
    transport: Arc<Transport>,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(transport: Arc<Transport>) -> Self {
        Self::with_endpoint(transport, DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(transport: Arc<Transport>, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    fn build_url(&self, request: &TranslationRequest) -> Result<Url, ProviderError> {
        let params = [
            ("client", "gtx"),
            ("sl", request.source_language.as_str()),
            ("tl", request.target_language.as_str()),
            ("dt", "t"),
            ("q", request.text.as_str()),
        ];
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| ProviderError::Other(format!("invalid endpoint {}: {}", self.endpoint, e)))
    }

    async fn fetch(&self, request: &TranslationRequest) -> Result<String, ProviderError> {
        let url = self.build_url(request)?;
        let body = self.transport.get(url.as_str()).await?;
        Ok(parse_response(&body)?)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> ProviderId {
        ProviderId::Google
    }

    async fn translate(&self, request: &TranslationRequest) -> TranslationResult {
        match self.fetch(request).await {
            Ok(text) => {
                debug!(
                    "Translated {} -> {} ({} chars)",
                    request.source_language,
                    request.target_language,
                    text.chars().count()
                );
                TranslationResult::success(request.target_language.clone(), text)
            }
            Err(e) => {
                warn!("Translation into {} failed: {}", request.target_language, e);
                TranslationResult::failure(
                    request.target_language.clone(),
                    failure_message(self.name(), &e),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::network::http::{HttpBackend, HttpCall, RawFailure};
    use crate::infrastructure::network::transport::TransportConfig;
    use std::sync::Mutex;

    struct CannedBackend {
        response: Result<String, RawFailure>,
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl HttpBackend for CannedBackend {
        async fn execute(&self, call: &HttpCall<'_>) -> Result<String, RawFailure> {
            self.urls.lock().unwrap().push(call.url.to_string());
            self.response.clone()
        }
    }

    fn translator(response: Result<String, RawFailure>) -> (GoogleTranslator, Arc<CannedBackend>) {
        let backend = Arc::new(CannedBackend {
            response,
            urls: Mutex::new(Vec::new()),
        });
        let config = TransportConfig {
            retries: 0,
            ..TransportConfig::default()
        };
        let transport = Arc::new(Transport::with_backend(config, backend.clone()));
        (GoogleTranslator::new(transport), backend)
    }

    #[test]
    fn test_parse_concatenates_fragments() {
        let body = r#"[[["Hola ","Hello ",null,null,10],["mundo","world",null,null,10]],null,"en"]"#;
        assert_eq!(parse_response(body).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_parse_skips_invalid_fragments() {
        let body = r#"[[[null,"a"],["",""],"loose string",{"k":1},["ok",null],[]]]"#;
        assert_eq!(parse_response(body).unwrap(), "ok");
    }

    #[test]
    fn test_parse_all_invalid_fragments_fails() {
        let body = r#"[[[null,"Hello"],["","world"],[]],null,"en"]"#;
        assert_eq!(parse_response(body), Err(ParseError::NoValidFragments));
        assert_eq!(parse_response("[[]]"), Err(ParseError::NoValidFragments));
    }

    #[test]
    fn test_parse_shape_errors() {
        assert_eq!(parse_response(r#"{"sentences":[]}"#), Err(ParseError::NotArray));
        assert_eq!(parse_response(r#""text""#), Err(ParseError::NotArray));
        assert_eq!(parse_response(r#"["Hola"]"#), Err(ParseError::FragmentsNotArray));
        assert_eq!(parse_response("[]"), Err(ParseError::FragmentsNotArray));
        assert!(matches!(parse_response("<html>"), Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_parse_preserves_unicode() {
        let pieces = ["こんにちは 🌍 ", "<b>bold</b> &amp; ", "Ünïcödé\n", "\"quoted\" \\ "];
        let expected: String = pieces
            .iter()
            .cycle()
            .flat_map(|p| p.chars())
            .take(10_000)
            .collect();
        let chars: Vec<char> = expected.chars().collect();
        let fragments: Vec<Value> = chars
            .chunks(37)
            .map(|chunk| serde_json::json!([chunk.iter().collect::<String>(), "src", null]))
            .collect();
        let body = serde_json::json!([fragments, null, "en"]).to_string();

        let text = parse_response(&body).unwrap();
        assert_eq!(text.chars().count(), 10_000);
        assert_eq!(text.as_bytes(), expected.as_bytes());
    }

    #[tokio::test]
    async fn test_translate_success() {
        let (google, backend) = translator(Ok(r#"[[["Bonjour","Hello"]]]"#.to_string()));
        let request = TranslationRequest::new("en", "fr", "Hello & bye");

        let result = google.translate(&request).await;

        assert!(result.success);
        assert_eq!(result.translated_text, "Bonjour");
        assert_eq!(result.target_language, "fr");
        assert_eq!(result.language_name, "fr");
        assert!(result.error.is_none());

        let urls = backend.urls.lock().unwrap();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].starts_with(DEFAULT_ENDPOINT));
        assert!(urls[0].contains("sl=en"));
        assert!(urls[0].contains("tl=fr"));
        assert!(urls[0].contains("dt=t"));
        assert!(urls[0].contains("q=Hello+%26+bye"));
    }

    #[tokio::test]
    async fn test_translate_parse_failure() {
        let (google, _) = translator(Ok(r#"[[[null],[""]]]"#.to_string()));
        let result = google.translate(&TranslationRequest::new("en", "de", "Hi")).await;

        assert!(!result.success);
        assert_eq!(result.translated_text, "");
        assert_eq!(
            result.error.as_deref(),
            Some("[Google] response format error: could not parse result")
        );
    }

    #[tokio::test]
    async fn test_translate_transport_failure() {
        let (google, _) = translator(Err(RawFailure::Status {
            status: 429,
            body: String::new(),
        }));
        let result = google.translate(&TranslationRequest::new("en", "ja", "Hi")).await;

        assert!(!result.success);
        assert_eq!(
            result.error.as_deref(),
            Some("[Google] too many requests, try again later")
        );
    }

    #[tokio::test]
    async fn test_translate_bad_endpoint() {
        let backend = Arc::new(CannedBackend {
            response: Ok(String::new()),
            urls: Mutex::new(Vec::new()),
        });
        let transport = Arc::new(Transport::with_backend(TransportConfig::default(), backend.clone()));
        let google = GoogleTranslator::with_endpoint(transport, "not a url");

        let result = google.translate(&TranslationRequest::new("en", "ja", "Hi")).await;

        assert!(!result.success);
        assert!(result.error.unwrap().starts_with("[Google] invalid endpoint"));
        assert!(backend.urls.lock().unwrap().is_empty());
    }
}
