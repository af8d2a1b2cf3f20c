//! Translate one piece of text into many languages at once.
//!
//! Requests go out concurrently, one per target language. Each one retries
//! transient network failures on its own, and a failed language never takes
//! the rest of the batch down with it.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod presentation;
pub mod state;

pub use application::translate::Orchestrator;
pub use domain::error::{AppError, ParseError, ProviderError, TransportError, TransportErrorKind};
pub use domain::model::{LanguageEntry, ProviderId, TranslationRequest, TranslationResult};
pub use domain::traits::Translator;
pub use infrastructure::network::transport::{RequestOptions, Transport, TransportConfig};
