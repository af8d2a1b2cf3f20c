pub mod google;
pub mod registry;

pub use google::GoogleTranslator;
pub use registry::{available_identifiers, create_translator};

use crate::domain::error::{ProviderError, TransportError, TransportErrorKind};
use crate::domain::model::ProviderId;

/// Human-readable failure text, prefixed with `[<provider name>]`.
///
/// Every adapter goes through here so the wording is identical across
/// providers.
pub fn failure_message(provider: ProviderId, error: &ProviderError) -> String {
    format!("[{}] {}", provider.display_name(), describe(error))
}

fn describe(error: &ProviderError) -> String {
    match error {
        ProviderError::Transport(e) => describe_transport(e),
        ProviderError::Parse(e) if e.is_unparsable() => {
            "response format error: could not parse result".to_string()
        }
        ProviderError::Parse(e) => e.to_string(),
        ProviderError::Other(message) => message.clone(),
        ProviderError::Unknown => "translation failed".to_string(),
    }
}

fn describe_transport(error: &TransportError) -> String {
    match error.status {
        Some(429) => "too many requests, try again later".to_string(),
        Some(status) if status >= 500 => format!("service unavailable ({})", status),
        Some(_) => error.message.clone(),
        None => match error.kind {
            TransportErrorKind::Timeout => "request timed out".to_string(),
            TransportErrorKind::Connect => "cannot reach service".to_string(),
            TransportErrorKind::Resolve => "cannot resolve service address".to_string(),
            TransportErrorKind::Http | TransportErrorKind::Unknown => {
                format!("network error: {}", error.message)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ParseError;

    fn message(error: ProviderError) -> String {
        failure_message(ProviderId::Google, &error)
    }

    #[test]
    fn test_transport_messages() {
        let rate_limited = TransportError::http(429, "rate limited, retry later");
        assert_eq!(
            message(rate_limited.into()),
            "[Google] too many requests, try again later"
        );

        let unavailable = TransportError::http(503, "service temporarily unavailable");
        assert_eq!(message(unavailable.into()), "[Google] service unavailable (503)");

        let bad_request = TransportError::http(400, "invalid request");
        assert_eq!(message(bad_request.into()), "[Google] invalid request");
    }

    #[test]
    fn test_network_messages() {
        let cases = [
            (TransportErrorKind::Timeout, "[Google] request timed out"),
            (TransportErrorKind::Connect, "[Google] cannot reach service"),
            (TransportErrorKind::Resolve, "[Google] cannot resolve service address"),
            (TransportErrorKind::Unknown, "[Google] network error: unknown error"),
        ];
        for (kind, expected) in cases {
            let error = TransportError::new(kind, "unknown error");
            assert_eq!(message(error.into()), expected);
        }
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(
            message(ParseError::NoValidFragments.into()),
            "[Google] response format error: could not parse result"
        );
        assert_eq!(
            message(ParseError::InvalidJson("eof".into()).into()),
            "[Google] response format error: could not parse result"
        );
        assert_eq!(
            message(ParseError::NotArray.into()),
            "[Google] missing translation data: response is not array format"
        );
    }

    #[test]
    fn test_other_and_unknown() {
        assert_eq!(
            message(ProviderError::Other("quota exceeded".into())),
            "[Google] quota exceeded"
        );
        assert_eq!(message(ProviderError::Unknown), "[Google] translation failed");
    }
}
