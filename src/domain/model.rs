use crate::domain::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// 单个目标语言的翻译请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub source_language: String,
    pub target_language: String,
    pub text: String,
}

impl TranslationRequest {
    pub fn new(
        source_language: impl Into<String>,
        target_language: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            source_language: source_language.into(),
            target_language: target_language.into(),
            text: text.into(),
        }
    }
}

// 单个目标语言的翻译结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranslationResult {
    pub target_language: String,
    pub language_name: String,
    pub translated_text: String,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TranslationResult {
    /// `language_name` starts out as the raw code; the orchestrator replaces it.
    pub fn success(target_language: impl Into<String>, translated_text: String) -> Self {
        let target_language = target_language.into();
        Self {
            language_name: target_language.clone(),
            target_language,
            translated_text,
            success: true,
            error: None,
        }
    }

    pub fn failure(target_language: impl Into<String>, error: String) -> Self {
        let target_language = target_language.into();
        Self {
            language_name: target_language.clone(),
            target_language,
            translated_text: String::new(),
            success: false,
            error: Some(error),
        }
    }
}

// 语言代码与显示名称
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

impl LanguageEntry {
    pub fn new(code: &str, name: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
        }
    }
}

// 支持的翻译服务
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Google,
}

impl ProviderId {
    /// Every supported provider, in the order shown to users.
    pub const ALL: &'static [ProviderId] = &[ProviderId::Google];

    /// Identifier used in configuration and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::Google => "google",
        }
    }

    /// Name used in the bracketed prefix of error messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProviderId::Google => "Google",
        }
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProviderId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::UnknownProvider {
                given: s.to_string(),
                valid: ProviderId::ALL
                    .iter()
                    .map(ProviderId::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}
