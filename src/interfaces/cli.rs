use crate::domain::error::AppError;
use crate::infrastructure::config::Config;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pg")]
#[command(about = "Translate text into many languages at once.")]
#[command(version)]
pub struct Cli {
    /// Source language code
    #[arg(short = 's', long, default_value = "auto")]
    pub source: String,

    /// Comma-separated target language codes (default: every configured language)
    #[arg(short = 't', long, value_delimiter = ',')]
    pub targets: Option<Vec<String>>,

    /// Translation provider
    #[arg(short = 'p', long)]
    pub provider: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Retries per request
    #[arg(long)]
    pub retries: Option<u32>,

    /// HTTP proxy URL
    #[arg(long)]
    pub proxy: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write JSON results to this file
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Choose color theme
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Use this config file instead of the default one
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// List supported providers
    #[arg(long)]
    pub list_providers: bool,

    /// List configured languages
    #[arg(long)]
    pub list_languages: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Text to translate
    #[arg(num_args = 1..)]
    pub text: Vec<String>,
}

/// Validated input for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchInput {
    pub source: String,
    pub text: String,
    pub targets: Option<Vec<String>>,
}

impl Cli {
    /// Command-line flags win over the config file
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(provider) = &self.provider {
            config.provider = provider.clone();
        }
        if let Some(timeout) = self.timeout {
            config.network.timeout_ms = timeout;
        }
        if let Some(retries) = self.retries {
            config.network.retries = retries;
        }
        if let Some(proxy) = &self.proxy {
            config.network.proxy = Some(proxy.clone());
        }
        if let Some(theme) = &self.theme {
            config.display.theme = theme.clone();
        }
    }

    pub fn batch_input(&self) -> Result<BatchInput, AppError> {
        let text = self.text.join(" ");
        if text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Please provide text to translate".to_string(),
            ));
        }

        let source = self.source.trim().to_string();
        if source != "auto" && !is_language_code(&source) {
            return Err(AppError::InvalidInput(format!(
                "invalid source language code '{}'",
                source
            )));
        }

        let targets = match &self.targets {
            Some(list) => Some(validate_targets(list)?),
            None => None,
        };

        Ok(BatchInput {
            source,
            text,
            targets,
        })
    }
}

fn validate_targets(list: &[String]) -> Result<Vec<String>, AppError> {
    let targets: Vec<String> = list
        .iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect();

    if targets.is_empty() {
        return Err(AppError::InvalidInput(
            "target language list is empty".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for target in &targets {
        if !is_language_code(target) {
            return Err(AppError::InvalidInput(format!(
                "invalid target language code '{}'",
                target
            )));
        }
        if !seen.insert(target.to_ascii_lowercase()) {
            return Err(AppError::InvalidInput(format!(
                "duplicate target language '{}'",
                target
            )));
        }
    }

    Ok(targets)
}

/// `xx`, `xxx`, or either followed by `-` and a 2-4 character region/script
pub fn is_language_code(code: &str) -> bool {
    let (primary, region) = match code.split_once('-') {
        Some((primary, region)) => (primary, Some(region)),
        None => (code, None),
    };

    let primary_ok =
        (2..=3).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
    let region_ok = region.map_or(true, |r| {
        (2..=4).contains(&r.len()) && r.chars().all(|c| c.is_ascii_alphanumeric())
    });

    primary_ok && region_ok
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pg").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_language_codes() {
        for ok in ["en", "fil", "zh-CN", "zh-TW", "sr-Latn", "es-419"] {
            assert!(is_language_code(ok), "{} should be valid", ok);
        }
        for bad in ["", "e", "english", "zh-", "zh-CNNNN", "en_US", "1a", "zh-C N"] {
            assert!(!is_language_code(bad), "{} should be invalid", bad);
        }
    }

    #[test]
    fn test_batch_input() {
        let cli = parse(&["-s", "en", "-t", "fr,ja, de", "hello", "world"]);
        let input = cli.batch_input().unwrap();

        assert_eq!(input.source, "en");
        assert_eq!(input.text, "hello world");
        assert_eq!(
            input.targets,
            Some(vec!["fr".to_string(), "ja".to_string(), "de".to_string()])
        );
    }

    #[test]
    fn test_targets_default_to_none() {
        let input = parse(&["hello"]).batch_input().unwrap();
        assert_eq!(input.source, "auto");
        assert!(input.targets.is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&[]).batch_input().is_err());
        assert!(parse(&["   "]).batch_input().is_err());
        assert!(parse(&["-s", "english", "hi"]).batch_input().is_err());
        assert!(parse(&["-t", "fr,fr", "hi"]).batch_input().is_err());
        assert!(parse(&["-t", "fr,FR", "hi"]).batch_input().is_err());
        assert!(parse(&["-t", "fr,x", "hi"]).batch_input().is_err());
        assert!(parse(&["-t", ",", "hi"]).batch_input().is_err());
    }

    #[test]
    fn test_overrides() {
        let cli = parse(&[
            "-p", "google", "--timeout", "2500", "--retries", "0", "--proxy",
            "http://proxy:8080", "-T", "wudao", "hi",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.network.timeout_ms, 2500);
        assert_eq!(config.network.retries, 0);
        assert_eq!(config.network.proxy.as_deref(), Some("http://proxy:8080"));
        assert_eq!(config.display.theme, "wudao");
    }
}
