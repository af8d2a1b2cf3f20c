use crate::domain::model::{LanguageEntry, TranslationResult};
use crate::presentation::theme::Theme;
use std::fmt::Write;

/// Render batch results for the terminal, one block per target language
pub fn format_results(
    source_text: &str,
    results: &[TranslationResult],
    theme: &Theme,
    enable_emoji: bool,
) -> String {
    let mut output = String::new();

    writeln!(output, "{}", (theme.header)(source_text)).ok();
    let cutoff = "⸺".repeat(40);
    writeln!(output, "  {}", (theme.line)(&cutoff)).ok();

    for result in results {
        let (ok, err) = if enable_emoji { ("✔", "✘") } else { ("ok", "err") };
        let heading = format!(
            "{} {}",
            (theme.name)(&result.language_name),
            (theme.code)(&format!("[{}]", result.target_language))
        );

        if result.success {
            writeln!(output, "  {} {}", (theme.ok_mark)(ok), heading).ok();
            for line in result.translated_text.lines() {
                writeln!(output, "    {}", (theme.text)(line)).ok();
            }
        } else {
            writeln!(output, "  {} {}", (theme.error)(err), heading).ok();
            let message = result.error.as_deref().unwrap_or("translation failed");
            writeln!(output, "    {}", (theme.error)(message)).ok();
        }
    }

    let failed = results.iter().filter(|r| !r.success).count();
    writeln!(output, "  {}", (theme.line)(&cutoff)).ok();
    writeln!(
        output,
        "  {} of {} succeeded",
        results.len() - failed,
        results.len()
    )
    .ok();

    output
}

pub fn format_languages(languages: &[LanguageEntry]) -> String {
    let width = languages.iter().map(|l| l.code.len()).max().unwrap_or(0);
    languages
        .iter()
        .map(|l| format!("{:<width$}  {}\n", l.code, l.name, width = width))
        .collect()
}
