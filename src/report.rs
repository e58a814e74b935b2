use crate::errors::Result;
use crate::extractor::ExtractionResult;
use crate::install::InstallationPaths;
use serde::Serialize;
use std::fmt::Write;

/// JSON body emitted when extraction fails
#[derive(Debug, Clone, Serialize)]
pub struct ErrorReport {
    pub error: String,
}

/// Render an extraction outcome for a terminal
pub fn format_human(outcome: &Result<ExtractionResult>) -> String {
    let result = match outcome {
        Ok(result) => result,
        Err(e) => return format!("Error: {}", e),
    };

    let mut output = String::new();
    let css_file = result.css_file.as_deref().unwrap_or("-");
    let _ = writeln!(output, "\n📄 CSS File: {}", css_file);
    let _ = writeln!(output, "\n🎨 Component Classes ({}):", result.class_count);
    for class in &result.classes {
        let _ = writeln!(output, "  {}", class);
    }

    if let Some(tokens) = &result.tokens {
        let _ = writeln!(
            output,
            "\n🎯 Design Tokens ({}) from {} theme:\n",
            tokens.token_count, tokens.theme
        );

        for (category, bucket) in tokens.tokens_by_category.iter() {
            if bucket.is_empty() {
                continue;
            }
            let _ = writeln!(output, "{} ({}):", category.label(), bucket.len());
            for token in bucket {
                let _ = writeln!(output, "  {}", token);
            }
            output.push('\n');
        }
    }

    output
}

/// Render an extraction outcome as pretty JSON
pub fn format_json(outcome: &Result<ExtractionResult>) -> Result<String> {
    let json = match outcome {
        Ok(result) => serde_json::to_string_pretty(result)?,
        Err(e) => serde_json::to_string_pretty(&ErrorReport { error: e.to_string() })?,
    };
    Ok(json)
}

/// Success message printed after assets are installed
pub fn install_hint(paths: &InstallationPaths) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "✓ Elementary assets installed to: {}", paths.to.display());
    let _ = writeln!(output, "\nImport in your CSS:");
    let _ = writeln!(output, "  @import './assets/elementary/tokens/polished.css';");
    let _ = write!(output, "  @import './assets/elementary/components.css';");
    output
}
