use std::{
    fs,
    path::{Path, PathBuf},
};

use stringlift::{Locale, Localizer, LocalizerConfig, Outcome};

use crate::console::{ConsoleHost, PresetAnswers};
use crate::validation::{validate_input_file, validate_language_code, validate_root_dir};

/// Walks up from the input file looking for the directory that holds the
/// `lib/l10n` resource folder.
fn infer_workspace_root(input: &Path) -> Option<PathBuf> {
    input
        .ancestors()
        .skip(1)
        .find(|dir| dir.join("lib/l10n").is_dir())
        .map(Path::to_path_buf)
}

#[allow(clippy::too_many_arguments)]
pub fn run_localize_command(
    input: String,
    line: usize,
    root: Option<String>,
    foreign: Option<String>,
    base: Option<String>,
    key: Option<String>,
    foreign_lang: String,
    base_lang: String,
) -> Result<(), String> {
    validate_input_file(&input)?;
    validate_language_code(&foreign_lang)?;
    validate_language_code(&base_lang)?;
    if let Some(r) = &root {
        validate_root_dir(r)?;
    }

    let input_path = PathBuf::from(&input);
    let workspace_root = match root {
        Some(r) => Some(PathBuf::from(r)),
        None => infer_workspace_root(&input_path),
    };

    let content =
        fs::read_to_string(&input_path).map_err(|e| format!("Failed to read input: {}", e))?;
    let document = stringlift::BufferDocument::new(content);

    let presets = PresetAnswers {
        foreign_text: foreign,
        base_text: base,
        key_name: key,
    };
    let mut host = ConsoleHost::new(document, workspace_root, presets);

    let config = LocalizerConfig {
        foreign: Locale::new(&foreign_lang).map_err(|e| e.to_string())?,
        base: Locale::new(&base_lang).map_err(|e| e.to_string())?,
        ..LocalizerConfig::default()
    };

    let outcome = Localizer::new(config)
        .localize_line(&mut host, Some(line))
        .map_err(|e| e.to_string())?;

    match outcome {
        Outcome::Applied(applied) => {
            fs::write(&input_path, host.document().text())
                .map_err(|e| format!("Failed to write input back: {}", e))?;
            println!("✅ Localized '{}' as {}", applied.key, applied.replacement);
            println!("📄 Updated {} in place", input);
            println!("📄 Appended to {}", applied.foreign_file.display());
            if applied.has_placeholder {
                println!(
                    "📄 Appended to {} (with placeholder metadata)",
                    applied.base_file.display()
                );
            } else {
                println!("📄 Appended to {}", applied.base_file.display());
            }
            if applied.import_added {
                println!("📄 Inserted localizations import");
            }
        }
        Outcome::Skipped(reason) => {
            println!("ℹ️  Skipped: {}; nothing changed", reason);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_infer_workspace_root() {
        let dir = tempfile::TempDir::new().unwrap();
        let root = dir.path().join("app");
        fs::create_dir_all(root.join("lib/l10n")).unwrap();
        fs::create_dir_all(root.join("lib/src")).unwrap();
        let source = root.join("lib/src/main.dart");
        fs::write(&source, "void main() {}").unwrap();

        assert_eq!(infer_workspace_root(&source), Some(root));
    }

    #[test]
    fn test_infer_workspace_root_none() {
        let dir = tempfile::TempDir::new().unwrap();
        let source = dir.path().join("main.dart");
        fs::write(&source, "void main() {}").unwrap();

        assert_eq!(infer_workspace_root(&source), None);
    }
}
