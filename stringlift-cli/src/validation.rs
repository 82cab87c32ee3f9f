use std::path::Path;

use unic_langid::LanguageIdentifier;

/// Validate file path exists and is readable
pub fn validate_input_file(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        return Err(format!("File does not exist: {}", path));
    }

    if !path_obj.is_file() {
        return Err(format!("Path is not a file: {}", path));
    }

    Ok(())
}

/// Validate an explicitly given workspace root
pub fn validate_root_dir(path: &str) -> Result<(), String> {
    let path_obj = Path::new(path);

    if !path_obj.is_dir() {
        return Err(format!("Workspace root is not a directory: {}", path));
    }

    Ok(())
}

/// Validate a locale flag as a BCP 47 language identifier
pub fn validate_language_code(lang: &str) -> Result<(), String> {
    if lang.is_empty() {
        return Err("Language code cannot be empty".to_string());
    }

    lang.parse::<LanguageIdentifier>().map(|_| ()).map_err(|_| {
        format!(
            "Invalid language code format: {}. Expected valid BCP 47 language identifier",
            lang
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_validate_input_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let file = dir.path().join("main.dart");
        fs::write(&file, "void main() {}").unwrap();

        assert!(validate_input_file(file.to_str().unwrap()).is_ok());
        assert!(validate_input_file(dir.path().to_str().unwrap()).is_err());
        assert!(validate_input_file("/no/such/file.dart").is_err());
    }

    #[test]
    fn test_validate_root_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(validate_root_dir(dir.path().to_str().unwrap()).is_ok());
        assert!(validate_root_dir("/no/such/dir").is_err());
    }

    #[test]
    fn test_validate_language_code() {
        assert!(validate_language_code("de").is_ok());
        assert!(validate_language_code("en-US").is_ok());
        assert!(validate_language_code("").is_err());
        assert!(validate_language_code("not a code").is_err());
    }
}
