//! Check command - validate configuration and content

use std::path::Path;

use color_eyre::eyre::{Result, bail};
use folio_core::Config;
use folio_parser::MarkdownParser;

use super::build::site_path;

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Whether the check fails; `strict` promotes warnings to errors.
    fn fails(&self, strict: bool) -> bool {
        self.has_errors() || (strict && self.has_warnings())
    }
}

/// Run the check command.
///
/// Validates configuration and all posts.
pub fn run(config_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?config_path, strict, "Checking configuration and content");

    let result = validate(config_path);

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if result.fails(strict) {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn validate(config_path: &Path) -> ValidationResult {
    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load_with_env(config_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            c
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            return result;
        }
    };

    println!("\nChecking configuration values...");
    for warning in quick_validate(&config) {
        result.add_warning(warning);
    }
    check_config_values(&config, &site_path(config_path, &config.build.output_dir), &mut result);

    let content_dir = site_path(config_path, &config.build.content_dir);
    if content_dir.exists() {
        println!("\nChecking posts...");
        validate_content_files(&content_dir, &mut result);
    } else {
        result.add_warning(format!(
            "Content directory does not exist: {}",
            content_dir.display()
        ));
    }

    result
}

/// Quick validation for the build command.
///
/// Returns non-fatal warnings: missing contact details are left out of the
/// social panel rather than failing the build.
pub fn quick_validate(config: &Config) -> Vec<String> {
    config
        .contact_info
        .missing_fields()
        .into_iter()
        .map(|field| format!("contact_info.{field} is not set; its link will not be shown"))
        .collect()
}

/// Parse every markdown post under `dir`.
fn validate_content_files(dir: &Path, result: &mut ValidationResult) {
    let parser = MarkdownParser::new();
    let mut checked = 0;
    let mut failed = 0;

    for entry in walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        checked += 1;

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                result.add_error(format!("{}: Failed to read file: {e}", path.display()));
                failed += 1;
                continue;
            }
        };

        match parser.parse(&content, path) {
            Ok(document) => {
                if let Err(e) = document.frontmatter.validate(path) {
                    result.add_warning(e.to_string());
                }
                if document.table_of_contents.is_empty() {
                    tracing::debug!(path = %path.display(), "post has no headings");
                }
            }
            Err(e) => {
                result.add_error(format!("{}: Parse error: {e}", path.display()));
                failed += 1;
            }
        }
    }

    if failed == 0 {
        println!("  ✓ All {checked} posts valid");
    } else {
        println!("  ✗ {failed}/{checked} posts have errors");
    }
}

/// Check configuration values for common issues.
fn check_config_values(config: &Config, output: &Path, result: &mut ValidationResult) {
    if !config.site.base_url.starts_with("http") {
        result.add_warning("site.base_url should start with http:// or https://");
    }

    let accent = &config.theme.accent_colour;
    let is_hex = accent.len() == 7
        && accent.starts_with('#')
        && accent[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !is_hex {
        result.add_warning(format!(
            "theme.accent_colour '{accent}' is not a #rrggbb colour"
        ));
    }

    if output.exists() && !output.is_dir() {
        result.add_error(format!(
            "Output path exists but is not a directory: {}",
            output.display()
        ));
    }

    println!("  ✓ Configuration values checked");
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_site(config: &str) -> TempDir {
        let root = TempDir::new().unwrap();
        fs::write(root.path().join("config.toml"), config).unwrap();
        fs::create_dir(root.path().join("content")).unwrap();
        root
    }

    const FULL_CONFIG: &str = r##"
[site]
title = "Test"
base_url = "https://example.com"

[contact_info]
email = "a@b.com"
github = "https://github.com/x"
linkedin = "https://linkedin.com/in/x"
"##;

    #[test]
    fn test_quick_validate_reports_missing_contacts() {
        let root = write_site("[site]\ntitle = \"Test\"\nbase_url = \"https://example.com\"\n");
        let config = Config::load(&root.path().join("config.toml")).unwrap();
        let warnings = quick_validate(&config);
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("contact_info.github"));
    }

    #[test]
    fn test_check_passes_for_valid_site() {
        let root = write_site(FULL_CONFIG);
        fs::write(
            root.path().join("content/post.md"),
            "---\ntitle: Post\n---\n\n## Intro\n",
        )
        .unwrap();
        run(&root.path().join("config.toml"), true).unwrap();
    }

    #[test]
    fn test_check_fails_on_parse_error() {
        let root = write_site(FULL_CONFIG);
        fs::write(root.path().join("content/bad.md"), "---\ntitle: [oops\n---\n").unwrap();
        let result = validate(&root.path().join("config.toml"));
        assert!(result.has_errors());
    }

    #[test]
    fn test_strict_mode_promotes_warnings() {
        let root = write_site(FULL_CONFIG);
        fs::write(root.path().join("content/untitled.md"), "Just text.\n").unwrap();
        let result = validate(&root.path().join("config.toml"));
        assert!(!result.has_errors());
        assert!(result.has_warnings());
        assert!(!result.fails(false));
        assert!(result.fails(true));
    }

    #[test]
    fn test_missing_config_is_error() {
        let root = TempDir::new().unwrap();
        let result = validate(&root.path().join("config.toml"));
        assert!(result.has_errors());
    }
}
