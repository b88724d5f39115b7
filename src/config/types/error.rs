//! Errors raised while loading `spritestudio.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{}`", .0.display())]
    Io(PathBuf, #[source] std::io::Error),

    #[error("malformed config")]
    Toml(#[from] toml::de::Error),

    // printed in full by Display, so no source()
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field value.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        match &self.hint {
            Some(hint) => write!(f, " {}", format_args!("({hint})").dimmed()),
            None => Ok(()),
        }
    }
}

/// Every invalid field found by the section validators.
///
/// Sections push into a shared collector so one run reports all problems
/// instead of stopping at the first.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: ConfigDiagnostic) {
        self.errors.push(diagnostic);
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(ConfigDiagnostic::new(field, message));
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }

    /// Sections in first-reported order.
    fn sections(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for section in self.errors.iter().map(|d| d.field.section()) {
            if !seen.contains(&section) {
                seen.push(section);
            }
        }
        seen
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            format_args!(
                "invalid config ({})",
                crate::utils::plural_count(self.len(), "problem")
            )
            .red()
            .bold()
        )?;
        for section in self.sections() {
            write!(f, "\n  [{section}]")?;
            for diag in self.errors.iter().filter(|d| d.field.section() == section) {
                write!(f, "\n    {} {diag}", "✗".red())?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
