//! Filename-convention parsing for directional sprite sheets.
//!
//! Directional sheets are named `{prefix}_{Action}_{suffix}.png`, for
//! example `Sword_Attack_full.png`. The action may itself contain
//! underscores (`Sword_Run_Attack_full.png` has action `Run_Attack`), so
//! the parse takes everything between the first prefix marker and the
//! last suffix marker rather than splitting on every separator.

/// Result of matching a file stem against the naming convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedName {
    /// The stem matched; holds the extracted action name.
    Recognized { action: String },
    /// The stem does not follow the convention and the file is ignored.
    Skipped,
}

/// The fixed prefix/suffix naming convention for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenamePattern {
    prefix: String,
    suffix: String,
}

impl FilenamePattern {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Match a file stem (filename without extension) against the pattern.
    pub fn parse(&self, stem: &str) -> ParsedName {
        let action = stem
            .strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('_'))
            .and_then(|rest| rest.strip_suffix(self.suffix.as_str()))
            .and_then(|rest| rest.strip_suffix('_'));

        match action {
            Some(action) if !action.is_empty() => ParsedName::Recognized {
                action: action.to_string(),
            },
            _ => ParsedName::Skipped,
        }
    }
}
