//! Companion specs (`name` or `name@version`).

use std::fmt;
use std::str::FromStr;

use crate::error::{LintweaveError, Result};

/// A companion package name with an optional version constraint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompanionSpec {
    pub name: String,
    pub version: Option<String>,
}

impl CompanionSpec {
    /// Split `spec` on its last unescaped `@`.
    ///
    /// A leading `@` belongs to a scoped name (`@scope/name`) and is never
    /// a version delimiter. `\@` is an escaped literal `@`.
    pub fn parse(spec: &str) -> Result<Self> {
        let spec = spec.trim();
        let invalid = || LintweaveError::InvalidCompanionSpec {
            spec: spec.to_string(),
        };

        let delimiter = spec
            .char_indices()
            .rev()
            .filter(|(i, c)| *c == '@' && *i > 0)
            .find(|(i, _)| !spec[..*i].ends_with('\\'))
            .map(|(i, _)| i);

        let (name, version) = match delimiter {
            Some(i) => (&spec[..i], Some(&spec[i + 1..])),
            None => (spec, None),
        };

        let name = name.replace("\\@", "@");
        if name.is_empty() || name == "@" || (name.starts_with('@') && !name.contains('/')) {
            return Err(invalid());
        }
        if version.is_some_and(str::is_empty) {
            return Err(invalid());
        }

        Ok(Self {
            name,
            version: version.map(str::to_string),
        })
    }

    /// The requested version range: plain versions become caret ranges,
    /// explicit ranges and tags pass through.
    pub fn requested_range(&self) -> Option<String> {
        let version = self.version.as_deref()?;
        if version.starts_with(|c: char| c.is_ascii_digit()) {
            Some(format!("^{}", version))
        } else {
            Some(version.to_string())
        }
    }

    /// Argument handed to the installer.
    pub fn install_arg(&self) -> String {
        match self.requested_range() {
            Some(range) => format!("{}@{}", self.name, range),
            None => self.name.clone(),
        }
    }
}

impl FromStr for CompanionSpec {
    type Err = LintweaveError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for CompanionSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}
