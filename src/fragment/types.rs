//! Fragment value types.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::plugin::PluginBinding;
use crate::lint::Severity;

/// Setting of one rule: severity plus positional options.
///
/// Serializes the way the host engine reads it: a bare severity when there
/// are no options, otherwise `[severity, ...options]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSetting {
    pub severity: Severity,
    pub options: Vec<Value>,
}

impl RuleSetting {
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            options: Vec::new(),
        }
    }

    pub fn off() -> Self {
        Self::new(Severity::Off)
    }

    pub fn warn() -> Self {
        Self::new(Severity::Warn)
    }

    pub fn error() -> Self {
        Self::new(Severity::Error)
    }

    /// Append one positional option.
    pub fn with_option(mut self, option: Value) -> Self {
        self.options.push(option);
        self
    }
}

impl Serialize for RuleSetting {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.options.is_empty() {
            return self.severity.serialize(serializer);
        }
        let mut entries = Vec::with_capacity(self.options.len() + 1);
        entries.push(Value::String(self.severity.as_str().to_string()));
        entries.extend(self.options.iter().cloned());
        entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RuleSetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let (head, options) = match value {
            Value::Array(mut items) if !items.is_empty() => {
                let head = items.remove(0);
                (head, items)
            }
            other => (other, Vec::new()),
        };
        let severity = Severity::parse(&head).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid rule severity {}", head))
        })?;
        Ok(Self { severity, options })
    }
}

/// Parser/language assignment for the files a fragment matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LanguageBinding {
    /// Parser package, e.g. `yaml-eslint-parser`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    /// Plugin-provided language, e.g. `markdown/gfm`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Free-form parser/language options.
    #[serde(skip_serializing_if = "serde_json::Map::is_empty")]
    pub options: serde_json::Map<String, Value>,
}

impl LanguageBinding {
    pub fn parser(parser: impl Into<String>) -> Self {
        Self {
            parser: Some(parser.into()),
            ..Default::default()
        }
    }

    pub fn language(language: impl Into<String>) -> Self {
        Self {
            language: Some(language.into()),
            ..Default::default()
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }
}

/// A named, partial unit of lint configuration.
///
/// Fragments are values: edits produce new fragments and replace list
/// slots, they never change a fragment another list still references.
#[derive(Clone, Default, Serialize)]
pub struct Fragment {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ignores: Vec<String>,
    #[serde(
        skip_serializing_if = "BTreeMap::is_empty",
        serialize_with = "serialize_plugins"
    )]
    pub plugins: BTreeMap<String, Arc<dyn PluginBinding>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageBinding>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub rules: BTreeMap<String, RuleSetting>,
}

impl Fragment {
    /// Create an empty fragment with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = files.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores = ignores.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_plugin(mut self, namespace: impl Into<String>, plugin: Arc<dyn PluginBinding>) -> Self {
        self.plugins.insert(namespace.into(), plugin);
        self
    }

    pub fn with_language(mut self, language: LanguageBinding) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_rule(mut self, id: impl Into<String>, setting: RuleSetting) -> Self {
        self.rules.insert(id.into(), setting);
        self
    }

    pub fn with_rules<I, K>(mut self, rules: I) -> Self
    where
        I: IntoIterator<Item = (K, RuleSetting)>,
        K: Into<String>,
    {
        self.rules
            .extend(rules.into_iter().map(|(id, setting)| (id.into(), setting)));
        self
    }

    /// No `files`: the fragment applies to every linted file.
    pub fn is_global(&self) -> bool {
        self.files.is_empty()
    }

    /// Only `ignores` set: the fragment narrows what global fragments see.
    pub fn is_ignore_only(&self) -> bool {
        !self.ignores.is_empty()
            && self.files.is_empty()
            && self.plugins.is_empty()
            && self.language.is_none()
            && self.rules.is_empty()
    }

    /// Rule IDs this fragment turns on (anything but `off`).
    pub fn enabled_rules(&self) -> impl Iterator<Item = (&str, &RuleSetting)> {
        self.rules
            .iter()
            .filter(|(_, setting)| setting.severity.is_enabled())
            .map(|(id, setting)| (id.as_str(), setting))
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fragment")
            .field("name", &self.name)
            .field("files", &self.files)
            .field("ignores", &self.ignores)
            .field("plugins", &self.plugins.keys().collect::<Vec<_>>())
            .field("language", &self.language)
            .field("rules", &self.rules)
            .finish()
    }
}

fn serialize_plugins<S: Serializer>(
    plugins: &BTreeMap<String, Arc<dyn PluginBinding>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(plugins.len()))?;
    for (namespace, plugin) in plugins {
        map.serialize_entry(namespace, plugin.source())?;
    }
    map.end()
}

/// User-authored fragment, as written in an options file.
///
/// Plugins cannot be expressed in YAML; user fragments reference plugin
/// namespaces that built-in fragments already bind.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FragmentSpec {
    pub name: Option<String>,
    pub files: Vec<String>,
    pub ignores: Vec<String>,
    pub language: Option<LanguageBinding>,
    pub rules: BTreeMap<String, RuleSetting>,
}

impl FragmentSpec {
    /// Convert into a fragment, naming it by position when unnamed.
    pub fn into_fragment(self, index: usize) -> Fragment {
        Fragment {
            name: self
                .name
                .unwrap_or_else(|| format!("lintweave/user/fragment-{}", index)),
            files: self.files,
            ignores: self.ignores,
            plugins: BTreeMap::new(),
            language: self.language,
            rules: self.rules,
        }
    }
}
