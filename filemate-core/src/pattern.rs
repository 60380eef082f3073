use crate::config::ConfigError;
use regex::Regex;
use std::sync::OnceLock;

/// Matches the index placeholder, optionally with a zero-pad width
/// modifier: `{i}`, `{i:3}`, `{i:03}`.
fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{i(?::(0?\d+))?\}").unwrap())
}

/// Matches a placeholder whose modifier is not a valid width, so we can
/// report it instead of claiming the placeholder is missing entirely.
fn malformed_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{i:([^}]*)\}").unwrap())
}

/// A validated rename template with a single `{i}` index placeholder.
///
/// Parsing happens once at configuration time; `render` is then a pure
/// string substitution. The optional width modifier zero-pads the
/// index, so `file_{i:03}` renders index 7 as `file_007`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    template: String,
    prefix: String,
    suffix: String,
    width: usize,
}

impl NamePattern {
    pub fn parse(template: &str) -> Result<Self, ConfigError> {
        let mut captures = placeholder_regex().captures_iter(template);

        let Some(first) = captures.next() else {
            if let Some(bad) = malformed_regex().captures(template) {
                return Err(ConfigError::InvalidModifier(bad[1].to_string()));
            }
            return Err(ConfigError::MissingPlaceholder(template.to_string()));
        };
        if captures.next().is_some() {
            return Err(ConfigError::MultiplePlaceholders(template.to_string()));
        }

        let whole = first.get(0).unwrap();
        let width = match first.get(1) {
            Some(w) => w
                .as_str()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidModifier(w.as_str().to_string()))?,
            None => 0,
        };

        Ok(Self {
            template: template.to_string(),
            prefix: template[..whole.start()].to_string(),
            suffix: template[whole.end()..].to_string(),
            width,
        })
    }

    /// Substitute `index` into the template, producing a filename stem.
    pub fn render(&self, index: u32) -> String {
        format!(
            "{}{:0width$}{}",
            self.prefix,
            index,
            self.suffix,
            width = self.width
        )
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}
