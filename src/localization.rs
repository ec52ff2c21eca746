//! Localization for user-facing text
//!
//! One Fluent bundle is loaded for the language configured at startup; there
//! is no runtime language switching. Lookups degrade gracefully: a missing
//! key or a failed placeholder substitution returns the raw key instead of
//! an error.

use anyhow::{Context, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::fs;
use tracing::warn;
use unic_langid::LanguageIdentifier;

/// Localization manager holding the bundle for the configured language.
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Load the bundle for `language` from `./locales/<language>/main.ftl`.
    ///
    /// A missing or unreadable locale file is a startup error.
    pub fn new(language: &str) -> Result<Self> {
        let locale: LanguageIdentifier = language
            .parse()
            .with_context(|| format!("Invalid language identifier: {language}"))?;

        let resource_path = format!("./locales/{locale}/main.ftl");
        let content = fs::read_to_string(&resource_path)
            .with_context(|| format!("Failed to read locale file: {resource_path}"))?;

        // Fluent keeps the well-formed entries of a partially broken file.
        let resource = match FluentResource::try_new(content) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                warn!(path = %resource_path, ?errors, "Locale file has syntax errors");
                resource
            }
        };

        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        if let Err(errors) = bundle.add_resource(resource) {
            warn!(path = %resource_path, ?errors, "Locale file has overriding entries");
        }

        Ok(Self { bundle })
    }

    /// Look a key up and render it without arguments.
    pub fn translate(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Look a key up and render it with named placeholder arguments.
    pub fn translate_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let fluent_args = FluentArgs::from_iter(
            args.iter()
                .map(|(name, value)| (*name, FluentValue::from(*value))),
        );
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let message = match self.bundle.get_message(key) {
            Some(message) => message,
            None => {
                warn!(key = %key, "Missing translation key");
                return key.to_string();
            }
        };

        let pattern = match message.value() {
            Some(pattern) => pattern,
            None => {
                warn!(key = %key, "Translation key has no value");
                return key.to_string();
            }
        };

        let mut errors = vec![];
        let rendered = self
            .bundle
            .format_pattern(pattern, args, &mut errors)
            .into_owned();

        if errors.is_empty() {
            rendered
        } else {
            warn!(key = %key, ?errors, "Translation failed to render");
            key.to_string()
        }
    }
}
