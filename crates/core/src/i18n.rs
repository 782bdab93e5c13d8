//! Translation catalog for the screen.
//!
//! Lookup falls back from the selected locale to English, then to the key
//! itself, so a missing string never blanks out a label.

use crate::ports::Translator;
use std::collections::HashMap;

/// key -> display string
pub type TranslationDictionary = HashMap<String, String>;

pub const DEFAULT_LOCALE: &str = "en";

const ENGLISH: &[(&str, &str)] = &[
    ("back", "Back"),
    ("name", "Name"),
    ("tenant", "Tenant"),
    ("product", "Product"),
    ("acs_url", "ACS URL"),
    ("entity_id", "Entity ID"),
    ("create_app", "Create App"),
    ("saml_federation_add_new_app", "Add SAML Federation App"),
    (
        "saml_federation_add_new_app_description",
        "To configure SAML Federation app, add service provider details such as ACS URL and Entity ID.",
    ),
    (
        "saml_federation_new_success",
        "SAML Federation app created successfully.",
    ),
    (
        "saml_federation_new_failure",
        "Unable to create the SAML Federation app. Please try again.",
    ),
    (
        "license_required",
        "This feature requires a valid Enterprise License.",
    ),
];

#[derive(Debug, Clone)]
pub struct Catalog {
    translations: HashMap<String, TranslationDictionary>,
    locale: String,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

impl Catalog {
    /// Catalog with the built-in English strings, reading from `locale` first.
    #[must_use]
    pub fn new(locale: impl Into<String>) -> Self {
        let english = ENGLISH
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();

        let mut translations = HashMap::new();
        translations.insert(DEFAULT_LOCALE.to_string(), english);

        Self {
            translations,
            locale: locale.into(),
        }
    }

    /// Merge extra strings, keyed by locale. Existing keys are overwritten.
    #[must_use]
    pub fn with_overrides(mut self, overrides: HashMap<String, TranslationDictionary>) -> Self {
        for (locale, dictionary) in overrides {
            self.translations.entry(locale).or_default().extend(dictionary);
        }
        self
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Available locales
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.translations.keys().map(String::as_str).collect()
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.translations
            .get(locale)
            .and_then(|dict| dict.get(key))
            .map(String::as_str)
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &str) -> String {
        self.lookup(&self.locale, key)
            .or_else(|| self.lookup(DEFAULT_LOCALE, key))
            .unwrap_or(key)
            .to_string()
    }
}
