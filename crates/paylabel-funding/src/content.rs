//! Content-by-locale lookup for tag copy.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The tag components available for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagContent {
    /// Copy shown under multiple buttons, when the locale has one.
    #[serde(default, rename = "DualTag")]
    pub dual_tag: Option<String>,
    /// Copy shown otherwise.
    #[serde(rename = "SaferTag")]
    pub safer_tag: String,
}

/// Errors raised while loading a content table.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The table was not valid JSON of the expected shape.
    #[error("invalid content table: {0}")]
    Json(#[from] serde_json::Error),
    /// A locale's required safer tag copy was empty.
    #[error("locale '{lang}' has an empty SaferTag")]
    EmptySaferTag {
        /// Offending language code.
        lang: String,
    },
}

/// Language code to tag content.
///
/// A missing language is a caller error; implementations do not fall back.
pub trait ContentTable: Send + Sync {
    /// Tag content for `lang`, if the table has it.
    fn tag_content(&self, lang: &str) -> Option<&TagContent>;
}

/// An in-memory [`ContentTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticContentTable {
    entries: HashMap<String, TagContent>,
}

impl StaticContentTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The copy shipped with the renderer.
    #[must_use]
    pub fn builtin() -> Self {
        let rows: &[(&str, Option<&str>, &str)] = &[
            ("en", Some("Two easy ways to pay"), "The safer, easier way to pay"),
            ("es", Some("Dos formas fáciles de pagar"), "La forma rápida y segura de pagar"),
            ("fr", Some("Deux façons simples de payer"), "Le réflexe sécurité pour payer"),
            ("de", None, "Überall schnell und sicher bezahlen"),
            ("it", None, "Il modo rapido e sicuro per pagare"),
            ("nl", None, "De veilige en makkelijke manier om te betalen"),
        ];

        rows.iter().fold(Self::new(), |table, (lang, dual, safer)| {
            table.with_locale(
                lang,
                TagContent {
                    dual_tag: dual.map(str::to_string),
                    safer_tag: (*safer).to_string(),
                },
            )
        })
    }

    /// Add or replace the content for `lang`.
    #[must_use]
    pub fn with_locale(mut self, lang: &str, content: TagContent) -> Self {
        let _ = self.entries.insert(lang.to_string(), content);
        self
    }

    /// Load a table from a JSON object keyed by language code.
    ///
    /// ```json
    /// { "en": { "DualTag": "Two easy ways to pay", "SaferTag": "The safer, easier way to pay" } }
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Json`] for malformed input and
    /// [`ContentError::EmptySaferTag`] when a locale has no safer tag copy.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let entries: HashMap<String, TagContent> = serde_json::from_str(json)?;
        if let Some((lang, _)) = entries.iter().find(|(_, c)| c.safer_tag.trim().is_empty()) {
            return Err(ContentError::EmptySaferTag { lang: lang.clone() });
        }
        Ok(Self { entries })
    }

    /// Number of locales in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no locales.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ContentTable for StaticContentTable {
    fn tag_content(&self, lang: &str) -> Option<&TagContent> {
        self.entries.get(lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_safer_tag_for_every_locale() {
        let table = StaticContentTable::builtin();
        assert_eq!(table.len(), 6);
        for lang in ["en", "es", "fr", "de", "it", "nl"] {
            let content = table.tag_content(lang).unwrap();
            assert!(!content.safer_tag.is_empty(), "{lang}");
        }
        assert!(table.tag_content("de").unwrap().dual_tag.is_none());
    }

    #[test]
    fn test_from_json_str_reads_component_names() {
        let table = StaticContentTable::from_json_str(
            r#"{"pt": {"SaferTag": "A forma segura de pagar"}, "en": {"DualTag": "Two", "SaferTag": "Safer"}}"#,
        )
        .unwrap();
        assert_eq!(table.tag_content("pt").unwrap().dual_tag, None);
        assert_eq!(table.tag_content("en").unwrap().dual_tag.as_deref(), Some("Two"));
        assert!(table.tag_content("xx").is_none());
    }

    #[test]
    fn test_from_json_str_rejects_empty_safer_tag() {
        let err = StaticContentTable::from_json_str(r#"{"en": {"SaferTag": " "}}"#).unwrap_err();
        assert!(matches!(err, ContentError::EmptySaferTag { ref lang } if lang == "en"));
    }

    #[test]
    fn test_from_json_str_rejects_malformed() {
        let err = StaticContentTable::from_json_str("[1, 2]").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }
}
