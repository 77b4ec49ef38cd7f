//! Page language preference.
//!
//! The pages are offered in Chinese, English and Japanese; the visitor's
//! choice is remembered across sessions. This module keeps that single
//! preference in a small file under the platform config directory.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use thiserror::Error;
use tracing::debug;

/// A language the pages are offered in.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Language {
    /// 中文, the default
    #[default]
    Zh,
    /// English
    En,
    /// 日本語
    Ja,
}

impl Language {
    /// Short tag used as the persisted value.
    pub fn tag(self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
    /// Name of the language, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::Zh => "中文",
            Language::En => "English",
            Language::Ja => "日本語",
        }
    }
    /// BCP 47 code of the page locale.
    pub fn locale_code(self) -> &'static str {
        match self {
            Language::Zh => "zh-TW",
            Language::En => "en",
            Language::Ja => "ja",
        }
    }
    /// Parses a tag back into a `Language`.
    ///
    /// # Example
    ///
    /// ```
    /// use duhorilo::lang::Language;
    ///
    /// assert_eq!(Some(Language::Ja), Language::from_tag("ja"));
    /// assert_eq!(None, Language::from_tag("fr"));
    /// ```
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "zh" => Some(Language::Zh),
            "en" => Some(Language::En),
            "ja" => Some(Language::Ja),
            _ => None,
        }
    }
}

/// Errors from writing the preference file.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("no usable config directory on this platform")]
    NoConfigDir,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Persisted language preference.
///
/// Reading is lenient: a missing, unreadable or unrecognized stored value
/// falls back to [`Language::Zh`]. Only writing reports errors.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    /// Opens the store at the platform config location.
    pub fn open() -> Result<Self, PreferenceError> {
        let dirs = ProjectDirs::from("", "", "duhorilo").ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::with_path(dirs.config_dir().join("language")))
    }

    /// Opens the store at an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The stored preference, or [`Language::Zh`] when none is usable.
    pub fn language(&self) -> Language {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|tag| Language::from_tag(tag.trim()))
            .unwrap_or_default()
    }

    /// Stores `language` as the preference.
    pub fn set_language(&self, language: Language) -> Result<(), PreferenceError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(&self.path, language.tag())?;
        debug!(language = language.tag(), "language preference saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for language in [Language::Zh, Language::En, Language::Ja] {
            assert_eq!(Some(language), Language::from_tag(language.tag()));
        }
        assert_eq!(None, Language::from_tag(""));
        assert_eq!(None, Language::from_tag("zh-TW"));
    }

    #[test]
    fn names_and_codes() {
        for (std, language) in [
            (("中文", "zh-TW"), Language::Zh),
            (("English", "en"), Language::En),
            (("日本語", "ja"), Language::Ja),
        ] {
            assert_eq!(std, (language.native_name(), language.locale_code()));
        }
    }

    #[test]
    fn store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PreferenceStore::with_path(dir.path().join("prefs/language"));

        assert_eq!(Language::Zh, store.language());

        store.set_language(Language::Ja).unwrap();
        assert_eq!(Language::Ja, store.language());

        store.set_language(Language::En).unwrap();
        assert_eq!(Language::En, store.language());
    }

    #[test]
    fn unrecognized_value_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("language");
        fs::write(&path, "klingon").unwrap();

        assert_eq!(Language::Zh, PreferenceStore::with_path(path).language());
    }
}
