//! Language option model

use serde::Serialize;

use crate::constants::{file_extensions, language_ids};

/// A (compiler/interpreter, id) pair the grading backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LanguageOption {
    /// Backend identifier sent as `languageId`
    pub id: u32,
    /// Display label
    pub name: &'static str,
    /// Extension accepted by the upload picker (without the dot)
    #[serde(skip)]
    pub extension: &'static str,
}

/// C++ (compiled)
pub const CPP: LanguageOption = LanguageOption {
    id: language_ids::CPP,
    name: "C++",
    extension: file_extensions::CPP,
};

/// Python (interpreted)
pub const PYTHON: LanguageOption = LanguageOption {
    id: language_ids::PYTHON,
    name: "Python",
    extension: file_extensions::PYTHON,
};

/// All selectable languages, in menu order
pub const LANGUAGE_OPTIONS: &[LanguageOption] = &[CPP, PYTHON];

impl LanguageOption {
    /// Look up a language by backend id
    pub fn by_id(id: u32) -> Option<Self> {
        LANGUAGE_OPTIONS.iter().copied().find(|lang| lang.id == id)
    }

    /// Look up a language by display name (case-insensitive)
    pub fn by_name(name: &str) -> Option<Self> {
        LANGUAGE_OPTIONS
            .iter()
            .copied()
            .find(|lang| lang.name.eq_ignore_ascii_case(name))
    }

    /// Look up a language by id or name, as typed by a user
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().parse::<u32>() {
            Ok(id) => Self::by_id(id),
            Err(_) => Self::by_name(value.trim()),
        }
    }

    /// Guess the language from a file name's extension
    pub fn for_file_name(file_name: &str) -> Option<Self> {
        let (_, ext) = file_name.rsplit_once('.')?;
        LANGUAGE_OPTIONS
            .iter()
            .copied()
            .find(|lang| lang.extension.eq_ignore_ascii_case(ext))
    }
}

impl std::fmt::Display for LanguageOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Picker filter string, e.g. `.cpp,.py`
///
/// Advisory only; the backend validates content on its own.
pub fn accepted_file_types() -> String {
    LANGUAGE_OPTIONS
        .iter()
        .map(|lang| format!(".{}", lang.extension))
        .collect::<Vec<_>>()
        .join(",")
}
