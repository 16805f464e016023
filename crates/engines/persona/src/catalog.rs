//! Persona registry.
//!
//! Personas are data, not code: the built-in set lives in
//! `data/personas.toml` and is embedded at compile time. Custom catalogs use
//! the same format and go through the same validation, so every persona
//! handed to an engine is known to have a non-empty, repeat-free message
//! pool for every [`Category`].

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, Result};

const BUILTIN_PERSONAS: &str = include_str!("../data/personas.toml");

pub const MAX_DIFFICULTY: u8 = 10;
pub const DEFAULT_DIFFICULTY: u8 = 5;

/// Fixed skill levels by persona name. Names not listed get
/// [`DEFAULT_DIFFICULTY`].
pub const DIFFICULTY_TABLE: [(&str, u8); 8] = [
    ("Newbie", 0),
    ("Friendly", 3),
    ("Chatty", 4),
    ("Zen", 6),
    ("Cocky", 7),
    ("Dramatic", 8),
    ("Professor", 9),
    ("Mysterious", 10),
];

pub fn difficulty_for(name: &str) -> u8 {
    table_difficulty(name).unwrap_or(DEFAULT_DIFFICULTY)
}

fn table_difficulty(name: &str) -> Option<u8> {
    DIFFICULTY_TABLE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, level)| level)
}

/// Kind of remark a persona makes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Opening,
    GoodMove,
    BadMove,
    Winning,
    Losing,
    Check,
    Capture,
    General,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Opening,
        Category::GoodMove,
        Category::BadMove,
        Category::Winning,
        Category::Losing,
        Category::Check,
        Category::Capture,
        Category::General,
    ];

    /// Key used in catalog files.
    pub fn key(self) -> &'static str {
        match self {
            Category::Opening => "opening",
            Category::GoodMove => "good_move",
            Category::BadMove => "bad_move",
            Category::Winning => "winning",
            Category::Losing => "losing",
            Category::Check => "check",
            Category::Capture => "capture",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One ordered message list per [`Category`].
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MessagePool {
    pub opening: Vec<String>,
    pub good_move: Vec<String>,
    pub bad_move: Vec<String>,
    pub winning: Vec<String>,
    pub losing: Vec<String>,
    pub check: Vec<String>,
    pub capture: Vec<String>,
    pub general: Vec<String>,
}

impl MessagePool {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Opening => &self.opening,
            Category::GoodMove => &self.good_move,
            Category::BadMove => &self.bad_move,
            Category::Winning => &self.winning,
            Category::Losing => &self.losing,
            Category::Check => &self.check,
            Category::Capture => &self.capture,
            Category::General => &self.general,
        }
    }

    fn validate(&self, persona: &str) -> Result<()> {
        for category in Category::ALL {
            let pool = self.get(category);
            if pool.is_empty() {
                return Err(EngineError::InvalidCatalog(format!(
                    "{persona}: category '{category}' has no messages"
                )));
            }
            let mut seen = HashSet::new();
            for msg in pool {
                if msg.trim().is_empty() {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{persona}: category '{category}' has a blank message"
                    )));
                }
                if !seen.insert(msg.as_str()) {
                    return Err(EngineError::InvalidCatalog(format!(
                        "{persona}: category '{category}' repeats \"{msg}\""
                    )));
                }
            }
        }
        Ok(())
    }
}

/// An immutable opponent personality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Persona {
    name: String,
    display_name: String,
    description: String,
    difficulty: u8,
    messages: MessagePool,
}

impl Persona {
    /// Builds a validated persona. Names in [`DIFFICULTY_TABLE`] always get
    /// their table level, and an explicit `difficulty` that disagrees with it
    /// is rejected. Other names use `difficulty` or [`DEFAULT_DIFFICULTY`].
    pub fn new(
        name: impl Into<String>,
        display_name: Option<String>,
        description: impl Into<String>,
        difficulty: Option<u8>,
        messages: MessagePool,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(EngineError::InvalidCatalog(
                "persona name must not be empty".to_string(),
            ));
        }
        let difficulty = match (table_difficulty(&name), difficulty) {
            (Some(fixed), Some(given)) if fixed != given => {
                return Err(EngineError::InvalidCatalog(format!(
                    "{name}: difficulty is fixed at {fixed}, got {given}"
                )));
            }
            (Some(fixed), _) => fixed,
            (None, given) => given.unwrap_or(DEFAULT_DIFFICULTY),
        };
        if difficulty > MAX_DIFFICULTY {
            return Err(EngineError::InvalidCatalog(format!(
                "{name}: difficulty {difficulty} is above {MAX_DIFFICULTY}"
            )));
        }
        messages.validate(&name)?;

        Ok(Self {
            display_name: display_name.unwrap_or_else(|| name.clone()),
            name,
            description: description.into(),
            difficulty,
            messages,
        })
    }

    /// Unique identifier, e.g. `Newbie`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Chat name, e.g. `Newbie Nina`.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// 0 (always random) to 10 (always best).
    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    pub fn messages(&self, category: Category) -> &[String] {
        self.messages.get(category)
    }

    fn answers_to(&self, query: &str) -> bool {
        self.name.eq_ignore_ascii_case(query) || self.display_name.eq_ignore_ascii_case(query)
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    persona: Vec<PersonaEntry>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PersonaEntry {
    name: String,
    display_name: Option<String>,
    #[serde(default)]
    description: String,
    difficulty: Option<u8>,
    messages: MessagePool,
}

/// Read-only, insertion-ordered set of personas.
#[derive(Clone, Debug)]
pub struct PersonaCatalog {
    personas: Vec<Arc<Persona>>,
}

impl PersonaCatalog {
    /// The eight personas shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_PERSONAS)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EngineError::InvalidCatalog(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(contents)
            .map_err(|e| EngineError::InvalidCatalog(format!("failed to parse TOML: {e}")))?;

        let personas = file
            .persona
            .into_iter()
            .map(|entry| {
                Persona::new(
                    entry.name,
                    entry.display_name,
                    entry.description,
                    entry.difficulty,
                    entry.messages,
                )
                .map(Arc::new)
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(personas)
    }

    pub fn new(personas: Vec<Arc<Persona>>) -> Result<Self> {
        if personas.is_empty() {
            return Err(EngineError::InvalidCatalog(
                "catalog defines no personas".to_string(),
            ));
        }

        let mut names = HashSet::new();
        for p in &personas {
            let mut labels = vec![p.name().to_ascii_lowercase()];
            let display = p.display_name().to_ascii_lowercase();
            if display != labels[0] {
                labels.push(display);
            }
            for label in labels {
                if !names.insert(label.clone()) {
                    return Err(EngineError::InvalidCatalog(format!(
                        "duplicate persona name '{label}'"
                    )));
                }
            }
        }

        debug!(count = personas.len(), "persona catalog loaded");
        Ok(Self { personas })
    }

    pub fn list(&self) -> &[Arc<Persona>] {
        &self.personas
    }

    /// Case-insensitive lookup by name or display name.
    pub fn by_name(&self, name: &str) -> Result<Arc<Persona>> {
        self.personas
            .iter()
            .find(|p| p.answers_to(name.trim()))
            .cloned()
            .ok_or_else(|| EngineError::PersonaNotFound(name.to_string()))
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod catalog_tests;
