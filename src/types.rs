// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for lookup-formatter
//!
//! Locale codes, record kinds and the JSON record shapes read from each
//! locale directory.

use crate::errors::{FormatError, Result};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported input locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    En,
    De,
    Fr,
    Es,
    Ru,
    Cn,
    Pt,
}

const ALL_LOCALES: [LocaleCode; 7] = [
    LocaleCode::En,
    LocaleCode::De,
    LocaleCode::Fr,
    LocaleCode::Es,
    LocaleCode::Ru,
    LocaleCode::Cn,
    LocaleCode::Pt,
];

impl LocaleCode {
    /// Parse an input code. Case-sensitive; anything outside the fixed set is
    /// a configuration error naming the code.
    pub fn parse(code: &str) -> Result<Self> {
        ALL_LOCALES
            .iter()
            .copied()
            .find(|locale| locale.code() == code)
            .ok_or_else(|| {
                FormatError::Configuration(format!(
                    "Language '{}' not supported for formatting!",
                    code
                ))
            })
    }

    pub fn code(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::De => "de",
            LocaleCode::Fr => "fr",
            LocaleCode::Es => "es",
            LocaleCode::Ru => "ru",
            LocaleCode::Cn => "cn",
            LocaleCode::Pt => "pt",
        }
    }

    /// Locale identifier used by the addon runtime (`cn` -> `zhCN`).
    pub fn tag(self) -> &'static str {
        match self {
            LocaleCode::En => "enUS",
            LocaleCode::De => "deDE",
            LocaleCode::Fr => "frFR",
            LocaleCode::Es => "esES",
            LocaleCode::Ru => "ruRU",
            LocaleCode::Cn => "zhCN",
            LocaleCode::Pt => "ptBR",
        }
    }

    pub fn all() -> &'static [LocaleCode] {
        &ALL_LOCALES
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LocaleCode::En
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The four kinds of record a run can convert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Item,
    #[default]
    Npc,
    Object,
    Quest,
}

impl RecordType {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "item" => Ok(RecordType::Item),
            "npc" => Ok(RecordType::Npc),
            "object" => Ok(RecordType::Object),
            "quest" => Ok(RecordType::Quest),
            other => Err(FormatError::Configuration(format!(
                "unknown record type '{}'",
                other
            ))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RecordType::Item => "item",
            RecordType::Npc => "npc",
            RecordType::Object => "object",
            RecordType::Quest => "quest",
        }
    }

    pub fn all() -> &'static [RecordType] {
        &[
            RecordType::Item,
            RecordType::Npc,
            RecordType::Object,
            RecordType::Quest,
        ]
    }

    /// JSON file read from the locale directory.
    pub fn input_file(self) -> &'static str {
        match self {
            RecordType::Item => "item_data.json",
            RecordType::Npc => "npc_data.json",
            RecordType::Object => "object_data.json",
            RecordType::Quest => "quest_data.json",
        }
    }

    /// Lua file written next to the input.
    pub fn output_file(self) -> &'static str {
        match self {
            RecordType::Item => "lookupItems.lua",
            RecordType::Npc => "lookupNpcs.lua",
            RecordType::Object => "lookupObjects.lua",
            RecordType::Quest => "lookupQuests.lua",
        }
    }

    /// Global Lua table the fragment assigns into.
    pub fn table_name(self) -> &'static str {
        match self {
            RecordType::Item => "LangItemLookup",
            RecordType::Npc => "LangNameLookup",
            RecordType::Object => "LangObjectLookup",
            RecordType::Quest => "LangQuestLookup",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer record identifier.
///
/// Data dumps carry ids either as JSON numbers or as numeric strings; both
/// are accepted and normalised to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(pub i64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IdVisitor;

        impl<'de> Visitor<'de> for IdVisitor {
            type Value = RecordId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an integer or an integer-parseable string")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<RecordId, E> {
                Ok(RecordId(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<RecordId, E> {
                i64::try_from(v)
                    .map(RecordId)
                    .map_err(|_| E::custom(format!("id {} out of range", v)))
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<RecordId, E> {
                Err(E::custom(format!("id {} is not an integer", v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<RecordId, E> {
                v.trim()
                    .parse::<i64>()
                    .map(RecordId)
                    .map_err(|_| E::custom(format!("id '{}' is not an integer", v)))
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

/// Record carrying a single localized name (items, NPCs, objects).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedRecord {
    pub id: RecordId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestRecord {
    pub id: RecordId,
    pub title: String,
    pub objective: String,
    pub description: String,
}

/// Anything that can be ordered by its numeric id before emission.
pub trait Keyed {
    fn id(&self) -> RecordId;
}

impl Keyed for NamedRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl Keyed for QuestRecord {
    fn id(&self) -> RecordId {
        self.id
    }
}
