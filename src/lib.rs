// SPDX-License-Identifier: PMPL-1.0-or-later

//! lookup-formatter: localized game-data JSON to Lua lookup tables.
//!
//! Each run reads one `<type>_data.json` array from a locale directory and
//! writes one `lookup*.lua` fragment assigning a table literal into the
//! addon's global lookup (`LangItemLookup`, `LangNameLookup`,
//! `LangObjectLookup` or `LangQuestLookup`) under the runtime locale tag.
//!
//! PIPELINE:
//! 1. **Resolve**: locale code to runtime tag (`cn` -> `zhCN`).
//! 2. **Load**: JSON array into typed records, stable-sorted by integer id.
//! 3. **Filter**: each text field to a Lua token (quoted string or `nil`).
//! 4. **Emit**: header line, one line per record, closing `}`.

pub mod config;
pub mod errors;
pub mod filter;
pub mod formatter;
pub mod locale;
pub mod lua;
pub mod types;

pub use config::{ConfigFile, FormatterConfig};
pub use errors::{FormatError, Result};
pub use formatter::{Formatter, RunSummary};
pub use types::{LocaleCode, RecordType};
