// SPDX-License-Identifier: PMPL-1.0-or-later

//! Formatter: one conversion run for a (locale, record type) pair.
//!
//! Loads `<type>_data.json` from `<output_root>/<locale>/`, sorts it by id and
//! rewrites the matching `lookup*.lua` fragment in the same directory.

use crate::config::FormatterConfig;
use crate::errors::{FormatError, Result};
use crate::filter::{to_lua_token, TextFilter, LUA_NIL};
use crate::locale::table_header;
use crate::lua::LuaTableWriter;
use crate::types::{Keyed, LocaleCode, NamedRecord, QuestRecord, RecordType};
use colored::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Outcome of a single run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub locale: LocaleCode,
    pub record_type: RecordType,
    pub input: PathBuf,
    pub output: PathBuf,
    pub entries_loaded: usize,
    pub entries_written: usize,
    /// Object records dropped because their name cannot be a table key.
    pub entries_skipped: usize,
}

pub struct Formatter {
    config: FormatterConfig,
}

/// Per-run state shared by the record handlers.
struct Run<'a> {
    formatter: &'a Formatter,
    locale: LocaleCode,
    record_type: RecordType,
    dir: PathBuf,
    filter: TextFilter,
}

impl Formatter {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Convert one record type for one locale.
    ///
    /// The locale is validated before anything touches the filesystem.
    pub fn run(&self, locale_code: &str, record_type: RecordType) -> Result<RunSummary> {
        let locale = LocaleCode::parse(locale_code)?;
        let dir = self.ensure_locale_dir(locale)?;
        let run = Run {
            formatter: self,
            locale,
            record_type,
            dir,
            filter: TextFilter::new(locale),
        };

        match record_type {
            RecordType::Item | RecordType::Npc => run.id_to_name(),
            RecordType::Object => run.name_to_id(),
            RecordType::Quest => run.quests(),
        }
    }

    /// Create `<output_root>/<locale>` if missing. Idempotent.
    fn ensure_locale_dir(&self, locale: LocaleCode) -> Result<PathBuf> {
        let dir = self.config.locale_dir(locale.code());
        if !dir.exists() {
            self.notice(&format!(
                "Directory for language '{}' doesn't exist. Creating it...",
                locale
            ));
            fs::create_dir_all(&dir).map_err(|e| FormatError::from_io(&dir, e))?;
        }
        Ok(dir)
    }

    fn notice(&self, message: &str) {
        if !self.config.quiet {
            println!("{}", message.dimmed());
        }
    }
}

impl Run<'_> {
    fn input_path(&self) -> PathBuf {
        self.dir.join(self.record_type.input_file())
    }

    fn output_path(&self) -> PathBuf {
        self.dir.join(self.record_type.output_file())
    }

    fn load<T: DeserializeOwned + Keyed>(&self) -> Result<Vec<T>> {
        let path = self.input_path();
        self.formatter.notice(&format!(
            "Loading '{}'...",
            self.record_type.input_file()
        ));
        let records = load_records(&path)?;
        self.formatter
            .notice(&format!("Data contains {} entries", records.len()));
        Ok(records)
    }

    /// Truncate the output and start the table. Only called once the input
    /// has loaded cleanly.
    fn open_table(&self) -> Result<(PathBuf, LuaTableWriter<BufWriter<File>>)> {
        let path = self.output_path();
        let file = File::create(&path).map_err(|e| FormatError::from_io(&path, e))?;
        let header = table_header(self.locale, self.record_type);
        let writer = LuaTableWriter::begin(BufWriter::new(file), &header)
            .map_err(|e| FormatError::from_io(&path, e))?;
        Ok((path, writer))
    }

    fn summary(&self, output: PathBuf, loaded: usize, written: usize) -> RunSummary {
        RunSummary {
            locale: self.locale,
            record_type: self.record_type,
            input: self.input_path(),
            output,
            entries_loaded: loaded,
            entries_written: written,
            entries_skipped: loaded - written,
        }
    }

    /// Items and NPCs: `[<id>] = <name>,`
    fn id_to_name(&self) -> Result<RunSummary> {
        let records: Vec<NamedRecord> = self.load()?;
        let (path, mut table) = self.open_table()?;
        let io_err = |e| FormatError::from_io(&path, e);

        for record in &records {
            let name = self.filter.apply(&record.name);
            table.id_to_value(record.id, &name).map_err(io_err)?;
        }
        let written = table.finish().map_err(io_err)?;
        Ok(self.summary(path, records.len(), written))
    }

    /// Objects: `[<name>] = <id>,`, skipping names that cannot be keys.
    fn name_to_id(&self) -> Result<RunSummary> {
        let records: Vec<NamedRecord> = self.load()?;
        let (path, mut table) = self.open_table()?;
        let io_err = |e| FormatError::from_io(&path, e);

        for record in &records {
            let escaped = self.filter.escape(&record.name);
            if !is_object_key(&escaped) {
                continue;
            }
            table
                .value_to_id(&to_lua_token(&escaped), record.id)
                .map_err(io_err)?;
        }
        let written = table.finish().map_err(io_err)?;
        Ok(self.summary(path, records.len(), written))
    }

    /// Quests: `[<id>] = {<title>, <description>, <objective>},`
    fn quests(&self) -> Result<RunSummary> {
        let records: Vec<QuestRecord> = self.load()?;
        let (path, mut table) = self.open_table()?;
        let io_err = |e| FormatError::from_io(&path, e);

        for record in &records {
            let title = self.filter.apply(&record.title);
            let objective = self.filter.apply(&record.objective);
            let description = self.filter.apply(&record.description);
            // description is emitted before objective
            table
                .id_to_tuple(
                    record.id,
                    &[title.as_str(), description.as_str(), objective.as_str()],
                )
                .map_err(io_err)?;
        }
        let written = table.finish().map_err(io_err)?;
        Ok(self.summary(path, records.len(), written))
    }
}

/// Placeholder names (`[PH]`-style), empty names and the literal `nil`
/// never become object keys.
fn is_object_key(escaped: &str) -> bool {
    !(escaped.is_empty() || escaped == LUA_NIL || escaped.starts_with('['))
}

/// Read a JSON array of records and stable-sort it ascending by id.
///
/// Duplicate ids are kept in input order.
pub fn load_records<T: DeserializeOwned + Keyed>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).map_err(|e| FormatError::from_io(path, e))?;
    let mut records: Vec<T> = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            FormatError::Io {
                path: path.to_path_buf(),
                source: e.into(),
            }
        } else {
            FormatError::malformed(path, e)
        }
    })?;
    records.sort_by_key(|record| record.id());
    Ok(records)
}

/// Print a run summary to the terminal
pub fn print_summary(summary: &RunSummary) {
    println!(
        "{} {} ({}) -> {}",
        "Wrote".green().bold(),
        summary.record_type,
        summary.locale.tag(),
        summary.output.display()
    );
    println!(
        "  Loaded: {}  |  Written: {}  |  Skipped: {}",
        summary.entries_loaded, summary.entries_written, summary.entries_skipped
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn object_key_rules() {
        assert!(is_object_key("Rock"));
        assert!(is_object_key("Rock [old]"));
        assert!(!is_object_key("[PH] Rock"));
        assert!(!is_object_key("nil"));
        assert!(!is_object_key(""));
    }

    #[test]
    fn load_sorts_numerically_and_keeps_duplicates_in_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("npc_data.json");
        fs::write(
            &path,
            r#"[{"id":"10","name":"B"},{"id":2,"name":"A"},{"id":"10","name":"C"}]"#,
        )
        .unwrap();
        let records: Vec<NamedRecord> = load_records(&path).unwrap();
        let order: Vec<(i64, &str)> = records
            .iter()
            .map(|r| (r.id.0, r.name.as_str()))
            .collect();
        assert_eq!(order, vec![(2, "A"), (10, "B"), (10, "C")]);
    }

    #[test]
    fn load_error_kinds() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("item_data.json");
        assert!(matches!(
            load_records::<NamedRecord>(&missing),
            Err(FormatError::NotFound { .. })
        ));

        let bad = dir.path().join("bad.json");
        fs::write(&bad, "{not json").unwrap();
        assert!(matches!(
            load_records::<NamedRecord>(&bad),
            Err(FormatError::MalformedInput { .. })
        ));

        let no_name = dir.path().join("no_name.json");
        fs::write(&no_name, r#"[{"id": 1}]"#).unwrap();
        assert!(matches!(
            load_records::<NamedRecord>(&no_name),
            Err(FormatError::MalformedInput { .. })
        ));
    }

    #[test]
    fn summary_counts_skips() {
        let dir = TempDir::new().unwrap();
        let locale_dir = dir.path().join("en");
        fs::create_dir_all(&locale_dir).unwrap();
        fs::write(
            locale_dir.join("object_data.json"),
            r#"[{"id":1,"name":"[PH]"},{"id":2,"name":"Chest"},{"id":3,"name":""}]"#,
        )
        .unwrap();

        let formatter = Formatter::new(FormatterConfig::new(dir.path()).quiet(true));
        let summary = formatter.run("en", RecordType::Object).unwrap();
        assert_eq!(summary.entries_loaded, 3);
        assert_eq!(summary.entries_written, 1);
        assert_eq!(summary.entries_skipped, 2);
        assert_eq!(summary.output, locale_dir.join("lookupObjects.lua"));
    }
}
