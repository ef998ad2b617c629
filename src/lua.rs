// SPDX-License-Identifier: PMPL-1.0-or-later

//! Line-oriented writer for a single Lua table-assignment statement.

use std::io::{self, Write};

use crate::types::RecordId;

pub struct LuaTableWriter<W: Write> {
    out: W,
    entries: usize,
}

impl<W: Write> LuaTableWriter<W> {
    /// Start the table by writing its header line, e.g. `LangItemLookup["enUS"] = {`.
    pub fn begin(mut out: W, header: &str) -> io::Result<Self> {
        writeln!(out, "{}", header)?;
        Ok(Self { out, entries: 0 })
    }

    /// `[<id>] = <value>,`
    pub fn id_to_value(&mut self, id: RecordId, value: &str) -> io::Result<()> {
        self.entry(&id.to_string(), value)
    }

    /// `[<key>] = <id>,` for tables keyed by text.
    pub fn value_to_id(&mut self, key: &str, id: RecordId) -> io::Result<()> {
        self.entry(key, &id.to_string())
    }

    /// `[<id>] = {<v1>, <v2>, ...},`
    pub fn id_to_tuple(&mut self, id: RecordId, values: &[&str]) -> io::Result<()> {
        let tuple = format!("{{{}}}", values.join(", "));
        self.entry(&id.to_string(), &tuple)
    }

    fn entry(&mut self, key: &str, value: &str) -> io::Result<()> {
        writeln!(self.out, "[{}] = {},", key, value)?;
        self.entries += 1;
        Ok(())
    }

    pub fn entries(&self) -> usize {
        self.entries
    }

    /// Close the table and flush. Returns the number of entries written.
    pub fn finish(mut self) -> io::Result<usize> {
        writeln!(self.out, "}}")?;
        self.out.flush()?;
        Ok(self.entries)
    }
}
