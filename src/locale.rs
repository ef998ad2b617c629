// SPDX-License-Identifier: PMPL-1.0-or-later

//! Locale resolution into Lua table headers.

use crate::errors::Result;
use crate::types::{LocaleCode, RecordType};

/// Opening line of a lookup fragment, e.g. `LangNameLookup["enUS"] = {`.
pub fn table_header(locale: LocaleCode, record_type: RecordType) -> String {
    format!("{}[\"{}\"] = {{", record_type.table_name(), locale.tag())
}

/// Resolve a raw locale code straight to its table header.
///
/// Fails with a configuration error naming `code` when it is not one of the
/// supported locales.
pub fn resolve_header(code: &str, record_type: RecordType) -> Result<String> {
    let locale = LocaleCode::parse(code)?;
    Ok(table_header(locale, record_type))
}
