// SPDX-License-Identifier: PMPL-1.0-or-later

//! Text filtering from raw localized strings to Lua string tokens.
//!
//! Backslashes are dropped rather than escaped, double quotes are escaped,
//! and an empty result becomes the bare `nil` token instead of `""`.

use crate::types::LocaleCode;

/// Lua token emitted for empty text.
pub const LUA_NIL: &str = "nil";

/// Russian grammatical-gender markup the addon runtime cannot render,
/// paired with the plain placeholder that replaces it.
const RU_DECLENSION_PLACEHOLDERS: &[(&str, &str)] = &[
    ("|3-6(<раса>)", "<раса>"),
    ("|3-1(<класс>)", "<класс>"),
    ("|3-2(<класс>)", "<класс>"),
    ("|3-6(<класс>)", "<класс>"),
];

#[derive(Debug, Clone, Copy)]
pub struct TextFilter {
    locale: LocaleCode,
}

impl TextFilter {
    pub fn new(locale: LocaleCode) -> Self {
        Self { locale }
    }

    /// Escaped, unquoted body of `text`.
    pub fn escape(&self, text: &str) -> String {
        let mut escaped = text.replace('\\', "").replace('"', "\\\"");
        if self.locale == LocaleCode::Ru {
            for (markup, plain) in RU_DECLENSION_PLACEHOLDERS {
                escaped = escaped.replace(markup, plain);
            }
        }
        escaped
    }

    /// Lua token for `text`: a quoted string literal, or `nil` when nothing is left.
    pub fn apply(&self, text: &str) -> String {
        to_lua_token(&self.escape(text))
    }
}

/// Wrap an already escaped body in quotes, mapping the empty body to `nil`.
pub fn to_lua_token(escaped: &str) -> String {
    if escaped.is_empty() {
        LUA_NIL.to_string()
    } else {
        format!("\"{}\"", escaped)
    }
}
