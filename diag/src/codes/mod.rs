//! Name tables for Audio Unit status codes and property identifiers.
//!
//! Both tables are compiled-in constant data. Lookups are a linear scan in
//! declared order, so the first entry with a matching code wins.

mod property;
mod status;

use serde::Serialize;

pub use property::{PROPERTY_IDS, property_is_known, resolve_property_name};
pub use status::{STATUS_CODES, resolve_status_name, status_is_known};

/// Maximum length of a fallback property name, in bytes.
pub const MESSAGE_LENGTH: usize = 75;

/// Returned for non-positive status codes that are not in the table.
pub const UNKNOWN_STATUS: &str = "????";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeEntry {
    pub name: &'static str,
    pub code: i32,
}

impl CodeEntry {
    pub const fn new(name: &'static str, code: i32) -> Self {
        Self { name, code }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    Status,
    Property,
}

/// Read-only view over one of the code tables.
#[derive(Debug, Clone, Copy)]
pub struct CodeTable {
    kind: TableKind,
    entries: &'static [CodeEntry],
}

impl CodeTable {
    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn entries(&self) -> std::slice::Iter<'static, CodeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn name_of(&self, code: i32) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.name)
    }

    pub fn code_of(&self, name: &str) -> Option<i32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.code)
    }
}

#[derive(Debug)]
pub struct CodeRegistry {
    status: CodeTable,
    property: CodeTable,
}

static REGISTRY: CodeRegistry = CodeRegistry {
    status: CodeTable {
        kind: TableKind::Status,
        entries: STATUS_CODES,
    },
    property: CodeTable {
        kind: TableKind::Property,
        entries: PROPERTY_IDS,
    },
};

impl CodeRegistry {
    pub fn global() -> &'static CodeRegistry {
        &REGISTRY
    }

    pub fn status(&self) -> CodeTable {
        self.status
    }

    pub fn property(&self) -> CodeTable {
        self.property
    }

    pub fn table(&self, kind: TableKind) -> CodeTable {
        match kind {
            TableKind::Status => self.status,
            TableKind::Property => self.property,
        }
    }

    pub fn status_name(&self, code: i32) -> String {
        resolve_status_name(code)
    }

    pub fn property_name(&self, id: i32) -> String {
        resolve_property_name(id)
    }
}

/// Unpack a four-character code, most significant byte first.
///
/// Each byte maps to the char with the same value, so printable ASCII comes
/// out unchanged and nothing is escaped.
pub fn fourcc(code: i32) -> String {
    code.to_be_bytes().iter().map(|&b| char::from(b)).collect()
}

/// Pack a four-character literal such as `noEr` back into its code.
pub fn parse_fourcc(text: &str) -> Option<i32> {
    let mut bytes = [0u8; 4];
    let mut len = 0;
    for ch in text.chars() {
        if len == 4 {
            return None;
        }
        bytes[len] = u8::try_from(u32::from(ch)).ok()?;
        len += 1;
    }
    if len != 4 {
        return None;
    }
    Some(i32::from_be_bytes(bytes))
}

/// Cut `text` down to at most `max` bytes on a char boundary.
pub(crate) fn truncate_to(text: &mut String, max: usize) {
    if text.len() <= max {
        return;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn fourcc_unpacks_big_endian() {
        assert_eq!(fourcc(0x6E6F4572), "noEr");
        assert_eq!(fourcc(i32::from_be_bytes(*b"lpcm")), "lpcm");
    }

    #[test]
    fn fourcc_passes_control_bytes_through() {
        assert_eq!(fourcc(0x0000_0001), "\0\0\0\u{1}");
    }

    #[test]
    fn parse_fourcc_accepts_only_four_bytes() {
        assert_eq!(parse_fourcc("noEr"), Some(0x6E6F4572));
        assert_eq!(parse_fourcc("abc"), None);
        assert_eq!(parse_fourcc("abcde"), None);
        assert_eq!(parse_fourcc("ab\u{1F600}c"), None);
    }

    #[test]
    fn registry_exposes_both_tables() {
        let registry = CodeRegistry::global();
        assert_eq!(registry.status().kind(), TableKind::Status);
        assert_eq!(registry.property().kind(), TableKind::Property);
        assert_eq!(registry.status().len(), STATUS_CODES.len());
        assert_eq!(registry.table(TableKind::Property).len(), PROPERTY_IDS.len());
    }

    #[test]
    fn reverse_lookup_finds_code() {
        let registry = CodeRegistry::global();
        assert_eq!(
            registry.status().code_of("kAudioUnitErr_InvalidProperty"),
            Some(-10879)
        );
        assert_eq!(
            registry.property().code_of("kAudioUnitProperty_Latency"),
            Some(12)
        );
        assert_eq!(registry.property().code_of("nope"), None);
    }

    #[test]
    fn table_codes_are_unique() {
        for table in [CodeRegistry::global().status(), CodeRegistry::global().property()] {
            let mut seen = HashSet::new();
            for entry in table.entries() {
                assert!(seen.insert(entry.code), "duplicate code {}", entry.code);
            }
        }
    }

    #[test]
    fn truncate_respects_char_boundary() {
        let mut s = String::from("aé");
        truncate_to(&mut s, 2);
        assert_eq!(s, "a");
    }
}
