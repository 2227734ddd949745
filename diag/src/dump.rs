//! Flat text dumps of structured records for log messages.
//!
//! Any `Serialize` type can be dumped. Fields come out one per line in
//! declared order:
//!
//! ```text
//! StreamFormat {
//!   sample_rate = 48000.0
//!   channels = 2
//! }
//! ```
//!
//! [`render_struct`] accumulates into a per-thread buffer capped at
//! [`STRUCT_MESSAGE_LENGTH`] bytes; anything past the cap is dropped.

use crate::stats;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::io::{self, Write};

/// Capacity of the dump buffer, in bytes.
pub const STRUCT_MESSAGE_LENGTH: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub value: String,
}

pub trait Describe {
    fn type_label(&self) -> String;
    fn describe_fields(&self) -> Vec<Field>;
}

impl<T: Serialize + ?Sized> Describe for T {
    fn type_label(&self) -> String {
        short_type_name(std::any::type_name::<T>())
    }

    fn describe_fields(&self) -> Vec<Field> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map
                .into_iter()
                .map(|(name, value)| Field {
                    name,
                    value: value.to_string(),
                })
                .collect(),
            Ok(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(i, value)| Field {
                    name: i.to_string(),
                    value: value.to_string(),
                })
                .collect(),
            Ok(other) => vec![Field {
                name: "value".to_string(),
                value: other.to_string(),
            }],
            Err(err) => vec![Field {
                name: "error".to_string(),
                value: err.to_string(),
            }],
        }
    }
}

/// Strips module paths: `a::b::Foo<c::Bar>` becomes `Foo<Bar>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut ident = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            ident.clear();
        } else if c.is_alphanumeric() || c == '_' {
            ident.push(c);
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(c);
        }
    }
    out.push_str(&ident);
    out
}

fn walk_fields(label: &str, fields: &[Field], mut emit: impl FnMut(&str)) {
    emit(&format!("{label} {{\n"));
    for field in fields {
        emit(&format!("  {} = {}\n", field.name, field.value));
    }
    emit("}\n");
}

#[derive(Debug)]
struct DumpBuffer {
    text: String,
    truncated: bool,
}

impl DumpBuffer {
    fn new() -> Self {
        Self {
            text: String::with_capacity(STRUCT_MESSAGE_LENGTH),
            truncated: false,
        }
    }

    fn clear(&mut self) {
        self.text.clear();
        self.truncated = false;
    }

    fn push(&mut self, fragment: &str) {
        let room = STRUCT_MESSAGE_LENGTH - self.text.len();
        if fragment.len() <= room {
            self.text.push_str(fragment);
            return;
        }
        let mut end = room;
        while !fragment.is_char_boundary(end) {
            end -= 1;
        }
        self.text.push_str(&fragment[..end]);
        self.truncated = true;
    }
}

thread_local! {
    static DUMP_BUFFER: RefCell<DumpBuffer> = RefCell::new(DumpBuffer::new());
}

pub fn render_struct<T: Describe + ?Sized>(value: &T) -> String {
    // Collected before borrowing the buffer so a Serialize impl that dumps
    // another record does not hit an active borrow.
    let label = value.type_label();
    let fields = value.describe_fields();

    DUMP_BUFFER.with_borrow_mut(|buf| {
        buf.clear();
        walk_fields(&label, &fields, |fragment| buf.push(fragment));
        if buf.truncated {
            stats::record_dump_truncation();
        }
        buf.text.clone()
    })
}

/// Same traversal as [`render_struct`], unbounded, written straight to `out`.
pub fn print_struct_to<T: Describe + ?Sized, W: Write>(value: &T, out: &mut W) {
    let label = value.type_label();
    let fields = value.describe_fields();
    let mut failed = false;
    walk_fields(&label, &fields, |fragment| {
        if !failed && out.write_all(fragment.as_bytes()).is_err() {
            failed = true;
        }
    });
    let _ = out.flush();
}

pub fn print_struct<T: Describe + ?Sized>(value: &T) {
    print_struct_to(value, &mut io::stdout().lock());
}
