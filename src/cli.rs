use anyhow::Context;
use aulog_diag::codes::{property_is_known, status_is_known};
use aulog_diag::{
    CodeRegistry, DiagnosticLogger, LoggerConfig, Severity, TableKind, aulog, parse_fourcc,
    print_struct,
};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "aulog", version, about = "Audio Unit status codes and diagnostic logging")]
pub struct Cli {
    /// TOML logger configuration
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Name an OSStatus (decimal, 0x hex, or four-character code)
    Status {
        #[arg(value_parser = parse_code, allow_hyphen_values = true)]
        code: i32,
        #[arg(long)]
        json: bool,
    },
    /// Name an AudioUnitPropertyID
    Property {
        #[arg(value_parser = parse_code, allow_hyphen_values = true)]
        id: i32,
        #[arg(long)]
        json: bool,
    },
    /// Print a whole code table
    List {
        #[arg(value_enum)]
        table: TableArg,
        #[arg(long)]
        json: bool,
    },
    /// Send a message through the system log and the optional log file
    Log {
        #[arg(long, value_parser = parse_severity)]
        level: Option<Severity>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        message: Vec<String>,
    },
    /// Show the effective logger configuration
    Config,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum TableArg {
    Status,
    Property,
}

impl From<TableArg> for TableKind {
    fn from(value: TableArg) -> Self {
        match value {
            TableArg::Status => TableKind::Status,
            TableArg::Property => TableKind::Property,
        }
    }
}

#[derive(Debug, Serialize)]
struct Lookup {
    table: TableKind,
    code: i32,
    name: String,
    known: bool,
}

pub fn parse_code(text: &str) -> Result<i32, String> {
    let trimmed = text.trim();
    if let Ok(code) = trimmed.parse::<i32>() {
        return Ok(code);
    }
    if let Some(hex) = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        return u32::from_str_radix(hex, 16)
            .map(|v| v as i32)
            .map_err(|e| format!("invalid hex code '{text}': {e}"));
    }
    let literal = trimmed
        .strip_prefix('\'')
        .and_then(|s| s.strip_suffix('\''))
        .unwrap_or(trimmed);
    parse_fourcc(literal).ok_or_else(|| {
        format!("'{text}' is not a decimal, 0x hex or four-character code")
    })
}

fn parse_severity(text: &str) -> Result<Severity, String> {
    text.parse::<Severity>().map_err(|e| e.to_string())
}

pub fn run(command: Command, config: &LoggerConfig) -> anyhow::Result<()> {
    let registry = CodeRegistry::global();
    match command {
        Command::Status { code, json } => {
            let lookup = Lookup {
                table: TableKind::Status,
                code,
                name: registry.status_name(code),
                known: status_is_known(code),
            };
            print_lookup(&lookup, json)
        }
        Command::Property { id, json } => {
            let lookup = Lookup {
                table: TableKind::Property,
                code: id,
                name: registry.property_name(id),
                known: property_is_known(id),
            };
            print_lookup(&lookup, json)
        }
        Command::List { table, json } => {
            let table = registry.table(table.into());
            if json {
                let entries: Vec<_> = table.entries().collect();
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in table.entries() {
                    println!("{}\t{}", entry.code, entry.name);
                }
            }
            Ok(())
        }
        Command::Log {
            level,
            file,
            message,
        } => {
            let mut config = config.clone();
            if let Some(file) = file {
                config.log_file = Some(file);
            }
            let logger = DiagnosticLogger::from_config(&config);
            aulog!(logger, level.unwrap_or(config.level), "{}", message.join(" "));
            Ok(())
        }
        Command::Config => {
            print_struct(config);
            Ok(())
        }
    }
}

fn print_lookup(lookup: &Lookup, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string(lookup).context("failed to encode lookup")?;
        println!("{text}");
    } else {
        println!("{}", lookup.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_codes() {
        assert_eq!(parse_code("-10879"), Ok(-10879));
        assert_eq!(parse_code("64056"), Ok(64056));
    }

    #[test]
    fn parses_hex_codes() {
        assert_eq!(parse_code("0x6E6F4572"), Ok(0x6E6F4572));
        assert_eq!(parse_code("0xFFFFFFCE"), Ok(-50));
    }

    #[test]
    fn parses_fourcc_literals() {
        assert_eq!(parse_code("noEr"), Ok(0x6E6F4572));
        assert_eq!(parse_code("'!dat'"), Ok(i32::from_be_bytes(*b"!dat")));
    }

    #[test]
    fn fourcc_literal_is_trimmed() {
        assert_eq!(parse_code(" noEr "), Ok(0x6E6F4572));
        assert_eq!(parse_code(" 'noEr' "), Ok(0x6E6F4572));
    }

    #[test]
    fn cli_accepts_message_starting_with_negative_status() {
        let cli = Cli::try_parse_from(["aulog", "log", "-10875", "happened"]).unwrap();
        match cli.command {
            Command::Log { message, .. } => assert_eq!(message, ["-10875", "happened"]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_code("toolong").is_err());
        assert!(parse_code("0xZZ").is_err());
    }

    #[test]
    fn cli_parses_negative_status() {
        let cli = Cli::try_parse_from(["aulog", "status", "-10868"]).unwrap();
        assert!(matches!(cli.command, Command::Status { code: -10868, json: false }));
    }

    #[test]
    fn cli_collects_log_message_words() {
        let cli = Cli::try_parse_from([
            "aulog", "log", "--level", "error", "render", "failed",
        ])
        .unwrap();
        match cli.command {
            Command::Log { level, message, .. } => {
                assert_eq!(level, Some(Severity::Error));
                assert_eq!(message, ["render", "failed"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
