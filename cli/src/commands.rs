//! Command parsing and execution for the `blockshape` binary.

use std::io::Write;

use anyhow::{Context, Result, bail};
use serde_json::json;

use blockshape_core::{ShapeRecord, ShapeRegistry, TriState};

pub const USAGE: &str = "\
usage: blockshape <command>

commands:
  lookup <opcode>...   print the shape of each opcode as JSON
  name <NAME>          print the shape registered under NAME as JSON
  list [category]      print NAME, opcode and attachability of every shape
  categories           print the opcode categories
  help                 print this message";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Lookup(Vec<String>),
    Name(String),
    List(Option<String>),
    Categories,
    Help,
}

impl Command {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let Some(command) = args.next() else {
            return Ok(Command::Help);
        };
        let rest: Vec<String> = args.collect();
        match (command.as_str(), rest.as_slice()) {
            ("lookup", []) => bail!("lookup needs at least one opcode\n\n{USAGE}"),
            ("lookup", _) => Ok(Command::Lookup(rest)),
            ("name", [name]) => Ok(Command::Name(name.clone())),
            ("list", []) => Ok(Command::List(None)),
            ("list", [category]) => Ok(Command::List(Some(category.clone()))),
            ("categories", []) => Ok(Command::Categories),
            ("help" | "--help" | "-h", _) => Ok(Command::Help),
            _ => bail!("unrecognized arguments: {command} {}\n\n{USAGE}", rest.join(" ")),
        }
    }
}

/// Attachability as a tri-state, for display.
fn attachability(record: &ShapeRecord) -> TriState {
    match record.attachable() {
        Ok(attachable) => attachable.into(),
        Err(err) => {
            tracing::debug!(opcode = record.opcode(), %err, "Attachability is indeterminate");
            TriState::Indeterminate
        }
    }
}

pub fn run(command: &Command, registry: &ShapeRegistry, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Lookup(opcodes) => {
            for opcode in opcodes {
                let record = registry.by_opcode(opcode);
                let line = json!({
                    "query": opcode,
                    "known": registry.contains_opcode(opcode),
                    "attachable": attachability(record),
                    "shape": record,
                });
                writeln!(out, "{line}")?;
            }
        }
        Command::Name(name) => {
            let record = registry
                .by_name(name)
                .with_context(|| format!("no shape named {name}"))?;
            let line = json!({
                "name": name,
                "attachable": attachability(record),
                "shape": record,
            });
            writeln!(out, "{line}")?;
        }
        Command::List(category) => {
            for (name, record) in registry.entries() {
                if category
                    .as_deref()
                    .is_some_and(|category| record.category() != category)
                {
                    continue;
                }
                writeln!(out, "{name}\t{}\t{}", record.opcode(), attachability(record))?;
            }
        }
        Command::Categories => {
            for category in registry.categories() {
                writeln!(out, "{category}")?;
            }
        }
        Command::Help => writeln!(out, "{USAGE}")?,
    }
    Ok(())
}
