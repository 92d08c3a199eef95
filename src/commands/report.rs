//! Progress lines, warnings and the JSON run summary
//!
//! Human format prints progress on stdout (unless `--quiet`) and warnings
//! on stderr as they happen. JSON format stays silent until the run ends,
//! then prints one summary object on stdout.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::path::Path;

use serde::Serialize;

use crate::cli::Cli;
use pathrider_core::error::Result;
use pathrider_core::format::OutputFormat;
use pathrider_core::graph::Direction;
use pathrider_core::query::QueryWarning;

#[derive(Debug, Serialize)]
struct Summary {
    command: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    direction: Option<Direction>,
    counts: BTreeMap<&'static str, usize>,
    outputs: Vec<WrittenFile>,
    warnings: Vec<WarningEntry>,
    dropped_nodes: Vec<DroppedNode>,
}

#[derive(Debug, Serialize)]
struct WrittenFile {
    path: String,
    rows: usize,
}

#[derive(Debug, Serialize)]
struct WarningEntry {
    subject: String,
    #[serde(flatten)]
    warning: QueryWarning,
    message: String,
}

#[derive(Debug, Serialize)]
struct DroppedNode {
    path: String,
    node: String,
}

/// Collects what a command did and reports it in the requested format
pub struct Reporter<'a> {
    cli: &'a Cli,
    summary: Summary,
}

impl<'a> Reporter<'a> {
    pub fn new(cli: &'a Cli, command: &'static str) -> Self {
        Self {
            cli,
            summary: Summary {
                command,
                direction: None,
                counts: BTreeMap::new(),
                outputs: Vec::new(),
                warnings: Vec::new(),
                dropped_nodes: Vec::new(),
            },
        }
    }

    fn human(&self) -> bool {
        self.cli.format == OutputFormat::Human
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.summary.direction = Some(direction);
    }

    pub fn progress(&self, message: impl Display) {
        if self.human() && !self.cli.quiet {
            println!("{}", message);
        }
    }

    pub fn count(&mut self, name: &'static str, value: usize) {
        self.summary.counts.insert(name, value);
    }

    pub fn warn(&mut self, subject: impl Display, warning: QueryWarning) {
        let subject = subject.to_string();
        let message = warning.to_string();
        if self.human() {
            eprintln!("warning: {}: {}", subject, message);
        }
        self.summary.warnings.push(WarningEntry {
            subject,
            warning,
            message,
        });
    }

    pub fn dropped(&mut self, path: &Path, nodes: &[String]) {
        for node in nodes {
            if self.human() {
                eprintln!("warning: {}: {} not in network", path.display(), node);
            }
            self.summary.dropped_nodes.push(DroppedNode {
                path: path.display().to_string(),
                node: node.clone(),
            });
        }
    }

    pub fn written(&mut self, path: &Path, rows: usize) {
        self.summary.outputs.push(WrittenFile {
            path: path.display().to_string(),
            rows,
        });
    }

    /// Print the JSON summary when requested
    pub fn finish(self) -> Result<()> {
        if !self.human() {
            println!("{}", serde_json::to_string_pretty(&self.summary)?);
        }
        Ok(())
    }
}
