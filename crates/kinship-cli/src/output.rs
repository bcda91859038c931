//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::{CommandFailure, Result};
use crate::session::Outcome;
use colored::*;
use kinship_domain::{response, FamilyTree, KinshipError, MemberId};
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

/// Serializable view of a resolved member.
#[derive(Debug, Serialize)]
struct MemberView<'a> {
    name: &'a str,
    gender: &'static str,
}

/// Serializable roster row.
#[derive(Debug, Serialize)]
struct RosterRow<'a> {
    name: &'a str,
    gender: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    spouse: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mother: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    father: Option<&'a str>,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Same format, with color switched on or off.
    pub fn with_color(&self, color_enabled: bool) -> Self {
        Self {
            format: self.format,
            color_enabled,
        }
    }

    /// Format resolved members. An empty list is the `NONE` outcome.
    pub fn format_members(&self, tree: &FamilyTree, members: &[MemberId]) -> Result<String> {
        match self.format {
            OutputFormat::Plain => Ok(response::render(tree, members)?),
            OutputFormat::Json => self.format_members_json(tree, members),
            OutputFormat::Table => self.format_members_table(tree, members),
        }
    }

    /// Format members as JSON.
    fn format_members_json(&self, tree: &FamilyTree, members: &[MemberId]) -> Result<String> {
        if members.is_empty() {
            return Err(KinshipError::NoResult.into());
        }

        let views: Vec<MemberView> = members
            .iter()
            .map(|id| {
                let member = tree.member(*id);
                MemberView {
                    name: member.name(),
                    gender: member.gender().as_str(),
                }
            })
            .collect();

        Ok(serde_json::to_string(&views)?)
    }

    /// Format members as a table.
    fn format_members_table(&self, tree: &FamilyTree, members: &[MemberId]) -> Result<String> {
        if members.is_empty() {
            return Err(KinshipError::NoResult.into());
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Gender"]);
        for id in members {
            let member = tree.member(*id);
            builder.push_record([member.name(), member.gender().as_str()]);
        }

        Ok(self.finish_table(builder))
    }

    /// Format every member of the tree with its closest links.
    pub fn format_roster(&self, tree: &FamilyTree) -> Result<String> {
        let rows: Vec<RosterRow> = tree
            .members()
            .map(|(_, member)| RosterRow {
                name: member.name(),
                gender: member.gender().as_str(),
                spouse: member.spouse().map(|id| tree.name_of(id)),
                mother: member.mother().map(|id| tree.name_of(id)),
                father: member.father().map(|id| tree.name_of(id)),
            })
            .collect();

        if rows.is_empty() {
            return Ok(self.colorize("No members found.", "yellow"));
        }

        if self.format == OutputFormat::Json {
            return Ok(serde_json::to_string_pretty(&rows)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["Name", "Gender", "Spouse", "Mother", "Father"]);
        for row in &rows {
            builder.push_record([
                row.name,
                row.gender,
                row.spouse.unwrap_or("-"),
                row.mother.unwrap_or("-"),
                row.father.unwrap_or("-"),
            ]);
        }

        Ok(self.finish_table(builder))
    }

    /// Render one command outcome as a single output line.
    pub fn outcome(&self, tree: &FamilyTree, outcome: &Outcome) -> String {
        match outcome {
            Outcome::Members(members) => match self.format_members(tree, members) {
                Ok(text) => text,
                Err(crate::error::CliError::Domain(e)) => self.failure(&CommandFailure::new(e)),
                Err(e) => self.error(&e.to_string()),
            },
            Outcome::Added { message, .. } => self.colorize(message, "green"),
        }
    }

    /// Render a failed command as its reported code.
    pub fn failure(&self, failure: &CommandFailure) -> String {
        let color = if failure.source.is_no_result() { "yellow" } else { "red" };
        self.colorize(failure.code, color)
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    fn finish_table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}
