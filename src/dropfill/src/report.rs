//! `REPLACE INTO drop_data` script rendering.

use crate::error::{DropfillError, Result};
use crate::table::ChanceTable;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: [&str; 2] = [
    " # SQL File autogenerated by dropfill from existing drop_data associations.",
    " # Generated data takes into account mob stats such as level and boss for the chance rates.",
];

const STATEMENT: &str = concat!(
    "  REPLACE INTO drop_data (`dropperid`, `itemid`, `minimum_quantity`, ",
    "`maximum_quantity`, `questid`, `chance`) VALUES",
);

const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 1;
const NO_QUEST: u32 = 0;

/// How the last row of the statement is terminated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingSeparator {
    /// Every row ends with `,`, including the last. Matches older generated
    /// scripts byte for byte, but is not a valid statement on its own.
    #[default]
    Keep,
    /// The last row has no separator
    Trim,
    /// The last row ends with `;`
    Semicolon,
}

impl TrailingSeparator {
    fn last_row(self) -> &'static str {
        match self {
            Self::Keep => ",",
            Self::Trim => "",
            Self::Semicolon => ";",
        }
    }
}

impl std::fmt::Display for TrailingSeparator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Keep => write!(f, "keep"),
            Self::Trim => write!(f, "trim"),
            Self::Semicolon => write!(f, "semicolon"),
        }
    }
}

impl std::str::FromStr for TrailingSeparator {
    type Err = String;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Self::Keep),
            "trim" => Ok(Self::Trim),
            "semicolon" => Ok(Self::Semicolon),
            _ => Err(format!(
                "invalid trailing separator '{}' (expected keep, trim or semicolon)",
                s
            )),
        }
    }
}

/// Renders a [`ChanceTable`] as a proposal script
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    pub trailing_separator: TrailingSeparator,
}

impl ReportWriter {
    pub fn new(trailing_separator: TrailingSeparator) -> Self {
        Self { trailing_separator }
    }

    /// Write the header, statement line and one row per entry
    pub fn render<W: Write>(&self, table: &ChanceTable, out: &mut W) -> std::io::Result<()> {
        for line in HEADER {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", STATEMENT)?;

        let last = table.len().saturating_sub(1);
        for (i, entry) in table.entries().enumerate() {
            let separator = if i == last {
                self.trailing_separator.last_row()
            } else {
                ","
            };
            writeln!(
                out,
                "({}, {}, {}, {}, {}, {}){}",
                entry.key.monster_id,
                entry.key.item_id,
                MIN_QUANTITY,
                MAX_QUANTITY,
                NO_QUEST,
                entry.chance,
                separator
            )?;
        }

        Ok(())
    }

    /// Render into a string
    pub fn render_to_string(&self, table: &ChanceTable) -> std::io::Result<String> {
        let mut buf = Vec::new();
        self.render(table, &mut buf)?;
        String::from_utf8(buf)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Write the script to `path`, replacing any existing file.
    ///
    /// The caller must not point `path` at a file that needs to be kept.
    /// Parent directories are created. A failed write may leave a truncated
    /// file behind.
    pub fn write_to_path<P: AsRef<Path>>(&self, table: &ChanceTable, path: P) -> Result<()> {
        let path = path.as_ref();
        let output_error = |source| DropfillError::OutputWrite {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(output_error)?;
        }

        let file = File::create(path).map_err(output_error)?;
        let mut out = BufWriter::new(file);
        self.render(table, &mut out).map_err(output_error)?;
        out.flush().map_err(output_error)?;

        Ok(())
    }
}
