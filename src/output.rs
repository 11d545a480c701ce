use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::console::Console;
use crate::driver::{self, Variant};
use crate::types::Roster;

/// A finished run, as reported in JSON
#[derive(Debug, Serialize)]
pub struct Report {
    pub variant: Variant,
    pub animals: Roster,
    pub lines: Vec<String>,
}

// Run the demo straight to stdout
pub fn output_text(variant: Variant, color: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    let mut console = Console::new(&mut lock).with_color(color);
    driver::run(variant, &mut console).context("writing demo output")?;
    Ok(())
}

// Run the demo into a buffer and print what it did as JSON
pub fn output_json(variant: Variant) -> Result<()> {
    let report = report(variant)?;
    let json = ::serde_json::to_string_pretty(&report)?;
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    writeln!(lock, "{}", json)?;
    Ok(())
}

pub fn report(variant: Variant) -> Result<Report> {
    let mut buf = Vec::new();
    let animals = {
        let mut console = Console::new(&mut buf);
        driver::run(variant, &mut console)?
    };
    let text = String::from_utf8(buf).context("demo output is not UTF-8")?;
    let lines = text.lines().map(str::to_string).collect();
    Ok(Report {
        variant,
        animals,
        lines,
    })
}
