/*
 *  md-site-builder generate a static site from markdown files
 *  Copyright (C) 2022 Fionn Langhans
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  You should have received a copy of the GNU General Public License
 */
use super::MarkdownParser;
use crate::error::SiteError;

use anyhow::Context;
use std::{
    io::Write,
    process::{self, Stdio},
};

/// Renders markdown by piping it through an external `pandoc` process
pub struct PandocParser {
    program: String,
}

impl PandocParser {
    /// Uses `program` instead of `pandoc` from `PATH`
    pub fn with_program(program: impl Into<String>) -> Self {
        PandocParser {
            program: program.into(),
        }
    }
}

impl Default for PandocParser {
    fn default() -> Self {
        PandocParser::with_program("pandoc")
    }
}

impl MarkdownParser for PandocParser {
    fn parse_to_html(&mut self, markdown: &str) -> anyhow::Result<String> {
        let mut handle = process::Command::new(&self.program)
            .args(["-f", "markdown"])
            .args(["-t", "html5"])
            .arg("-")
            .args(["-o", "-"])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("Failed starting {}", self.program))?;

        // stdin has to be closed before pandoc produces any output
        let written = match handle.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(markdown.as_bytes())
                .context("Failed writing markdown to pandoc"),
            None => Err(anyhow::anyhow!("pandoc stdin is not available")),
        };

        // A pandoc that died early closes its stdin, its stderr says why
        let output = handle.wait_with_output()?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(SiteError::Render {
                renderer: "pandoc",
                reason: if stderr.is_empty() {
                    output.status.to_string()
                } else {
                    stderr
                },
            }
            .into());
        }
        written?;

        String::from_utf8(output.stdout).map_err(|err| {
            SiteError::Render {
                renderer: "pandoc",
                reason: err.to_string(),
            }
            .into()
        })
    }
}
