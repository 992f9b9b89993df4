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
use crate::dom::Fragment;
use crate::markdown::MarkdownParser;

use anyhow::Context;
use std::{collections::BTreeMap, fs, path::Path};

/// Rendered articles keyed by their output file name (`name.md` -> `name.html`)
pub type ContentMap = BTreeMap<String, Fragment>;

/// Returns the output file name for a markdown file, or `None` if `file_name`
/// is not a markdown file.
///
/// Only the exact, lower-case extension `md` counts. A markdown file whose
/// name is not valid UTF-8 is an error.
pub fn output_name(file_name: &Path) -> anyhow::Result<Option<String>> {
    if file_name.extension().map_or(true, |ext| ext != "md") {
        return Ok(None);
    }

    let stem = match file_name.file_stem() {
        Some(stem) => stem,
        None => return Ok(None),
    };
    let stem = stem
        .to_str()
        .with_context(|| format!("File name {} is not valid UTF-8", file_name.display()))?;

    Ok(Some(format!("{}.html", stem)))
}

fn std_read_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed reading {}", path.display()))
}

/// Converts every markdown file directly inside `dir` with `parser`
pub fn load_content(dir: &Path, parser: &mut dyn MarkdownParser) -> anyhow::Result<ContentMap> {
    load_content_with(dir, parser, std_read_file)
}

/// Converts every markdown file directly inside `dir`, reading files with
/// `fs_read_file`.
///
/// Subdirectories and files with other extensions are skipped. The first
/// file that cannot be read or rendered aborts loading.
pub fn load_content_with<ReadFile>(
    dir: &Path,
    parser: &mut dyn MarkdownParser,
    fs_read_file: ReadFile,
) -> anyhow::Result<ContentMap>
where
    ReadFile: Fn(&Path) -> anyhow::Result<String>,
{
    let mut map = ContentMap::new();

    let entries = dir
        .read_dir()
        .with_context(|| format!("Could not read directory {}", dir.display()))?;

    for entry in entries {
        let entry =
            entry.with_context(|| format!("Error in directory {} reading an entry", dir.display()))?;
        let path = entry.path();

        if !path.is_file() {
            log::debug!("Skipping {}, not a regular file", path.display());
            continue;
        }

        let html_name = match output_name(Path::new(&entry.file_name()))? {
            Some(html_name) => html_name,
            None => {
                log::debug!("Skipping {}, not markdown", path.display());
                continue;
            }
        };

        let markdown = fs_read_file(&path)?;
        let html = parser
            .parse_to_html(&markdown)
            .with_context(|| format!("Failed converting {}", path.display()))?;

        log::debug!("Converted {} to {}", path.display(), html_name);
        map.insert(html_name, Fragment::parse(&html));
    }

    Ok(map)
}
