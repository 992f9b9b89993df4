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
mod builder;
mod content;
mod dom;
mod error;
mod index;
mod markdown;
mod template;
mod ui;

#[cfg(test)]
mod tests;

use builder::SiteLayout;
use log::LevelFilter;
use markdown::{CommonMarkParser, MarkdownParser, PandocParser};
use simplelog::{CombinedLogger, TermLogger, TerminalMode};

use std::path::Path;

use clap::Parser;

/// Progress goes to stderr, stdout stays empty
pub(crate) const LOG_TERMINAL_MODE: TerminalMode = TerminalMode::Stderr;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ParserType {
    CommonMark,
    Pandoc,
}

/// Program to generate a static site from markdown files
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Site directory containing content/ and template/template.html
    #[clap(short, long, value_parser, default_value = ".")]
    directory: String,

    /// Markdown renderer
    #[clap(long, value_enum, default_value_t = ParserType::CommonMark)]
    parser: ParserType,

    /// Id of the template element the articles are inserted into
    #[clap(short, long, value_parser, default_value = "content")]
    anchor: String,

    #[clap(short, long, value_parser, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level_filter = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    CombinedLogger::init(vec![TermLogger::new(
        level_filter,
        simplelog::Config::default(),
        LOG_TERMINAL_MODE,
        simplelog::ColorChoice::Auto,
    )])?;

    let mut parser: Box<dyn MarkdownParser> = match args.parser {
        ParserType::CommonMark => Box::new(CommonMarkParser::default()),
        ParserType::Pandoc => Box::new(PandocParser::default()),
    };

    let layout = SiteLayout::from_root(Path::new(&args.directory)).with_anchor(args.anchor);
    let summary = builder::build_site(&layout, parser.as_mut())?;

    log::info!(
        "Generated {} pages and {}",
        summary.pages,
        summary.index.display()
    );

    Ok(())
}
