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
use thiserror::Error;

/// Conditions that abort a site build
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("No element with id `{0}` found")]
    MissingElementId(String),

    #[error("`{path}` has no <time> element with a datetime attribute")]
    MissingTime { path: String },

    #[error("Content file `{0}` collides with the generated index")]
    ReservedName(String),

    #[error("Parsing markdown with {renderer} failed: {reason}")]
    Render {
        renderer: &'static str,
        reason: String,
    },
}
