/**
 * Relco
 * Copyright (C) 2026 the relco developers
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program. If not, see <http://www.gnu.org/licenses/>.
 */

extern crate serde_json;

use std::io;
use std::io::prelude::*;
use std::io::stdout;
use std::fs::File;
use std::path::Path;

use corpus::Corpus;

/// Serializes the related coins of every corpus coin into a single JSON
/// object, keyed by coin id. The keys are sorted, so two runs over the same
/// corpus produce byte-identical artifacts.
fn related_artifact(all_related: &[Vec<String>], corpus: &Corpus) -> String {

    let mut mapping = serde_json::Map::new();

    for (position, related_ids) in all_related.iter().enumerate() {
        let coin_id = corpus.coin_id(position as u32);
        mapping.insert(coin_id.to_string(), json!(related_ids));
    }

    json!(mapping).to_string()
}

/// Output the related coins in JSON format, using the original coin ids from
/// the inputfile. If an `output_path` is supplied, we write to a file at the
/// specified path, otherwise, we output to stdout. The artifact is assembled
/// in memory first, so a file only ever comes into existence for a complete
/// run.
pub fn write_related(
    all_related: &[Vec<String>],
    corpus: &Corpus,
    output_path: Option<String>,
) -> io::Result<()> {

    let artifact = related_artifact(all_related, corpus);

    let mut out: Box<Write> = match output_path {
        Some(path) => Box::new(File::create(&Path::new(&path))?),
        _ => Box::new(stdout())
    };

    write!(out, "{}\n", artifact)?;

    Ok(())
}
