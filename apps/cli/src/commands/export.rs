// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::path::Path;

use anyhow::{Context, Result};
use homeplan_core::{score_layout, ExportDocument};

use super::load_scene;
use crate::config::Config;

/// Build the export document for a saved layout, followed by its text report.
pub fn run(config: &Config, path: &Path, name: &str, area: f64, snap: bool) -> Result<String> {
    let store = load_scene(path, config.grid_size, snap)?;
    let layout = store.to_layout();

    // Scores are optional in the document; an empty layout exports without them.
    let scores = match score_layout(&layout, area) {
        Ok(score) => Some(score),
        Err(err) => {
            tracing::warn!(error = %err, "Exporting without scores");
            None
        }
    };

    let document = ExportDocument::new(name, layout, scores);
    let json = document
        .to_json(config.pretty_json)
        .context("failed to serialize export document")?;
    Ok(format!("{json}\n\n{}", document.report()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_export_includes_document_and_report() {
        let path = fixtures::write("export", &fixtures::layout().to_json().unwrap());
        let output = run(&fixtures::config(), &path, "Cabin", 160_000.0, false).unwrap();
        let (json, report) = output.split_once("\n\n").unwrap();

        let document: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(document["projectName"], "Cabin");
        assert_eq!(document["layout"]["rooms"].as_array().unwrap().len(), 2);
        assert!(document["scores"]["overall"].is_u64());

        assert!(report.starts_with("Cabin\n"));
        assert!(report.contains("Living Room: 10 × 8 units"));
        assert!(report.contains("Overall Score: "));
        std::fs::remove_file(path).ok();
    }
}
