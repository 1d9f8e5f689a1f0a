// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use anyhow::{Context, Result};
use homeplan_core::{generate_variants, score, Score, Variant};
use serde::Serialize;

use super::to_json;
use crate::config::Config;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredVariant {
    #[serde(flatten)]
    variant: Variant,
    score: Score,
}

/// Generate variants and attach a score to each.
pub fn run(config: &Config, bedrooms: u32, area: f64, style: Option<&str>) -> Result<String> {
    let style = style.unwrap_or(&config.variant_style);
    let variants = generate_variants(bedrooms, area, style).context("failed to generate variants")?;

    let scored = variants
        .into_iter()
        .map(|variant| {
            let score = score(&variant.rooms, &[], area)?;
            Ok::<_, homeplan_core::Error>(ScoredVariant { variant, score })
        })
        .collect::<homeplan_core::Result<Vec<_>>>()
        .context("failed to score variants")?;

    tracing::info!(count = scored.len(), bedrooms, "Generated variants");
    to_json(&scored, config.pretty_json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_variants_are_scored() {
        let output = run(&fixtures::config(), 2, 2000.0, None).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let variants = value.as_array().unwrap();
        assert_eq!(variants.len(), 3);
        for variant in variants {
            assert!(variant["id"].is_string());
            assert!(variant["rooms"].as_array().unwrap().len() >= 4);
            assert!(variant["score"]["overall"].as_u64().unwrap() <= 100);
        }
    }

    #[test]
    fn test_variants_reject_bad_area() {
        assert!(run(&fixtures::config(), 2, 0.0, Some("modern")).is_err());
    }
}
