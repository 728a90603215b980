//! Console reports over a whole catalog.
//!
//! These are the only cross-row computations in the crate. They read rows
//! and their enrichments but never feed anything back into them.

use crate::catalog::CatalogRow;
use crate::enrich::{Enrichment, PlanetType, StarClass};
use serde::Serialize;
use std::fmt;

const TOP_DISCOVERY_METHODS: usize = 5;
const TOP_STAR_CLASSES: usize = 8;
const TOP_SCORES: usize = 5;

/// Counts occurrences, most frequent first; ties keep first-seen order.
fn ranked<K: PartialEq>(keys: impl IntoIterator<Item = K>) -> Vec<(K, usize)> {
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(70))?;
    writeln!(f, "{title}")?;
    writeln!(f, "{}", "=".repeat(70))
}

/// Quick facts printed after a download.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogHighlights {
    pub total_planets: usize,
    pub unique_hosts: usize,
    pub habitable_zone: usize,
    pub earth_sized: usize,
    pub circumbinary: usize,
    /// Name and distance [pc] of the nearest planet with a known distance
    pub closest: Option<(String, f64)>,
    pub discovery_methods: Vec<(String, usize)>,
}

impl CatalogHighlights {
    pub fn new(rows: &[CatalogRow], enriched: &[Enrichment]) -> Self {
        let flags = || enriched.iter().map(|e| e.flags);

        let mut hosts: Vec<&str> = rows.iter().filter_map(|r| r.hostname.as_deref()).collect();
        hosts.sort_unstable();
        hosts.dedup();

        let closest = rows
            .iter()
            .filter_map(|r| r.sy_dist.map(|d| (r, d)))
            // min_by keeps the first of equal elements
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(r, d)| (r.pl_name.clone().unwrap_or_else(|| "unnamed".to_owned()), d));

        let mut discovery_methods = ranked(
            rows.iter()
                .filter_map(|r| r.discoverymethod.as_deref())
                .map(str::to_owned),
        );
        discovery_methods.truncate(TOP_DISCOVERY_METHODS);

        Self {
            total_planets: rows.len(),
            unique_hosts: hosts.len(),
            habitable_zone: flags().filter(|f| f.is_habitable_zone).count(),
            earth_sized: flags().filter(|f| f.is_earth_like).count(),
            circumbinary: flags().filter(|f| f.is_circumbinary).count(),
            closest,
            discovery_methods,
        }
    }
}

impl fmt::Display for CatalogHighlights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "CATALOG HIGHLIGHTS")?;
        writeln!(f, "Total planets:            {}", self.total_planets)?;
        writeln!(f, "Unique host stars:        {}", self.unique_hosts)?;
        writeln!(f, "Habitable zone (200-320K): {}", self.habitable_zone)?;
        writeln!(f, "Earth-sized (0.8-1.25 R⊕): {}", self.earth_sized)?;
        writeln!(f, "Circumbinary planets:     {}", self.circumbinary)?;
        if let Some((name, parsecs)) = &self.closest {
            writeln!(f, "Closest planet:           {name} ({parsecs:.2} pc)")?;
        }
        if !self.discovery_methods.is_empty() {
            writeln!(f, "\nTop discovery methods:")?;
            for (method, count) in &self.discovery_methods {
                writeln!(f, "  {method:<30} {count:>6}")?;
            }
        }
        Ok(())
    }
}

/// End-of-run summary of the enriched catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogSummary {
    pub total_planets: usize,
    pub total_columns: usize,
    pub planet_types: Vec<(PlanetType, usize)>,
    pub star_classes: Vec<(StarClass, usize)>,
    pub habitable_zone: usize,
    pub earth_sized: usize,
    pub habitable_and_earth_sized: usize,
    pub top_scores: Vec<(String, f64)>,
}

impl CatalogSummary {
    pub fn new(rows: &[CatalogRow], enriched: &[Enrichment], total_columns: usize) -> Self {
        let planet_types = ranked(enriched.iter().filter_map(|e| e.planet_type));

        let mut star_classes = ranked(enriched.iter().filter_map(|e| e.star_class));
        star_classes.truncate(TOP_STAR_CLASSES);

        let habitable_zone = enriched.iter().filter(|e| e.flags.is_habitable_zone).count();
        let earth_sized = enriched.iter().filter(|e| e.flags.is_earth_like).count();
        let habitable_and_earth_sized = enriched
            .iter()
            .filter(|e| e.flags.is_habitable_zone && e.flags.is_earth_like)
            .count();

        let mut scored: Vec<(String, f64)> = rows
            .iter()
            .zip(enriched)
            .map(|(row, e)| {
                let name = row.pl_name.clone().unwrap_or_else(|| "unnamed".to_owned());
                (name, e.habitability_score)
            })
            .collect();
        // Stable, so equal scores stay in input order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(TOP_SCORES);

        Self {
            total_planets: enriched.len(),
            total_columns,
            planet_types,
            star_classes,
            habitable_zone,
            earth_sized,
            habitable_and_earth_sized,
            top_scores: scored,
        }
    }
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        heading(f, "PROCESSING SUMMARY")?;
        writeln!(f, "Total planets: {}", self.total_planets)?;
        writeln!(f, "Total columns: {}", self.total_columns)?;

        writeln!(f, "\nPlanet types:")?;
        for (kind, count) in &self.planet_types {
            writeln!(f, "  {:<20} {count:>6}", kind.as_str())?;
        }

        writeln!(f, "\nStar classes:")?;
        for (class, count) in &self.star_classes {
            writeln!(f, "  {:<20} {count:>6}", class.as_str())?;
        }

        writeln!(f, "\nHabitability:")?;
        writeln!(f, "  In habitable zone:     {}", self.habitable_zone)?;
        writeln!(f, "  Earth-sized:           {}", self.earth_sized)?;
        writeln!(f, "  Both:                  {}", self.habitable_and_earth_sized)?;

        writeln!(f, "\nTop habitability scores:")?;
        for (name, score) in &self.top_scores {
            writeln!(f, "  {name:<30} {score:>5.1}")?;
        }
        Ok(())
    }
}
