//! # exocatalog - exoplanet catalog enrichment
//!
//! Downloads the confirmed-planet composite table from the NASA Exoplanet
//! Archive, keeps a fixed set of columns, and appends derived fields for
//! visualization: star class, planet type and subtype, a habitability
//! score, display strings, heliocentric coordinates, 40 boolean feature
//! flags, and four normalized color factors.
//!
//! ## Quick Start
//!
//! ```no_run
//! use exocatalog::config::PipelineConfig;
//! use exocatalog::pipeline::process_catalog;
//!
//! # fn example() -> exocatalog::error::Result<()> {
//! let outcome = process_catalog(&PipelineConfig::default())?;
//! println!("{} planets written to {}", outcome.rows, outcome.output.display());
//! println!("{}", outcome.summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Core Modules
//!
//! - [`catalog`]: column allow-list, CSV I/O, typed rows
//! - [`enrich`]: the per-row derivation rules
//! - [`fetch`]: archive download with on-disk cache
//! - [`pipeline`]: the end-to-end processing run
//! - [`report`]: catalog highlights and summaries
//! - [`config`], [`error`], [`logging`]: ambient plumbing
//!
//! ## Absent values
//!
//! The archive leaves many cells empty. Every raw measurement is an
//! `Option`, and a derived value that depends on an absent input is itself
//! absent (an empty CSV cell) rather than a sentinel. Flags are `false` and
//! color factors are the neutral `0.5` when their inputs are unknown.

#![warn(clippy::all, rust_2018_idioms)]

pub mod catalog;
pub mod config;
pub mod enrich;
pub mod error;
pub mod fetch;
pub mod logging;
pub mod pipeline;
pub mod report;
