//! # Analysis Module
//!
//! Turns a playlist's tracks into a [`Report`](crate::types::Report).
//!
//! ```text
//! tracks ──► FeatureAcquirer ──► [AudioFeatures; n] ──► analyze() ──► Report
//!               │        │
//!               │        └── FeatureEstimator (genre keywords, seeded RNG)
//!               └── FeatureSource (HTTP search, optional)
//! ```
//!
//! - [`analyzer`] - pure aggregation: basic stats, feature averages, top
//!   artists and decade buckets
//! - [`acquirer`] - resolves one feature record per track, batching lookups
//!   against the analysis source and degrading per track on failure
//! - [`estimator`] - rough genre-driven feature estimation
//! - [`source`] - the HTTP implementation of [`acquirer::FeatureSource`]
//!
//! Nothing in this module returns an error for bad data. Missing fields count
//! as zero, missing features are skipped and failed lookups fall back to a
//! fixed default record.

pub mod acquirer;
pub mod analyzer;
pub mod estimator;
pub mod source;

pub use acquirer::{AcquirerConfig, FeatureAcquirer, FeatureSource, LookupError};
pub use analyzer::analyze;
pub use estimator::{FeatureEstimator, TrackMetadata};
pub use source::HttpFeatureSource;
