//! # Skald-RS: Documentation Cross-Reference Curation Engine
//!
//! A Rust tool that maintains `@related` cross-reference annotations inside the
//! documentation comments of C-style header files. Every documented entity
//! (function, struct, enum, typedef, macro) may carry a list of related symbol
//! names; skald recomputes and rewrites that list so the three most relevant
//! symbols are listed first, in a stable, reproducible order.
//!
//! The heart of the crate is a pure curation algorithm:
//!
//! - **Override table**: hand-curated golden answers for specific entities
//! - **Lexical scoring**: shared underscore segments, common prefixes, and
//!   base-name family membership
//! - **Bucketed ranking**: function-like symbols are preferred over type-like
//!   symbols, with fully deterministic tie-breaking
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       CLI (skald)                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │   Pipeline   │   Scanner   │   Rewriter   │   Reports       │
//! │              │             │              │                 │
//! │ • Walk tree  │ • @function │ • @related   │ • Text          │
//! │ • Parallel   │ • @struct…  │   rendering  │ • JSON          │
//! │ • Aggregate  │ • @related  │ • EOL keep   │                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │          Core: RelatedCurator (pure, deterministic)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use skald_rs::RelatedCurator;
//!
//! let curator = RelatedCurator::new();
//! let tokens = vec![
//!     "cf_audio_stop".to_string(),
//!     "CF_AUDIO_PARAMS".to_string(),
//!     "cf_audio_pause".to_string(),
//! ];
//! let curated = curator.curate("cf_audio_play", &tokens);
//! assert!(curated.len() <= 3);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Core curation engine modules
pub mod core {
    //! Core curation algorithm, configuration, and error types.

    pub mod config;
    pub mod curator;
    pub mod errors;
}

// Document scanning and line rewriting
pub mod rewrite;
pub mod scan;

// Directory walking and parallel file processing
pub mod pipeline;

// Result aggregation and reporting
pub mod io {
    //! Report aggregation and rendering.

    pub mod reports;
}

// Re-export primary types for convenience
pub use crate::core::config::RelatedConfig;
pub use crate::core::curator::RelatedCurator;
pub use crate::core::errors::{Result, SkaldError};
pub use crate::io::reports::CurationReport;
pub use crate::pipeline::run_curation;

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
