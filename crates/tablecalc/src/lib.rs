//! Table interpolation calculator.
//!
//! Three fixed lookup tables feed a short chain of formulas that blend two
//! scalars, `r` and `k`, into one final result.
//!
//! # Data flow
//!
//! ```text
//! driver  →  formula  →  interpolate  →  tables
//! (stdin)    (Engine)    (Policy)        (U, T, GTEXT)
//! ```
//!
//! # Tables
//!
//! | Table | Keys | Entries |
//! |-------|------|---------|
//! | `U` | -5.0 ..= 5.0, step 0.5 | 21 |
//! | `T` | -10.0 ..= 10.0, step 1.0 | 21 |
//! | `GTEXT` | three-letter codes | 20 |
//!
//! # Lookup policies
//!
//! - **Strict**: out-of-span queries and unknown text keys are errors.
//! - **Lenient**: numeric queries clamp to the nearest boundary and unknown
//!   text keys pass `x` through unchanged.
//!
//! # Example
//!
//! ```
//! use tablecalc::{Engine, Inputs, Policy};
//!
//! let engine = Engine::new(Policy::Strict);
//! let eval = engine.evaluate(&Inputs::new(1.0, 0.5, 0.5, "set")).unwrap();
//! assert_eq!(format!("{:.4}", eval.k), "2.5000");
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Fixed lookup tables (U, T, GTEXT)
pub mod tables;

// Linear interpolation with strict or clamped boundaries
pub mod interpolate;

// Formula chain: Qqn → Qnk → Rnk → func, CText → RText, Variant
pub mod formula;

// Error taxonomy
pub mod error;

// Policy, output format and TOML configuration
pub mod config;

// Interactive stdin/stdout driver
pub mod driver;

pub use config::{Config, ConfigError, OutputFormat, Policy};
pub use driver::{run, Outcome, TokenReader};
pub use error::{CalcError, DriverError, Shown};
pub use formula::{max4, variant, Engine, Evaluation, Inputs};
pub use interpolate::interpolate;
pub use tables::{NumericTable, TextTable, GTEXT, T, U};
