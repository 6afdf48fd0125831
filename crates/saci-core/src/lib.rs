//! Saci Core Library
//!
//! Turns NUnit-style XML test results into compliance reports.
//!
//! # Features
//! - XML to nested mapping conversion with `@`-prefixed attribute keys
//! - Recursive attribute-marker stripping
//! - Normalization of test cases into flat control results
//! - HTML report rendering and PDF conversion via wkhtmltopdf

pub mod config;
pub mod document;
pub mod error;
pub mod keys;
pub mod normalize;
pub mod pdf;
pub mod precheck;
pub mod render;
pub mod report;
pub mod xml;

pub use config::Config;
pub use error::{Error, Result, SaciError};
pub use keys::{strip_keys, strip_keys_with};
pub use normalize::{build_controlresult, build_controlresults, ControlResult};
pub use pdf::{PdfConverter, Wkhtmltopdf};
pub use precheck::{binary_check, precheck, BinaryStatus, PrecheckReport};
pub use render::{render_html, ReportContext, Summary};
pub use report::{generate, ReportOptions, ReportOutcome};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "saci";
