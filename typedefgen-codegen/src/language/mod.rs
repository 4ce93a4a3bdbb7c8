//! Target language abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for target generators
//! - [`GenerateResult`] - Result of writing generated files
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
