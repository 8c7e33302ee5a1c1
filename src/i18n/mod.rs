//! Internationalization (i18n) module.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated `Language` type and browser language negotiation
//! - `catalog`: Built-in localized strings with canonical fallback
//! - `interpolate`: Splits `{placeholder}` templates into text and rich values
//! - `validator`: Consistency checks between translated and canonical catalogs
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use portfolio_i18n::i18n::{interpolate, render, Catalog, Language};
//!
//! let catalog = Catalog::for_language(Language::detect("zh-TW"));
//! let params = HashMap::from([("hongKong", catalog.message("hongkong.hongKong"))]);
//! let text = render(&interpolate(catalog.message("hongkong.paragraph1"), &params));
//!
//! assert!(text.contains("香港"));
//! ```

mod catalog;
mod interpolate;
mod language;
mod registry;
mod validator;

pub use catalog::Catalog;
pub use interpolate::{interpolate, placeholders, render, Segment};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use validator::{CatalogValidator, ValidationReport};
