//! Turn the text of an inline `style` attribute into the object JSX expects.
//!
//! ```rust
//! use hast_jsx_style::{StyleOptions, style_to_object};
//!
//! let object = style_to_object("color: red; background-color: #dedede", &StyleOptions::default())?;
//! assert_eq!(
//!     object,
//!     vec![
//!         ("color".to_string(), "red".to_string()),
//!         ("backgroundColor".to_string(), "#dedede".to_string()),
//!     ]
//! );
//! # Ok::<(), hast_jsx_style::StyleError>(())
//! ```
//!
//! Parsing is lenient in the way browsers are about inline styles: comments
//! are dropped, empty declarations are skipped, and parsing stops quietly
//! where no property can start. Two things are errors: a property without a
//! `:`, and a comment that is never closed.

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod case;
mod error;
mod object;
mod parser;
mod tracing_macros;

pub use case::camel_case;
pub use error::{StyleError, StyleErrorKind};
pub use object::{StyleOptions, style_to_object};
pub use parser::{Declaration, parse};
