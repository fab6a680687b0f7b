//! Property information for hast properties.
//!
//! hast stores element attributes under property names (`className`,
//! `htmlFor`, `strokeDashArray`) rather than the attribute names that appear in
//! markup (`class`, `for`, `stroke-dasharray`). This crate answers, for a
//! given schema:
//!
//! - which attribute a property corresponds to,
//! - which namespace (`html`, `svg`, `xml`, `xlink`, `xmlns`) defines it,
//! - how its value is shaped (boolean, number, comma or space separated list).
//!
//! It also carries the table of alternate React-style spellings that JSX
//! runtimes expect for a handful of properties (`classId` → `classID`,
//! `xmlnsXLink` → `xmlnsXlink`).
//!
//! # Example
//!
//! ```rust
//! use hast_jsx_info::{Schema, Space, find, hast_to_react};
//!
//! let info = find(Schema::Html, "className");
//! assert_eq!(info.attribute, "class");
//! assert_eq!(info.space, Some(Space::Html));
//! assert!(info.space_separated);
//!
//! let info = find(Schema::Html, "data-foo-bar");
//! assert_eq!(info.property, "dataFooBar");
//!
//! assert_eq!(hast_to_react("xmlnsXLink"), Some("xmlnsXlink"));
//! ```

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod find;
mod info;
mod naming;
mod react;
mod schema;

pub use find::find;
pub use info::{Info, Schema, Space};
pub use react::hast_to_react;
