//! Transform [hast](https://github.com/syntax-tree/hast) element properties
//! into [`mdxJsxAttribute`](https://github.com/syntax-tree/mdast-util-mdx-jsx#mdxjsxattribute)
//! nodes.
//!
//! ```rust
//! use hast_jsx::{AttributeValue, Options, Properties, properties_to_mdx_jsx_attributes};
//!
//! let mut properties = Properties::new();
//! properties.insert("className", vec!["button", "primary"]);
//! properties.insert("disabled", true);
//! properties.insert("hidden", false);
//!
//! let attributes = properties_to_mdx_jsx_attributes(&properties, &Options::default())?;
//!
//! assert_eq!(attributes.len(), 2);
//! assert_eq!(attributes[0].name, "className");
//! assert_eq!(attributes[0].value, AttributeValue::Text("button primary".into()));
//! assert_eq!(attributes[1].name, "disabled");
//! assert_eq!(attributes[1].value, AttributeValue::Absent);
//! # Ok::<(), hast_jsx::StyleError>(())
//! ```
//!
//! Property keys are resolved against the html or svg schema of
//! [`hast_jsx_info`]. Namespaced properties get their React spelling unless
//! [`NameCase::Html`] is chosen, a `style` string becomes an object
//! expression, and a [`transform`](Options::transform) can replace any value
//! before it is classified.

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod attribute;
mod collaborators;
mod mapper;
mod number;
mod options;
mod properties;
mod tracing_macros;

pub use attribute::{AttributeValue, MdxJsxAttribute};
pub use collaborators::{
    EstreeEncoder, InfoSchema, InlineStyle, NameCasing, PropertySchema, ReactCasing, StyleParser,
    ValueEncoder,
};
pub use mapper::{AttributeMapper, properties_to_mdx_jsx_attributes};
pub use number::format_number;
pub use options::{NameCase, Options, Transform, TransformedValue};
pub use properties::{ListItem, Properties, PropertyValue};

pub use hast_jsx_estree::Expression;
pub use hast_jsx_info::Schema;
pub use hast_jsx_style::StyleError;
