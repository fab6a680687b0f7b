//! A small slice of [ESTree](https://github.com/estree/estree): the expression
//! nodes needed to describe JavaScript values, plus the `Program` wrapper MDX
//! uses to carry an expression inside an attribute.
//!
//! Nodes serialize with serde to the usual ESTree JSON shape (`{"type":
//! "Literal", "value": 1}`), so they can be handed to any tool that consumes
//! ESTree.
//!
//! [`value_to_estree`] turns a [`serde_json::Value`] into the expression that
//! evaluates to it:
//!
//! ```rust
//! use hast_jsx_estree::{Expression, value_to_estree};
//! use serde_json::json;
//!
//! let expression = value_to_estree(&json!({ "color": "red" }));
//! assert!(matches!(expression, Expression::ObjectExpression(_)));
//! ```

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

mod encode;
mod node;

pub use encode::{number_to_estree, value_to_estree};
pub use node::*;
