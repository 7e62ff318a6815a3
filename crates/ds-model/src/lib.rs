//! Data standard model definitions.
//!
//! A data standard is a forest of [`Category`] records that link to shared
//! [`Attribute`] records by id. Attributes carry an [`AttributeType`] which may
//! itself link to further attributes (composite types).
//!
//! Field names follow the camelCase layout of the source JSON documents.

pub mod attribute;
pub mod category;
pub mod row;
pub mod standard;

pub use attribute::{Attribute, AttributeGroup, AttributeLink, AttributeType};
pub use category::Category;
pub use row::{REPORT_HEADER, ReportRow};
pub use standard::DataStandard;
