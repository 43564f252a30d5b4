//! Target deployment-template model.
//!
//! - [`reference`] - dependency identifiers and property references
//! - [`template`] - the template document and its resources
//! - [`network`] / [`compute`] - per-kind resource properties

pub mod compute;
pub mod network;
mod reference;
mod template;

pub use reference::{
    child_id, resource_id, DependsOn, Reference, ResourceKind, API_VERSION, RESOURCE_GROUP_ID,
    RESOURCE_GROUP_LOCATION,
};
pub use template::{
    Parameter, Resource, ResourceProperties, Template, CONTENT_VERSION, TEMPLATE_SCHEMA,
};
