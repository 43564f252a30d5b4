//! References from one selected resource to another target resource.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Points at a target resource, either deployed by this run or already present.
///
/// ```
/// use arm_migrate::models::TargetRef;
/// let r: TargetRef = serde_json::from_str(r#"{"placement":"migrated","name":"vnet01"}"#).unwrap();
/// assert_eq!(r.name(), "vnet01");
/// assert!(r.is_migrated());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(tag = "placement", rename_all = "snake_case")]
pub enum TargetRef {
    /// Part of the selection; deployed by the generated template.
    Migrated { name: String },
    /// Already exists in the target subscription, addressed by full resource id.
    Existing { name: String, id: String },
}

impl TargetRef {
    pub fn migrated(name: impl Into<String>) -> TargetRef {
        TargetRef::Migrated { name: name.into() }
    }

    pub fn existing(name: impl Into<String>, id: impl Into<String>) -> TargetRef {
        TargetRef::Existing {
            name: name.into(),
            id: id.into(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TargetRef::Migrated { name } | TargetRef::Existing { name, .. } => name,
        }
    }

    pub fn is_migrated(&self) -> bool {
        matches!(self, TargetRef::Migrated { .. })
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A subnet inside a target virtual network.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRef {
    pub virtual_network: TargetRef,
    pub subnet: String,
}
