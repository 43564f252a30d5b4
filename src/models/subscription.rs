//! Resource group and subscription metadata handed over with a selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Azure cloud the source or target subscription lives in.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CloudEnvironment {
    #[default]
    AzureCloud,
    AzureChinaCloud,
    AzureUSGovernment,
    AzureGermanCloud,
}

impl CloudEnvironment {
    /// Host suffix for blob storage endpoints, e.g. `core.windows.net`.
    pub fn blob_endpoint_suffix(&self) -> &'static str {
        match self {
            CloudEnvironment::AzureCloud => "core.windows.net",
            CloudEnvironment::AzureChinaCloud => "core.chinacloudapi.cn",
            CloudEnvironment::AzureUSGovernment => "core.usgovcloudapi.net",
            CloudEnvironment::AzureGermanCloud => "core.cloudapi.de",
        }
    }
}

impl fmt::Display for CloudEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CloudEnvironment::AzureCloud => "AzureCloud",
            CloudEnvironment::AzureChinaCloud => "AzureChinaCloud",
            CloudEnvironment::AzureUSGovernment => "AzureUSGovernment",
            CloudEnvironment::AzureGermanCloud => "AzureGermanCloud",
        };
        write!(f, "{name}")
    }
}

/// Subscription metadata. Only used for blob endpoints and instruction text.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Subscription {
    #[serde(default)]
    pub environment: CloudEnvironment,
    pub tenant_id: Option<Uuid>,
    pub subscription_id: Option<String>,
}

/// Target resource group every generated resource is deployed into.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ResourceGroup {
    pub target_name: String,
    pub target_location: Option<String>,
}

impl fmt::Display for ResourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}
