//! The selected resource graph handed to the generator.
//!
//! Built once per run by the selection layer and read-only afterwards.

use super::{
    LoadBalancer, NetworkSecurityGroup, ResourceGroup, StorageAccount, Subscription,
    VirtualMachine, VirtualNetwork,
};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Selection {
    pub resource_group: Option<ResourceGroup>,
    pub source_subscription: Option<Subscription>,
    pub target_subscription: Option<Subscription>,
    #[serde(default)]
    pub network_security_groups: Vec<NetworkSecurityGroup>,
    #[serde(default)]
    pub virtual_networks: Vec<VirtualNetwork>,
    #[serde(default)]
    pub load_balancers: Vec<LoadBalancer>,
    #[serde(default)]
    pub storage_accounts: Vec<StorageAccount>,
    #[serde(default)]
    pub virtual_machines: Vec<VirtualMachine>,
}

impl Selection {
    /// Read a selection document from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the selection JSON
    ///
    /// # Returns
    /// * `Ok(Selection)` - The parsed selection
    /// * `Err` - If the file is missing or does not match the reference model
    pub fn load(path: &Path) -> Result<Selection> {
        let json = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Reading selection from {}", path.display());
        Selection::from_json(&json).map_err(|e| match e {
            Error::Parse {
                json_path, message, ..
            } => Error::Parse {
                path: path.to_path_buf(),
                json_path,
                message,
            },
            other => other,
        })
    }

    /// Parse a selection from a JSON string.
    pub fn from_json(json: &str) -> Result<Selection> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(&mut deserializer).map_err(|e| Error::Parse {
            path: Default::default(),
            json_path: e.path().to_string(),
            message: e.inner().to_string(),
        })
    }

    pub fn seek_network_security_group(&self, name: &str) -> Option<&NetworkSecurityGroup> {
        self.network_security_groups
            .iter()
            .find(|n| n.target_name == name)
    }

    pub fn seek_virtual_network(&self, name: &str) -> Option<&VirtualNetwork> {
        self.virtual_networks.iter().find(|v| v.target_name == name)
    }

    pub fn seek_load_balancer(&self, name: &str) -> Option<&LoadBalancer> {
        self.load_balancers.iter().find(|l| l.target_name == name)
    }

    pub fn seek_storage_account(&self, name: &str) -> Option<&StorageAccount> {
        self.storage_accounts.iter().find(|s| s.target_name == name)
    }

    /// Target location of the resource group, if one was chosen.
    pub fn target_location(&self) -> Option<&str> {
        self.resource_group
            .as_ref()
            .and_then(|rg| rg.target_location.as_deref())
    }
}
