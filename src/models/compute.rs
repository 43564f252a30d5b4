//! Storage accounts, disks, network interfaces and virtual machines.

use super::{CloudEnvironment, PublicIp, TargetRef};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct StorageAccount {
    pub target_name: String,
    /// e.g. `Standard_LRS` or `Premium_LRS`.
    pub account_type: String,
}

impl StorageAccount {
    pub fn is_premium(&self) -> bool {
        self.account_type.starts_with("Premium")
    }
}

impl fmt::Display for StorageAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AvailabilitySet {
    pub target_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OsFamily {
    Windows,
    Linux,
    #[default]
    Unknown,
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OsFamily::Windows => write!(f, "Windows"),
            OsFamily::Linux => write!(f, "Linux"),
            OsFamily::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Where a blob lives and how to read it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlobCoordinates<'a> {
    pub account: &'a str,
    pub container: &'a str,
    pub blob: &'a str,
    pub key: Option<&'a str>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LegacyDisk {
    pub storage_account_name: String,
    pub storage_account_container: String,
    pub storage_account_blob: String,
    pub primary_key: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StorageKey {
    pub key_name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ManagerDisk {
    pub storage_account_name: String,
    pub storage_account_container: String,
    pub storage_account_blob: String,
    #[serde(default)]
    pub keys: Vec<StorageKey>,
}

/// The disk a target disk is copied from, tagged by source model.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum SourceDisk {
    Legacy(LegacyDisk),
    Manager(ManagerDisk),
}

impl SourceDisk {
    pub fn coordinates(&self) -> BlobCoordinates<'_> {
        match self {
            SourceDisk::Legacy(disk) => BlobCoordinates {
                account: &disk.storage_account_name,
                container: &disk.storage_account_container,
                blob: &disk.storage_account_blob,
                key: disk.primary_key.as_deref(),
            },
            SourceDisk::Manager(disk) => BlobCoordinates {
                account: &disk.storage_account_name,
                container: &disk.storage_account_container,
                blob: &disk.storage_account_blob,
                key: disk.keys.first().map(|k| k.value.as_str()),
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Disk {
    pub name: String,
    /// `None`, `ReadOnly` or `ReadWrite`.
    pub host_caching: String,
    pub disk_size_gb: Option<u32>,
    pub lun: Option<u32>,
    pub source: Option<SourceDisk>,
    pub target_storage_account: Option<TargetRef>,
    #[serde(default)]
    pub target_container: String,
    #[serde(default)]
    pub target_blob: String,
}

impl Disk {
    /// Blob URI of the target vhd, when a target storage account is set.
    pub fn target_media_link(&self, environment: CloudEnvironment) -> Option<String> {
        self.target_storage_account.as_ref().map(|account| {
            format!(
                "https://{account}.blob.{suffix}/{container}/{blob}",
                account = account.name(),
                suffix = environment.blob_endpoint_suffix(),
                container = self.target_container,
                blob = self.target_blob,
            )
        })
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Membership of an IP configuration in a load balancer sub-resource.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancerMember {
    pub load_balancer: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NetworkInterfaceIpConfiguration {
    pub name: String,
    pub target_virtual_network: Option<TargetRef>,
    pub target_subnet: Option<String>,
    #[serde(default = "default_private_allocation")]
    pub private_ip_allocation_method: String,
    pub private_ip_address: Option<String>,
    pub back_end_address_pool: Option<LoadBalancerMember>,
    #[serde(default)]
    pub inbound_nat_rules: Vec<LoadBalancerMember>,
    pub public_ip: Option<PublicIp>,
}

fn default_private_allocation() -> String {
    "Dynamic".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NetworkInterface {
    pub target_name: String,
    #[serde(default)]
    pub ip_configurations: Vec<NetworkInterfaceIpConfiguration>,
    /// Target name of the associated network security group.
    pub network_security_group: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default)]
    pub enable_ip_forwarding: bool,
}

impl fmt::Display for NetworkInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VirtualMachine {
    pub target_name: String,
    /// Legacy or current size token, e.g. `Small` or `Standard_D2_v3`.
    pub target_size: String,
    #[serde(default)]
    pub os_family: OsFamily,
    pub availability_set: Option<AvailabilitySet>,
    pub os_disk: Disk,
    #[serde(default)]
    pub data_disks: Vec<Disk>,
    #[serde(default)]
    pub network_interfaces: Vec<NetworkInterface>,
}

impl VirtualMachine {
    /// OS disk followed by data disks.
    pub fn disks(&self) -> impl Iterator<Item = &Disk> {
        std::iter::once(&self.os_disk).chain(self.data_disks.iter())
    }
}

impl fmt::Display for VirtualMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_disk_coordinates() {
        let legacy = SourceDisk::Legacy(LegacyDisk {
            storage_account_name: "asmstore".to_string(),
            storage_account_container: "vhds".to_string(),
            storage_account_blob: "os.vhd".to_string(),
            primary_key: Some("k1".to_string()),
        });
        let coords = legacy.coordinates();
        assert_eq!(coords.account, "asmstore");
        assert_eq!(coords.key, Some("k1"));

        let manager = SourceDisk::Manager(ManagerDisk {
            storage_account_name: "armstore".to_string(),
            storage_account_container: "vhds".to_string(),
            storage_account_blob: "data.vhd".to_string(),
            keys: vec![
                StorageKey {
                    key_name: "key1".to_string(),
                    value: "first".to_string(),
                },
                StorageKey {
                    key_name: "key2".to_string(),
                    value: "second".to_string(),
                },
            ],
        });
        assert_eq!(manager.coordinates().key, Some("first"));
        assert_eq!(manager.coordinates().blob, "data.vhd");
    }

    #[test]
    fn test_target_media_link() {
        let disk = Disk {
            name: "os".to_string(),
            target_storage_account: Some(TargetRef::migrated("newstore")),
            target_container: "vhds".to_string(),
            target_blob: "vm01-os.vhd".to_string(),
            ..Default::default()
        };
        assert_eq!(
            disk.target_media_link(CloudEnvironment::AzureCloud).as_deref(),
            Some("https://newstore.blob.core.windows.net/vhds/vm01-os.vhd")
        );
        assert!(Disk::default()
            .target_media_link(CloudEnvironment::AzureCloud)
            .is_none());
    }

    #[test]
    fn test_is_premium() {
        let sa = StorageAccount {
            target_name: "p".to_string(),
            account_type: "Premium_LRS".to_string(),
        };
        assert!(sa.is_premium());
    }
}
