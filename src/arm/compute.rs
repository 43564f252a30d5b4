//! Properties of generated storage and compute resources.

use super::Reference;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageAccountProperties {
    pub account_type: String,
}

/// Availability sets carry no properties of their own.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilitySetProperties {}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HardwareProfile {
    pub vm_size: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OsProfile {
    pub computer_name: String,
    pub admin_username: String,
    pub admin_password: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub publisher: String,
    pub offer: String,
    pub sku: String,
    pub version: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Vhd {
    pub uri: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OsDisk {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhd: Option<Vhd>,
    pub caching: String,
    pub create_option: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DataDisk {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vhd: Option<Vhd>,
    pub caching: String,
    pub create_option: String,
    #[serde(rename = "diskSizeGB", skip_serializing_if = "Option::is_none")]
    pub disk_size_gb: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lun: Option<u32>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StorageProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_reference: Option<ImageReference>,
    pub os_disk: OsDisk,
    pub data_disks: Vec<DataDisk>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterfaceReferenceProperties {
    pub primary: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterfaceReference {
    pub id: String,
    pub properties: NetworkInterfaceReferenceProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkProfile {
    pub network_interfaces: Vec<NetworkInterfaceReference>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualMachineProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_set: Option<Reference>,
    pub hardware_profile: HardwareProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_profile: Option<OsProfile>,
    pub storage_profile: StorageProfile,
    pub network_profile: NetworkProfile,
}
