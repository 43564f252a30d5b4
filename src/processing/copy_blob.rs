//! Copy manifest entries for disks attached from copied blobs.

use crate::models::{CloudEnvironment, Disk, TargetRef};
use serde::Serialize;

/// One blob copy the operator runs before deploying the template.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CopyBlobDetail {
    pub source_environment: String,
    pub source_account: String,
    pub source_container: String,
    pub source_blob: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key: Option<String>,
    pub destination_account: String,
    pub destination_container: String,
    pub destination_blob: String,
}

/// Build the copy entry for `disk`.
///
/// Returns `None` for disks that have nothing to copy from, or nowhere to copy to.
pub fn build_copy_blob_detail(
    disk: &Disk,
    source_environment: CloudEnvironment,
) -> Option<CopyBlobDetail> {
    let source = disk.source.as_ref()?;
    let destination = disk.target_storage_account.as_ref().map(TargetRef::name)?;
    let coordinates = source.coordinates();

    Some(CopyBlobDetail {
        source_environment: source_environment.to_string(),
        source_account: coordinates.account.to_string(),
        source_container: coordinates.container.to_string(),
        source_blob: coordinates.blob.to_string(),
        source_key: coordinates.key.map(str::to_string),
        destination_account: destination.to_string(),
        destination_container: disk.target_container.clone(),
        destination_blob: disk.target_blob.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LegacyDisk, ManagerDisk, SourceDisk};

    fn disk(source: Option<SourceDisk>) -> Disk {
        Disk {
            name: "vm01-os".to_string(),
            source,
            target_storage_account: Some(TargetRef::migrated("armstore")),
            target_container: "vhds".to_string(),
            target_blob: "vm01-os.vhd".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_legacy_disk_entry() {
        let detail = build_copy_blob_detail(
            &disk(Some(SourceDisk::Legacy(LegacyDisk {
                storage_account_name: "asmstore".to_string(),
                storage_account_container: "vhds".to_string(),
                storage_account_blob: "old-os.vhd".to_string(),
                primary_key: Some("secret".to_string()),
            }))),
            CloudEnvironment::AzureCloud,
        )
        .expect("Expected a copy entry");
        assert_eq!(detail.source_account, "asmstore");
        assert_eq!(detail.source_key.as_deref(), Some("secret"));
        assert_eq!(detail.destination_account, "armstore");
        assert_eq!(detail.destination_container, "vhds");
        assert_eq!(detail.destination_blob, "vm01-os.vhd");
    }

    #[test]
    fn test_manager_disk_without_key_omits_field() {
        let detail = build_copy_blob_detail(
            &disk(Some(SourceDisk::Manager(ManagerDisk {
                storage_account_name: "src".to_string(),
                storage_account_container: "vhds".to_string(),
                storage_account_blob: "data.vhd".to_string(),
                keys: Vec::new(),
            }))),
            CloudEnvironment::AzureChinaCloud,
        )
        .expect("Expected a copy entry");
        let json = serde_json::to_value(&detail).expect("Error serializing");
        assert_eq!(json["sourceEnvironment"], "AzureChinaCloud");
        assert!(json.get("sourceKey").is_none());
        assert_eq!(json["destinationBlob"], "vm01-os.vhd");
    }

    #[test]
    fn test_no_source_no_entry() {
        assert!(build_copy_blob_detail(&disk(None), CloudEnvironment::AzureCloud).is_none());
    }
}
