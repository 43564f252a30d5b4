//! Virtual machine builder: network interfaces, availability set, disks and
//! the copy manifest entries of attached disks.

use super::context::BuildContext;
use super::copy_blob::build_copy_blob_detail;
use super::network_interface::build_network_interface;
use crate::arm::compute::{
    AvailabilitySetProperties, DataDisk, HardwareProfile, ImageReference, NetworkProfile,
    OsDisk, OsProfile, StorageProfile, Vhd, VirtualMachineProperties,
};
use crate::arm::{DependsOn, Reference, Resource, ResourceKind, ResourceProperties};
use crate::config::BuildMode;
use crate::models::{AvailabilitySet, Disk, OsFamily, TargetRef, VirtualMachine};
use itertools::Itertools;

pub const ADMIN_USERNAME_PARAMETER: &str = "adminUsername";
pub const ADMIN_PASSWORD_PARAMETER: &str = "adminPassword";

/// Translate a legacy size name. Unknown sizes pass through.
///
/// ```
/// use arm_migrate::processing::vm_size;
/// assert_eq!(vm_size("ExtraSmall"), "Standard_A0");
/// assert_eq!(vm_size("Standard_D2_v3"), "Standard_D2_v3");
/// ```
pub fn vm_size(size: &str) -> &str {
    match size {
        "ExtraSmall" => "Standard_A0",
        "Small" => "Standard_A1",
        "Medium" => "Standard_A2",
        "Large" => "Standard_A3",
        "ExtraLarge" => "Standard_A4",
        "A5" => "Standard_A5",
        "A6" => "Standard_A6",
        "A7" => "Standard_A7",
        "A8" => "Standard_A8",
        "A9" => "Standard_A9",
        "A10" => "Standard_A10",
        "A11" => "Standard_A11",
        other => other,
    }
}

/// Platform image a fresh machine of `os_family` is provisioned from.
pub fn image_reference(os_family: OsFamily) -> ImageReference {
    let (publisher, offer, sku, version) = match os_family {
        OsFamily::Windows => ("MicrosoftWindowsServer", "WindowsServer", "2016-Datacenter", "latest"),
        OsFamily::Linux => ("Canonical", "UbuntuServer", "16.04.0-LTS", "latest"),
        OsFamily::Unknown => ("<publisher>", "<offer>", "<sku>", "<version>"),
    };
    ImageReference {
        publisher: publisher.to_string(),
        offer: offer.to_string(),
        sku: sku.to_string(),
        version: version.to_string(),
    }
}

fn parameter_reference(name: &str) -> String {
    format!("[parameters('{name}')]")
}

fn build_availability_set(ctx: &mut BuildContext, availability_set: &AvailabilitySet) {
    let kind = ResourceKind::AvailabilitySet;
    if ctx.contains_resource(kind, &availability_set.target_name) {
        return;
    }
    log::info!("Start {}{}", kind.provider_path(), availability_set.target_name);
    ctx.add_resource(Resource::new(
        kind,
        &availability_set.target_name,
        ResourceProperties::AvailabilitySet(AvailabilitySetProperties::default()),
        DependsOn::new(),
    ));
    log::info!("End {}{}", kind.provider_path(), availability_set.target_name);
}

fn vhd(ctx: &BuildContext, disk: &Disk) -> Option<Vhd> {
    disk.target_media_link(ctx.target_environment())
        .map(|uri| Vhd { uri })
}

fn record_copy(ctx: &mut BuildContext, disk: &Disk) {
    match build_copy_blob_detail(disk, ctx.source_environment()) {
        Some(detail) => ctx.add_copy_blob_detail(detail),
        None => log::debug!("Disk '{disk}' has no blob to copy"),
    }
}

pub fn build_virtual_machine(ctx: &mut BuildContext, vm: &VirtualMachine) {
    let kind = ResourceKind::VirtualMachine;
    log::info!("Start {}{}", kind.provider_path(), vm.target_name);

    let build_mode = ctx.settings.build_mode;
    let mut depends_on = DependsOn::new();

    let mut network_interfaces = Vec::with_capacity(vm.network_interfaces.len());
    for nic in &vm.network_interfaces {
        network_interfaces.push(build_network_interface(ctx, nic));
        ctx.depend_on(&mut depends_on, ResourceKind::NetworkInterface, &nic.target_name);
    }

    let availability_set = vm.availability_set.as_ref().map(|availability_set| {
        build_availability_set(ctx, availability_set);
        ctx.depend_on(
            &mut depends_on,
            ResourceKind::AvailabilitySet,
            &availability_set.target_name,
        );
        Reference::to(ResourceKind::AvailabilitySet, &availability_set.target_name)
    });

    let mut os_disk = OsDisk {
        name: vm.os_disk.name.clone(),
        os_type: None,
        vhd: vhd(ctx, &vm.os_disk),
        caching: vm.os_disk.host_caching.clone(),
        create_option: "FromImage".to_string(),
    };

    let (image_reference, os_profile) = match build_mode {
        BuildMode::Empty => {
            ctx.add_parameter(ADMIN_USERNAME_PARAMETER, "string");
            ctx.add_parameter(ADMIN_PASSWORD_PARAMETER, "securestring");
            let os_profile = OsProfile {
                computer_name: vm.target_name.clone(),
                admin_username: parameter_reference(ADMIN_USERNAME_PARAMETER),
                admin_password: parameter_reference(ADMIN_PASSWORD_PARAMETER),
            };
            (Some(image_reference(vm.os_family)), Some(os_profile))
        }
        BuildMode::Attach => {
            os_disk.create_option = "Attach".to_string();
            os_disk.os_type = Some(vm.os_family.to_string());
            record_copy(ctx, &vm.os_disk);
            (None, None)
        }
    };

    let mut data_disks = Vec::with_capacity(vm.data_disks.len());
    for disk in vm
        .data_disks
        .iter()
        .filter(|d| d.target_storage_account.is_some())
    {
        let create_option = match build_mode {
            BuildMode::Empty => "Empty",
            BuildMode::Attach => {
                record_copy(ctx, disk);
                "Attach"
            }
        };
        data_disks.push(DataDisk {
            name: disk.name.clone(),
            vhd: vhd(ctx, disk),
            caching: disk.host_caching.clone(),
            create_option: create_option.to_string(),
            disk_size_gb: disk.disk_size_gb,
            lun: disk.lun,
        });
    }

    // One dependency per distinct storage account this run deploys.
    let storage_accounts: Vec<&str> = vm
        .disks()
        .filter_map(|disk| match &disk.target_storage_account {
            Some(TargetRef::Migrated { name }) => Some(name.as_str()),
            _ => None,
        })
        .unique()
        .collect();
    for account in storage_accounts {
        ctx.depend_on(&mut depends_on, ResourceKind::StorageAccount, account);
    }

    ctx.add_resource(Resource::new(
        kind,
        &vm.target_name,
        ResourceProperties::VirtualMachine(Box::new(VirtualMachineProperties {
            availability_set,
            hardware_profile: HardwareProfile {
                vm_size: vm_size(&vm.target_size).to_string(),
            },
            os_profile,
            storage_profile: StorageProfile {
                image_reference,
                os_disk,
                data_disks,
            },
            network_profile: NetworkProfile { network_interfaces },
        })),
        depends_on,
    ));
    log::info!("End {}{}", kind.provider_path(), vm.target_name);
}
