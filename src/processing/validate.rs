//! Checks a selection before templates are built.
//!
//! Findings are advisory: generation always runs afterwards so the operator
//! sees the full picture.

use crate::models::{
    Alert, Disk, FrontEndBinding, LoadBalancer, NetworkInterface, Selection, Subject, SubjectKind,
    SubnetRef, TargetRef, VirtualMachine,
};

/// Inspect the selection and list every finding, in a stable order.
///
/// # Arguments
/// * `selection` - The selected resources
///
/// # Returns
/// Alerts in rule order: resource group, security groups, load balancers, virtual machines
pub fn validate(selection: &Selection) -> Vec<Alert> {
    log::info!("#Start validate()");
    let mut alerts = Vec::new();

    validate_resource_group(selection, &mut alerts);

    for nsg in &selection.network_security_groups {
        if nsg.target_name.is_empty() {
            alerts.push(Alert::error(
                "Target Name for Network Security Group must be specified.",
                Subject::new(SubjectKind::NetworkSecurityGroup, &nsg.target_name),
            ));
        }
    }

    for lb in &selection.load_balancers {
        let subject = Subject::new(SubjectKind::LoadBalancer, &lb.target_name);
        if lb.target_name.is_empty() {
            alerts.push(Alert::error(
                "Target Name for Load Balancer must be specified.",
                subject.clone(),
            ));
        }

        if lb.front_end_ip_configurations.is_empty() {
            alerts.push(Alert::error(
                "Load Balancer must have a FrontEndIpConfiguration.",
                subject.clone(),
            ));
        }
        for front_end in &lb.front_end_ip_configurations {
            match &front_end.binding {
                None => alerts.push(Alert::error(
                    format!(
                        "Load Balancer front end '{}' must have either an internal Subnet association or Public IP association.",
                        front_end.name
                    ),
                    subject.clone(),
                )),
                Some(FrontEndBinding::Private { subnet, .. }) => {
                    validate_front_end_subnet(selection, lb, &front_end.name, subnet, &subject, &mut alerts)
                }
                Some(FrontEndBinding::Public { .. }) => {}
            }
        }

        for rule in &lb.load_balancing_rules {
            let missing = [
                ("FrontEndIpConfiguration", &rule.front_end_ip_configuration, lb.has_front_end(&rule.front_end_ip_configuration)),
                ("BackEndAddressPool", &rule.back_end_address_pool, lb.has_back_end_pool(&rule.back_end_address_pool)),
                ("Probe", &rule.probe, lb.has_probe(&rule.probe)),
            ];
            for (what, name, found) in missing {
                if !found {
                    alerts.push(Alert::error(
                        format!(
                            "Load Balancing Rule '{}' references {what} '{name}', which does not exist in Load Balancer '{lb}'.",
                            rule.name
                        ),
                        subject.clone(),
                    ));
                }
            }
        }
    }

    for vm in &selection.virtual_machines {
        validate_virtual_machine(selection, vm, &mut alerts);
    }

    log::info!("#End validate() {} alert(s)", alerts.len());
    alerts
}

fn validate_resource_group(selection: &Selection, alerts: &mut Vec<Alert>) {
    match &selection.resource_group {
        None => alerts.push(Alert::error(
            "Target Resource Group must be provided for template generation.",
            Subject::new(SubjectKind::ResourceGroup, ""),
        )),
        Some(rg) if rg.target_location.is_none() => alerts.push(Alert::error(
            "Target Resource Group Location must be provided for template generation.",
            Subject::new(SubjectKind::ResourceGroup, &rg.target_name),
        )),
        Some(_) => {}
    }
}

fn validate_front_end_subnet(
    selection: &Selection,
    lb: &LoadBalancer,
    front_end: &str,
    subnet: &SubnetRef,
    subject: &Subject,
    alerts: &mut Vec<Alert>,
) {
    let TargetRef::Migrated { name } = &subnet.virtual_network else {
        return;
    };
    match selection.seek_virtual_network(name) {
        None => alerts.push(Alert::error(
            format!("Target Virtual Network '{name}' for Load Balancer '{lb}' front end '{front_end}' is invalid, as it is not included in the migration / template."),
            subject.clone(),
        )),
        Some(vnet) if vnet.subnet(&subnet.subnet).is_none() => alerts.push(Alert::error(
            format!(
                "Target Subnet '{}' for Load Balancer '{lb}' front end '{front_end}' does not exist in Virtual Network '{vnet}'.",
                subnet.subnet
            ),
            subject.clone(),
        )),
        Some(_) => {}
    }
}

fn validate_virtual_machine(selection: &Selection, vm: &VirtualMachine, alerts: &mut Vec<Alert>) {
    let vm_subject = Subject::new(SubjectKind::VirtualMachine, &vm.target_name);

    if vm.target_name.is_empty() {
        alerts.push(Alert::error(
            "Target Name for Virtual Machine must be specified.",
            vm_subject.clone(),
        ));
    }

    if vm.availability_set.is_none() {
        if !is_on_premium_storage(selection, &vm.os_disk) {
            alerts.push(Alert::warning(
                format!("Virtual Machine '{vm}' is not part of an Availability Set.  OS Disk must be migrated to Azure Premium Storage to receive an Azure SLA for single server deployments."),
                vm_subject.clone(),
            ));
        }
        for disk in &vm.data_disks {
            if !is_on_premium_storage(selection, disk) {
                alerts.push(Alert::warning(
                    format!("Virtual Machine '{vm}' is not part of an Availability Set.  Data Disk '{disk}' must be migrated to Azure Premium Storage to receive an Azure SLA for single server deployments."),
                    vm_subject.clone(),
                ));
            }
        }
    }

    for nic in &vm.network_interfaces {
        validate_network_interface(selection, vm, nic, alerts);
    }

    validate_disk_storage(selection, vm, &vm.os_disk, "OS Disk", vm_subject.clone(), alerts);
    for disk in &vm.data_disks {
        validate_disk_storage(
            selection,
            vm,
            disk,
            &format!("Data Disk '{disk}'"),
            Subject::new(SubjectKind::Disk, &disk.name),
            alerts,
        );
    }
}

/// Only selected storage accounts have a known tier; anything else is treated as not premium.
fn is_on_premium_storage(selection: &Selection, disk: &Disk) -> bool {
    match &disk.target_storage_account {
        Some(TargetRef::Migrated { name }) => selection
            .seek_storage_account(name)
            .is_some_and(|sa| sa.is_premium()),
        // Without a target account there is no tier to warn about; the missing
        // account is reported as an error instead.
        None => true,
        Some(TargetRef::Existing { .. }) => false,
    }
}

fn validate_network_interface(
    selection: &Selection,
    vm: &VirtualMachine,
    nic: &NetworkInterface,
    alerts: &mut Vec<Alert>,
) {
    let subject = Subject::new(SubjectKind::NetworkInterface, &nic.target_name);

    for ip_config in &nic.ip_configurations {
        let mut selected_network = None;
        match &ip_config.target_virtual_network {
            None => alerts.push(Alert::error(
                format!("Target Virtual Network for Virtual Machine '{vm}' Network Interface '{nic}' must be specified."),
                subject.clone(),
            )),
            Some(TargetRef::Migrated { name }) => match selection.seek_virtual_network(name) {
                Some(vnet) => selected_network = Some(vnet),
                None => alerts.push(Alert::error(
                    format!("Target Virtual Network '{name}' for Virtual Machine '{vm}' Network Interface '{nic}' is invalid, as it is not included in the migration / template."),
                    subject.clone(),
                )),
            },
            Some(TargetRef::Existing { .. }) => {}
        }

        match &ip_config.target_subnet {
            None => alerts.push(Alert::error(
                format!("Target Subnet for Virtual Machine '{vm}' Network Interface '{nic}' must be specified."),
                subject.clone(),
            )),
            Some(subnet) => {
                if let Some(vnet) = selected_network {
                    if vnet.subnet(subnet).is_none() {
                        alerts.push(Alert::error(
                            format!("Target Subnet '{subnet}' for Virtual Machine '{vm}' Network Interface '{nic}' does not exist in Virtual Network '{vnet}'."),
                            subject.clone(),
                        ));
                    }
                }
            }
        }
    }
}

fn validate_disk_storage(
    selection: &Selection,
    vm: &VirtualMachine,
    disk: &Disk,
    label: &str,
    subject: Subject,
    alerts: &mut Vec<Alert>,
) {
    match &disk.target_storage_account {
        None => alerts.push(Alert::error(
            format!("Target Storage Account for Virtual Machine '{vm}' {label} must be specified."),
            subject,
        )),
        Some(TargetRef::Migrated { name }) => {
            if selection.seek_storage_account(name).is_none() {
                alerts.push(Alert::error(
                    format!("Target Storage Account '{name}' for Virtual Machine '{vm}' {label} is invalid, as it is not included in the migration / template."),
                    subject,
                ));
            }
        }
        Some(TargetRef::Existing { .. }) => {}
    }
}
