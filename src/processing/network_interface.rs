//! Network interface builder, driven by the virtual machine builder.

use super::context::BuildContext;
use super::public_ip::build_public_ip;
use super::resolve::subnet_reference;
use crate::arm::compute::{NetworkInterfaceReference, NetworkInterfaceReferenceProperties};
use crate::arm::network::{IpConfiguration, IpConfigurationProperties, NetworkInterfaceProperties};
use crate::arm::{resource_id, DependsOn, Reference, Resource, ResourceKind, ResourceProperties};
use crate::models::{
    Alert, LoadBalancerMember, NetworkInterface, NetworkInterfaceIpConfiguration, Subject,
    SubjectKind, TargetRef,
};

/// Add `nic` (and any public IPs it owns) to the output.
///
/// # Returns
/// The entry for the owning machine's network profile
pub fn build_network_interface(
    ctx: &mut BuildContext,
    nic: &NetworkInterface,
) -> NetworkInterfaceReference {
    let kind = ResourceKind::NetworkInterface;
    log::info!("Start {}{}", kind.provider_path(), nic.target_name);

    let mut depends_on = DependsOn::new();
    let ip_configurations = nic
        .ip_configurations
        .iter()
        .map(|ip_config| build_ip_configuration(ctx, nic, ip_config, &mut depends_on))
        .collect();

    let network_security_group = match nic.network_security_group.as_deref() {
        // Subnet NSGs are built with their network, before any NIC.
        Some(nsg)
            if ctx.selection.seek_network_security_group(nsg).is_some()
                || ctx.contains_resource(ResourceKind::NetworkSecurityGroup, nsg) =>
        {
            ctx.depend_on(&mut depends_on, ResourceKind::NetworkSecurityGroup, nsg);
            Some(Reference::to(ResourceKind::NetworkSecurityGroup, nsg))
        }
        Some(nsg) => {
            ctx.add_alert(Alert::error(
                format!("Network Interface Card (NIC) '{nic}' utilized Network Security Group (NSG) '{nsg}', which has not been added to the NIC as the NSG was not included in the template (was not selected as an included resource for export)."),
                Subject::new(SubjectKind::NetworkInterface, &nic.target_name),
            ));
            None
        }
        None => None,
    };

    ctx.add_resource(Resource::new(
        kind,
        &nic.target_name,
        ResourceProperties::NetworkInterface(NetworkInterfaceProperties {
            ip_configurations,
            enable_ip_forwarding: nic.enable_ip_forwarding,
            network_security_group,
        }),
        depends_on,
    ));
    log::info!("End {}{}", kind.provider_path(), nic.target_name);

    NetworkInterfaceReference {
        id: resource_id(kind, &nic.target_name),
        properties: NetworkInterfaceReferenceProperties {
            primary: nic.is_primary,
        },
    }
}

fn build_ip_configuration(
    ctx: &mut BuildContext,
    nic: &NetworkInterface,
    ip_config: &NetworkInterfaceIpConfiguration,
    depends_on: &mut DependsOn,
) -> IpConfiguration {
    let subnet = match (&ip_config.target_virtual_network, &ip_config.target_subnet) {
        (Some(vnet), Some(subnet)) => Some(subnet_reference(vnet, subnet)),
        _ => None,
    };
    if let Some(TargetRef::Migrated { name }) = &ip_config.target_virtual_network {
        ctx.depend_on(depends_on, ResourceKind::VirtualNetwork, name);
    }

    let load_balancer_backend_address_pools = ip_config
        .back_end_address_pool
        .iter()
        .map(|member| load_balancer_member(ctx, nic, member, "backendAddressPools", depends_on))
        .collect();
    let load_balancer_inbound_nat_rules = ip_config
        .inbound_nat_rules
        .iter()
        .map(|member| load_balancer_member(ctx, nic, member, "inboundNatRules", depends_on))
        .collect();

    let public_ip_address = ip_config.public_ip.as_ref().map(|public_ip| {
        build_public_ip(ctx, public_ip);
        ctx.depend_on(depends_on, ResourceKind::PublicIpAddress, &public_ip.target_name);
        Reference::to(ResourceKind::PublicIpAddress, &public_ip.target_name)
    });

    IpConfiguration {
        name: ip_config.name.clone(),
        properties: IpConfigurationProperties {
            private_ip_allocation_method: ip_config.private_ip_allocation_method.clone(),
            private_ip_address: ip_config.private_ip_address.clone(),
            subnet,
            public_ip_address,
            load_balancer_backend_address_pools,
            load_balancer_inbound_nat_rules,
        },
    }
}

/// Reference a pool or NAT rule. Membership in a load balancer outside the
/// selection keeps the reference but adds no dependency.
fn load_balancer_member(
    ctx: &mut BuildContext,
    nic: &NetworkInterface,
    member: &LoadBalancerMember,
    collection: &str,
    depends_on: &mut DependsOn,
) -> Reference {
    if ctx.selection.seek_load_balancer(&member.load_balancer).is_some() {
        ctx.depend_on(depends_on, ResourceKind::LoadBalancer, &member.load_balancer);
    } else {
        ctx.add_alert(Alert::warning(
            format!(
                "Network Interface Card (NIC) '{nic}' references '{}' in Load Balancer '{}', which is not included in the template. The reference is kept and must exist at deployment time.",
                member.name, member.load_balancer
            ),
            Subject::new(SubjectKind::NetworkInterface, &nic.target_name),
        ));
    }
    Reference::to_child(
        ResourceKind::LoadBalancer,
        &member.load_balancer,
        collection,
        &member.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{
        LoadBalancer, NetworkSecurityGroup, PublicIp, Selection, Severity, Subnet, VirtualNetwork,
    };
    use crate::processing::load_balancer::build_load_balancer;
    use crate::processing::network_security_group::build_network_security_group;
    use crate::processing::status::LogStatus;
    use crate::processing::virtual_network::build_virtual_network;
    use uuid::Uuid;

    fn nic(nsg: Option<&str>) -> NetworkInterface {
        NetworkInterface {
            target_name: "vm01-nic".to_string(),
            ip_configurations: vec![NetworkInterfaceIpConfiguration {
                name: "ipconfig1".to_string(),
                target_virtual_network: Some(TargetRef::migrated("vnet01")),
                target_subnet: Some("web".to_string()),
                private_ip_allocation_method: "Static".to_string(),
                private_ip_address: Some("10.0.1.4".to_string()),
                ..Default::default()
            }],
            network_security_group: nsg.map(str::to_string),
            is_primary: true,
            enable_ip_forwarding: false,
        }
    }

    #[test]
    fn test_unselected_nsg_is_omitted_with_one_error() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let reference = build_network_interface(&mut ctx, &nic(Some("legacy-nsg")));

        assert!(reference.properties.primary);
        assert_eq!(ctx.alerts().len(), 1);
        assert_eq!(ctx.alerts()[0].severity, Severity::Error);
        let json = serde_json::to_value(&ctx.resources()[0]).expect("Error serializing");
        assert!(json["properties"].get("networkSecurityGroup").is_none());
        assert_eq!(json["dependsOn"], serde_json::json!([]));
    }

    #[test]
    fn test_selected_nsg_is_referenced() {
        let selection = Selection {
            network_security_groups: vec![NetworkSecurityGroup {
                target_name: "web-nsg".to_string(),
                rules: Vec::new(),
            }],
            ..Default::default()
        };
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_network_security_group(&mut ctx, &selection.network_security_groups[0]);
        build_network_interface(&mut ctx, &nic(Some("web-nsg")));

        assert!(ctx.alerts().is_empty());
        let resource = &ctx.resources()[1];
        assert!(resource
            .depends_on
            .contains(&resource_id(ResourceKind::NetworkSecurityGroup, "web-nsg")));
    }

    #[test]
    fn test_load_balancer_membership() {
        let selection = Selection {
            load_balancers: vec![LoadBalancer {
                target_name: "lb01".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_load_balancer(&mut ctx, &selection.load_balancers[0]);

        let mut member_nic = nic(None);
        member_nic.ip_configurations[0].back_end_address_pool = Some(LoadBalancerMember {
            load_balancer: "lb01".to_string(),
            name: "pool".to_string(),
        });
        member_nic.ip_configurations[0].inbound_nat_rules = vec![LoadBalancerMember {
            load_balancer: "other-lb".to_string(),
            name: "rdp".to_string(),
        }];
        build_network_interface(&mut ctx, &member_nic);

        let resource = &ctx.resources()[1];
        assert_eq!(resource.depends_on.len(), 1);
        assert!(resource
            .depends_on
            .contains(&resource_id(ResourceKind::LoadBalancer, "lb01")));
        assert_eq!(ctx.alerts().len(), 1);
        assert_eq!(ctx.alerts()[0].severity, Severity::Warning);

        let json = serde_json::to_value(resource).expect("Error serializing");
        let props = &json["properties"]["ipConfigurations"][0]["properties"];
        assert_eq!(
            props["loadBalancerInboundNatRules"][0]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/loadBalancers/other-lb/inboundNatRules/rdp')]"
        );
        assert_eq!(props["privateIPAllocationMethod"], "Static");
        assert_eq!(props["privateIPAddress"], "10.0.1.4");
    }

    #[test]
    fn test_public_ip_built_before_nic() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let mut public_nic = nic(None);
        public_nic.ip_configurations[0].public_ip = Some(PublicIp::new("vm01-pip"));
        build_network_interface(&mut ctx, &public_nic);

        let kinds: Vec<ResourceKind> = ctx.resources().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::PublicIpAddress, ResourceKind::NetworkInterface]
        );
        assert!(ctx.resources()[1]
            .depends_on
            .contains(&resource_id(ResourceKind::PublicIpAddress, "vm01-pip")));
    }

    #[test]
    fn test_subnet_nsg_built_with_network_is_referenced() {
        let selection = Selection {
            virtual_networks: vec![VirtualNetwork {
                target_name: "vnet01".to_string(),
                subnets: vec![Subnet {
                    target_name: "web".to_string(),
                    address_prefix: "10.0.1.0/24".to_string(),
                    network_security_group: Some(NetworkSecurityGroup {
                        target_name: "web-subnet-nsg".to_string(),
                        rules: Vec::new(),
                    }),
                    route_table: None,
                }],
                ..Default::default()
            }],
            ..Default::default()
        };
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_virtual_network(&mut ctx, &selection.virtual_networks[0]);
        build_network_interface(&mut ctx, &nic(Some("web-subnet-nsg")));

        assert!(ctx.alerts().is_empty(), "{:?}", ctx.alerts());
        let resource = ctx
            .resources()
            .iter()
            .find(|r| r.kind == ResourceKind::NetworkInterface)
            .expect("NIC was not built");
        assert!(resource
            .depends_on
            .contains(&resource_id(ResourceKind::NetworkSecurityGroup, "web-subnet-nsg")));
        let json = serde_json::to_value(resource).expect("Error serializing");
        assert!(json["properties"].get("networkSecurityGroup").is_some());
    }
}
