//! Virtual network builder, including the gateway and site connections of
//! networks migrated from the legacy model.

use super::context::BuildContext;
use super::network_security_group::build_network_security_group;
use super::public_ip::build_public_ip;
use super::route_table::build_route_table;
use crate::arm::network::{
    AddressSpace, ConnectionProperties, DhcpOptions, GatewaySku, IpConfiguration,
    IpConfigurationProperties, LocalNetworkGatewayProperties, Subnet, SubnetProperties,
    VirtualNetworkGatewayProperties, VirtualNetworkProperties, VpnClientCertificate,
    VpnClientCertificateProperties, VpnClientConfiguration,
};
use crate::arm::{DependsOn, Reference, Resource, ResourceKind, ResourceProperties};
use crate::models::{
    Alert, ConnectionType, LegacyGateway, LegacyNetwork, LocalNetworkSite, PublicIp, SourceNetwork,
    Subject, SubjectKind, VirtualNetwork, GATEWAY_SUBNET_NAME,
};

pub const GATEWAY_IP_CONFIGURATION_NAME: &str = "GatewayIPConfig";
pub const SHARED_KEY_PLACEHOLDER: &str = "***SHARED KEY GOES HERE***";
pub const EXPRESS_ROUTE_CIRCUIT_PLACEHOLDER: &str =
    "/subscriptions/***/resourceGroups/***/providers/Microsoft.Network/expressRouteCircuits/***";

/// Translate a legacy gateway routing type to a VPN type. Unknown values pass through.
pub fn vpn_type(gateway_type: &str) -> &str {
    match gateway_type {
        "StaticRouting" => "PolicyBased",
        "DynamicRouting" => "RouteBased",
        other => other,
    }
}

/// Add `vnet` to the output, followed by its gateway resources when it has one.
///
/// Security groups and route tables attached to subnets are built first if no
/// earlier category produced them, so every dependency of the network resolves.
pub fn build_virtual_network(ctx: &mut BuildContext, vnet: &VirtualNetwork) {
    let kind = ResourceKind::VirtualNetwork;
    log::info!("Start {}{}", kind.provider_path(), vnet.target_name);

    let mut depends_on = DependsOn::new();
    let mut subnets = Vec::with_capacity(vnet.subnets.len());

    for subnet in &vnet.subnets {
        let mut properties = SubnetProperties {
            address_prefix: subnet.address_prefix.clone(),
            network_security_group: None,
            route_table: None,
        };

        if let Some(nsg) = &subnet.network_security_group {
            build_network_security_group(ctx, nsg);
            properties.network_security_group = Some(Reference::to(
                ResourceKind::NetworkSecurityGroup,
                &nsg.target_name,
            ));
            ctx.depend_on(&mut depends_on, ResourceKind::NetworkSecurityGroup, &nsg.target_name);
        }

        if let Some(route_table) = &subnet.route_table {
            build_route_table(ctx, route_table);
            properties.route_table = Some(Reference::to(
                ResourceKind::RouteTable,
                &route_table.target_name,
            ));
            ctx.depend_on(&mut depends_on, ResourceKind::RouteTable, &route_table.target_name);
        }

        subnets.push(Subnet {
            name: subnet.target_name.clone(),
            properties,
        });
    }

    ctx.add_resource(Resource::new(
        kind,
        &vnet.target_name,
        ResourceProperties::VirtualNetwork(VirtualNetworkProperties {
            address_space: AddressSpace {
                address_prefixes: vnet.address_prefixes.clone(),
            },
            subnets,
            dhcp_options: DhcpOptions {
                dns_servers: vnet.dns_servers.clone(),
            },
        }),
        depends_on,
    ));

    if let SourceNetwork::Legacy(legacy) = &vnet.source {
        if let Some(gateway) = legacy.provisioned_gateway() {
            build_gateway(ctx, vnet, legacy, gateway);
        }
    }

    log::info!("End {}{}", kind.provider_path(), vnet.target_name);
}

fn build_gateway(
    ctx: &mut BuildContext,
    vnet: &VirtualNetwork,
    legacy: &LegacyNetwork,
    gateway: &LegacyGateway,
) {
    let gateway_name = ctx.settings.gateway_name(&vnet.target_name);
    let public_ip = PublicIp::new(ctx.settings.gateway_public_ip_name(&vnet.target_name));
    log::info!(
        "Start {}{}",
        ResourceKind::VirtualNetworkGateway.provider_path(),
        gateway_name
    );

    build_public_ip(ctx, &public_ip);

    let mut depends_on = DependsOn::new();
    ctx.depend_on(&mut depends_on, ResourceKind::VirtualNetwork, &vnet.target_name);
    ctx.depend_on(&mut depends_on, ResourceKind::PublicIpAddress, &public_ip.target_name);

    let ip_configuration = IpConfiguration {
        name: GATEWAY_IP_CONFIGURATION_NAME.to_string(),
        properties: IpConfigurationProperties {
            private_ip_allocation_method: "Dynamic".to_string(),
            private_ip_address: None,
            subnet: Some(Reference::to_child(
                ResourceKind::VirtualNetwork,
                &vnet.target_name,
                "subnets",
                GATEWAY_SUBNET_NAME,
            )),
            public_ip_address: Some(Reference::to(
                ResourceKind::PublicIpAddress,
                &public_ip.target_name,
            )),
            load_balancer_backend_address_pools: Vec::new(),
            load_balancer_inbound_nat_rules: Vec::new(),
        },
    };

    let vpn_client_configuration = if legacy.vpn_client_address_prefixes.is_empty() {
        None
    } else {
        Some(VpnClientConfiguration {
            vpn_client_address_pool: AddressSpace {
                address_prefixes: legacy.vpn_client_address_prefixes.clone(),
            },
            vpn_client_root_certificates: legacy
                .client_root_certificates
                .iter()
                .map(|cert| VpnClientCertificate {
                    name: cert.target_subject.clone(),
                    properties: VpnClientCertificateProperties {
                        public_cert_data: cert.public_cert_data.clone(),
                    },
                })
                .collect(),
        })
    };

    // ExpressRoute gateways have no VPN routing type and no BGP switch.
    let (gateway_type, vpn_type, enable_bgp) = if legacy.is_express_route() {
        ("ExpressRoute", None, None)
    } else {
        ("Vpn", Some(vpn_type(&gateway.gateway_type).to_string()), Some(false))
    };

    ctx.add_resource(Resource::new(
        ResourceKind::VirtualNetworkGateway,
        &gateway_name,
        ResourceProperties::VirtualNetworkGateway(VirtualNetworkGatewayProperties {
            ip_configurations: vec![ip_configuration],
            sku: GatewaySku {
                name: "Basic".to_string(),
                tier: "Basic".to_string(),
            },
            gateway_type: gateway_type.to_string(),
            vpn_type,
            enable_bgp,
            vpn_client_configuration,
        }),
        depends_on,
    ));

    if !vnet.has_gateway_subnet() {
        ctx.add_alert(Alert::error(
            format!(
                "The Virtual Network '{vnet}' does not contain the necessary '{GATEWAY_SUBNET_NAME}' subnet for deployment of the '{gateway_name}' Gateway."
            ),
            Subject::new(SubjectKind::VirtualNetwork, &vnet.target_name),
        ));
    }

    for site in &legacy.local_network_sites {
        build_site_connection(ctx, vnet, &gateway_name, site);
    }

    log::info!(
        "End {}{}",
        ResourceKind::VirtualNetworkGateway.provider_path(),
        gateway_name
    );
}

/// Local network gateway name: site name plus suffix, without whitespace.
pub fn local_gateway_name(site_name: &str, suffix: &str) -> String {
    format!("{site_name}{suffix}")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn build_site_connection(
    ctx: &mut BuildContext,
    vnet: &VirtualNetwork,
    gateway_name: &str,
    site: &LocalNetworkSite,
) {
    let subject = Subject::new(SubjectKind::VirtualNetwork, &vnet.target_name);
    let gateway_ref = Reference::to(ResourceKind::VirtualNetworkGateway, gateway_name);
    let mut depends_on = DependsOn::new();

    let properties = match site.connection_type {
        ConnectionType::IPsec => {
            let local_gateway = local_gateway_name(&site.name, &ctx.settings.local_gateway_suffix);
            ctx.add_resource(Resource::new(
                ResourceKind::LocalNetworkGateway,
                &local_gateway,
                ResourceProperties::LocalNetworkGateway(LocalNetworkGatewayProperties {
                    local_network_address_space: AddressSpace {
                        address_prefixes: site.address_prefixes.clone(),
                    },
                    gateway_ip_address: site.vpn_gateway_address.clone(),
                }),
                DependsOn::new(),
            ));
            ctx.depend_on(&mut depends_on, ResourceKind::LocalNetworkGateway, &local_gateway);

            let shared_key = match site.shared_key.as_deref().filter(|k| !k.is_empty()) {
                Some(key) => key.to_string(),
                None => {
                    ctx.add_alert(Alert::error(
                        format!("Unable to retrieve shared key for VPN connection '{gateway_name}'. Please edit the template to provide this value."),
                        subject.clone(),
                    ));
                    SHARED_KEY_PLACEHOLDER.to_string()
                }
            };

            ConnectionProperties {
                connection_type: "IPsec".to_string(),
                virtual_network_gateway1: gateway_ref,
                local_network_gateway2: Some(Reference::to(
                    ResourceKind::LocalNetworkGateway,
                    &local_gateway,
                )),
                peer: None,
                shared_key: Some(shared_key),
            }
        }
        ConnectionType::Dedicated => {
            ctx.add_alert(Alert::error(
                format!("Gateway '{gateway_name}' connects to ExpressRoute. ExpressRoute circuits are not migrated; create or convert the circuit and update the circuit resource id in the generated template."),
                subject.clone(),
            ));
            ConnectionProperties {
                connection_type: "ExpressRoute".to_string(),
                virtual_network_gateway1: gateway_ref,
                local_network_gateway2: None,
                peer: Some(Reference::new(EXPRESS_ROUTE_CIRCUIT_PLACEHOLDER)),
                shared_key: None,
            }
        }
    };

    ctx.depend_on(&mut depends_on, ResourceKind::VirtualNetworkGateway, gateway_name);

    let connection_name = format!(
        "{gateway_name}-{}{}",
        site.target_name, ctx.settings.connection_suffix
    );
    ctx.add_resource(Resource::new(
        ResourceKind::Connection,
        connection_name,
        ResourceProperties::Connection(properties),
        depends_on,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::resource_id;
    use crate::config::Settings;
    use crate::models::{NetworkSecurityGroup, RouteTable, Selection, Subnet as SourceSubnet};
    use crate::processing::status::LogStatus;
    use uuid::Uuid;

    fn legacy_vnet(gateway_type: &str, sites: Vec<LocalNetworkSite>) -> VirtualNetwork {
        VirtualNetwork {
            target_name: "vnet01".to_string(),
            address_prefixes: vec!["10.0.0.0/16".to_string()],
            subnets: vec![SourceSubnet {
                target_name: GATEWAY_SUBNET_NAME.to_string(),
                address_prefix: "10.0.255.0/29".to_string(),
                ..Default::default()
            }],
            source: SourceNetwork::Legacy(LegacyNetwork {
                gateway: Some(LegacyGateway {
                    is_provisioned: true,
                    gateway_type: gateway_type.to_string(),
                }),
                local_network_sites: sites,
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn site(name: &str, connection_type: ConnectionType, shared_key: Option<&str>) -> LocalNetworkSite {
        LocalNetworkSite {
            name: name.to_string(),
            target_name: name.replace(' ', ""),
            connection_type,
            address_prefixes: vec!["192.168.0.0/24".to_string()],
            vpn_gateway_address: Some("203.0.113.10".to_string()),
            shared_key: shared_key.map(str::to_string),
        }
    }

    fn gateway_json(ctx: &BuildContext) -> serde_json::Value {
        let gateway = ctx
            .resources()
            .iter()
            .find(|r| r.kind == ResourceKind::VirtualNetworkGateway)
            .expect("Expected a gateway");
        serde_json::to_value(gateway).expect("Error serializing gateway")
    }

    #[test]
    fn test_vpn_type_mapping() {
        assert_eq!(vpn_type("StaticRouting"), "PolicyBased");
        assert_eq!(vpn_type("DynamicRouting"), "RouteBased");
        assert_eq!(vpn_type("RouteBased"), "RouteBased");
    }

    #[test]
    fn test_local_gateway_name_strips_whitespace() {
        assert_eq!(local_gateway_name("Head Office", "-LocalGateway"), "HeadOffice-LocalGateway");
    }

    #[test]
    fn test_subnet_dependencies_built_once() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let nsg = NetworkSecurityGroup {
            target_name: "shared-nsg".to_string(),
            rules: Vec::new(),
        };
        let rt = RouteTable {
            target_name: "rt01".to_string(),
            routes: Vec::new(),
        };
        let vnet = VirtualNetwork {
            target_name: "vnet01".to_string(),
            subnets: vec![
                SourceSubnet {
                    target_name: "web".to_string(),
                    address_prefix: "10.0.1.0/24".to_string(),
                    network_security_group: Some(nsg.clone()),
                    route_table: Some(rt.clone()),
                },
                SourceSubnet {
                    target_name: "app".to_string(),
                    address_prefix: "10.0.2.0/24".to_string(),
                    network_security_group: Some(nsg),
                    route_table: None,
                },
            ],
            ..Default::default()
        };
        build_virtual_network(&mut ctx, &vnet);

        let kinds: Vec<ResourceKind> = ctx.resources().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::NetworkSecurityGroup,
                ResourceKind::RouteTable,
                ResourceKind::VirtualNetwork
            ]
        );
        let network = &ctx.resources()[2];
        assert_eq!(network.depends_on.len(), 2, "NSG dependency must appear once");
        assert!(network
            .depends_on
            .contains(&resource_id(ResourceKind::NetworkSecurityGroup, "shared-nsg")));
        let json = serde_json::to_value(network).expect("Error serializing");
        assert!(json["properties"]["subnets"][1]["properties"]
            .get("routeTable")
            .is_none());
    }

    #[test]
    fn test_manager_network_has_no_gateway() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let mut vnet = legacy_vnet("DynamicRouting", Vec::new());
        vnet.source = SourceNetwork::Manager;
        build_virtual_network(&mut ctx, &vnet);
        assert_eq!(ctx.resources().len(), 1);
    }

    #[test]
    fn test_unprovisioned_gateway_skipped() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let mut vnet = legacy_vnet("DynamicRouting", Vec::new());
        if let SourceNetwork::Legacy(legacy) = &mut vnet.source {
            legacy.gateway = Some(LegacyGateway {
                is_provisioned: false,
                gateway_type: "DynamicRouting".to_string(),
            });
        }
        build_virtual_network(&mut ctx, &vnet);
        assert_eq!(ctx.resources().len(), 1);
    }

    #[test]
    fn test_vpn_gateway() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_virtual_network(&mut ctx, &legacy_vnet("StaticRouting", Vec::new()));

        let names: Vec<&str> = ctx.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["vnet01", "vnet01-gw-pip", "vnet01-gw"]);

        let json = gateway_json(&ctx);
        let props = &json["properties"];
        assert_eq!(props["gatewayType"], "Vpn");
        assert_eq!(props["vpnType"], "PolicyBased");
        assert_eq!(props["enableBgp"], false);
        assert_eq!(props["sku"]["name"], "Basic");
        assert_eq!(props["ipConfigurations"][0]["name"], "GatewayIPConfig");
        assert_eq!(
            props["ipConfigurations"][0]["properties"]["subnet"]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/virtualNetworks/vnet01/subnets/GatewaySubnet')]"
        );
        assert_eq!(
            json["dependsOn"],
            serde_json::json!([
                resource_id(ResourceKind::VirtualNetwork, "vnet01"),
                resource_id(ResourceKind::PublicIpAddress, "vnet01-gw-pip"),
            ])
        );
        assert!(ctx.alerts().is_empty());
    }

    #[test]
    fn test_express_route_gateway() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_virtual_network(
            &mut ctx,
            &legacy_vnet("DynamicRouting", vec![site("er", ConnectionType::Dedicated, None)]),
        );

        let props = gateway_json(&ctx)["properties"].clone();
        assert_eq!(props["gatewayType"], "ExpressRoute");
        assert!(props.get("vpnType").is_none());
        assert!(props.get("enableBgp").is_none());

        let connection = ctx
            .resources()
            .iter()
            .find(|r| r.kind == ResourceKind::Connection)
            .expect("Expected a connection");
        assert_eq!(connection.name, "vnet01-gw-er-connection");
        let json = serde_json::to_value(connection).expect("Error serializing");
        assert_eq!(json["properties"]["connectionType"], "ExpressRoute");
        assert_eq!(json["properties"]["peer"]["id"], EXPRESS_ROUTE_CIRCUIT_PLACEHOLDER);
        assert_eq!(ctx.alerts().len(), 1);
        assert!(ctx.alerts()[0].is_error());
    }

    #[test]
    fn test_ipsec_site_without_shared_key() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_virtual_network(
            &mut ctx,
            &legacy_vnet(
                "DynamicRouting",
                vec![
                    site("Head Office", ConnectionType::IPsec, None),
                    site("branch", ConnectionType::IPsec, Some("s3cret")),
                ],
            ),
        );

        let names: Vec<&str> = ctx.resources().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "vnet01",
                "vnet01-gw-pip",
                "vnet01-gw",
                "HeadOffice-LocalGateway",
                "vnet01-gw-HeadOffice-connection",
                "branch-LocalGateway",
                "vnet01-gw-branch-connection",
            ]
        );
        let json = serde_json::to_value(ctx.resources()).expect("Error serializing");
        assert_eq!(json[4]["properties"]["sharedKey"], SHARED_KEY_PLACEHOLDER);
        assert_eq!(json[4]["properties"]["connectionType"], "IPsec");
        assert_eq!(
            json[4]["dependsOn"],
            serde_json::json!([
                resource_id(ResourceKind::LocalNetworkGateway, "HeadOffice-LocalGateway"),
                resource_id(ResourceKind::VirtualNetworkGateway, "vnet01-gw"),
            ])
        );
        assert_eq!(json[6]["properties"]["sharedKey"], "s3cret");
        assert_eq!(json[3]["properties"]["gatewayIpAddress"], "203.0.113.10");
        assert_eq!(ctx.alerts().len(), 1, "Only the missing key is reported");
    }

    #[test]
    fn test_missing_gateway_subnet_still_emits_gateway() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let mut vnet = legacy_vnet("DynamicRouting", Vec::new());
        vnet.subnets.clear();
        build_virtual_network(&mut ctx, &vnet);

        assert!(ctx
            .resources()
            .iter()
            .any(|r| r.kind == ResourceKind::VirtualNetworkGateway));
        assert_eq!(ctx.alerts().len(), 1);
        assert!(ctx.alerts()[0].message.contains("GatewaySubnet"));
        assert_eq!(ctx.alerts()[0].subject.kind, SubjectKind::VirtualNetwork);
    }
}
