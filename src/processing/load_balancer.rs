//! Load balancer builder.
//!
//! Front ends either bind a private address in a subnet or a public IP, which
//! is built on demand. Rules, probes and pools are nested sub-resources and are
//! referenced under the load balancer's own identifier.

use super::context::BuildContext;
use super::public_ip::build_public_ip;
use super::resolve::subnet_reference;
use crate::arm::network::{
    FrontendIpConfiguration, FrontendIpConfigurationProperties, InboundNatRule,
    InboundNatRuleProperties, LoadBalancerProperties, LoadBalancingRule,
    LoadBalancingRuleProperties, Named, Probe, ProbeProperties,
};
use crate::arm::{DependsOn, Reference, Resource, ResourceKind, ResourceProperties};
use crate::models::{FrontEndBinding, LoadBalancer, TargetRef};

fn child(load_balancer: &str, collection: &str, name: &str) -> Reference {
    Reference::to_child(ResourceKind::LoadBalancer, load_balancer, collection, name)
}

pub fn build_load_balancer(ctx: &mut BuildContext, lb: &LoadBalancer) {
    let kind = ResourceKind::LoadBalancer;
    let name = lb.target_name.as_str();
    log::info!("Start {}{}", kind.provider_path(), name);

    let mut depends_on = DependsOn::new();
    let mut frontend_ip_configurations = Vec::with_capacity(lb.front_end_ip_configurations.len());

    for front_end in &lb.front_end_ip_configurations {
        let properties = match &front_end.binding {
            Some(FrontEndBinding::Public { public_ip }) => {
                build_public_ip(ctx, public_ip);
                ctx.depend_on(&mut depends_on, ResourceKind::PublicIpAddress, &public_ip.target_name);
                FrontendIpConfigurationProperties {
                    private_ip_allocation_method: None,
                    private_ip_address: None,
                    subnet: None,
                    public_ip_address: Some(Reference::to(
                        ResourceKind::PublicIpAddress,
                        &public_ip.target_name,
                    )),
                }
            }
            Some(FrontEndBinding::Private {
                subnet,
                allocation_method,
                private_ip_address,
            }) => {
                if let TargetRef::Migrated { name: vnet } = &subnet.virtual_network {
                    ctx.depend_on(&mut depends_on, ResourceKind::VirtualNetwork, vnet);
                }
                FrontendIpConfigurationProperties {
                    private_ip_allocation_method: Some(allocation_method.clone()),
                    private_ip_address: private_ip_address.clone(),
                    subnet: Some(subnet_reference(&subnet.virtual_network, &subnet.subnet)),
                    public_ip_address: None,
                }
            }
            // Reported by validation; emitted bare so the operator can complete it.
            None => FrontendIpConfigurationProperties {
                private_ip_allocation_method: None,
                private_ip_address: None,
                subnet: None,
                public_ip_address: None,
            },
        };
        frontend_ip_configurations.push(FrontendIpConfiguration {
            name: front_end.name.clone(),
            properties,
        });
    }

    let backend_address_pools = lb
        .back_end_address_pools
        .iter()
        .map(|pool| Named {
            name: pool.name.clone(),
        })
        .collect();

    let inbound_nat_rules = lb
        .inbound_nat_rules
        .iter()
        .map(|rule| InboundNatRule {
            name: rule.name.clone(),
            properties: InboundNatRuleProperties {
                frontend_ip_configuration: rule
                    .front_end_ip_configuration
                    .as_deref()
                    .map(|front_end| child(name, "frontendIPConfigurations", front_end)),
                frontend_port: rule.front_end_port,
                backend_port: rule.back_end_port,
                protocol: rule.protocol.clone(),
            },
        })
        .collect();

    let load_balancing_rules = lb
        .load_balancing_rules
        .iter()
        .map(|rule| LoadBalancingRule {
            name: rule.name.clone(),
            properties: LoadBalancingRuleProperties {
                frontend_ip_configuration: child(
                    name,
                    "frontendIPConfigurations",
                    &rule.front_end_ip_configuration,
                ),
                backend_address_pool: child(name, "backendAddressPools", &rule.back_end_address_pool),
                probe: child(name, "probes", &rule.probe),
                frontend_port: rule.front_end_port,
                backend_port: rule.back_end_port,
                protocol: rule.protocol.clone(),
            },
        })
        .collect();

    let probes = lb
        .probes
        .iter()
        .map(|probe| Probe {
            name: probe.name.clone(),
            properties: ProbeProperties {
                port: probe.port,
                protocol: probe.protocol.clone(),
                interval_in_seconds: probe.interval_in_seconds,
                number_of_probes: probe.number_of_probes,
                request_path: probe.request_path.clone(),
            },
        })
        .collect();

    ctx.add_resource(Resource::new(
        kind,
        name,
        ResourceProperties::LoadBalancer(LoadBalancerProperties {
            frontend_ip_configurations,
            backend_address_pools,
            inbound_nat_rules,
            load_balancing_rules,
            probes,
        }),
        depends_on,
    ));
    log::info!("End {}{}", kind.provider_path(), name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::resource_id;
    use crate::config::Settings;
    use crate::models::{
        BackEndAddressPool, FrontEndIpConfiguration, InboundNatRule as SourceNatRule,
        LoadBalancingRule as SourceRule, Probe as SourceProbe, PublicIp, Selection, SubnetRef,
    };
    use crate::processing::status::LogStatus;
    use uuid::Uuid;

    fn public_lb(name: &str, pip: &str) -> LoadBalancer {
        LoadBalancer {
            target_name: name.to_string(),
            front_end_ip_configurations: vec![
                FrontEndIpConfiguration {
                    name: "fe-a".to_string(),
                    binding: Some(FrontEndBinding::Public {
                        public_ip: PublicIp::new(pip),
                    }),
                },
                FrontEndIpConfiguration {
                    name: "fe-b".to_string(),
                    binding: Some(FrontEndBinding::Public {
                        public_ip: PublicIp::new(pip),
                    }),
                },
            ],
            back_end_address_pools: vec![BackEndAddressPool {
                name: "pool".to_string(),
            }],
            probes: vec![SourceProbe {
                name: "http-probe".to_string(),
                port: 80,
                protocol: "Http".to_string(),
                interval_in_seconds: 15,
                number_of_probes: 2,
                request_path: Some("/health".to_string()),
            }],
            inbound_nat_rules: vec![SourceNatRule {
                name: "rdp".to_string(),
                front_end_port: 50001,
                back_end_port: 3389,
                protocol: "Tcp".to_string(),
                front_end_ip_configuration: Some("fe-a".to_string()),
            }],
            load_balancing_rules: vec![SourceRule {
                name: "http".to_string(),
                front_end_ip_configuration: "fe-b".to_string(),
                back_end_address_pool: "pool".to_string(),
                probe: "http-probe".to_string(),
                front_end_port: 80,
                back_end_port: 8080,
                protocol: "Tcp".to_string(),
            }],
        }
    }

    #[test]
    fn test_public_front_ends_share_one_ip() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_load_balancer(&mut ctx, &public_lb("lb01", "lb01-pip"));

        let kinds: Vec<ResourceKind> = ctx.resources().iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![ResourceKind::PublicIpAddress, ResourceKind::LoadBalancer],
            "Public IP precedes its load balancer and is built once"
        );
        let lb = &ctx.resources()[1];
        assert_eq!(lb.depends_on.len(), 1);
        assert!(lb
            .depends_on
            .contains(&resource_id(ResourceKind::PublicIpAddress, "lb01-pip")));
    }

    #[test]
    fn test_rules_reference_nested_children() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        build_load_balancer(&mut ctx, &public_lb("lb01", "lb01-pip"));

        let json = serde_json::to_value(&ctx.resources()[1]).expect("Error serializing");
        let props = &json["properties"];
        let rule = &props["loadBalancingRules"][0]["properties"];
        assert_eq!(
            rule["frontendIPConfiguration"]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/loadBalancers/lb01/frontendIPConfigurations/fe-b')]"
        );
        assert_eq!(
            rule["backendAddressPool"]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/loadBalancers/lb01/backendAddressPools/pool')]"
        );
        assert_eq!(
            rule["probe"]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/loadBalancers/lb01/probes/http-probe')]"
        );
        assert_eq!(props["backendAddressPools"], serde_json::json!([{"name": "pool"}]));
        assert_eq!(
            props["inboundNatRules"][0]["properties"]["frontendIPConfiguration"]["id"],
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/loadBalancers/lb01/frontendIPConfigurations/fe-a')]"
        );
        assert_eq!(props["probes"][0]["properties"]["requestPath"], "/health");
    }

    #[test]
    fn test_private_front_end_depends_on_built_network_only() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        let lb = LoadBalancer {
            target_name: "ilb01".to_string(),
            front_end_ip_configurations: vec![FrontEndIpConfiguration {
                name: "fe".to_string(),
                binding: Some(FrontEndBinding::Private {
                    subnet: SubnetRef {
                        virtual_network: TargetRef::migrated("not-built"),
                        subnet: "app".to_string(),
                    },
                    allocation_method: "Static".to_string(),
                    private_ip_address: Some("10.0.2.10".to_string()),
                }),
            }],
            ..Default::default()
        };
        build_load_balancer(&mut ctx, &lb);

        let resource = &ctx.resources()[0];
        assert!(resource.depends_on.is_empty());
        let json = serde_json::to_value(resource).expect("Error serializing");
        let fe = &json["properties"]["frontendIPConfigurations"][0]["properties"];
        assert_eq!(fe["privateIPAllocationMethod"], "Static");
        assert_eq!(fe["privateIPAddress"], "10.0.2.10");
        assert!(fe.get("publicIPAddress").is_none());
    }
}
