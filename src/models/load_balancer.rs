//! Load balancers and public IP addresses.

use super::SubnetRef;
use serde::{Deserialize, Serialize};
use std::fmt;

fn default_allocation_method() -> String {
    "Dynamic".to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PublicIp {
    pub target_name: String,
    pub domain_name_label: Option<String>,
    #[serde(default = "default_allocation_method")]
    pub allocation_method: String,
}

impl PublicIp {
    pub fn new(target_name: impl Into<String>) -> PublicIp {
        PublicIp {
            target_name: target_name.into(),
            domain_name_label: None,
            allocation_method: default_allocation_method(),
        }
    }
}

impl fmt::Display for PublicIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

/// How a front-end IP configuration receives traffic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FrontEndBinding {
    Public {
        public_ip: PublicIp,
    },
    Private {
        subnet: SubnetRef,
        #[serde(default = "default_allocation_method")]
        allocation_method: String,
        private_ip_address: Option<String>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FrontEndIpConfiguration {
    pub name: String,
    /// `None` is invalid and reported by validation.
    pub binding: Option<FrontEndBinding>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BackEndAddressPool {
    pub name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Probe {
    pub name: String,
    pub port: u16,
    pub protocol: String,
    pub interval_in_seconds: u32,
    pub number_of_probes: u32,
    pub request_path: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InboundNatRule {
    pub name: String,
    pub front_end_port: u16,
    pub back_end_port: u16,
    pub protocol: String,
    /// Front-end configuration name within the same load balancer.
    pub front_end_ip_configuration: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LoadBalancingRule {
    pub name: String,
    pub front_end_ip_configuration: String,
    pub back_end_address_pool: String,
    pub probe: String,
    pub front_end_port: u16,
    pub back_end_port: u16,
    pub protocol: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LoadBalancer {
    pub target_name: String,
    #[serde(default)]
    pub front_end_ip_configurations: Vec<FrontEndIpConfiguration>,
    #[serde(default)]
    pub back_end_address_pools: Vec<BackEndAddressPool>,
    #[serde(default)]
    pub probes: Vec<Probe>,
    #[serde(default)]
    pub inbound_nat_rules: Vec<InboundNatRule>,
    #[serde(default)]
    pub load_balancing_rules: Vec<LoadBalancingRule>,
}

impl LoadBalancer {
    pub fn has_front_end(&self, name: &str) -> bool {
        self.front_end_ip_configurations
            .iter()
            .any(|f| f.name == name)
    }

    pub fn has_back_end_pool(&self, name: &str) -> bool {
        self.back_end_address_pools.iter().any(|p| p.name == name)
    }

    pub fn has_probe(&self, name: &str) -> bool {
        self.probes.iter().any(|p| p.name == name)
    }
}

impl fmt::Display for LoadBalancer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_front_end_binding_private() {
        let json = r#"{
            "name": "fe-internal",
            "binding": {
                "mode": "private",
                "subnet": {
                    "virtual_network": {"placement": "migrated", "name": "vnet01"},
                    "subnet": "web"
                },
                "private_ip_address": "10.0.1.10"
            }
        }"#;
        let fe: FrontEndIpConfiguration =
            serde_json::from_str(json).expect("Error parsing front end");
        match fe.binding {
            Some(FrontEndBinding::Private {
                subnet,
                allocation_method,
                private_ip_address,
            }) => {
                assert_eq!(subnet.subnet, "web");
                assert_eq!(allocation_method, "Dynamic");
                assert_eq!(private_ip_address.as_deref(), Some("10.0.1.10"));
            }
            other => panic!("Expected private binding, got {other:?}"),
        }
    }

    #[test]
    fn test_front_end_without_binding() {
        let fe: FrontEndIpConfiguration =
            serde_json::from_str(r#"{"name":"fe"}"#).expect("Error parsing front end");
        assert!(fe.binding.is_none());
    }
}
