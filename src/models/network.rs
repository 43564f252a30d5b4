//! Virtual networks, security groups, route tables and gateways.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the subnet a virtual network gateway must be placed in.
pub const GATEWAY_SUBNET_NAME: &str = "GatewaySubnet";

/// One rule of a [`NetworkSecurityGroup`].
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NetworkSecurityGroupRule {
    pub name: String,
    pub direction: String,
    pub priority: u32,
    pub access: String,
    pub source_address_prefix: String,
    pub source_port_range: String,
    pub destination_address_prefix: String,
    pub destination_port_range: String,
    pub protocol: String,
    /// Platform managed rule, never emitted.
    #[serde(default)]
    pub is_system_rule: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct NetworkSecurityGroup {
    pub target_name: String,
    #[serde(default)]
    pub rules: Vec<NetworkSecurityGroupRule>,
}

impl fmt::Display for NetworkSecurityGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Route {
    pub name: String,
    pub address_prefix: String,
    /// Legacy next hop type, e.g. `VPNGateway` or `VirtualAppliance`.
    pub next_hop_type: String,
    pub next_hop_ip_address: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RouteTable {
    pub target_name: String,
    #[serde(default)]
    pub routes: Vec<Route>,
}

impl fmt::Display for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Subnet {
    pub target_name: String,
    pub address_prefix: String,
    pub network_security_group: Option<NetworkSecurityGroup>,
    pub route_table: Option<RouteTable>,
}

/// Gateway of a legacy virtual network.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LegacyGateway {
    #[serde(default)]
    pub is_provisioned: bool,
    /// `StaticRouting` or `DynamicRouting`.
    pub gateway_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ClientRootCertificate {
    pub target_subject: String,
    pub public_cert_data: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionType {
    /// Site-to-site VPN.
    IPsec,
    /// ExpressRoute cross-connect.
    Dedicated,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LocalNetworkSite {
    pub name: String,
    pub target_name: String,
    pub connection_type: ConnectionType,
    #[serde(default)]
    pub address_prefixes: Vec<String>,
    pub vpn_gateway_address: Option<String>,
    pub shared_key: Option<String>,
}

/// Legacy-only parts of a source network.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct LegacyNetwork {
    pub gateway: Option<LegacyGateway>,
    #[serde(default)]
    pub vpn_client_address_prefixes: Vec<String>,
    #[serde(default)]
    pub client_root_certificates: Vec<ClientRootCertificate>,
    #[serde(default)]
    pub local_network_sites: Vec<LocalNetworkSite>,
}

impl LegacyNetwork {
    /// Gateway that must be recreated, if any.
    pub fn provisioned_gateway(&self) -> Option<&LegacyGateway> {
        self.gateway.as_ref().filter(|g| g.is_provisioned)
    }

    /// True when the first local site is an ExpressRoute cross-connect.
    pub fn is_express_route(&self) -> bool {
        self.local_network_sites
            .first()
            .is_some_and(|s| s.connection_type == ConnectionType::Dedicated)
    }
}

/// Model the source network was read from.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(tag = "origin", rename_all = "snake_case")]
pub enum SourceNetwork {
    Legacy(LegacyNetwork),
    #[default]
    Manager,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct VirtualNetwork {
    pub target_name: String,
    #[serde(default)]
    pub address_prefixes: Vec<String>,
    #[serde(default)]
    pub dns_servers: Vec<String>,
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    #[serde(default)]
    pub source: SourceNetwork,
}

impl VirtualNetwork {
    pub fn subnet(&self, name: &str) -> Option<&Subnet> {
        self.subnets.iter().find(|s| s.target_name == name)
    }

    pub fn has_gateway_subnet(&self) -> bool {
        self.subnet(GATEWAY_SUBNET_NAME).is_some()
    }
}

impl fmt::Display for VirtualNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target_name)
    }
}
