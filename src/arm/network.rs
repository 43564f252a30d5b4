//! Properties of generated network resources.

use super::Reference;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpace {
    pub address_prefixes: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DhcpOptions {
    pub dns_servers: Vec<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubnetProperties {
    pub address_prefix: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_table: Option<Reference>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Subnet {
    pub name: String,
    pub properties: SubnetProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkProperties {
    pub address_space: AddressSpace,
    pub subnets: Vec<Subnet>,
    pub dhcp_options: DhcpOptions,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRuleProperties {
    pub description: String,
    pub direction: String,
    pub priority: u32,
    pub access: String,
    pub source_address_prefix: String,
    pub destination_address_prefix: String,
    pub source_port_range: String,
    pub destination_port_range: String,
    pub protocol: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SecurityRule {
    pub name: String,
    pub properties: SecurityRuleProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSecurityGroupProperties {
    pub security_rules: Vec<SecurityRule>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RouteProperties {
    pub address_prefix: String,
    pub next_hop_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_hop_ip_address: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub properties: RouteProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RouteTableProperties {
    pub routes: Vec<Route>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DnsSettings {
    pub domain_name_label: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicIpAddressProperties {
    #[serde(rename = "publicIPAllocationMethod")]
    pub public_ip_allocation_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dns_settings: Option<DnsSettings>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IpConfigurationProperties {
    #[serde(rename = "privateIPAllocationMethod")]
    pub private_ip_allocation_method: String,
    #[serde(rename = "privateIPAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Reference>,
    #[serde(rename = "publicIPAddress", skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<Reference>,
    #[serde(
        rename = "loadBalancerBackendAddressPools",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub load_balancer_backend_address_pools: Vec<Reference>,
    #[serde(
        rename = "loadBalancerInboundNatRules",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub load_balancer_inbound_nat_rules: Vec<Reference>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct IpConfiguration {
    pub name: String,
    pub properties: IpConfigurationProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkInterfaceProperties {
    #[serde(rename = "ipConfigurations")]
    pub ip_configurations: Vec<IpConfiguration>,
    #[serde(rename = "enableIPForwarding")]
    pub enable_ip_forwarding: bool,
    #[serde(rename = "networkSecurityGroup", skip_serializing_if = "Option::is_none")]
    pub network_security_group: Option<Reference>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FrontendIpConfigurationProperties {
    #[serde(rename = "privateIPAllocationMethod", skip_serializing_if = "Option::is_none")]
    pub private_ip_allocation_method: Option<String>,
    #[serde(rename = "privateIPAddress", skip_serializing_if = "Option::is_none")]
    pub private_ip_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<Reference>,
    #[serde(rename = "publicIPAddress", skip_serializing_if = "Option::is_none")]
    pub public_ip_address: Option<Reference>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FrontendIpConfiguration {
    pub name: String,
    pub properties: FrontendIpConfigurationProperties,
}

/// Name-only sub-resource, used for back-end address pools.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Named {
    pub name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InboundNatRuleProperties {
    #[serde(rename = "frontendIPConfiguration", skip_serializing_if = "Option::is_none")]
    pub frontend_ip_configuration: Option<Reference>,
    pub frontend_port: u16,
    pub backend_port: u16,
    pub protocol: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InboundNatRule {
    pub name: String,
    pub properties: InboundNatRuleProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProbeProperties {
    pub port: u16,
    pub protocol: String,
    pub interval_in_seconds: u32,
    pub number_of_probes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_path: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Probe {
    pub name: String,
    pub properties: ProbeProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancingRuleProperties {
    #[serde(rename = "frontendIPConfiguration")]
    pub frontend_ip_configuration: Reference,
    pub backend_address_pool: Reference,
    pub probe: Reference,
    pub frontend_port: u16,
    pub backend_port: u16,
    pub protocol: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LoadBalancingRule {
    pub name: String,
    pub properties: LoadBalancingRuleProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerProperties {
    #[serde(rename = "frontendIPConfigurations")]
    pub frontend_ip_configurations: Vec<FrontendIpConfiguration>,
    pub backend_address_pools: Vec<Named>,
    pub inbound_nat_rules: Vec<InboundNatRule>,
    pub load_balancing_rules: Vec<LoadBalancingRule>,
    pub probes: Vec<Probe>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GatewaySku {
    pub name: String,
    pub tier: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpnClientCertificateProperties {
    pub public_cert_data: String,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VpnClientCertificate {
    pub name: String,
    pub properties: VpnClientCertificateProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VpnClientConfiguration {
    pub vpn_client_address_pool: AddressSpace,
    pub vpn_client_root_certificates: Vec<VpnClientCertificate>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VirtualNetworkGatewayProperties {
    pub ip_configurations: Vec<IpConfiguration>,
    pub sku: GatewaySku,
    pub gateway_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_bgp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpn_client_configuration: Option<VpnClientConfiguration>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LocalNetworkGatewayProperties {
    pub local_network_address_space: AddressSpace,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway_ip_address: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionProperties {
    pub connection_type: String,
    pub virtual_network_gateway1: Reference,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_network_gateway2: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peer: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_key: Option<String>,
}
