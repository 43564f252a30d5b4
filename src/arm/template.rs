//! The deployment template document.

use super::compute::{AvailabilitySetProperties, StorageAccountProperties, VirtualMachineProperties};
use super::network::{
    ConnectionProperties, LoadBalancerProperties, LocalNetworkGatewayProperties,
    NetworkInterfaceProperties, NetworkSecurityGroupProperties, PublicIpAddressProperties,
    RouteTableProperties, VirtualNetworkGatewayProperties, VirtualNetworkProperties,
};
use super::{resource_id, DependsOn, ResourceKind, API_VERSION, RESOURCE_GROUP_LOCATION};
use indexmap::IndexMap;
use serde::Serialize;

pub const TEMPLATE_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2015-01-01/deploymentTemplate.json#";
pub const CONTENT_VERSION: &str = "1.0.0.0";

/// Properties of one generated resource, by kind.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResourceProperties {
    NetworkSecurityGroup(NetworkSecurityGroupProperties),
    RouteTable(RouteTableProperties),
    VirtualNetwork(VirtualNetworkProperties),
    VirtualNetworkGateway(VirtualNetworkGatewayProperties),
    LocalNetworkGateway(LocalNetworkGatewayProperties),
    Connection(ConnectionProperties),
    PublicIpAddress(PublicIpAddressProperties),
    LoadBalancer(LoadBalancerProperties),
    NetworkInterface(NetworkInterfaceProperties),
    StorageAccount(StorageAccountProperties),
    AvailabilitySet(AvailabilitySetProperties),
    VirtualMachine(Box<VirtualMachineProperties>),
}

/// One top-level resource descriptor.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[serde(skip)]
    pub kind: ResourceKind,
    #[serde(rename = "type")]
    pub resource_type: &'static str,
    pub api_version: &'static str,
    pub name: String,
    pub location: String,
    pub properties: ResourceProperties,
    pub depends_on: DependsOn,
}

impl Resource {
    pub fn new(
        kind: ResourceKind,
        name: impl Into<String>,
        properties: ResourceProperties,
        depends_on: DependsOn,
    ) -> Resource {
        Resource {
            kind,
            resource_type: kind.resource_type(),
            api_version: API_VERSION,
            name: name.into(),
            location: RESOURCE_GROUP_LOCATION.to_string(),
            properties,
            depends_on,
        }
    }

    /// Dependency identifier other resources use to point at this one.
    pub fn id(&self) -> String {
        resource_id(self.kind, &self.name)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub parameter_type: String,
}

impl Parameter {
    pub fn new(parameter_type: impl Into<String>) -> Parameter {
        Parameter {
            parameter_type: parameter_type.into(),
        }
    }
}

/// The full template, serialized in insertion order.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    pub content_version: &'static str,
    pub parameters: IndexMap<String, Parameter>,
    pub variables: IndexMap<String, String>,
    pub resources: Vec<Resource>,
}

impl Template {
    pub fn new(resources: Vec<Resource>, parameters: IndexMap<String, Parameter>) -> Template {
        Template {
            schema: TEMPLATE_SCHEMA,
            content_version: CONTENT_VERSION,
            parameters,
            variables: IndexMap::new(),
            resources,
        }
    }

    pub fn resource(&self, kind: ResourceKind, name: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|r| r.kind == kind && r.name == name)
    }

    pub fn resources_of(&self, kind: ResourceKind) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(move |r| r.kind == kind)
    }
}
