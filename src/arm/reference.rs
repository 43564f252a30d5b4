//! Deployment-time reference strings.
//!
//! A dependency identifier and a property reference share one form:
//! `[concat(resourceGroup().id, '/providers/<namespace>/<type>/<name>')]`,
//! with `/<collection>/<child>` appended for nested sub-resources.

use serde::Serialize;
use std::fmt;

/// Expression for the id of the resource group being deployed into.
pub const RESOURCE_GROUP_ID: &str = "resourceGroup().id";
/// Expression every generated resource uses as its location.
pub const RESOURCE_GROUP_LOCATION: &str = "[resourceGroup().location]";
/// API version written on every generated resource.
pub const API_VERSION: &str = "2015-06-15";

/// Every resource type the generator emits or references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    NetworkSecurityGroup,
    RouteTable,
    VirtualNetwork,
    VirtualNetworkGateway,
    LocalNetworkGateway,
    Connection,
    PublicIpAddress,
    LoadBalancer,
    NetworkInterface,
    StorageAccount,
    AvailabilitySet,
    VirtualMachine,
    ExpressRouteCircuit,
}

impl ResourceKind {
    /// Full resource type, e.g. `Microsoft.Network/virtualNetworks`.
    pub fn resource_type(&self) -> &'static str {
        match self {
            ResourceKind::NetworkSecurityGroup => "Microsoft.Network/networkSecurityGroups",
            ResourceKind::RouteTable => "Microsoft.Network/routeTables",
            ResourceKind::VirtualNetwork => "Microsoft.Network/virtualNetworks",
            ResourceKind::VirtualNetworkGateway => "Microsoft.Network/virtualNetworkGateways",
            ResourceKind::LocalNetworkGateway => "Microsoft.Network/localNetworkGateways",
            ResourceKind::Connection => "Microsoft.Network/connections",
            ResourceKind::PublicIpAddress => "Microsoft.Network/publicIPAddresses",
            ResourceKind::LoadBalancer => "Microsoft.Network/loadBalancers",
            ResourceKind::NetworkInterface => "Microsoft.Network/networkInterfaces",
            ResourceKind::StorageAccount => "Microsoft.Storage/storageAccounts",
            ResourceKind::AvailabilitySet => "Microsoft.Compute/availabilitySets",
            ResourceKind::VirtualMachine => "Microsoft.Compute/virtualMachines",
            ResourceKind::ExpressRouteCircuit => "Microsoft.Network/expressRouteCircuits",
        }
    }

    /// Provider path prefix, e.g. `/providers/Microsoft.Network/virtualNetworks/`.
    pub fn provider_path(&self) -> String {
        format!("/providers/{}/", self.resource_type())
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_type())
    }
}

/// Dependency identifier (and property reference) of a top-level resource.
///
/// ```
/// use arm_migrate::arm::{resource_id, ResourceKind};
/// assert_eq!(
///     resource_id(ResourceKind::StorageAccount, "store01"),
///     "[concat(resourceGroup().id, '/providers/Microsoft.Storage/storageAccounts/store01')]"
/// );
/// ```
pub fn resource_id(kind: ResourceKind, name: &str) -> String {
    format!(
        "[concat({RESOURCE_GROUP_ID}, '{provider}{name}')]",
        provider = kind.provider_path()
    )
}

/// Reference to a sub-resource nested under `parent`, e.g. a subnet or a probe.
pub fn child_id(kind: ResourceKind, parent: &str, collection: &str, child: &str) -> String {
    format!(
        "[concat({RESOURCE_GROUP_ID}, '{provider}{parent}/{collection}/{child}')]",
        provider = kind.provider_path()
    )
}

/// `{ "id": ... }` object used wherever a property points at another resource.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub id: String,
}

impl Reference {
    pub fn new(id: impl Into<String>) -> Reference {
        Reference { id: id.into() }
    }

    pub fn to(kind: ResourceKind, name: &str) -> Reference {
        Reference::new(resource_id(kind, name))
    }

    pub fn to_child(kind: ResourceKind, parent: &str, collection: &str, child: &str) -> Reference {
        Reference::new(child_id(kind, parent, collection, child))
    }
}

/// Ordered dependency list of one resource; each identifier appears at most once.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct DependsOn(Vec<String>);

impl DependsOn {
    pub fn new() -> DependsOn {
        DependsOn(Vec::new())
    }

    /// Add `id` unless already present. Returns true when it was added.
    pub fn add(&mut self, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|d| d == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
