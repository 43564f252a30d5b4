//! Reference model: the selected source and target resources.
//!
//! - [`Selection`] - the graph handed over by the selection layer
//! - [`VirtualNetwork`], [`NetworkSecurityGroup`], [`RouteTable`] - networking
//! - [`LoadBalancer`] and [`PublicIp`] - load balancing
//! - [`VirtualMachine`], [`Disk`], [`NetworkInterface`], [`StorageAccount`] - compute
//! - [`Alert`] - findings raised during a run

mod alert;
mod compute;
mod load_balancer;
mod network;
mod selection;
mod subscription;
mod target_ref;

pub use alert::{Alert, Severity, Subject, SubjectKind};
pub use compute::{
    AvailabilitySet, BlobCoordinates, Disk, LegacyDisk, LoadBalancerMember, ManagerDisk,
    NetworkInterface, NetworkInterfaceIpConfiguration, OsFamily, SourceDisk, StorageAccount,
    StorageKey, VirtualMachine,
};
pub use load_balancer::{
    BackEndAddressPool, FrontEndBinding, FrontEndIpConfiguration, InboundNatRule, LoadBalancer,
    LoadBalancingRule, Probe, PublicIp,
};
pub use network::{
    ClientRootCertificate, ConnectionType, LegacyGateway, LegacyNetwork, LocalNetworkSite,
    NetworkSecurityGroup, NetworkSecurityGroupRule, Route, RouteTable, SourceNetwork, Subnet,
    VirtualNetwork, GATEWAY_SUBNET_NAME,
};
pub use selection::Selection;
pub use subscription::{CloudEnvironment, ResourceGroup, Subscription};
pub use target_ref::{SubnetRef, TargetRef};
