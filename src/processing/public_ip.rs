//! Public IP address builder, shared by load balancers, gateways and NICs.

use super::context::BuildContext;
use crate::arm::network::{DnsSettings, PublicIpAddressProperties};
use crate::arm::{DependsOn, Resource, ResourceKind, ResourceProperties};
use crate::models::PublicIp;

/// Add `public_ip` to the output once, however many front ends share it.
pub fn build_public_ip(ctx: &mut BuildContext, public_ip: &PublicIp) {
    let kind = ResourceKind::PublicIpAddress;
    if ctx.contains_resource(kind, &public_ip.target_name) {
        log::debug!("{}{} already built", kind.provider_path(), public_ip.target_name);
        return;
    }
    log::info!("Start {}{}", kind.provider_path(), public_ip.target_name);

    let dns_settings = public_ip
        .domain_name_label
        .as_deref()
        .filter(|label| !label.is_empty())
        .map(|label| DnsSettings {
            domain_name_label: label.to_string(),
        });

    ctx.add_resource(Resource::new(
        kind,
        &public_ip.target_name,
        ResourceProperties::PublicIpAddress(PublicIpAddressProperties {
            public_ip_allocation_method: public_ip.allocation_method.clone(),
            dns_settings,
        }),
        DependsOn::new(),
    ));
    log::info!("End {}{}", kind.provider_path(), public_ip.target_name);
}
