//! Network security group builder.

use super::context::BuildContext;
use crate::arm::network::{NetworkSecurityGroupProperties, SecurityRule, SecurityRuleProperties};
use crate::arm::{DependsOn, Resource, ResourceKind, ResourceProperties};
use crate::models::NetworkSecurityGroup;

/// Add `nsg` to the output unless it is already there.
///
/// Platform managed rules are dropped; every other rule maps one-to-one.
pub fn build_network_security_group(ctx: &mut BuildContext, nsg: &NetworkSecurityGroup) {
    let kind = ResourceKind::NetworkSecurityGroup;
    if ctx.contains_resource(kind, &nsg.target_name) {
        return;
    }
    log::info!("Start {}{}", kind.provider_path(), nsg.target_name);

    let security_rules = nsg
        .rules
        .iter()
        .filter(|rule| !rule.is_system_rule)
        .map(|rule| SecurityRule {
            name: rule.name.clone(),
            properties: SecurityRuleProperties {
                description: rule.name.clone(),
                direction: rule.direction.clone(),
                priority: rule.priority,
                access: rule.access.clone(),
                source_address_prefix: rule.source_address_prefix.clone(),
                destination_address_prefix: rule.destination_address_prefix.clone(),
                source_port_range: rule.source_port_range.clone(),
                destination_port_range: rule.destination_port_range.clone(),
                protocol: rule.protocol.clone(),
            },
        })
        .collect();

    ctx.add_resource(Resource::new(
        kind,
        &nsg.target_name,
        ResourceProperties::NetworkSecurityGroup(NetworkSecurityGroupProperties { security_rules }),
        DependsOn::new(),
    ));
    log::info!("End {}{}", kind.provider_path(), nsg.target_name);
}
