//! Property references that depend on where the target resource lives.

use crate::arm::{Reference, ResourceKind};
use crate::models::TargetRef;

/// Reference to `subnet` inside `virtual_network`.
///
/// Networks deployed by this run resolve to the nested subnet identifier;
/// existing networks use their full resource id.
pub fn subnet_reference(virtual_network: &TargetRef, subnet: &str) -> Reference {
    match virtual_network {
        TargetRef::Migrated { name } => {
            Reference::to_child(ResourceKind::VirtualNetwork, name, "subnets", subnet)
        }
        TargetRef::Existing { id, .. } => Reference::new(format!("{id}/subnets/{subnet}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subnet_reference() {
        assert_eq!(
            subnet_reference(&TargetRef::migrated("vnet01"), "web").id,
            "[concat(resourceGroup().id, '/providers/Microsoft.Network/virtualNetworks/vnet01/subnets/web')]"
        );
        let existing = TargetRef::existing(
            "hub",
            "/subscriptions/0000/resourceGroups/net/providers/Microsoft.Network/virtualNetworks/hub",
        );
        assert_eq!(
            subnet_reference(&existing, "shared").id,
            "/subscriptions/0000/resourceGroups/net/providers/Microsoft.Network/virtualNetworks/hub/subnets/shared"
        );
    }
}
