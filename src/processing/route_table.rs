//! Route table builder and next hop translation.

use super::context::BuildContext;
use crate::arm::network::{Route, RouteProperties, RouteTableProperties};
use crate::arm::{DependsOn, Resource, ResourceKind, ResourceProperties};
use crate::models::RouteTable;

const VIRTUAL_APPLIANCE: &str = "VirtualAppliance";

/// Translate a legacy next hop type. Unknown values pass through.
///
/// ```
/// use arm_migrate::processing::next_hop_type;
/// assert_eq!(next_hop_type("VPNGateway"), "VirtualNetworkGateway");
/// assert_eq!(next_hop_type("Null"), "None");
/// ```
pub fn next_hop_type(legacy: &str) -> &str {
    match legacy {
        "VirtualAppliance" => VIRTUAL_APPLIANCE,
        "VPNGateway" => "VirtualNetworkGateway",
        "Internet" => "Internet",
        "VNETLocal" => "VnetLocal",
        "Null" => "None",
        other => other,
    }
}

/// Add `route_table` to the output unless it is already there.
pub fn build_route_table(ctx: &mut BuildContext, route_table: &RouteTable) {
    let kind = ResourceKind::RouteTable;
    if ctx.contains_resource(kind, &route_table.target_name) {
        return;
    }
    log::info!("Start {}{}", kind.provider_path(), route_table.target_name);

    let routes = route_table
        .routes
        .iter()
        .map(|route| {
            let hop = next_hop_type(&route.next_hop_type);
            Route {
                name: route.name.clone(),
                properties: RouteProperties {
                    address_prefix: route.address_prefix.clone(),
                    next_hop_type: hop.to_string(),
                    next_hop_ip_address: if hop == VIRTUAL_APPLIANCE {
                        route.next_hop_ip_address.clone()
                    } else {
                        None
                    },
                },
            }
        })
        .collect();

    ctx.add_resource(Resource::new(
        kind,
        &route_table.target_name,
        ResourceProperties::RouteTable(RouteTableProperties { routes }),
        DependsOn::new(),
    ));
    log::info!("End {}{}", kind.provider_path(), route_table.target_name);
}
