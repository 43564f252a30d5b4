//! One generation run: validate, build every category in order, finish.

use super::context::{BuildContext, Generation};
use super::load_balancer::build_load_balancer;
use super::network_security_group::build_network_security_group;
use super::status::StatusProvider;
use super::storage_account::build_storage_account;
use super::validate::validate;
use super::virtual_machine::build_virtual_machine;
use super::virtual_network::build_virtual_network;
use crate::config::Settings;
use crate::models::Selection;
use uuid::Uuid;

/// Build the template, alerts and copy manifest for `selection`.
///
/// Every run starts from empty collections, so calling this twice on the same
/// selection yields equal results. `run_id` only tags log lines.
///
/// # Arguments
/// * `selection` - The selected resources
/// * `settings` - Build mode and naming suffixes
/// * `run_id` - Correlation token generated by the caller
/// * `status` - Progress sink
pub fn generate(
    selection: &Selection,
    settings: &Settings,
    run_id: Uuid,
    status: &dyn StatusProvider,
) -> Generation {
    log::info!("#Start generate() run={run_id} build_mode={:?}", settings.build_mode);
    let mut ctx = BuildContext::new(selection, settings, run_id, status);

    ctx.update_status("BUSY: Validating selection");
    ctx.extend_alerts(validate(selection));

    for nsg in &selection.network_security_groups {
        ctx.update_status(&format!("BUSY: Exporting Network Security Group : {nsg}"));
        build_network_security_group(&mut ctx, nsg);
    }

    for vnet in &selection.virtual_networks {
        ctx.update_status(&format!("BUSY: Exporting Virtual Network : {vnet}"));
        build_virtual_network(&mut ctx, vnet);
    }

    for lb in &selection.load_balancers {
        ctx.update_status(&format!("BUSY: Exporting Load Balancer : {lb}"));
        build_load_balancer(&mut ctx, lb);
    }

    for account in &selection.storage_accounts {
        ctx.update_status(&format!("BUSY: Exporting Storage Account : {account}"));
        build_storage_account(&mut ctx, account);
    }

    for vm in &selection.virtual_machines {
        ctx.update_status(&format!("BUSY: Exporting Virtual Machine : {vm}"));
        build_virtual_machine(&mut ctx, vm);
    }

    ctx.update_status("Ready");
    let generation = ctx.finish();
    let summary = generation.summary();
    log::info!(
        "#End generate() run={run_id} resources={} parameters={} errors={} warnings={} copies={}",
        summary.resources,
        summary.parameters,
        summary.errors,
        summary.warnings,
        summary.copy_blob_details
    );
    generation
}
