//! Storage account builder.

use super::context::BuildContext;
use crate::arm::compute::StorageAccountProperties;
use crate::arm::{DependsOn, Resource, ResourceKind, ResourceProperties};
use crate::models::StorageAccount;

pub fn build_storage_account(ctx: &mut BuildContext, account: &StorageAccount) {
    let kind = ResourceKind::StorageAccount;
    log::info!("Start {}{}", kind.provider_path(), account.target_name);
    ctx.add_resource(Resource::new(
        kind,
        &account.target_name,
        ResourceProperties::StorageAccount(StorageAccountProperties {
            account_type: account.account_type.clone(),
        }),
        DependsOn::new(),
    ));
    log::info!("End {}{}", kind.provider_path(), account.target_name);
}
