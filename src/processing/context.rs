//! Per-run accumulation of resources, parameters, alerts and blob copies.
//!
//! A [`BuildContext`] starts empty for every run, is handed to each builder in
//! turn and is consumed by [`BuildContext::finish`] into an immutable
//! [`Generation`].

use super::copy_blob::CopyBlobDetail;
use super::status::StatusProvider;
use crate::arm::{resource_id, DependsOn, Parameter, Resource, ResourceKind, Template};
use crate::config::Settings;
use crate::models::{Alert, CloudEnvironment, Selection, Severity};
use indexmap::IndexMap;
use std::collections::HashSet;
use uuid::Uuid;

pub struct BuildContext<'a> {
    pub selection: &'a Selection,
    pub settings: &'a Settings,
    run_id: Uuid,
    status: &'a dyn StatusProvider,
    resources: Vec<Resource>,
    resource_ids: HashSet<String>,
    parameters: IndexMap<String, Parameter>,
    alerts: Vec<Alert>,
    copy_blob_details: Vec<CopyBlobDetail>,
}

impl<'a> BuildContext<'a> {
    pub fn new(
        selection: &'a Selection,
        settings: &'a Settings,
        run_id: Uuid,
        status: &'a dyn StatusProvider,
    ) -> BuildContext<'a> {
        BuildContext {
            selection,
            settings,
            run_id,
            status,
            resources: Vec::new(),
            resource_ids: HashSet::new(),
            parameters: IndexMap::new(),
            alerts: Vec::new(),
            copy_blob_details: Vec::new(),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn update_status(&self, status: &str) {
        self.status.update_status(status);
    }

    /// Environment whose blob endpoints target disks are written to.
    pub fn target_environment(&self) -> CloudEnvironment {
        self.selection
            .target_subscription
            .as_ref()
            .map(|s| s.environment)
            .unwrap_or_default()
    }

    pub fn source_environment(&self) -> CloudEnvironment {
        self.selection
            .source_subscription
            .as_ref()
            .map(|s| s.environment)
            .unwrap_or_default()
    }

    /// Append a resource to the output collection.
    pub fn add_resource(&mut self, resource: Resource) {
        log::debug!(
            "run={} add resource {}{}",
            self.run_id,
            resource.kind.provider_path(),
            resource.name
        );
        self.resource_ids.insert(resource.id());
        self.resources.push(resource);
    }

    /// True when a resource with this dependency identifier was already added.
    pub fn contains(&self, id: &str) -> bool {
        self.resource_ids.contains(id)
    }

    pub fn contains_resource(&self, kind: ResourceKind, name: &str) -> bool {
        self.contains(&resource_id(kind, name))
    }

    /// Add a dependency on `kind`/`name` if that resource is in the output.
    ///
    /// Returns false (and leaves `depends_on` untouched) for resources this run
    /// does not deploy, so no dependency list can dangle.
    pub fn depend_on(&self, depends_on: &mut DependsOn, kind: ResourceKind, name: &str) -> bool {
        let id = resource_id(kind, name);
        if self.contains(&id) {
            depends_on.add(id);
            true
        } else {
            log::debug!("No dependency on {}{name}, not in template", kind.provider_path());
            false
        }
    }

    /// Register a template parameter once; later requests are ignored.
    pub fn add_parameter(&mut self, name: &str, parameter_type: &str) {
        if !self.parameters.contains_key(name) {
            self.parameters
                .insert(name.to_string(), Parameter::new(parameter_type));
        }
    }

    pub fn add_alert(&mut self, alert: Alert) {
        match alert.severity {
            Severity::Error => log::warn!("{alert}"),
            Severity::Warning => log::info!("{alert}"),
        }
        self.alerts.push(alert);
    }

    pub fn extend_alerts(&mut self, alerts: impl IntoIterator<Item = Alert>) {
        for alert in alerts {
            self.add_alert(alert);
        }
    }

    pub fn add_copy_blob_detail(&mut self, detail: CopyBlobDetail) {
        self.copy_blob_details.push(detail);
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Close the run and freeze everything it produced.
    pub fn finish(self) -> Generation {
        Generation {
            run_id: self.run_id,
            template: Template::new(self.resources, self.parameters),
            alerts: self.alerts,
            copy_blob_details: self.copy_blob_details,
        }
    }
}

/// Everything one run produced.
#[derive(Debug, Clone)]
pub struct Generation {
    pub run_id: Uuid,
    pub template: Template,
    pub alerts: Vec<Alert>,
    pub copy_blob_details: Vec<CopyBlobDetail>,
}

/// Counts reported to the caller when a run completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    pub resources: usize,
    pub parameters: usize,
    pub errors: usize,
    pub warnings: usize,
    pub copy_blob_details: usize,
}

impl Generation {
    pub fn summary(&self) -> GenerationSummary {
        let errors = self.alerts.iter().filter(|a| a.is_error()).count();
        GenerationSummary {
            resources: self.template.resources.len(),
            parameters: self.template.parameters.len(),
            errors,
            warnings: self.alerts.len() - errors,
            copy_blob_details: self.copy_blob_details.len(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.alerts.iter().any(|a| a.is_error())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::compute::StorageAccountProperties;
    use crate::arm::ResourceProperties;
    use crate::processing::status::LogStatus;

    fn storage(name: &str) -> Resource {
        Resource::new(
            ResourceKind::StorageAccount,
            name,
            ResourceProperties::StorageAccount(StorageAccountProperties {
                account_type: "Standard_LRS".to_string(),
            }),
            DependsOn::new(),
        )
    }

    #[test]
    fn test_depend_on_only_present_resources() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        ctx.add_resource(storage("store01"));

        let mut deps = DependsOn::new();
        assert!(ctx.depend_on(&mut deps, ResourceKind::StorageAccount, "store01"));
        assert!(ctx.depend_on(&mut deps, ResourceKind::StorageAccount, "store01"));
        assert!(!ctx.depend_on(&mut deps, ResourceKind::StorageAccount, "elsewhere"));
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_parameter_added_once() {
        let selection = Selection::default();
        let settings = Settings::default();
        let mut ctx = BuildContext::new(&selection, &settings, Uuid::nil(), &LogStatus);
        ctx.add_parameter("adminUsername", "string");
        ctx.add_parameter("adminUsername", "string");
        ctx.add_parameter("adminPassword", "securestring");
        let generation = ctx.finish();
        let names: Vec<&String> = generation.template.parameters.keys().collect();
        assert_eq!(names, vec!["adminUsername", "adminPassword"]);
        assert_eq!(generation.summary().parameters, 2);
    }
}
