//! Deployment instructions: a text template with `{token}` placeholders.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::models::{Alert, CloudEnvironment, ResourceGroup, Subscription};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

pub const INSTRUCTIONS_FILE_NAME: &str = "DeployInstructions.html";

const BUILT_IN_TEMPLATE: &str = include_str!("../templates/deploy_instructions.html");

static TOKEN_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_token_regex() -> &'static Regex {
    TOKEN_REGEX.get_or_init(|| Regex::new(r"\{[A-Za-z][A-Za-z0-9_]*\}").expect("Invalid Regex"))
}

/// Values substituted into the instructions template.
#[derive(Debug, Clone, Default)]
pub struct InstructionValues {
    pub environment_switch: String,
    pub tenant_switch: String,
    pub subscription_switch: String,
    pub template_path: String,
    pub blob_details_path: String,
    pub resource_group_name: String,
    pub location: String,
    pub install_path: String,
    pub messages: String,
}

impl InstructionValues {
    pub fn new(
        target: Option<&Subscription>,
        resource_group: Option<&ResourceGroup>,
        alerts: &[Alert],
        settings: &Settings,
        output_directory: &Path,
    ) -> InstructionValues {
        let environment = target.map(|s| s.environment).unwrap_or_default();
        InstructionValues {
            environment_switch: if environment == CloudEnvironment::AzureCloud {
                String::new()
            } else {
                format!(" -EnvironmentName {environment}")
            },
            tenant_switch: target
                .and_then(|s| s.tenant_id)
                .map(|tenant| format!(" -TenantId '{tenant}'"))
                .unwrap_or_default(),
            subscription_switch: target
                .and_then(|s| s.subscription_id.as_deref())
                .map(|id| format!(" -SubscriptionId '{id}'"))
                .unwrap_or_default(),
            template_path: output_directory
                .join(super::TEMPLATE_FILE_NAME)
                .display()
                .to_string(),
            blob_details_path: output_directory
                .join(super::COPY_BLOB_DETAILS_FILE_NAME)
                .display()
                .to_string(),
            resource_group_name: resource_group
                .map(|rg| rg.target_name.clone())
                .unwrap_or_default(),
            location: resource_group
                .and_then(|rg| rg.target_location.clone())
                .unwrap_or_default(),
            install_path: settings.install_path.display().to_string(),
            messages: render_messages(alerts),
        }
    }
}

/// Each alert as an escaped HTML list item.
pub fn render_messages(alerts: &[Alert]) -> String {
    alerts
        .iter()
        .map(|alert| {
            format!(
                "<li>{}: {}</li>",
                alert.severity,
                escape_html(&alert.message)
            )
        })
        .collect::<Vec<String>>()
        .join("\n")
}

fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Template text: the configured file, or the built-in template.
pub fn load_instructions_template(settings: &Settings) -> Result<String> {
    match &settings.instructions_template {
        Some(path) => {
            log::info!("Reading instructions template {}", path.display());
            std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })
        }
        None => Ok(BUILT_IN_TEMPLATE.to_string()),
    }
}

/// Replace every known token in `template`.
///
/// Anything still shaped like a token afterwards is logged, not rejected.
pub fn render_instructions(template: &str, values: &InstructionValues) -> String {
    let replacements: [(&str, &str); 9] = [
        ("{environmentSwitch}", values.environment_switch.as_str()),
        ("{tenantSwitch}", values.tenant_switch.as_str()),
        ("{subscriptionSwitch}", values.subscription_switch.as_str()),
        ("{templatePath}", values.template_path.as_str()),
        ("{blobDetailsPath}", values.blob_details_path.as_str()),
        ("{resourceGroupName}", values.resource_group_name.as_str()),
        ("{location}", values.location.as_str()),
        ("{installPath}", values.install_path.as_str()),
        ("{messages}", values.messages.as_str()),
    ];
    let rendered = replacements
        .into_iter()
        .fold(template.to_string(), |text, (token, value)| text.replace(token, value));

    for leftover in get_token_regex().find_iter(&rendered) {
        log::warn!("Instructions template token {} was not replaced", leftover.as_str());
    }
    rendered
}
