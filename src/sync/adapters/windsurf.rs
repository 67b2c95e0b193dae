//! Windsurf adapter

use serde::Serialize;
use serde_json::{Number, Value};

use crate::context::{Context, Settings};
use crate::sync::adapter::{AdapterOptions, ToolAdapter};
use crate::sync::helpers::{get_file_patterns, get_model_settings};
use crate::sync::tool::Tool;

/// Version written into every generated Windsurf config
pub const WINDSURF_CONFIG_VERSION: &str = "1.0";

/// Windsurf adapter - renders a context as `.windsurf/config.json`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindsurfAdapter;

/// Windsurf config document; absent fields are omitted, never `null`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WindsurfConfig<'a> {
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<ModelConfig<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<ContextConfig<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permissions: Option<PermissionsConfig<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    features: Option<FeaturesConfig<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModelConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<&'a Number>,
}

#[derive(Debug, Serialize)]
struct ContextConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rules: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PermissionsConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_files: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    denied_files: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allowed_commands: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    denied_commands: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FeaturesConfig<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    streaming: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    autocomplete: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_edit: Option<&'a Value>,
}

impl<'a> FeaturesConfig<'a> {
    /// Feature toggles read by key; `None` when no toggle is set
    fn from_settings(settings: &'a Settings) -> Option<Self> {
        let features = Self {
            streaming: settings.get("streaming"),
            autocomplete: settings.get("autocomplete"),
            inline_edit: settings.get("inlineEdit"),
        };

        let any = features.streaming.is_some()
            || features.autocomplete.is_some()
            || features.inline_edit.is_some();
        any.then_some(features)
    }
}

impl ToolAdapter for WindsurfAdapter {
    fn name(&self) -> &'static str {
        "windsurf-adapter"
    }

    fn tool(&self) -> Tool {
        Tool::Windsurf
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn description(&self) -> &'static str {
        "JSON configuration read by the Windsurf editor"
    }

    fn supports(&self) -> &'static [&'static str] {
        &["metadata", "settings", "rules", "context", "permissions", "features"]
    }

    fn transform(&self, context: &Context, options: &AdapterOptions) -> String {
        let mut config = WindsurfConfig {
            version: WINDSURF_CONFIG_VERSION,
            name: None,
            description: None,
            model: None,
            context: None,
            permissions: None,
            features: None,
        };

        if let Some(metadata) = &context.metadata {
            config.name = metadata.name.as_deref();
            config.description = metadata.description.as_deref();
        }

        let settings = get_model_settings(context);
        if !settings.is_empty() {
            config.model = Some(ModelConfig {
                name: settings.model,
                temperature: settings.temperature,
                max_tokens: settings.max_tokens,
            });
        }

        // rules are passed through raw, front matter included
        let patterns = get_file_patterns(context);
        if !patterns.is_empty() || context.rules.is_some() {
            config.context = Some(ContextConfig {
                files: (!patterns.is_empty()).then_some(patterns),
                rules: context.rules.as_deref().filter(|r| !r.is_empty()),
            });
        }

        // explicit empty lists are preserved
        if let Some(permissions) = &context.permissions {
            let files = permissions.files.as_ref();
            let commands = permissions.commands.as_ref();
            config.permissions = Some(PermissionsConfig {
                allowed_files: files.and_then(|f| f.write.as_deref()),
                denied_files: files.and_then(|f| f.deny.as_deref()),
                allowed_commands: commands.and_then(|c| c.allow.as_deref()),
                denied_commands: commands.and_then(|c| c.deny.as_deref()),
            });
        }

        config.features = context.settings.as_ref().and_then(FeaturesConfig::from_settings);

        let rendered = if options.format {
            serde_json::to_string_pretty(&config)
        } else {
            serde_json::to_string(&config)
        };
        // string keys and plain values only, serialization cannot fail
        rendered.unwrap_or_default()
    }
}
