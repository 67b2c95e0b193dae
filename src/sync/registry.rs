//! @acp:module "Adapter Registry"
//! @acp:summary "Static lookup table from tool identifier to adapter"
//! @acp:domain cli
//! @acp:layer service

use super::adapter::{AdapterOptions, ToolAdapter, ValidationResult};
use super::adapters::{CursorAdapter, WindsurfAdapter};
use super::tool::Tool;
use crate::context::Context;

/// Every adapter the registry knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adapter {
    Cursor(CursorAdapter),
    Windsurf(WindsurfAdapter),
}

/// One entry per tool identifier, in listing order
static ADAPTERS: [(&str, Adapter); 2] = [
    ("cursor", Adapter::Cursor(CursorAdapter)),
    ("windsurf", Adapter::Windsurf(WindsurfAdapter)),
];

/// Get adapter by tool name (case-insensitive)
pub fn get_adapter(tool: &str) -> Option<&'static Adapter> {
    Tool::from_name(tool).map(adapter_for)
}

/// Get the registered adapter for a known tool
pub fn adapter_for(tool: Tool) -> &'static Adapter {
    match tool {
        Tool::Cursor => &ADAPTERS[0].1,
        Tool::Windsurf => &ADAPTERS[1].1,
    }
}

/// List all registered tool identifiers
pub fn list_adapters() -> Vec<&'static str> {
    ADAPTERS.iter().map(|(id, _)| *id).collect()
}

/// Iterate over all registered adapters
pub fn adapters() -> impl Iterator<Item = &'static Adapter> {
    ADAPTERS.iter().map(|(_, adapter)| adapter)
}

impl ToolAdapter for Adapter {
    fn name(&self) -> &'static str {
        match self {
            Adapter::Cursor(a) => a.name(),
            Adapter::Windsurf(a) => a.name(),
        }
    }

    fn tool(&self) -> Tool {
        match self {
            Adapter::Cursor(a) => a.tool(),
            Adapter::Windsurf(a) => a.tool(),
        }
    }

    fn version(&self) -> &'static str {
        match self {
            Adapter::Cursor(a) => a.version(),
            Adapter::Windsurf(a) => a.version(),
        }
    }

    fn description(&self) -> &'static str {
        match self {
            Adapter::Cursor(a) => a.description(),
            Adapter::Windsurf(a) => a.description(),
        }
    }

    fn supports(&self) -> &'static [&'static str] {
        match self {
            Adapter::Cursor(a) => a.supports(),
            Adapter::Windsurf(a) => a.supports(),
        }
    }

    fn transform(&self, context: &Context, options: &AdapterOptions) -> String {
        match self {
            Adapter::Cursor(a) => a.transform(context, options),
            Adapter::Windsurf(a) => a.transform(context, options),
        }
    }

    fn validate(&self, output: &str) -> ValidationResult {
        match self {
            Adapter::Cursor(a) => a.validate(output),
            Adapter::Windsurf(a) => a.validate(output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let lower = get_adapter("cursor").unwrap();
        assert!(std::ptr::eq(lower, get_adapter("CURSOR").unwrap()));
        assert!(std::ptr::eq(lower, get_adapter("Cursor").unwrap()));
        assert_eq!(lower.tool(), Tool::Cursor);

        let windsurf = get_adapter("Windsurf").unwrap();
        assert_eq!(windsurf.name(), "windsurf-adapter");
    }

    #[test]
    fn test_lookup_agrees_with_tool_names() {
        for name in ["cursor", "WINDSURF", "Cursor", "vim", "", " cursor"] {
            assert_eq!(
                get_adapter(name).map(|a| a.tool()),
                Tool::from_name(name),
                "lookup of {:?}",
                name
            );
        }
    }

    #[test]
    fn test_unknown_tool() {
        assert!(get_adapter("unknown-tool").is_none());
        assert!(get_adapter("").is_none());
    }

    #[test]
    fn test_list_adapters() {
        assert_eq!(list_adapters(), vec!["cursor", "windsurf"]);
    }

    #[test]
    fn test_keys_match_adapter_tools() {
        for (id, adapter) in ADAPTERS.iter() {
            assert_eq!(*id, adapter.tool().id());
            assert!(std::ptr::eq(adapter, adapter_for(adapter.tool())));
        }
        assert_eq!(adapters().count(), Tool::all().len());
    }

    #[test]
    fn test_enum_delegates_transform() {
        let context = Context::default();
        let options = AdapterOptions::default();
        assert_eq!(
            adapter_for(Tool::Cursor).transform(&context, &options),
            CursorAdapter.transform(&context, &options)
        );
        assert_eq!(
            adapter_for(Tool::Windsurf).generate(&context),
            WindsurfAdapter.generate(&context)
        );
        assert!(!adapter_for(Tool::Windsurf).validate("").valid);
    }

    #[test]
    fn test_metadata() {
        let metadata = adapter_for(Tool::Windsurf).metadata();
        assert_eq!(metadata.name, "windsurf-adapter");
        assert_eq!(metadata.tool, "windsurf");
        assert_eq!(metadata.version, "1.0.0");
        assert!(metadata.supports.contains(&"features"));
    }
}
