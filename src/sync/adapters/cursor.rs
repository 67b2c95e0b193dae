//! Cursor IDE adapter

use crate::context::Context;
use crate::sync::adapter::{AdapterOptions, ToolAdapter};
use crate::sync::helpers::{
    format_number, get_file_patterns, get_model_settings, strip_front_matter,
};
use crate::sync::tool::Tool;

/// Cursor IDE adapter - renders a context as a markdown `.cursorrules` file
///
/// Sections are emitted in a fixed order and each one is skipped entirely
/// when its source field is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorAdapter;

impl ToolAdapter for CursorAdapter {
    fn name(&self) -> &'static str {
        "cursor-adapter"
    }

    fn tool(&self) -> Tool {
        Tool::Cursor
    }

    fn version(&self) -> &'static str {
        "1.0.0"
    }

    fn description(&self) -> &'static str {
        "Markdown rules file read by the Cursor assistant"
    }

    fn supports(&self) -> &'static [&'static str] {
        &["metadata", "settings", "rules", "context", "permissions"]
    }

    fn transform(&self, context: &Context, options: &AdapterOptions) -> String {
        let mut sections: Vec<String> = Vec::new();

        if options.comments {
            sections.push("<!-- Generated from VERSA configuration -->".into());
            sections.push("<!-- https://github.com/dotAIslash/versa -->".into());
            sections.push(String::new());
        }

        if let Some(metadata) = &context.metadata {
            if let Some(name) = metadata.name.as_deref().filter(|n| !n.is_empty()) {
                sections.push(format!("# {}", name));
                sections.push(String::new());
            }
            if let Some(description) = metadata.description.as_deref().filter(|d| !d.is_empty()) {
                sections.push(description.to_string());
                sections.push(String::new());
            }
        }

        let settings = get_model_settings(context);
        if !settings.is_empty() {
            sections.push("## AI Assistant Configuration".into());
            sections.push(String::new());
            if let Some(model) = settings.model {
                sections.push(format!("**Model:** {}", model));
            }
            if let Some(temperature) = settings.temperature {
                sections.push(format!("**Temperature:** {}", format_number(temperature)));
            }
            // zero tokens is treated as unset
            let max_tokens = settings.max_tokens.and_then(|t| t.as_f64());
            if let Some(max_tokens) = max_tokens.filter(|t| *t != 0.0) {
                sections.push(format!("**Max Tokens:** {}", format_number(max_tokens)));
            }
            sections.push(String::new());
        }

        if let Some(rules) = context.rules.as_deref().filter(|r| !r.is_empty()) {
            sections.push("## Guidelines".into());
            sections.push(String::new());
            for rule in rules {
                sections.push(strip_front_matter(rule));
                sections.push(String::new());
            }
        }

        let patterns = get_file_patterns(context);
        if !patterns.is_empty() {
            sections.push("## Relevant Files".into());
            sections.push(String::new());
            sections.push("Focus on these files when providing assistance:".into());
            sections.push(String::new());
            sections.extend(patterns.iter().map(|p| code_bullet(p)));
            sections.push(String::new());
        }

        if let Some(permissions) = &context.permissions {
            sections.push("## Permissions & Constraints".into());
            sections.push(String::new());

            let files = permissions.files.as_ref();
            push_list(&mut sections, "**Can modify:**", files.and_then(|f| f.write.as_deref()));
            push_list(&mut sections, "**Never modify:**", files.and_then(|f| f.deny.as_deref()));
            push_list(
                &mut sections,
                "**Forbidden commands:**",
                permissions.commands.as_ref().and_then(|c| c.deny.as_deref()),
            );
        }

        sections.join("\n")
    }
}

fn code_bullet(item: &str) -> String {
    format!("- `{}`", item)
}

/// Labelled bullet list followed by a blank line; skipped when empty
fn push_list(sections: &mut Vec<String>, label: &str, items: Option<&[String]>) {
    let Some(items) = items.filter(|i| !i.is_empty()) else {
        return;
    };
    sections.push(label.to_string());
    sections.extend(items.iter().map(|i| code_bullet(i)));
    sections.push(String::new());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{CommandPermissions, FilePermissions, Metadata, Permissions, Settings};
    use pretty_assertions::assert_eq;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_minimal_context() {
        let output = CursorAdapter.generate(&Context::default());
        assert_eq!(
            output,
            "<!-- Generated from VERSA configuration -->\n<!-- https://github.com/dotAIslash/versa -->\n"
        );
        assert!(!output.contains("##"));
    }

    #[test]
    fn test_comments_option() {
        let without = AdapterOptions::default().with_comments(false);
        let output = CursorAdapter.transform(&Context::default(), &without);
        assert!(!output.contains("Generated from VERSA"));
    }

    #[test]
    fn test_metadata_lines() {
        let context = Context {
            metadata: Some(Metadata {
                name: Some("Test Project".into()),
                description: Some("A test project for VERSA".into()),
            }),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(output, "# Test Project\n\nA test project for VERSA\n");
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.contains(&"# Test Project"));
        assert!(lines.contains(&"A test project for VERSA"));
    }

    #[test]
    fn test_model_settings_section() {
        let context = Context {
            settings: Some(Settings {
                model: Some("claude-sonnet-4".into()),
                temperature: Some(0.7),
                max_tokens: Some(4096.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(
            output,
            "## AI Assistant Configuration\n\n**Model:** claude-sonnet-4\n**Temperature:** 0.7\n**Max Tokens:** 4096\n"
        );
    }

    #[test]
    fn test_zero_values() {
        let context = Context {
            settings: Some(Settings {
                temperature: Some(0.0),
                max_tokens: Some(0.into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let output = CursorAdapter.generate(&context);
        assert!(output.contains("**Temperature:** 0"));
        assert!(!output.contains("Max Tokens"));
        assert!(!output.contains("**Model:**"));
    }

    #[test]
    fn test_float_max_tokens() {
        let context = Context::from_value(serde_json::json!({
            "version": "1.0",
            "settings": {"maxTokens": 4096.0, "temperature": 1e-7}
        }))
        .unwrap();

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(
            output,
            "## AI Assistant Configuration\n\n**Temperature:** 1e-7\n**Max Tokens:** 4096\n"
        );
    }

    #[test]
    fn test_settings_without_model_fields() {
        let context = Context {
            settings: Some(Settings::default().with("streaming", true)),
            ..Default::default()
        };
        assert!(!CursorAdapter.generate(&context).contains("AI Assistant Configuration"));
    }

    #[test]
    fn test_rules_strip_front_matter() {
        let context = Context {
            rules: Some(strings(&[
                "---\nai:meta\n  priority: high\n---\n\n# Style Guide\n\nUse TypeScript strict mode.",
                "# Testing\n\n---\nkept: true\n---\nWrite comprehensive tests.",
            ])),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(
            output,
            "## Guidelines\n\n\
             # Style Guide\n\nUse TypeScript strict mode.\n\n\
             # Testing\n\n---\nkept: true\n---\nWrite comprehensive tests.\n"
        );
        assert!(!output.contains("priority: high"));
    }

    #[test]
    fn test_file_patterns() {
        let context = Context {
            context: Some(strings(&["src/**/*.ts", "*.config.ts"])),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(
            output,
            "## Relevant Files\n\nFocus on these files when providing assistance:\n\n- `src/**/*.ts`\n- `*.config.ts`\n"
        );
    }

    #[test]
    fn test_permissions() {
        let context = Context {
            permissions: Some(Permissions {
                files: Some(FilePermissions {
                    write: Some(strings(&["src/**"])),
                    deny: Some(strings(&[".env*", "*.key"])),
                }),
                commands: Some(CommandPermissions {
                    allow: Some(strings(&["npm test"])),
                    deny: Some(strings(&["rm -rf"])),
                }),
            }),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(
            output,
            "## Permissions & Constraints\n\n\
             **Can modify:**\n- `src/**`\n\n\
             **Never modify:**\n- `.env*`\n- `*.key`\n\n\
             **Forbidden commands:**\n- `rm -rf`\n"
        );
        assert!(!output.contains("npm test"));
    }

    #[test]
    fn test_empty_permission_lists_are_skipped() {
        let context = Context {
            permissions: Some(Permissions {
                files: Some(FilePermissions {
                    write: Some(Vec::new()),
                    deny: None,
                }),
                commands: None,
            }),
            ..Default::default()
        };

        let output = CursorAdapter.transform(&context, &AdapterOptions::default().with_comments(false));
        assert_eq!(output, "## Permissions & Constraints\n");
    }

    #[test]
    fn test_identity() {
        assert_eq!(CursorAdapter.name(), "cursor-adapter");
        assert_eq!(CursorAdapter.tool(), Tool::Cursor);
        assert_eq!(CursorAdapter.version(), "1.0.0");
    }
}
