//! Tool kind enum and the static registry of tool signatures.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The configuration footprint of one AI coding tool.
///
/// A signature lists the names, relative to a project root, that the tool
/// is known to create. File candidates only match regular (non-directory)
/// entries and directory candidates only match directories. A candidate may
/// contain a path separator (e.g. `.github/copilot-instructions.md`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolSignature {
    /// Human-readable tool name. Unique within the registry.
    pub name: &'static str,
    /// One-line description of the tool.
    pub description: &'static str,
    /// Reference URL for the tool.
    pub url: &'static str,
    /// Candidate file names, checked in order.
    pub file_names: &'static [&'static str],
    /// Candidate directory names, checked in order.
    pub dir_names: &'static [&'static str],
}

/// An AI coding tool whose configuration can be detected.
///
/// Variant declaration order is the registry order: detection visits tools
/// in this order, and [`ToolKind::all`] yields them in this order.
///
/// This enum is marked `#[non_exhaustive]` so new tools can be added
/// without a breaking change.
///
/// # Example
///
/// ```rust
/// use vibedetector::ToolKind;
///
/// for kind in ToolKind::all() {
///     let sig = kind.signature();
///     println!("{}: {} files, {} dirs", sig.name, sig.file_names.len(), sig.dir_names.len());
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
#[non_exhaustive]
pub enum ToolKind {
    /// Anthropic's Claude Code.
    ClaudeCode,
    /// Cursor editor.
    Cursor,
    /// Codeium's Windsurf IDE.
    Windsurf,
    /// GitHub Copilot.
    GitHubCopilot,
    /// Aider.
    Aider,
    /// Cline VS Code extension.
    Cline,
    /// Zed editor.
    Zed,
    /// Continue.dev.
    ContinueDev,
    /// AWS Kiro.
    Kiro,
    /// Google's Gemini CLI.
    GeminiCli,
    /// The cross-tool AGENTS.md convention.
    AgentsMd,
    /// StackBlitz Bolt.
    Bolt,
    /// Replit Agent.
    ReplitAgent,
    /// OpenAI's Codex CLI.
    CodexCli,
    /// Tabnine.
    Tabnine,
    /// Amazon Q Developer.
    AmazonQ,
    /// Sourcegraph Cody.
    SourcegraphCody,
    /// Augment Code.
    AugmentCode,
    /// Supermaven.
    Supermaven,
}

impl ToolKind {
    /// The static signature for this tool.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vibedetector::ToolKind;
    ///
    /// let sig = ToolKind::Cursor.signature();
    /// assert_eq!(sig.file_names, &[".cursorrules"]);
    /// assert_eq!(sig.dir_names, &[".cursor"]);
    /// ```
    pub fn signature(&self) -> &'static ToolSignature {
        match self {
            Self::ClaudeCode => &ToolSignature {
                name: "Claude Code",
                description: "Anthropic's CLI for Claude",
                url: "https://claude.ai/code",
                file_names: &["CLAUDE.md"],
                dir_names: &[".claude"],
            },
            Self::Cursor => &ToolSignature {
                name: "Cursor",
                description: "AI-powered code editor",
                url: "https://cursor.com",
                file_names: &[".cursorrules"],
                dir_names: &[".cursor"],
            },
            Self::Windsurf => &ToolSignature {
                name: "Windsurf",
                description: "Codeium's AI IDE",
                url: "https://codeium.com/windsurf",
                file_names: &[".windsurfrules"],
                dir_names: &[".windsurf"],
            },
            Self::GitHubCopilot => &ToolSignature {
                name: "GitHub Copilot",
                description: "GitHub's AI pair programmer",
                url: "https://github.com/features/copilot",
                file_names: &[".github/copilot-instructions.md"],
                dir_names: &[],
            },
            Self::Aider => &ToolSignature {
                name: "Aider",
                description: "AI pair programming in your terminal",
                url: "https://aider.chat",
                file_names: &[".aider.conf.yml", ".aiderignore", "CONVENTIONS.md"],
                dir_names: &[".aider"],
            },
            Self::Cline => &ToolSignature {
                name: "Cline",
                description: "AI coding assistant for VS Code",
                url: "https://github.com/cline/cline",
                file_names: &[".clinerules"],
                dir_names: &[".clinerules"],
            },
            Self::Zed => &ToolSignature {
                name: "Zed",
                description: "Zed editor AI configuration",
                url: "https://zed.dev",
                file_names: &[],
                dir_names: &[".zed"],
            },
            Self::ContinueDev => &ToolSignature {
                name: "Continue.dev",
                description: "Open-source AI code assistant",
                url: "https://continue.dev",
                file_names: &[],
                dir_names: &[".continue"],
            },
            Self::Kiro => &ToolSignature {
                name: "Kiro",
                description: "AWS agentic AI IDE",
                url: "https://kiro.dev",
                file_names: &[],
                dir_names: &[".kiro"],
            },
            Self::GeminiCli => &ToolSignature {
                name: "Gemini CLI",
                description: "Google's Gemini Code Assist",
                url: "https://developers.google.com/gemini-code-assist",
                file_names: &["GEMINI.md", "AGENT.md"],
                dir_names: &[".gemini"],
            },
            Self::AgentsMd => &ToolSignature {
                name: "AGENTS.md Standard",
                description: "Proposed cross-tool agent rules standard",
                url: "https://github.com/anthropics/agent-rules",
                file_names: &["AGENTS.md"],
                dir_names: &[],
            },
            Self::Bolt => &ToolSignature {
                name: "Bolt",
                description: "StackBlitz AI full-stack development",
                url: "https://bolt.new",
                file_names: &[".bolt"],
                dir_names: &[".bolt"],
            },
            Self::ReplitAgent => &ToolSignature {
                name: "Replit Agent",
                description: "Replit's AI coding agent",
                url: "https://replit.com",
                file_names: &[".replit"],
                dir_names: &[".replit"],
            },
            Self::CodexCli => &ToolSignature {
                name: "Codex CLI",
                description: "OpenAI's coding agent CLI",
                url: "https://github.com/openai/codex",
                file_names: &["codex.md"],
                dir_names: &[".codex"],
            },
            Self::Tabnine => &ToolSignature {
                name: "Tabnine",
                description: "AI code completion assistant",
                url: "https://tabnine.com",
                file_names: &[".tabnine.json", "tabnine.yaml"],
                dir_names: &[".tabnine"],
            },
            Self::AmazonQ => &ToolSignature {
                name: "Amazon Q Developer",
                description: "AWS AI coding assistant",
                url: "https://aws.amazon.com/q/developer/",
                file_names: &[],
                dir_names: &[".amazonq", ".q"],
            },
            Self::SourcegraphCody => &ToolSignature {
                name: "Sourcegraph Cody",
                description: "Sourcegraph's AI coding assistant",
                url: "https://sourcegraph.com/cody",
                file_names: &[".cody.json", "cody.json"],
                dir_names: &[".cody"],
            },
            Self::AugmentCode => &ToolSignature {
                name: "Augment Code",
                description: "Enterprise AI coding assistant",
                url: "https://augmentcode.com",
                file_names: &[],
                dir_names: &[".augment"],
            },
            Self::Supermaven => &ToolSignature {
                name: "Supermaven",
                description: "AI code completion with large context",
                url: "https://supermaven.com",
                file_names: &[],
                dir_names: &[".supermaven"],
            },
        }
    }

    /// Human-readable display name for the tool.
    ///
    /// ```rust
    /// use vibedetector::ToolKind;
    ///
    /// assert_eq!(ToolKind::ClaudeCode.display_name(), "Claude Code");
    /// assert_eq!(ToolKind::AgentsMd.display_name(), "AGENTS.md Standard");
    /// ```
    pub fn display_name(&self) -> &'static str {
        self.signature().name
    }

    /// Iterator over all known tools, in registry order.
    pub fn all() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}

/// The full registry, as signatures, in registry order.
pub fn registry() -> impl Iterator<Item = &'static ToolSignature> {
    ToolKind::all().map(|kind| kind.signature())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_size() {
        assert_eq!(ToolKind::all().count(), 19);
        assert_eq!(registry().count(), 19);
    }

    #[test]
    fn test_registry_order_starts_with_claude_code() {
        let names: Vec<_> = registry().map(|sig| sig.name).collect();
        assert_eq!(names[0], "Claude Code");
        assert_eq!(names[1], "Cursor");
        assert_eq!(names[names.len() - 1], "Supermaven");
    }

    #[test]
    fn test_names_are_unique() {
        let mut seen = HashSet::new();
        for sig in registry() {
            assert!(seen.insert(sig.name), "duplicate tool name: {}", sig.name);
        }
    }

    #[test]
    fn test_every_signature_has_a_candidate() {
        for sig in registry() {
            assert!(
                !sig.file_names.is_empty() || !sig.dir_names.is_empty(),
                "{} has no candidates",
                sig.name
            );
        }
    }

    #[test]
    fn test_nested_candidate() {
        let sig = ToolKind::GitHubCopilot.signature();
        assert_eq!(sig.file_names, &[".github/copilot-instructions.md"]);
        assert!(sig.dir_names.is_empty());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(ToolKind::ClaudeCode.display_name(), "Claude Code");
        assert_eq!(ToolKind::ContinueDev.display_name(), "Continue.dev");
        assert_eq!(ToolKind::AmazonQ.display_name(), "Amazon Q Developer");
    }

    #[test]
    fn test_derives() {
        let kind = ToolKind::Cursor;
        let copied = kind;
        assert_eq!(kind, copied);

        let json = serde_json::to_string(&ToolKind::ClaudeCode).unwrap();
        let deserialized: ToolKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, ToolKind::ClaudeCode);
    }
}
