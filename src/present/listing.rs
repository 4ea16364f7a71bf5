//! Listing of the supported tools.

use crate::{registry, ToolSignature};
use std::fmt::Write;

/// Render every registry entry with its candidate names.
///
/// Tools are sorted case-insensitively by name. Directory candidates are
/// shown with a trailing `/`. Empty candidate lists are omitted.
pub fn format_listing() -> String {
    let mut tools: Vec<&ToolSignature> = registry().collect();
    tools.sort_by_key(|sig| sig.name.to_lowercase());

    let mut out = String::from("Supported AI coding tools:\n\n");
    for sig in tools {
        let _ = writeln!(out, "  {}", sig.name);
        let _ = writeln!(out, "    {}", sig.description);
        let _ = writeln!(out, "    URL: {}", sig.url);

        if !sig.file_names.is_empty() {
            let _ = writeln!(out, "    Files: {}", sig.file_names.join(", "));
        }
        if !sig.dir_names.is_empty() {
            let _ = writeln!(out, "    Directories: {}/", sig.dir_names.join("/, "));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_header_and_every_tool() {
        let out = format_listing();
        assert!(out.starts_with("Supported AI coding tools:\n\n"));
        for sig in registry() {
            assert!(out.contains(&format!("  {}\n", sig.name)), "{}", sig.name);
        }
    }

    #[test]
    fn test_listing_case_insensitive_order() {
        let out = format_listing();
        let positions: Vec<usize> = [
            "  AGENTS.md Standard\n",
            "  Aider\n",
            "  Amazon Q Developer\n",
            "  Augment Code\n",
            "  Bolt\n",
            "  Supermaven\n",
            "  Zed\n",
        ]
        .iter()
        .map(|name| out.find(name).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_listing_entry_layout() {
        let out = format_listing();
        let expected = "  Amazon Q Developer\n    AWS AI coding assistant\n    URL: https://aws.amazon.com/q/developer/\n    Directories: .amazonq/, .q/\n\n";
        assert!(out.contains(expected));

        let copilot = "  GitHub Copilot\n    GitHub's AI pair programmer\n    URL: https://github.com/features/copilot\n    Files: .github/copilot-instructions.md\n\n";
        assert!(out.contains(copilot));
    }
}
