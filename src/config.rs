//! Run configuration — the literals and switches the pipeline works from.

/// Comment literal that opens a documented block unless overridden.
pub const DEFAULT_TAG: &str = "# PUBLIC";

/// Directories and files skipped by default when scanning a project.
pub const DEFAULT_IGNORES: &[&str] = &["modules"];

/// How blocks sharing the same signature are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureMode {
    /// A later block with an identical signature replaces the earlier one's
    /// documentation, keeping the earlier position.
    #[default]
    LastWins,
    /// Every tagged block is kept, in source order.
    KeepAll,
}

/// How `res://` references are rewritten into links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkMode {
    /// One pass per delimiter (space, newline, double quote); each pass
    /// resolves at most the first reference it finds.
    #[default]
    PerDelimiter,
    /// Every reference in the text is resolved.
    Exhaustive,
}

/// Everything the scanner, extractor and link resolver need to know.
#[derive(Debug, Clone)]
pub struct DocConfig {
    /// Literal that opens a documented block.
    pub tag: String,
    /// Extension (without dot) of scanned scripts.
    pub source_extension: String,
    /// Extension (without dot) of generated pages.
    pub doc_extension: String,
    /// Extension (without dot) of scene-description files.
    pub scene_extension: String,
    /// URI-like prefix marking project-internal resources.
    pub resource_prefix: String,
    /// Substrings or glob patterns; matching paths are not scanned.
    pub ignores: Vec<String>,
    pub signature_mode: SignatureMode,
    pub link_mode: LinkMode,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            source_extension: "gd".to_string(),
            doc_extension: "md".to_string(),
            scene_extension: "tscn".to_string(),
            resource_prefix: "res://".to_string(),
            ignores: DEFAULT_IGNORES.iter().map(|s| s.to_string()).collect(),
            signature_mode: SignatureMode::default(),
            link_mode: LinkMode::default(),
        }
    }
}

impl DocConfig {
    /// Append extra ignore patterns, skipping ones already present.
    pub fn with_ignores<I, S>(mut self, extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for pattern in extra {
            let pattern = pattern.into();
            if !self.ignores.contains(&pattern) {
                self.ignores.push(pattern);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_godot_layout() {
        let config = DocConfig::default();
        assert_eq!(config.tag, "# PUBLIC");
        assert_eq!(config.source_extension, "gd");
        assert_eq!(config.scene_extension, "tscn");
        assert_eq!(config.ignores, vec!["modules".to_string()]);
        assert_eq!(config.signature_mode, SignatureMode::LastWins);
        assert_eq!(config.link_mode, LinkMode::PerDelimiter);
    }

    #[test]
    fn extra_ignores_are_deduplicated() {
        let config = DocConfig::default().with_ignores(["addons", "modules", "addons"]);
        assert_eq!(config.ignores, vec!["modules", "addons"]);
    }
}
