//! Data model for extracted documentation — format-agnostic.

use std::path::PathBuf;

/// One `# PUBLIC` block: the declaration it documents and its prose.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaggedBlock {
    /// Non-comment lines after the tag, concatenated as-is.
    pub signature: String,
    /// Normalized comment / text-block lines, each terminated by `\n`.
    pub documentation: String,
}

/// Everything extracted from a single script.
#[derive(Debug)]
pub struct ScriptDoc {
    pub source: PathBuf,
    pub blocks: Vec<TaggedBlock>,
}

/// A named autoload from `project.godot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alias {
    pub name: String,
    /// Absolute path of the autoloaded script or scene.
    pub path: PathBuf,
}

/// Autoloads in manifest order.
pub type AliasMap = Vec<Alias>;
