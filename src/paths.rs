//! Path localization — maps project files and `res://` references onto the
//! generated documentation tree.

use crate::config::DocConfig;
use crate::scene;
use std::path::{Component, Path, PathBuf};

/// Resolves project paths against the project root and the output root.
pub struct Localizer<'a> {
    project_root: PathBuf,
    out_root: PathBuf,
    config: &'a DocConfig,
}

impl<'a> Localizer<'a> {
    pub fn new(
        project_root: impl Into<PathBuf>,
        out_root: impl Into<PathBuf>,
        config: &'a DocConfig,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            out_root: out_root.into(),
            config,
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn out_root(&self) -> &Path {
        &self.out_root
    }

    pub fn config(&self) -> &DocConfig {
        self.config
    }

    /// `res://ui/hud.gd` → `<project root>/ui/hud.gd`.
    ///
    /// Paths without the resource prefix are taken relative to the project root.
    pub fn resource_path(&self, reference: &str) -> PathBuf {
        let relative = reference
            .strip_prefix(self.config.resource_prefix.as_str())
            .unwrap_or(reference);
        normalize(&self.project_root.join(relative))
    }

    /// Path of `path` relative to the project root.
    pub fn project_relative(&self, path: &Path) -> PathBuf {
        pathdiff::diff_paths(path, &self.project_root).unwrap_or_else(|| path.to_path_buf())
    }

    /// Where the documentation page for a script (or scene) is written.
    ///
    /// Scenes are first resolved to the script attached to their root node.
    pub fn doc_path(&self, path: &Path) -> PathBuf {
        let script = if has_extension(path, &self.config.scene_extension) {
            scene::find_script(path, self)
        } else {
            path.to_path_buf()
        };
        let relative = self.project_relative(&script);
        normalize(&self.out_root.join(relative.with_extension(&self.config.doc_extension)))
    }

    /// Link target for `target` as seen from the page at `from_page`.
    pub fn link_from(&self, from_page: &Path, target: &Path) -> String {
        let base = from_page.parent().unwrap_or(&self.out_root);
        let relative = pathdiff::diff_paths(target, base).unwrap_or_else(|| target.to_path_buf());
        to_link(&relative)
    }
}

/// Whether `path` carries the extension `ext` (given without the dot).
pub fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// Render a relative path with `/` separators for use in markdown.
pub fn to_link(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if out.file_name().is_some() {
                    out.pop();
                } else {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
