//! Scene-to-script resolution for `.tscn` files.
//!
//! A scene documents as the script attached to its root node:
//!
//! ```text
//! [ext_resource path="res://player/player.gd" type="Script" id=1]
//!
//! [node name="Player" type="KinematicBody2D"]
//! script = ExtResource( 1 )
//! ```
//!
//! Both the Godot 3 (numeric ids) and Godot 4 (quoted string ids, any
//! attribute order) layouts are understood.

use crate::paths::Localizer;
use crate::text::{between, between_on_line};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static RE_EXT_RESOURCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\[ext_resource[[:blank:]]+([^\]\n]*)\]").unwrap());

static RE_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_]+)[[:blank:]]*=[[:blank:]]*(?:"([^"]*)"|([^[:blank:]"]+))"#).unwrap()
});

/// Resolve a scene to the script of its root node.
///
/// Falls back to the scene path with the script extension when the scene
/// cannot be read or declares no root script.
pub fn find_script(scene: &Path, localizer: &Localizer) -> PathBuf {
    let fallback = scene.with_extension(&localizer.config().source_extension);
    let data = match fs::read_to_string(scene) {
        Ok(data) => data,
        Err(e) => {
            tracing::warn!(
                scene = %scene.display(),
                error = %e,
                "cannot read scene, guessing script path"
            );
            return fallback;
        }
    };
    match root_script(&data) {
        Some(reference) => {
            let script = localizer.resource_path(reference);
            tracing::debug!(
                scene = %scene.display(),
                script = %script.display(),
                "resolved scene script"
            );
            script
        }
        None => {
            tracing::debug!(
                scene = %scene.display(),
                "scene declares no root script, guessing script path"
            );
            fallback
        }
    }
}

/// The `path` of the script resource attached to the first node.
fn root_script(data: &str) -> Option<&str> {
    // The root node is always declared first and runs up to the next section.
    let root_node = between(data, "[node ", "[").or_else(|| {
        let start = data.find("[node ")? + "[node ".len();
        Some(&data[start..])
    })?;
    let id = between_on_line(root_node, "script = ExtResource(", ")")?;
    script_resource_path(data, clean_id(id))
}

/// Find the `[ext_resource]` declaration of type Script with the given id.
fn script_resource_path<'a>(data: &'a str, id: &str) -> Option<&'a str> {
    RE_EXT_RESOURCE.captures_iter(data).find_map(|caps| {
        let attributes = caps.get(1)?.as_str();
        let mut path = None;
        let mut is_script = false;
        let mut id_matches = false;
        for attr in RE_ATTRIBUTE.captures_iter(attributes) {
            let value = attr.get(2).or_else(|| attr.get(3))?.as_str();
            match &attr[1] {
                "path" => path = Some(value),
                "type" => is_script = value == "Script",
                "id" => id_matches = clean_id(value) == id,
                _ => {}
            }
        }
        if is_script && id_matches {
            path
        } else {
            None
        }
    })
}

fn clean_id(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}
