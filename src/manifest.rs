//! `project.godot` reader — collects the `[autoload]` singletons.

use crate::model::{Alias, AliasMap};
use crate::paths::Localizer;
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const AUTOLOAD_SECTION: &str = "[autoload]";

static RE_SECTION_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[[:blank:]]*\[").unwrap());

/// Read the autoloads declared in a project manifest.
pub fn read_aliases(project_file: &Path, localizer: &Localizer) -> Result<AliasMap> {
    let content = fs::read_to_string(project_file)
        .with_context(|| format!("failed to read {}", project_file.display()))?;
    parse_aliases(&content, localizer)
        .with_context(|| format!("invalid autoload section in {}", project_file.display()))
}

/// Parse `Name="*res://path"` entries from the `[autoload]` section.
///
/// The section runs until the next section header or the end of the file.
/// A manifest without the section has no autoloads.
pub fn parse_aliases(content: &str, localizer: &Localizer) -> Result<AliasMap> {
    let Some(start) = content.find(AUTOLOAD_SECTION) else {
        tracing::warn!("no {} section in project manifest", AUTOLOAD_SECTION);
        return Ok(AliasMap::new());
    };
    let body = &content[start + AUTOLOAD_SECTION.len()..];
    let body = match RE_SECTION_HEADER.find(body) {
        Some(header) => &body[..header.start()],
        None => body,
    };

    let mut aliases = AliasMap::new();
    for line in body.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(';') {
            continue;
        }
        let Some((name, value)) = line.split_once('=') else {
            bail!("malformed autoload entry: {}", line);
        };
        // A leading `*` marks the autoload as a global singleton.
        let value = value.trim().trim_matches('"');
        let value = value.strip_prefix('*').unwrap_or(value);
        aliases.push(Alias {
            name: name.trim().to_string(),
            path: localizer.resource_path(value),
        });
    }
    Ok(aliases)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocConfig;
    use std::path::PathBuf;

    const PROJECT: &str = r#"; Engine configuration file.

config_version=4

[application]

config/name="Game"
run/main_scene="res://main.tscn"

[autoload]

Config="*res://autoload/config.gd"
Events="*res://autoload/events.tscn"
Helpers="res://util/helpers.gd"

[display]

window/size/width=1280
"#;

    fn parse(content: &str) -> Result<AliasMap> {
        let config = DocConfig::default();
        let loc = Localizer::new("/game", "/docs", &config);
        parse_aliases(content, &loc)
    }

    #[test]
    fn reads_autoload_section_in_order() {
        let aliases = parse(PROJECT).unwrap();
        let names: Vec<_> = aliases.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Config", "Events", "Helpers"]);
        assert_eq!(aliases[0].path, PathBuf::from("/game/autoload/config.gd"));
        assert_eq!(aliases[1].path, PathBuf::from("/game/autoload/events.tscn"));
    }

    #[test]
    fn non_singleton_autoloads_are_accepted() {
        let aliases = parse(PROJECT).unwrap();
        assert_eq!(aliases[2].path, PathBuf::from("/game/util/helpers.gd"));
    }

    #[test]
    fn section_may_end_the_file() {
        let aliases = parse("[autoload]\nConfig=\"*res://config.gd\"\n").unwrap();
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases[0].path, PathBuf::from("/game/config.gd"));
    }

    #[test]
    fn missing_section_means_no_aliases() {
        assert!(parse("[application]\nconfig/name=\"Game\"\n").unwrap().is_empty());
    }

    #[test]
    fn entry_without_equals_is_fatal() {
        let err = parse("[autoload]\nConfig\n").unwrap_err();
        assert!(err.to_string().contains("malformed autoload entry: Config"));
    }
}
