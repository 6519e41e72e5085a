//! Markdown rendering for script pages and the index.

use crate::links::markup;
use crate::model::{AliasMap, ScriptDoc};
use crate::paths::{to_link, Localizer};
use std::path::{Path, PathBuf};

/// Render the page for one script, to be written at `out_path`.
pub fn render_page(doc: &ScriptDoc, localizer: &Localizer, out_path: &Path) -> String {
    let mut output = format!(
        "# {}\n\n",
        to_link(&localizer.project_relative(&doc.source))
    );
    for block in &doc.blocks {
        output.push_str(&format!(
            "### {}\n\n",
            markup(&block.signature, localizer, out_path)
        ));
        output.push_str(&format!(
            "{}\n\n",
            markup(&block.documentation, localizer, out_path)
        ));
    }
    output
}

/// Render `index.md`: autoloads first, then every documented script.
pub fn render_index(aliases: &AliasMap, scripts: &[PathBuf], localizer: &Localizer) -> String {
    let index = index_path(localizer);
    let mut output = String::from("# Generated Documentation Index\n## Autoloads\n");
    for alias in aliases {
        let target = localizer.doc_path(&alias.path);
        output.push_str(&format!(
            "- [{}]({})\n",
            alias.name,
            localizer.link_from(&index, &target)
        ));
    }

    output.push_str("\n## Classes\n");
    for script in scripts {
        let name = script
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let target = localizer.doc_path(script);
        output.push_str(&format!(
            "- [{}]({})\n",
            name,
            localizer.link_from(&index, &target)
        ));
    }
    output
}

/// Location of the index page.
pub fn index_path(localizer: &Localizer) -> PathBuf {
    localizer.out_root().join("index.md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocConfig;
    use crate::model::{Alias, TaggedBlock};

    #[test]
    fn page_lists_blocks_under_headings() {
        let config = DocConfig::default();
        let loc = Localizer::new("/game", "/docs", &config);
        let doc = ScriptDoc {
            source: PathBuf::from("/game/player/player.gd"),
            blocks: vec![
                TaggedBlock {
                    signature: "func add(a, b):".to_string(),
                    documentation: "Adds two numbers\n".to_string(),
                },
                TaggedBlock {
                    signature: "var gun".to_string(),
                    documentation: "Instance of res://player/gun.gd\n".to_string(),
                },
            ],
        };
        let page = render_page(&doc, &loc, Path::new("/docs/player/player.md"));
        assert_eq!(
            page,
            "# player/player.gd\n\n\
             ### func add(a, b):\n\nAdds two numbers\n\n\n\
             ### var gun\n\nInstance of [gun.gd](gun.md)\n\n\n"
        );
    }

    #[test]
    fn index_links_relative_to_output_root() {
        let config = DocConfig::default();
        let loc = Localizer::new("/game", "/docs", &config);
        let aliases = vec![Alias {
            name: "Config".to_string(),
            path: PathBuf::from("/game/autoload/config.gd"),
        }];
        let scripts = vec![
            PathBuf::from("/game/autoload/config.gd"),
            PathBuf::from("/game/player.gd"),
        ];
        assert_eq!(
            render_index(&aliases, &scripts, &loc),
            "# Generated Documentation Index\n## Autoloads\n\
             - [Config](autoload/config.md)\n\
             \n## Classes\n\
             - [config](autoload/config.md)\n\
             - [player](player.md)\n"
        );
    }

    #[test]
    fn empty_index_keeps_both_headings() {
        let config = DocConfig::default();
        let loc = Localizer::new("/game", "/docs", &config);
        assert_eq!(
            render_index(&AliasMap::new(), &[], &loc),
            "# Generated Documentation Index\n## Autoloads\n\n## Classes\n"
        );
    }
}
