//! Module recursion: turns one module body into a [`ParsedModule`] tree.
//!
//! The capture query matches declarations at any depth, so every scope
//! keeps only the captures whose parent is the scope itself. Inline
//! `mod name { ... }` bodies recurse into a nested module; body-less
//! `mod name;` declarations become [`ModuleReference`]s.

use ast_grep_core::Node;
use tracing::{debug, trace};

use crate::extractors;
use crate::location::node_location;
use crate::query::ItemQuery;
use crate::types::{ItemKind, ModuleReference, ParsedModule};

/// Synthetic path of the crate root module.
pub const ROOT_MODULE_PATH: &str = "src/lib.rs";

/// Walks module bodies with a shared capture query.
pub struct ModuleExtractor<'q> {
    query: &'q ItemQuery,
    max_depth: Option<usize>,
}

impl<'q> ModuleExtractor<'q> {
    /// `max_depth` bounds inline-module recursion below the root (depth 0).
    #[must_use]
    pub const fn new(query: &'q ItemQuery, max_depth: Option<usize>) -> Self {
        Self { query, max_depth }
    }

    /// Extract the root module of a source file.
    pub fn extract_root<D: ast_grep_core::Doc>(
        &self,
        root: &Node<'_, D>,
        crate_name: &str,
    ) -> ParsedModule {
        self.extract_module(root, crate_name, ROOT_MODULE_PATH, 0)
    }

    fn extract_module<D: ast_grep_core::Doc>(
        &self,
        scope: &Node<'_, D>,
        name: &str,
        path: &str,
        depth: usize,
    ) -> ParsedModule {
        let mut module = ParsedModule {
            name: name.to_string(),
            path: path.to_string(),
            items: Vec::new(),
            location: node_location(scope),
            submodules: Vec::new(),
            references: Vec::new(),
        };
        let dir = module.child_dir();

        for capture in self.query.captures(scope) {
            if !is_direct_child(&capture.node, scope) {
                continue;
            }
            trace!(label = %capture.label, "capture");
            let Some(item) = extractors::extract_item(capture.label, &capture.node) else {
                continue;
            };

            if capture.label == ItemKind::Mod {
                match capture.node.field("body") {
                    Some(body) if self.may_descend(depth) => {
                        let child_path = format!("{dir}/{}.rs", item.name);
                        let mut child =
                            self.extract_module(&body, &item.name, &child_path, depth + 1);
                        child.location = item.location;
                        module.submodules.push(child);
                    }
                    Some(_) => {
                        debug!(module = %item.name, depth, "max depth reached, not descending");
                    }
                    None => module.references.push(ModuleReference {
                        name: item.name.clone(),
                        visibility: item.visibility,
                        expected_paths: vec![
                            format!("{dir}/{}.rs", item.name),
                            format!("{dir}/{}/mod.rs", item.name),
                        ],
                        location: item.location,
                    }),
                }
            }
            module.items.push(item);
        }

        debug!(
            module = %module.name,
            path = %module.path,
            items = module.items.len(),
            submodules = module.submodules.len(),
            "extracted module"
        );
        module
    }

    fn may_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth < max)
    }
}

fn is_direct_child<D: ast_grep_core::Doc>(node: &Node<'_, D>, scope: &Node<'_, D>) -> bool {
    node.parent()
        .is_some_and(|p| p.range() == scope.range() && p.kind() == scope.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ast_grep_language::{LanguageExt, SupportLang};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn extract(source: &str, max_depth: Option<usize>) -> ParsedModule {
        let root = SupportLang::Rust.ast_grep(source);
        let query = ItemQuery::new(&SupportLang::Rust);
        ModuleExtractor::new(&query, max_depth).extract_root(&root.root(), "demo")
    }

    fn item_names(module: &ParsedModule) -> Vec<&str> {
        module.items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn root_keeps_only_direct_children() {
        let module = extract("fn a() { fn nested() {} }\nimpl S { fn m() {} }", None);
        assert_eq!(item_names(&module), vec!["a", "S"]);
        assert_eq!(module.name, "demo");
        assert_eq!(module.path, ROOT_MODULE_PATH);
    }

    #[test]
    fn extern_declarations_are_not_items() {
        let module = extract("extern crate serde;\nextern \"C\" { fn ext(); }", None);
        assert_eq!(module.items, Vec::new());
        assert!(module.submodules.is_empty());
    }

    #[test]
    fn inline_module_is_item_and_submodule() {
        let module = extract(
            "pub mod geometry { pub struct Point { x: f64, y: f64 } }",
            None,
        );
        assert_eq!(item_names(&module), vec!["geometry"]);
        assert_eq!(module.submodules.len(), 1);
        let geometry = &module.submodules[0];
        assert_eq!(geometry.name, "geometry");
        assert_eq!(geometry.path, "src/geometry.rs");
        assert_eq!(item_names(geometry), vec!["Point"]);
        assert_eq!(geometry.location, module.items[0].location);
    }

    #[test]
    fn nested_paths_follow_parent_directory() {
        let module = extract("mod a { mod b { mod c { fn leaf() {} } } }", None);
        let c = module.find_submodule("c").expect("module c");
        assert_eq!(c.path, "src/a/b/c.rs");
        assert_eq!(item_names(c), vec!["leaf"]);
    }

    #[test]
    fn bodiless_mod_becomes_reference() {
        let module = extract("pub mod net;\nmod inline { mod disk; }", None);
        assert_eq!(
            module.references,
            vec![ModuleReference {
                name: "net".to_string(),
                visibility: crate::types::Visibility::Public,
                expected_paths: vec!["src/net.rs".to_string(), "src/net/mod.rs".to_string()],
                location: module.items[0].location,
            }]
        );
        let inline = &module.submodules[0];
        assert_eq!(
            inline.references[0].expected_paths,
            vec![
                "src/inline/disk.rs".to_string(),
                "src/inline/disk/mod.rs".to_string()
            ]
        );
        assert_eq!(item_names(inline), vec!["disk"]);
    }

    #[rstest]
    #[case(None, 3)]
    #[case(Some(0), 0)]
    #[case(Some(1), 1)]
    #[case(Some(2), 2)]
    fn max_depth_bounds_recursion(#[case] max_depth: Option<usize>, #[case] expected: usize) {
        let module = extract("mod a { mod b { mod c {} } }", max_depth);
        let mut depth = 0;
        let mut current = &module;
        while let Some(next) = current.submodules.first() {
            depth += 1;
            current = next;
        }
        assert_eq!(depth, expected);
        assert_eq!(item_names(&module), vec!["a"]);
    }
}
