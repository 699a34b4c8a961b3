//! Capture query: every declaration node below a scope, tagged by kind.
//!
//! The query matches at any depth. Callers that want only the
//! declarations of one module body filter on the parent themselves.

use ast_grep_core::Node;
use ast_grep_core::language::Language;
use ast_grep_core::matcher::KindMatcher;
use ast_grep_core::ops::Any;

use crate::types::ItemKind;

/// Declaration node kinds and the label each capture carries.
pub const ITEM_PATTERNS: &[(&str, ItemKind)] = &[
    ("function_item", ItemKind::Function),
    ("function_signature_item", ItemKind::Function),
    ("struct_item", ItemKind::Struct),
    ("union_item", ItemKind::Struct),
    ("enum_item", ItemKind::Enum),
    ("impl_item", ItemKind::Impl),
    ("mod_item", ItemKind::Mod),
    ("trait_item", ItemKind::Trait),
    ("type_item", ItemKind::TypeAlias),
    ("associated_type", ItemKind::TypeAlias),
    ("const_item", ItemKind::Const),
    ("static_item", ItemKind::Static),
    ("use_declaration", ItemKind::Use),
    ("macro_definition", ItemKind::Macro),
];

/// Label for a node kind, if it is a declaration.
#[must_use]
pub fn label_for(kind: &str) -> Option<ItemKind> {
    ITEM_PATTERNS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, label)| *label)
}

/// A matched declaration node and its label.
pub struct Capture<'r, D: ast_grep_core::Doc> {
    pub label: ItemKind,
    pub node: Node<'r, D>,
}

/// Compiled matcher over all [`ITEM_PATTERNS`] for one grammar.
pub struct ItemQuery {
    matcher: Any<KindMatcher>,
}

impl ItemQuery {
    #[must_use]
    pub fn new<L: Language + Clone>(lang: &L) -> Self {
        let matchers: Vec<KindMatcher> = ITEM_PATTERNS
            .iter()
            .map(|(kind, _)| KindMatcher::new(kind, lang.clone()))
            .collect();
        Self {
            matcher: Any::new(matchers),
        }
    }

    /// All declaration nodes below `scope`, in document order.
    pub fn captures<'r, D: ast_grep_core::Doc>(
        &self,
        scope: &Node<'r, D>,
    ) -> Vec<Capture<'r, D>> {
        scope
            .find_all(&self.matcher)
            .filter_map(|m| {
                let node: Node<'r, D> = (*m).clone();
                let label = label_for(node.kind().as_ref())?;
                Some(Capture { label, node })
            })
            .collect()
    }
}
