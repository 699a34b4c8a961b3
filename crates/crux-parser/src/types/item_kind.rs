use serde::{Deserialize, Serialize};

/// The kind of an extracted declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Function,
    Struct,
    Enum,
    Impl,
    Mod,
    Trait,
    TypeAlias,
    Const,
    Static,
    Use,
    Macro,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Impl => "impl",
            Self::Mod => "mod",
            Self::Trait => "trait",
            Self::TypeAlias => "type_alias",
            Self::Const => "const",
            Self::Static => "static",
            Self::Use => "use",
            Self::Macro => "macro",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: &[ItemKind] = &[
        ItemKind::Function,
        ItemKind::Struct,
        ItemKind::Enum,
        ItemKind::Impl,
        ItemKind::Mod,
        ItemKind::Trait,
        ItemKind::TypeAlias,
        ItemKind::Const,
        ItemKind::Static,
        ItemKind::Use,
        ItemKind::Macro,
    ];

    #[test]
    fn serialized_form_matches_display() {
        for kind in KINDS {
            let value = serde_json::to_value(kind).expect("serialize kind");
            assert_eq!(value.as_str(), Some(kind.to_string().as_str()));
        }
    }
}
