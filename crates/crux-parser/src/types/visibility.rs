use serde::{Deserialize, Serialize};

/// Declaration visibility as written in source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[serde(rename = "pub")]
    Public,
    #[serde(rename = "pub(crate)")]
    Crate,
    #[serde(rename = "pub(super)")]
    Super,
    #[serde(rename = "pub(in path)")]
    InPath,
    #[default]
    #[serde(rename = "private")]
    Private,
}

impl Visibility {
    /// Classify the text of a `visibility_modifier` node.
    ///
    /// Whitespace inside the parentheses is ignored, so `pub( crate )` is
    /// still crate visibility. `pub(self)` is equivalent to no modifier.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.starts_with("pub(crate)") || compact == "crate" {
            Self::Crate
        } else if compact.starts_with("pub(super)") {
            Self::Super
        } else if compact.starts_with("pub(in") {
            Self::InPath
        } else if compact.starts_with("pub(self)") {
            Self::Private
        } else if compact.starts_with("pub") {
            Self::Public
        } else {
            Self::Private
        }
    }

    #[must_use]
    pub const fn is_private(self) -> bool {
        matches!(self, Self::Private)
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "pub",
            Self::Crate => "pub(crate)",
            Self::Super => "pub(super)",
            Self::InPath => "pub(in path)",
            Self::Private => "private",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("pub", Visibility::Public)]
    #[case("pub(crate)", Visibility::Crate)]
    #[case("pub( crate )", Visibility::Crate)]
    #[case("pub(super)", Visibility::Super)]
    #[case("pub(in crate::geometry)", Visibility::InPath)]
    #[case("pub(self)", Visibility::Private)]
    #[case("", Visibility::Private)]
    fn classifies_modifier_text(#[case] text: &str, #[case] expected: Visibility) {
        assert_eq!(Visibility::classify(text), expected);
    }

    #[test]
    fn serializes_as_source_spelling() {
        let value = serde_json::to_value(Visibility::InPath).expect("serialize");
        assert_eq!(value, serde_json::json!("pub(in path)"));
        assert_eq!(Visibility::default().to_string(), "private");
    }
}
