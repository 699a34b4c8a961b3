use serde::{Deserialize, Serialize};

use super::{ItemKind, SourceLocation, Visibility};

/// One extracted declaration.
///
/// The optional fields are kind-specific and only ever set for the kinds
/// named on them; everything else stays `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedItem {
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub name: String,
    pub source_code: String,
    pub location: SourceLocation,
    pub visibility: Visibility,
    pub attributes: Vec<String>,
    pub generic_parameters: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc_comment: Option<String>,

    /// `function`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// `function`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<FunctionParameter>>,
    /// `function`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    /// `struct`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<StructField>>,

    /// `enum`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<EnumVariant>>,

    /// `impl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trait_name: Option<String>,
    /// `impl`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impl_type: Option<String>,
    /// `impl` and `trait`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub associated_items: Option<Vec<ParsedItem>>,
}

impl ParsedItem {
    /// A bare item with the fields every kind shares.
    #[must_use]
    pub fn new(
        kind: ItemKind,
        name: String,
        source_code: String,
        location: SourceLocation,
    ) -> Self {
        Self {
            kind,
            name,
            source_code,
            location,
            visibility: Visibility::Private,
            attributes: Vec::new(),
            generic_parameters: Vec::new(),
            doc_comment: None,
            signature: None,
            parameters: None,
            return_type: None,
            fields: None,
            variants: None,
            trait_name: None,
            impl_type: None,
            associated_items: None,
        }
    }

    /// Visit this item and every associated item below it, depth first.
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Self)) {
        visit(self);
        if let Some(children) = self.associated_items.as_mut() {
            for child in children {
                child.walk_mut(visit);
            }
        }
    }
}

/// A function parameter, including a synthesized receiver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub is_self: bool,
    pub is_mutable: bool,
}

impl FunctionParameter {
    /// The receiver parameter (`self`, `&self`, `&mut self`, `mut self`).
    #[must_use]
    pub fn receiver(is_mutable: bool) -> Self {
        Self {
            name: "self".to_string(),
            ty: "Self".to_string(),
            is_self: true,
            is_mutable,
        }
    }
}

/// A named field of a braced struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub visibility: Visibility,
}

/// An enum variant. Payload shape is not modeled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumVariant {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminant: Option<String>,
}
