//! Core data types for the structural description of a Rust source file.

mod item_kind;
mod module;
mod options;
mod parsed_item;
mod result;
mod source_location;
mod visibility;

pub use item_kind::ItemKind;
pub use module::{ModuleReference, ParsedCrate, ParsedModule};
pub use options::ParseOptions;
pub use parsed_item::{EnumVariant, FunctionParameter, ParsedItem, StructField};
pub use result::{ParseError, ParseResult, Severity};
pub use source_location::SourceLocation;
pub use visibility::Visibility;
