use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::{ParseError, ParsedItem, SourceLocation, Visibility};

/// One module body: the crate root or an inline `mod name { ... }`.
///
/// An inline module shows up twice: as a `mod` item in the
/// parent's `items`, and as a fully extracted entry in `submodules`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedModule {
    pub name: String,
    /// Display path such as `src/geometry/shapes.rs`. Never read from disk.
    pub path: String,
    pub items: Vec<ParsedItem>,
    pub location: SourceLocation,
    pub submodules: Vec<ParsedModule>,
    /// Body-less `mod name;` declarations pointing at other files.
    #[serde(default)]
    pub references: Vec<ModuleReference>,
}

impl ParsedModule {
    /// Directory that children of this module live in.
    ///
    /// `src/lib.rs` -> `src`, `src/geometry.rs` -> `src/geometry`.
    #[must_use]
    pub fn child_dir(&self) -> String {
        child_dir_of(&self.path)
    }

    /// Find a submodule by name anywhere below this module.
    #[must_use]
    pub fn find_submodule(&self, name: &str) -> Option<&Self> {
        self.submodules.iter().find_map(|m| {
            if m.name == name {
                Some(m)
            } else {
                m.find_submodule(name)
            }
        })
    }
}

fn child_dir_of(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((dir, file)) if file == "lib.rs" || file == "main.rs" || file == "mod.rs" => {
            dir.to_string()
        }
        _ => path.trim_end_matches(".rs").to_string(),
    }
}

/// A `mod name;` declaration whose body lives in another file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleReference {
    pub name: String,
    pub visibility: Visibility,
    /// Candidate files, e.g. `src/net.rs` and `src/net/mod.rs`.
    pub expected_paths: Vec<String>,
    pub location: SourceLocation,
}

/// The extracted structure of one source file, modeled as a crate.
///
/// Only the root module is kept; nesting lives in
/// `root_module.submodules`. On the wire the root appears both as
/// `rootModule` and as the single entry of `modules`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedCrate {
    pub name: String,
    pub root_module: ParsedModule,
    pub errors: Vec<ParseError>,
}

impl ParsedCrate {
    /// The flat module list. Always exactly the root module.
    #[must_use]
    pub fn modules(&self) -> &[ParsedModule] {
        std::slice::from_ref(&self.root_module)
    }
}

impl Serialize for ParsedCrate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ParsedCrate", 4)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("modules", self.modules())?;
        state.serialize_field("rootModule", &self.root_module)?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}
