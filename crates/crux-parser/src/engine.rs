//! The parser engine: grammar lifecycle plus one-call orchestration of
//! tree building, module extraction, diagnostics and option handling.

use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use tracing::{debug, debug_span, warn};

use crate::diagnostics;
use crate::error::ParserError;
use crate::modules::ModuleExtractor;
use crate::parser::{self, BundledGrammar, GrammarBackend};
use crate::query::ItemQuery;
use crate::types::{ItemKind, ParseOptions, ParseResult, ParsedCrate, ParsedModule};

/// Crate name used when the caller does not supply one.
pub const DEFAULT_CRATE_NAME: &str = "unnamed";

/// Observable lifecycle state of a [`ParserEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Uninitialized,
    Ready,
    /// Terminal.
    Disposed,
}

enum Lifecycle<L> {
    Uninitialized,
    Ready(Loaded<L>),
    Disposed,
}

struct Loaded<L> {
    lang: L,
    query: ItemQuery,
}

/// Owns one loaded grammar and turns source text into [`ParseResult`]s.
///
/// ```no_run
/// use crux_parser::{BundledGrammar, ParserEngine};
///
/// let mut engine = ParserEngine::new(BundledGrammar);
/// engine.initialize()?;
/// let result = engine.parse_string("pub fn answer() -> u32 { 42 }", "demo")?;
/// assert!(result.success);
/// engine.dispose();
/// # Ok::<(), crux_parser::ParserError>(())
/// ```
pub struct ParserEngine<B: GrammarBackend = BundledGrammar> {
    backend: B,
    options: ParseOptions,
    lifecycle: Lifecycle<B::Lang>,
}

impl Default for ParserEngine<BundledGrammar> {
    fn default() -> Self {
        Self::new(BundledGrammar)
    }
}

impl<B: GrammarBackend> ParserEngine<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, ParseOptions::default())
    }

    #[must_use]
    pub const fn with_options(backend: B, options: ParseOptions) -> Self {
        Self {
            backend,
            options,
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    #[must_use]
    pub const fn options(&self) -> &ParseOptions {
        &self.options
    }

    #[must_use]
    pub const fn state(&self) -> EngineState {
        match self.lifecycle {
            Lifecycle::Uninitialized => EngineState::Uninitialized,
            Lifecycle::Ready(_) => EngineState::Ready,
            Lifecycle::Disposed => EngineState::Disposed,
        }
    }

    /// Load the grammar. A no-op when already ready.
    ///
    /// # Errors
    /// [`ParserError::Initialization`] if the backend cannot load its
    /// grammar (the state is left unchanged), or
    /// [`ParserError::NotInitialized`] after [`Self::dispose`].
    pub fn initialize(&mut self) -> Result<(), ParserError> {
        match self.lifecycle {
            Lifecycle::Ready(_) => return Ok(()),
            Lifecycle::Disposed => return Err(ParserError::NotInitialized),
            Lifecycle::Uninitialized => {}
        }
        let lang = self.backend.load()?;
        let query = ItemQuery::new(&lang);
        self.lifecycle = Lifecycle::Ready(Loaded { lang, query });
        debug!(backend = self.backend.name(), "parser engine initialized");
        Ok(())
    }

    /// [`Self::parse_string`] with the default crate name.
    ///
    /// # Errors
    /// See [`Self::parse_string`].
    pub fn parse_source(&mut self, source: &str) -> Result<ParseResult, ParserError> {
        self.parse_string(source, DEFAULT_CRATE_NAME)
    }

    /// Parse one source file into a crate description.
    ///
    /// Syntax errors never fail the call; they are reported in
    /// [`ParseResult::errors`] while extraction continues around them.
    ///
    /// # Errors
    /// [`ParserError::NotInitialized`] unless the engine is ready,
    /// [`ParserError::Backend`] if no tree could be built, and
    /// [`ParserError::Extraction`] if extraction panicked.
    pub fn parse_string(
        &mut self,
        source: &str,
        crate_name: &str,
    ) -> Result<ParseResult, ParserError> {
        let Lifecycle::Ready(loaded) = &self.lifecycle else {
            return Err(ParserError::NotInitialized);
        };
        let _span = debug_span!("parse", crate_name, bytes = source.len()).entered();
        let started = Instant::now();
        if let Some(timeout) = self.options.timeout_ms {
            debug!(timeout_ms = timeout, "advisory timeout set");
        }

        let tree = parser::parse_source(source, &loaded.lang)?;
        let options = &self.options;
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            let root = tree.root();
            let mut module = ModuleExtractor::new(&loaded.query, options.max_depth)
                .extract_root(&root, crate_name);
            apply_options(&mut module, options);
            let errors = diagnostics::collect(source, &root);
            (module, errors)
        }));
        let (root_module, errors) = extracted.map_err(|payload| {
            ParserError::Extraction(panic_message(payload.as_ref()))
        })?;

        let elapsed = started.elapsed();
        if let Some(limit) = self
            .options
            .timeout_ms
            .map(Duration::from_millis)
            .filter(|limit| elapsed > *limit)
        {
            warn!(?elapsed, ?limit, "parse exceeded advisory timeout");
        }
        debug!(
            items = root_module.items.len(),
            errors = errors.len(),
            ?elapsed,
            "parse complete"
        );
        let krate = ParsedCrate {
            name: crate_name.to_string(),
            root_module,
            errors: errors.clone(),
        };
        Ok(ParseResult::completed(krate, errors, elapsed))
    }

    /// Release the grammar. Idempotent; the engine cannot be reused.
    pub fn dispose(&mut self) {
        if !matches!(self.lifecycle, Lifecycle::Disposed) {
            debug!(backend = self.backend.name(), "parser engine disposed");
        }
        self.lifecycle = Lifecycle::Disposed;
    }
}

/// One-shot parse with the bundled grammar and default options.
///
/// # Errors
/// See [`ParserEngine::initialize`] and [`ParserEngine::parse_string`].
pub fn parse(source: &str) -> Result<ParseResult, ParserError> {
    let mut engine = ParserEngine::new(BundledGrammar);
    engine.initialize()?;
    let result = engine.parse_source(source);
    engine.dispose();
    result
}

fn apply_options(module: &mut ParsedModule, options: &ParseOptions) {
    if !options.include_private_items {
        retain_visible(module);
    }
    if !options.include_doc_comments {
        strip_doc_comments(module);
    }
}

/// Drop private items and everything below private modules.
///
/// Impl blocks have no visibility of their own and are kept. Methods of
/// inherent impls are filtered by their own visibility; trait impl members
/// follow the trait and are kept.
fn retain_visible(module: &mut ParsedModule) {
    let private_mods: Vec<String> = module
        .items
        .iter()
        .filter(|i| i.kind == ItemKind::Mod && i.visibility.is_private())
        .map(|i| i.name.clone())
        .collect();
    module.submodules.retain(|m| !private_mods.contains(&m.name));
    module.references.retain(|r| !r.visibility.is_private());
    module
        .items
        .retain(|i| i.kind == ItemKind::Impl || !i.visibility.is_private());

    for item in &mut module.items {
        if item.kind == ItemKind::Impl && item.trait_name.is_none() {
            if let Some(members) = item.associated_items.as_mut() {
                members.retain(|m| !m.visibility.is_private());
            }
        }
    }
    for submodule in &mut module.submodules {
        retain_visible(submodule);
    }
}

fn strip_doc_comments(module: &mut ParsedModule) {
    for item in &mut module.items {
        item.walk_mut(&mut |i| i.doc_comment = None);
    }
    for submodule in &mut module.submodules {
        strip_doc_comments(submodule);
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "extractor panicked".to_string())
}
