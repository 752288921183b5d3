//! Read-only linguistic resources shared by all analysis streams.
//!
//! The [`ResourceService`] is built once when a pipeline is assembled and
//! passed to whoever constructs the stages. Each of its four resources is
//! loaded lazily, at most once, from the path given in [`ResourceConfig`]:
//!
//! - [`WordList`] - dictionary words used to find compound constituents
//! - [`HyphenationTree`] - Liang hyphenation patterns proposing split points
//! - [`StemExceptions`] - words whose stem is fixed instead of computed
//! - [`SynonymTable`] - synonym groups
//!
//! A resource that fails to load does not abort anything: the failure is
//! logged and kept as [`Resource::Unavailable`], and dependent stages are
//! disabled. Analyzer construction in strict mode turns that state into an
//! error instead (see [`ResourceConfig::strict`]).

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use crate::config::ResourceConfig;
use crate::error::{DecompoundError, Result};

pub mod hyphenation;
pub mod stem_exceptions;
pub mod synonyms;
pub mod word_list;

pub use hyphenation::{HyphenationScratch, HyphenationTree};
pub use stem_exceptions::StemExceptions;
pub use synonyms::SynonymTable;
pub use word_list::WordList;

/// The four resource kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Hyphenation,
    StemExceptions,
    Synonyms,
    WordList,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResourceKind::Hyphenation => "hyphenation patterns",
            ResourceKind::StemExceptions => "stem exceptions",
            ResourceKind::Synonyms => "synonyms",
            ResourceKind::WordList => "word list",
        };
        f.write_str(name)
    }
}

/// A resource type that can be loaded from a file.
pub trait LoadResource: Sized + Send + Sync {
    const KIND: ResourceKind;

    /// Load and parse the resource at `path`.
    fn load(path: &Path) -> Result<Self>;

    /// Number of entries, for logging.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Observable state of one resource after its load attempt.
#[derive(Debug)]
pub enum Resource<T> {
    /// Loaded and ready.
    Available(Arc<T>),
    /// No path configured; the dependent feature is off.
    NotConfigured,
    /// A path was configured but loading failed.
    Unavailable { path: PathBuf, reason: String },
}

impl<T> Resource<T> {
    /// The loaded handle, if any.
    pub fn get(&self) -> Option<&Arc<T>> {
        match self {
            Resource::Available(handle) => Some(handle),
            _ => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Resource::Available(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Resource::Unavailable { .. })
    }

    /// The handle, or a [`DecompoundError::Resource`] describing why there is none.
    pub fn require(&self, kind: ResourceKind) -> Result<Arc<T>> {
        match self {
            Resource::Available(handle) => Ok(Arc::clone(handle)),
            Resource::NotConfigured => Err(DecompoundError::resource(format!(
                "{kind} not configured"
            ))),
            Resource::Unavailable { path, reason } => Err(DecompoundError::resource(format!(
                "{kind} unavailable ({}): {reason}",
                path.display()
            ))),
        }
    }
}

/// A resource loaded on first access, exactly once across threads.
#[derive(Debug)]
pub struct LazyResource<T> {
    path: Option<PathBuf>,
    cell: OnceLock<Resource<T>>,
    attempts: AtomicUsize,
}

impl<T: LoadResource> LazyResource<T> {
    pub fn new(path: Option<PathBuf>) -> Self {
        LazyResource {
            path,
            cell: OnceLock::new(),
            attempts: AtomicUsize::new(0),
        }
    }

    /// Wrap an already built resource.
    pub fn preloaded(resource: T) -> Self {
        let lazy = Self::new(None);
        let _ = lazy.cell.set(Resource::Available(Arc::new(resource)));
        lazy
    }

    /// Load on first call; later calls read the stored state without locking.
    pub fn get(&self) -> &Resource<T> {
        self.cell.get_or_init(|| self.load())
    }

    /// How many loads have run. Never more than one.
    pub fn load_attempts(&self) -> usize {
        self.attempts.load(Ordering::Acquire)
    }

    fn load(&self) -> Resource<T> {
        let Some(path) = &self.path else {
            log::debug!("{} not configured; feature disabled", T::KIND);
            return Resource::NotConfigured;
        };

        self.attempts.fetch_add(1, Ordering::AcqRel);
        match T::load(path) {
            Ok(resource) => {
                log::info!(
                    "loaded {} from '{}' ({} entries)",
                    T::KIND,
                    path.display(),
                    resource.len()
                );
                Resource::Available(Arc::new(resource))
            }
            Err(e) => {
                log::warn!(
                    "failed to load {} from '{}': {e}; feature disabled",
                    T::KIND,
                    path.display()
                );
                Resource::Unavailable {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            }
        }
    }
}

/// Process-wide holder of the four analysis resources.
///
/// Shared by reference (or in an `Arc`) between every analyzer built from it.
#[derive(Debug)]
pub struct ResourceService {
    strict: bool,
    hyphenation: LazyResource<HyphenationTree>,
    stem_exceptions: LazyResource<StemExceptions>,
    synonyms: LazyResource<SynonymTable>,
    word_list: LazyResource<WordList>,
}

impl ResourceService {
    pub fn new(config: &ResourceConfig) -> Self {
        ResourceService {
            strict: config.strict,
            hyphenation: LazyResource::new(config.hyphenation_path.clone()),
            stem_exceptions: LazyResource::new(config.stem_exceptions_path.clone()),
            synonyms: LazyResource::new(config.synonyms_path.clone()),
            word_list: LazyResource::new(config.word_list_path.clone()),
        }
    }

    /// A service with nothing configured: every dependent stage is off.
    pub fn empty() -> Self {
        Self::new(&ResourceConfig::default())
    }

    /// Replace the word list with an in-memory one.
    pub fn with_word_list(mut self, word_list: WordList) -> Self {
        self.word_list = LazyResource::preloaded(word_list);
        self
    }

    /// Replace the hyphenation patterns with an in-memory tree.
    pub fn with_hyphenation(mut self, tree: HyphenationTree) -> Self {
        self.hyphenation = LazyResource::preloaded(tree);
        self
    }

    /// Replace the stem exceptions with an in-memory table.
    pub fn with_stem_exceptions(mut self, exceptions: StemExceptions) -> Self {
        self.stem_exceptions = LazyResource::preloaded(exceptions);
        self
    }

    /// Replace the synonyms with an in-memory table.
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = LazyResource::preloaded(synonyms);
        self
    }

    pub fn hyphenation(&self) -> &Resource<HyphenationTree> {
        self.hyphenation.get()
    }

    pub fn stem_exceptions(&self) -> &Resource<StemExceptions> {
        self.stem_exceptions.get()
    }

    pub fn synonyms(&self) -> &Resource<SynonymTable> {
        self.synonyms.get()
    }

    pub fn word_list(&self) -> &Resource<WordList> {
        self.word_list.get()
    }

    /// Total number of load attempts across all four resources.
    pub fn load_attempts(&self) -> usize {
        self.hyphenation.load_attempts()
            + self.stem_exceptions.load_attempts()
            + self.synonyms.load_attempts()
            + self.word_list.load_attempts()
    }

    /// Load everything now and list the configured resources that failed.
    pub fn unavailable(&self) -> Vec<ResourceKind> {
        let mut failed = Vec::new();
        if self.hyphenation().is_unavailable() {
            failed.push(ResourceKind::Hyphenation);
        }
        if self.stem_exceptions().is_unavailable() {
            failed.push(ResourceKind::StemExceptions);
        }
        if self.synonyms().is_unavailable() {
            failed.push(ResourceKind::Synonyms);
        }
        if self.word_list().is_unavailable() {
            failed.push(ResourceKind::WordList);
        }
        failed
    }

    /// In strict mode, fail if any configured resource could not be loaded.
    pub fn check_strict(&self) -> Result<()> {
        if !self.strict {
            return Ok(());
        }
        let failed = self.unavailable();
        if failed.is_empty() {
            return Ok(());
        }
        let names: Vec<String> = failed.iter().map(|kind| kind.to_string()).collect();
        Err(DecompoundError::resource(format!(
            "unavailable in strict mode: {}",
            names.join(", ")
        )))
    }
}

/// Iterate over the meaningful lines of a resource file with 1-based line numbers.
///
/// Lines are trimmed; blank lines and lines starting with `comment` are skipped.
pub(crate) fn content_lines(content: &str, comment: char) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(move |(_, line)| !line.is_empty() && !line.starts_with(comment))
}

/// Read a resource file, naming the resource in the error.
pub(crate) fn read_resource(kind: ResourceKind, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        DecompoundError::resource(format!(
            "Failed to read {kind} file '{}': {e}",
            path.display()
        ))
    })
}
