//! CLI error types.

use docmend_config::ConfigError;
use docmend_corpus::CorpusError;
use docmend_diagrams::DiagramError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Corpus(#[from] CorpusError),

    #[error("{0}")]
    Diagrams(#[from] DiagramError),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
