use super::Format;
use crate::model::symbol::Symbol;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("failed to parse {format} data: {details} (at byte {position})")]
    Parse {
        format: Format,
        position: u64,
        details: String,
    },

    #[error("symbol '{symbol}' cannot be used as a {format} identifier")]
    ReservedSymbol { format: Format, symbol: Symbol },

    #[error("the particle database is empty, nothing to generate")]
    EmptyDatabase,

    #[error(transparent)]
    Forge(#[from] crate::forge::Error),

    #[error("failed to serialize {format} output: {source}")]
    Serialize {
        format: Format,
        #[source]
        source: toml::ser::Error,
    },

    #[error("failed to render generated source: {0}")]
    Fmt(#[from] std::fmt::Error),
}

impl Error {
    pub fn parse(format: Format, position: u64, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            position,
            details: details.into(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Self::Serialize {
            format: Format::Toml,
            source,
        }
    }
}
