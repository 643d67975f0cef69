//! Error types

use thiserror::Error;

/// Invalid input to one of the exotic value constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("invalid big integer literal '{0}'")]
    InvalidBigInt(String),

    #[error("invalid regular expression flags '{0}'")]
    InvalidRegExpFlags(String),
}

/// Failure while building a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A container was reached again while still being expanded.
    #[error("cyclic structure at '{address}': container is already open at '{ancestor}'")]
    CyclicStructure { address: String, ancestor: String },
}

/// Failure while decoding input text into a value.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {tag} at {pointer}: {reason}")]
    InvalidTag {
        tag: String,
        pointer: String,
        reason: String,
    },

    #[error("invalid value at {pointer}: {source}")]
    Value {
        pointer: String,
        #[source]
        source: ValueError,
    },
}

/// Failure while producing or delivering copy text.
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("converting circular structure to JSON")]
    Circular,

    #[error("do not know how to serialize a BigInt")]
    BigInt,

    #[error("serialization failed: {0}")]
    Serialize(String),

    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure while loading a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
