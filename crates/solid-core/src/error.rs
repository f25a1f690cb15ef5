//! Unified Error Model
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    #[error("CONFIG/READ {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CONFIG/PARSE: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("SELECT/unknown example '{0}'")]
    UnknownExample(String),

    #[error("SELECT/example '{id}' belongs to {principle}, which is not selected")]
    ExcludedExample { id: String, principle: String },

    #[error("SELECT/unknown principle '{0}'")]
    UnknownPrinciple(String),

    #[error("SELECT/unknown variant '{0}'")]
    UnknownVariant(String),

    #[error("RENDER/unknown format '{0}'")]
    UnknownFormat(String),

    #[error("RENDER/{0}")]
    Render(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SolidError>;
