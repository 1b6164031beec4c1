use thiserror::Error;

/// RFC parsing and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("Invalid {name} header: {value}")]
    InvalidHeader { name: &'static str, value: String },

    #[error("Malformed XML body: {0}")]
    MalformedXml(String),

    #[error("XML serialization error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error(transparent)]
    CoreError(#[from] kunai_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
