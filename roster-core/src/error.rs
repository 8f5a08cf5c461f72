use roster_model::ModelError;
use thiserror::Error;

pub use crate::carousel::OpenRejected;
pub use crate::catalog::CatalogError;
pub use crate::color::ColorError;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Open(#[from] OpenRejected),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type Result<T> = std::result::Result<T, RosterError>;
