use crate::catalog::error::CatalogError;
use crate::launch::error::LaunchError;
use crate::prefs::error::PrefsError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("preferences error: {0}")]
    Prefs(#[from] PrefsError),

    #[error("launch error: {0}")]
    Launch(#[from] LaunchError),
}
