use thiserror::Error;

use crate::category::CategoryMapError;
use crate::edit::EditError;
use crate::model::UnknownOption;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Edit(#[from] EditError),
    #[error(transparent)]
    CategoryMap(#[from] CategoryMapError),
    #[error(transparent)]
    UnknownOption(#[from] UnknownOption),
}
