use thiserror::Error;

use crate::model::{BankError, ConfigError, OptionSetError, QuestionError, RoundError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Question(#[from] QuestionError),
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    OptionSet(#[from] OptionSetError),
    #[error(transparent)]
    Round(#[from] RoundError),
}
