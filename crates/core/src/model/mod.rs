mod config;
mod ids;
mod options;
mod question;
mod round;
mod wrong;

pub use config::{
    ConfigError, OptionCount, QuizVariant, SessionConfig, DEFAULT_MAX_ROUNDS, DEFAULT_ROUND_SIZE,
    DEFAULT_UNIVERSE_CAP,
};
pub use ids::{ParseIndexError, QuestionIndex};
pub use options::{OptionSet, OptionSetError};
pub use question::{BankError, QuestionBank, QuestionError, QuestionRecord};
pub use round::{RoundError, RoundQuestion, RoundState};
pub use wrong::{WrongAnswerEntry, WrongKey};
