use crate::model::WindowId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JumpError {
    #[error("Не найдена обязательная утилита: {0}")]
    PrerequisiteMissing(String),

    #[error("Процесс '{0}' запущен, но подходящего окна нет (используйте -f, чтобы запустить ещё один экземпляр)")]
    ProcessFoundNoWindow(String),

    #[error("Не удалось активировать окно {id}: {reason}")]
    ActivationFailed { id: WindowId, reason: String },

    #[error("Команда не найдена: {0}")]
    CommandNotFound(String),

    #[error("Неверный шаблон заголовка: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Ошибка запроса к оконной системе: {0}")]
    Query(String),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),
}

impl JumpError {
    pub fn query<T>(msg: impl Into<String>) -> Result<T> {
        Err(JumpError::Query(msg.into()))
    }
}

pub type Result<T> = std::result::Result<T, JumpError>;

// Удобные макросы для создания ошибок
#[macro_export]
macro_rules! jump_error {
    (query, $($arg:tt)*) => {
        $crate::error::JumpError::Query(format!($($arg)*))
    };
    (prerequisite, $($arg:tt)*) => {
        $crate::error::JumpError::PrerequisiteMissing(format!($($arg)*))
    };
    (command_not_found, $($arg:tt)*) => {
        $crate::error::JumpError::CommandNotFound(format!($($arg)*))
    };
}
