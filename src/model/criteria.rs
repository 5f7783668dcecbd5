use crate::error::Result;
use regex::Regex;
use std::path::Path;

/// Критерии поиска окон приложения. Строятся один раз на запуск и дальше не меняются.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    /// Сравнивается с классом окна без учёта регистра
    pub class_identifier: String,
    /// По нему ищутся pid через таблицу процессов
    pub command_identifier: String,
    pub title_pattern: Option<Regex>,
    pub workspace_filter: Option<i32>,
}

impl MatchCriteria {
    /// Оба идентификатора по умолчанию берутся из имени команды без пути
    pub fn for_command(command: &str) -> Self {
        let name = command_basename(command).to_string();
        Self {
            class_identifier: name.clone(),
            command_identifier: name,
            title_pattern: None,
            workspace_filter: None,
        }
    }

    pub fn with_class(mut self, class: Option<String>) -> Self {
        if let Some(class) = class {
            self.class_identifier = class;
        }
        self
    }

    pub fn with_command_identifier(mut self, identifier: Option<String>) -> Self {
        if let Some(identifier) = identifier {
            self.command_identifier = identifier;
        }
        self
    }

    pub fn with_title_pattern(mut self, pattern: Option<&str>) -> Result<Self> {
        self.title_pattern = pattern.map(Regex::new).transpose()?;
        Ok(self)
    }

    pub fn with_workspace(mut self, workspace: Option<i32>) -> Self {
        self.workspace_filter = workspace;
        self
    }
}

fn command_basename(command: &str) -> &str {
    Path::new(command)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(command)
}
