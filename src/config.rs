use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub tools: ToolsConfig,
    pub matching: MatchingConfig,
    pub launch: LaunchConfig,
    // Нормализованные типы окон - не сериализуются, строятся после загрузки
    #[serde(skip)]
    window_type_set: HashSet<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

/// Имена или пути утилит, через которые опрашивается оконная система
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    pub wmctrl: String,
    pub xprop: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MatchingConfig {
    pub window_types: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LaunchConfig {
    /// true - запуск в отдельном процессе, false - замена текущего процесса
    pub fork: bool,
}

impl Default for Config {
    fn default() -> Self {
        let mut config = Self {
            logging: LoggingConfig {
                level: "warn".to_string(),
                format: "compact".to_string(),
            },
            tools: ToolsConfig {
                wmctrl: "wmctrl".to_string(),
                xprop: "xprop".to_string(),
            },
            matching: MatchingConfig {
                window_types: vec!["normal".to_string(), "dialog".to_string()],
            },
            launch: LaunchConfig { fork: true },
            window_type_set: HashSet::new(),
        };
        config.build_indexes();
        config
    }
}

impl Config {
    /// Путь к файлу конфигурации по умолчанию: `~/.config/jumpto/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("jumpto").join("config.toml"))
    }

    /// Загружает конфигурацию: значения по умолчанию, затем файл, затем `JUMPTO_*`.
    /// Отсутствующий файл не считается ошибкой.
    pub fn load<P: AsRef<Path>>(config_path: Option<P>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        let path = config_path
            .map(|p| p.as_ref().to_path_buf())
            .or_else(Self::default_path);
        if let Some(path) = &path {
            figment = figment.merge(Toml::file(path));
        }

        let mut config: Config = figment
            .merge(Env::prefixed("JUMPTO_").split("__"))
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", path))?;

        config.validate()?;
        config.build_indexes();

        Ok(config)
    }

    pub fn build_indexes(&mut self) {
        self.window_type_set = self
            .matching
            .window_types
            .iter()
            .map(|t| t.to_lowercase())
            .collect();
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if self.tools.wmctrl.is_empty() || self.tools.xprop.is_empty() {
            anyhow::bail!("Пути к утилитам не могут быть пустыми");
        }

        if self.matching.window_types.is_empty() {
            anyhow::bail!("Список допустимых типов окон пуст");
        }

        Ok(())
    }

    /// Подходит ли окно с такими тегами типа. Окно без тегов считается "normal".
    pub fn accepts_window_types(&self, types: &[String]) -> bool {
        if types.is_empty() {
            return self.window_type_set.contains("normal");
        }
        types
            .iter()
            .any(|t| self.window_type_set.contains(t.as_str()))
    }
}
