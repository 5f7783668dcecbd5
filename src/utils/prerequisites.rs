use crate::config::Config;
use crate::error::{JumpError, Result};
use tracing::{debug, info};

/// Проверить, что утилиты оконной системы установлены
pub fn check_prerequisites(config: &Config) -> Result<()> {
    info!("Проверка необходимых утилит...");

    for tool in [&config.tools.wmctrl, &config.tools.xprop] {
        check_tool(tool)?;
    }

    info!("Все необходимые утилиты найдены");
    Ok(())
}

fn check_tool(tool: &str) -> Result<()> {
    match which::which(tool) {
        Ok(path) => {
            debug!("{} найден: {:?}", tool, path);
            Ok(())
        }
        Err(e) => {
            debug!("{} не найден: {}", tool, e);
            Err(JumpError::PrerequisiteMissing(tool.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_tool_is_reported_by_name() {
        let mut config = Config::default();
        config.tools.xprop = "jumpto-missing-xprop".to_string();
        config.tools.wmctrl = "sh".to_string();

        let result = check_prerequisites(&config);
        assert!(matches!(result, Err(JumpError::PrerequisiteMissing(tool)) if tool == "jumpto-missing-xprop"));
    }

    #[test]
    fn test_present_tools_pass() {
        let mut config = Config::default();
        config.tools.wmctrl = "sh".to_string();
        config.tools.xprop = "sh".to_string();

        assert!(check_prerequisites(&config).is_ok());
    }
}
