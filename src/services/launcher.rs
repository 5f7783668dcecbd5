use crate::error::{JumpError, Result};
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// Отдельный процесс без ожидания завершения
    Fork,
    /// Замена текущего процесса; при успехе управление не возвращается
    Replace,
}

pub struct Launcher {
    mode: LaunchMode,
    dry_run: bool,
}

impl Launcher {
    pub fn new(mode: LaunchMode, dry_run: bool) -> Self {
        Self { mode, dry_run }
    }

    pub fn mode(&self) -> LaunchMode {
        self.mode
    }

    /// Команда ищется до запуска, чтобы "не найдено" отличалось от прочих ошибок
    pub fn resolve(command: &str) -> Result<PathBuf> {
        which::which(command).map_err(|_| JumpError::CommandNotFound(command.to_string()))
    }

    pub fn launch(&self, command: &str, args: &[String]) -> Result<()> {
        let path = Self::resolve(command)?;

        if self.dry_run {
            info!("Dry-run: запустили бы {:?} {:?} ({:?})", path, args, self.mode);
            return Ok(());
        }

        let mut cmd = Command::new(&path);
        cmd.args(args);

        match self.mode {
            LaunchMode::Fork => {
                info!("Запуск {:?} {:?}", path, args);
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .process_group(0)
                    .spawn()?;
                Ok(())
            }
            LaunchMode::Replace => {
                info!("Замена процесса на {:?} {:?}", path, args);
                // exec возвращает управление только при ошибке
                Err(JumpError::Io(cmd.exec()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_command() {
        assert!(Launcher::resolve("sh").is_ok());
    }

    #[test]
    fn test_unknown_command_fails_before_spawn() {
        let launcher = Launcher::new(LaunchMode::Fork, false);
        let result = launcher.launch("jumpto-no-such-command-xyz", &[]);
        assert!(matches!(result, Err(JumpError::CommandNotFound(name)) if name == "jumpto-no-such-command-xyz"));
    }

    #[test]
    fn test_dry_run_does_not_replace_process() {
        let launcher = Launcher::new(LaunchMode::Replace, true);
        assert!(launcher.launch("sh", &["-c".to_string(), "exit 3".to_string()]).is_ok());
    }

    #[test]
    fn test_fork_returns_immediately() {
        let launcher = Launcher::new(LaunchMode::Fork, false);
        assert_eq!(launcher.mode(), LaunchMode::Fork);
        assert!(launcher.launch("sh", &["-c".to_string(), "exit 0".to_string()]).is_ok());
    }
}
