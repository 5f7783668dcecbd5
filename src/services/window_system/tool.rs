use crate::error::{JumpError, Result};
use crate::jump_error;
use tokio::process::Command;
use tracing::debug;

/// Запускает утилиту оконной системы и возвращает её stdout.
/// Ненулевой код выхода считается ошибкой запроса.
pub async fn run_tool(program: &str, args: &[&str]) -> Result<String> {
    debug!("Запуск {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|e| jump_error!(query, "{} не запустился: {}", program, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(JumpError::Query(format!(
            "{} {} вернул ошибку: {}",
            program,
            args.join(" "),
            stderr.trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
