use crate::error::{JumpError, Result};
use crate::jump_error;
use crate::model::{WindowId, WindowRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use super::tool::run_tool;

// id, рабочий стол, pid, instance.class, хост, заголовок
static WINDOW_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0x[0-9a-fA-F]+)\s+(-?\d+)\s+(\d+)\s+(\S+)\s+(\S+)(?:\s+(.*))?$")
        .expect("valid wmctrl line regex")
});

pub struct WmctrlClient {
    program: String,
}

impl WmctrlClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        let stdout = run_tool(&self.program, &["-l", "-p", "-x"]).await?;
        Ok(parse_window_list(&stdout))
    }

    pub async fn active_workspace(&self) -> Result<Option<i32>> {
        let stdout = run_tool(&self.program, &["-d"]).await?;
        Ok(parse_active_desktop(&stdout))
    }

    pub async fn activate(&self, id: WindowId, bring_to_current: bool) -> Result<()> {
        let action = if bring_to_current { "-R" } else { "-a" };
        let id_arg = id.to_string();

        run_tool(&self.program, &["-i", action, &id_arg])
            .await
            .map_err(|e| JumpError::ActivationFailed {
                id,
                reason: e.to_string(),
            })?;
        Ok(())
    }
}

/// Разбирает вывод `wmctrl -lpx`. Нераспознанные строки пропускаются.
pub fn parse_window_list(stdout: &str) -> Vec<WindowRecord> {
    stdout
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match parse_window_line(line) {
            Ok(window) => Some(window),
            Err(e) => {
                warn!("Пропускаем строку wmctrl: {}", e);
                None
            }
        })
        .collect()
}

fn parse_window_line(line: &str) -> Result<WindowRecord> {
    let caps = WINDOW_LINE
        .captures(line)
        .ok_or_else(|| jump_error!(query, "неожиданный формат: '{}'", line))?;

    let id = WindowId::from_hex(&caps[1])
        .ok_or_else(|| jump_error!(query, "неверный id окна: '{}'", &caps[1]))?;
    let workspace: i32 = caps[2]
        .parse()
        .map_err(|_| jump_error!(query, "неверный рабочий стол: '{}'", &caps[2]))?;
    let pid = caps[3].parse::<u32>().ok().filter(|pid| *pid != 0);
    // WM_CLASS выводится как instance.class, нужна вторая часть
    let class = caps[4]
        .rsplit_once('.')
        .map(|(_, class)| class)
        .unwrap_or(&caps[4]);
    let title = caps.get(6).map(|m| m.as_str()).unwrap_or("");

    let window = WindowRecord::new(id, class)
        .with_host(&caps[5])
        .with_pid(pid)
        .with_workspace(workspace)
        .with_title(title);

    debug!("wmctrl: {}", window);
    Ok(window)
}

/// Номер текущего рабочего стола из вывода `wmctrl -d` (строка со звёздочкой)
pub fn parse_active_desktop(stdout: &str) -> Option<i32> {
    stdout.lines().find_map(|line| {
        let mut parts = line.split_whitespace();
        let index = parts.next()?;
        match parts.next() {
            Some("*") => index.parse().ok(),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW_LIST: &str = "\
0x01e00003 -1 1520   xfce4-panel.Xfce4-panel  mybox xfce4-panel
0x03a00007  0 2345   Navigator.Firefox     mybox Mozilla Firefox - Start Page
0x04200004  1 0      emacs.Emacs           remote.example *scratch*
0x04400001  2 3001   gnome-terminal-server.Gnome-terminal  mybox
garbage line
";

    #[test]
    fn test_parse_window_list() {
        let windows = parse_window_list(WINDOW_LIST);
        assert_eq!(windows.len(), 4);

        let panel = &windows[0];
        assert_eq!(panel.id, WindowId(0x01e00003));
        assert!(panel.is_sticky());
        assert_eq!(panel.class, "Xfce4-panel");

        let firefox = &windows[1];
        assert_eq!(firefox.workspace, 0);
        assert_eq!(firefox.pid, Some(2345));
        assert_eq!(firefox.class, "Firefox");
        assert_eq!(firefox.hostname, "mybox");
        assert_eq!(firefox.title, "Mozilla Firefox - Start Page");

        let emacs = &windows[2];
        assert_eq!(emacs.pid, None);
        assert_eq!(emacs.hostname, "remote.example");
        assert_eq!(emacs.title, "*scratch*");

        let terminal = &windows[3];
        assert_eq!(terminal.class, "Gnome-terminal");
        assert_eq!(terminal.title, "");
    }

    #[test]
    fn test_class_without_instance() {
        let windows = parse_window_list("0x00000010  0 12   Solo  host title\n");
        assert_eq!(windows[0].class, "Solo");
    }

    #[test]
    fn test_parse_active_desktop() {
        let desktops = "\
0  - DG: 1920x1080  VP: N/A  WA: 0,0 1920x1050  Workspace 1
1  * DG: 1920x1080  VP: 0,0  WA: 0,0 1920x1050  Workspace 2
";
        assert_eq!(parse_active_desktop(desktops), Some(1));
        assert_eq!(parse_active_desktop("0  - DG: 1920x1080  VP: N/A\n"), None);
        assert_eq!(parse_active_desktop(""), None);
    }
}
