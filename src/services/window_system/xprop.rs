use crate::error::{JumpError, Result};
use crate::model::{WindowId, WindowTypes};

use super::tool::run_tool;

const STACKING_PROPERTY: &str = "_NET_CLIENT_LIST_STACKING";
const ACTIVE_PROPERTY: &str = "_NET_ACTIVE_WINDOW";
const TYPE_PROPERTY: &str = "_NET_WM_WINDOW_TYPE";
const TYPE_PREFIX: &str = "_NET_WM_WINDOW_TYPE_";

pub struct XpropClient {
    program: String,
}

impl XpropClient {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub async fn stacking_order(&self) -> Result<Vec<WindowId>> {
        let stdout = run_tool(&self.program, &["-root", "-notype", STACKING_PROPERTY]).await?;
        parse_stacking_order(&stdout)
    }

    pub async fn active_window(&self) -> Result<Option<WindowId>> {
        let stdout = run_tool(&self.program, &["-root", "-notype", ACTIVE_PROPERTY]).await?;
        Ok(parse_active_window(&stdout))
    }

    pub async fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        let id_arg = id.to_string();
        let stdout = run_tool(&self.program, &["-id", &id_arg, "-notype", TYPE_PROPERTY]).await?;
        Ok(parse_window_types(&stdout))
    }
}

fn window_ids_after_marker(stdout: &str) -> Option<Vec<WindowId>> {
    let (_, ids) = stdout.split_once('#')?;
    Some(ids.split(',').filter_map(WindowId::from_hex).collect())
}

/// `_NET_CLIENT_LIST_STACKING: window id # 0x1e00003, 0x3a00007`
pub fn parse_stacking_order(stdout: &str) -> Result<Vec<WindowId>> {
    match window_ids_after_marker(stdout) {
        Some(ids) => Ok(ids),
        None => JumpError::query(format!(
            "оконный менеджер не сообщает {}: '{}'",
            STACKING_PROPERTY,
            stdout.trim()
        )),
    }
}

/// `_NET_ACTIVE_WINDOW: window id # 0x3a00007`; `0x0` означает, что фокуса нет
pub fn parse_active_window(stdout: &str) -> Option<WindowId> {
    window_ids_after_marker(stdout)?
        .into_iter()
        .next()
        .filter(|id| id.0 != 0)
}

/// `_NET_WM_WINDOW_TYPE = _NET_WM_WINDOW_TYPE_DIALOG, _NET_WM_WINDOW_TYPE_NORMAL`
pub fn parse_window_types(stdout: &str) -> WindowTypes {
    stdout
        .split(|c: char| c.is_whitespace() || c == ',' || c == '=')
        .filter_map(|token| token.strip_prefix(TYPE_PREFIX))
        .filter(|tag| !tag.is_empty())
        .map(|tag| tag.to_lowercase())
        .collect()
}
