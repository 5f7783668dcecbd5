use smallvec::SmallVec;
use std::fmt;

/// Идентификатор окна X11.
///
/// Хранится числом: `wmctrl` печатает id с ведущими нулями (`0x03a00007`),
/// а `xprop` без них (`0x3a00007`), и сравнивать их как строки нельзя.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u32);

impl WindowId {
    /// Разбирает шестнадцатеричный id вида `0x3a00007`
    pub fn from_hex(text: &str) -> Option<Self> {
        let text = text.trim().trim_end_matches(',');
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))?;
        u32::from_str_radix(digits, 16).ok().map(Self)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// Теги `_NET_WM_WINDOW_TYPE` в нижнем регистре без префикса ("normal", "dialog", ...)
pub type WindowTypes = SmallVec<[String; 2]>;

/// Снимок одного окна верхнего уровня
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    pub id: WindowId,
    pub hostname: String,
    pub pid: Option<u32>,
    /// Отрицательное значение означает "липкое" окно (на всех рабочих столах)
    pub workspace: i32,
    pub class: String,
    pub title: String,
}

impl WindowRecord {
    pub fn new(id: WindowId, class: impl Into<String>) -> Self {
        Self {
            id,
            hostname: String::new(),
            pid: None,
            workspace: 0,
            class: class.into(),
            title: String::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_host(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = hostname.into();
        self
    }

    /// `None` - владелец окна неизвестен
    pub fn with_pid(mut self, pid: Option<u32>) -> Self {
        self.pid = pid;
        self
    }

    pub fn with_workspace(mut self, workspace: i32) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn is_sticky(&self) -> bool {
        self.workspace < 0
    }
}

impl fmt::Display for WindowRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pid = self
            .pid
            .map(|pid| pid.to_string())
            .unwrap_or_else(|| "-".to_string());
        write!(
            f,
            "{} {} {} {} {} {}",
            self.id, self.hostname, pid, self.workspace, self.class, self.title
        )
    }
}

/// Направление обхода порядка наложения окон
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Снизу вверх
    Forward,
    /// Сверху вниз
    Backward,
}

/// Живое состояние оконной системы на момент выбора окна. Не кэшируется.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    /// От самого нижнего окна к самому верхнему
    pub stacking_order: Vec<WindowId>,
    pub active_window: Option<WindowId>,
}
