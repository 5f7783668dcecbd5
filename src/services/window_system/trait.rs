use crate::config::Config;
use crate::error::Result;
use crate::model::{SelectionContext, WindowId, WindowRecord, WindowTypes};
use std::sync::Arc;

/// Источник сведений об окнах и исполнитель активации.
///
/// Каждый вызов - отдельный запрос к оконной системе без кэширования, поэтому
/// два последовательных вызова могут увидеть разное состояние.
#[async_trait::async_trait]
pub trait WindowSystem: Send + Sync {
    /// Все окна верхнего уровня
    async fn list_windows(&self) -> Result<Vec<WindowRecord>>;

    /// Порядок наложения от самого нижнего окна к самому верхнему
    async fn stacking_order(&self) -> Result<Vec<WindowId>>;

    async fn active_window(&self) -> Result<Option<WindowId>>;

    async fn active_workspace(&self) -> Result<Option<i32>>;

    /// Теги типа окна; пустой набор означает, что тип не задан
    async fn window_types(&self, id: WindowId) -> Result<WindowTypes>;

    /// Поднимает окно и передаёт ему фокус. При `bring_to_current` окно
    /// сначала переносится на текущий рабочий стол.
    async fn activate(&self, id: WindowId, bring_to_current: bool) -> Result<()>;

    async fn selection_context(&self) -> Result<SelectionContext> {
        let active_window = self.active_window().await?;
        let stacking_order = self.stacking_order().await?;
        Ok(SelectionContext {
            stacking_order,
            active_window,
        })
    }
}

/// Factory function to create a window system backend based on the dry_run flag
pub fn create_window_system(config: Arc<Config>, dry_run: bool) -> Box<dyn WindowSystem> {
    let x11 = super::x11::X11WindowSystem::new(config);
    if dry_run {
        Box::new(super::dry_run::DryRunWindowSystem::new(x11))
    } else {
        Box::new(x11)
    }
}
