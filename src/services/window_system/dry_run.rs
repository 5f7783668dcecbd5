use crate::error::Result;
use crate::model::{WindowId, WindowRecord, WindowTypes};
use tracing::info;

use super::r#trait::WindowSystem;

/// Выполняет все запросы по-настоящему, но окна не активирует
pub struct DryRunWindowSystem<W> {
    inner: W,
}

impl<W: WindowSystem> DryRunWindowSystem<W> {
    pub fn new(inner: W) -> Self {
        info!("Dry-run режим - окна не будут активироваться");
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<W: WindowSystem> WindowSystem for DryRunWindowSystem<W> {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        self.inner.list_windows().await
    }

    async fn stacking_order(&self) -> Result<Vec<WindowId>> {
        self.inner.stacking_order().await
    }

    async fn active_window(&self) -> Result<Option<WindowId>> {
        self.inner.active_window().await
    }

    async fn active_workspace(&self) -> Result<Option<i32>> {
        self.inner.active_workspace().await
    }

    async fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        self.inner.window_types(id).await
    }

    async fn activate(&self, id: WindowId, bring_to_current: bool) -> Result<()> {
        info!(
            "Dry-run: активировали бы окно {} (перенос на текущий стол: {})",
            id, bring_to_current
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::window_system::fake::FakeWindowSystem;

    #[tokio::test]
    async fn test_activation_is_suppressed() {
        let fake = FakeWindowSystem::new(vec![WindowRecord::new(WindowId(1), "Foo")]);
        let dry = DryRunWindowSystem::new(fake);

        dry.activate(WindowId(1), false).await.unwrap();

        assert_eq!(dry.list_windows().await.unwrap().len(), 1);
        assert!(dry.inner.activated().is_empty());
    }
}
