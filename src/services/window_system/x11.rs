use crate::config::Config;
use crate::error::Result;
use crate::model::{WindowId, WindowRecord, WindowTypes};
use std::sync::Arc;
use tracing::info;

use super::r#trait::WindowSystem;
use super::wmctrl::WmctrlClient;
use super::xprop::XpropClient;

/// Оконная система X11 через wmctrl и xprop
pub struct X11WindowSystem {
    wmctrl: WmctrlClient,
    xprop: XpropClient,
}

impl X11WindowSystem {
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            wmctrl: WmctrlClient::new(config.tools.wmctrl.clone()),
            xprop: XpropClient::new(config.tools.xprop.clone()),
        }
    }
}

#[async_trait::async_trait]
impl WindowSystem for X11WindowSystem {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        self.wmctrl.list_windows().await
    }

    async fn stacking_order(&self) -> Result<Vec<WindowId>> {
        self.xprop.stacking_order().await
    }

    async fn active_window(&self) -> Result<Option<WindowId>> {
        self.xprop.active_window().await
    }

    async fn active_workspace(&self) -> Result<Option<i32>> {
        self.wmctrl.active_workspace().await
    }

    async fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        self.xprop.window_types(id).await
    }

    async fn activate(&self, id: WindowId, bring_to_current: bool) -> Result<()> {
        info!("Активация окна {}", id);
        self.wmctrl.activate(id, bring_to_current).await
    }
}
