//! Scripted window system for unit tests.

use crate::error::{JumpError, Result};
use crate::model::{WindowId, WindowRecord, WindowTypes};
use std::collections::HashMap;
use std::sync::Mutex;

use super::r#trait::WindowSystem;

#[derive(Default)]
pub struct FakeWindowSystem {
    pub windows: Vec<WindowRecord>,
    pub stacking_order: Vec<WindowId>,
    pub active_window: Option<WindowId>,
    pub active_workspace: Option<i32>,
    pub types: HashMap<WindowId, Vec<&'static str>>,
    /// Окна, для которых запрос типа падает
    pub vanished: Vec<WindowId>,
    /// Окна, закрытые между выбором и активацией
    pub fail_activation: Vec<WindowId>,
    type_queries: Mutex<Vec<WindowId>>,
    activated: Mutex<Vec<(WindowId, bool)>>,
}

impl FakeWindowSystem {
    pub fn new(windows: Vec<WindowRecord>) -> Self {
        let stacking_order = windows.iter().map(|w| w.id).collect();
        Self {
            windows,
            stacking_order,
            ..Default::default()
        }
    }

    pub fn with_active(mut self, id: Option<WindowId>) -> Self {
        self.active_window = id;
        self
    }

    pub fn with_types(mut self, id: WindowId, types: &[&'static str]) -> Self {
        self.types.insert(id, types.to_vec());
        self
    }

    pub fn type_queries(&self) -> Vec<WindowId> {
        self.type_queries.lock().unwrap().clone()
    }

    pub fn activated(&self) -> Vec<(WindowId, bool)> {
        self.activated.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl WindowSystem for FakeWindowSystem {
    async fn list_windows(&self) -> Result<Vec<WindowRecord>> {
        Ok(self.windows.clone())
    }

    async fn stacking_order(&self) -> Result<Vec<WindowId>> {
        Ok(self.stacking_order.clone())
    }

    async fn active_window(&self) -> Result<Option<WindowId>> {
        Ok(self.active_window)
    }

    async fn active_workspace(&self) -> Result<Option<i32>> {
        Ok(self.active_workspace)
    }

    async fn window_types(&self, id: WindowId) -> Result<WindowTypes> {
        self.type_queries.lock().unwrap().push(id);
        if self.vanished.contains(&id) {
            return JumpError::query(format!("BadWindow {}", id));
        }
        Ok(self
            .types
            .get(&id)
            .map(|types| types.iter().map(|t| t.to_string()).collect())
            .unwrap_or_default())
    }

    async fn activate(&self, id: WindowId, bring_to_current: bool) -> Result<()> {
        if self.fail_activation.contains(&id) {
            return Err(JumpError::ActivationFailed {
                id,
                reason: "BadWindow".to_string(),
            });
        }
        self.activated.lock().unwrap().push((id, bring_to_current));
        Ok(())
    }
}
