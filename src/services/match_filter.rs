use crate::config::Config;
use crate::debug_if_enabled;
use crate::model::{MatchCriteria, WindowRecord};
use crate::services::window_system::WindowSystem;
use std::collections::HashSet;
use tracing::debug;

/// Стадии фильтра в порядке применения. Дешёвые проверки идут первыми,
/// `WindowType` делает отдельный запрос на каждое окно и должна быть последней.
pub const STAGES: [FilterStage; 4] = [
    FilterStage::Title,
    FilterStage::ClassOrProcess,
    FilterStage::Workspace,
    FilterStage::WindowType,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    Title,
    ClassOrProcess,
    Workspace,
    WindowType,
}

/// Всё, что нужно стадиям фильтра, кроме самих окон
pub struct MatchFilter<'a> {
    pub criteria: &'a MatchCriteria,
    pub candidate_pids: &'a HashSet<u32>,
    /// `None`, если имя хоста определить не удалось: тогда совпадение по pid невозможно
    pub local_hostname: Option<&'a str>,
    pub config: &'a Config,
}

impl FilterStage {
    /// Проверка окна для стадий, не требующих запросов к оконной системе
    pub fn keeps(&self, window: &WindowRecord, filter: &MatchFilter<'_>) -> bool {
        match self {
            FilterStage::Title => match &filter.criteria.title_pattern {
                Some(pattern) => pattern.is_match(&window.title),
                None => true,
            },
            FilterStage::ClassOrProcess => {
                if same_ignoring_case(&window.class, &filter.criteria.class_identifier) {
                    return true;
                }
                // pid с другого хоста ничего не говорит о локальных процессах
                let is_local = filter
                    .local_hostname
                    .is_some_and(|host| same_ignoring_case(&window.hostname, host));
                is_local
                    && window
                        .pid
                        .is_some_and(|pid| filter.candidate_pids.contains(&pid))
            }
            FilterStage::Workspace => match filter.criteria.workspace_filter {
                Some(workspace) => window.workspace == workspace || window.is_sticky(),
                None => true,
            },
            // Проверяется в apply() по живому запросу типа
            FilterStage::WindowType => true,
        }
    }

    pub async fn apply(
        &self,
        windows: Vec<WindowRecord>,
        filter: &MatchFilter<'_>,
        window_system: &dyn WindowSystem,
    ) -> Vec<WindowRecord> {
        if *self != FilterStage::WindowType {
            return windows
                .into_iter()
                .filter(|window| self.keeps(window, filter))
                .collect();
        }

        let mut kept = Vec::with_capacity(windows.len());
        for window in windows {
            match window_system.window_types(window.id).await {
                Ok(types) if filter.config.accepts_window_types(&types) => kept.push(window),
                Ok(types) => {
                    debug_if_enabled!("Окно {} отброшено по типу {:?}", window.id, types);
                }
                Err(e) => {
                    // Окно, скорее всего, закрылось после получения списка
                    debug!("Не удалось получить тип окна {}: {}", window.id, e);
                }
            }
        }
        kept
    }
}

// Классы бывают не только латиницей, поэтому полное приведение регистра
fn same_ignoring_case(left: &str, right: &str) -> bool {
    left == right || left.to_lowercase() == right.to_lowercase()
}

/// Оставляет окна целевого приложения, сохраняя их исходный порядок.
/// Пустой результат - нормальный исход, а не ошибка.
pub async fn filter_windows(
    windows: Vec<WindowRecord>,
    filter: &MatchFilter<'_>,
    window_system: &dyn WindowSystem,
) -> Vec<WindowRecord> {
    let mut remaining = windows;
    for stage in STAGES {
        if remaining.is_empty() {
            break;
        }
        remaining = stage.apply(remaining, filter, window_system).await;
        debug!("После стадии {:?} осталось окон: {}", stage, remaining.len());
    }
    remaining
}
