use crate::model::{Direction, SelectionContext, WindowId, WindowRecord};
use crate::services::selector::select_next;
use std::collections::HashSet;

/// Что делать после поиска окон
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Focus(WindowId),
    /// Процесс запущен, но окна у него нет
    ReportNoWindow,
    Launch,
}

#[derive(Debug, Clone, Default)]
pub struct LaunchPolicy {
    /// Запускать, даже если процесс уже работает
    pub force: bool,
    /// Запускать вместо переключения, если переданы аргументы
    pub passthrough: bool,
    pub passthrough_args: Vec<String>,
}

impl LaunchPolicy {
    /// `-p` подразумевает `-f`
    pub fn new(force: bool, passthrough: bool, passthrough_args: Vec<String>) -> Self {
        Self {
            force: force || passthrough,
            passthrough,
            passthrough_args,
        }
    }

    pub fn overrides_focus(&self) -> bool {
        self.passthrough && !self.passthrough_args.is_empty()
    }
}

/// Нужен ли живой контекст выбора для этих совпадений
pub fn needs_selection(matches: &[WindowRecord], policy: &LaunchPolicy) -> bool {
    !matches.is_empty() && !policy.overrides_focus()
}

/// Правила по порядку:
/// 1. есть совпадения и passthrough не требует запуска - переключиться на окно;
/// 2. иначе, если процесс есть и запуск не форсирован - сообщить, что окна нет;
/// 3. иначе - запустить.
///
/// `context` запрашивается вызывающим непосредственно перед решением, когда
/// `needs_selection` истинно.
pub fn decide(
    matches: &[WindowRecord],
    pids: &HashSet<u32>,
    policy: &LaunchPolicy,
    context: Option<&SelectionContext>,
    direction: Direction,
) -> Action {
    if needs_selection(matches, policy) {
        let ids: Vec<WindowId> = matches.iter().map(|w| w.id).collect();
        let selected = context.and_then(|ctx| select_next(&ids, ctx, direction));
        if let Some(id) = selected {
            return Action::Focus(id);
        }
    }

    if !pids.is_empty() && !policy.force {
        Action::ReportNoWindow
    } else {
        Action::Launch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pids(values: &[u32]) -> HashSet<u32> {
        values.iter().copied().collect()
    }

    fn window(id: u32) -> WindowRecord {
        WindowRecord::new(WindowId(id), "App")
    }

    fn context_for(ids: &[u32]) -> SelectionContext {
        SelectionContext {
            stacking_order: ids.iter().map(|id| WindowId(*id)).collect(),
            active_window: None,
        }
    }

    #[test]
    fn test_nothing_running_launches() {
        let action = decide(&[], &pids(&[]), &LaunchPolicy::default(), None, Direction::Forward);
        assert_eq!(action, Action::Launch);
    }

    #[test]
    fn test_process_without_window_is_reported() {
        let action = decide(&[], &pids(&[42]), &LaunchPolicy::default(), None, Direction::Forward);
        assert_eq!(action, Action::ReportNoWindow);
    }

    #[test]
    fn test_force_launches_despite_process() {
        let policy = LaunchPolicy::new(true, false, vec![]);
        let action = decide(&[], &pids(&[42]), &policy, None, Direction::Forward);
        assert_eq!(action, Action::Launch);
    }

    #[test]
    fn test_matches_focus_even_without_process() {
        let matches = [window(1), window(2)];
        let ctx = context_for(&[1, 2]);
        let action = decide(&matches, &pids(&[]), &LaunchPolicy::default(), Some(&ctx), Direction::Forward);
        assert_eq!(action, Action::Focus(WindowId(2)));
    }

    #[test]
    fn test_force_alone_does_not_override_focus() {
        let matches = [window(1)];
        let ctx = context_for(&[1]);
        let policy = LaunchPolicy::new(true, false, vec!["file.txt".to_string()]);
        let action = decide(&matches, &pids(&[42]), &policy, Some(&ctx), Direction::Forward);
        assert_eq!(action, Action::Focus(WindowId(1)));
    }

    #[test]
    fn test_passthrough_with_args_launches() {
        let matches = [window(1)];
        let policy = LaunchPolicy::new(false, true, vec!["file.txt".to_string()]);

        assert!(policy.force);
        assert!(!needs_selection(&matches, &policy));
        let action = decide(&matches, &pids(&[42]), &policy, None, Direction::Forward);
        assert_eq!(action, Action::Launch);
    }

    #[test]
    fn test_passthrough_without_args_focuses() {
        let matches = [window(1)];
        let ctx = context_for(&[1]);
        let policy = LaunchPolicy::new(false, true, vec![]);
        let action = decide(&matches, &pids(&[42]), &policy, Some(&ctx), Direction::Forward);
        assert_eq!(action, Action::Focus(WindowId(1)));
    }
}
