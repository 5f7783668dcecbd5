use crate::model::{Direction, SelectionContext, WindowId};
use std::collections::HashSet;

/// Выбирает следующее окно из `matches` относительно активного окна.
///
/// Порядок обхода - порядок наложения (снизу вверх для `Forward`, сверху вниз
/// для `Backward`), ограниченный окнами из `matches`:
/// - если активное окно среди `matches`, берётся следующее за ним с переходом
///   в начало после последнего;
/// - иначе берётся последнее окно в порядке обхода (для `Forward` это самое
///   верхнее, т.е. последнее поднятое).
///
/// Если ни одно из `matches` не попало в порядок наложения (окна появились
/// между запросами), возвращается первое из `matches`.
pub fn select_next(
    matches: &[WindowId],
    context: &SelectionContext,
    direction: Direction,
) -> Option<WindowId> {
    let wanted: HashSet<WindowId> = matches.iter().copied().collect();

    let ordered: Vec<WindowId> = match direction {
        Direction::Forward => context
            .stacking_order
            .iter()
            .filter(|id| wanted.contains(*id))
            .copied()
            .collect(),
        Direction::Backward => context
            .stacking_order
            .iter()
            .rev()
            .filter(|id| wanted.contains(*id))
            .copied()
            .collect(),
    };

    if ordered.is_empty() {
        return matches.first().copied();
    }

    let anchor = context
        .active_window
        .and_then(|active| ordered.iter().position(|id| *id == active));

    match anchor {
        Some(index) => Some(ordered[(index + 1) % ordered.len()]),
        None => ordered.last().copied(),
    }
}
