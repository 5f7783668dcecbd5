use crate::config::Config;
use crate::error::{JumpError, Result};
use crate::model::{Direction, MatchCriteria, WindowId, WindowRecord};
use crate::services::decision::{decide, needs_selection, Action, LaunchPolicy};
use crate::services::match_filter::{filter_windows, MatchFilter};
use crate::services::process_directory::{list_pids_for_command, local_hostname};
use crate::services::{Launcher, WindowSystem};
use tracing::{debug, info, warn};

/// Один запуск: что искать и что делать с результатом
#[derive(Debug, Clone)]
pub struct Request {
    pub command: String,
    pub policy: LaunchPolicy,
    pub direction: Direction,
    pub list_only: bool,
    pub title_pattern: Option<String>,
    pub class_identifier: Option<String>,
    pub command_identifier: Option<String>,
    pub current_workspace_only: bool,
    pub bring_to_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Listed(Vec<WindowRecord>),
    Focused(WindowId),
    Launched,
}

/// Найти окно приложения и переключиться на него, либо запустить приложение
pub async fn run(
    request: &Request,
    config: &Config,
    window_system: &dyn WindowSystem,
    launcher: &Launcher,
) -> Result<Outcome> {
    let criteria = build_criteria(request, window_system).await?;
    debug!("Критерии поиска: {:?}", criteria);

    let pids = list_pids_for_command(&criteria.command_identifier);
    let hostname = local_hostname();

    let filter = MatchFilter {
        criteria: &criteria,
        candidate_pids: &pids,
        local_hostname: hostname.as_deref(),
        config,
    };
    let windows = window_system.list_windows().await?;
    let matches = filter_windows(windows, &filter, window_system).await;
    info!("Найдено окон: {}, процессов: {}", matches.len(), pids.len());

    if request.list_only {
        return Ok(Outcome::Listed(matches));
    }

    // Контекст запрашивается только перед самим выбором и не кэшируется
    let context = if needs_selection(&matches, &request.policy) {
        Some(window_system.selection_context().await?)
    } else {
        None
    };

    match decide(
        &matches,
        &pids,
        &request.policy,
        context.as_ref(),
        request.direction,
    ) {
        Action::Focus(id) => {
            window_system.activate(id, request.bring_to_current).await?;
            Ok(Outcome::Focused(id))
        }
        Action::ReportNoWindow => Err(JumpError::ProcessFoundNoWindow(
            criteria.command_identifier.clone(),
        )),
        Action::Launch => {
            debug!("Режим запуска: {:?}", launcher.mode());
            launcher.launch(&request.command, &request.policy.passthrough_args)?;
            Ok(Outcome::Launched)
        }
    }
}

async fn build_criteria(
    request: &Request,
    window_system: &dyn WindowSystem,
) -> Result<MatchCriteria> {
    let workspace = if request.current_workspace_only {
        let workspace = window_system.active_workspace().await?;
        if workspace.is_none() {
            warn!("Текущий рабочий стол не определён, фильтр по рабочему столу отключён");
        }
        workspace
    } else {
        None
    };

    MatchCriteria::for_command(&request.command)
        .with_class(request.class_identifier.clone())
        .with_command_identifier(request.command_identifier.clone())
        .with_workspace(workspace)
        .with_title_pattern(request.title_pattern.as_deref())
}
