use std::collections::HashSet;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::{debug, warn};

/// Находит pid живых процессов, чьё имя команды (argv[0]) начинается с `identifier`.
///
/// argv[0] процесс сообщает о себе сам, ядро его не проверяет. Сравнение
/// намеренно префиксное: некоторые программы переписывают argv[0] вместе с
/// аргументами (`chrome --type=renderer`), и точное сравнение их бы не нашло.
/// Обратная сторона - `fire` совпадёт с `firefox`.
pub fn list_pids_for_command(identifier: &str) -> HashSet<u32> {
    if identifier.is_empty() {
        return HashSet::new();
    }

    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_cmd(UpdateKind::OnlyIfNotSet),
    );

    let pids: HashSet<u32> = system
        .processes()
        .iter()
        .filter_map(|(pid, process)| {
            let argv0 = process.cmd().first()?.to_string_lossy();
            command_name_matches(&argv0, identifier).then(|| pid.as_u32())
        })
        .collect();

    debug!("Процессы '{}': {:?}", identifier, pids);
    pids
}

/// Имя локального хоста; `None`, если его не удалось определить
pub fn local_hostname() -> Option<String> {
    let hostname = System::host_name().filter(|name| !name.is_empty());
    if hostname.is_none() {
        warn!("Не удалось определить имя хоста, поиск окон по pid отключён");
    }
    hostname
}

/// Убирает путь из argv[0]. Слеш ищется только до первого пробела, чтобы
/// аргументы, вписанные в argv[0], не обрезали имя.
fn strip_directory(argv0: &str) -> &str {
    let command_end = argv0.find(char::is_whitespace).unwrap_or(argv0.len());
    match argv0[..command_end].rfind('/') {
        Some(slash) => &argv0[slash + 1..],
        None => argv0,
    }
}

fn command_name_matches(argv0: &str, identifier: &str) -> bool {
    strip_directory(argv0).starts_with(identifier)
}
