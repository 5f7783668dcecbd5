use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
mod app;
mod config;
mod error;
mod model;
mod services;
mod utils;

use app::{Outcome, Request};
use config::Config;
use error::Result;
use model::Direction;
use services::decision::LaunchPolicy;
use services::{create_window_system, LaunchMode, Launcher};

#[derive(Parser, Debug)]
#[command(name = "jumpto", version)]
#[command(about = "Переключается на окно приложения, а если окна нет - запускает приложение")]
struct Args {
    /// Перебирать окна в обратном порядке
    #[arg(short = 'r')]
    reverse: bool,

    /// Запустить, даже если процесс уже работает
    #[arg(short = 'f')]
    force: bool,

    /// Запускать без fork (заменить текущий процесс)
    #[arg(short = 'n')]
    no_fork: bool,

    /// Передать аргументы новому экземпляру; подразумевает -f
    #[arg(short = 'p')]
    passthrough: bool,

    /// Вывести найденные окна и выйти
    #[arg(short = 'L')]
    list: bool,

    /// Заголовок окна должен совпадать с регулярным выражением
    #[arg(short = 't', value_name = "NAME")]
    title: Option<String>,

    /// Класс окна вместо имени команды
    #[arg(short = 'c', value_name = "NAME")]
    class: Option<String>,

    /// Имя процесса вместо имени команды
    #[arg(short = 'i', value_name = "NAME")]
    process_name: Option<String>,

    /// Искать только на текущем рабочем столе
    #[arg(short = 'w')]
    current_workspace: bool,

    /// Перенести окно на текущий рабочий стол перед активацией
    #[arg(short = 'R')]
    bring_here: bool,

    /// Режим сухого запуска (без реальных действий)
    #[arg(long)]
    dry_run: bool,

    /// Путь к файлу конфигурации
    #[arg(long)]
    config: Option<PathBuf>,

    /// Уровень логирования
    #[arg(long)]
    log_level: Option<String>,

    /// Команда для запуска, если окно не найдено, и её аргументы.
    /// Всё после команды передаётся ей без разбора
    #[arg(
        value_name = "COMMAND [ARG]...",
        required = true,
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    command: Vec<String>,
}

impl Args {
    /// Делит позиционные аргументы на команду и её аргументы
    fn into_command(self) -> (Args, String, Vec<String>) {
        let mut args = self;
        let mut words = std::mem::take(&mut args.command).into_iter();
        let command = words.next().unwrap_or_default();
        (args, command, words.collect())
    }
}

/// Код выхода для ошибки разбора: справка и версия - успех, всё остальное - 1
fn parse_failure_status(error: &clap::Error) -> u8 {
    if error.exit_code() == 0 {
        0
    } else {
        1
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_failure_status(&e));
        }
    };

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jumpto: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    let (args, command, command_args) = args.into_command();

    // Загрузка конфигурации
    let config = Arc::new(Config::load(args.config.as_deref())?);

    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    init_tracing(level, &config.logging.format)?;
    info!("Запуск jumpto v{}", env!("CARGO_PKG_VERSION"));

    if args.dry_run {
        warn!("Режим сухого запуска - реальные действия отключены");
    }

    utils::check_prerequisites(&config)?;

    let launch_mode = if args.no_fork || !config.launch.fork {
        LaunchMode::Replace
    } else {
        LaunchMode::Fork
    };
    let launcher = Launcher::new(launch_mode, args.dry_run);
    let window_system = create_window_system(config.clone(), args.dry_run);

    let request = Request {
        command,
        policy: LaunchPolicy::new(args.force, args.passthrough, command_args),
        direction: if args.reverse {
            Direction::Backward
        } else {
            Direction::Forward
        },
        list_only: args.list,
        title_pattern: args.title,
        class_identifier: args.class,
        command_identifier: args.process_name,
        current_workspace_only: args.current_workspace,
        bring_to_current: args.bring_here,
    };

    match app::run(&request, &config, window_system.as_ref(), &launcher).await? {
        Outcome::Listed(windows) => {
            for window in windows {
                println!("{}", window);
            }
        }
        Outcome::Focused(id) => info!("Окно {} активировано", id),
        Outcome::Launched => info!("{} запущен", request.command),
    }

    Ok(())
}

fn init_tracing(level: &str, format: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))?;

    // stdout занят выводом -L, логи идут в stderr
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        "full" => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        _ => registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .init(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> (Args, String, Vec<String>) {
        Args::try_parse_from(argv).unwrap().into_command()
    }

    #[test]
    fn test_flags_after_command_go_to_command() {
        let (args, command, command_args) = parse(&["jumpto", "-p", "vim", "-f", "file"]);
        assert!(args.passthrough);
        assert!(!args.force);
        assert_eq!(command, "vim");
        assert_eq!(command_args, vec!["-f", "file"]);

        let (args, command, command_args) = parse(&["jumpto", "firefox", "-r"]);
        assert!(!args.reverse);
        assert_eq!(command, "firefox");
        assert_eq!(command_args, vec!["-r"]);
    }

    #[test]
    fn test_flags_before_command_are_ours() {
        let (args, command, command_args) =
            parse(&["jumpto", "-r", "-L", "-t", "Inbox", "thunderbird"]);
        assert!(args.reverse);
        assert!(args.list);
        assert_eq!(args.title.as_deref(), Some("Inbox"));
        assert_eq!(command, "thunderbird");
        assert!(command_args.is_empty());
    }

    #[test]
    fn test_missing_command_fails_with_status_one() {
        let error = Args::try_parse_from(["jumpto"]).unwrap_err();
        assert_eq!(parse_failure_status(&error), 1);

        let error = Args::try_parse_from(["jumpto", "-t"]).unwrap_err();
        assert_eq!(parse_failure_status(&error), 1);
    }

    #[test]
    fn test_help_and_version_succeed() {
        let error = Args::try_parse_from(["jumpto", "--help"]).unwrap_err();
        assert_eq!(parse_failure_status(&error), 0);

        let error = Args::try_parse_from(["jumpto", "-V"]).unwrap_err();
        assert_eq!(parse_failure_status(&error), 0);
    }
}
