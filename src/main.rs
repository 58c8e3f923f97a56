use clap::Parser;
use pingap_locale::cli::i18n::error_message;
use pingap_locale::cli::{Cli, CatalogSource, Commands};
use pingap_locale::AppError;
use std::process;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志（默认只显示错误，避免干扰命令输出）
    let log_level = if cli.verbose { "debug" } else { "error" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    pingap_locale::cli::ui::apply_inquire_theme();

    // 执行命令
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", error_message(&e));
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let source = CatalogSource::from_cli(&cli);
    match cli.command {
        Commands::Get(args) => pingap_locale::cli::commands::lookup::execute(args, &source),
        Commands::List(args) => pingap_locale::cli::commands::list::execute(args, &source),
        Commands::Namespaces => pingap_locale::cli::commands::list::namespaces(&source),
        Commands::Locales => pingap_locale::cli::commands::list::locales(&source),
        Commands::Check(args) => pingap_locale::cli::commands::check::execute(args, &source),
        Commands::Export(args) => pingap_locale::cli::commands::export::execute(args, &source),
        Commands::Config(cmd) => pingap_locale::cli::commands::config::execute(cmd),
        Commands::Completions { shell } => {
            pingap_locale::cli::generate_completions(shell);
            Ok(())
        }
    }
}
