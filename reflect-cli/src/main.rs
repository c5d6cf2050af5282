use clap::Parser;
use reflect_cli::project_info::get_version_string;
use reflect_cli::{Cli, CliApp, Commands, run_init_config, setup_logging};
use tracing::{debug, error};

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);
    debug!("{}", get_version_string());

    // `init-config` 命令是特例，它不需要预先加载配置
    if let Commands::InitConfig { force } = cli.command {
        if let Err(e) = run_init_config(cli.config.as_deref(), force) {
            error!("❌ 初始化配置失败: {:#}", e);
            std::process::exit(1);
        }
        return;
    }

    let app = match CliApp::new(cli.config.as_deref()) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 应用初始化失败: {:#}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = app.run(cli.command) {
        error!("❌ 操作失败: {:#}", e);
        std::process::exit(1);
    }
}
