use park_desk::{DeskState, console, print_banner, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment()?;

    // 打印横幅
    print_banner();

    tracing::info!(
        environment = %config.environment,
        seed = ?config.seed,
        "Park desk starting..."
    );

    // 2. 初始化前台状态
    let mut desk = DeskState::new(&config);
    println!("{}", console::output::help());

    // 3. 控制台循环 (直到 /quit 或 EOF)
    let stdin = std::io::stdin();
    console::run(&mut desk, stdin.lock(), std::io::stdout())?;

    Ok(())
}
