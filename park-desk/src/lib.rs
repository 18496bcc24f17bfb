//! Park Desk - 停车场管理前台
//!
//! # 架构概述
//!
//! 停车场前台的领域状态，提供以下核心功能：
//!
//! - **车位** (`slots`): 48 个车位的状态机 (available / busy / booked)
//! - **视图** (`views`): 车位搜索、付款筛选与分页
//! - **弹窗** (`modal`): 车位点击 → 确认 / 取消 交互状态机
//! - **仪表盘** (`dashboard`): 占用统计、环形图、营收图表
//! - **报告** (`report`): 反馈表单草稿与提交
//! - **控制台** (`console`): 斜杠命令操作界面
//!
//! # 模块结构
//!
//! ```text
//! park-desk/src/
//! ├── core/          # 配置、前台状态根
//! ├── slots/         # 车位存储、初始布局生成
//! ├── views/         # 筛选、分页
//! ├── dashboard/     # 统计与图表几何
//! ├── console/       # 命令解析与输出
//! ├── utils/         # 日志、时间、校验
//! ├── modal.rs       # 弹窗状态机
//! └── report.rs      # 报告表单
//! ```

pub mod console;
pub mod core;
pub mod dashboard;
pub mod modal;
pub mod report;
pub mod slots;
pub mod utils;
pub mod views;

// Re-export 公共类型
pub use crate::core::{Config, DeskCommand, DeskState, Outcome, Tab};
pub use modal::{Interaction, Modal, ModalAction};
pub use report::ReportForm;
pub use slots::{SlotStore, StoreError};
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use shared::error::{ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

/// 设置环境 (dotenv, 配置, 日志)
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____             __      ____            __
   / __ \____ ______/ /__   / __ \___  _____/ /__
  / /_/ / __ `/ ___/ //_/  / / / / _ \/ ___/ //_/
 / ____/ /_/ / /  / ,<    / /_/ /  __(__  ) ,<
/_/    \__,_/_/  /_/|_|  /_____/\___/____/_/|_|
    "#
    );
}
