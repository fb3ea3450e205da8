//! HR Server - 人力资源管理系统服务端
//!
//! # 架构概述
//!
//! 本模块是 HR Server 的主入口，提供以下核心功能：
//!
//! - **组织架构** (`db/repository`): 员工/部门/职位 CRUD 与汇报树约束
//! - **认证** (`auth`): JWT + Argon2 认证，角色等级授权
//! - **账号同步** (`db/repository/employee`): 员工角色变更事务性同步到账号
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! hr-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── auth/          # JWT 认证、角色等级、访问策略
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (连接、迁移、仓储)
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use auth::{CurrentUser, JwtService, RankTable};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}
