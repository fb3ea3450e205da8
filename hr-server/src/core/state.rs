use std::sync::Arc;

use sqlx::SqlitePool;

use crate::auth::{JwtService, RankTable};
use crate::core::Config;
use crate::db::{DbService, bootstrap};
use crate::utils::{AppError, AppResult};

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是请求处理的核心数据结构。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | pool | SqlitePool | SQLite 连接池 |
/// | jwt_service | Arc<JwtService> | JWT 认证服务 |
/// | rank_table | Arc<RankTable> | 角色等级表 (启动时注入，不可变) |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// SQLite 连接池
    pub pool: SqlitePool,
    /// JWT 认证服务 (Arc 共享所有权)
    pub jwt_service: Arc<JwtService>,
    /// 角色等级表 - 授权判定的唯一来源
    pub rank_table: Arc<RankTable>,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(
        config: Config,
        pool: SqlitePool,
        jwt_service: Arc<JwtService>,
        rank_table: Arc<RankTable>,
    ) -> Self {
        Self {
            config,
            pool,
            jwt_service,
            rank_table,
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/hr.db, 建库 + 迁移)
    /// 3. 种子数据 (默认部门/职位, 初始管理员)
    /// 4. 服务 (JWT, 角色等级表)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        // 0. Ensure work_dir structure exists
        config
            .ensure_work_dir_structure()
            .map_err(|e| AppError::internal(format!("Failed to create work directory: {e}")))?;

        // 1. Initialize DB
        let db_path = config.database_dir().join("hr.db");
        let db_service = DbService::new(&db_path.to_string_lossy()).await?;
        let pool = db_service.pool;

        // 2. Seed defaults (idempotent)
        bootstrap::ensure_seed_data(&pool, &config.admin_initial_password).await?;

        // 3. Services
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let rank_table = Arc::new(RankTable::default());

        Ok(Self::new(config.clone(), pool, jwt_service, rank_table))
    }

    /// 获取 JWT 服务
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
