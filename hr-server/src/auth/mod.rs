//! 认证授权模块
//!
//! 提供 JWT 认证、角色等级授权和中间件：
//! - [`JwtService`] - JWT 令牌服务
//! - [`CurrentUser`] - 当前用户上下文
//! - [`RankTable`] - 角色等级表
//! - [`policy`] - 访问策略判定
//! - [`require_auth`] - 认证中间件
//! - [`require_min_role`] - 角色等级中间件

pub mod jwt;
pub mod middleware;
pub mod password;
pub mod policy;
pub mod rank;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_admin, require_auth, require_min_role};
pub use policy::EmployeeScope;
pub use rank::RankTable;
