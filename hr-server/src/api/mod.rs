//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`auth`] - 认证相关接口 (注册/登录/当前用户)
//! - [`employees`] - 员工管理接口 (含汇报树查询)
//! - [`departments`] - 部门管理接口 (仅管理员)
//! - [`positions`] - 职位管理接口 (仅管理员)
//! - [`attendance`] - 考勤记录接口
//! - [`salaries`] - 薪资记录接口
//! - [`notices`] - 通知管理接口
//! - [`stats`] - 工作台统计接口

pub mod attendance;
pub mod auth;
pub mod departments;
pub mod employees;
pub mod health;
pub mod notices;
pub mod positions;
pub mod salaries;
pub mod stats;
