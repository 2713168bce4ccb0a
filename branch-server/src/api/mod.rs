//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`branches`] - 门店浏览接口 (只读)
//! - [`menus`] - 菜单浏览接口 (只读)
//! - [`tables`] - 桌台状态接口 (只读)
//! - [`orders`] - 订单生命周期接口
//! - [`kitchen`] - 厨房工单 (KDS) 接口

pub mod branches;
pub mod health;
pub mod kitchen;
pub mod menus;
pub mod orders;
pub mod tables;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
