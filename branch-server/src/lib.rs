//! Branch Server - 餐厅门店订单与支付后端
//!
//! # 架构概述
//!
//! 本模块是门店后端的主入口，提供以下核心功能：
//!
//! - **订单引擎** (`orders`): 订单生命周期、支付、桌台占用，全部以数据库
//!   事务为边界
//! - **数据库** (`db`): SQLite 连接池与仓储层
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! branch-server/src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── orders/        # 订单生命周期引擎与厨房工单桥
//! ├── db/            # 连接池、迁移、仓储
//! └── utils/         # 错误映射、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::db::DbService;
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};
