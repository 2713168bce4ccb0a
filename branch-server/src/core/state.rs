use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// 服务器状态 - 持有所有服务的共享引用
///
/// `Clone` 只复制连接池句柄，成本极低；每个 axum handler 拿到的都是
/// 同一个池。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | SQLite 连接池 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 数据库服务
    pub db: DbService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 创建工作目录、打开连接池并应用迁移。进程生命周期内只调用一次；
    /// 关闭时由 [`crate::core::Server::run`] 负责 drain 连接池。
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = DbService::new(&config.database_path()).await?;

        Ok(Self {
            config: config.clone(),
            db,
        })
    }
}
