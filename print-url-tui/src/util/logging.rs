//! 文件日志初始化

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "print-url";
const LOG_FILE: &str = "print-url.log";

/// 初始化日志，`log` 宏的记录经 tracing-log 桥接到同一个订阅者
///
/// 找不到缓存目录或订阅者已安装时返回 `None`，程序照常运行，只是没有日志。
pub fn init_logging() -> Option<WorkerGuard> {
    let dir = dirs::cache_dir()?.join(LOG_DIR);
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(guard)
}
