//! Print URL builder
//!
//! 将环境（remote/local）、模式（standalone/integrated）与粘贴的 `key:value` 载荷
//! 转换为打印视图的 URL。所有功能均为无状态的纯函数，不涉及 I/O。

mod error;
mod services;
mod types;

pub use error::{PrintUrlError, PrintUrlResult};
pub use services::{
    build_default_url, build_url_from_payload, format_query_params, parse_payload,
    switch_environment, switch_mode, UrlBuilder, ABSENT_VALUE, CONTAINER_ID_KEY, ZONE_ID_KEY,
};
pub use types::{Environment, Mode, PayloadFields};
