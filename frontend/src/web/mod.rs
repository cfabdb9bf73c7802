//! 原生 Web API 封装模块
//!
//! 此模块提供对浏览器原生 API 的轻量级封装，
//! 并为共享核心中的抽象（`KeyValueStore`、`HttpClient`）提供浏览器实现。

mod http;
pub mod router;
mod storage;

pub use http::FetchClient;
pub use storage::LocalStorage;
