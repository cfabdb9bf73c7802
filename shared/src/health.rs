//! 后端可达性检查
//!
//! 一次性、尽力而为的检查：结果只作为导航栏中的提示文字，从不阻塞导航。

use std::future::Future;
use std::pin::pin;

use futures::future::{self, AbortHandle, Abortable, Either};
use serde::Deserialize;
use serde_json::Value;

use crate::error::HttpError;
use crate::request::{HttpClient, HttpRequest, HttpResponse};
use crate::{API_HEALTH_PATH, endpoint};

pub const PENDING_MESSAGE: &str = "Checking server...";
pub const READY_MESSAGE: &str = "System ready";
pub const UNREACHABLE_MESSAGE: &str = "Cannot reach server";

/// 后端可达性状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HealthStatus {
    /// 检查尚未完成（或已被取消）
    #[default]
    Pending,
    /// 可达，携带展示给用户的消息
    Reachable(String),
    /// 不可达，携带原因（仅用于日志）
    Unreachable(String),
}

impl HealthStatus {
    /// 展示用文字
    pub fn label(&self) -> &str {
        match self {
            HealthStatus::Pending => PENDING_MESSAGE,
            HealthStatus::Reachable(message) => message,
            HealthStatus::Unreachable(_) => UNREACHABLE_MESSAGE,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, HealthStatus::Pending)
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, HealthStatus::Reachable(_))
    }
}

/// 根路径响应体：`{"message": ...}`，`message` 可选
#[derive(Debug, Deserialize)]
struct RootResponse {
    #[serde(default)]
    message: Option<Value>,
}

/// 把 `message` 字段转成展示文字
///
/// 非空字符串原样使用；非零数字与 `true` 取其文本形式；
/// `null`、`false`、`0`、空串、数组和对象都回落到默认文字。
fn message_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(text),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}

fn reachable_message(resp: &HttpResponse) -> String {
    resp.json::<RootResponse>()
        .ok()
        .and_then(|resp| resp.message)
        .and_then(message_text)
        .unwrap_or_else(|| READY_MESSAGE.to_string())
}

/// 对后端根路径发起一次 GET 检查
///
/// 非 2xx 与传输错误都视为不可达。
pub async fn check<C: HttpClient + ?Sized>(client: &C, base_url: &str) -> HealthStatus {
    let url = endpoint(base_url, API_HEALTH_PATH);
    match client.send(HttpRequest::get(&url)).await {
        Ok(resp) if resp.ok() => HealthStatus::Reachable(reachable_message(&resp)),
        Ok(resp) => HealthStatus::Unreachable(format!("HTTP {}", resp.status)),
        Err(e) => HealthStatus::Unreachable(e.to_string()),
    }
}

/// 带超时的检查
///
/// `timeout` 先完成时结果为不可达。由调用方提供计时器，
/// 浏览器中为 `setTimeout`，测试中为 tokio 计时器。
pub async fn check_with_timeout<C, T>(client: &C, base_url: &str, timeout: T) -> HealthStatus
where
    C: HttpClient + ?Sized,
    T: Future<Output = ()>,
{
    let check = pin!(check(client, base_url));
    let timeout = pin!(timeout);

    match future::select(check, timeout).await {
        Either::Left((status, _)) => status,
        Either::Right(((), _)) => HealthStatus::Unreachable(HttpError::Timeout.to_string()),
    }
}

// =========================================================
// HealthMonitor
// =========================================================

/// 一次性检查的持有者
///
/// 每个进程只启动一次；启动后可随时取消，被取消的检查结果为 `Pending`。
#[derive(Debug, Default)]
pub struct HealthMonitor {
    abort: Option<AbortHandle>,
}

impl HealthMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_started(&self) -> bool {
        self.abort.is_some()
    }

    /// 启动检查，返回待驱动的 future
    ///
    /// 已启动过则返回 `None`，不会发出第二个请求。
    /// 返回的 future 不借用 `self`，可交给任意执行器。
    pub fn start<'a, C, T>(
        &mut self,
        client: &'a C,
        base_url: String,
        timeout: T,
    ) -> Option<impl Future<Output = HealthStatus> + use<'a, C, T>>
    where
        C: HttpClient + ?Sized,
        T: Future<Output = ()> + 'a,
    {
        if self.abort.is_some() {
            return None;
        }

        let (handle, registration) = AbortHandle::new_pair();
        self.abort = Some(handle);

        Some(async move {
            let check = check_with_timeout(client, &base_url, timeout);
            Abortable::new(check, registration)
                .await
                .unwrap_or(HealthStatus::Pending)
        })
    }

    /// 取消进行中的检查；未启动或已结束时无操作
    pub fn cancel(&self) {
        if let Some(handle) = &self.abort {
            handle.abort();
        }
    }
}
