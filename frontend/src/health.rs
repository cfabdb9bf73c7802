//! 后端健康状态
//!
//! 在应用挂载时启动一次检查，结果写入信号供导航栏展示；不参与路由守卫。

use crate::config::AppConfig;
use crate::web::FetchClient;
use drowsewatch_shared::{HealthMonitor, HealthStatus};
use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use leptos::task::spawn_local;

static CLIENT: FetchClient = FetchClient;

/// 健康状态上下文
#[derive(Clone, Copy)]
pub struct HealthContext {
    status: RwSignal<HealthStatus>,
    monitor: StoredValue<HealthMonitor>,
}

impl HealthContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(HealthStatus::Pending),
            monitor: StoredValue::new(HealthMonitor::new()),
        }
    }

    pub fn status(&self) -> ReadSignal<HealthStatus> {
        self.status.read_only()
    }

    /// 启动检查（由 `HealthMonitor` 保证每个进程只执行一次）
    pub fn start(&self, config: &AppConfig) {
        let mut check = None;
        self.monitor.update_value(|monitor| {
            check = monitor.start(
                &CLIENT,
                config.api_url.clone(),
                TimeoutFuture::new(config.health_timeout_ms),
            );
        });
        let Some(check) = check else {
            return;
        };

        let status = self.status;
        spawn_local(async move {
            let result = check.await;
            match &result {
                HealthStatus::Reachable(message) => {
                    log!("[Health] Backend reachable: {}", message)
                }
                HealthStatus::Unreachable(reason) => {
                    warn!("[Health] Backend unreachable: {}", reason)
                }
                HealthStatus::Pending => {
                    log!("[Health] Check cancelled");
                    return;
                }
            }
            status.set(result);
        });
    }

    /// 取消尚未完成的检查；状态保持 `Pending`
    pub fn cancel(&self) {
        self.monitor.with_value(HealthMonitor::cancel);
    }
}

impl Default for HealthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取健康状态上下文
pub fn use_health() -> HealthContext {
    use_context::<HealthContext>().expect("HealthContext should be provided")
}
