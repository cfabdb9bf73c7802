//! 后端接口（登录/注册组件使用）
//!
//! 认证协议本身由后端负责，这里只消费其 JSON 契约。

use crate::web::FetchClient;
use drowsewatch_shared::{
    API_LOGIN_PATH, API_REGISTER_PATH, HttpClient, HttpRequest, Session, endpoint,
};
use serde::Serialize;

#[derive(Serialize)]
struct Credentials<'a> {
    username: &'a str,
    password: &'a str,
}

async fn post_credentials(
    url: &str,
    username: &str,
    password: &str,
) -> Result<String, String> {
    let body = serde_json::to_string(&Credentials { username, password })
        .map_err(|e| e.to_string())?;

    let res = FetchClient
        .send(HttpRequest::post(url).with_json_body(body))
        .await
        .map_err(|e| e.to_string())?;

    if !res.ok() {
        return Err(format!("HTTP {}", res.status));
    }
    Ok(res.body)
}

/// 登录：成功时返回后端签发的会话 `{username, role}`
pub async fn login(base_url: &str, username: &str, password: &str) -> Result<Session, String> {
    let url = endpoint(base_url, API_LOGIN_PATH);
    let body = post_credentials(&url, username, password).await?;
    serde_json::from_str::<Session>(&body).map_err(|e| e.to_string())
}

/// 注册新用户
pub async fn register(base_url: &str, username: &str, password: &str) -> Result<(), String> {
    let url = endpoint(base_url, API_REGISTER_PATH);
    post_credentials(&url, username, password).await.map(|_| ())
}
