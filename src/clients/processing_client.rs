//! 处理服务客户端
//!
//! 封装与文档处理服务的提交调用。每次 `submit` 恰好发出一次 POST，
//! 不做合并、不做自动重试；失败作为单个不透明错误返回给调用方。

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::outcome::ProcessOutcome;
use crate::services::assembler::RequestPayload;

/// 处理服务客户端
pub struct ProcessingClient {
    http: reqwest::Client,
    base_url: String,
}

impl ProcessingClient {
    /// 创建新的处理客户端
    pub fn new(config: &Config) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(AppError::client_build_failed)?;

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    /// 提交一份请求载荷
    ///
    /// # 参数
    /// - `payload`: 组装完成的请求载荷（端点已由组装阶段确定）
    ///
    /// # 返回
    /// 返回处理结果描述；提交是全有或全无的，没有部分成功
    pub async fn submit(&self, payload: RequestPayload) -> AppResult<ProcessOutcome> {
        let endpoint = payload.endpoint;
        let url = format!("{}{}", self.base_url, endpoint);

        info!(
            "📤 提交处理请求: {} (操作: {}, 文件: {})",
            endpoint,
            payload.operation,
            payload.files.len()
        );

        let form = payload.into_multipart();

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from));
            return Err(AppError::bad_response(endpoint, status.as_u16(), message));
        }

        let outcome: ProcessOutcome = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        debug!("处理结果: url={}, usedOriginal={}", outcome.url, outcome.used_original);

        Ok(outcome)
    }
}
