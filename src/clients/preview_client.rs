//! 预览服务客户端
//!
//! 封装所有与页面预览服务相关的调用逻辑

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::file::SelectedFile;
use crate::models::preview::{PagePreview, PreviewMode, PreviewResponse};

/// 预览服务客户端
pub struct PreviewClient {
    http: reqwest::Client,
    base_url: String,
}

impl PreviewClient {
    /// 创建新的预览客户端
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

    /// 获取单个文件的页面预览
    ///
    /// # 参数
    /// - `file`: 待预览的文件
    /// - `mode`: 预览模式，每种模式对应自己的服务路径
    ///
    /// # 返回
    /// 返回页面预览列表；页数和页码定义本次会话的 1..=N 全集
    pub async fn fetch_previews(
        &self,
        file: &SelectedFile,
        mode: PreviewMode,
    ) -> AppResult<Vec<PagePreview>> {
        let endpoint = mode.endpoint();
        let url = format!("{}{}", self.base_url, endpoint);

        debug!("获取页面预览: {} (文件: {})", endpoint, file.name);

        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.ok();
            return Err(AppError::bad_response(endpoint, status.as_u16(), message));
        }

        let preview: PreviewResponse = response
            .json()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        debug!("预览获取完成: 共 {} 页", preview.total_pages);

        Ok(preview.pages)
    }
}
