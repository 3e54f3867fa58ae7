//! 页面预览数据结构
//!
//! 由预览服务返回，页码从 1 开始；一次会话内获取一次，之后不可变。

use serde::{Deserialize, Serialize};

/// 预览获取模式，每种模式对应自己的服务路径
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// 提取页面前的预览
    ExtractPreview,
    /// 重排页面前的预览
    ReorganizePreview,
}

impl PreviewMode {
    /// 获取对应的服务路径
    pub fn endpoint(self) -> &'static str {
        match self {
            PreviewMode::ExtractPreview => "/split/pdf/preview",
            PreviewMode::ReorganizePreview => "/organize/pdf/preview",
        }
    }
}

/// 单个页面的预览信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePreview {
    /// 页码（从 1 开始）
    #[serde(rename = "page_number")]
    pub number: u32,
    /// 页面宽度
    pub width: u32,
    /// 页面高度
    pub height: u32,
    /// 缩略图引用（data URI 或 URL）
    #[serde(rename = "preview_image", default)]
    pub thumbnail: Option<String>,
}

/// 预览服务的完整响应
#[derive(Debug, Clone, Deserialize)]
pub struct PreviewResponse {
    pub total_pages: u32,
    pub pages: Vec<PagePreview>,
}
