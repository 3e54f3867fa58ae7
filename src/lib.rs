//! # ChhotiPDF Client
//!
//! 文档处理服务的交互式客户端核心：选操作、选文件、排列文件或页面、
//! 一次性提交处理请求并展示结果。
//!
//! ## 架构设计
//!
//! 本系统采用严格的分层架构：
//!
//! ### ① 模型层（Models）
//! - `models/` - 操作目录、已选文件、页面预览、处理结果
//! - `Operation` - 编译期固定的五种操作及其描述符
//!
//! ### ② 能力层（Services / Editor）
//! - `services/selection` - 按操作规则校验并持有文件选择
//! - `services/assembler` - 端点表 + 请求载荷组装 + multipart 表单
//! - `editor/` - 页面/文件排列编辑器与共享的拖拽重排算法
//!
//! ### ③ 客户端层（Clients）
//! - `clients/preview_client` - 页面预览服务
//! - `clients/processing_client` - 文档处理服务（每次提交恰好一个 POST）
//!
//! ### ④ 流程层（Workflow）
//! - `workflow/controller` - 跨组件状态的唯一持有者
//!   （文件选择、编辑器会话、预览代际计数器、单飞提交闩）
//! - `workflow/submit_flow` - 流程编排（组装 → 提交 → 收尾）
//!
//! ## 并发模型
//!
//! 单线程协作式执行。唯一的挂起操作是编辑器打开时的预览获取；
//! 迟到的预览结果通过代际计数器丢弃，绝不改动已拆除的状态。
//! 提交是单飞的：一次提交在途时禁止再次触发。

pub mod app;
pub mod clients;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, RunOptions};
pub use clients::{PreviewClient, ProcessingClient};
pub use config::Config;
pub use editor::{
    shift_reorder, FileOrderSession, PageArrangement, PageEditorSession, PageEditorState, PageMode,
};
pub use error::{AppError, AppResult};
pub use models::{
    Operation, OperationDescriptor, PagePreview, PreviewMode, ProcessOutcome, QualityLevel,
    SelectedFile,
};
pub use services::{assemble, assemble_by_id, endpoint_for, FileSelection, RequestPayload};
pub use workflow::{SubmitFlow, WorkflowController};
