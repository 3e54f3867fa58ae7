//! 提交流程 - 流程层
//!
//! 核心职责：定义"一次提交"的完整流程
//!
//! 流程顺序：
//! 1. 上提交闩（单飞）
//! 2. 组装请求载荷（本地校验，失败不产生网络调用）
//! 3. 恰好调用一次处理服务
//! 4. 按结果释放提交闩（成功时销毁文件选择）

use tracing::{info, warn};

use crate::clients::ProcessingClient;
use crate::config::Config;
use crate::editor::page_editor::PageArrangement;
use crate::error::AppResult;
use crate::models::operation::QualityLevel;
use crate::models::outcome::ProcessOutcome;
use crate::services::assembler;
use crate::utils::logging::format_file_size;
use crate::workflow::controller::WorkflowController;

/// 提交流程
///
/// - 编排组装 → 提交 → 收尾
/// - 不持有工作流状态，只依赖处理客户端
pub struct SubmitFlow {
    processing: ProcessingClient,
    verbose_logging: bool,
}

impl SubmitFlow {
    /// 创建新的提交流程
    pub fn new(config: &Config) -> AppResult<Self> {
        Ok(Self {
            processing: ProcessingClient::new(config)?,
            verbose_logging: config.verbose_logging,
        })
    }

    /// 执行一次提交
    ///
    /// # 参数
    /// - `controller`: 工作流控制器（提供操作、文件和提交闩）
    /// - `quality_level`: 压缩级别（可选）
    /// - `arrangement`: 页面排列结果（可选）
    pub async fn run(
        &self,
        controller: &mut WorkflowController,
        quality_level: Option<QualityLevel>,
        arrangement: Option<PageArrangement>,
    ) -> AppResult<ProcessOutcome> {
        controller.begin_submission()?;

        let operation = controller.active_operation();
        let files = controller.selection().files().to_vec();

        let payload = match assembler::assemble(operation, files, quality_level, arrangement) {
            Ok(payload) => payload,
            Err(e) => {
                controller.finish_submission(false);
                return Err(e);
            }
        };

        if self.verbose_logging {
            info!(
                "载荷明细: endpoint={}, files={}, quality={:?}, pages={:?}, order={:?}, deleted={:?}",
                payload.endpoint,
                payload.files.len(),
                payload.quality_level,
                payload.selected_pages,
                payload.page_order,
                payload.deleted_pages,
            );
        }

        match self.processing.submit(payload).await {
            Ok(outcome) => {
                controller.finish_submission(true);
                info!(
                    "✅ 处理完成: {} ({} → {}, 压缩率 {:.1}%)",
                    outcome.file_name.as_deref().unwrap_or(&outcome.url),
                    format_file_size(outcome.original_size),
                    format_file_size(outcome.effective_compressed_size()),
                    outcome.reduction_percent()
                );
                Ok(outcome)
            }
            Err(e) => {
                controller.finish_submission(false);
                warn!("⚠️ 提交失败: {}", e);
                Err(e)
            }
        }
    }
}
