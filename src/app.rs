//! 应用入口 - 编排层
//!
//! 一个最小的命令行前端：从磁盘读取文件，驱动一次完整的工作流
//! （校验 → 可选的排列步骤 → 组装 → 提交），打印处理结果。
//! 页面选择/顺序/删除通过命令行参数给出（非交互场景）。

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::clients::PreviewClient;
use crate::config::Config;
use crate::editor::page_editor::{PageArrangement, PageEditorSession, PageEditorState};
use crate::models::file::SelectedFile;
use crate::models::operation::{Operation, QualityLevel};
use crate::utils::logging;
use crate::workflow::controller::WorkflowController;
use crate::workflow::submit_flow::SubmitFlow;

/// 命令行运行参数
#[derive(Debug)]
pub struct RunOptions {
    pub operation: Operation,
    pub paths: Vec<PathBuf>,
    pub quality_level: Option<QualityLevel>,
    /// 提取的页码（split）
    pub pages: Option<Vec<u32>>,
    /// 目标页面顺序（organize）
    pub order: Option<Vec<u32>>,
    /// 删除的页码（organize）
    pub deleted: Option<Vec<u32>>,
}

impl RunOptions {
    /// 从命令行参数解析
    ///
    /// 用法: chhotipdf-client <operation> <file...> [--quality <level>]
    ///       [--pages <csv>] [--order <csv>] [--deleted <csv>]
    pub fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let op_id = args.next().context("缺少操作参数。可用操作: compress, merge, split, organize, compress-image")?;
        let operation = Operation::from_id(&op_id)
            .with_context(|| format!("未知操作: {}。可用操作: compress, merge, split, organize, compress-image", op_id))?;

        let mut options = RunOptions {
            operation,
            paths: Vec::new(),
            quality_level: None,
            pages: None,
            order: None,
            deleted: None,
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quality" => {
                    let value = args.next().context("--quality 缺少取值")?;
                    options.quality_level = Some(
                        QualityLevel::from_id(&value)
                            .with_context(|| format!("未知压缩级别: {}。可用: light, medium, heavy", value))?,
                    );
                }
                "--pages" => {
                    let value = args.next().context("--pages 缺少取值")?;
                    options.pages = Some(parse_csv(&value)?);
                }
                "--order" => {
                    let value = args.next().context("--order 缺少取值")?;
                    options.order = Some(parse_csv(&value)?);
                }
                "--deleted" => {
                    let value = args.next().context("--deleted 缺少取值")?;
                    options.deleted = Some(parse_csv(&value)?);
                }
                _ => options.paths.push(PathBuf::from(arg)),
            }
        }

        if options.paths.is_empty() {
            bail!("请至少给出一个文件路径");
        }

        Ok(options)
    }
}

fn parse_csv(value: &str) -> Result<Vec<u32>> {
    value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            s.trim()
                .parse::<u32>()
                .with_context(|| format!("无法解析页码: {}", s))
        })
        .collect()
}

/// 应用主结构
pub struct App {
    config: Config,
    preview: PreviewClient,
    flow: SubmitFlow,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config.api_base_url);

        let preview = PreviewClient::new(&config)?;
        let flow = SubmitFlow::new(&config)?;

        Ok(Self {
            config,
            preview,
            flow,
        })
    }

    /// 运行一次完整的工作流
    pub async fn run(&self, options: RunOptions) -> Result<()> {
        let mut controller = WorkflowController::new(options.operation);

        // 从磁盘读取候选文件
        let mut candidates = Vec::new();
        for path in &options.paths {
            candidates.push(read_file(path)?);
        }
        controller.select_files(candidates)?;

        info!(
            "✓ 已校验 {} 个文件 (操作: {})",
            controller.selection().len(),
            options.operation
        );

        let descriptor = options.operation.descriptor();

        // 合并操作：文件顺序即命令行给出的顺序，仍走一遍编辑器确认
        if descriptor.requires_file_arrangement {
            controller.open_file_editor()?;
            controller.confirm_file_order()?;
        }

        // 页面类操作：打开编辑器、获取预览、套用命令行给出的排列
        let arrangement = if descriptor.requires_page_arrangement {
            Some(self.arrange_pages(&mut controller, &options).await?)
        } else {
            None
        };

        let outcome = self
            .flow
            .run(&mut controller, options.quality_level, arrangement)
            .await?;

        logging::log_outcome(&outcome);
        info!("完整下载地址: {}{}", self.config.api_base_url, outcome.url);

        Ok(())
    }

    /// 打开页面编辑器并套用命令行给出的排列
    async fn arrange_pages(
        &self,
        controller: &mut WorkflowController,
        options: &RunOptions,
    ) -> Result<PageArrangement> {
        let generation = controller.open_page_editor()?;

        let file = controller.preview_file()?.clone();
        let mode = controller
            .page_editor()
            .expect("编辑器刚刚打开")
            .mode()
            .preview_mode();

        let result = self.preview.fetch_previews(&file, mode).await;
        controller.deliver_previews(generation, result);

        let session = controller
            .page_editor_mut()
            .context("编辑器会话已丢失")?;

        if session.state() == PageEditorState::Error {
            bail!("预览获取失败，请检查服务是否可用后重试");
        }

        info!("✓ 预览获取完成: 共 {} 页", session.page_count());

        match options.operation {
            Operation::Split => {
                match &options.pages {
                    Some(pages) => {
                        for &n in pages {
                            session.toggle_selection(n)?;
                        }
                    }
                    // 未指定页码时提取全部页面
                    None => session.select_all()?,
                }
            }
            _ => {
                if let Some(order) = &options.order {
                    apply_target_order(session, order)?;
                }
                if let Some(deleted) = &options.deleted {
                    for &n in deleted {
                        session.toggle_deletion(n)?;
                    }
                }
            }
        }

        Ok(session.confirm()?)
    }
}

/// 通过连续的拖拽重排把顺序调整为目标序列
fn apply_target_order(session: &mut PageEditorSession, target: &[u32]) -> Result<()> {
    for i in 0..target.len() {
        let current = session.page_order().to_vec();
        if i >= current.len() {
            bail!("目标顺序长度超出页数: {} > {}", target.len(), current.len());
        }
        if current[i] != target[i] {
            session.drag_reorder(target[i], current[i])?;
        }
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<SelectedFile> {
    let bytes =
        std::fs::read(path).with_context(|| format!("读取文件失败: {}", path.display()))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .with_context(|| format!("无效的文件路径: {}", path.display()))?;
    Ok(SelectedFile::new(name, bytes))
}
