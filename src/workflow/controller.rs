//! 工作流控制器 - 流程层
//!
//! 跨组件状态的唯一持有者：当前操作、文件选择、两个编辑器会话、
//! 预览代际计数器和单飞提交闩。组件之间不再通过环境广播传递
//! "操作已切换"之类的事件，全部改为对本控制器的显式调用，
//! 事件顺序因此是确定的。
//!
//! 预览获取是整个工作流中唯一的挂起操作。每次打开页面编辑器都会
//! 递增代际计数器并把当前代际交给调用方；预览结果送回时必须带上
//! 这个代际——代际不匹配或编辑器已关闭时，迟到的结果被当作 no-op
//! 丢弃，绝不改动已经拆除的状态。

use tracing::{debug, info};

use crate::editor::file_editor::FileOrderSession;
use crate::editor::page_editor::{PageEditorSession, PageMode};
use crate::error::{AppError, AppResult, EditorError, SelectionError};
use crate::models::file::SelectedFile;
use crate::models::operation::Operation;
use crate::models::preview::PagePreview;
use crate::services::selection::FileSelection;

/// 工作流控制器
pub struct WorkflowController {
    active_operation: Operation,
    selection: FileSelection,
    page_editor: Option<PageEditorSession>,
    file_editor: Option<FileOrderSession>,
    /// 预览代际计数器：只有携带当前代际的预览结果会被接受
    preview_generation: u64,
    /// 单飞提交闩：提交期间禁止再次触发
    submitting: bool,
}

impl WorkflowController {
    pub fn new(operation: Operation) -> Self {
        Self {
            active_operation: operation,
            selection: FileSelection::new(),
            page_editor: None,
            file_editor: None,
            preview_generation: 0,
            submitting: false,
        }
    }

    pub fn active_operation(&self) -> Operation {
        self.active_operation
    }

    /// 切换当前操作
    ///
    /// 无条件清空文件选择并丢弃所有打开的编辑器会话，
    /// 防止上一个操作的状态被带入下一个操作
    pub fn set_operation(&mut self, operation: Operation) {
        if operation == self.active_operation {
            return;
        }

        info!("操作切换: {} → {}", self.active_operation, operation);
        self.active_operation = operation;
        self.selection.on_operation_change();
        self.page_editor = None;
        self.file_editor = None;
    }

    // ========== 文件选择 ==========

    pub fn select_files(&mut self, candidates: Vec<SelectedFile>) -> AppResult<()> {
        self.selection.select_files(candidates, self.active_operation)
    }

    pub fn remove_file(&mut self, index: usize) -> AppResult<()> {
        self.selection.remove_file(index)
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    // ========== 页面编辑器 ==========

    /// 打开页面编辑器会话
    ///
    /// # 返回
    /// 返回本次会话的预览代际；调用方发起预览获取后，
    /// 必须把同一个代际传回 [`deliver_previews`](Self::deliver_previews)
    pub fn open_page_editor(&mut self) -> AppResult<u64> {
        let descriptor = self.active_operation.descriptor();
        if !descriptor.requires_page_arrangement {
            return Err(EditorError::ArrangementNotRequired {
                operation: descriptor.id,
            }
            .into());
        }
        if self.selection.is_empty() {
            return Err(SelectionError::NoFileChosen.into());
        }

        let mode = match self.active_operation {
            Operation::Split => PageMode::Split,
            _ => PageMode::Organize,
        };

        self.preview_generation += 1;
        self.page_editor = Some(PageEditorSession::new(mode));

        debug!(
            "页面编辑器已打开 (模式: {:?}, 代际: {})",
            mode, self.preview_generation
        );

        Ok(self.preview_generation)
    }

    /// 预览编辑器使用的文件（当前选择的第一个文件）
    pub fn preview_file(&self) -> AppResult<&SelectedFile> {
        self.selection
            .files()
            .first()
            .ok_or_else(|| AppError::from(SelectionError::NoFileChosen))
    }

    /// 把预览获取的结果送入编辑器
    ///
    /// # 参数
    /// - `generation`: 发起获取时拿到的代际
    /// - `result`: 预览结果或获取失败
    ///
    /// # 返回
    /// 结果被接受时返回 true；代际不匹配或编辑器已关闭时丢弃并返回 false
    pub fn deliver_previews(
        &mut self,
        generation: u64,
        result: AppResult<Vec<PagePreview>>,
    ) -> bool {
        if generation != self.preview_generation {
            debug!(
                "丢弃过期的预览结果 (代际 {} != 当前 {})",
                generation, self.preview_generation
            );
            return false;
        }

        let Some(session) = self.page_editor.as_mut() else {
            debug!("丢弃迟到的预览结果 (编辑器已关闭)");
            return false;
        };

        match result {
            Ok(pages) => session.previews_loaded(pages),
            Err(e) => {
                info!("⚠️ 预览获取失败: {}", e);
                session.preview_failed();
            }
        }
        true
    }

    pub fn page_editor(&self) -> Option<&PageEditorSession> {
        self.page_editor.as_ref()
    }

    pub fn page_editor_mut(&mut self) -> Option<&mut PageEditorSession> {
        self.page_editor.as_mut()
    }

    /// 关闭页面编辑器会话，之后到达的预览结果一律丢弃
    pub fn close_page_editor(&mut self) {
        self.page_editor = None;
    }

    // ========== 文件编辑器 ==========

    /// 打开文件排列编辑器会话
    pub fn open_file_editor(&mut self) -> AppResult<()> {
        let descriptor = self.active_operation.descriptor();
        if !descriptor.requires_file_arrangement {
            return Err(EditorError::ArrangementNotRequired {
                operation: descriptor.id,
            }
            .into());
        }
        if self.selection.is_empty() {
            return Err(SelectionError::NoFileChosen.into());
        }

        self.file_editor = Some(FileOrderSession::new(self.selection.len()));
        Ok(())
    }

    pub fn file_editor_mut(&mut self) -> Option<&mut FileOrderSession> {
        self.file_editor.as_mut()
    }

    /// 确认文件顺序：按当前顺序整体替换选择中的文件集
    pub fn confirm_file_order(&mut self) -> AppResult<()> {
        let session = self.file_editor.take().ok_or(EditorError::NotReady {
            state: "Closed",
        })?;

        let files = self.selection.take_files();
        let ordered = session.confirm(files)?;
        self.selection.replace_files(ordered);
        Ok(())
    }

    pub fn close_file_editor(&mut self) {
        self.file_editor = None;
    }

    // ========== 提交闩 ==========

    /// 开始一次提交
    ///
    /// 已有提交在途时失败；成功后必须配对调用
    /// [`finish_submission`](Self::finish_submission)
    pub fn begin_submission(&mut self) -> AppResult<()> {
        if self.submitting {
            return Err(EditorError::SubmissionInFlight.into());
        }
        if self.selection.is_empty() {
            return Err(SelectionError::NoFileChosen.into());
        }
        self.submitting = true;
        Ok(())
    }

    /// 结束一次提交；成功时销毁文件选择
    pub fn finish_submission(&mut self, success: bool) {
        self.submitting = false;
        if success {
            self.selection.on_operation_change();
            self.page_editor = None;
            self.file_editor = None;
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }
}
