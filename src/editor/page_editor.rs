//! 页面排列编辑器
//!
//! 一次编辑器会话对应一次预览获取。会话打开即进入 `Loading`，
//! 预览到达后进入 `Ready`；获取失败进入终态 `Error`（不支持重试，
//! 只能关闭后重新打开）。`Ready` 之前所有选择/重排操作都被拒绝，
//! 避免对尚未到达的预览集合做重排。
//!
//! 两种模式：
//! - Split：切换页面选择，确认时输出升序的 `selected_pages`
//! - Organize：拖拽重排 + 删除标记。删除只打标记，绝不从顺序序列中
//!   移除页码；确认时顺序序列（含已删页码）与删除集合分别输出，
//!   由接收服务自行从顺序中减去删除集合。

use std::collections::BTreeSet;

use tracing::debug;

use crate::editor::reorder::shift_reorder;
use crate::error::{AppResult, EditorError};
use crate::models::preview::{PagePreview, PreviewMode};

/// 页面编辑器模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// 提取页面（对应 split 操作）
    Split,
    /// 重排/删除页面（对应 organize 操作）
    Organize,
}

impl PageMode {
    /// 获取对应的预览获取模式
    pub fn preview_mode(self) -> PreviewMode {
        match self {
            PageMode::Split => PreviewMode::ExtractPreview,
            PageMode::Organize => PreviewMode::ReorganizePreview,
        }
    }
}

/// 页面编辑器状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEditorState {
    /// 预览获取中，所有编辑操作不可用
    Loading,
    /// 可编辑
    Ready,
    /// 预览获取失败（终态，只能关闭）
    Error,
    /// 已确认（终态）
    Confirmed,
    /// 已取消（终态）
    Cancelled,
}

impl PageEditorState {
    fn name(self) -> &'static str {
        match self {
            PageEditorState::Loading => "Loading",
            PageEditorState::Ready => "Ready",
            PageEditorState::Error => "Error",
            PageEditorState::Confirmed => "Confirmed",
            PageEditorState::Cancelled => "Cancelled",
        }
    }
}

/// 页面编辑器确认后的排列结果
///
/// 空集合一律表示为 None，绝不输出空字符串
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageArrangement {
    /// 选中页（升序 CSV，Split 模式）
    pub selected_pages: Option<String>,
    /// 页面顺序（用户可见顺序的 CSV，不一定升序，Organize 模式）
    pub page_order: Option<String>,
    /// 删除页（升序 CSV，Organize 模式）
    pub deleted_pages: Option<String>,
}

/// 页面编辑器会话
///
/// 会话不会比它的编辑器活得更久：取消或确认后即为终态。
#[derive(Debug)]
pub struct PageEditorSession {
    mode: PageMode,
    state: PageEditorState,
    pages: Vec<PagePreview>,
    /// Split 模式：选中的页码集合
    selected: BTreeSet<u32>,
    /// Organize 模式：页码的排列（始终为 1..=N 的排列）
    order: Vec<u32>,
    /// Organize 模式：删除标记集合（独立于顺序序列）
    deleted: BTreeSet<u32>,
}

impl PageEditorSession {
    /// 打开一个新会话，进入 `Loading` 状态
    pub fn new(mode: PageMode) -> Self {
        Self {
            mode,
            state: PageEditorState::Loading,
            pages: Vec::new(),
            selected: BTreeSet::new(),
            order: Vec::new(),
            deleted: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> PageMode {
        self.mode
    }

    pub fn state(&self) -> PageEditorState {
        self.state
    }

    /// 预览页数量（`Ready` 之前为 0）
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    pub fn pages(&self) -> &[PagePreview] {
        &self.pages
    }

    /// 当前选中页（升序）
    pub fn selected_pages(&self) -> Vec<u32> {
        self.selected.iter().copied().collect()
    }

    /// 当前页面顺序
    pub fn page_order(&self) -> &[u32] {
        &self.order
    }

    /// 当前删除标记（升序）
    pub fn deleted_pages(&self) -> Vec<u32> {
        self.deleted.iter().copied().collect()
    }

    /// 预览加载完成，进入 `Ready`
    ///
    /// 页码由预览集合定义 1..=N 的全集；Organize 模式的初始顺序为升序
    pub fn previews_loaded(&mut self, pages: Vec<PagePreview>) {
        if self.state != PageEditorState::Loading {
            debug!("忽略迟到的预览结果 (当前状态: {})", self.state.name());
            return;
        }

        let total = pages.len() as u32;
        self.order = (1..=total).collect();
        self.pages = pages;
        self.state = PageEditorState::Ready;
    }

    /// 预览加载失败，进入终态 `Error`
    pub fn preview_failed(&mut self) {
        if self.state != PageEditorState::Loading {
            debug!("忽略迟到的预览失败 (当前状态: {})", self.state.name());
            return;
        }
        self.state = PageEditorState::Error;
    }

    /// 取消会话（任何状态下可用，终态）
    pub fn cancel(&mut self) {
        self.state = PageEditorState::Cancelled;
    }

    // ========== Split 模式操作 ==========

    /// 切换页面选中状态
    pub fn toggle_selection(&mut self, page: u32) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Split, "toggle_selection")?;
        self.ensure_in_range(page)?;

        if !self.selected.remove(&page) {
            self.selected.insert(page);
        }
        Ok(())
    }

    /// 选中全部页面
    pub fn select_all(&mut self) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Split, "select_all")?;

        self.selected = (1..=self.page_count()).collect();
        Ok(())
    }

    /// 清空选中页面
    pub fn clear_selection(&mut self) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Split, "clear_selection")?;

        self.selected.clear();
        Ok(())
    }

    // ========== Organize 模式操作 ==========

    /// 切换页面删除标记
    ///
    /// 只改动删除集合，顺序序列保持不变
    pub fn toggle_deletion(&mut self, page: u32) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Organize, "toggle_deletion")?;
        self.ensure_in_range(page)?;

        if !self.deleted.remove(&page) {
            self.deleted.insert(page);
        }
        Ok(())
    }

    /// 拖拽重排页面顺序
    ///
    /// 被删除标记的页面不能作为拖拽源（no-op）；
    /// 放置到已删除页面的槽位上是允许的
    pub fn drag_reorder(&mut self, dragged: u32, target: u32) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Organize, "drag_reorder")?;

        if self.deleted.contains(&dragged) {
            debug!("忽略对已删除页面 {} 的拖拽", dragged);
            return Ok(());
        }

        // 整体替换顺序序列，不做原地修改
        if let Some(next) = shift_reorder(&self.order, dragged, target) {
            self.order = next;
        }
        Ok(())
    }

    /// 恢复初始状态：顺序回到升序 1..=N，删除集合同时清空
    pub fn reset_order(&mut self) -> AppResult<()> {
        self.ensure_ready()?;
        self.ensure_mode(PageMode::Organize, "reset_order")?;

        self.order = (1..=self.page_count()).collect();
        self.deleted.clear();
        Ok(())
    }

    // ========== 确认 ==========

    /// 确认并输出排列结果（终态）
    ///
    /// Split：选中集合为空时本地失败；输出升序 CSV，与切换顺序无关。
    /// Organize：顺序序列为空时本地失败（删除只打标记，正常不可能发生，
    /// 但仍然检查）；输出完整顺序 CSV（含已删页码）和独立的删除 CSV。
    pub fn confirm(&mut self) -> AppResult<PageArrangement> {
        self.ensure_ready()?;

        let arrangement = match self.mode {
            PageMode::Split => {
                if self.selected.is_empty() {
                    return Err(EditorError::EmptySelection.into());
                }
                PageArrangement {
                    selected_pages: Some(join_csv(self.selected.iter())),
                    ..Default::default()
                }
            }
            PageMode::Organize => {
                if self.order.is_empty() {
                    return Err(EditorError::EmptyOrder.into());
                }
                PageArrangement {
                    page_order: Some(join_csv(self.order.iter())),
                    deleted_pages: if self.deleted.is_empty() {
                        None
                    } else {
                        Some(join_csv(self.deleted.iter()))
                    },
                    ..Default::default()
                }
            }
        };

        self.state = PageEditorState::Confirmed;
        Ok(arrangement)
    }

    // ========== 状态检查 ==========

    fn ensure_ready(&self) -> Result<(), EditorError> {
        if self.state != PageEditorState::Ready {
            return Err(EditorError::NotReady {
                state: self.state.name(),
            });
        }
        Ok(())
    }

    fn ensure_mode(&self, expected: PageMode, action: &'static str) -> Result<(), EditorError> {
        if self.mode != expected {
            return Err(EditorError::WrongMode { action });
        }
        Ok(())
    }

    fn ensure_in_range(&self, page: u32) -> Result<(), EditorError> {
        if page == 0 || page > self.page_count() {
            return Err(EditorError::PageOutOfRange {
                page,
                total: self.page_count(),
            });
        }
        Ok(())
    }
}

fn join_csv<'a>(it: impl Iterator<Item = &'a u32>) -> String {
    it.map(|n| n.to_string()).collect::<Vec<_>>().join(",")
}
