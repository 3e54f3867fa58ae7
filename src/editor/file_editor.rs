//! 文件排列编辑器
//!
//! 合并操作前对已校验文件集的重排。顺序是文件索引 0..N-1 的排列，
//! 没有删除概念；确认时按当前顺序输出具体的文件对象而不是索引。

use crate::editor::reorder::shift_reorder;
use crate::error::{AppResult, EditorError};
use crate::models::file::SelectedFile;

/// 文件顺序编辑会话
#[derive(Debug)]
pub struct FileOrderSession {
    /// 0..N-1 的排列，索引指向已校验的文件集
    order: Vec<usize>,
}

impl FileOrderSession {
    /// 为 N 个文件创建会话，初始顺序为升序
    pub fn new(file_count: usize) -> Self {
        Self {
            order: (0..file_count).collect(),
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn file_count(&self) -> usize {
        self.order.len()
    }

    /// 拖拽重排文件顺序（与页面编辑器共用同一算法）
    pub fn drag_reorder(&mut self, dragged: usize, target: usize) {
        if let Some(next) = shift_reorder(&self.order, dragged, target) {
            self.order = next;
        }
    }

    /// 恢复升序初始顺序
    pub fn reset_order(&mut self) {
        self.order = (0..self.order.len()).collect();
    }

    /// 按当前顺序重排文件集并输出具体文件
    pub fn confirm(&self, files: Vec<SelectedFile>) -> AppResult<Vec<SelectedFile>> {
        if files.len() != self.order.len() {
            return Err(EditorError::FileCountMismatch {
                expected: self.order.len(),
                actual: files.len(),
            }
            .into());
        }

        let mut slots: Vec<Option<SelectedFile>> = files.into_iter().map(Some).collect();
        let ordered = self
            .order
            .iter()
            .map(|&i| slots[i].take().expect("顺序必须是 0..N-1 的排列"))
            .collect();
        Ok(ordered)
    }
}
