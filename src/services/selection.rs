//! 文件选择服务 - 业务能力层
//!
//! 持有并校验当前操作下用户选择的文件集。文件集整体替换，
//! 绝不原地修改；切换操作时无条件清空，防止对操作 A 有效的文件
//! 被悄悄带入操作 B。

use tracing::{debug, warn};

use crate::error::{AppResult, SelectionError};
use crate::models::file::SelectedFile;
use crate::models::operation::Operation;

/// 文件选择服务
///
/// 职责：
/// - 按操作描述符过滤候选文件的扩展名
/// - 独占持有已校验的文件集
/// - 操作切换时清空选择
#[derive(Debug, Default)]
pub struct FileSelection {
    files: Vec<SelectedFile>,
}

impl FileSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 校验并接收候选文件
    ///
    /// # 参数
    /// - `candidates`: 用户选取或拖入的候选文件
    /// - `operation`: 当前激活的操作
    ///
    /// # 返回
    /// 没有任何候选文件通过扩展名校验时返回错误（错误信息包含允许的扩展名）
    pub fn select_files(
        &mut self,
        candidates: Vec<SelectedFile>,
        operation: Operation,
    ) -> AppResult<()> {
        let descriptor = operation.descriptor();

        let mut valid: Vec<SelectedFile> = candidates
            .into_iter()
            .filter(|file| match file.extension() {
                Some(ext) => descriptor.allowed_extensions.contains(&ext.as_str()),
                None => false,
            })
            .collect();

        if valid.is_empty() {
            return Err(SelectionError::NoValidFile {
                allowed: descriptor.allowed_extensions,
            }
            .into());
        }

        // 单文件操作收到多个有效候选时截断到第一个（沿用线上行为，不报错）
        if !descriptor.accepts_multiple && valid.len() > 1 {
            warn!(
                "操作 {} 只接受单个文件，已截断 {} 个候选到第一个: {}",
                descriptor.id,
                valid.len(),
                valid[0].name
            );
            valid.truncate(1);
        }

        debug!("已选择 {} 个文件 (操作: {})", valid.len(), descriptor.id);

        // 整体替换，不原地追加
        self.files = valid;
        Ok(())
    }

    /// 移除一个文件，无其他副作用
    pub fn remove_file(&mut self, index: usize) -> AppResult<()> {
        if index >= self.files.len() {
            return Err(SelectionError::IndexOutOfRange {
                index,
                len: self.files.len(),
            }
            .into());
        }
        self.files.remove(index);
        Ok(())
    }

    /// 操作切换时无条件清空选择
    pub fn on_operation_change(&mut self) {
        self.files.clear();
    }

    pub fn files(&self) -> &[SelectedFile] {
        &self.files
    }

    /// 取走全部文件（选择随之清空）
    pub fn take_files(&mut self) -> Vec<SelectedFile> {
        std::mem::take(&mut self.files)
    }

    /// 整体放回一组文件（用于文件排列编辑器确认后的重排结果）
    pub fn replace_files(&mut self, files: Vec<SelectedFile>) {
        self.files = files;
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, vec![0u8; 8])
    }

    #[test]
    fn test_filters_by_extension() {
        let mut selection = FileSelection::new();
        selection
            .select_files(
                vec![pdf("a.pdf"), pdf("b.txt"), pdf("c.PDF")],
                Operation::Merge,
            )
            .unwrap();

        let names: Vec<&str> = selection.files().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.PDF"]);
    }

    #[test]
    fn test_rejects_when_nothing_valid() {
        let mut selection = FileSelection::new();
        let err = selection
            .select_files(vec![pdf("a.txt"), pdf("b.docx")], Operation::Compress)
            .unwrap_err();

        match err {
            AppError::Selection(SelectionError::NoValidFile { allowed }) => {
                assert!(allowed.contains(&".pdf"));
            }
            other => panic!("预期 NoValidFile，实际: {:?}", other),
        }
        assert!(selection.is_empty());
    }

    #[test]
    fn test_single_file_operation_truncates_to_first_valid() {
        let mut selection = FileSelection::new();
        selection
            .select_files(
                vec![pdf("x.txt"), pdf("first.pdf"), pdf("second.pdf")],
                Operation::Compress,
            )
            .unwrap();

        assert_eq!(selection.len(), 1);
        assert_eq!(selection.files()[0].name, "first.pdf");
    }

    #[test]
    fn test_image_extensions_for_compress_image() {
        let mut selection = FileSelection::new();
        selection
            .select_files(
                vec![pdf("photo.JPG"), pdf("scan.png"), pdf("doc.pdf")],
                Operation::CompressImage,
            )
            .unwrap();

        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_operation_change_clears_selection() {
        let mut selection = FileSelection::new();
        selection
            .select_files(vec![pdf("a.pdf")], Operation::Compress)
            .unwrap();
        assert_eq!(selection.len(), 1);

        selection.on_operation_change();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_remove_file() {
        let mut selection = FileSelection::new();
        selection
            .select_files(vec![pdf("a.pdf"), pdf("b.pdf")], Operation::Merge)
            .unwrap();

        selection.remove_file(0).unwrap();
        assert_eq!(selection.files()[0].name, "b.pdf");
        assert!(selection.remove_file(5).is_err());
    }
}
