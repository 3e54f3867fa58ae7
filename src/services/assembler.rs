//! 请求载荷组装 - 业务能力层
//!
//! 把操作、文件、可选的压缩级别和排列结果合并成一份可上线的请求载荷。
//! 端点表是封闭的五元映射；单文件与多文件使用不同的表单字段名，
//! 接收服务按字段名分发，这个结构差异必须保留。

use reqwest::multipart::{Form, Part};

use crate::editor::page_editor::PageArrangement;
use crate::error::{AppResult, PayloadError, SelectionError};
use crate::models::file::SelectedFile;
use crate::models::operation::{Operation, QualityLevel};

/// 操作 → 服务路径映射（封闭表，恰好五项）
pub fn endpoint_for(operation: Operation) -> &'static str {
    match operation {
        Operation::Compress => "/compress/pdf",
        Operation::Merge => "/merge/pdf",
        Operation::Split => "/split/pdf/pages",
        Operation::Organize => "/organize/pdf/pages",
        Operation::CompressImage => "/compress/image",
    }
}

/// 组装完成、可直接上线的请求载荷
#[derive(Debug)]
pub struct RequestPayload {
    pub operation: Operation,
    pub endpoint: &'static str,
    /// 已按用户最终顺序排列的文件
    pub files: Vec<SelectedFile>,
    pub quality_level: Option<QualityLevel>,
    /// 选中页（升序 CSV）
    pub selected_pages: Option<String>,
    /// 页面顺序（用户可见顺序的 CSV）
    pub page_order: Option<String>,
    /// 删除页（升序 CSV）
    pub deleted_pages: Option<String>,
    /// 建议的输出文件名（仅 merge/split/organize）
    pub suggested_file_name: Option<String>,
}

impl RequestPayload {
    /// 文件对应的表单字段
    ///
    /// 恰好一个文件时用单数字段 `file`，多个文件时每个都用复数字段 `files`。
    /// 接收服务按字段名分发，单/复数区分不是装饰性的。
    pub fn file_parts(&self) -> Vec<(&'static str, &SelectedFile)> {
        if self.files.len() == 1 {
            vec![("file", &self.files[0])]
        } else {
            self.files.iter().map(|f| ("files", f)).collect()
        }
    }

    /// 转换成 multipart 表单
    ///
    /// 缺席的可选字段一律不出现在表单中，绝不发送空字符串
    pub fn into_multipart(self) -> Form {
        let mut form = Form::new();

        let singular = self.files.len() == 1;
        for file in self.files {
            let field = if singular { "file" } else { "files" };
            let part = Part::bytes(file.bytes).file_name(file.name);
            form = form.part(field, part);
        }

        if let Some(level) = self.quality_level {
            form = form.text("compression_level", level.id());
        }
        if let Some(pages) = self.selected_pages {
            form = form.text("selected_pages", pages);
        }
        if let Some(order) = self.page_order {
            form = form.text("page_order", order);
        }
        if let Some(deleted) = self.deleted_pages {
            form = form.text("deleted_pages", deleted);
        }

        form
    }
}

/// 组装请求载荷
///
/// # 参数
/// - `operation`: 已解析的操作
/// - `files`: 已校验（且已按用户顺序排列）的文件集
/// - `quality_level`: 压缩级别（仅支持压缩级别的操作会携带）
/// - `arrangement`: 页面排列结果（仅页面类操作会携带）
pub fn assemble(
    operation: Operation,
    files: Vec<SelectedFile>,
    quality_level: Option<QualityLevel>,
    arrangement: Option<PageArrangement>,
) -> AppResult<RequestPayload> {
    if files.is_empty() {
        return Err(SelectionError::NoFileChosen.into());
    }

    let descriptor = operation.descriptor();

    let quality_level = if descriptor.supports_quality_level {
        quality_level
    } else {
        None
    };

    let arrangement = arrangement.unwrap_or_default();

    Ok(RequestPayload {
        operation,
        endpoint: endpoint_for(operation),
        suggested_file_name: suggested_file_name(operation, &files),
        files,
        quality_level,
        selected_pages: non_empty(arrangement.selected_pages),
        page_order: non_empty(arrangement.page_order),
        deleted_pages: non_empty(arrangement.deleted_pages),
    })
}

/// 按线上 ID 组装请求载荷
///
/// ID 不在端点表中是程序不变量被破坏，必须在任何网络调用之前中止
pub fn assemble_by_id(
    operation_id: &str,
    files: Vec<SelectedFile>,
    quality_level: Option<QualityLevel>,
    arrangement: Option<PageArrangement>,
) -> AppResult<RequestPayload> {
    let operation = Operation::from_id(operation_id).ok_or_else(|| PayloadError::UnknownOperation {
        id: operation_id.to_string(),
    })?;
    assemble(operation, files, quality_level, arrangement)
}

/// 多步操作（merge/split/organize）的建议输出文件名：
/// 固定前缀 + 第一个输入文件去扩展名的基础名 + .pdf
fn suggested_file_name(operation: Operation, files: &[SelectedFile]) -> Option<String> {
    match operation {
        Operation::Merge | Operation::Split | Operation::Organize => files
            .first()
            .map(|f| format!("chhotipdf-{}.pdf", f.base_name())),
        _ => None,
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn pdf(name: &str) -> SelectedFile {
        SelectedFile::new(name, vec![0u8; 8])
    }

    #[test]
    fn test_endpoint_table() {
        assert_eq!(endpoint_for(Operation::Compress), "/compress/pdf");
        assert_eq!(endpoint_for(Operation::Merge), "/merge/pdf");
        assert_eq!(endpoint_for(Operation::Split), "/split/pdf/pages");
        assert_eq!(endpoint_for(Operation::Organize), "/organize/pdf/pages");
        assert_eq!(endpoint_for(Operation::CompressImage), "/compress/image");
    }

    #[test]
    fn test_unknown_operation_id_aborts() {
        let err = assemble_by_id("rotate", vec![pdf("a.pdf")], None, None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Payload(PayloadError::UnknownOperation { .. })
        ));
    }

    #[test]
    fn test_single_file_uses_singular_field() {
        // 即使操作允许多文件，单文件也必须走单数字段
        let payload = assemble(Operation::Merge, vec![pdf("only.pdf")], None, None).unwrap();
        let parts = payload.file_parts();
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].0, "file");
    }

    #[test]
    fn test_multiple_files_use_repeated_field() {
        let payload = assemble(
            Operation::Merge,
            vec![pdf("a.pdf"), pdf("b.pdf"), pdf("c.pdf")],
            None,
            None,
        )
        .unwrap();
        let parts = payload.file_parts();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|(field, _)| *field == "files"));
    }

    #[test]
    fn test_quality_dropped_when_unsupported() {
        let payload = assemble(
            Operation::Merge,
            vec![pdf("a.pdf"), pdf("b.pdf")],
            Some(QualityLevel::Heavy),
            None,
        )
        .unwrap();
        assert_eq!(payload.quality_level, None);

        let payload = assemble(
            Operation::Compress,
            vec![pdf("a.pdf")],
            Some(QualityLevel::Heavy),
            None,
        )
        .unwrap();
        assert_eq!(payload.quality_level, Some(QualityLevel::Heavy));
    }

    #[test]
    fn test_empty_csv_is_normalized_to_none() {
        let arrangement = PageArrangement {
            selected_pages: None,
            page_order: Some("2,1".to_string()),
            deleted_pages: Some(String::new()),
        };
        let payload = assemble(
            Operation::Organize,
            vec![pdf("doc.pdf")],
            None,
            Some(arrangement),
        )
        .unwrap();

        assert_eq!(payload.page_order.as_deref(), Some("2,1"));
        assert_eq!(payload.deleted_pages, None);
    }

    #[test]
    fn test_suggested_file_name_for_multi_step_operations() {
        let payload = assemble(
            Operation::Merge,
            vec![pdf("annual report.pdf"), pdf("b.pdf")],
            None,
            None,
        )
        .unwrap();
        assert_eq!(
            payload.suggested_file_name.as_deref(),
            Some("chhotipdf-annual report.pdf")
        );

        let payload = assemble(Operation::Compress, vec![pdf("a.pdf")], None, None).unwrap();
        assert_eq!(payload.suggested_file_name, None);
    }

    #[test]
    fn test_assemble_without_files_fails_locally() {
        let err = assemble(Operation::Compress, vec![], None, None).unwrap_err();
        assert!(matches!(
            err,
            AppError::Selection(SelectionError::NoFileChosen)
        ));
    }
}
