//! 已选文件
//!
//! 文件内容在选择后视为只读，组件之间只传递元数据（顺序、选择、删除标记）。

/// 用户选择的一个文件（二进制内容 + 名称，扩展名由名称推导）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// 文件名（含扩展名）
    pub name: String,
    /// 文件内容
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    /// 文件大小（字节）
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// 从文件名推导扩展名（小写，带点），无扩展名时返回 None
    pub fn extension(&self) -> Option<String> {
        let idx = self.name.rfind('.')?;
        if idx == 0 || idx + 1 == self.name.len() {
            return None;
        }
        Some(self.name[idx..].to_lowercase())
    }

    /// 去掉扩展名后的基础文件名
    pub fn base_name(&self) -> &str {
        match self.name.rfind('.') {
            Some(idx) if idx > 0 => &self.name[..idx],
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_is_lowercased() {
        let file = SelectedFile::new("Report.PDF", vec![1, 2, 3]);
        assert_eq!(file.extension().as_deref(), Some(".pdf"));
        assert_eq!(file.base_name(), "Report");
        assert_eq!(file.size(), 3);
    }

    #[test]
    fn test_no_extension() {
        let file = SelectedFile::new("README", vec![]);
        assert_eq!(file.extension(), None);
        assert_eq!(file.base_name(), "README");
    }

    #[test]
    fn test_multiple_dots() {
        let file = SelectedFile::new("2024.annual.report.pdf", vec![]);
        assert_eq!(file.extension().as_deref(), Some(".pdf"));
        assert_eq!(file.base_name(), "2024.annual.report");
    }
}
