//! 操作目录
//!
//! 五种文档处理操作的静态描述符：接受哪些扩展名、是否支持多文件、
//! 是否需要页面或文件排列步骤。目录在编译期固定，运行期不可变。

use serde::{Deserialize, Serialize};

/// 文档处理操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// 压缩 PDF
    Compress,
    /// 合并多个 PDF
    Merge,
    /// 提取 PDF 页面
    Split,
    /// 重排/删除 PDF 页面
    Organize,
    /// 压缩图片
    CompressImage,
}

/// 操作描述符（进程生命周期内不可变）
#[derive(Debug, Clone, Copy)]
pub struct OperationDescriptor {
    /// 线上 ID
    pub id: &'static str,
    /// 显示名称
    pub name: &'static str,
    /// 显示描述
    pub description: &'static str,
    /// 是否接受多个文件
    pub accepts_multiple: bool,
    /// 允许的文件扩展名（小写，带点）
    pub allowed_extensions: &'static [&'static str],
    /// 是否支持压缩级别
    pub supports_quality_level: bool,
    /// 是否需要页面排列步骤
    pub requires_page_arrangement: bool,
    /// 是否需要文件排列步骤
    pub requires_file_arrangement: bool,
}

const COMPRESS: OperationDescriptor = OperationDescriptor {
    id: "compress",
    name: "Compress PDF",
    description: "Reduce file size while maintaining quality",
    accepts_multiple: false,
    allowed_extensions: &[".pdf"],
    supports_quality_level: true,
    requires_page_arrangement: false,
    requires_file_arrangement: false,
};

const MERGE: OperationDescriptor = OperationDescriptor {
    id: "merge",
    name: "Merge PDFs",
    description: "Combine multiple PDFs into one document",
    accepts_multiple: true,
    allowed_extensions: &[".pdf"],
    supports_quality_level: false,
    requires_page_arrangement: false,
    requires_file_arrangement: true,
};

const SPLIT: OperationDescriptor = OperationDescriptor {
    id: "split",
    name: "Split PDF",
    description: "Extract pages or split large PDFs",
    accepts_multiple: false,
    allowed_extensions: &[".pdf"],
    supports_quality_level: false,
    requires_page_arrangement: true,
    requires_file_arrangement: false,
};

const ORGANIZE: OperationDescriptor = OperationDescriptor {
    id: "organize",
    name: "Organize PDFs",
    description: "Sort and arrange your documents",
    accepts_multiple: false,
    allowed_extensions: &[".pdf"],
    supports_quality_level: false,
    requires_page_arrangement: true,
    requires_file_arrangement: false,
};

const COMPRESS_IMAGE: OperationDescriptor = OperationDescriptor {
    id: "compress-image",
    name: "Compress Images",
    description: "Reduce image file size",
    accepts_multiple: true,
    allowed_extensions: &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"],
    supports_quality_level: true,
    requires_page_arrangement: false,
    requires_file_arrangement: false,
};

impl Operation {
    /// 全部五种操作
    pub const ALL: [Operation; 5] = [
        Operation::Compress,
        Operation::Merge,
        Operation::Split,
        Operation::Organize,
        Operation::CompressImage,
    ];

    /// 获取线上 ID
    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    /// 从线上 ID 解析操作
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "compress" => Some(Operation::Compress),
            "merge" => Some(Operation::Merge),
            "split" => Some(Operation::Split),
            "organize" => Some(Operation::Organize),
            "compress-image" => Some(Operation::CompressImage),
            _ => None,
        }
    }

    /// 获取操作描述符
    pub fn descriptor(self) -> &'static OperationDescriptor {
        match self {
            Operation::Compress => &COMPRESS,
            Operation::Merge => &MERGE,
            Operation::Split => &SPLIT,
            Operation::Organize => &ORGANIZE,
            Operation::CompressImage => &COMPRESS_IMAGE,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// 压缩级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityLevel {
    /// 轻度压缩，质量优先
    Light,
    /// 推荐的平衡档位
    Medium,
    /// 最大压缩率
    Heavy,
}

impl QualityLevel {
    /// 获取线上 ID
    pub fn id(self) -> &'static str {
        match self {
            QualityLevel::Light => "light",
            QualityLevel::Medium => "medium",
            QualityLevel::Heavy => "heavy",
        }
    }

    /// 从线上 ID 解析压缩级别
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "light" => Some(QualityLevel::Light),
            "medium" => Some(QualityLevel::Medium),
            "heavy" => Some(QualityLevel::Heavy),
            _ => None,
        }
    }

    /// 获取显示名称
    pub fn name(self) -> &'static str {
        match self {
            QualityLevel::Light => "Light",
            QualityLevel::Medium => "Medium",
            QualityLevel::Heavy => "Heavy",
        }
    }

    /// 获取预期压缩率区间（仅用于显示）
    pub fn expected_reduction(self) -> &'static str {
        match self {
            QualityLevel::Light => "15-25%",
            QualityLevel::Medium => "30-50%",
            QualityLevel::Heavy => "50-70%",
        }
    }
}

impl Default for QualityLevel {
    fn default() -> Self {
        QualityLevel::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_closed() {
        assert_eq!(Operation::ALL.len(), 5);
        for op in Operation::ALL {
            assert_eq!(Operation::from_id(op.id()), Some(op));
        }
        assert_eq!(Operation::from_id("rotate"), None);
    }

    #[test]
    fn test_single_file_operations() {
        assert!(!Operation::Compress.descriptor().accepts_multiple);
        assert!(!Operation::Split.descriptor().accepts_multiple);
        assert!(!Operation::Organize.descriptor().accepts_multiple);
        assert!(Operation::Merge.descriptor().accepts_multiple);
        assert!(Operation::CompressImage.descriptor().accepts_multiple);
    }

    #[test]
    fn test_arrangement_requirements() {
        assert!(Operation::Split.descriptor().requires_page_arrangement);
        assert!(Operation::Organize.descriptor().requires_page_arrangement);
        assert!(Operation::Merge.descriptor().requires_file_arrangement);
        assert!(!Operation::Compress.descriptor().requires_page_arrangement);
        assert!(!Operation::Compress.descriptor().requires_file_arrangement);
    }

    #[test]
    fn test_quality_level_ids() {
        assert_eq!(QualityLevel::default(), QualityLevel::Medium);
        assert_eq!(QualityLevel::from_id("heavy"), Some(QualityLevel::Heavy));
        assert_eq!(QualityLevel::from_id("extreme"), None);
    }
}
