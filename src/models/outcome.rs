//! 处理结果数据结构

use serde::Deserialize;

/// 处理服务返回的结果描述
///
/// `used_original = true` 表示服务没有找到压缩收益，原样返回了输入文件；
/// 此时压缩后大小按原始大小处理，压缩率为 0，绝不计算出负值。
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessOutcome {
    /// 下载地址（相对路径）
    pub url: String,
    /// 建议的下载文件名
    #[serde(rename = "fileName", default)]
    pub file_name: Option<String>,
    /// 原始大小（字节）
    #[serde(rename = "originalSize")]
    pub original_size: u64,
    /// 压缩后大小（字节），压缩类操作返回
    #[serde(rename = "compressedSize", default)]
    pub compressed_size: Option<u64>,
    /// 合并后大小（字节），合并操作返回
    #[serde(rename = "mergedSize", default)]
    pub merged_size: Option<u64>,
    /// 合并的文件数量
    #[serde(rename = "fileCount", default)]
    pub file_count: Option<u32>,
    /// 服务是否原样返回了输入文件
    #[serde(rename = "usedOriginal", default)]
    pub used_original: bool,
}

impl ProcessOutcome {
    /// 用于显示的压缩后大小
    pub fn effective_compressed_size(&self) -> u64 {
        if self.used_original {
            return self.original_size;
        }
        self.compressed_size
            .or(self.merged_size)
            .unwrap_or(self.original_size)
    }

    /// 压缩率（百分比），下限为 0
    pub fn reduction_percent(&self) -> f64 {
        if self.used_original || self.original_size == 0 {
            return 0.0;
        }
        let compressed = self.effective_compressed_size();
        if compressed >= self.original_size {
            return 0.0;
        }
        (self.original_size - compressed) as f64 / self.original_size as f64 * 100.0
    }
}
