//! 排列编辑器层
//!
//! ## 职责
//!
//! 本层承载两个编辑器会话的状态机和共享的拖拽重排算法：
//!
//! ### `reorder` - 拖拽重排算法
//! - 单元素移位（shift），不是两两交换
//! - 长度与元素多重集不变，仅相对位置改变
//!
//! ### `page_editor` - 页面排列编辑器
//! - Split 模式：页面选择（提取）
//! - Organize 模式：拖拽重排 + 删除标记
//! - Loading → Ready → {Confirmed | Cancelled | Error} 状态机
//!
//! ### `file_editor` - 文件排列编辑器
//! - 合并前对已校验文件集的重排（0..N-1 的排列）

pub mod file_editor;
pub mod page_editor;
pub mod reorder;

pub use file_editor::FileOrderSession;
pub use page_editor::{PageArrangement, PageEditorSession, PageEditorState, PageMode};
pub use reorder::shift_reorder;
