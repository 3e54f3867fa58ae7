use std::fmt;

/// 应用程序错误类型
#[derive(Debug)]
pub enum AppError {
    /// 文件选择错误
    Selection(SelectionError),
    /// 编辑器错误
    Editor(EditorError),
    /// 请求载荷构建错误
    Payload(PayloadError),
    /// API 调用错误
    Api(ApiError),
    /// 其他错误（用于包装第三方库错误）
    Other(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Selection(e) => write!(f, "文件选择错误: {}", e),
            AppError::Editor(e) => write!(f, "编辑器错误: {}", e),
            AppError::Payload(e) => write!(f, "请求构建错误: {}", e),
            AppError::Api(e) => write!(f, "API错误: {}", e),
            AppError::Other(msg) => write!(f, "错误: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Selection(e) => Some(e),
            AppError::Editor(e) => Some(e),
            AppError::Payload(e) => Some(e),
            AppError::Api(e) => Some(e),
            AppError::Other(_) => None,
        }
    }
}

/// 文件选择错误
#[derive(Debug)]
pub enum SelectionError {
    /// 候选文件中没有符合扩展名要求的文件
    NoValidFile {
        allowed: &'static [&'static str],
    },
    /// 尚未选择任何文件
    NoFileChosen,
    /// 移除文件时索引超出范围
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoValidFile { allowed } => {
                write!(f, "没有符合要求的文件，支持的格式: {}", allowed.join(", "))
            }
            SelectionError::NoFileChosen => write!(f, "请至少选择一个文件"),
            SelectionError::IndexOutOfRange { index, len } => {
                write!(f, "文件索引 {} 超出范围 [0, {})", index, len)
            }
        }
    }
}

impl std::error::Error for SelectionError {}

/// 编辑器错误
#[derive(Debug)]
pub enum EditorError {
    /// 编辑器尚未就绪（预览未加载完成或会话已结束）
    NotReady {
        state: &'static str,
    },
    /// 当前模式不支持该操作
    WrongMode {
        action: &'static str,
    },
    /// 页码超出预览页范围
    PageOutOfRange {
        page: u32,
        total: u32,
    },
    /// 未选择任何页面
    EmptySelection,
    /// 页面顺序为空
    EmptyOrder,
    /// 当前操作不需要排列步骤
    ArrangementNotRequired {
        operation: &'static str,
    },
    /// 文件数量与顺序长度不一致
    FileCountMismatch {
        expected: usize,
        actual: usize,
    },
    /// 已有一个提交正在进行中
    SubmissionInFlight,
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::NotReady { state } => {
                write!(f, "编辑器尚未就绪 (当前状态: {})", state)
            }
            EditorError::WrongMode { action } => {
                write!(f, "当前模式不支持该操作: {}", action)
            }
            EditorError::PageOutOfRange { page, total } => {
                write!(f, "页码 {} 超出范围 [1, {}]", page, total)
            }
            EditorError::EmptySelection => write!(f, "请至少选择一个页面"),
            EditorError::EmptyOrder => write!(f, "请至少保留一个页面的顺序"),
            EditorError::ArrangementNotRequired { operation } => {
                write!(f, "操作 {} 不需要排列步骤", operation)
            }
            EditorError::FileCountMismatch { expected, actual } => {
                write!(f, "文件数量不一致: 期望 {} 个，实际 {} 个", expected, actual)
            }
            EditorError::SubmissionInFlight => {
                write!(f, "已有一个提交正在进行中，请等待完成")
            }
        }
    }
}

impl std::error::Error for EditorError {}

/// 请求载荷构建错误
#[derive(Debug)]
pub enum PayloadError {
    /// 操作 ID 不在端点表中（程序不变量被破坏，必须在发送前中止）
    UnknownOperation {
        id: String,
    },
    /// 载荷中没有任何文件
    NoFiles,
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadError::UnknownOperation { id } => {
                write!(f, "未知的操作 ID: {}", id)
            }
            PayloadError::NoFiles => write!(f, "请求载荷中没有任何文件"),
        }
    }
}

impl std::error::Error for PayloadError {}

/// API 调用错误
#[derive(Debug)]
pub enum ApiError {
    /// 网络请求失败
    RequestFailed {
        endpoint: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// API 返回错误响应
    BadResponse {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },
    /// JSON 解析失败
    JsonParseFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// HTTP 客户端初始化失败
    ClientBuildFailed {
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::RequestFailed { endpoint, source } => {
                write!(f, "API请求失败 ({}): {}", endpoint, source)
            }
            ApiError::BadResponse {
                endpoint,
                status,
                message,
            } => {
                write!(
                    f,
                    "API返回错误响应 ({}): status={}, message={:?}",
                    endpoint, status, message
                )
            }
            ApiError::JsonParseFailed { source } => {
                write!(f, "JSON解析失败: {}", source)
            }
            ApiError::ClientBuildFailed { source } => {
                write!(f, "HTTP客户端初始化失败: {}", source)
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::RequestFailed { source, .. }
            | ApiError::JsonParseFailed { source }
            | ApiError::ClientBuildFailed { source } => {
                Some(source.as_ref() as &(dyn std::error::Error + 'static))
            }
            _ => None,
        }
    }
}

// ========== 从常见错误类型转换 ==========
// 注意：不需要手动实现 From<AppError> for anyhow::Error，
// 因为 anyhow 已经为所有实现了 std::error::Error 的类型提供了自动实现

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err.url().map(|u| u.path().to_string()).unwrap_or_default();
        AppError::Api(ApiError::RequestFailed {
            endpoint,
            source: Box::new(err),
        })
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Api(ApiError::JsonParseFailed {
            source: Box::new(err),
        })
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}

impl From<EditorError> for AppError {
    fn from(err: EditorError) -> Self {
        AppError::Editor(err)
    }
}

impl From<PayloadError> for AppError {
    fn from(err: PayloadError) -> Self {
        AppError::Payload(err)
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建API请求失败错误
    pub fn api_request_failed(
        endpoint: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source: Box::new(source),
        })
    }

    /// 创建API错误响应错误
    pub fn bad_response(
        endpoint: impl Into<String>,
        status: u16,
        message: Option<String>,
    ) -> Self {
        AppError::Api(ApiError::BadResponse {
            endpoint: endpoint.into(),
            status,
            message,
        })
    }

    /// 创建HTTP客户端初始化错误
    pub fn client_build_failed(
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Api(ApiError::ClientBuildFailed {
            source: Box::new(source),
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
