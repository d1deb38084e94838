/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 层（Layer）相关的错误类型
 */

use crate::errors::TensorError;
use thiserror::Error;

/// 层的构建、前向及持久化过程中可能出现的错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayerError {
    #[error("{message}（期望维度为{expected}，实际为{got}）")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        message: String,
    },
    #[error("{message}（期望形状为{expected:?}，实际为{got:?}）")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    /// 初始化器自带取值（常量张量），不能再指定形状
    #[error("变量`{0}`的初始化器为常量，不能指定形状")]
    ShapeSpecifiedForConstant(String),
    #[error("变量`{0}`的初始化器需要指定形状")]
    MissingShape(String),
    #[error("层名称`{0}`已被占用")]
    DuplicateLayerName(String),
    #[error("变量`{0}`已存在")]
    DuplicateVariable(String),
    #[error("层`{0}`尚未构建（build）")]
    NotBuilt(String),
    #[error("层`{0}`已构建过，不能重复构建")]
    AlreadyBuilt(String),
    #[error("无效的配置：{0}")]
    InvalidConfig(String),
    #[error("{0}")]
    Tensor(#[from] TensorError),
    #[error("读写失败：{0}")]
    Io(String),
    #[error("（反）序列化失败：{0}")]
    Serialization(String),
}

impl From<std::io::Error> for LayerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

impl From<serde_json::Error> for LayerError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
