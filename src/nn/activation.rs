/*
 * @Author       : 老董
 * @Date         : 2026-01-09
 * @Description  : 层的激活函数
 */

use serde::{Deserialize, Serialize};

use crate::tensor::Tensor;

/// 激活函数
///
/// 除`Custom`外均可（反）序列化；`Custom`包装任意纯函数，仅在代码中构造。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Activation {
    /// 恒等映射
    Identity,
    Relu,
    Sigmoid,
    Tanh,
    LeakyRelu {
        alpha: f32,
    },
    Softplus,
    /// 沿最后一维归一化
    Softmax,
    #[serde(skip)]
    Custom {
        // 借用字段会让派生出的`Deserialize`限定为`'static`，需单独跳过
        #[serde(skip)]
        name: &'static str,
        func: fn(&Tensor) -> Tensor,
    },
}

impl Activation {
    pub fn apply(&self, tensor: &Tensor) -> Tensor {
        match self {
            Self::Identity => tensor.clone(),
            Self::Relu => tensor.relu(),
            Self::Sigmoid => tensor.sigmoid(),
            Self::Tanh => tensor.tanh(),
            Self::LeakyRelu { alpha } => tensor.leaky_relu(*alpha),
            Self::Softplus => tensor.softplus(),
            Self::Softmax => tensor.softmax(),
            Self::Custom { func, .. } => func(tensor),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Identity => "identity",
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::LeakyRelu { .. } => "leaky_relu",
            Self::Softplus => "softplus",
            Self::Softmax => "softmax",
            Self::Custom { name, .. } => *name,
        }
    }
}

// 自定义激活按名称比较（函数指针的比较结果不可靠）
impl PartialEq for Activation {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::LeakyRelu { alpha: a }, Self::LeakyRelu { alpha: b }) => a == b,
            (Self::Custom { name: a, .. }, Self::Custom { name: b, .. }) => a == b,
            _ => std::mem::discriminant(self) == std::mem::discriminant(other),
        }
    }
}
