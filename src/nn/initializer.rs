/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : 变量初始化器及其附加参数
 */

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::LayerError;
use crate::tensor::Tensor;

/// 变量初始化器
///
/// 分两类：
/// - 按形状生成（除`Value`外的所有变体）：创建变量时必须给出形状；
/// - 常量（`Value`）：自带取值与形状，创建变量时**不能**再指定形状。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Initializer {
    /// 全零
    Zeros,
    /// 全一
    Ones,
    /// 常数填充
    Constant(f32),
    /// [min, max] 闭区间上的均匀分布
    RandomUniform { min: f32, max: f32 },
    /// 正态分布
    RandomNormal { mean: f32, stddev: f32 },
    /// 截断正态分布：超出均值两倍标准差的样本会重新采样
    TruncatedNormal { mean: f32, stddev: f32 },
    /// Kaiming/He 初始化（适用于 `ReLU`）
    Kaiming,
    /// Xavier/Glorot 初始化（适用于 Sigmoid/Tanh）
    Xavier,
    /// 直接给定的常量张量
    Value(Tensor),
}

impl Default for Initializer {
    fn default() -> Self {
        Self::TruncatedNormal {
            mean: 0.0,
            stddev: 0.1,
        }
    }
}

impl Initializer {
    /// 是否为自带取值的常量初始化器
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// 生成初始值
    ///
    /// `var_name`仅用于错误信息。
    pub fn generate<R: Rng + ?Sized>(
        &self,
        var_name: &str,
        shape: Option<&[usize]>,
        rng: &mut R,
    ) -> Result<Tensor, LayerError> {
        self.validate(var_name)?;
        let tensor = match (self, shape) {
            (Self::Value(value), None) => value.clone(),
            (Self::Value(_), Some(_)) => {
                return Err(LayerError::ShapeSpecifiedForConstant(var_name.to_string()));
            }
            (_, None) => return Err(LayerError::MissingShape(var_name.to_string())),
            (Self::Zeros, Some(shape)) => Tensor::zeros(shape),
            (Self::Ones, Some(shape)) => Tensor::ones(shape),
            (Self::Constant(v), Some(shape)) => Tensor::full(*v, shape),
            (Self::RandomUniform { min, max }, Some(shape)) => {
                Tensor::uniform_with_rng(*min, *max, shape, rng)
            }
            (Self::RandomNormal { mean, stddev }, Some(shape)) => {
                Tensor::normal_with_rng(*mean, *stddev, shape, rng)
            }
            (Self::TruncatedNormal { mean, stddev }, Some(shape)) => {
                Tensor::truncated_normal_with_rng(*mean, *stddev, shape, rng)
            }
            (Self::Kaiming, Some(shape)) => {
                let fan_in = shape.first().copied().unwrap_or(1).max(1);
                let std = (2.0 / fan_in as f32).sqrt();
                Tensor::normal_with_rng(0.0, std, shape, rng)
            }
            (Self::Xavier, Some(shape)) => {
                let fan_in = shape.first().copied().unwrap_or(1);
                let fan_out = shape.get(1).copied().unwrap_or(1);
                let std = (2.0 / (fan_in + fan_out).max(1) as f32).sqrt();
                Tensor::normal_with_rng(0.0, std, shape, rng)
            }
        };
        Ok(tensor)
    }

    /// 检查分布参数：区间`[min, max]`非空且宽度有限，均值有限，`stddev >= 0`
    fn validate(&self, var_name: &str) -> Result<(), LayerError> {
        let valid = match self {
            Self::RandomUniform { min, max } => min <= max && (max - min).is_finite(),
            Self::RandomNormal { mean, stddev } | Self::TruncatedNormal { mean, stddev } => {
                mean.is_finite() && stddev.is_finite() && *stddev >= 0.0
            }
            _ => true,
        };
        if valid {
            Ok(())
        } else {
            Err(LayerError::InvalidConfig(format!(
                "变量`{var_name}`的初始化器参数非法：{self:?}"
            )))
        }
    }
}

/// 初始化器的附加参数（创建变量时一并传入）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitArgs {
    /// 随机种子；为`None`时使用`LayersConfig`自带的随机数生成器
    pub seed: Option<u64>,
    /// 变量是否参与训练（梯度更新）
    pub trainable: bool,
}

impl Default for InitArgs {
    fn default() -> Self {
        Self {
            seed: None,
            trainable: true,
        }
    }
}

impl InitArgs {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trainable(mut self, trainable: bool) -> Self {
        self.trainable = trainable;
        self
    }
}
