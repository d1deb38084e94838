/*
 * @Author       : 老董
 * @Date         : 2025-12-22
 * @Description  : Layer 模块 - 层的公共抽象（名称、输入形状、权重登记）及具体层
 *
 * 层的生命周期：构造（固定配置、校验输入形状）→ build 一次（创建权重）→ 多次 forward。
 */

mod dense;
mod flatten;
mod input;

pub use dense::{Dense, DenseConfig};
pub use flatten::Flatten;
pub use input::Input;

use enum_dispatch::enum_dispatch;

use super::{LayerError, LayersConfig, Variable};
use crate::tensor::Tensor;

/// 所有层共有的状态
#[derive(Debug, Clone)]
pub struct LayerBase {
    name: String,
    /// 输入张量的形状
    inputs: Vec<usize>,
    all_weights: Vec<Variable>,
    built: bool,
}

impl LayerBase {
    /// 在`cfg`中登记名称后创建；`name`为`None`时按`prefix`自动命名
    pub fn new(
        name: Option<&str>,
        prefix: &str,
        inputs: &[usize],
        cfg: &mut LayersConfig,
    ) -> Result<Self, LayerError> {
        let name = cfg.register_layer_name(name, prefix)?;
        Ok(Self {
            name,
            inputs: inputs.to_vec(),
            all_weights: Vec::new(),
            built: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inputs(&self) -> &[usize] {
        &self.inputs
    }

    pub fn all_weights(&self) -> &[Variable] {
        &self.all_weights
    }

    pub(crate) fn all_weights_mut(&mut self) -> &mut [Variable] {
        &mut self.all_weights
    }

    /// 登记权重，供训练（梯度更新）与保存使用
    pub fn add_weights<I: IntoIterator<Item = Variable>>(&mut self, weights: I) {
        self.all_weights.extend(weights);
    }

    pub fn is_built(&self) -> bool {
        self.built
    }

    /// 标记为已构建；重复构建返回错误
    pub(crate) fn mark_built(&mut self) -> Result<(), LayerError> {
        if self.built {
            return Err(LayerError::AlreadyBuilt(self.name.clone()));
        }
        self.built = true;
        Ok(())
    }

    pub(crate) fn ensure_built(&self) -> Result<(), LayerError> {
        if self.built {
            Ok(())
        } else {
            Err(LayerError::NotBuilt(self.name.clone()))
        }
    }
}

/// 层 trait
///
/// - `new()` **不是** trait 方法（各层参数各异），但都接收上一层以获得输入形状；
/// - `build()` 只调用一次，负责创建权重；
/// - `forward()` 每次调用都重新计算输出。
#[enum_dispatch]
pub trait Layer {
    fn base(&self) -> &LayerBase;

    /// 本层输出张量的形状
    fn output_shape(&self) -> &[usize];

    fn build(&mut self, cfg: &mut LayersConfig) -> Result<(), LayerError>;

    /// `is_train`区分训练/推理模式，对没有 dropout 之类行为的层无影响
    fn forward(&self, inputs: &Tensor, is_train: bool) -> Result<Tensor, LayerError>;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn input_shape(&self) -> &[usize] {
        self.base().inputs()
    }

    fn all_weights(&self) -> &[Variable] {
        self.base().all_weights()
    }

    fn is_built(&self) -> bool {
        self.base().is_built()
    }

    /// 首次调用时先 build，之后直接 forward
    fn call(
        &mut self,
        cfg: &mut LayersConfig,
        inputs: &Tensor,
        is_train: bool,
    ) -> Result<Tensor, LayerError> {
        if !self.is_built() {
            self.build(cfg)?;
        }
        self.forward(inputs, is_train)
    }

    /// 权重变量的个数
    fn num_weights(&self) -> usize {
        self.all_weights().len()
    }

    /// 权重中标量参数的总数
    fn count_params(&self) -> usize {
        self.all_weights().iter().map(|w| w.value().size()).sum()
    }
}

/// 库内置的层
#[enum_dispatch(Layer)]
#[derive(Debug, Clone)]
pub enum LayerKind {
    Input(Input),
    Flatten(Flatten),
    Dense(Dense),
}
