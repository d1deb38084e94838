/*
 * @Author       : 老董
 * @Date         : 2026-01-17
 * @Description  : Dense (全连接) 层：`outputs = act(inputs @ W + b)`
 */

use std::io::{Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Layer, LayerBase};
use crate::nn::{Activation, InitArgs, Initializer, LayerError, LayersConfig, Variable};
use crate::tensor::Tensor;

const W_NAME: &str = "W";
const B_NAME: &str = "b";

/// Dense 层的超参数，构造后不再改变
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DenseConfig {
    /// 输出单元数
    pub n_units: usize,
    /// 激活函数；`None`表示不做变换
    pub act: Option<Activation>,
    /// 权重矩阵的初始化器
    pub w_init: Initializer,
    /// 偏置向量的初始化器；`None`表示不使用偏置
    pub b_init: Option<Initializer>,
    pub w_init_args: InitArgs,
    pub b_init_args: InitArgs,
    /// 层名称（需唯一）；`None`时自动生成
    pub name: Option<String>,
}

impl Default for DenseConfig {
    fn default() -> Self {
        Self {
            n_units: 100,
            act: None,
            w_init: Initializer::default(),
            b_init: Some(Initializer::Constant(0.0)),
            w_init_args: InitArgs::default(),
            b_init_args: InitArgs::default(),
            name: None,
        }
    }
}

impl DenseConfig {
    pub fn new(n_units: usize) -> Self {
        Self {
            n_units,
            ..Self::default()
        }
    }

    pub fn with_act(mut self, act: Activation) -> Self {
        self.act = Some(act);
        self
    }

    pub fn with_w_init(mut self, w_init: Initializer) -> Self {
        self.w_init = w_init;
        self
    }

    pub fn with_b_init(mut self, b_init: Initializer) -> Self {
        self.b_init = Some(b_init);
        self
    }

    /// 不使用偏置
    pub fn without_bias(mut self) -> Self {
        self.b_init = None;
        self
    }

    pub fn with_w_init_args(mut self, args: InitArgs) -> Self {
        self.w_init_args = args;
        self
    }

    pub fn with_b_init_args(mut self, args: InitArgs) -> Self {
        self.b_init_args = args;
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, LayerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String, LayerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Dense (全连接) 层
///
/// # 输入/输出形状
/// - 输入：[batch_size, n_in]（更高维的输入需先经过`Flatten`）
/// - 输出：[batch_size, n_units]
///
/// # 使用示例
/// ```ignore
/// let mut cfg = LayersConfig::new();
/// let input = Input::new(&[32, 784], Some("input"), &mut cfg)?;
/// let mut fc = Dense::new(DenseConfig::new(800).with_act(Activation::Relu), &input, &mut cfg)?;
/// fc.build(&mut cfg)?;
/// let y = fc.forward(&x, true)?;
/// ```
#[derive(Debug, Clone)]
pub struct Dense {
    base: LayerBase,
    config: DenseConfig,
    n_in: usize,
    output_shape: Vec<usize>,
}

impl Dense {
    /// 创建 Dense 层，`prev`的输出形状必须是2阶的
    pub fn new<L: Layer + ?Sized>(
        config: DenseConfig,
        prev: &L,
        cfg: &mut LayersConfig,
    ) -> Result<Self, LayerError> {
        let inputs = prev.output_shape();
        if inputs.len() != 2 {
            return Err(LayerError::DimensionMismatch {
                expected: 2,
                got: inputs.len(),
                message: "Dense 层的输入必须是2阶张量，请先 reshape 或 flatten".to_string(),
            });
        }
        if config.n_units == 0 {
            return Err(LayerError::InvalidConfig(
                "Dense 层的输出单元数必须大于0".to_string(),
            ));
        }

        let base = LayerBase::new(config.name.as_deref(), "dense", inputs, cfg)?;
        let n_in = inputs[1];
        let output_shape = vec![inputs[0], config.n_units];
        log::info!(
            "Dense  {}: {} {}",
            base.name(),
            config.n_units,
            config.act.as_ref().map_or("No Activation", |act| act.name())
        );

        Ok(Self {
            base,
            config,
            n_in,
            output_shape,
        })
    }

    pub fn config(&self) -> &DenseConfig {
        &self.config
    }

    /// 输入特征维度
    pub fn n_in(&self) -> usize {
        self.n_in
    }

    /// 输出单元数
    pub fn n_units(&self) -> usize {
        self.config.n_units
    }

    pub fn act(&self) -> Option<&Activation> {
        self.config.act.as_ref()
    }

    /// 权重矩阵 [n_in, n_units]；build 之前为`None`
    pub fn weights(&self) -> Option<&Variable> {
        self.base.all_weights().first()
    }

    pub fn weights_mut(&mut self) -> Option<&mut Variable> {
        self.base.all_weights_mut().first_mut()
    }

    /// 偏置；未 build 或未启用偏置时为`None`
    pub fn bias(&self) -> Option<&Variable> {
        if self.config.b_init.is_some() {
            self.base.all_weights().get(1)
        } else {
            None
        }
    }

    /// 将权重保存到目录`dir`下的`W.npy`（及`b.npy`）
    pub fn save_weights<P: AsRef<Path>>(&self, dir: P) -> Result<(), LayerError> {
        self.base.ensure_built()?;
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        if let Some(w) = self.weights() {
            w.value().save_npy(dir.join(format!("{W_NAME}.npy")))?;
        }
        if let Some(b) = self.bias() {
            b.value().save_npy(dir.join(format!("{B_NAME}.npy")))?;
        }
        Ok(())
    }

    /// 从目录`dir`加载`save_weights`保存的权重，形状必须与当前权重一致
    ///
    /// 任一文件读取或形状检查失败时，所有权重保持不变。
    pub fn load_weights<P: AsRef<Path>>(&mut self, dir: P) -> Result<(), LayerError> {
        self.base.ensure_built()?;
        let dir = dir.as_ref();
        // 权重的登记顺序固定为 W、b
        let values = [W_NAME, B_NAME]
            .iter()
            .take(self.base.all_weights().len())
            .map(|file| {
                Tensor::load_npy(dir.join(format!("{file}.npy"))).map_err(LayerError::from)
            })
            .collect::<Result<Vec<_>, LayerError>>()?;
        self.replace_weights(values)
    }

    /// 按 W、b 的顺序将权重以bincode格式写入`writer`
    pub fn write_weights<W: Write>(&self, writer: &mut W) -> Result<(), LayerError> {
        self.base.ensure_built()?;
        for weight in self.base.all_weights() {
            weight.value().save(writer)?;
        }
        Ok(())
    }

    /// 从`reader`读回`write_weights`写入的权重，失败时所有权重保持不变
    pub fn read_weights<R: Read>(&mut self, reader: &mut R) -> Result<(), LayerError> {
        self.base.ensure_built()?;
        let values = (0..self.base.all_weights().len())
            .map(|_| Tensor::load(reader).map_err(LayerError::from))
            .collect::<Result<Vec<_>, LayerError>>()?;
        self.replace_weights(values)
    }

    /// 先检查全部新值的形状，都通过后再统一写入
    fn replace_weights(&mut self, values: Vec<Tensor>) -> Result<(), LayerError> {
        for (weight, value) in self.base.all_weights().iter().zip(&values) {
            if !value.is_same_shape(weight.value()) {
                return Err(LayerError::ShapeMismatch {
                    expected: weight.shape().to_vec(),
                    got: value.shape().to_vec(),
                    message: format!("变量`{}`的新值形状不匹配", weight.name()),
                });
            }
        }
        for (weight, value) in self.base.all_weights_mut().iter_mut().zip(values) {
            weight.set_value(value)?;
        }
        Ok(())
    }

    /// 创建偏置；常量初始化器不接受形状时，不指定形状重新创建
    fn create_bias(&self, cfg: &mut LayersConfig) -> Result<Option<Variable>, LayerError> {
        let Some(b_init) = &self.config.b_init else {
            return Ok(None);
        };
        let name = self.base.name();
        let args = &self.config.b_init_args;
        let shape = [self.config.n_units];
        match cfg.get_variable(name, B_NAME, Some(&shape[..]), b_init, args) {
            Err(LayerError::ShapeSpecifiedForConstant(_)) => {
                log::debug!("{name}: 偏置初始化器为常量，不指定形状创建");
                cfg.get_variable(name, B_NAME, None, b_init, args).map(Some)
            }
            other => other.map(Some),
        }
    }
}

impl Layer for Dense {
    fn base(&self) -> &LayerBase {
        &self.base
    }

    fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    fn build(&mut self, cfg: &mut LayersConfig) -> Result<(), LayerError> {
        let name = self.base.name().to_string();
        if self.base.is_built() {
            return Err(LayerError::AlreadyBuilt(name));
        }

        let w = cfg.get_variable(
            &name,
            W_NAME,
            Some(&[self.n_in, self.config.n_units][..]),
            &self.config.w_init,
            &self.config.w_init_args,
        )?;

        // 偏置创建失败时归还 W 的名称，使层完整地回到未 build 的状态
        let b = match self.create_bias(cfg) {
            Ok(b) => b,
            Err(e) => {
                cfg.release_variable(w.name());
                return Err(e);
            }
        };

        self.base.add_weights(std::iter::once(w).chain(b));
        self.base.mark_built()
    }

    fn forward(&self, inputs: &Tensor, _is_train: bool) -> Result<Tensor, LayerError> {
        let Some(w) = self.weights() else {
            return Err(LayerError::NotBuilt(self.base.name().to_string()));
        };
        let mut outputs = inputs.mat_mul(w.value())?;
        if let Some(b) = self.bias() {
            outputs = outputs.try_add(b.value())?;
        }
        Ok(match &self.config.act {
            Some(act) => act.apply(&outputs),
            None => outputs,
        })
    }
}
