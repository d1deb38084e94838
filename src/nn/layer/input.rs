use super::{Layer, LayerBase};
use crate::nn::{LayerError, LayersConfig};
use crate::tensor::Tensor;

/// 输入层：声明网络入口的张量形状，前向时原样返回输入
///
/// 首维为批大小（batch），前向时允许与声明值不同；其余维度必须一致。
#[derive(Debug, Clone)]
pub struct Input {
    base: LayerBase,
}

impl Input {
    pub fn new(
        shape: &[usize],
        name: Option<&str>,
        cfg: &mut LayersConfig,
    ) -> Result<Self, LayerError> {
        if shape.is_empty() {
            return Err(LayerError::InvalidConfig(
                "输入形状至少需要1个维度".to_string(),
            ));
        }
        let base = LayerBase::new(name, "input", shape, cfg)?;
        log::info!("Input  {}: {:?}", base.name(), shape);
        Ok(Self { base })
    }
}

impl Layer for Input {
    fn base(&self) -> &LayerBase {
        &self.base
    }

    fn output_shape(&self) -> &[usize] {
        self.base.inputs()
    }

    fn build(&mut self, _cfg: &mut LayersConfig) -> Result<(), LayerError> {
        self.base.mark_built()
    }

    fn forward(&self, inputs: &Tensor, _is_train: bool) -> Result<Tensor, LayerError> {
        let expected = self.base.inputs();
        let got = inputs.shape();
        if got.len() != expected.len() || got[1..] != expected[1..] {
            return Err(LayerError::ShapeMismatch {
                expected: expected.to_vec(),
                got: got.to_vec(),
                message: format!("输入层`{}`收到的张量形状不匹配", self.base.name()),
            });
        }
        Ok(inputs.clone())
    }
}
