/*
 * @Author       : 老董
 * @Date         : 2025-12-21
 * @Description  : Flatten 层 - 保留首维度（batch），展平其余维度
 *                 常用于卷积等高维输出与全连接层之间的转换
 */

use super::{Layer, LayerBase};
use crate::nn::{LayerError, LayersConfig};
use crate::tensor::Tensor;

/// `[batch, d1, d2, ...]` → `[batch, d1*d2*...]`
#[derive(Debug, Clone)]
pub struct Flatten {
    base: LayerBase,
    output_shape: Vec<usize>,
}

impl Flatten {
    pub fn new<L: Layer + ?Sized>(
        prev: &L,
        name: Option<&str>,
        cfg: &mut LayersConfig,
    ) -> Result<Self, LayerError> {
        let inputs = prev.output_shape();
        if inputs.is_empty() {
            return Err(LayerError::DimensionMismatch {
                expected: 1,
                got: 0,
                message: "Flatten 层的输入至少需要1个维度".to_string(),
            });
        }
        let base = LayerBase::new(name, "flatten", inputs, cfg)?;
        let output_shape = vec![inputs[0], inputs[1..].iter().product()];
        log::info!("Flatten  {}: {:?} → {:?}", base.name(), inputs, output_shape);
        Ok(Self { base, output_shape })
    }
}

impl Layer for Flatten {
    fn base(&self) -> &LayerBase {
        &self.base
    }

    fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }

    fn build(&mut self, _cfg: &mut LayersConfig) -> Result<(), LayerError> {
        self.base.mark_built()
    }

    fn forward(&self, inputs: &Tensor, _is_train: bool) -> Result<Tensor, LayerError> {
        Ok(inputs.flatten()?)
    }
}
