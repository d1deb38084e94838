use crate::tensor::Tensor;

/// 层持有的具名变量（权重、偏置等）
///
/// 名称形如`<层名>/<变量名>`，由`LayersConfig::get_variable`保证唯一。
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    value: Tensor,
    trainable: bool,
}

impl Variable {
    pub(crate) fn new(name: String, value: Tensor, trainable: bool) -> Self {
        Self {
            name,
            value,
            trainable,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &Tensor {
        &self.value
    }

    pub fn shape(&self) -> &[usize] {
        self.value.shape()
    }

    /// 返回该变量是否应该在训练过程中被更新
    pub fn is_trainable(&self) -> bool {
        self.trainable
    }

    /// 覆盖变量的值（如加载权重、优化器更新），新值的形状必须与原值一致
    pub fn set_value(&mut self, value: Tensor) -> Result<(), super::LayerError> {
        if !value.is_same_shape(&self.value) {
            return Err(super::LayerError::ShapeMismatch {
                expected: self.value.shape().to_vec(),
                got: value.shape().to_vec(),
                message: format!("变量`{}`的新值形状不匹配", self.name),
            });
        }
        self.value = value;
        Ok(())
    }
}
