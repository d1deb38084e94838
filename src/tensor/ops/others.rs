use crate::errors::TensorError;
use crate::tensor::Tensor;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[]`的标量张量
    fn from(scalar: f32) -> Self {
        Tensor::scalar(scalar)
    }
}

impl Tensor {
    /// 对张量中的所有元素求和并返回纯数
    pub fn sum(&self) -> f32 {
        self.data.sum()
    }

    /// 变换形状，元素总数必须保持不变
    pub fn reshape(&self, shape: &[usize]) -> Result<Tensor, TensorError> {
        let incompatible = || TensorError::IncompatibleShape {
            from: self.shape().to_vec(),
            to: shape.to_vec(),
        };
        if self.size() != shape.iter().product::<usize>() {
            return Err(incompatible());
        }
        // 先转为标准布局，保证按行优先顺序重排
        let data = self
            .data
            .as_standard_layout()
            .into_owned()
            .into_shape(shape)
            .map_err(|_| incompatible())?;
        Ok(Tensor { data })
    }

    /// 保留首维度（batch），将其余维度展平：`[b, d1, d2, ...] → [b, d1*d2*...]`
    pub fn flatten(&self) -> Result<Tensor, TensorError> {
        let shape = self.shape();
        let batch = shape.first().copied().unwrap_or(1);
        let features = shape.iter().skip(1).product::<usize>();
        self.reshape(&[batch, features])
    }
}
