use crate::errors::{Operator, TensorError};
use crate::tensor::Tensor;
use ndarray::{ArrayView2, Ix2};

impl Tensor {
    /// 实现矩阵乘法。只接受2阶张量，
    /// 且需要保证前一个张量的列数（col）等于后一个张量的行数（row），否则返回错误。
    pub fn mat_mul(&self, other: &Tensor) -> Result<Tensor, TensorError> {
        // 将动态维度数组转换为常量维度数组（同时检查输入的张量维度）
        let self_data = as_matrix(self)?;
        let other_data = as_matrix(other)?;
        // 检查前一个张量的列数是否等于后一个张量的行数
        if self_data.ncols() != other_data.nrows() {
            return Err(TensorError::OperatorError {
                operator: Operator::MatMul,
                tensor1_shape: self.shape().to_vec(),
                tensor2_shape: other.shape().to_vec(),
            });
        }
        Ok(Tensor {
            data: self_data.dot(&other_data).into_dyn(),
        })
    }
}

fn as_matrix(tensor: &Tensor) -> Result<ArrayView2<'_, f32>, TensorError> {
    tensor
        .data
        .view()
        .into_dimensionality::<Ix2>()
        .map_err(|_| TensorError::DimensionMismatch {
            operator: Operator::MatMul,
            expected: 2,
            got: tensor.dimension(),
        })
}
