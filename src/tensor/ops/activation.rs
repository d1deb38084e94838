/*
 * @Author       : 老董
 * @Date         : 2026-01-09
 * @Description  : 逐元素激活函数（仅前向，梯度由外部框架负责）
 */

use crate::tensor::Tensor;
use ndarray::Axis;

impl Tensor {
    /// 对每个元素应用`f`，返回同形状的新张量
    pub fn map<F: Fn(f32) -> f32>(&self, f: F) -> Tensor {
        Tensor {
            data: self.data.mapv(f),
        }
    }

    /// `ReLU`：max(0, x)
    pub fn relu(&self) -> Tensor {
        self.map(|x| x.max(0.0))
    }

    /// Sigmoid：1 / (1 + exp(-x))
    pub fn sigmoid(&self) -> Tensor {
        self.map(|x| 1.0 / (1.0 + (-x).exp()))
    }

    pub fn tanh(&self) -> Tensor {
        self.map(f32::tanh)
    }

    /// `LeakyReLU`：x if x > 0 else alpha * x
    pub fn leaky_relu(&self, alpha: f32) -> Tensor {
        self.map(|x| if x > 0.0 { x } else { alpha * x })
    }

    /// `SoftPlus`：log(1 + exp(x))，x较大时直接取x以避免溢出
    pub fn softplus(&self) -> Tensor {
        self.map(|x| if x > 20.0 { x } else { x.exp().ln_1p() })
    }

    /// 沿最后一维计算 softmax（减去最大值以保证数值稳定）。标量原样返回1。
    pub fn softmax(&self) -> Tensor {
        if self.dimension() == 0 {
            return self.map(|_| 1.0);
        }
        let axis = Axis(self.dimension() - 1);
        let mut data = self.data.clone();
        for mut lane in data.lanes_mut(axis) {
            let max = lane.fold(f32::NEG_INFINITY, |m, &x| m.max(x));
            lane.mapv_inplace(|x| (x - max).exp());
            let sum = lane.sum();
            lane.mapv_inplace(|x| x / sum);
        }
        Tensor { data }
    }
}
