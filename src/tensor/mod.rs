/*
 * @Author       : 老董
 * @Date         : 2023-08-17 17:24:24
 * @Description  : 张量（Tensor）：本库中全连接层所依赖的数值底座。
 *                 只提供层所需的原语：创建（含各类随机初始化）、属性查询、
 *                 矩阵乘法、广播加法、逐元素激活及保存/加载。
 */

use ndarray::{Array, IxDyn};
use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

mod ops {
    pub mod activation;
    pub mod add;
    pub mod mat_mul;
    pub mod others;
}

mod property;
mod save_load;


/// 定义张量的结构体。其可以是标量、向量、矩阵或更高维度的数组。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）；
/// 而通常意义上的数字（类型为usize、i32、f64等）就只是纯数（number），在这里不被认为是张量。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]、[1,1,1]...
    /// 若为向量，`shape`可以是[n]、[1,n]、[n,1]；
    /// 若为矩阵，`shape`可以是[n,m]；
    /// 若为更高维度的数组，`shape`可以是[c,n,m,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则panic。
    pub fn new(data: &[f32], shape: &[usize]) -> Self {
        let data = Array::from_shape_vec(IxDyn(shape), data.to_vec())
            .unwrap_or_else(|_| panic!("数据长度{}与形状{:?}不匹配", data.len(), shape));
        Self { data }
    }

    /// 创建一个形状为`[]`的标量张量
    pub fn scalar(value: f32) -> Self {
        Self {
            data: Array::from_elem(IxDyn(&[]), value),
        }
    }

    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(0.0, shape)
    }

    pub fn ones(shape: &[usize]) -> Self {
        Self::full(1.0, shape)
    }

    /// 创建一个所有元素都为`value`的张量
    pub fn full(value: f32, shape: &[usize]) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// 创建一个随机张量，其值在[min, max]的闭区间
    pub fn uniform_with_rng<R: Rng + ?Sized>(
        min: f32,
        max: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let dist = Uniform::from(min..=max);
        let data = (0..shape.iter().product::<usize>())
            .map(|_| dist.sample(rng))
            .collect::<Vec<_>>();
        Self::new(&data, shape)
    }

    /// 创建一个服从正态分布的随机张量（Box-Muller变换）
    pub fn normal_with_rng<R: Rng + ?Sized>(
        mean: f32,
        std_dev: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);
        while data.len() < data_len {
            let (z0, z1) = box_muller(rng);
            data.push(mean + std_dev * z0);
            if data.len() < data_len {
                data.push(mean + std_dev * z1);
            }
        }
        Self::new(&data, shape)
    }

    /// 创建一个服从截断正态分布的随机张量：
    /// 落在`[mean - 2*std_dev, mean + 2*std_dev]`之外的样本会被丢弃并重新采样
    pub fn truncated_normal_with_rng<R: Rng + ?Sized>(
        mean: f32,
        std_dev: f32,
        shape: &[usize],
        rng: &mut R,
    ) -> Self {
        let data_len = shape.iter().product::<usize>();
        let mut data = Vec::with_capacity(data_len);
        while data.len() < data_len {
            let (z0, z1) = box_muller(rng);
            for z in [z0, z1] {
                if z.abs() <= 2.0 && data.len() < data_len {
                    data.push(mean + std_dev * z);
                }
            }
        }
        Self::new(&data, shape)
    }
}

/// 生成一对独立的标准正态样本
fn box_muller<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    loop {
        let u1: f32 = rng.r#gen();
        let u2: f32 = rng.r#gen();
        // u1为0时ln发散，重新采样
        if u1 <= f32::MIN_POSITIVE {
            continue;
        }
        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * std::f32::consts::PI * u2;
        return (r * theta.cos(), r * theta.sin());
    }
}
