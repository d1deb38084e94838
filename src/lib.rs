//! # Dense Layer
//!
//! 全连接（Dense）层：把权重矩阵、可选的偏置向量和激活函数封装为可与其他层串联的单元。
//! 张量运算由`tensor`模块提供，层的名称与变量由显式传入的`nn::LayersConfig`统一登记。
//!

pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;
