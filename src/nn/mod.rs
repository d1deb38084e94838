/*
 * @Author       : 老董
 * @Date         : 2024-01-31 20:23:53
 * @Description  : 负责神经网络（neural network）层的构建
 */

mod activation;
mod error;
mod initializer;
pub mod layer;
mod layers_config;
mod variable;

pub use activation::Activation;
pub use error::LayerError;
pub use initializer::{InitArgs, Initializer};
pub use layer::{Dense, DenseConfig, Flatten, Input, Layer, LayerBase, LayerKind};
pub use layers_config::LayersConfig;
pub use variable::Variable;

#[cfg(test)]
mod tests;
