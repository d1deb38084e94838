/*
 * @Author       : 老董
 * @Date         : 2026-02-01
 * @Description  : LayerKind 单元测试：异构层通过 enum_dispatch 统一调度
 */

use crate::nn::{
    Activation, Dense, DenseConfig, Flatten, Input, Layer, LayerError, LayerKind, LayersConfig,
};
use crate::tensor::Tensor;

#[test]
fn test_layer_kind_chain() -> Result<(), LayerError> {
    let mut cfg = LayersConfig::new();
    let input = Input::new(&[2, 2, 3], None, &mut cfg)?;
    let flat = Flatten::new(&input, None, &mut cfg)?;
    let fc = Dense::new(DenseConfig::new(4).with_act(Activation::Relu), &flat, &mut cfg)?;
    let mut layers: Vec<LayerKind> = vec![input.into(), flat.into(), fc.into()];

    let mut x = Tensor::ones(&[2, 2, 3]);
    for layer in layers.iter_mut() {
        x = layer.call(&mut cfg, &x, false)?;
    }
    assert_eq!(x.shape(), &[2, 4]);
    assert!(x.to_vec().iter().all(|&v| v >= 0.0));

    let names: Vec<&str> = layers.iter().map(|l| l.name()).collect();
    assert_eq!(names, vec!["input", "flatten", "dense"]);
    assert_eq!(layers.iter().map(|l| l.num_weights()).sum::<usize>(), 2);
    assert_eq!(layers[2].count_params(), 6 * 4 + 4);
    Ok(())
}

#[test]
fn test_layer_kind_as_prev_layer() -> Result<(), LayerError> {
    let mut cfg = LayersConfig::new();
    let input: LayerKind = Input::new(&[3, 5], None, &mut cfg)?.into();
    let fc = Dense::new(DenseConfig::new(2), &input, &mut cfg)?;
    assert_eq!(fc.n_in(), 5);

    // 也可以通过 trait object 传入
    let prev: &dyn Layer = &fc;
    let fc2 = Dense::new(DenseConfig::new(1), prev, &mut cfg)?;
    assert_eq!(fc2.output_shape(), &[3, 1]);
    Ok(())
}
