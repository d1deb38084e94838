use crate::assert_err;
use crate::nn::{Input, Layer, LayerError, LayersConfig};
use crate::tensor::Tensor;

#[test]
fn test_input_layer() {
    let mut cfg = LayersConfig::new();
    let mut input = Input::new(&[4, 3], None, &mut cfg).unwrap();
    assert_eq!(input.name(), "input");
    assert_eq!(input.output_shape(), &[4, 3]);
    assert_eq!(input.num_weights(), 0);

    // 批大小可以与声明值不同
    let x = Tensor::zeros(&[7, 3]);
    assert_eq!(input.call(&mut cfg, &x, false).unwrap(), x);
    assert!(input.is_built());

    assert_err!(
        input.forward(&Tensor::zeros(&[4, 2]), false),
        LayerError::ShapeMismatch { .. }
    );
    assert_err!(
        input.forward(&Tensor::zeros(&[4, 3, 1]), false),
        LayerError::ShapeMismatch { .. }
    );
}

#[test]
fn test_input_layer_rejects_empty_shape() {
    let mut cfg = LayersConfig::new();
    assert_err!(Input::new(&[], None, &mut cfg), LayerError::InvalidConfig(_));
}
