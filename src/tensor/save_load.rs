use std::io::{Read, Write};
use std::path::Path;

use ndarray::ArrayD;
use ndarray_npy::{read_npy, write_npy};

use super::Tensor;
use crate::errors::TensorError;

// 保存和加载张量
impl Tensor {
    /// 将单个Tensor以bincode格式写入`writer`，同一个流中可依次写入多个Tensor
    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), TensorError> {
        bincode::serialize_into(writer, &self.data).map_err(|e| TensorError::Io(e.to_string()))
    }

    /// 从`reader`读出下一个bincode格式的Tensor（只消耗该Tensor占用的字节）
    pub fn load<R: Read>(reader: &mut R) -> Result<Self, TensorError> {
        let data =
            bincode::deserialize_from(reader).map_err(|e| TensorError::Io(e.to_string()))?;
        Ok(Self { data })
    }

    /// 保存为NumPy的`.npy`文件，便于与其他框架互通
    pub fn save_npy<P: AsRef<Path>>(&self, path: P) -> Result<(), TensorError> {
        write_npy(path, &self.data).map_err(|e| TensorError::Io(e.to_string()))
    }

    /// 从NumPy的`.npy`文件（f32）加载
    pub fn load_npy<P: AsRef<Path>>(path: P) -> Result<Self, TensorError> {
        let data: ArrayD<f32> = read_npy(path).map_err(|e| TensorError::Io(e.to_string()))?;
        Ok(Self { data })
    }
}
