/*
 * @Author       : 老董
 * @Date         : 2026-01-27
 * @Description  : 层的公共上下文：名称唯一性检查 + 变量创建
 *
 * 不使用全局作用域：所有层名称与变量名称都登记在显式传入的`LayersConfig`中，
 * 同一个`LayersConfig`内不允许重名。
 */

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::{InitArgs, Initializer, LayerError, Variable};

/// 未指定种子时的默认种子
const DEFAULT_SEED: u64 = 42;

#[derive(Debug)]
pub struct LayersConfig {
    layer_names: HashSet<String>,
    variable_names: HashSet<String>,
    rng: StdRng,
}

impl Default for LayersConfig {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl LayersConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用固定种子创建（确保可重复性）
    pub fn with_seed(seed: u64) -> Self {
        Self {
            layer_names: HashSet::new(),
            variable_names: HashSet::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// 登记层名称
    ///
    /// - `Some(name)`：名称已被占用时报错；
    /// - `None`：按`prefix`、`prefix_1`、`prefix_2`...的顺序生成第一个未被占用的名称。
    pub fn register_layer_name(
        &mut self,
        name: Option<&str>,
        prefix: &str,
    ) -> Result<String, LayerError> {
        let name = match name {
            Some(name) if name.is_empty() => {
                return Err(LayerError::InvalidConfig("层名称不能为空".to_string()));
            }
            Some(name) => {
                if self.layer_names.contains(name) {
                    return Err(LayerError::DuplicateLayerName(name.to_string()));
                }
                name.to_string()
            }
            None => {
                let mut candidate = prefix.to_string();
                let mut index = 0;
                while self.layer_names.contains(&candidate) {
                    index += 1;
                    candidate = format!("{prefix}_{index}");
                }
                candidate
            }
        };
        self.layer_names.insert(name.clone());
        Ok(name)
    }

    pub fn contains_layer(&self, name: &str) -> bool {
        self.layer_names.contains(name)
    }

    /// 创建名为`<scope>/<name>`的变量
    ///
    /// `shape`为`None`时由初始化器自行决定形状（仅常量初始化器支持）。
    /// 创建失败时不会占用该名称，调用方可以换一种方式重试。
    pub fn get_variable(
        &mut self,
        scope: &str,
        name: &str,
        shape: Option<&[usize]>,
        init: &Initializer,
        args: &InitArgs,
    ) -> Result<Variable, LayerError> {
        let full_name = format!("{scope}/{name}");
        if self.variable_names.contains(&full_name) {
            return Err(LayerError::DuplicateVariable(full_name));
        }

        let value = match args.seed {
            Some(seed) => init.generate(&full_name, shape, &mut StdRng::seed_from_u64(seed))?,
            None => init.generate(&full_name, shape, &mut self.rng)?,
        };
        log::debug!("创建变量 {}: {:?}", full_name, value.shape());

        self.variable_names.insert(full_name.clone());
        Ok(Variable::new(full_name, value, args.trainable))
    }

    pub fn contains_variable(&self, full_name: &str) -> bool {
        self.variable_names.contains(full_name)
    }

    /// 释放已登记的变量名（层构建中途失败时回滚用）
    pub(crate) fn release_variable(&mut self, full_name: &str) -> bool {
        self.variable_names.remove(full_name)
    }
}
