// ==========================================
// 产品组合优化系统 - 配置层
// ==========================================
// 职责: 排产预算与默认权重的加载和校验
// 存储: JSON 配置档(planning profile)
// 红线: 预算没有安全默认值,必须显式给出且为正
// ==========================================

use crate::domain::types::PriorityWeights;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("配置文件不存在: {0}")]
    FileNotFound(String),

    #[error("配置读取失败: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("配置解析失败: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("预算非法 (字段 {field}): 值 {value} 必须为正有限数")]
    NonPositiveBudget { field: String, value: f64 },

    #[error("权重越界 (字段 {field}): 值 {value} 超出范围 [{min}, {max}]")]
    WeightOutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// PlanningProfile - 排产配置档
// ==========================================
// time_budget / resource_budget 为必填字段:
// serde 缺字段即解析失败,杜绝静默默认预算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningProfile {
    /// 时间预算(分钟),必填且为正
    pub time_budget: f64,

    /// 资源预算(资源成本单位),必填且为正
    pub resource_budget: f64,

    /// 默认时间惩罚权重(可被交互控件覆盖)
    #[serde(default = "default_weight")]
    pub w_time: f64,

    /// 默认资源惩罚权重
    #[serde(default = "default_weight")]
    pub w_resource: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl PlanningProfile {
    /// 从 JSON 文件加载并校验
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }
        let raw = std::fs::read_to_string(path)?;
        let profile: PlanningProfile = serde_json::from_str(&raw)?;
        profile.validate()?;
        Ok(profile)
    }

    /// 校验预算为正、权重在 [WEIGHT_MIN, WEIGHT_MAX] 内
    pub fn validate(&self) -> ConfigResult<()> {
        for (field, value) in [
            ("time_budget", self.time_budget),
            ("resource_budget", self.resource_budget),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveBudget {
                    field: field.to_string(),
                    value,
                });
            }
        }
        for (field, value) in [("w_time", self.w_time), ("w_resource", self.w_resource)] {
            if !PriorityWeights::in_range(value) {
                return Err(ConfigError::WeightOutOfRange {
                    field: field.to_string(),
                    value,
                    min: crate::domain::types::WEIGHT_MIN,
                    max: crate::domain::types::WEIGHT_MAX,
                });
            }
        }
        Ok(())
    }

    /// 配置档中的默认权重
    pub fn weights(&self) -> PriorityWeights {
        PriorityWeights::new(self.w_time, self.w_resource)
    }
}
