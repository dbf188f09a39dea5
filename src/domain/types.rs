// ==========================================
// 产品组合优化系统 - 领域类型定义
// ==========================================
// 职责: 优先级权重与分配结果状态的基础类型
// 红线: 权重按值传递,不允许共享可变全局状态
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 优先级权重 (Priority Weights)
// ==========================================
// 表达相对于利润,对生产时间/资源消耗的惩罚强度
// 取值范围: [WEIGHT_MIN, WEIGHT_MAX],越界自动截断

/// 权重下限
pub const WEIGHT_MIN: f64 = 0.0;

/// 权重上限
pub const WEIGHT_MAX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriorityWeights {
    /// 时间惩罚权重 (0=不惩罚, >1 相对利润过度惩罚)
    pub w_time: f64,

    /// 资源惩罚权重
    pub w_resource: f64,
}

impl PriorityWeights {
    /// 构造权重,越界值截断到 [WEIGHT_MIN, WEIGHT_MAX]
    ///
    /// # 参数
    /// - w_time: 时间惩罚权重
    /// - w_resource: 资源惩罚权重
    pub fn new(w_time: f64, w_resource: f64) -> Self {
        Self {
            w_time: w_time.clamp(WEIGHT_MIN, WEIGHT_MAX),
            w_resource: w_resource.clamp(WEIGHT_MIN, WEIGHT_MAX),
        }
    }

    /// 判断权重是否在合法范围内(未截断前校验用)
    pub fn in_range(w: f64) -> bool {
        w.is_finite() && (WEIGHT_MIN..=WEIGHT_MAX).contains(&w)
    }
}

impl Default for PriorityWeights {
    /// 默认均衡权重: 时间/资源各 1.0
    fn default() -> Self {
        Self {
            w_time: 1.0,
            w_resource: 1.0,
        }
    }
}

impl fmt::Display for PriorityWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w_time={:.2}, w_resource={:.2}", self.w_time, self.w_resource)
    }
}

// ==========================================
// 分配结果状态 (Allocation Status)
// ==========================================
// OPTIMAL: 求解成功,quantities 有效
// INFEASIBLE: 输入畸形导致无可行点(预算/系数非法)
// UNBOUNDED: 存在零消耗正得分产品,目标无上界
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AllocationStatus {
    Optimal,    // 最优解
    Infeasible, // 不可行
    Unbounded,  // 无界
}

impl fmt::Display for AllocationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationStatus::Optimal => write!(f, "OPTIMAL"),
            AllocationStatus::Infeasible => write!(f, "INFEASIBLE"),
            AllocationStatus::Unbounded => write!(f, "UNBOUNDED"),
        }
    }
}
