// ==========================================
// 产品组合优化系统 - 派生领域对象
// ==========================================
// 职责: 聚合/评分/分配三个引擎的输出数据结构
// 红线: 均为纯数据,不承载格式化与展示逻辑
// ==========================================

use crate::domain::types::AllocationStatus;
use serde::{Deserialize, Serialize};

// ==========================================
// 产品汇总 (Product Summary)
// ==========================================
// 每个产品一行,由聚合引擎从订单记录归并得到
// 不变式: resource >= 0, time > 0(退化组在聚合阶段被剔除)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// 单件利润均值
    pub profit: f64,

    /// 单件循环时间均值(分钟)
    pub time: f64,

    /// 单件综合资源成本
    /// = 物料用量均值 x 物料单价均值
    ///   + 人工小时均值 x 时薪均值 / 实际产量均值
    ///   + 能耗均值 x 能耗单价均值 / 实际产量均值
    pub resource: f64,

    /// 参与归并的订单记录数(诊断用)
    pub record_count: usize,
}

// ==========================================
// 评分产品 (Scored Product)
// ==========================================
// 瞬态对象: 每次权重变化即重算,不持久化
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    /// 产品标识
    pub product: String,

    /// 来源汇总行
    pub summary: ProductSummary,

    /// 利润归一化值 [0,1];该列全体相同时恒为 0
    pub profit_norm: f64,

    /// 时间归一化值 [0,1]
    pub time_norm: f64,

    /// 资源归一化值 [0,1]
    pub resource_norm: f64,

    /// 综合得分 = profit_norm - w_time*time_norm - w_resource*resource_norm
    /// 无界实数,可为负
    pub score: f64,
}

// ==========================================
// 分配明细 (Allocation Item)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationItem {
    /// 产品标识
    pub product: String,

    /// 综合得分(与评分阶段一致)
    pub score: f64,

    /// LP 连续解产量
    pub continuous_qty: f64,

    /// 四舍五入后的推荐产量(非负整数)
    ///
    /// 注意: 取整可能使上报计划相对连续约束轻微超限
    /// (每个变量至多 0.5 件),属于已记录的近似,不做掩盖。
    pub recommended_qty: u64,
}

// ==========================================
// 分配结果 (Allocation Result)
// ==========================================
// 瞬态对象: 不可行/无界作为结构化结果返回,不抛异常
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// 是否得到可行最优解
    pub feasible: bool,

    /// 求解状态
    pub status: AllocationStatus,

    /// 失败时的人类可读原因(含产品/约束上下文)
    pub reason: Option<String>,

    /// 每个产品的分配明细(失败时为空,绝不返回部分解)
    pub items: Vec<AllocationItem>,

    /// LP 目标值 Σ score_i * q_i(连续解)
    pub objective_value: f64,

    /// 连续解消耗的时间总量
    pub time_used: f64,

    /// 连续解消耗的资源总量
    pub resource_used: f64,

    /// 时间预算(回显,便于下游报表)
    pub time_budget: f64,

    /// 资源预算(回显)
    pub resource_budget: f64,
}

impl AllocationResult {
    /// 构造最优解结果
    pub fn optimal(
        items: Vec<AllocationItem>,
        objective_value: f64,
        time_used: f64,
        resource_used: f64,
        time_budget: f64,
        resource_budget: f64,
    ) -> Self {
        Self {
            feasible: true,
            status: AllocationStatus::Optimal,
            reason: None,
            items,
            objective_value,
            time_used,
            resource_used,
            time_budget,
            resource_budget,
        }
    }

    /// 构造失败结果(不可行/无界),不携带任何部分解
    pub fn failed(
        status: AllocationStatus,
        reason: String,
        time_budget: f64,
        resource_budget: f64,
    ) -> Self {
        Self {
            feasible: false,
            status,
            reason: Some(reason),
            items: Vec::new(),
            objective_value: 0.0,
            time_used: 0.0,
            resource_used: 0.0,
            time_budget,
            resource_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_has_no_items() {
        let r = AllocationResult::failed(
            AllocationStatus::Infeasible,
            "time_budget=-1 非法".to_string(),
            -1.0,
            10.0,
        );
        assert!(!r.feasible);
        assert_eq!(r.status, AllocationStatus::Infeasible);
        assert!(r.items.is_empty());
        assert_eq!(r.objective_value, 0.0);
    }

    #[test]
    fn test_optimal_result_flags() {
        let r = AllocationResult::optimal(vec![], 5.0, 10.0, 5.0, 10.0, 10.0);
        assert!(r.feasible);
        assert_eq!(r.status, AllocationStatus::Optimal);
        assert!(r.reason.is_none());
    }
}
