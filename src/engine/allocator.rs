// ==========================================
// 产品组合优化系统 - 分配引擎
// ==========================================
// 职责: 线性规划求解产能分配
//   max Σ score_i * q_i
//   s.t. Σ time_i * q_i <= time_budget
//        Σ resource_i * q_i <= resource_budget
//        q_i >= 0 (连续变量)
// 红线: 不可行/无界作为结构化结果返回,绝不返回部分解;
//       仅求解器内部故障抛 EngineError::Solver
// 求解器: good_lp + microlp(纯 Rust 后端)
// ==========================================

use crate::domain::summary::{AllocationItem, AllocationResult, ScoredProduct};
use crate::domain::types::AllocationStatus;
use crate::engine::error::{EngineError, EngineResult};
use crate::perf::PerfGuard;
use good_lp::{
    constraint, microlp, variable, variables, Expression, ResolutionError, Solution, SolverModel,
    Variable,
};
use tracing::{instrument, warn};

// ==========================================
// Allocator - 分配引擎
// ==========================================
pub struct Allocator {
    // 无状态引擎,不需要注入依赖
}

impl Allocator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 求解产能分配
    ///
    /// # 规则
    /// 1) q_i 仅有下界 0、无上界,预算严格为正时零向量恒可行,
    ///    因此不可行只可能来自畸形输入(预算/系数非法),先行校验;
    /// 2) 存在 time=0 且 resource=0 且 score>0 的产品时目标无上界,
    ///    作为 UNBOUNDED 显式上报,不与不可行混淆;
    /// 3) 连续解四舍五入为非负整数 recommended_qty,取整可能使
    ///    上报计划相对连续约束每变量至多超限 0.5 件(已记录的近似)。
    ///
    /// # 错误
    /// - Solver: 求解器数值故障(迭代上限等),与问题结构无关
    #[instrument(skip_all, fields(
        product_count = scored.len(),
        time_budget,
        resource_budget
    ))]
    pub fn allocate(
        &self,
        scored: &[ScoredProduct],
        time_budget: f64,
        resource_budget: f64,
    ) -> EngineResult<AllocationResult> {
        // 1. 输入校验(畸形输入 → INFEASIBLE 结果,不抛错)
        if let Some(reason) = Self::validate(scored, time_budget, resource_budget) {
            warn!(reason = %reason, "分配输入非法");
            return Ok(AllocationResult::failed(
                AllocationStatus::Infeasible,
                reason,
                time_budget,
                resource_budget,
            ));
        }

        // 2. 无界检测: 零消耗 + 正得分 → 目标无上界
        if let Some(p) = scored
            .iter()
            .find(|p| p.summary.time == 0.0 && p.summary.resource == 0.0 && p.score > 0.0)
        {
            let reason = format!(
                "产品 {} 零消耗(time=0, resource=0)且得分 {:.4} > 0,目标无上界",
                p.product, p.score
            );
            warn!(reason = %reason, "LP 无界");
            return Ok(AllocationResult::failed(
                AllocationStatus::Unbounded,
                reason,
                time_budget,
                resource_budget,
            ));
        }

        // 3. 构建并求解 LP
        let mut vars = variables!();
        let q: Vec<Variable> = scored
            .iter()
            .map(|_| vars.add(variable().min(0.0)))
            .collect();

        let objective: Expression = scored.iter().zip(&q).map(|(p, v)| p.score * *v).sum();
        let time_expr: Expression = scored.iter().zip(&q).map(|(p, v)| p.summary.time * *v).sum();
        let resource_expr: Expression = scored
            .iter()
            .zip(&q)
            .map(|(p, v)| p.summary.resource * *v)
            .sum();

        let solution = {
            // LP 求解是全链路唯一可能昂贵的步骤,记录耗时
            let _perf = PerfGuard::new("allocator_lp_solve");
            vars.maximise(objective)
                .using(microlp)
                .with(constraint!(time_expr <= time_budget))
                .with(constraint!(resource_expr <= resource_budget))
                .solve()
        };

        let solution = match solution {
            Ok(s) => s,
            // 求解器报告的无界/不可行同样走结构化结果
            Err(ResolutionError::Unbounded) => {
                return Ok(AllocationResult::failed(
                    AllocationStatus::Unbounded,
                    "求解器报告目标无上界".to_string(),
                    time_budget,
                    resource_budget,
                ));
            }
            Err(ResolutionError::Infeasible) => {
                return Ok(AllocationResult::failed(
                    AllocationStatus::Infeasible,
                    "求解器报告无可行点".to_string(),
                    time_budget,
                    resource_budget,
                ));
            }
            Err(other) => return Err(EngineError::Solver(other.to_string())),
        };

        // 4. 提取连续解并取整上报
        let mut items = Vec::with_capacity(scored.len());
        let mut objective_value = 0.0;
        let mut time_used = 0.0;
        let mut resource_used = 0.0;

        for (p, v) in scored.iter().zip(&q) {
            // 求解器可能返回 -1e-12 级别的数值噪声,按 0 处理
            let continuous_qty = solution.value(*v).max(0.0);
            objective_value += p.score * continuous_qty;
            time_used += p.summary.time * continuous_qty;
            resource_used += p.summary.resource * continuous_qty;
            items.push(AllocationItem {
                product: p.product.clone(),
                score: p.score,
                continuous_qty,
                recommended_qty: continuous_qty.round() as u64,
            });
        }

        Ok(AllocationResult::optimal(
            items,
            objective_value,
            time_used,
            resource_used,
            time_budget,
            resource_budget,
        ))
    }

    /// 畸形输入校验,返回 Some(原因) 表示非法
    fn validate(scored: &[ScoredProduct], time_budget: f64, resource_budget: f64) -> Option<String> {
        if scored.is_empty() {
            return Some("产品清单为空,无可分配对象".to_string());
        }
        if !(time_budget > 0.0) || !time_budget.is_finite() {
            return Some(format!("time_budget={} 非法,必须为正有限值", time_budget));
        }
        if !(resource_budget > 0.0) || !resource_budget.is_finite() {
            return Some(format!(
                "resource_budget={} 非法,必须为正有限值",
                resource_budget
            ));
        }
        for p in scored {
            if !p.score.is_finite() {
                return Some(format!("产品 {} 得分非法: {}", p.product, p.score));
            }
            if !p.summary.time.is_finite() || p.summary.time < 0.0 {
                return Some(format!(
                    "产品 {} 时间系数非法: {}",
                    p.product, p.summary.time
                ));
            }
            if !p.summary.resource.is_finite() || p.summary.resource < 0.0 {
                return Some(format!(
                    "产品 {} 资源系数非法: {}",
                    p.product, p.summary.resource
                ));
            }
        }
        None
    }
}

impl Default for Allocator {
    fn default() -> Self {
        Self::new()
    }
}
