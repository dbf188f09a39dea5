// ==========================================
// 产品组合优化系统 - 聚合引擎
// ==========================================
// 职责: 将逐订单记录归并为每产品一行的汇总指标
// 红线: 无状态、无副作用、输出确定性(BTreeMap 有序)
// 红线: 退化组必须剔除并输出 reason,不得静默产出 NaN/Inf
// ==========================================

use crate::domain::record::ProductionRecord;
use crate::domain::summary::ProductSummary;
use crate::engine::error::{EngineError, EngineResult};
use std::collections::BTreeMap;
use tracing::{instrument, warn};

// ==========================================
// Aggregator - 聚合引擎
// ==========================================
pub struct Aggregator {
    // 无状态引擎,不需要注入依赖
}

/// 被剔除的产品组(退化组)
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedGroup {
    pub product: String,
    pub reason: String,
}

/// 聚合结果: 有效汇总行 + 被剔除组清单
#[derive(Debug, Clone)]
pub struct AggregateOutcome {
    /// 每产品一行,按产品名升序(确定性)
    pub summaries: BTreeMap<String, ProductSummary>,
    /// 被剔除的退化组及原因
    pub skipped: Vec<SkippedGroup>,
}

/// 分组均值中间量(内部)
#[derive(Debug, Default)]
struct GroupMeans {
    profit: f64,
    cycle_time: f64,
    material_qty: f64,
    material_unit_cost: f64,
    labor_hours: f64,
    labor_unit_cost: f64,
    energy_kwh: f64,
    energy_unit_cost: f64,
    actual_qty: f64,
    count: usize,
}

impl Aggregator {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 聚合订单记录为产品汇总
    ///
    /// # 规则
    /// 1) 按 product 分组,对 profit_per_unit / cycle_time_min /
    ///    物料 / 人工 / 能耗 / actual_qty 各字段求算术均值;
    /// 2) resource = 物料用量均值 x 物料单价均值
    ///    + 人工小时均值 x 时薪均值 / 实际产量均值
    ///    + 能耗均值 x 能耗单价均值 / 实际产量均值;
    /// 3) 实际产量均值 <= 0 或循环时间均值 <= 0 的组为退化组,
    ///    剔除并输出 reason,不参与后续评分;
    /// 4) 派生指标出现 NaN/Inf 或 resource < 0 同样视为退化组。
    ///
    /// # 错误
    /// - EmptyInput: 输入为空
    /// - DegenerateGroup: 所有组均被剔除(输入非空但无有效汇总行)
    #[instrument(skip_all, fields(record_count = records.len()))]
    pub fn aggregate(&self, records: &[ProductionRecord]) -> EngineResult<AggregateOutcome> {
        if records.is_empty() {
            return Err(EngineError::EmptyInput);
        }

        // 1. 分组求和(BTreeMap 保证产品序确定)
        let mut groups: BTreeMap<String, GroupMeans> = BTreeMap::new();
        for record in records {
            let g = groups.entry(record.product.clone()).or_default();
            g.profit += record.profit_per_unit;
            g.cycle_time += record.cycle_time_min;
            g.material_qty += record.material_qty;
            g.material_unit_cost += record.material_unit_cost;
            g.labor_hours += record.labor_hours;
            g.labor_unit_cost += record.labor_unit_cost;
            g.energy_kwh += record.energy_kwh;
            g.energy_unit_cost += record.energy_unit_cost;
            g.actual_qty += record.actual_qty;
            g.count += 1;
        }

        // 2. 求均值并派生 resource,剔除退化组
        let mut summaries = BTreeMap::new();
        let mut skipped = Vec::new();

        for (product, g) in groups {
            let n = g.count as f64;
            let mean_actual_qty = g.actual_qty / n;
            let mean_cycle_time = g.cycle_time / n;

            // 规则 3: 实际产量均值为 0 会导致单件人工/能耗项除零
            if mean_actual_qty <= 0.0 {
                let reason = format!("DEGENERATE: mean_actual_qty={:.3} <= 0", mean_actual_qty);
                warn!(product = %product, reason = %reason, "产品组被剔除");
                skipped.push(SkippedGroup { product, reason });
                continue;
            }

            // 规则 3: 循环时间均值为 0 的组不可用于时间约束
            if mean_cycle_time <= 0.0 {
                let reason = format!("DEGENERATE: mean_cycle_time={:.3} <= 0", mean_cycle_time);
                warn!(product = %product, reason = %reason, "产品组被剔除");
                skipped.push(SkippedGroup { product, reason });
                continue;
            }

            let resource = (g.material_qty / n) * (g.material_unit_cost / n)
                + (g.labor_hours / n) * (g.labor_unit_cost / n) / mean_actual_qty
                + (g.energy_kwh / n) * (g.energy_unit_cost / n) / mean_actual_qty;
            let profit = g.profit / n;

            // 规则 4: 派生指标必须有限且 resource 非负
            if !resource.is_finite() || !profit.is_finite() || resource < 0.0 {
                let reason = format!("DEGENERATE: resource={} 非法", resource);
                warn!(product = %product, reason = %reason, "产品组被剔除");
                skipped.push(SkippedGroup { product, reason });
                continue;
            }

            summaries.insert(
                product,
                ProductSummary {
                    profit,
                    time: mean_cycle_time,
                    resource,
                    record_count: g.count,
                },
            );
        }

        if summaries.is_empty() {
            let detail = skipped
                .iter()
                .map(|s| format!("{}({})", s.product, s.reason))
                .collect::<Vec<_>>()
                .join(", ");
            return Err(EngineError::DegenerateGroup { detail });
        }

        Ok(AggregateOutcome { summaries, skipped })
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new()
    }
}
