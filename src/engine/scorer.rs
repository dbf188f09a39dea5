// ==========================================
// 产品组合优化系统 - 评分引擎
// ==========================================
// 职责: 多指标 min-max 归一化 + 加权综合得分
// 红线: (summaries, weights) 的纯函数,同输入必须
//       得到逐位一致、顺序一致的输出
// 红线: 常量指标列归一化值恒为 0(显式策略,非意外)
// ==========================================

use crate::domain::summary::{ProductSummary, ScoredProduct};
use crate::domain::types::PriorityWeights;
use crate::engine::error::{EngineError, EngineResult};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// Scorer - 评分引擎
// ==========================================
pub struct Scorer {
    // 无状态引擎,不需要注入依赖
}

/// 单指标 min-max 归一化参数(内部)
#[derive(Debug, Clone, Copy)]
struct MetricRange {
    min: f64,
    max: f64,
}

impl MetricRange {
    fn over<'a, I: Iterator<Item = &'a f64>>(values: I) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }
        Self { min, max }
    }

    /// 归一化到 [0,1];全体相同(max==min)时恒为 0,
    /// 避免除零,也避免无区分度指标污染得分
    fn normalize(&self, value: f64) -> f64 {
        if self.max == self.min {
            0.0
        } else {
            (value - self.min) / (self.max - self.min)
        }
    }
}

impl Scorer {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算每个产品的综合得分并排序
    ///
    /// # 规则
    /// 1) 对 profit/time/resource 三个指标独立做 min-max 归一化;
    /// 2) score = profit_norm - w_time*time_norm - w_resource*resource_norm,
    ///    利润正向激励,时间/资源按权重惩罚;
    /// 3) 按 score 降序排序,同分按产品名升序(确定性平局规则)。
    ///
    /// # 错误
    /// - InsufficientProducts: 产品数 < 2(单产品归一化无意义)
    #[instrument(skip_all, fields(product_count = summaries.len(), weights = %weights))]
    pub fn score(
        &self,
        summaries: &BTreeMap<String, ProductSummary>,
        weights: PriorityWeights,
    ) -> EngineResult<Vec<ScoredProduct>> {
        if summaries.len() < 2 {
            return Err(EngineError::InsufficientProducts {
                count: summaries.len(),
            });
        }

        let profit_range = MetricRange::over(summaries.values().map(|s| &s.profit));
        let time_range = MetricRange::over(summaries.values().map(|s| &s.time));
        let resource_range = MetricRange::over(summaries.values().map(|s| &s.resource));

        let mut scored: Vec<ScoredProduct> = summaries
            .iter()
            .map(|(product, summary)| {
                let profit_norm = profit_range.normalize(summary.profit);
                let time_norm = time_range.normalize(summary.time);
                let resource_norm = resource_range.normalize(summary.resource);
                let score =
                    profit_norm - weights.w_time * time_norm - weights.w_resource * resource_norm;
                ScoredProduct {
                    product: product.clone(),
                    summary: *summary,
                    profit_norm,
                    time_norm,
                    resource_norm,
                    score,
                }
            })
            .collect();

        // score 降序;同分按产品名升序,保证同输入同输出
        scored.sort_by(|a, b| match b.score.total_cmp(&a.score) {
            Ordering::Equal => a.product.cmp(&b.product),
            other => other,
        });

        Ok(scored)
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}
