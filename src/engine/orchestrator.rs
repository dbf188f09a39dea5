// ==========================================
// 产品组合优化系统 - 推荐编排引擎
// ==========================================
// 职责: 统一入口,一次接收权重,同时返回排名与分配,
//       防止"看排名"与"做优化"两条调用路径权重漂移
// 红线: 无状态;所有输入按参数传入,所有输出按值返回
// ==========================================

use crate::domain::summary::{AllocationResult, ProductSummary, ScoredProduct};
use crate::domain::types::PriorityWeights;
use crate::engine::aggregator::{Aggregator, SkippedGroup};
use crate::engine::allocator::Allocator;
use crate::engine::error::EngineResult;
use crate::engine::scorer::Scorer;
use crate::domain::record::ProductionRecord;
use std::collections::BTreeMap;
use tracing::instrument;

// ==========================================
// RecommendationEngine - 推荐编排引擎
// ==========================================
pub struct RecommendationEngine {
    scorer: Scorer,
    allocator: Allocator,
}

/// 推荐结果: 同一组权重下的排名 + 分配
#[derive(Debug, Clone)]
pub struct Recommendation {
    /// 本次推荐使用的权重(回显,保证可复现)
    pub weights: PriorityWeights,

    /// 按得分降序的产品排名
    pub ranking: Vec<ScoredProduct>,

    /// 产能分配结果
    pub allocation: AllocationResult,
}

/// 全链路推荐结果(记录 → 汇总 → 排名 → 分配)
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// 聚合阶段剔除的退化产品组
    pub skipped: Vec<SkippedGroup>,

    /// 有效产品汇总(不可变快照,可被多次评分复用)
    pub summaries: BTreeMap<String, ProductSummary>,

    /// 推荐结果
    pub recommendation: Recommendation,
}

impl RecommendationEngine {
    /// 构造函数
    pub fn new() -> Self {
        Self {
            scorer: Scorer::new(),
            allocator: Allocator::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 对汇总快照做一次完整推荐(评分 + 分配,同一组权重)
    ///
    /// # 参数
    /// - summaries: 聚合引擎输出的只读快照
    /// - weights: 本次推荐权重(按值传入)
    /// - time_budget / resource_budget: 正预算,必须显式给出
    #[instrument(skip_all, fields(product_count = summaries.len(), weights = %weights))]
    pub fn recommend(
        &self,
        summaries: &BTreeMap<String, ProductSummary>,
        weights: PriorityWeights,
        time_budget: f64,
        resource_budget: f64,
    ) -> EngineResult<Recommendation> {
        let ranking = self.scorer.score(summaries, weights)?;
        let allocation = self
            .allocator
            .allocate(&ranking, time_budget, resource_budget)?;
        Ok(Recommendation {
            weights,
            ranking,
            allocation,
        })
    }

    /// 全链路推荐: 订单记录 → 汇总 → 排名 → 分配
    #[instrument(skip_all, fields(record_count = records.len(), weights = %weights))]
    pub fn recommend_from_records(
        &self,
        records: &[ProductionRecord],
        weights: PriorityWeights,
        time_budget: f64,
        resource_budget: f64,
    ) -> EngineResult<PipelineOutcome> {
        let outcome = Aggregator::new().aggregate(records)?;
        let recommendation =
            self.recommend(&outcome.summaries, weights, time_budget, resource_budget)?;
        Ok(PipelineOutcome {
            skipped: outcome.skipped,
            summaries: outcome.summaries,
            recommendation,
        })
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(profit: f64, time: f64, resource: f64) -> ProductSummary {
        ProductSummary {
            profit,
            time,
            resource,
            record_count: 1,
        }
    }

    // ==========================================
    // 测试 1: 排名与分配使用同一组权重
    // ==========================================

    #[test]
    fn test_recommend_ranking_and_allocation_consistent() {
        let mut summaries = BTreeMap::new();
        summaries.insert("A".to_string(), summary(14.0, 1.0, 2.5));
        summaries.insert("B".to_string(), summary(8.0, 3.0, 10.25));
        summaries.insert("C".to_string(), summary(6.0, 5.0, 33.0));

        let engine = RecommendationEngine::new();
        let weights = PriorityWeights::new(1.0, 1.0);
        let rec = engine.recommend(&summaries, weights, 100.0, 100.0).unwrap();

        assert_eq!(rec.weights, weights);
        assert_eq!(rec.ranking.len(), 3);
        // 分配明细的得分与排名得分逐产品一致
        for item in &rec.allocation.items {
            let ranked = rec
                .ranking
                .iter()
                .find(|p| p.product == item.product)
                .unwrap();
            assert_eq!(item.score.to_bits(), ranked.score.to_bits());
        }
    }

    // ==========================================
    // 测试 2: 评分错误向上传播
    // ==========================================

    #[test]
    fn test_recommend_propagates_scorer_error() {
        let mut summaries = BTreeMap::new();
        summaries.insert("ONLY".to_string(), summary(10.0, 1.0, 1.0));

        let engine = RecommendationEngine::new();
        let result = engine.recommend(&summaries, PriorityWeights::default(), 10.0, 10.0);
        assert!(result.is_err());
    }
}
