// ==========================================
// 产品组合优化系统 - 引擎层
// ==========================================
// 职责: 聚合/评分/分配三个业务引擎 + 统一编排入口
// 红线: 引擎无状态、无 I/O;所有剔除与失败必须输出 reason
// ==========================================

pub mod aggregator;
pub mod allocator;
pub mod error;
pub mod orchestrator;
pub mod scorer;

// 重导出核心引擎
pub use aggregator::{AggregateOutcome, Aggregator, SkippedGroup};
pub use allocator::Allocator;
pub use error::{EngineError, EngineResult};
pub use orchestrator::{PipelineOutcome, Recommendation, RecommendationEngine};
pub use scorer::Scorer;
