// ==========================================
// 产品组合优化系统 - 核心库
// ==========================================
// 系统定位: 决策支持系统 (推荐产量,人工最终控制权)
// 数据流: 订单记录 → 聚合 → 评分 → 线性规划分配
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 业务规则
pub mod engine;

// 导入层 - 外部数据
pub mod importer;

// 配置层 - 预算与默认权重
pub mod config;

// 日志系统
pub mod logging;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    AllocationItem, AllocationResult, AllocationStatus, PriorityWeights, ProductSummary,
    ProductionRecord, ScoredProduct, WEIGHT_MAX, WEIGHT_MIN,
};

// 引擎
pub use engine::{
    AggregateOutcome, Aggregator, Allocator, EngineError, EngineResult, PipelineOutcome,
    Recommendation, RecommendationEngine, Scorer, SkippedGroup,
};

// 导入
pub use importer::{ImportError, RecordImporter};

// 配置
pub use config::{ConfigError, PlanningProfile};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "产品组合优化系统";
