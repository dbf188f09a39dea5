// ==========================================
// 产品组合优化系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 聚合/评分快速失败;分配引擎的不可行/无界
//       作为结构化结果返回,仅求解器内部故障抛错
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    // ===== 聚合引擎错误 =====
    #[error("输入记录为空: 没有可聚合的生产订单")]
    EmptyInput,

    #[error("产品组退化,无有效汇总行: {detail}")]
    DegenerateGroup { detail: String },

    // ===== 评分引擎错误 =====
    #[error("产品数不足: 评分至少需要 2 个产品,实际 {count} 个")]
    InsufficientProducts { count: usize },

    // ===== 分配引擎错误 =====
    #[error("求解器内部故障: {0}")]
    Solver(String),

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
