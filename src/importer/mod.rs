// ==========================================
// 产品组合优化系统 - 导入层
// ==========================================
// 职责: 外部表格数据 → 类型化订单记录
// 红线: 核心引擎不感知存储格式,只消费 ProductionRecord
// ==========================================

pub mod error;
pub mod record_importer;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use record_importer::RecordImporter;
