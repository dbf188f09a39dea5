// ==========================================
// 产品组合优化系统 - 生产订单记录
// ==========================================
// 职责: 外部数据源提供的单条生产订单(只读)
// 入库后不可变,聚合引擎按产品分组求均值
// ==========================================

use serde::{Deserialize, Serialize};

/// 生产订单记录(一行 = 一个生产订单)
///
/// 字段与 CSV 表头一一对应(snake_case),由 importer 负责解析与校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    /// 产品标识(主键维度,非空)
    pub product: String,

    // ===== 数量 =====
    /// 计划产量
    pub planned_qty: f64,
    /// 实际产量
    pub actual_qty: f64,
    /// 合格品数量
    pub good_qty: f64,
    /// 缺陷品数量
    pub defect_qty: f64,
    /// 返工数量
    pub rework_qty: f64,

    // ===== 工时 =====
    /// 单件循环时间(分钟)
    pub cycle_time_min: f64,
    /// 工装/刀具占用小时数
    pub tool_hours: f64,
    /// 人工小时数
    pub labor_hours: f64,

    // ===== 物料/能耗 =====
    /// 物料用量
    pub material_qty: f64,
    /// 物料单价
    pub material_unit_cost: f64,
    /// 人工时薪
    pub labor_unit_cost: f64,
    /// 能耗(kWh)
    pub energy_kwh: f64,
    /// 能耗单价
    pub energy_unit_cost: f64,

    // ===== 价格/利润 =====
    /// 销售单价
    pub unit_price: f64,
    /// 单件利润(可为负,亏损订单)
    pub profit_per_unit: f64,
}
