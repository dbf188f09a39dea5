// ==========================================
// 导入链路集成测试
// ==========================================
// 职责: 验证 CSV 文件 → 订单记录 → 推荐结果的完整链路
// 工具: tempfile 临时 CSV 文件
// ==========================================

use product_mix_dss::{
    AllocationStatus, PriorityWeights, RecommendationEngine, RecordImporter,
};
use std::io::Write;

const HEADER: &str = "product,planned_qty,actual_qty,good_qty,defect_qty,rework_qty,cycle_time_min,tool_hours,labor_hours,material_qty,material_unit_cost,labor_unit_cost,energy_kwh,energy_unit_cost,unit_price,profit_per_unit";

fn write_csv(lines: &[&str]) -> tempfile::TempPath {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    file.into_temp_path()
}

// ==========================================
// 测试 1: CSV → 推荐全链路
// ==========================================

#[test]
fn test_csv_to_recommendation() {
    // 两个产品,A 全面占优
    let path = write_csv(&[
        // product, planned, actual, good, defect, rework, cycle, tool, labor, mat_qty, mat_cost, labor_cost, kwh, kwh_cost, price, profit
        "A,50,40,40,0,0,0.8,0.5,0.5,1.5,1.0,20,8,0.5,24,13",
        "A,70,60,59,1,0,1.2,0.5,1.5,2.5,1.0,20,12,0.5,26,15",
        "B,100,90,88,2,0,2.5,1.0,1.5,4.0,2.0,10,4,1.0,18,7",
        "B,120,110,108,2,0,3.5,1.0,2.5,6.0,2.0,10,6,1.0,20,9",
    ]);

    let records = RecordImporter::new().import_csv(&path).unwrap();
    assert_eq!(records.len(), 4);

    let pipeline = RecommendationEngine::new()
        .recommend_from_records(&records, PriorityWeights::new(1.0, 1.0), 100.0, 100.0)
        .unwrap();

    let rec = &pipeline.recommendation;
    assert_eq!(rec.ranking[0].product, "A");
    assert_eq!(rec.allocation.status, AllocationStatus::Optimal);
    assert!(rec.allocation.feasible);

    // A: time=1.0, resource=2.5 → 资源先绑定, q_A = 100/2.5 = 40
    let a = rec.allocation.items.iter().find(|i| i.product == "A").unwrap();
    assert_eq!(a.recommended_qty, 40);
    let b = rec.allocation.items.iter().find(|i| i.product == "B").unwrap();
    assert_eq!(b.recommended_qty, 0);
}

// ==========================================
// 测试 2: 非法行使整体导入失败(不产出部分数据)
// ==========================================

#[test]
fn test_csv_with_bad_row_fails_whole_import() {
    let path = write_csv(&[
        "A,50,40,40,0,0,0.8,0.5,0.5,1.5,1.0,20,8,0.5,24,13",
        "B,100,-90,88,2,0,2.5,1.0,1.5,4.0,2.0,10,4,1.0,18,7",
    ]);
    let result = RecordImporter::new().import_csv(&path);
    assert!(result.is_err());
}

// ==========================================
// 测试 3: 单产品 CSV 在评分阶段被拒绝
// ==========================================

#[test]
fn test_single_product_csv_rejected_at_scoring() {
    let path = write_csv(&["A,50,40,40,0,0,0.8,0.5,0.5,1.5,1.0,20,8,0.5,24,13"]);
    let records = RecordImporter::new().import_csv(&path).unwrap();
    let result = RecommendationEngine::new().recommend_from_records(
        &records,
        PriorityWeights::default(),
        100.0,
        100.0,
    );
    assert!(result.is_err());
}
