// ==========================================
// 产品组合优化系统 - 生产订单导入器
// ==========================================
// 职责: CSV 文件 → ProductionRecord 列表(带行级校验)
// 支持: CSV (.csv),表头 snake_case 与字段一一对应
// 红线: 校验失败必须携带行号与字段名,便于对账
// ==========================================

use crate::domain::record::ProductionRecord;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// RecordImporter - 订单记录导入器
// ==========================================
pub struct RecordImporter;

impl RecordImporter {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    /// 从 CSV 文件导入生产订单记录
    ///
    /// # 规则
    /// 1) 仅支持 .csv 扩展名;
    /// 2) 表头为 ProductionRecord 字段名(snake_case);
    /// 3) 每行校验: product 非空;数量/成本/工时非负有限,
    ///    profit_per_unit 允许为负(亏损订单)但必须有限;
    /// 4) 任一行非法即整体失败(快速失败,不产出部分数据)。
    #[instrument(skip_all, fields(path = %file_path.as_ref().display()))]
    pub fn import_csv<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<ProductionRecord>> {
        let path = file_path.as_ref();

        // 检查文件存在
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        // 检查扩展名
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut records = Vec::new();
        for (idx, result) in reader.deserialize::<ProductionRecord>().enumerate() {
            // 行号: 表头占第 1 行,数据从第 2 行起
            let row = idx + 2;
            let record = result.map_err(|e| ImportError::RecordParseError {
                row,
                message: e.to_string(),
            })?;
            Self::validate_record(&record, row)?;
            records.push(record);
        }

        info!(count = records.len(), "订单记录导入完成");
        Ok(records)
    }

    /// 单行记录校验
    fn validate_record(record: &ProductionRecord, row: usize) -> ImportResult<()> {
        if record.product.trim().is_empty() {
            return Err(ImportError::PrimaryKeyMissing(row));
        }

        // 非负有限字段(利润单独处理,允许为负)
        let non_negative_fields = [
            ("planned_qty", record.planned_qty),
            ("actual_qty", record.actual_qty),
            ("good_qty", record.good_qty),
            ("defect_qty", record.defect_qty),
            ("rework_qty", record.rework_qty),
            ("cycle_time_min", record.cycle_time_min),
            ("tool_hours", record.tool_hours),
            ("labor_hours", record.labor_hours),
            ("material_qty", record.material_qty),
            ("material_unit_cost", record.material_unit_cost),
            ("labor_unit_cost", record.labor_unit_cost),
            ("energy_kwh", record.energy_kwh),
            ("energy_unit_cost", record.energy_unit_cost),
            ("unit_price", record.unit_price),
        ];
        for (field, value) in non_negative_fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ImportError::ValueRangeError {
                    row,
                    field: field.to_string(),
                    value,
                });
            }
        }

        if !record.profit_per_unit.is_finite() {
            return Err(ImportError::ValueRangeError {
                row,
                field: "profit_per_unit".to_string(),
                value: record.profit_per_unit,
            });
        }

        Ok(())
    }
}

impl Default for RecordImporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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
    // 测试 1: 正常导入
    // ==========================================

    #[test]
    fn test_import_csv_ok() {
        let path = write_csv(&[
            "P-001,100,98,95,2,1,1.5,0.5,2,4,1.2,20,10,0.8,15,3.5",
            "P-002,50,50,49,1,0,2.0,0.2,1,2,1.0,18,5,0.8,12,-0.5",
        ]);
        let records = RecordImporter::new().import_csv(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].product, "P-001");
        assert!((records[1].profit_per_unit - (-0.5)).abs() < 1e-9); // 亏损订单合法
    }

    // ==========================================
    // 测试 2: 文件不存在 / 扩展名不支持
    // ==========================================

    #[test]
    fn test_import_csv_file_not_found() {
        let result = RecordImporter::new().import_csv("/nonexistent/records.csv");
        assert!(matches!(result, Err(ImportError::FileNotFound(_))));
    }

    #[test]
    fn test_import_csv_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let path = file.into_temp_path();
        let result = RecordImporter::new().import_csv(&path);
        assert!(matches!(result, Err(ImportError::UnsupportedFormat(_))));
    }

    // ==========================================
    // 测试 3: 行级校验错误(带行号上下文)
    // ==========================================

    #[test]
    fn test_import_csv_missing_product() {
        let path = write_csv(&[
            "P-001,100,98,95,2,1,1.5,0.5,2,4,1.2,20,10,0.8,15,3.5",
            " ,50,50,49,1,0,2.0,0.2,1,2,1.0,18,5,0.8,12,1.0",
        ]);
        let result = RecordImporter::new().import_csv(&path);
        match result {
            Err(ImportError::PrimaryKeyMissing(row)) => assert_eq!(row, 3),
            other => panic!("期望 PrimaryKeyMissing,实际 {:?}", other.err()),
        }
    }

    #[test]
    fn test_import_csv_negative_quantity() {
        let path = write_csv(&["P-001,100,-98,95,2,1,1.5,0.5,2,4,1.2,20,10,0.8,15,3.5"]);
        let result = RecordImporter::new().import_csv(&path);
        match result {
            Err(ImportError::ValueRangeError { row, field, value }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "actual_qty");
                assert_eq!(value, -98.0);
            }
            other => panic!("期望 ValueRangeError,实际 {:?}", other.err()),
        }
    }

    #[test]
    fn test_import_csv_malformed_number() {
        let path = write_csv(&["P-001,100,abc,95,2,1,1.5,0.5,2,4,1.2,20,10,0.8,15,3.5"]);
        let result = RecordImporter::new().import_csv(&path);
        match result {
            Err(ImportError::RecordParseError { row, .. }) => assert_eq!(row, 2),
            other => panic!("期望 RecordParseError,实际 {:?}", other.err()),
        }
    }
}
