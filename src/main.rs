// ==========================================
// 产品组合优化系统 - 命令行主入口
// ==========================================
// 用法: product-mix-dss <records.csv> <profile.json>
// 数据流: CSV 订单 → 聚合 → 评分 → LP 分配 → 控制台报表
// ==========================================

use anyhow::{bail, Context};
use product_mix_dss::{logging, PlanningProfile, RecommendationEngine, RecordImporter};

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", product_mix_dss::APP_NAME);
    tracing::info!("系统版本: {}", product_mix_dss::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        bail!("用法: {} <records.csv> <profile.json>", args[0]);
    }
    let records_path = &args[1];
    let profile_path = &args[2];

    // 1. 加载配置档(预算必填)
    let profile = PlanningProfile::from_json_file(profile_path)
        .with_context(|| format!("加载配置档失败: {}", profile_path))?;
    tracing::info!(
        time_budget = profile.time_budget,
        resource_budget = profile.resource_budget,
        "配置档加载完成"
    );

    // 2. 导入订单记录
    let records = RecordImporter::new()
        .import_csv(records_path)
        .with_context(|| format!("导入订单记录失败: {}", records_path))?;

    // 3. 全链路推荐
    let engine = RecommendationEngine::new();
    let outcome = engine.recommend_from_records(
        &records,
        profile.weights(),
        profile.time_budget,
        profile.resource_budget,
    )?;

    // 4. 输出报表
    if !outcome.skipped.is_empty() {
        println!("被剔除的退化产品组:");
        for s in &outcome.skipped {
            println!("  {} - {}", s.product, s.reason);
        }
        println!();
    }

    let rec = &outcome.recommendation;
    println!("产品排名 ({}):", rec.weights);
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10}",
        "product", "profit", "time", "resource", "score"
    );
    for p in &rec.ranking {
        println!(
            "{:<12} {:>10.3} {:>10.3} {:>10.3} {:>10.4}",
            p.product, p.summary.profit, p.summary.time, p.summary.resource, p.score
        );
    }
    println!();

    let alloc = &rec.allocation;
    if !alloc.feasible {
        println!(
            "分配失败: status={}, reason={}",
            alloc.status,
            alloc.reason.as_deref().unwrap_or("未知")
        );
        return Ok(());
    }

    println!("推荐产量 (status={}):", alloc.status);
    println!("{:<12} {:>14} {:>16}", "product", "recommended", "continuous");
    for item in &alloc.items {
        println!(
            "{:<12} {:>14} {:>16.3}",
            item.product, item.recommended_qty, item.continuous_qty
        );
    }
    println!();
    println!(
        "目标值: {:.4}  时间: {:.2}/{:.2}  资源: {:.2}/{:.2}",
        alloc.objective_value,
        alloc.time_used,
        alloc.time_budget,
        alloc.resource_used,
        alloc.resource_budget
    );

    Ok(())
}
