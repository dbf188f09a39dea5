// ==========================================
// 产品组合优化系统 - 性能统计
// ==========================================
// LP 求解是全链路唯一可能昂贵的步骤,调用方需要
// elapsed_ms 数据来决定是否对交互式调用加外部超时
// ==========================================

use std::time::Instant;

/// 性能统计 Guard: 作用域结束时记录 elapsed_ms
///
/// 使用方式：
/// ```ignore
/// let _perf = product_mix_dss::perf::PerfGuard::new("allocator_lp_solve");
/// // do work...
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
        }
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.start.elapsed().as_millis() as u64;
        tracing::info!(target: "perf", op = self.op, elapsed_ms, "done");
    }
}
