//! 簡單排程示例

use chrono::NaiveDate;
use order_scheduler::{plan_orders, Order, Product, SchedulerConfig};
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 簡單排程示例 ===\n");

    let config = SchedulerConfig::default();
    let deadline = |day: u32, hour: u32| {
        NaiveDate::from_ymd_opt(2020, 7, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .ok_or("無效的交期")
    };

    let orders = vec![
        Order::new("MEGR-001", Product::Gyb, 120, deadline(21, 12)?)
            .with_profit_per_piece(Decimal::from(1500))
            .with_penalty_per_day(Decimal::from(20000)),
        Order::new("MEGR-002", Product::Fb, 60, deadline(20, 18)?)
            .with_profit_per_piece(Decimal::from(3000))
            .with_penalty_per_day(Decimal::from(50000)),
        Order::new("MEGR-003", Product::Sb, 200, deadline(22, 10)?)
            .with_profit_per_piece(Decimal::from(800))
            .with_penalty_per_day(Decimal::from(10000)),
    ];

    println!("訂單清單:");
    for order in &orders {
        println!(
            "  - {}: {} x {}, 交期 {}",
            order.id, order.product, order.quantity, order.deadline
        );
    }

    let plan = plan_orders(&orders, &config)?;

    println!("\n最佳序列:");
    for &index in plan.result.best_sequence() {
        println!("  - {}", orders[index].id);
    }
    println!(
        "\n罰金總額: {} (模擬 {} 次)",
        plan.result.best_penalty, plan.result.iterations
    );

    println!("\n訂單彙總:");
    for row in &plan.order_summary {
        println!(
            "  - {}: 淨利 {}, 罰金 {}, 開工 {}, 完工 {}",
            row.order_id, row.net_profit, row.penalty, row.work_start, row.ready_at
        );
    }

    let (_, work) = plan.render()?;
    println!("\n工作表:\n{}", String::from_utf8(work)?);

    Ok(())
}
