//! 模擬器性質測試

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use sched_calc::Simulator;
use sched_core::{Order, Product, SchedulerConfig, STAGE_COUNT};

fn product_strategy() -> impl Strategy<Value = Product> {
    prop_oneof![Just(Product::Gyb), Just(Product::Fb), Just(Product::Sb)]
}

fn orders_strategy() -> impl Strategy<Value = Vec<Order>> {
    prop::collection::vec(
        (product_strategy(), 1u32..12, 0i64..6 * 24 * 60, 0u32..500),
        1..8,
    )
    .prop_map(|specs| {
        let base = NaiveDate::from_ymd_opt(2020, 7, 20)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (product, quantity, offset, penalty))| {
                Order::new(
                    format!("ORD-{}", i),
                    product,
                    quantity,
                    base + Duration::minutes(offset),
                )
                .with_penalty_per_day(Decimal::from(penalty))
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn machine_intervals_never_overlap(orders in orders_strategy()) {
        let config = SchedulerConfig::default();
        let sequence: Vec<&Order> = orders.iter().collect();
        let simulation = Simulator::new(&config).simulate(&sequence).unwrap();

        for machines in &simulation.stages {
            for machine in machines {
                for pair in machine.intervals().windows(2) {
                    prop_assert!(pair[0].start <= pair[0].end);
                    prop_assert!(pair[1].start >= pair[0].end);
                }
            }
        }
    }

    #[test]
    fn pieces_respect_stage_precedence(orders in orders_strategy()) {
        let config = SchedulerConfig::default();
        let sequence: Vec<&Order> = orders.iter().collect();
        let (_, routes) = Simulator::new(&config).simulate_traced(&sequence).unwrap();

        let expected: u32 = orders.iter().map(|o| o.quantity).sum();
        prop_assert_eq!(routes.len(), expected as usize);

        for route in &routes {
            for stage in 1..STAGE_COUNT {
                prop_assert!(route.stages[stage].start >= route.stages[stage - 1].end);
            }
        }
    }

    #[test]
    fn every_piece_is_processed_once_per_stage(orders in orders_strategy()) {
        let config = SchedulerConfig::default();
        let sequence: Vec<&Order> = orders.iter().collect();
        let simulation = Simulator::new(&config).simulate(&sequence).unwrap();

        for (position, order) in orders.iter().enumerate() {
            for (stage, machines) in simulation.stages.iter().enumerate() {
                let per_piece = i64::from(config.catalog.processing_time(order.product, stage));
                let busy: i64 = machines
                    .iter()
                    .flat_map(|m| m.intervals())
                    .filter(|iv| iv.position == position)
                    .map(|iv| iv.duration())
                    .sum();
                prop_assert_eq!(busy, per_piece * i64::from(order.quantity));
            }
        }
    }

    #[test]
    fn penalties_are_non_negative_and_zero_when_on_time(orders in orders_strategy()) {
        let config = SchedulerConfig::default();
        let sequence: Vec<&Order> = orders.iter().collect();
        let simulation = Simulator::new(&config).simulate(&sequence).unwrap();

        for penalty in &simulation.penalties {
            let order = &orders[penalty.position];
            prop_assert!(penalty.amount >= Decimal::ZERO);
            if penalty.finished_at <= order.deadline {
                prop_assert_eq!(penalty.amount, Decimal::ZERO);
            } else if order.penalty_per_day > Decimal::ZERO {
                prop_assert!(penalty.amount > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn simulation_is_deterministic(orders in orders_strategy()) {
        let config = SchedulerConfig::default();
        let sequence: Vec<&Order> = orders.iter().collect();
        let simulator = Simulator::new(&config);

        prop_assert_eq!(
            simulator.simulate(&sequence).unwrap(),
            simulator.simulate(&sequence).unwrap()
        );
    }
}
