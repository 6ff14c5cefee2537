//! 工序模擬器
//!
//! 依序列順序把每張訂單的每一件依序送過六道工序，
//! 每道工序選擇最早空閒的機台（同時空閒時取索引最小者）。
//! 同一件的下一道工序必須等上一道完成，不同件可以同時在不同工序上。

use sched_core::{Machine, Order, SchedulerConfig, SchedulerError, STAGE_COUNT};

use crate::{PenaltyCalculator, PieceRoute, Simulation, StageVisit};

/// 工序模擬器
///
/// 不保留任何跨呼叫的狀態，每次模擬都重新建立機台池。
pub struct Simulator<'a> {
    config: &'a SchedulerConfig,
}

impl<'a> Simulator<'a> {
    /// 創建新的模擬器
    pub fn new(config: &'a SchedulerConfig) -> Self {
        Self { config }
    }

    /// 模擬一個訂單序列
    pub fn simulate(&self, sequence: &[&Order]) -> sched_core::Result<Simulation> {
        self.run(sequence, None)
    }

    /// 模擬一個訂單序列，並回傳每一件的工序路徑
    pub fn simulate_traced(
        &self,
        sequence: &[&Order],
    ) -> sched_core::Result<(Simulation, Vec<PieceRoute>)> {
        let mut routes = Vec::new();
        let simulation = self.run(sequence, Some(&mut routes))?;
        Ok((simulation, routes))
    }

    fn run(
        &self,
        sequence: &[&Order],
        mut routes: Option<&mut Vec<PieceRoute>>,
    ) -> sched_core::Result<Simulation> {
        let catalog = &self.config.catalog;

        let mut stages: Vec<Vec<Machine>> = (0..STAGE_COUNT)
            .map(|stage| vec![Machine::new(); catalog.machine_count(stage)])
            .collect();
        let mut penalties = Vec::with_capacity(sequence.len());

        for (position, order) in sequence.iter().enumerate() {
            order.validate()?;
            let times = catalog.processing_times(order.product);
            let mut finish = 0;

            for piece in 0..order.quantity {
                // 本件上一道工序的完工時間
                let mut ready = 0;
                let mut visits = [StageVisit::default(); STAGE_COUNT];

                for (stage, machines) in stages.iter_mut().enumerate() {
                    let (index, available_at) = Self::earliest_available(machines).ok_or_else(|| {
                        SchedulerError::MachineUnavailable {
                            order_id: order.id.clone(),
                            stage,
                        }
                    })?;

                    let start = available_at.max(ready);
                    let end = start + i64::from(times[stage]);
                    machines[index].assign(position, start, end);

                    visits[stage] = StageVisit {
                        machine: index,
                        start,
                        end,
                    };
                    ready = end;
                }

                finish = finish.max(ready);
                if let Some(routes) = routes.as_deref_mut() {
                    routes.push(PieceRoute {
                        position,
                        piece,
                        stages: visits,
                    });
                }
            }

            penalties.push(PenaltyCalculator::assess(
                position,
                order,
                finish,
                &self.config.calendar,
            ));
        }

        let simulation = Simulation { stages, penalties };
        tracing::trace!(
            "模擬完成：訂單 {} 筆，罰金總額 {}",
            sequence.len(),
            simulation.total_penalty()
        );

        Ok(simulation)
    }

    /// 最早空閒的機台索引與空閒時間，同時空閒時取第一台
    fn earliest_available(machines: &[Machine]) -> Option<(usize, i64)> {
        machines
            .iter()
            .enumerate()
            .map(|(index, machine)| (index, machine.available_at()))
            .min_by_key(|&(_, available_at)| available_at)
    }
}
