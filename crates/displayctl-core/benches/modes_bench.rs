//! Criterion benchmarks for [`Device::list_possible_configs`].
//!
//! Drivers commonly report several hundred mode records per adapter (every
//! resolution × refresh × color depth).  These benchmarks measure the
//! dedup + sort pass over synthetic mode lists of realistic size.
//!
//! Run with:
//! ```bash
//! cargo bench --package displayctl-core --bench modes_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use displayctl_core::{
    ChangeMode, ChangeOutcome, Device, DeviceInfo, DisplayService, ModeInfo, ModeQuery, StateFlags,
};

// ── Fixture ───────────────────────────────────────────────────────────────────

/// One attached adapter with a fixed mode list.
struct StaticAdapter {
    modes: Vec<ModeInfo>,
}

impl DisplayService for StaticAdapter {
    fn enumerate_adapters(&self, index: u32) -> Option<DeviceInfo> {
        (index == 0).then(|| DeviceInfo {
            name: r"\\.\DISPLAY1".to_string(),
            description: "Bench Adapter".to_string(),
            state_flags: StateFlags::ATTACHED_TO_DESKTOP,
            ..DeviceInfo::default()
        })
    }

    fn enumerate_monitors(&self, _adapter_name: &str, _index: u32) -> Option<DeviceInfo> {
        None
    }

    fn enumerate_modes(&self, _device_name: &str, query: ModeQuery) -> Option<ModeInfo> {
        match query {
            ModeQuery::Current => Some(ModeInfo::new(1920, 1080, 60)),
            ModeQuery::Index(i) => self.modes.get(i as usize).copied(),
        }
    }

    fn request_mode_change(&self, _: &str, _: &ModeInfo, _: ChangeMode) -> ChangeOutcome {
        ChangeOutcome::Successful
    }
}

/// Builds `resolutions` distinct resolutions × 4 refresh rates × 3 color depths.
fn adapter_with_modes(resolutions: u32) -> StaticAdapter {
    let mut modes = Vec::new();
    for r in 0..resolutions {
        let width = 640 + r * 64;
        let height = 480 + r * 36;
        for refresh in [50, 60, 120, 144] {
            for bits_per_pel in [8, 16, 32] {
                modes.push(ModeInfo {
                    bits_per_pel,
                    ..ModeInfo::new(width, height, refresh)
                });
            }
        }
    }
    StaticAdapter { modes }
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_list_possible_configs(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_possible_configs");
    let device = Device::new(1);

    for resolutions in [10u32, 40, 160] {
        let adapter = adapter_with_modes(resolutions);
        group.bench_with_input(
            BenchmarkId::from_parameter(adapter.modes.len()),
            &adapter,
            |b, adapter| {
                b.iter(|| {
                    let configs = device
                        .list_possible_configs(black_box(adapter))
                        .expect("adapter always resolves");
                    black_box(configs)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_list_possible_configs);
criterion_main!(benches);
