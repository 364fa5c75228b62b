use criterion::{criterion_group, criterion_main, Criterion, black_box};

use stellaris_edit::core::types::{ActorId, IVec3};
use stellaris_edit::math::Region;
use stellaris_edit::session::{EditConfig, EditingService};
use stellaris_edit::voxel::{Brush, EditPlanner, GridWorld, HistoryManager, Voxel};

const STONE: Voxel = Voxel { color: 0x8410, material_id: 1, flags: 0 };
const SAND: Voxel = Voxel { color: 0xE6AE, material_id: 4, flags: 0 };

fn bench_fill_plan_64(c: &mut Criterion) {
    let world = GridWorld::new(Voxel::EMPTY, 0..256);
    let planner = EditPlanner::default();
    let region = Region::new(IVec3::ZERO, IVec3::splat(63));

    c.bench_function("fill_plan_64", |b| {
        b.iter(|| planner.fill(&world, black_box(&region), None, &STONE));
    });
}

fn bench_fill_apply_undo_64(c: &mut Criterion) {
    let mut world = GridWorld::new(Voxel::EMPTY, 0..256);
    let mut history = HistoryManager::new(4);
    let planner = EditPlanner::default();
    let region = Region::new(IVec3::ZERO, IVec3::splat(63));
    let actor = ActorId(1);

    c.bench_function("fill_apply_undo_64", |b| {
        b.iter(|| {
            let op = planner.fill(&world, black_box(&region), None, &STONE).unwrap();
            op.apply(&mut world).unwrap();
            history.record(actor, op);
            history.undo(actor, &mut world).unwrap()
        });
    });
}

fn bench_paint_sphere_r8(c: &mut Criterion) {
    let mut world = GridWorld::new(Voxel::EMPTY, 0..256);
    let mut service = EditingService::new(&EditConfig::default());
    let actor = ActorId(1);
    service.set_brush(actor, Brush::sphere(8, SAND, None).unwrap());

    let mut x = 0;
    c.bench_function("paint_sphere_r8", |b| {
        b.iter(|| {
            // Fresh ground each stroke so the operation is never empty
            x += 20;
            service.paint(actor, &mut world, black_box(IVec3::new(x, 64, 0))).unwrap()
        });
    });
}

criterion_group!(benches, bench_fill_plan_64, bench_fill_apply_undo_64, bench_paint_sphere_r8);
criterion_main!(benches);
