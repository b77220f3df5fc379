use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use ordered_float::OrderedFloat;

use pathf::Graph;
use pathf::create_path;

/// An open 4-connected grid with unit edge costs.
#[derive(Debug)]
struct Grid {
    side: i32,
    guided: bool,
}

impl Graph for Grid {
    type Node = (i32, i32);
    type Index = (i32, i32);
    type Cost = OrderedFloat<f64>;

    fn for_each_neighbor<F>(&self, node: &(i32, i32), mut visit: F)
    where
        F: FnMut((i32, i32)),
    {
        let (x, y) = *node;
        for (nx, ny) in [(x - 1, y), (x + 1, y), (x, y - 1), (x, y + 1)] {
            if (0..self.side).contains(&nx) && (0..self.side).contains(&ny) {
                visit((nx, ny));
            }
        }
    }

    fn node_index(&self, node: &(i32, i32)) -> (i32, i32) {
        *node
    }

    fn heuristic(&self, node: &(i32, i32), goal: &(i32, i32)) -> OrderedFloat<f64> {
        if !self.guided {
            return OrderedFloat(0.0);
        }
        let dx = f64::from(node.0 - goal.0);
        let dy = f64::from(node.1 - goal.1);
        OrderedFloat((dx * dx + dy * dy).sqrt())
    }
}

fn corner_to_corner(grid: &Grid) -> usize {
    let goal = (grid.side - 1, grid.side - 1);
    create_path(grid, (0, 0), &[goal])
        .unwrap()
        .map(|path| path.len())
        .unwrap_or(0)
}

fn compare_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grid Search");

    for side in [16i32, 64, 128] {
        let dijkstra = Grid {
            side,
            guided: false,
        };
        let astar = Grid { side, guided: true };

        group.bench_with_input(
            BenchmarkId::new("dijkstra", format!("{side}x{side}")),
            &dijkstra,
            |b, g| b.iter(|| corner_to_corner(g)),
        );
        group.bench_with_input(
            BenchmarkId::new("astar_euclidean", format!("{side}x{side}")),
            &astar,
            |b, g| b.iter(|| corner_to_corner(g)),
        );
    }

    group.finish();
}

criterion_group!(benches, compare_search);
criterion_main!(benches);
