use std::cmp;

use crate::network::{Network, ValveId};

/// Minimum hop counts between every ordered pair of valves, stored
/// row-major. `None` marks an unreachable pair and is never a real
/// distance. Built once from a network and immutable afterwards.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct DistanceTable {
    cols: usize,
    data: Vec<Option<u32>>,
}

impl DistanceTable {
    pub fn for_network(net: &Network) -> Self {
        let cols = net.len();
        let mut table = DistanceTable { cols, data: vec![None; cols * cols] };
        for src in net.ids() {
            table.set(src.as_usize(), src.as_usize(), Some(0));
            for &dst in net.valve(src).tunnels() {
                table.set(src.as_usize(), dst.as_usize(), Some(1));
            }
        }

        // relax_all() kind of "squares" the matrix, so instead of needing to
        // relax once per intermediate hop (or n-1 times) to propagate weights
        // fully, we only need to square the weights lg(n-1) times.
        let mut i = 1;
        while i < table.cols {
            i *= 2;
            table.relax_all();
        }
        table
    }

    pub fn hops(&self, src: ValveId, dst: ValveId) -> Option<u32> {
        self.get(src.as_usize(), dst.as_usize())
    }

    fn get(&self, src: usize, dst: usize) -> Option<u32> {
        self.data[src * self.cols + dst]
    }

    fn set(&mut self, src: usize, dst: usize, v: Option<u32>) {
        self.data[src * self.cols + dst] = v;
    }

    // Do an analog of multiplying the matrix by itself, but with "min"
    // instead. See Section 25.1 in Cormen et al's Introduction to
    // Algorithms. Updating in place is fine: entries within one pass can
    // feed each other, but the relaxation converges, so a pair picking up
    // an intermediate result just reaches its minimum earlier.
    fn relax_all(&mut self) {
        let n = self.cols;
        for src in 0..n {
            for dst in 0..n {
                for mid in 0..n {
                    let direct = self.get(src, dst);
                    let mediated = match (self.get(src, mid), self.get(mid, dst)) {
                        (Some(a), Some(b)) => Some(a + b),
                        _ => None,
                    };
                    self.set(src, dst, inner_min(direct, mediated));
                }
            }
        }
    }
}

fn inner_min<T: Ord>(a: Option<T>, b: Option<T>) -> Option<T> {
    match (a, b) {
        (Some(a), Some(b)) => Some(cmp::min(a, b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        _ => None,
    }
}
