//! Valve-network release optimizer.
//!
//! Given one valve definition per line, find the most pressure one actor
//! can release in a fixed number of minutes, or the most two actors with
//! equal, shorter budgets can release while splitting the valves between
//! them. The pipeline is: parse the [`Network`], precompute a
//! [`DistanceTable`] of hop counts, run the subset search to get the best
//! release per opened set, then either take the table's maximum or merge
//! disjoint pairs for two actors.

pub mod combine;
pub mod distance;
pub mod network;
pub mod search;

use thiserror::Error;

pub use distance::DistanceTable;
pub use network::{Network, ParseError, Valve, ValveId};
pub use search::{ConfigError, FlowIndex, Mask};

/// Valve where every walk starts.
pub const START: &str = "AA";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Which actor arrangement to solve for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Mode {
    /// One actor works the whole budget alone.
    Single,
    /// Two actors with equal budgets split the valves between them.
    Dual,
}

/// Parses `input` and returns the maximum total release within `minutes`.
///
/// For [`Mode::Dual`] both actors get `minutes`; the caller picks the
/// budget for either mode, since nothing in the machinery depends on a
/// particular number of minutes.
pub fn solve(mode: Mode, input: &str, minutes: u32) -> Result<u64, Error> {
    let net: Network = input.parse()?;
    let table = DistanceTable::for_network(&net);
    let index = FlowIndex::new(&net)?;
    let start = net.id(START).ok_or_else(|| ParseError::Undefined(START.to_string()))?;
    let best = search::best_per_mask(&table, &index, start, minutes);
    Ok(match mode {
        Mode::Single => best.values().copied().max().unwrap_or(0),
        Mode::Dual => combine::max_disjoint_sum(&best),
    })
}

#[cfg(test)]
mod test {
    use super::*;

    const EXAMPLE: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

    #[test]
    fn test_single() {
        assert_eq!(solve(Mode::Single, EXAMPLE, 30).unwrap(), 1651);
    }

    #[test]
    fn test_dual() {
        assert_eq!(solve(Mode::Dual, EXAMPLE, 26).unwrap(), 1707);
    }

    #[test]
    fn test_no_flow_valves() {
        let input = "\
Valve AA has flow rate=0; tunnels lead to valves BB
Valve BB has flow rate=0; tunnel leads to valve AA";
        assert_eq!(solve(Mode::Single, input, 30).unwrap(), 0);
        assert_eq!(solve(Mode::Dual, input, 26).unwrap(), 0);
    }

    #[test]
    fn test_missing_start() {
        let input = "Valve BB has flow rate=3; tunnels lead to valves BB";
        let err = solve(Mode::Single, input, 30).unwrap_err();
        assert_eq!(err, Error::Parse(ParseError::Undefined("AA".to_string())));
    }

    #[test]
    fn test_parse_error_aborts() {
        let err = solve(Mode::Dual, "not a valve line", 26).unwrap_err();
        assert!(matches!(err, Error::Parse(ParseError::BadLine(_))));
    }

    #[test]
    fn test_deterministic() {
        for mode in [Mode::Single, Mode::Dual] {
            let a = solve(mode, EXAMPLE, 26).unwrap();
            let b = solve(mode, EXAMPLE, 26).unwrap();
            assert_eq!(a, b);
        }
    }
}
