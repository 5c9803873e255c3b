use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::unsync::Lazy;
use regex_lite::Regex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected line format: {0}")]
    BadLine(String),
    #[error("valve {0} is defined more than once")]
    Duplicate(String),
    #[error("valve {0} is referenced but never defined")]
    Undefined(String),
}

/// Index of a valve within its `Network`, assigned in definition order.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValveId(u16);

impl ValveId {
    pub(crate) fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ValveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug)]
pub struct Valve {
    name: String,
    flow: u64,
    tunnels: Vec<ValveId>,
}

impl Valve {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn flow(&self) -> u64 {
        self.flow
    }

    pub fn tunnels(&self) -> &[ValveId] {
        &self.tunnels
    }
}

/// The tunnel network. Valves are immutable once built and ids are assigned
/// in definition order, so everything derived from a `Network` is a pure
/// function of the input text.
#[derive(Debug)]
pub struct Network {
    valves: Vec<Valve>,
    id_for: HashMap<String, ValveId>,
}

impl Network {
    pub fn len(&self) -> usize {
        self.valves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valves.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ValveId> {
        (0..self.valves.len()).map(|i| ValveId(i as u16))
    }

    pub fn id(&self, name: &str) -> Option<ValveId> {
        self.id_for.get(name).copied()
    }

    pub fn valve(&self, id: ValveId) -> &Valve {
        &self.valves[id.as_usize()]
    }

    pub fn flow(&self, name: &str) -> Option<u64> {
        self.id(name).map(|id| self.valve(id).flow)
    }

    pub fn tunnel_names(&self, name: &str) -> Option<Vec<&str>> {
        let id = self.id(name)?;
        Some(self.valve(id).tunnels.iter().map(|&t| self.valve(t).name()).collect())
    }
}

impl FromStr for Network {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        // eg: Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
        //
        // The name is the uppercase run right before " has", so a leading
        // "Valve " token is tolerated, and neighbors are picked out of the
        // tail by the identifier pattern alone, so singular and plural
        // wordings parse identically.
        let line_re = Lazy::new(|| {
            Regex::new(r#"([A-Z]+) has flow rate=(\d+); tunnels? leads? to valves?(.*)"#).unwrap()
        });
        let name_re = Lazy::new(|| Regex::new(r#"[A-Z]+"#).unwrap());

        let mut defs: Vec<(String, u64, Vec<String>)> = Vec::new();
        let mut id_for: HashMap<String, ValveId> = HashMap::new();
        for line in s.lines().filter(|line| !line.trim().is_empty()) {
            let Some(caps) = line_re.captures(line) else {
                return Err(ParseError::BadLine(line.to_string()));
            };
            let name = caps[1].to_string();
            let flow: u64 = caps[2].parse().map_err(|_| ParseError::BadLine(line.to_string()))?;
            let tunnels: Vec<String> =
                name_re.find_iter(&caps[3]).map(|m| m.as_str().to_string()).collect();

            let id = ValveId(defs.len() as u16);
            if id_for.insert(name.clone(), id).is_some() {
                return Err(ParseError::Duplicate(name));
            }
            defs.push((name, flow, tunnels));
        }

        // Neighbor references can only be resolved once every definition has
        // been read, since lines may arrive in any order.
        let mut valves = Vec::with_capacity(defs.len());
        for (name, flow, tunnels) in defs {
            let tunnels = tunnels
                .into_iter()
                .map(|t| id_for.get(&t).copied().ok_or(ParseError::Undefined(t)))
                .collect::<Result<Vec<_>, _>>()?;
            valves.push(Valve { name, flow, tunnels });
        }
        Ok(Network { valves, id_for })
    }
}
