use std::{collections::HashMap, fmt::Display};

use parser::Opcode;

/// Number of times each opcode was executed during a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Profile {
    counts: HashMap<Opcode, u64>,
}

impl Profile {
    pub fn record(&mut self, opcode: Opcode) {
        *self.counts.entry(opcode).or_insert(0) += 1;
    }

    pub fn count(&self, opcode: Opcode) -> u64 {
        self.counts.get(&opcode).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

impl Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut rows = self.counts.iter().collect::<Vec<_>>();
        rows.sort_by(|(a, x), (b, y)| y.cmp(x).then(a.cmp(b)));

        for (opcode, count) in rows {
            writeln!(f, "{:<16}{:>16}", format!("{opcode:?}"), comma_format(*count))?;
        }

        write!(f, "{:<16}{:>16}", "Total", comma_format(self.total()))
    }
}

fn comma_format(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(comma_format(0), "0");
        assert_eq!(comma_format(999), "999");
        assert_eq!(comma_format(1_000), "1,000");
        assert_eq!(comma_format(1_234_567), "1,234,567");
    }

    #[test]
    fn report_sorts_by_count() {
        let mut profile = Profile::default();
        profile.record(Opcode::Out);
        profile.record(Opcode::Increment);
        profile.record(Opcode::Increment);

        assert_eq!(profile.total(), 3);
        assert_eq!(
            profile.to_string(),
            "Increment                      2\nOut                            1\nTotal                          3"
        );
    }
}
