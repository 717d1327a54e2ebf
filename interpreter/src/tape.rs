use crate::BoundsPolicy;

/// Fixed-size, zero-initialized row of signed byte cells with a single pointer.
#[derive(Debug, Clone)]
pub struct Tape<const N: usize> {
    cells: [i8; N],
    pointer: usize,
    policy: BoundsPolicy,
}

impl<const N: usize> Tape<N> {
    const LENGTH: isize = N as isize;

    pub const fn new(policy: BoundsPolicy) -> Self {
        Self {
            cells: [0; N],
            pointer: 0,
            policy,
        }
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn current(&self) -> i8 {
        self.cells[self.pointer]
    }

    pub fn set(&mut self, value: i8) {
        self.cells[self.pointer] = value;
    }

    pub fn add(&mut self, amount: i8) {
        self.cells[self.pointer] = self.current().wrapping_add(amount);
    }

    /// Index of the cell `delta` away from the pointer, or the out-of-range
    /// target when the policy is strict.
    pub fn locate(&self, delta: isize) -> Result<usize, isize> {
        let target = self.pointer as isize + delta;

        match self.policy {
            BoundsPolicy::Wrap => Ok(target.rem_euclid(Self::LENGTH) as usize),
            BoundsPolicy::Strict if (0..Self::LENGTH).contains(&target) => Ok(target as usize),
            BoundsPolicy::Strict => Err(target),
        }
    }

    pub fn shift(&mut self, delta: isize) -> Result<(), isize> {
        self.pointer = self.locate(delta)?;

        Ok(())
    }

    /// Adds the current cell into the one `delta` away and clears the current cell.
    ///
    /// An empty cell is left alone without looking at its neighbour, like the
    /// loop this replaces, which is skipped entirely.
    pub fn transfer(&mut self, delta: isize) -> Result<(), isize> {
        if self.current() == 0 {
            return Ok(());
        }

        let to = self.locate(delta)?;

        self.cells[to] = self.cells[to].wrapping_add(self.current());
        self.set(0);

        Ok(())
    }
}
