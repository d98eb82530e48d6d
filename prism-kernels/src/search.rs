use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};
use rand::Rng;

/// Index of the first element equal to `value`
pub fn linear_search(values: &[i64], value: i64) -> Option<usize> {
    for (i, &v) in values.iter().enumerate() {
        if v == value {
            return Some(i);
        }
    }
    None
}

pub struct LinearSearchKernel {
    pub values: Vec<i64>,
    pub target: i64,
}

impl LinearSearchKernel {
    /// Even values `0, 2, 4, ...` with `target` planted at a random index.
    ///
    /// An even target may already occur earlier in the array, in which case
    /// the search reports that first occurrence.
    pub fn planted<R: Rng>(size: usize, target: i64, rng: &mut R) -> Self {
        let mut values: Vec<i64> = (0..size as i64).map(|i| i * 2).collect();
        if size > 0 {
            let index = rng.gen_range(0..size);
            values[index] = target;
        }
        Self { values, target }
    }
}

impl Kernel for LinearSearchKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::LinearSearch
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let index = linear_search(&self.values, self.target)
            .ok_or(KernelError::NotFound(self.target))?;
        Ok(KernelOutput::new(
            self.kind(),
            index as i64,
            format!("value {} found at index {}", self.target, index),
        ))
    }
}
