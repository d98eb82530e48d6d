use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};
use rand::Rng;

/// In-place insertion sort, stable
pub fn insertion_sort(values: &mut [i64]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        // Shift larger elements one slot to the right
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// First index whose element is smaller than its predecessor
pub fn first_unsorted(values: &[i64]) -> Option<usize> {
    values.windows(2).position(|w| w[1] < w[0]).map(|i| i + 1)
}

pub fn is_sorted(values: &[i64]) -> bool {
    first_unsorted(values).is_none()
}

pub struct InsertionSortKernel {
    pub values: Vec<i64>,
}

impl InsertionSortKernel {
    /// `size` random values in `[0, bound)`
    pub fn random<R: Rng>(size: usize, bound: i64, rng: &mut R) -> Self {
        let bound = bound.max(1);
        Self {
            values: (0..size).map(|_| rng.gen_range(0..bound)).collect(),
        }
    }
}

impl Kernel for InsertionSortKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::InsertionSort
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let mut sorted = self.values.clone();
        insertion_sort(&mut sorted);
        if let Some(index) = first_unsorted(&sorted) {
            return Err(KernelError::NotSorted(index));
        }
        Ok(KernelOutput::new(
            self.kind(),
            sorted.len() as i64,
            format!("sorted {} values", sorted.len()),
        ))
    }
}
