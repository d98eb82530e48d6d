use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};

/// Iterative factorial; fails once the result leaves `i64` (n > 20)
pub fn factorial(n: u32) -> Result<i64, KernelError> {
    let mut result: i64 = 1;
    for i in 1..=i64::from(n) {
        result = result
            .checked_mul(i)
            .ok_or(KernelError::FactorialOverflow(n))?;
    }
    Ok(result)
}

/// Call target for the function-call benchmark
#[inline(never)]
pub fn simple_function(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Sum of `count` calls to [`simple_function`]
pub fn call_function_multiple_times(a: i64, b: i64, count: usize) -> i64 {
    let mut result: i64 = 0;
    for _ in 0..count {
        result = result.wrapping_add(simple_function(a, b));
    }
    result
}

pub fn sum_array(values: &[i64]) -> i64 {
    values.iter().fold(0i64, |acc, &v| acc.wrapping_add(v))
}

pub struct FactorialKernel {
    pub n: u32,
}

impl Kernel for FactorialKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::Factorial
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let result = factorial(self.n)?;
        Ok(KernelOutput::new(
            self.kind(),
            result,
            format!("{}! = {}", self.n, result),
        ))
    }
}

pub struct FunctionCallKernel {
    pub a: i64,
    pub b: i64,
    pub count: usize,
}

impl Kernel for FunctionCallKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::FunctionCall
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let result = call_function_multiple_times(self.a, self.b, self.count);
        Ok(KernelOutput::new(
            self.kind(),
            result,
            format!("result after {} calls: {}", self.count, result),
        ))
    }
}

pub struct SumArrayKernel {
    pub values: Vec<i64>,
}

impl SumArrayKernel {
    /// Values `1..=size`
    pub fn sequential(size: usize) -> Self {
        Self {
            values: (1..=size as i64).collect(),
        }
    }
}

impl Kernel for SumArrayKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::SumArray
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let sum = sum_array(&self.values);
        Ok(KernelOutput::new(self.kind(), sum, format!("sum: {}", sum)))
    }
}
