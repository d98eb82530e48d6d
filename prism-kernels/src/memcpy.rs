use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};

/// Word-by-word copy of `src` into `dest`
pub fn word_copy(dest: &mut [i64], src: &[i64]) -> Result<(), KernelError> {
    if dest.len() != src.len() {
        return Err(KernelError::LengthMismatch {
            dest: dest.len(),
            src: src.len(),
        });
    }
    for (d, &s) in dest.iter_mut().zip(src.iter()) {
        *d = s;
    }
    Ok(())
}

pub struct MemcpyKernel {
    pub src: Vec<i64>,
}

impl MemcpyKernel {
    /// Source block holding `1..=size`
    pub fn sequential(size: usize) -> Self {
        Self {
            src: (1..=size as i64).collect(),
        }
    }
}

impl Kernel for MemcpyKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::Memcpy
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let mut dest = vec![0i64; self.src.len()];
        word_copy(&mut dest, &self.src)?;

        if let Some(word) = dest.iter().zip(self.src.iter()).position(|(d, s)| d != s) {
            return Err(KernelError::CopyMismatch(word));
        }
        Ok(KernelOutput::new(
            self.kind(),
            dest.len() as i64,
            format!("copied {} words", dest.len()),
        ))
    }
}
