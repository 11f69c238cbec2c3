//
// Copyright (c) 2020, Intel Corporation
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions
// are met:
//
// * Redistributions of source code must retain the above copyright
//       notice, this list of conditions and the following disclaimer.
// * Redistributions in binary form must reproduce the above
//       copyright notice, this list of conditions and the following
//       disclaimer in the documentation and/or other materials provided
//       with the distribution.
// * Neither the name of Intel Corporation nor the names of its
//       contributors may be used to endorse or promote products
//       derived from this software without specific prior written
//       permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS
// FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE
// COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT,
// INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING,
// BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
// LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
// LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN
// ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.

//! Repeated timed runs of the kernel set over shared arrays.

use log::{debug, info, warn};

use crate::arrays::Arrays;
use crate::error::{Error, Result};
use crate::executor::Executor;
use crate::kernels::{Kernel, SCALAR};
use crate::partition::covered;
use crate::stats::Report;
use crate::validate::{validate, Validation};

/// Trials per kernel.
pub const NTIMES: usize = 4;

/// Elapsed seconds per kernel and trial.
#[derive(Debug, Clone, PartialEq)]
pub struct Timings {
    times: Vec<Vec<f64>>,
    ntimes: usize,
}

impl Timings {
    pub fn new(ntimes: usize) -> Self {
        Timings {
            times: vec![vec![0.0; ntimes]; Kernel::ALL.len()],
            ntimes,
        }
    }

    pub fn ntimes(&self) -> usize {
        self.ntimes
    }

    pub fn record(&mut self, kernel: Kernel, trial: usize, seconds: f64) {
        self.times[kernel.index()][trial] = seconds;
    }

    pub fn of(&self, kernel: Kernel) -> &[f64] {
        &self.times[kernel.index()]
    }
}

/// Writes the initial values through the worker pool so each thread touches
/// its own pages first. Elements outside every partition are set serially.
pub fn initialize(executor: &Executor, arrays: &mut Arrays) -> f64 {
    let num_threads = executor.num_threads();
    let elapsed = executor.run(arrays.blocks(num_threads), |_, mut block| block.initialize());
    arrays.initialize_tail(num_threads);
    elapsed
}

/// Runs every kernel in declared order, `ntimes` times over.
///
/// The arrays carry over between kernels and between trials.
pub fn run_trials(executor: &Executor, arrays: &mut Arrays, ntimes: usize) -> Timings {
    let num_threads = executor.num_threads();
    let mut timings = Timings::new(ntimes);
    for k in 0..ntimes {
        for kernel in Kernel::ALL {
            let blocks = arrays.blocks(num_threads);
            let t = executor.run(blocks, |_, mut block| kernel.apply(&mut block, SCALAR));
            timings.record(kernel, k, t);
        }
        debug!("trial {} done", k);
    }
    timings
}

/// A configured benchmark: worker pool plus initialized arrays.
pub struct Benchmark {
    executor: Executor,
    arrays: Arrays,
    ntimes: usize,
}

impl Benchmark {
    pub fn new(size: usize, num_threads: usize, ntimes: usize) -> Result<Self> {
        if ntimes == 0 {
            return Err(Error::NoTrials);
        }
        let executor = Executor::new(num_threads)?;
        if size < num_threads {
            return Err(Error::VectorTooShort {
                size,
                threads: num_threads,
            });
        }
        if size % num_threads != 0 {
            warn!(
                "vector length {} is not a multiple of {} threads; the last {} elements are not benchmarked",
                size,
                num_threads,
                size - covered(size, num_threads)
            );
        }

        let mut arrays = Arrays::allocate(size);
        let t = initialize(&executor, &mut arrays);
        info!("initialized {} elements in {:.4} s", size, t);

        Ok(Benchmark {
            executor,
            arrays,
            ntimes,
        })
    }

    pub fn num_threads(&self) -> usize {
        self.executor.num_threads()
    }

    pub fn arrays(&self) -> &Arrays {
        &self.arrays
    }

    /// Elements that the kernels actually process.
    pub fn covered(&self) -> usize {
        covered(self.arrays.len(), self.num_threads())
    }

    pub fn run(&mut self) -> Timings {
        run_trials(&self.executor, &mut self.arrays, self.ntimes)
    }

    pub fn report(&self, timings: &Timings) -> Report {
        Report::new(timings, self.arrays.len())
    }

    pub fn validate(&self) -> Validation {
        validate(&self.arrays, self.covered(), self.ntimes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays::ArrayId;

    #[test]
    fn timings_have_one_row_per_kernel() {
        let mut timings = Timings::new(3);
        timings.record(Kernel::Daxpy, 2, 0.5);
        assert_eq!(timings.of(Kernel::Daxpy), &[0.0, 0.0, 0.5]);
        assert_eq!(timings.of(Kernel::Init).len(), 3);
        assert_eq!(timings.ntimes(), 3);
    }

    #[test]
    fn parallel_initialize_matches_serial() {
        let executor = Executor::new(3).unwrap();
        let mut arrays = Arrays::allocate(11);
        initialize(&executor, &mut arrays);
        let fresh = Arrays::new(11);
        for id in ArrayId::ALL {
            assert_eq!(arrays.get(id), fresh.get(id));
        }
    }

    #[test]
    fn every_slot_is_filled() {
        let executor = Executor::new(2).unwrap();
        let mut arrays = Arrays::new(64);
        let timings = run_trials(&executor, &mut arrays, NTIMES);
        for kernel in Kernel::ALL {
            assert_eq!(timings.of(kernel).len(), NTIMES);
            assert!(timings.of(kernel).iter().all(|&t| t >= 0.0));
        }
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(matches!(Benchmark::new(100, 0, NTIMES), Err(Error::NoThreads)));
        assert!(matches!(Benchmark::new(100, 4, 0), Err(Error::NoTrials)));
        assert!(matches!(
            Benchmark::new(3, 4, NTIMES),
            Err(Error::VectorTooShort { size: 3, threads: 4 })
        ));
    }

    #[test]
    fn uncovered_tail_keeps_initial_values() {
        let mut bench = Benchmark::new(10, 3, NTIMES).unwrap();
        bench.run();
        assert_eq!(bench.covered(), 9);
        let arrays = bench.arrays();
        assert_eq!(arrays.a[9], 2.0);
        assert_eq!(arrays.b[9], 2.0);
        assert_eq!(arrays.c[9], 0.5);
        assert_eq!(arrays.d[9], 1.0);
        assert_eq!(bench.validate(), Validation::Validates);
    }
}
