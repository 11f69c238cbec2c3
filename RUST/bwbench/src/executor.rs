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

//! Fork-join execution of one kernel across a fixed set of workers.

use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::arrays::Block;
use crate::error::{Error, Result};

pub struct Executor {
    pool: ThreadPool,
    num_threads: usize,
}

impl Executor {
    pub fn new(num_threads: usize) -> Result<Self> {
        if num_threads == 0 {
            return Err(Error::NoThreads);
        }
        let pool = ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(|i| format!("bwbench-{}", i))
            .build()?;
        Ok(Executor { pool, num_threads })
    }

    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    /// Runs `work` once on every pool worker, worker `i` receiving block `i`,
    /// and waits for all of them.
    ///
    /// Block `i` always lands on the worker named `bwbench-i`, so the thread
    /// that first touches a block during initialization keeps it for every
    /// later kernel. Returns the wall-clock seconds between the fan-out and
    /// the moment the last worker finished. A panic in any worker is
    /// re-raised here.
    pub fn run<F>(&self, blocks: Vec<Block<'_>>, work: F) -> f64
    where
        F: Fn(usize, Block<'_>) + Sync,
    {
        debug_assert_eq!(blocks.len(), self.num_threads);
        let slots: Vec<Mutex<Option<Block<'_>>>> =
            blocks.into_iter().map(|b| Mutex::new(Some(b))).collect();

        let timer = Instant::now();
        self.pool.broadcast(|ctx| {
            let tid = ctx.index();
            let block = slots[tid]
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            if let Some(block) = block {
                work(tid, block);
            }
        });
        common::seconds(timer.elapsed())
    }
}
