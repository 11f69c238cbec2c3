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

//! Timing reduction and the results table.

use std::fmt;

use crate::driver::Timings;
use crate::kernels::Kernel;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
}

/// Reduces the trial times of one kernel.
///
/// The average sums every trial but divides by one less than the trial
/// count, as published STREAM-style results do. A single trial divides by
/// one.
pub fn summarize(times: &[f64]) -> Summary {
    let mut sum = 0.0;
    let mut min = f64::MAX;
    let mut max = 0.0_f64;
    for &t in times {
        sum += t;
        min = min.min(t);
        max = max.max(t);
    }
    let divisor = times.len().saturating_sub(1).max(1);
    Summary {
        avg: sum / divisor as f64,
        min,
        max,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub kernel: Kernel,
    pub summary: Summary,
    /// MB/s at the best time.
    pub bandwidth: f64,
    /// MFlop/s at the best time, absent for kernels without arithmetic.
    pub mflops: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    rows: Vec<Row>,
}

impl Report {
    /// Builds one row per kernel for vectors of length `n`.
    pub fn new(timings: &Timings, n: usize) -> Self {
        let rows = Kernel::ALL
            .iter()
            .map(|&kernel| {
                let summary = summarize(timings.of(kernel));
                let bandwidth = 1.0e-6 * kernel.bytes(n) / summary.min;
                let flops = kernel.flop_count(n);
                let mflops = if flops > 0.0 {
                    Some(1.0e-6 * flops / summary.min)
                } else {
                    None
                };
                Row {
                    kernel,
                    summary,
                    bandwidth,
                    mflops,
                }
            })
            .collect();
        Report { rows }
    }

    pub fn row(&self, kernel: Kernel) -> &Row {
        &self.rows[kernel.index()]
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", common::HLINE)?;
        writeln!(
            f,
            "Function      Rate(MB/s)  Rate(MFlop/s)  Avg time     Min time     Max time"
        )?;
        for row in &self.rows {
            let label = format!("{}:", row.kernel.label());
            let s = &row.summary;
            match row.mflops {
                Some(mflops) => writeln!(
                    f,
                    "{:<12}{:11.2} {:11.2} {:11.4}  {:11.4}  {:11.4}",
                    label, row.bandwidth, mflops, s.avg, s.min, s.max
                )?,
                None => writeln!(
                    f,
                    "{:<12}{:11.2}    -        {:11.4}  {:11.4}  {:11.4}",
                    label, row.bandwidth, s.avg, s.min, s.max
                )?,
            }
        }
        write!(f, "{}", common::HLINE)
    }
}
