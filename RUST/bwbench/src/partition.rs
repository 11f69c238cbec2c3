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

//! Static block partitioning of an index space across worker threads.

use std::ops::Range;

/// Index range owned by `thread_id` when `n` elements are split across
/// `num_threads` workers.
///
/// Every worker gets `n / num_threads` elements. The last `n % num_threads`
/// elements belong to nobody and are never touched by a kernel.
///
/// Panics if `num_threads` is zero.
pub fn partition(n: usize, thread_id: usize, num_threads: usize) -> Range<usize> {
    let chunk = n / num_threads;
    let start = thread_id * chunk;
    let end = n.min(start + chunk);
    start..end
}

/// Number of leading elements covered by some partition.
pub fn covered(n: usize, num_threads: usize) -> usize {
    num_threads * (n / num_threads)
}

/// Splits `data` into the per-thread views described by [`partition`].
pub fn split_mut(data: &mut [f64], num_threads: usize) -> Vec<&mut [f64]> {
    let n = data.len();
    let mut parts = Vec::with_capacity(num_threads);
    let mut rest = data;
    let mut offset = 0;
    for tid in 0..num_threads {
        let range = partition(n, tid, num_threads);
        let (_, tail) = std::mem::take(&mut rest).split_at_mut(range.start - offset);
        let (part, tail) = tail.split_at_mut(range.len());
        parts.push(part);
        rest = tail;
        offset = range.end;
    }
    parts
}
