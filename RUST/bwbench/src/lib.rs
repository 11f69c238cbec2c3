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

//! Multi-threaded memory bandwidth benchmark.
//!
//! Seven vector kernels run over four shared arrays, each invocation split
//! into disjoint blocks across a fixed set of worker threads. The kernel
//! sequence is repeated several times, the best time per kernel is turned
//! into MB/s and MFlop/s, and the final arrays are checked against a scalar
//! replay of the same arithmetic.

pub mod arrays;
pub mod driver;
pub mod error;
pub mod executor;
pub mod kernels;
pub mod partition;
pub mod stats;
pub mod validate;

pub use arrays::{ArrayId, Arrays, Block};
pub use driver::{Benchmark, Timings, NTIMES};
pub use error::{Error, Result};
pub use executor::Executor;
pub use kernels::{Kernel, SCALAR};
pub use partition::{covered, partition};
pub use stats::{Report, Summary};
pub use validate::Validation;
