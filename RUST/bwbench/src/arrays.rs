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

//! The four benchmark vectors and their per-thread views.

use std::fmt;
use std::mem;

use crate::partition::{covered, split_mut};

pub const INIT_A: f64 = 2.0;
pub const INIT_B: f64 = 2.0;
pub const INIT_C: f64 = 0.5;
pub const INIT_D: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayId {
    A,
    B,
    C,
    D,
}

impl ArrayId {
    pub const ALL: [ArrayId; 4] = [ArrayId::A, ArrayId::B, ArrayId::C, ArrayId::D];
}

impl fmt::Display for ArrayId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ArrayId::A => "a",
            ArrayId::B => "b",
            ArrayId::C => "c",
            ArrayId::D => "d",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug)]
pub struct Arrays {
    pub a: Vec<f64>,
    pub b: Vec<f64>,
    pub c: Vec<f64>,
    pub d: Vec<f64>,
}

impl Arrays {
    /// Allocates zeroed vectors of length `n`. Pages are not touched until
    /// the first write, so initializing through the worker pool places them
    /// near the threads that use them.
    pub fn allocate(n: usize) -> Self {
        Arrays {
            a: vec![0.0; n],
            b: vec![0.0; n],
            c: vec![0.0; n],
            d: vec![0.0; n],
        }
    }

    /// Allocates and initializes serially.
    pub fn new(n: usize) -> Self {
        Arrays {
            a: vec![INIT_A; n],
            b: vec![INIT_B; n],
            c: vec![INIT_C; n],
            d: vec![INIT_D; n],
        }
    }

    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    /// Total bytes held by the four vectors.
    pub fn bytes(&self) -> usize {
        4 * self.len() * mem::size_of::<f64>()
    }

    pub fn get(&self, id: ArrayId) -> &[f64] {
        match id {
            ArrayId::A => &self.a,
            ArrayId::B => &self.b,
            ArrayId::C => &self.c,
            ArrayId::D => &self.d,
        }
    }

    /// Sum of the first `len` elements of one vector.
    pub fn checksum(&self, id: ArrayId, len: usize) -> f64 {
        self.get(id)[..len].iter().sum()
    }

    /// Splits all four vectors along the same partition boundaries. Block
    /// `i` belongs to thread `i`; no two blocks alias.
    pub fn blocks(&mut self, num_threads: usize) -> Vec<Block<'_>> {
        let a = split_mut(&mut self.a, num_threads);
        let b = split_mut(&mut self.b, num_threads);
        let c = split_mut(&mut self.c, num_threads);
        let d = split_mut(&mut self.d, num_threads);
        a.into_iter()
            .zip(b)
            .zip(c)
            .zip(d)
            .map(|(((a, b), c), d)| Block { a, b, c, d })
            .collect()
    }

    /// Sets the elements no partition covers to their initial values.
    pub fn initialize_tail(&mut self, num_threads: usize) {
        let start = covered(self.len(), num_threads);
        self.a[start..].fill(INIT_A);
        self.b[start..].fill(INIT_B);
        self.c[start..].fill(INIT_C);
        self.d[start..].fill(INIT_D);
    }
}

/// One thread's slice of every vector.
#[derive(Debug)]
pub struct Block<'a> {
    pub a: &'a mut [f64],
    pub b: &'a mut [f64],
    pub c: &'a mut [f64],
    pub d: &'a mut [f64],
}

impl Block<'_> {
    pub fn len(&self) -> usize {
        self.a.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty()
    }

    pub fn initialize(&mut self) {
        self.a.fill(INIT_A);
        self.b.fill(INIT_B);
        self.c.fill(INIT_C);
        self.d.fill(INIT_D);
    }
}
