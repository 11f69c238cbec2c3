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

//! Checksum validation against a scalar replay of the kernel sequence.

use std::fmt;

use log::debug;

use crate::arrays::{ArrayId, Arrays, INIT_A, INIT_B, INIT_C, INIT_D};
use crate::kernels::SCALAR;

/// Per-element values every covered index should hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expected {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl Expected {
    pub fn get(&self, id: ArrayId) -> f64 {
        match id {
            ArrayId::A => self.a,
            ArrayId::B => self.b,
            ArrayId::C => self.c,
            ArrayId::D => self.d,
        }
    }
}

/// Replays `ntimes` trials of the kernel sequence on single values. Each
/// step matches the corresponding kernel's operand order exactly.
// Update's and Daxpy's results are overwritten by the next step, as in the arrays.
#[allow(unused_assignments)]
pub fn expected(ntimes: usize) -> Expected {
    let scalar = SCALAR;
    let mut aj = INIT_A;
    let mut bj = INIT_B;
    let mut cj = INIT_C;
    let dj = INIT_D;

    for _k in 0..ntimes {
        bj = scalar;
        cj = aj;
        aj *= scalar;
        aj = bj + scalar * cj;
        aj += scalar * bj;
        aj = bj + dj * cj;
        aj += bj * cj;
    }

    Expected {
        a: aj,
        b: bj,
        c: cj,
        d: dj,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Validation {
    Validates,
    Failed {
        array: ArrayId,
        expected: f64,
        observed: f64,
    },
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Validates)
    }
}

impl fmt::Display for Validation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Validation::Validates => write!(f, "Solution Validates"),
            Validation::Failed {
                array,
                expected,
                observed,
            } => {
                writeln!(f, "Failed Validation on array {}[]", array)?;
                writeln!(f, "        Expected  : {:.6} ", expected)?;
                write!(f, "        Observed  : {:.6} ", observed)
            }
        }
    }
}

/// Compares the sum over the first `covered` elements of each array with
/// the replayed value times `covered`. Arrays are checked in order and the
/// first mismatch is reported.
pub fn validate(arrays: &Arrays, covered: usize, ntimes: usize) -> Validation {
    let per_element = expected(ntimes);
    let n = covered as f64;

    let checks: Vec<(ArrayId, f64, f64)> = ArrayId::ALL
        .iter()
        .map(|&id| (id, per_element.get(id) * n, arrays.checksum(id, covered)))
        .collect();

    for (id, expected, observed) in &checks {
        debug!("array {}: expected {:.6} observed {:.6}", id, expected, observed);
    }

    for (array, expected, observed) in checks {
        if common::relative_error(expected, observed) > common::EPSILON {
            return Validation::Failed {
                array,
                expected,
                observed,
            };
        }
    }
    Validation::Validates
}
