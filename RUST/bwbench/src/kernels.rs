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

//! The seven benchmarked vector kernels and their cost model.

use std::mem;

use crate::arrays::{ArrayId, Block};

pub const SCALAR: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kernel {
    Init,
    Copy,
    Update,
    Triad,
    Daxpy,
    STriad,
    SDaxpy,
}

impl Kernel {
    /// Execution order. Later kernels consume what earlier ones left in the
    /// arrays, so reordering changes the final values.
    pub const ALL: [Kernel; 7] = [
        Kernel::Init,
        Kernel::Copy,
        Kernel::Update,
        Kernel::Triad,
        Kernel::Daxpy,
        Kernel::STriad,
        Kernel::SDaxpy,
    ];

    /// Position in [`Kernel::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Kernel::Init => "Init",
            Kernel::Copy => "Copy",
            Kernel::Update => "Update",
            Kernel::Triad => "Triad",
            Kernel::Daxpy => "Daxpy",
            Kernel::STriad => "STriad",
            Kernel::SDaxpy => "SDaxpy",
        }
    }

    /// Arrays loaded per element.
    pub fn reads(self) -> &'static [ArrayId] {
        match self {
            Kernel::Init => &[],
            Kernel::Copy => &[ArrayId::A],
            Kernel::Update => &[ArrayId::A],
            Kernel::Triad => &[ArrayId::B, ArrayId::C],
            Kernel::Daxpy => &[ArrayId::A, ArrayId::B],
            Kernel::STriad => &[ArrayId::B, ArrayId::C, ArrayId::D],
            Kernel::SDaxpy => &[ArrayId::A, ArrayId::B, ArrayId::C],
        }
    }

    /// Array stored per element.
    pub fn writes(self) -> ArrayId {
        match self {
            Kernel::Init => ArrayId::B,
            Kernel::Copy => ArrayId::C,
            _ => ArrayId::A,
        }
    }

    /// Words moved per element: every load plus the one store.
    pub fn words(self) -> usize {
        self.reads().len() + 1
    }

    /// Floating point operations per element.
    pub fn flops(self) -> usize {
        match self {
            Kernel::Init | Kernel::Copy => 0,
            Kernel::Update => 1,
            Kernel::Triad | Kernel::Daxpy | Kernel::STriad | Kernel::SDaxpy => 2,
        }
    }

    /// Bytes moved by one pass over `n` elements.
    pub fn bytes(self, n: usize) -> f64 {
        (self.words() * mem::size_of::<f64>()) as f64 * n as f64
    }

    /// Floating point operations in one pass over `n` elements.
    pub fn flop_count(self, n: usize) -> f64 {
        self.flops() as f64 * n as f64
    }

    pub fn apply(self, block: &mut Block, scalar: f64) {
        match self {
            Kernel::Init => {
                for bx in block.b.iter_mut() {
                    *bx = scalar;
                }
            }
            Kernel::Copy => {
                block.c.copy_from_slice(&block.a[..]);
            }
            Kernel::Update => {
                for ax in block.a.iter_mut() {
                    *ax *= scalar;
                }
            }
            Kernel::Triad => {
                for ((ax, &bx), &cx) in block.a.iter_mut().zip(block.b.iter()).zip(block.c.iter()) {
                    *ax = bx + scalar * cx;
                }
            }
            Kernel::Daxpy => {
                for (ax, &bx) in block.a.iter_mut().zip(block.b.iter()) {
                    *ax += scalar * bx;
                }
            }
            Kernel::STriad => {
                for (((ax, &bx), &cx), &dx) in block
                    .a
                    .iter_mut()
                    .zip(block.b.iter())
                    .zip(block.c.iter())
                    .zip(block.d.iter())
                {
                    *ax = bx + dx * cx;
                }
            }
            Kernel::SDaxpy => {
                for ((ax, &bx), &cx) in block.a.iter_mut().zip(block.b.iter()).zip(block.c.iter()) {
                    *ax += bx * cx;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrays::Arrays;

    const N: usize = 16;

    // Distinct per-array values so any stray read or write shows up.
    fn seeded() -> Arrays {
        let mut arrays = Arrays::allocate(N);
        for i in 0..N {
            arrays.a[i] = 1.0 + i as f64;
            arrays.b[i] = 100.0 + i as f64;
            arrays.c[i] = 0.25 * i as f64;
            arrays.d[i] = -2.0 - i as f64;
        }
        arrays
    }

    fn run(kernel: Kernel, arrays: &mut Arrays) {
        for mut block in arrays.blocks(1) {
            kernel.apply(&mut block, SCALAR);
        }
    }

    fn assert_cost(kernel: Kernel, words: usize, flops: usize) {
        assert_eq!(kernel.words(), words, "{} words", kernel.label());
        assert_eq!(kernel.flops(), flops, "{} flops", kernel.label());
    }

    // Only the declared output changes, and it is a function of the declared
    // inputs alone.
    fn assert_access_sets(kernel: Kernel) {
        let before = seeded();
        let mut after = seeded();
        run(kernel, &mut after);
        for id in ArrayId::ALL {
            if id != kernel.writes() {
                assert_eq!(before.get(id), after.get(id), "{} wrote {}", kernel.label(), id);
            }
        }

        for id in ArrayId::ALL {
            if kernel.reads().contains(&id) || id == kernel.writes() {
                continue;
            }
            let mut perturbed = seeded();
            match id {
                ArrayId::A => perturbed.a.fill(7.0),
                ArrayId::B => perturbed.b.fill(7.0),
                ArrayId::C => perturbed.c.fill(7.0),
                ArrayId::D => perturbed.d.fill(7.0),
            }
            run(kernel, &mut perturbed);
            assert_eq!(
                after.get(kernel.writes()),
                perturbed.get(kernel.writes()),
                "{} read {}",
                kernel.label(),
                id
            );
        }
    }

    #[test]
    fn init() {
        assert_cost(Kernel::Init, 1, 0);
        assert_access_sets(Kernel::Init);
        let mut arrays = seeded();
        run(Kernel::Init, &mut arrays);
        assert!(arrays.b.iter().all(|&x| x == SCALAR));
    }

    #[test]
    fn copy() {
        assert_cost(Kernel::Copy, 2, 0);
        assert_access_sets(Kernel::Copy);
        let mut arrays = seeded();
        run(Kernel::Copy, &mut arrays);
        assert_eq!(arrays.c, arrays.a);
    }

    #[test]
    fn update() {
        assert_cost(Kernel::Update, 2, 1);
        assert_access_sets(Kernel::Update);
        let before = seeded();
        let mut arrays = seeded();
        run(Kernel::Update, &mut arrays);
        for i in 0..N {
            assert_eq!(arrays.a[i], before.a[i] * SCALAR);
        }
    }

    #[test]
    fn triad() {
        assert_cost(Kernel::Triad, 3, 2);
        assert_access_sets(Kernel::Triad);
        let mut arrays = seeded();
        run(Kernel::Triad, &mut arrays);
        for i in 0..N {
            assert_eq!(arrays.a[i], arrays.b[i] + SCALAR * arrays.c[i]);
        }
    }

    #[test]
    fn daxpy() {
        assert_cost(Kernel::Daxpy, 3, 2);
        assert_access_sets(Kernel::Daxpy);
        let before = seeded();
        let mut arrays = seeded();
        run(Kernel::Daxpy, &mut arrays);
        for i in 0..N {
            assert_eq!(arrays.a[i], before.a[i] + SCALAR * before.b[i]);
        }
    }

    #[test]
    fn striad() {
        assert_cost(Kernel::STriad, 4, 2);
        assert_access_sets(Kernel::STriad);
        let mut arrays = seeded();
        run(Kernel::STriad, &mut arrays);
        for i in 0..N {
            assert_eq!(arrays.a[i], arrays.b[i] + arrays.d[i] * arrays.c[i]);
        }
    }

    #[test]
    fn sdaxpy() {
        assert_cost(Kernel::SDaxpy, 4, 2);
        assert_access_sets(Kernel::SDaxpy);
        let before = seeded();
        let mut arrays = seeded();
        run(Kernel::SDaxpy, &mut arrays);
        for i in 0..N {
            assert_eq!(arrays.a[i], before.a[i] + before.b[i] * before.c[i]);
        }
    }

    #[test]
    fn traffic_per_pass() {
        assert_eq!(Kernel::Copy.bytes(1000), 16_000.0);
        assert_eq!(Kernel::SDaxpy.bytes(10), 320.0);
        assert_eq!(Kernel::Triad.flop_count(1000), 2000.0);
        assert_eq!(Kernel::Init.flop_count(1000), 0.0);
    }

    #[test]
    fn index_matches_order() {
        for (i, kernel) in Kernel::ALL.iter().enumerate() {
            assert_eq!(kernel.index(), i);
        }
    }

    #[test]
    fn declared_order() {
        let labels: Vec<_> = Kernel::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(
            labels,
            ["Init", "Copy", "Update", "Triad", "Daxpy", "STriad", "SDaxpy"]
        );
    }
}
