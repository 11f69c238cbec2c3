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

use bwbench::driver::run_trials;
use bwbench::partition::partition;
use bwbench::{covered, Arrays, Executor};
use proptest::prelude::*;

fn sizes() -> impl Strategy<Value = (usize, usize)> {
    (0usize..5_000, 1usize..64)
}

proptest! {
    /// Property: ranges are ordered, disjoint and tile [0, T * (N / T)) exactly
    #[test]
    fn partitions_tile_the_covered_prefix((n, threads) in sizes()) {
        let mut next = 0;
        for tid in 0..threads {
            let range = partition(n, tid, threads);
            prop_assert!(range.start <= range.end);
            prop_assert_eq!(range.start, next);
            next = range.end;
        }
        prop_assert_eq!(next, covered(n, threads));
        prop_assert_eq!(next, threads * (n / threads));
        prop_assert!(n - next < threads);
    }

    /// Property: block sizes follow the partition
    #[test]
    fn blocks_follow_partition((n, threads) in sizes()) {
        let mut arrays = Arrays::new(n);
        let blocks = arrays.blocks(threads);
        prop_assert_eq!(blocks.len(), threads);
        for (tid, block) in blocks.iter().enumerate() {
            prop_assert_eq!(block.len(), partition(n, tid, threads).len());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Property: thread count does not change any covered element
    #[test]
    fn results_independent_of_thread_count(n in 1usize..2_000, threads in 2usize..9) {
        prop_assume!(n >= threads);
        let serial = Executor::new(1).unwrap();
        let parallel = Executor::new(threads).unwrap();

        let mut expected = Arrays::new(n);
        let mut actual = Arrays::new(n);
        run_trials(&serial, &mut expected, 2);
        run_trials(&parallel, &mut actual, 2);

        let m = covered(n, threads);
        prop_assert_eq!(&expected.a[..m], &actual.a[..m]);
        prop_assert_eq!(&expected.b[..m], &actual.b[..m]);
        prop_assert_eq!(&expected.c[..m], &actual.c[..m]);
        prop_assert_eq!(&expected.d[..m], &actual.d[..m]);
    }
}
