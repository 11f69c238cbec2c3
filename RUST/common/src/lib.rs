/*
Copyright (c) 2015, Intel Corporation

Redistribution and use in source and binary forms, with or without
modification, are permitted provided that the following conditions
are met:

* Redistributions of source code must retain the above copyright
      notice, this list of conditions and the following disclaimer.
* Redistributions in binary form must reproduce the above
      copyright notice, this list of conditions and the following
      disclaimer in the documentation and/or other materials provided
      with the distribution.
* Neither the name of Intel Corporation nor the names of its
      contributors may be used to endorse or promote products
      derived from this software without specific prior written
      permission.

THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
"AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS
FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE
COPYRIGHT OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT,
INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING,
BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES;
LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT
LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN
ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
POSSIBILITY OF SUCH DAMAGE.
*/

//! Helpers shared by the benchmark kernels: timing conversions and
//! checksum tolerance.

use std::time::{Duration, Instant};

pub const HLINE: &str =
    "----------------------------------------------------------------------------";

/// Relative tolerance used when comparing checksums.
pub const EPSILON: f64 = 1.0e-8;

const RESOLUTION_SAMPLES: usize = 20;

/// Converts a measured interval to seconds with nanosecond resolution.
pub fn seconds(dt: Duration) -> f64 {
    let dtt: u64 = dt.as_secs() * 1_000_000_000 + dt.subsec_nanos() as u64;
    dtt as f64 * 1.0e-9
}

/// Relative difference of `expected` with respect to `observed`.
pub fn relative_error(expected: f64, observed: f64) -> f64 {
    (expected - observed).abs() / observed
}

/// Smallest nonzero step the monotonic clock reports, sampled a few times.
pub fn timer_resolution() -> Duration {
    let mut min_delta = Duration::MAX;
    for _ in 0..RESOLUTION_SAMPLES {
        let t0 = Instant::now();
        let mut t1 = Instant::now();
        while t1 == t0 {
            t1 = Instant::now();
        }
        min_delta = min_delta.min(t1 - t0);
    }
    min_delta
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_keeps_subsecond_part() {
        let dt = Duration::new(2, 500_000_000);
        assert!((seconds(dt) - 2.5).abs() < 1e-12);
        assert_eq!(seconds(Duration::ZERO), 0.0);
    }

    #[test]
    fn relative_error_is_scaled_by_observed() {
        assert_eq!(relative_error(110.0, 100.0), 0.1);
        assert_eq!(relative_error(90.0, 100.0), 0.1);
        assert_eq!(relative_error(4.0, 4.0), 0.0);
    }

    #[test]
    fn timer_resolution_is_positive() {
        let res = timer_resolution();
        assert!(res > Duration::ZERO);
        assert!(res < Duration::from_millis(100));
    }
}
