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

///////////////////////////////////////////////
//
// NAME:    bwbench
//
// PURPOSE: To measure sustained memory bandwidth and floating point
//          throughput of simple vector kernels executed by a fixed
//          number of worker threads.
//
// USAGE:   bwbench [--nt <# threads>] [-s <vector length>] [-n <# trials>]
//
//          The output consists of timing statistics for every kernel,
//          followed by diagnostics to make sure the kernels worked.
//
// NOTES:   Bandwidth is determined as the number of words read, plus the
//          number of words written, times the size of the words, divided
//          by the best execution time over all trials.
//
// HISTORY: This code is loosely based on the Stream benchmark by John
//          McCalpin, but does not follow all the Stream rules. Hence,
//          reported results should not be associated with Stream in
//          external publications
//
///////////////////////////////////////////////

use std::process;

use clap::Parser;
use log::debug;

use bwbench::{Benchmark, Kernel, NTIMES};

#[derive(Parser, Debug)]
#[command(version, about = "Multi-threaded memory bandwidth benchmark", long_about = None)]
struct Args {
    /// Number of threads
    #[arg(long = "nt", value_name = "THREADS", default_value_t = 4,
          value_parser = clap::value_parser!(u32).range(1..))]
    num_threads: u32,

    /// Number of elements per vector
    #[arg(short, long, value_name = "N", default_value_t = 40_000_000)]
    size: usize,

    /// Number of timed trials per kernel
    #[arg(short = 'n', long, value_name = "TRIALS", default_value_t = NTIMES as u32,
          value_parser = clap::value_parser!(u32).range(1..))]
    iterations: u32,
}

fn run(args: &Args) -> bwbench::Result<()> {
    let num_threads = args.num_threads as usize;
    let size = args.size;
    let ntimes = args.iterations as usize;

    for kernel in Kernel::ALL {
        debug!(
            "{}: {:8.2} MB",
            kernel.label(),
            kernel.bytes(size) * 1.0e-6
        );
    }
    debug!("Timer resolution {:?}", common::timer_resolution());

    let mut bench = Benchmark::new(size, num_threads, ntimes)?;
    println!("{}", common::HLINE);
    println!(
        "Total allocated datasize: {:8.2} MB",
        bench.arrays().bytes() as f64 * 1.0e-6
    );
    println!("{}", common::HLINE);
    println!(
        "Running with {} threads, {} trials per kernel",
        bench.num_threads(),
        ntimes
    );

    let timings = bench.run();
    println!("{}", bench.report(&timings));

    println!("{}", bench.validate());
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("ERROR: {}", e);
        process::exit(1);
    }
}
