// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use bulwark_accumulator::accumulator::RangeCheckedAccumulator;
use bulwark_accumulator::operation::OperationRequest;
use bulwark_core::num::domain::NumericDomain;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

const STEP_COUNTS: [u64; 3] = [1_000, 100_000, 1_000_000];

fn bench_domain<T>(c: &mut Criterion, delta: T)
where
    T: NumericDomain,
{
    let accumulator = RangeCheckedAccumulator::new();
    let mut group = c.benchmark_group(format!("evaluate_{}", T::TYPE_NAME));

    for steps in STEP_COUNTS {
        group.throughput(Throughput::Elements(steps));

        let addition = OperationRequest::addition(T::ZERO, delta, steps);
        group.bench_with_input(BenchmarkId::new("addition", steps), &addition, |b, req| {
            b.iter(|| accumulator.evaluate(black_box(req)))
        });

        let subtraction = OperationRequest::subtraction(T::domain_max(), delta, steps);
        group.bench_with_input(
            BenchmarkId::new("subtraction", steps),
            &subtraction,
            |b, req| b.iter(|| accumulator.evaluate(black_box(req))),
        );
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    bench_domain::<i32>(c, 1);
    bench_domain::<u64>(c, 3);
    bench_domain::<f64>(c, 0.5);
}

criterion_group!(benches, bench_evaluate);
criterion_main!(benches);
