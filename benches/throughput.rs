use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use promocheck::{Arguments, CurrentWeather, Restrictions, WeatherError, WeatherProvider};
use serde_json::json;

struct FixedWeather;

impl WeatherProvider for FixedWeather {
    fn current_weather(&self, _town: &str) -> Result<CurrentWeather, WeatherError> {
        Ok(CurrentWeather {
            label: "Clouds".into(),
            temperature: 11.0,
        })
    }
}

fn build_shared_restrictions() -> Arc<Restrictions> {
    let document = json!([
        {"date": {"after": "2000-01-01", "before": "2999-01-01"}},
        {"or": [
            {"age": {"eq": 40}},
            {"and": [
                {"age": {"lt": 30, "gt": 15}},
                {"weather": {"is": "clear", "temp": {"gt": 15}}}
            ]}
        ]}
    ]);
    Arc::new(Restrictions::from_json(&document).unwrap())
}

fn bench_throughput(c: &mut Criterion) {
    let thread_counts = [1, 2, 4, 8];

    let mut group = c.benchmark_group("throughput");
    group.measurement_time(Duration::from_secs(5));

    for &threads in &thread_counts {
        let restrictions = build_shared_restrictions();
        let arguments = Arguments::new().with_age(25).with_town("Brest");

        group.bench_function(&format!("{threads}_threads"), |b| {
            b.iter_custom(|iters| {
                let per_thread = iters / threads as u64;
                let handles: Vec<_> = (0..threads)
                    .map(|_| {
                        let shared = Arc::clone(&restrictions);
                        let args = arguments.clone();
                        thread::spawn(move || {
                            let start = Instant::now();
                            for _ in 0..per_thread {
                                let _ = promocheck::evaluate_restrictions(&shared, &args, &FixedWeather);
                            }
                            start.elapsed()
                        })
                    })
                    .collect();

                handles
                    .into_iter()
                    .map(|h| h.join().unwrap())
                    .max()
                    .unwrap_or(Duration::ZERO)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_throughput);
criterion_main!(benches);
