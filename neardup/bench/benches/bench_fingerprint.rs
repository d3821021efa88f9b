use std::time::Duration;

use rand::{thread_rng, Rng};

use criterion::{
    criterion_group, criterion_main, measurement::WallTime, BenchmarkGroup, Criterion, SamplingMode,
};

use neardup::{compare, Document, Fingerprint, Fingerprinter};

const SAMPLE_SIZE: usize = 10;
const WARM_UP_TIME: Duration = Duration::from_secs(3);
const MEASURE_TIME: Duration = Duration::from_secs(10);

const NUM_DOCUMENTS: usize = 100;
const WORDS_PER_DOCUMENT: [usize; 3] = [100, 1000, 10000];
const VOCABULARY: usize = 5000;

fn random_page<R: Rng>(rng: &mut R, num_words: usize) -> String {
    let mut body = String::new();
    for _ in 0..num_words {
        body.push_str(&format!("w{} ", rng.gen_range(0..VOCABULARY)));
    }
    format!(
        "<html><head><title>t</title><style>p {{ color: red }}</style></head>\
         <body><header>nav</header><div id=\"ad-banner\">ad</div>\
         <p>{body}</p><script>var x = 1;</script><footer>f</footer></body></html>"
    )
}

fn criterion_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);
    group.sampling_mode(SamplingMode::Flat);

    let mut rng = thread_rng();
    for &num_words in &WORDS_PER_DOCUMENT {
        let documents: Vec<_> = (0..NUM_DOCUMENTS)
            .map(|i| Document::new(format!("doc{i}"), random_page(&mut rng, num_words)))
            .collect();
        add_pipeline_benches(&mut group, &documents, num_words);
    }
}

fn add_pipeline_benches(
    group: &mut BenchmarkGroup<WallTime>,
    documents: &[Document],
    num_words: usize,
) {
    let fingerprinter = Fingerprinter::default();
    group.bench_function(format!("process_all/{num_words}"), |b| {
        b.iter(|| {
            if fingerprinter.process_all(documents).len() == usize::MAX {
                panic!();
            }
        });
    });
    group.bench_function(format!("process_all_in_parallel/{num_words}"), |b| {
        b.iter(|| {
            if fingerprinter.process_all_in_parallel(documents).len() == usize::MAX {
                panic!();
            }
        });
    });
}

fn criterion_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");
    group.sample_size(SAMPLE_SIZE);
    group.warm_up_time(WARM_UP_TIME);
    group.measurement_time(MEASURE_TIME);

    let mut rng = thread_rng();
    let fingerprints: Vec<_> = (0..1000).map(|_| Fingerprint(rng.gen())).collect();
    group.bench_function("all_pairs/1000", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for (i, &x) in fingerprints.iter().enumerate() {
                for &y in &fingerprints[i + 1..] {
                    total += u64::from(compare(x, y).distance);
                }
            }
            if total == u64::MAX {
                panic!();
            }
        });
    });
}

criterion_group!(benches, criterion_pipeline, criterion_compare);
criterion_main!(benches);
