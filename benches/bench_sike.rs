mod benchmark_sike {
    use sikep503::protocols::sidh::{KeyVariant, PrivateKey};
    use sikep503::protocols::sike::{decapsulate, encapsulate};
    use sikep503::utilities::drng::DRNG;

    use criterion::{black_box, criterion_group, Criterion};
    use std::time::Duration;

    fn benchmark_keygen(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("keygen".as_bytes());
        let bench_id = "SIKE/p503 keypair generation";
        c.bench_function(bench_id, |b| {
            b.iter(|| {
                let mut prv = PrivateKey::new(KeyVariant::Sike);
                prv.generate(&mut rng).unwrap();
                prv.generate_public_key()
            })
        });
    }

    fn benchmark_encapsulate(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("encapsulate".as_bytes());
        let mut prv = PrivateKey::new(KeyVariant::Sike);
        prv.generate(&mut rng).unwrap();
        let public = prv.generate_public_key();

        let bench_id = "SIKE/p503 encapsulation";
        c.bench_function(bench_id, |b| {
            b.iter(|| encapsulate(&mut rng, black_box(&public)).unwrap())
        });
    }

    fn benchmark_decapsulate(c: &mut Criterion) {
        let mut rng = DRNG::from_seed("decapsulate".as_bytes());
        let mut prv = PrivateKey::new(KeyVariant::Sike);
        prv.generate(&mut rng).unwrap();
        let public = prv.generate_public_key();
        let (ctext, _) = encapsulate(&mut rng, &public).unwrap();

        let bench_id = "SIKE/p503 decapsulation";
        c.bench_function(bench_id, |b| {
            b.iter(|| decapsulate(black_box(&prv), black_box(&public), black_box(&ctext)).unwrap())
        });
    }

    criterion_group! {
        name = sike_benchmarks;
        config = Criterion::default().measurement_time(Duration::from_secs(3));
        targets = benchmark_keygen, benchmark_encapsulate, benchmark_decapsulate
    }
}

fn main() {
    benchmark_sike::sike_benchmarks();
}
