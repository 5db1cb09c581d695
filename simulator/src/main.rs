use hiring_selection::service::SelectionService;
use hiring_selection::NewCandidate;
use rand::{rngs::SmallRng, Rng, SeedableRng};
use std::io::stdin;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Either generate a random pool of the requested size, or read
    // `name,experience,education,interview,age` rows from stdin.
    let pool: Vec<NewCandidate> = match std::env::args().nth(1) {
        Some(size) => {
            let size: usize = size.parse().expect("pool size");
            let mut rng = SmallRng::from_entropy();
            (0..size)
                .map(|i| NewCandidate {
                    name: format!("candidate-{i}"),
                    experience_years: rng.gen_range(0..=25),
                    education_level: rng.gen_range(1..=5),
                    interview_score: rng.gen_range(30..=100),
                    age_years: rng.gen_range(18..=65),
                })
                .collect()
        }
        None => {
            let header = "name,experience,education,interview,age";
            stdin()
                .lines()
                .filter_map(|line| {
                    let line = line.unwrap();
                    if line.starts_with(header) || line.trim().is_empty() {
                        return None;
                    }
                    let fields = line.split(',').collect::<Vec<&str>>();
                    Some(NewCandidate {
                        name: fields[0].trim().to_owned(),
                        experience_years: fields[1].trim().parse().expect("experience"),
                        education_level: fields[2].trim().parse().expect("education"),
                        interview_score: fields[3].trim().parse().expect("interview"),
                        age_years: fields[4].trim().parse().expect("age"),
                    })
                })
                .collect()
        }
    };

    let mut service = SelectionService::new();
    let t0 = Instant::now();
    let results = service.load(pool).expect("scoring failed");
    let scoring_us = Instant::now().duration_since(t0).as_micros();

    println!("rank,name,closeness,status");
    for result in &results {
        println!(
            "{},{},{:.3},{}",
            result.rank,
            result.name,
            result.closeness,
            result.status.as_str()
        );
    }

    let stats = service.stats();
    println!();
    println!("candidates: {}", stats.total);
    println!("recommended: {}", stats.recommended);
    println!("average_score: {:.3}", stats.average_score);
    println!("top_score: {:.3}", stats.top_score);
    println!("scoring_μs: {scoring_us}");
}
