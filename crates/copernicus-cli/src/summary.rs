use console::Style;
use copernicus_core::pipeline::config::RankingConfig;
use copernicus_core::pipeline::RankedCandidate;
use copernicus_core::scoring::ScoringMode;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_ranking_summary(config: &RankingConfig, mode: &ScoringMode, candidates: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Copernicus Ranking"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(18)));
    println!();
    println!(
        "  {:<14}{}",
        s.label.apply_to("Sampler"),
        s.path.apply_to(&config.sampler.endpoint)
    );
    let resolution = if config.sampler.resolution_level < 0 {
        "full".to_string()
    } else {
        config.sampler.resolution_level.to_string()
    };
    println!("  {:<14}{}", s.label.apply_to("Resolution"), s.value.apply_to(resolution));
    println!(
        "  {:<14}{}",
        s.label.apply_to("Retries"),
        s.value.apply_to(config.sampler.retries)
    );
    println!("  {:<14}{}", s.label.apply_to("Mode"), s.method.apply_to(mode));
    println!("  {:<14}{}", s.label.apply_to("Candidates"), s.value.apply_to(candidates));
    println!();
}

pub fn print_ranking(ranked: &[RankedCandidate], labels: &[String]) {
    let s = Styles::new();

    println!("{:>5}  {:>9}  {:>8}  {}", "Rank", "Candidate", "Distance", "Image");
    println!("{}", "-".repeat(40));
    for (rank, entry) in ranked.iter().enumerate() {
        let label = labels.get(entry.id.0).map(String::as_str).unwrap_or("?");
        println!(
            "{:>5}  {:>9}  {:>8}  {}",
            rank + 1,
            entry.id.to_string(),
            entry.score,
            s.path.apply_to(label)
        );
    }
}
