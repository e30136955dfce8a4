use epiloc::{Audit, CacheStats, ClassifyResultVerbose, MemoStats, StructuredLocation};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_explain(res: &ClassifyResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Classifying: \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Probe ━━━", ansi::GRAY));
    println!("  {} {}", palette.paint("normalized:", ansi::BLUE), palette.bold(quote(&details.normalized)));
    println!("  {} {}", palette.paint("signals:", ansi::BLUE), list_or_dash(&details.signals, &palette));

    println!("\n{}", palette.paint("━━━ Cascade ━━━", ansi::GRAY));
    for name in &details.active_rules {
        let marker = if details.fired_rule == Some(*name) {
            palette.paint("✓", ansi::GREEN)
        } else if details.attempted_rules.contains(name) {
            palette.dim("✗")
        } else {
            palette.dim("·")
        };
        let label =
            if details.fired_rule == Some(*name) { palette.bold(palette.paint(*name, ansi::GREEN)) } else { palette.dim(*name) };
        println!("  {marker} {label}");
    }
    if details.fired_rule.is_none() {
        println!("  {}", palette.paint("no rule fired, fell back to detail", ansi::YELLOW));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    println!("  {} {}", palette.dim("rule:"), palette.bold(palette.paint(res.location.rule.as_str(), ansi::CYAN)));
    if details.cascade_rule != res.location.rule {
        println!(
            "  {} {}",
            palette.dim("post-processed from:"),
            palette.paint(details.cascade_rule.as_str(), ansi::YELLOW)
        );
    }
    print_fields(&res.location, &palette, "  ");

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    let m = &details.metrics;
    println!(
        "  Total: {}  │  Normalize: {}  │  Probe: {}  │  Cascade: {}",
        palette.paint(format!("{:?}", m.total), ansi::GREEN),
        palette.dim(format!("{:?}", m.normalize)),
        palette.dim(format!("{:?}", m.probe)),
        palette.paint(format!("{:?}", m.cascade), ansi::CYAN),
    );
    println!();
}

pub fn print_audit(audit: &Audit, cache: &CacheStats, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Classified {} locations", audit.total), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rules ━━━", ansi::GRAY));
    let width = audit.buckets.iter().map(|b| b.rule.as_str().len()).max().unwrap_or(0);
    for bucket in &audit.buckets {
        println!(
            "  {}  {}  {}",
            palette.paint(format!("{:<width$}", bucket.rule.as_str()), ansi::BLUE),
            palette.paint(format!("{:>7}", bucket.count), ansi::YELLOW),
            palette.dim(format!("{:5.1}%", percent(bucket.count, audit.total))),
        );
    }

    println!("\n{}", palette.paint("━━━ Samples ━━━", ansi::GRAY));
    for bucket in &audit.buckets {
        if bucket.samples.is_empty() {
            continue;
        }
        println!("  {}", palette.bold(palette.paint(bucket.rule.as_str(), ansi::CYAN)));
        for (raw, record) in &bucket.samples {
            println!("    {}", palette.paint(quote(raw), ansi::GREEN));
            print_fields(record, &palette, "      ");
        }
        if bucket.count > bucket.samples.len() {
            println!("    {}", palette.dim(format!("... +{} more", bucket.count - bucket.samples.len())));
        }
    }

    println!("\n{}", palette.paint("━━━ Cache ━━━", ansi::GRAY));
    print_cache("normalized", &cache.normalized, &palette);
    print_cache("results", &cache.results, &palette);
    println!();
}

fn print_fields(loc: &StructuredLocation, palette: &ansi::Palette, indent: &str) {
    let fields = [
        ("neighborhood", &loc.neighborhood),
        ("district", &loc.district),
        ("province", &loc.province),
        ("country", &loc.country),
        ("sea", &loc.sea),
        ("detail", &loc.detail),
    ];

    let mut any = false;
    for (label, value) in fields {
        if let Some(value) = value {
            any = true;
            println!("{indent}{} {}", palette.dim(format!("{label}:")), palette.paint(value, ansi::GREEN));
        }
    }
    if !any {
        println!("{indent}{}", palette.dim("(no fields)"));
    }
}

fn print_cache(name: &str, stats: &MemoStats, palette: &ansi::Palette) {
    let capacity = stats.capacity.map_or_else(|| "unbounded".to_string(), |c| c.to_string());
    println!(
        "  {}  {} {}  {} {}  {} {}  {} {}",
        palette.paint(format!("{name:<10}"), ansi::BLUE),
        palette.dim("hits:"),
        palette.paint(stats.hits.to_string(), ansi::GREEN),
        palette.dim("misses:"),
        palette.paint(stats.misses.to_string(), ansi::YELLOW),
        palette.dim("entries:"),
        palette.paint(format!("{}/{}", stats.len, capacity), ansi::CYAN),
        palette.dim("evicted:"),
        palette.paint(stats.evictions.to_string(), ansi::YELLOW),
    );
}

fn list_or_dash(items: &[&'static str], palette: &ansi::Palette) -> String {
    if items.is_empty() { palette.dim("-") } else { palette.paint(items.join(" | "), ansi::YELLOW) }
}

fn quote(s: &str) -> String {
    format!("\"{s}\"")
}

fn percent(count: usize, total: usize) -> f64 {
    if total == 0 { 0.0 } else { count as f64 * 100.0 / total as f64 }
}
