use std::io::{self, Write};
use std::time::Duration;

use textsearch::Algorithm;

use crate::harness::{ArticleResult, CaseResult, SearchKind};

const WIDTH: usize = 80;

pub struct Report {
    pub articles: Vec<ArticleResult>,
}

/// Entry with the smallest duration; ties keep the earlier algorithm.
pub fn fastest(timings: &[(Algorithm, Duration)]) -> Option<(Algorithm, Duration)> {
    timings
        .iter()
        .copied()
        .reduce(|best, cur| if cur.1 < best.1 { cur } else { best })
}

impl Report {
    fn cases(&self) -> impl Iterator<Item = &CaseResult> {
        self.articles.iter().flat_map(|a| a.cases.iter())
    }

    fn sum_by_algorithm<'a>(cases: impl Iterator<Item = &'a CaseResult>) -> Vec<(Algorithm, Duration)> {
        let mut sums: Vec<(Algorithm, Duration)> =
            Algorithm::ALL.iter().map(|&a| (a, Duration::ZERO)).collect();
        for case in cases {
            for &(algo, d) in &case.timings {
                if let Some(slot) = sums.iter_mut().find(|(a, _)| *a == algo) {
                    slot.1 += d;
                }
            }
        }
        sums
    }

    /// Total time per algorithm across every case.
    pub fn totals(&self) -> Vec<(Algorithm, Duration)> {
        Self::sum_by_algorithm(self.cases())
    }

    /// Mean time per algorithm over the cases of one kind.
    pub fn averages(&self, kind: SearchKind) -> Vec<(Algorithm, Duration)> {
        let count = self.cases().filter(|c| c.kind == kind).count() as u32;
        Self::sum_by_algorithm(self.cases().filter(|c| c.kind == kind))
            .into_iter()
            .map(|(a, d)| (a, if count == 0 { d } else { d / count }))
            .collect()
    }

    /// Percent of the KMP total each algorithm took.
    pub fn relative_to_kmp(&self) -> Vec<(Algorithm, Option<f64>)> {
        let totals = self.totals();
        let base = totals
            .iter()
            .find(|(a, _)| *a == Algorithm::Kmp)
            .map(|&(_, d)| d.as_secs_f64())
            .unwrap_or_default();

        totals
            .into_iter()
            .map(|(a, d)| {
                let pct = (base > 0.0).then(|| d.as_secs_f64() / base * 100.0);
                (a, pct)
            })
            .collect()
    }

    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (idx, article) in self.articles.iter().enumerate() {
            writeln!(out, "ARTICLE {}: {} ({} units)", idx + 1, article.name, article.length)?;
            writeln!(out, "{}", "-".repeat(WIDTH))?;

            for case in &article.cases {
                render_case(out, case)?;
            }

            writeln!(out, "\n{}", "=".repeat(WIDTH))?;
        }

        writeln!(out, "\nOVERALL CONCLUSIONS")?;
        writeln!(out, "{}", "=".repeat(WIDTH))?;

        let totals = self.totals();
        writeln!(out, "\nTotal time across all tests:")?;
        render_timings(out, &totals, "")?;

        if let Some((algo, d)) = fastest(&totals) {
            writeln!(out, "\nOVERALL FASTEST: {}", algo)?;
            writeln!(out, "   Time: {:.6} sec", d.as_secs_f64())?;
        }

        writeln!(out, "\nRelative speed (compared to KMP):")?;
        for (algo, pct) in self.relative_to_kmp() {
            match pct {
                Some(pct) => writeln!(out, "   {}: {:.1}%", algo, pct)?,
                None => writeln!(out, "   {}: n/a", algo)?,
            }
        }

        writeln!(out, "\n{}", "=".repeat(WIDTH))?;
        writeln!(out, "\nANALYSIS BY SEARCH TYPE")?;
        writeln!(out, "{}", "=".repeat(WIDTH))?;

        for (n, kind, title) in [
            (1, SearchKind::Present, "Existing substrings"),
            (2, SearchKind::Absent, "Non-existing substrings"),
        ] {
            let averages = self.averages(kind);
            writeln!(out, "\n{}. {}:", n, title)?;
            render_timings(out, &averages, " (average)")?;
            if let Some((algo, _)) = fastest(&averages) {
                writeln!(out, "   Best: {}", algo)?;
            }
        }

        Ok(())
    }
}

fn render_case<W: Write>(out: &mut W, case: &CaseResult) -> io::Result<()> {
    match case.kind {
        SearchKind::Present => {
            writeln!(out, "\nSearching for existing substring: '{}'", case.pattern)?;
        }
        SearchKind::Absent => {
            writeln!(out, "\nSearching for NON-existing substring: '{}'", case.pattern)?;
        }
    }

    for &(algo, pos) in &case.positions {
        match pos {
            Some(pos) => writeln!(out, "   {} found at position: {}", algo, pos)?,
            None => writeln!(out, "   {} found at position: not found", algo)?,
        }
    }
    if !case.positions.is_empty() {
        writeln!(out)?;
    }

    render_timings(out, &case.timings, "")?;

    if let Some((algo, d)) = fastest(&case.timings) {
        writeln!(out, "\n   Fastest: {} ({:.6} sec)", algo, d.as_secs_f64())?;
    }

    Ok(())
}

fn render_timings<W: Write>(
    out: &mut W,
    timings: &[(Algorithm, Duration)],
    suffix: &str,
) -> io::Result<()> {
    for &(algo, d) in timings {
        let label = format!("{}:", algo);
        writeln!(out, "   {:<12} {:.6} sec{}", label, d.as_secs_f64(), suffix)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn case(kind: SearchKind, kmp: u64, bm: u64, rk: u64) -> CaseResult {
        let positions = match kind {
            SearchKind::Present => Algorithm::ALL.iter().map(|&a| (a, Some(42))).collect(),
            SearchKind::Absent => Vec::new(),
        };
        CaseResult {
            kind,
            pattern: "pat".to_string(),
            positions,
            timings: vec![
                (Algorithm::Kmp, ms(kmp)),
                (Algorithm::BoyerMoore, ms(bm)),
                (Algorithm::RabinKarp, ms(rk)),
            ],
        }
    }

    fn report() -> Report {
        Report {
            articles: vec![
                ArticleResult {
                    name: "article_1.txt".to_string(),
                    length: 1000,
                    cases: vec![
                        case(SearchKind::Present, 100, 40, 200),
                        case(SearchKind::Absent, 300, 60, 400),
                    ],
                },
                ArticleResult {
                    name: "article_2.txt".to_string(),
                    length: 2000,
                    cases: vec![
                        case(SearchKind::Present, 100, 80, 50),
                        case(SearchKind::Absent, 100, 20, 150),
                    ],
                },
            ],
        }
    }

    #[test]
    fn fastest_picks_minimum() {
        let timings = vec![
            (Algorithm::Kmp, ms(5)),
            (Algorithm::BoyerMoore, ms(3)),
            (Algorithm::RabinKarp, ms(3)),
        ];
        assert_eq!(fastest(&timings), Some((Algorithm::BoyerMoore, ms(3))));
        assert_eq!(fastest(&[]), None);
    }

    #[test]
    fn totals_and_averages() {
        let report = report();
        assert_eq!(
            report.totals(),
            vec![
                (Algorithm::Kmp, ms(600)),
                (Algorithm::BoyerMoore, ms(200)),
                (Algorithm::RabinKarp, ms(800)),
            ]
        );
        assert_eq!(
            report.averages(SearchKind::Present),
            vec![
                (Algorithm::Kmp, ms(100)),
                (Algorithm::BoyerMoore, ms(60)),
                (Algorithm::RabinKarp, ms(125)),
            ]
        );
    }

    #[test]
    fn relative_speed() {
        let rel = report().relative_to_kmp();
        let pct: Vec<f64> = rel.iter().map(|&(_, p)| p.unwrap()).collect();
        assert!((pct[0] - 100.0).abs() < 1e-9);
        assert!((pct[1] - 33.333).abs() < 1e-2);
        assert!((pct[2] - 133.333).abs() < 1e-2);
    }

    #[test]
    fn relative_speed_without_kmp_time() {
        let empty = Report { articles: Vec::new() };
        assert!(empty.relative_to_kmp().iter().all(|&(_, p)| p.is_none()));
    }

    #[test]
    fn render_contains_sections() {
        let mut buf = Vec::new();
        report().render(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("ARTICLE 1: article_1.txt (1000 units)"));
        assert!(text.contains("ARTICLE 2: article_2.txt (2000 units)"));
        assert!(text.contains("Searching for existing substring: 'pat'"));
        assert!(text.contains("KMP found at position: 42"));
        assert!(text.contains("Fastest: Boyer-Moore (0.040000 sec)"));
        assert!(text.contains("OVERALL FASTEST: Boyer-Moore"));
        assert!(text.contains("Rabin-Karp: 133.3%"));
        assert!(text.contains("Boyer-Moore: 0.060000 sec (average)"));
        assert!(text.contains("   Best: Boyer-Moore"));
    }
}
