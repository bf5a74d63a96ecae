//! Leaderboard for comparing evaluation results

use super::result::EvalResult;
use std::fmt;

/// Ranked comparison of evaluation results by one primary metric
#[derive(Clone, Debug)]
pub struct Leaderboard {
    /// Results, kept sorted by the primary metric
    pub results: Vec<EvalResult>,
    /// Primary metric name for ranking
    pub primary_metric: String,
    /// Ranking direction of the primary metric
    pub higher_is_better: bool,
}

impl Leaderboard {
    /// Empty leaderboard ranked by `primary_metric`
    pub fn new(primary_metric: impl Into<String>, higher_is_better: bool) -> Self {
        Self {
            results: Vec::new(),
            primary_metric: primary_metric.into(),
            higher_is_better,
        }
    }

    /// Add a result and re-rank
    pub fn add(&mut self, result: EvalResult) {
        self.results.push(result);
        self.sort();
    }

    /// Re-rank by the primary metric; results without it sink to the bottom
    pub fn sort(&mut self) {
        let metric = self.primary_metric.clone();
        let higher_is_better = self.higher_is_better;
        self.results.sort_by(|a, b| {
            match (a.score(&metric), b.score(&metric)) {
                (Some(x), Some(y)) => {
                    let ordering = x.partial_cmp(&y).unwrap_or(std::cmp::Ordering::Equal);
                    if higher_is_better {
                        ordering.reverse()
                    } else {
                        ordering
                    }
                }
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        });
    }

    /// Best result by the primary metric
    pub fn best(&self) -> Option<&EvalResult> {
        self.results.first()
    }

    /// Export as a markdown table
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();
        let metrics = self.metric_columns();
        if metrics.is_empty() {
            return md;
        }

        md.push_str("| Learner | Dataset |");
        for metric in &metrics {
            md.push_str(&format!(" {metric} |"));
        }
        md.push('\n');

        md.push_str("|---------|---------|");
        for _ in &metrics {
            md.push_str("----------|");
        }
        md.push('\n');

        for result in &self.results {
            md.push_str(&format!("| {} | {} |", result.learner, result.dataset));
            for metric in &metrics {
                match result.score(metric) {
                    Some(score) => md.push_str(&format!(" {score:.4} |")),
                    None => md.push_str(" - |"),
                }
            }
            md.push('\n');
        }

        md
    }

    fn metric_columns(&self) -> Vec<String> {
        self.results
            .first()
            .map(|first| first.scores.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl fmt::Display for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.results.is_empty() {
            return writeln!(f, "Leaderboard: (empty)");
        }

        let metrics = self.metric_columns();
        let name_width = self
            .results
            .iter()
            .map(|r| r.learner.len() + r.dataset.len() + 4)
            .max()
            .unwrap_or(8)
            .max(8);

        write!(f, "│ {:name_width$} │", "Learner")?;
        for metric in &metrics {
            write!(f, " {metric:>12} │")?;
        }
        writeln!(f)?;

        for result in &self.results {
            let label = format!("{} on {}", result.learner, result.dataset);
            write!(f, "│ {label:name_width$} │")?;
            for metric in &metrics {
                match result.score(metric) {
                    Some(score) => write!(f, " {score:>12.4} │")?,
                    None => write!(f, " {:>12} │", "-")?,
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(learner: &str, metric: &str, value: f64) -> EvalResult {
        let mut result = EvalResult::new(learner, "d");
        result.add_score(metric, value);
        result
    }

    #[test]
    fn test_ranks_lower_is_better() {
        let mut board = Leaderboard::new("mae", false);
        board.add(result_with("a", "mae", 0.9));
        board.add(result_with("b", "mae", 0.1));
        board.add(result_with("c", "mae", 0.5));
        assert_eq!(board.best().unwrap().learner, "b");
    }

    #[test]
    fn test_ranks_higher_is_better() {
        let mut board = Leaderboard::new("kendall_tau", true);
        board.add(result_with("a", "kendall_tau", 0.2));
        board.add(result_with("b", "kendall_tau", 0.8));
        assert_eq!(board.best().unwrap().learner, "b");
    }

    #[test]
    fn test_missing_primary_metric_sinks() {
        let mut board = Leaderboard::new("mae", false);
        board.add(EvalResult::new("empty", "d"));
        board.add(result_with("scored", "mae", 2.0));
        assert_eq!(board.best().unwrap().learner, "scored");
    }

    #[test]
    fn test_markdown_export() {
        let mut board = Leaderboard::new("mae", false);
        board.add(result_with("a", "mae", 0.5));
        let md = board.to_markdown();
        assert!(md.contains("| Learner | Dataset |"));
        assert!(md.contains("0.5000"));
    }
}
