//! Rank correlation metrics over ranking outcomes
//!
//! Both metrics compare an expected and a predicted total order over the
//! same item set and score in [-1, 1], higher better. A pair is undefined
//! when either side is not a permutation, the item sets differ in size, or
//! fewer than two items are ranked.

use super::Metric;
use crate::outcome::Ranking;

fn aligned_ranks(expected: &Ranking, predicted: &Ranking) -> Option<(Vec<usize>, Vec<usize>)> {
    let re = expected.ranks()?;
    let rp = predicted.ranks()?;
    if re.len() != rp.len() || re.len() < 2 {
        return None;
    }
    Some((re, rp))
}

/// Kendall's tau rank correlation
///
/// tau = (concordant - discordant) / (m * (m - 1) / 2) over all item pairs.
///
/// # Example
///
/// ```
/// use evaluar::metric::ranking::KendallTau;
/// use evaluar::metric::Metric;
/// use evaluar::outcome::Ranking;
///
/// let tau = KendallTau;
/// let expected = Ranking::new(vec![0, 1, 2]);
/// let reversed = Ranking::new(vec![2, 1, 0]);
/// assert_eq!(tau.instance_loss(&expected, &expected), Some(1.0));
/// assert_eq!(tau.instance_loss(&expected, &reversed), Some(-1.0));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct KendallTau;

impl Metric<Ranking> for KendallTau {
    fn name(&self) -> &'static str {
        "kendall_tau"
    }

    fn instance_loss(&self, expected: &Ranking, predicted: &Ranking) -> Option<f64> {
        let (re, rp) = aligned_ranks(expected, predicted)?;
        let m = re.len();
        let mut net = 0i64;
        for i in 0..m {
            for j in (i + 1)..m {
                let a = re[i] as i64 - re[j] as i64;
                let b = rp[i] as i64 - rp[j] as i64;
                net += a.signum() * b.signum();
            }
        }
        let pairs = (m * (m - 1) / 2) as f64;
        Some(net as f64 / pairs)
    }
}

/// Spearman's rho rank correlation
///
/// rho = 1 - 6 * sum(d_i^2) / (m * (m^2 - 1)) where d_i is the rank
/// difference of item i.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpearmanRho;

impl Metric<Ranking> for SpearmanRho {
    fn name(&self) -> &'static str {
        "spearman"
    }

    fn instance_loss(&self, expected: &Ranking, predicted: &Ranking) -> Option<f64> {
        let (re, rp) = aligned_ranks(expected, predicted)?;
        let m = re.len();
        let sum_sq: f64 = re
            .iter()
            .zip(&rp)
            .map(|(&a, &b)| {
                let d = a as f64 - b as f64;
                d * d
            })
            .sum();
        let denom = (m * (m * m - 1)) as f64;
        Some(1.0 - 6.0 * sum_sq / denom)
    }
}
