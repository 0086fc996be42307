//! Password strength analysis.
//!
//! An external estimator (zxcvbn, behind the `zxcvbn` feature) is preferred
//! when compiled in. Any failure of the external path falls back to the
//! local entropy estimate, which is always available.

use crate::entropy::{entropy_score, simple_entropy};
use crate::error::{Error, Result};
use std::fmt;
use tracing::debug;

pub const LOCAL_NOTE: &str = "zxcvbn not available; used simple entropy estimate.";

#[derive(Debug, Clone, PartialEq)]
pub enum Analysis {
    /// Produced by an external strength estimator.
    Estimated(Estimate),
    /// Produced by the local entropy fallback.
    Local {
        score: u8,
        entropy_bits: f64,
        note: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    pub score: u8,
    pub guesses: u64,
    pub crack_times_display: CrackTimesDisplay,
    pub feedback: Feedback,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CrackTimesDisplay {
    pub online_throttling_100_per_hour: String,
    pub online_no_throttling_10_per_second: String,
    pub offline_slow_hashing_1e4_per_second: String,
    pub offline_fast_hashing_1e10_per_second: String,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feedback {
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl Analysis {
    pub fn score(&self) -> u8 {
        match self {
            Self::Estimated(estimate) => estimate.score,
            Self::Local { score, .. } => *score,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, Self::Local { .. })
    }

    /// Metric name / rendered value pairs, in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::Estimated(estimate) => vec![
                ("score", estimate.score.to_string()),
                ("guesses", estimate.guesses.to_string()),
                (
                    "crack_times_display",
                    estimate.crack_times_display.to_string(),
                ),
                ("feedback", estimate.feedback.to_string()),
            ],
            Self::Local {
                score,
                entropy_bits,
                note,
            } => vec![
                ("score", score.to_string()),
                ("entropy_bits", format!("{:.2}", entropy_bits)),
                ("note", (*note).to_string()),
            ],
        }
    }
}

impl fmt::Display for CrackTimesDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "online_throttling_100_per_hour: {}, online_no_throttling_10_per_second: {}, \
             offline_slow_hashing_1e4_per_second: {}, offline_fast_hashing_1e10_per_second: {}",
            self.online_throttling_100_per_hour,
            self.online_no_throttling_10_per_second,
            self.offline_slow_hashing_1e4_per_second,
            self.offline_fast_hashing_1e10_per_second
        )
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.warning.is_none() && self.suggestions.is_empty() {
            return write!(f, "none");
        }
        if let Some(warning) = &self.warning {
            write!(f, "warning: {}", warning)?;
            if !self.suggestions.is_empty() {
                write!(f, "; ")?;
            }
        }
        if !self.suggestions.is_empty() {
            write!(f, "suggestions: {}", self.suggestions.join(" "))?;
        }
        Ok(())
    }
}

pub trait StrengthEstimator {
    fn name(&self) -> &'static str;

    fn estimate(&self, password: &str) -> anyhow::Result<Analysis>;
}

#[cfg(feature = "zxcvbn")]
pub struct ZxcvbnEstimator;

#[cfg(feature = "zxcvbn")]
impl StrengthEstimator for ZxcvbnEstimator {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn estimate(&self, password: &str) -> anyhow::Result<Analysis> {
        let entropy = zxcvbn::zxcvbn(password, &[])
            .map_err(|e| anyhow::anyhow!("zxcvbn failed: {}", e))?;

        let times = entropy.crack_times();
        let crack_times_display = CrackTimesDisplay {
            online_throttling_100_per_hour: times.online_throttling_100_per_hour().to_string(),
            online_no_throttling_10_per_second: times
                .online_no_throttling_10_per_second()
                .to_string(),
            offline_slow_hashing_1e4_per_second: times
                .offline_slow_hashing_1e4_per_second()
                .to_string(),
            offline_fast_hashing_1e10_per_second: times
                .offline_fast_hashing_1e10_per_second()
                .to_string(),
        };

        let feedback = entropy
            .feedback()
            .as_ref()
            .map(|fb| Feedback {
                warning: fb.warning().map(|w| w.to_string()),
                suggestions: fb.suggestions().iter().map(|s| s.to_string()).collect(),
            })
            .unwrap_or_default();

        Ok(Analysis::Estimated(Estimate {
            score: entropy.score(),
            guesses: entropy.guesses(),
            crack_times_display,
            feedback,
        }))
    }
}

/// Local entropy estimate; never fails.
pub fn local_estimate(password: &str) -> Analysis {
    let bits = simple_entropy(password);
    Analysis::Local {
        score: entropy_score(bits),
        entropy_bits: (bits * 100.0).round() / 100.0,
        note: LOCAL_NOTE,
    }
}

pub struct Analyzer {
    preferred: Option<Box<dyn StrengthEstimator>>,
}

impl Analyzer {
    /// Picks the external estimator when one was compiled in.
    pub fn detect() -> Self {
        #[cfg(feature = "zxcvbn")]
        {
            Self::with_estimator(Box::new(ZxcvbnEstimator))
        }
        #[cfg(not(feature = "zxcvbn"))]
        {
            Self::local()
        }
    }

    pub fn local() -> Self {
        Self { preferred: None }
    }

    pub fn with_estimator(estimator: Box<dyn StrengthEstimator>) -> Self {
        Self {
            preferred: Some(estimator),
        }
    }

    pub fn estimator_name(&self) -> &'static str {
        self.preferred.as_ref().map_or("entropy", |e| e.name())
    }

    pub fn analyze(&self, password: &str) -> Result<Analysis> {
        if password.is_empty() {
            return Err(Error::EmptyPassword);
        }

        if let Some(estimator) = &self.preferred {
            match estimator.estimate(password) {
                Ok(analysis) => return Ok(analysis),
                Err(e) => debug!(
                    estimator = estimator.name(),
                    error = %e,
                    "external estimator failed, using entropy fallback"
                ),
            }
        }

        Ok(local_estimate(password))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::detect()
    }
}

pub fn analyze_password(password: &str) -> Result<Analysis> {
    Analyzer::detect().analyze(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenEstimator;

    impl StrengthEstimator for BrokenEstimator {
        fn name(&self) -> &'static str {
            "broken"
        }

        fn estimate(&self, _password: &str) -> anyhow::Result<Analysis> {
            anyhow::bail!("estimator exploded")
        }
    }

    #[test]
    fn test_empty_password_is_error() {
        let result = analyze_password("");
        assert!(matches!(result, Err(Error::EmptyPassword)));

        let result = Analyzer::local().analyze("");
        assert!(matches!(result, Err(Error::EmptyPassword)));
    }

    #[test]
    fn test_local_shape() {
        let analysis = Analyzer::local().analyze("abc").unwrap();
        assert!(analysis.is_local());

        let keys: Vec<_> = analysis.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["score", "entropy_bits", "note"]);
    }

    #[test]
    fn test_local_scores() {
        // 3 * log2(26) = 14.10 bits
        let weak = Analyzer::local().analyze("abc").unwrap();
        assert_eq!(weak.score(), 0);
        match weak {
            Analysis::Local { entropy_bits, .. } => assert_eq!(entropy_bits, 14.1),
            _ => panic!("expected local analysis"),
        }

        // 16 * log2(94) = 104.87 bits
        let strong = Analyzer::local().analyze("Xk9#mP2$vL7!qR4&").unwrap();
        assert_eq!(strong.score(), 4);
    }

    #[test]
    fn test_entropy_rounded_to_two_decimals() {
        let analysis = local_estimate("password1");
        let rendered = analysis
            .entries()
            .into_iter()
            .find(|(k, _)| *k == "entropy_bits")
            .map(|(_, v)| v)
            .unwrap();
        assert_eq!(rendered, "46.53");
    }

    #[test]
    fn test_failing_estimator_falls_back() {
        let analyzer = Analyzer::with_estimator(Box::new(BrokenEstimator));
        assert_eq!(analyzer.estimator_name(), "broken");

        let analysis = analyzer.analyze("hunter2").unwrap();
        assert!(analysis.is_local());
        assert_eq!(analysis, local_estimate("hunter2"));
    }

    #[test]
    fn test_feedback_display() {
        assert_eq!(Feedback::default().to_string(), "none");

        let fb = Feedback {
            warning: Some("This is a top-10 common password.".to_string()),
            suggestions: vec!["Add another word or two.".to_string()],
        };
        assert_eq!(
            fb.to_string(),
            "warning: This is a top-10 common password.; suggestions: Add another word or two."
        );
    }

    #[cfg(feature = "zxcvbn")]
    #[test]
    fn test_zxcvbn_shape() {
        let analysis = analyze_password("password").unwrap();
        assert!(!analysis.is_local());
        assert_eq!(analysis.score(), 0);

        let keys: Vec<_> = analysis.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["score", "guesses", "crack_times_display", "feedback"]);
    }

    #[cfg(feature = "zxcvbn")]
    #[test]
    fn test_zxcvbn_strong_password() {
        let analysis = analyze_password("correct horse battery staple 8&Qz").unwrap();
        assert!(analysis.score() >= 3);
    }
}
