//! Wall-clock timing of oracle evaluations
//!
//! [`speed_test`] measures exactly one evaluation. Single measurements are
//! noisy, so harnesses collect several into a [`SpeedSample`] and report a
//! [`TimingSummary`].

use crate::core::candidate::Candidate;
use crate::core::verdict::Verdict;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::time::{Duration, Instant};

/// Time one evaluation of `candidate`.
pub fn speed_test(candidate: Candidate) -> Duration {
    let start = Instant::now();
    black_box(black_box(candidate).verdict());
    start.elapsed()
}

/// All timed evaluations collected for one candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedSample {
    pub candidate: Candidate,
    pub verdict: Verdict,
    #[serde(with = "duration_nanos_vec")]
    pub durations: Vec<Duration>,
}

impl SpeedSample {
    pub fn new(candidate: Candidate, verdict: Verdict, durations: Vec<Duration>) -> Self {
        Self {
            candidate,
            verdict,
            durations,
        }
    }

    pub fn iterations(&self) -> usize {
        self.durations.len()
    }

    pub fn summary(&self) -> Option<TimingSummary> {
        TimingSummary::from_durations(&self.durations)
    }
}

/// Summary statistics over a set of durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingSummary {
    #[serde(with = "duration_nanos")]
    pub min: Duration,
    #[serde(with = "duration_nanos")]
    pub max: Duration,
    #[serde(with = "duration_nanos")]
    pub mean: Duration,
    #[serde(with = "duration_nanos")]
    pub median: Duration,
}

impl TimingSummary {
    /// Returns `None` for an empty slice.
    ///
    /// The median of an even-length sample is the mean of the two middle
    /// values.
    pub fn from_durations(durations: &[Duration]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        let mut sorted = durations.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let total: Duration = sorted.iter().sum();
        let mean = total / n as u32;

        let median = if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        };

        Some(Self {
            min: sorted[0],
            max: sorted[n - 1],
            mean,
            median,
        })
    }
}

mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(u64::try_from(d.as_nanos()).unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_nanos)
    }
}

mod duration_nanos_vec {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(ds: &[Duration], s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(
            ds.iter()
                .map(|d| u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Duration>, D::Error> {
        Vec::<u64>::deserialize(d).map(|v| v.into_iter().map(Duration::from_nanos).collect())
    }
}
