use serde::Serialize;

/// Tri-state completion of one tracked metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    None,
    Partial,
    Done,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::None => "none",
            Status::Partial => "partial",
            Status::Done => "done",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Status::Done)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics tracked per calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Workout,
    Steps,
    Pullups,
    Pushups,
    Weight,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::Workout,
        Metric::Steps,
        Metric::Pullups,
        Metric::Pushups,
        Metric::Weight,
    ];

    /// Compact label for calendar cells.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Workout => "WO",
            Metric::Steps => "Steps",
            Metric::Pullups => "PU",
            Metric::Pushups => "Push",
            Metric::Weight => "Wt",
        }
    }
}

/// Per-metric status for one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayStatus {
    pub workout: Status,
    pub steps: Status,
    pub pullups: Status,
    pub pushups: Status,
    pub weight: Status,
}

impl DayStatus {
    /// Every metric set to the same status.
    pub fn uniform(status: Status) -> Self {
        Self {
            workout: status,
            steps: status,
            pullups: status,
            pushups: status,
            weight: status,
        }
    }

    pub fn get(&self, metric: Metric) -> Status {
        match metric {
            Metric::Workout => self.workout,
            Metric::Steps => self.steps,
            Metric::Pullups => self.pullups,
            Metric::Pushups => self.pushups,
            Metric::Weight => self.weight,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Status)> + '_ {
        Metric::ALL.into_iter().map(move |m| (m, self.get(m)))
    }
}
