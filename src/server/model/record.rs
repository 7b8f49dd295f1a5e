//! Record kinds exposed by the read-only collection routes.
//!
//! Each route serves exactly one kind. The kind fixes the route path and the message
//! returned to clients when the fetch fails. Ordering lives with the repositories: only
//! events are sorted (ascending by date).

use std::fmt;

/// The fixed set of record collections the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Attendance,
    Event,
    Exam,
    Payment,
    Grade,
}

impl RecordKind {
    /// Route the collection is served on.
    pub fn path(self) -> &'static str {
        match self {
            Self::Attendance => "/api/attendance",
            Self::Event => "/api/events",
            Self::Exam => "/api/exams",
            Self::Payment => "/api/finance/payments",
            Self::Grade => "/api/grades",
        }
    }

    /// Client-facing message returned with a 500 when the fetch fails.
    ///
    /// The message never includes details of the underlying error.
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Attendance => "Failed to fetch attendance",
            Self::Event => "Failed to fetch events",
            Self::Exam => "Failed to fetch exams",
            Self::Payment => "Failed to fetch payments",
            Self::Grade => "Failed to fetch grades",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Attendance => "attendance",
            Self::Event => "event",
            Self::Exam => "exam",
            Self::Payment => "payment",
            Self::Grade => "grade",
        };
        f.write_str(label)
    }
}
