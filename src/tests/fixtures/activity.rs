// Shared test fixture for activities.

use crate::modules::activities::core::activity::{Activity, Roster};

pub struct ActivityBuilder {
    inner: Activity,
}

impl Default for ActivityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ActivityBuilder {
    pub fn new() -> Self {
        Self {
            inner: Activity {
                description: "Learn strategies and compete in chess tournaments".to_string(),
                schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
                max_participants: 12,
                participants: Vec::new(),
            },
        }
    }

    pub fn max_participants(mut self, v: u32) -> Self {
        self.inner.max_participants = v;
        self
    }

    pub fn participants(mut self, v: Vec<String>) -> Self {
        self.inner.participants = v;
        self
    }

    pub fn build(self) -> Activity {
        self.inner
    }
}

pub fn roster_with(name: &str, activity: Activity) -> Roster {
    let mut roster = Roster::new();
    roster.insert(name, activity);
    roster
}

#[cfg(test)]
mod activity_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        let built = ActivityBuilder::default().build();
        assert_eq!(built, ActivityBuilder::new().build());
        assert_eq!(built.max_participants, 12);
        assert!(built.participants.is_empty());
    }

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let custom = ActivityBuilder::new()
            .max_participants(3)
            .participants(vec!["a@mergington.edu".into()])
            .build();

        assert_eq!(custom.schedule, "Fridays, 3:30 PM - 5:00 PM");
        assert_eq!(custom.max_participants, 3);
        assert_eq!(custom.participants, vec!["a@mergington.edu"]);
    }
}
