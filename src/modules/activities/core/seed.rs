use crate::modules::activities::core::activity::{Activity, Roster};

fn activity(
    description: &str,
    schedule: &str,
    max_participants: u32,
    participants: &[&str],
) -> Activity {
    Activity {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

/// The activities Mergington High School offers when the service starts.
pub fn mergington_roster() -> Roster {
    [
        (
            "Chess Club",
            activity(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            activity(
                "Join our competitive basketball team and participate in local tournaments",
                "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                15,
                &["alex@mergington.edu"],
            ),
        ),
        (
            "Tennis Club",
            activity(
                "Learn tennis skills and compete in friendly matches",
                "Tuesdays and Thursdays, 4:00 PM - 5:00 PM",
                10,
                &["james@mergington.edu"],
            ),
        ),
        (
            "Art Club",
            activity(
                "Express creativity through painting, drawing, and sculpture",
                "Wednesdays, 3:30 PM - 5:00 PM",
                25,
                &["grace@mergington.edu", "noah@mergington.edu"],
            ),
        ),
        (
            "Theater Production",
            activity(
                "Perform in school plays and develop acting skills",
                "Thursdays and Fridays, 4:00 PM - 5:30 PM",
                20,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            activity(
                "Develop public speaking and argumentation skills through competitive debate",
                "Mondays and Fridays, 3:30 PM - 4:45 PM",
                16,
                &["luke@mergington.edu", "isabella@mergington.edu"],
            ),
        ),
        (
            "Science Club",
            activity(
                "Explore scientific concepts through experiments and STEM projects",
                "Tuesdays, 4:00 PM - 5:00 PM",
                18,
                &["ethan@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            activity(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            activity(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
    ]
    .into_iter()
    .map(|(name, activity)| (name.to_string(), activity))
    .collect()
}
