use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Recorded and displayed, never enforced on sign up.
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_signed_up(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// All activities keyed by name, in insertion order.
///
/// Serializes as a JSON object `{ "<name>": { ..activity } }` so the order the
/// roster was seeded in is the order clients see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(String, Activity)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces the activity stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = activity,
            None => self.entries.push((name, activity)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Activity)> for Roster {
    fn from_iter<T: IntoIterator<Item = (String, Activity)>>(iter: T) -> Self {
        let mut roster = Roster::new();
        for (name, activity) in iter {
            roster.insert(name, activity);
        }
        roster
    }
}

impl IntoIterator for Roster {
    type Item = (String, Activity);
    type IntoIter = std::vec::IntoIter<(String, Activity)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}
