#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unregister {
    pub activity_name: String,
    pub email: String,
}

impl Unregister {
    pub fn new(activity_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity_name: activity_name.into(),
            email: email.into(),
        }
    }

    pub fn confirmation(&self) -> String {
        format!("Unregistered {} from {}", self.email, self.activity_name)
    }
}
