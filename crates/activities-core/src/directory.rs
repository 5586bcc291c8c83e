use std::collections::BTreeMap;

use crate::activity::{validate_email, Activity};
use crate::error::{ActivityError, Result};

// ---------------------------------------------------------------------------
// ActivityDirectory
// ---------------------------------------------------------------------------

/// The full set of activities and their rosters, keyed by activity name.
///
/// Memory-only: seeded once at process start, lives for the process lifetime,
/// and a restart resets all signups. Callers that serve concurrent requests
/// must put the directory behind a single lock; the directory itself is plain
/// mutable data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    /// An empty directory. Used by tests that want a hand-built roster.
    pub fn new() -> Self {
        Self {
            activities: BTreeMap::new(),
        }
    }

    /// The built-in activity list every fresh process starts from.
    pub fn seeded() -> Self {
        let mut dir = Self::new();
        for (name, activity) in seed_activities() {
            dir.insert(name, activity);
        }
        dir
    }

    pub fn insert(&mut self, name: impl Into<String>, activity: Activity) {
        self.activities.insert(name.into(), activity);
    }

    /// The full name → record mapping, for `GET /activities`.
    pub fn activities(&self) -> &BTreeMap<String, Activity> {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Whether `email` is on any activity's roster, directory-wide.
    pub fn is_enrolled_anywhere(&self, email: &str) -> bool {
        self.activities.values().any(|a| a.has_participant(email))
    }

    /// Sign `email` up for `activity_name`, returning the confirmation
    /// message on success.
    ///
    /// Validations run in a fixed order, each a distinct failure mode; the
    /// roster is only touched after every check passes, so a rejected signup
    /// leaves the directory unchanged. The final capacity re-check guards the
    /// mutation itself and is unreachable after the earlier one; it exists so
    /// the distinct "Activity is already full" failure mode stays observable
    /// in the error taxonomy.
    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String> {
        let activity = self
            .activities
            .get(activity_name)
            .ok_or(ActivityError::ActivityNotFound)?;

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        if activity.is_full() {
            return Err(ActivityError::CapacityReached);
        }
        validate_email(email)?;
        if self.is_enrolled_anywhere(email) {
            return Err(ActivityError::EnrolledElsewhere);
        }

        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(ActivityError::ActivityNotFound)?;
        if activity.is_full() {
            return Err(ActivityError::ActivityFull);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity_name}"))
    }
}

impl Default for ActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

// ---------------------------------------------------------------------------
// Seed data
// ---------------------------------------------------------------------------

fn seed_activities() -> Vec<(&'static str, Activity)> {
    vec![
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
                &["michael@mergington.edu", "daniel@mergington.edu"],
            ),
        ),
        (
            "Programming Class",
            Activity::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::new(
                "Join the school soccer team and compete in local leagues",
                "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
                18,
                &["lucas@mergington.edu", "mia@mergington.edu"],
            ),
        ),
        (
            "Basketball Club",
            Activity::new(
                "Practice basketball skills and play friendly matches",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
                &["liam@mergington.edu", "ava@mergington.edu"],
            ),
        ),
        (
            "Volleyball Team",
            Activity::new(
                "Train and compete as part of the school volleyball team",
                "Mondays and Thursdays, 4:00 PM - 5:30 PM",
                14,
                &["noah@mergington.edu", "ella@mergington.edu"],
            ),
        ),
        (
            "Track and Field",
            Activity::new(
                "Participate in running, jumping, and throwing events",
                "Tuesdays and Fridays, 3:30 PM - 5:00 PM",
                20,
                &["william@mergington.edu", "zoe@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Act, direct, and participate in school theater productions",
                "Mondays, 4:00 PM - 5:30 PM",
                25,
                &["charlotte@mergington.edu", "jackson@mergington.edu"],
            ),
        ),
        (
            "Art Workshop",
            Activity::new(
                "Explore painting, drawing, and sculpture techniques",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
                &["amelia@mergington.edu", "benjamin@mergington.edu"],
            ),
        ),
        (
            "Photography Club",
            Activity::new(
                "Learn photography skills and participate in photo walks",
                "Wednesdays, 4:00 PM - 5:00 PM",
                12,
                &["lucy@mergington.edu", "henry@mergington.edu"],
            ),
        ),
        (
            "Music Ensemble",
            Activity::new(
                "Join the school band or orchestra and perform at events",
                "Fridays, 3:30 PM - 5:00 PM",
                20,
                &["leo@mergington.edu", "nora@mergington.edu"],
            ),
        ),
    ]
}
