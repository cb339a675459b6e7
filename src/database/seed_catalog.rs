use crate::models::Activity;

// Built-in catalog, loaded once at startup. Changes here reset on every restart.
pub fn default_activities() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            &["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            &["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            &["john@mergington.edu", "olivia@mergington.edu"],
        ),
        // Sports
        Activity::new(
            "Soccer Team",
            "Competitive soccer team, practices and inter-school matches",
            "Mondays, Wednesdays, 4:00 PM - 6:00 PM",
            22,
            &["liam@mergington.edu", "noah@mergington.edu"],
        ),
        Activity::new(
            "Basketball Club",
            "Skill development, pickup games, and tournaments",
            "Tuesdays, Thursdays, 5:00 PM - 7:00 PM",
            16,
            &["ava@mergington.edu", "isabella@mergington.edu"],
        ),
        // Arts
        Activity::new(
            "Art Club",
            "Explore painting, drawing, and mixed media projects",
            "Wednesdays, 3:30 PM - 5:00 PM",
            18,
            &["charlotte@mergington.edu", "amelia@mergington.edu"],
        ),
        Activity::new(
            "Drama Club",
            "Acting workshops, rehearsals, and school productions",
            "Fridays, 4:00 PM - 6:00 PM",
            25,
            &["lucas@mergington.edu", "mia@mergington.edu"],
        ),
        // Intellectual
        Activity::new(
            "Debate Team",
            "Practice debating skills and compete in tournaments",
            "Thursdays, 3:30 PM - 5:00 PM",
            14,
            &["henry@mergington.edu", "grace@mergington.edu"],
        ),
        Activity::new(
            "Math Club",
            "Problem solving, math competitions, and enrichment",
            "Mondays, 3:30 PM - 4:30 PM",
            20,
            &["oliver@mergington.edu", "eva@mergington.edu"],
        ),
    ]
}
