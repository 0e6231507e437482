//! Seed command implementation.

use studentinfo_core::storage::StudentRepository;
use studentinfo_core::student::{StudentChanges, StudentKey, StudentRecord};

use super::error::Result;

const NAMES: [&str; 8] = [
    "Ada Lovelace",
    "Alan Turing",
    "Grace Hopper",
    "Edsger Dijkstra",
    "Barbara Liskov",
    "Donald Knuth",
    "Frances Allen",
    "Ken Thompson",
];

const COURSES: [&str; 3] = ["CS101", "CS201", "MATH150"];

/// Generate `count` sample enrollments.
///
/// Output is deterministic, so seeding twice overwrites the same items.
pub fn generate_seed_students(count: u32) -> Vec<StudentRecord> {
    (0..count as usize)
        .map(|i| {
            let student = i / COURSES.len();
            let name = NAMES[student % NAMES.len()];
            let handle = name
                .split_whitespace()
                .next()
                .unwrap_or(name)
                .to_lowercase();

            StudentRecord::new(
                StudentKey::new(format!("s{:03}", student + 1), COURSES[i % COURSES.len()]),
                StudentChanges::new(
                    name,
                    format!("{}{}@example.edu", handle, student + 1),
                    ((student % 4) + 1).to_string(),
                ),
            )
        })
        .collect()
}

/// Writes the students one `PutItem` at a time.
pub async fn seed_students(repo: &dyn StudentRepository, students: &[StudentRecord]) -> Result<u32> {
    let mut inserted = 0;

    for student in students {
        repo.put_student(student).await?;
        inserted += 1;
    }

    Ok(inserted)
}
