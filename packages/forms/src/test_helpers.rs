use crate::submission::Submission;

pub fn submission(pairs: &[(&str, &str)]) -> Submission {
    pairs.iter().copied().collect()
}

pub fn reservation_submission() -> Submission {
    submission(&[
        ("first_name", "Mingfai"),
        ("last_name", "Ma"),
        ("email", "mingfai@live.com"),
        ("phone", "555-0100"),
    ])
}
