use rand::Rng;

const INTERVIEW_COVERS: &[&str] = &[
    "adobe",
    "amazon",
    "facebook",
    "hostinger",
    "pinterest",
    "quora",
    "reddit",
    "skype",
    "spotify",
    "telegram",
    "tiktok",
    "yahoo",
];

/// Public path of a randomly chosen interview cover image.
pub fn random_interview_cover() -> String {
    let index = rand::thread_rng().gen_range(0..INTERVIEW_COVERS.len());
    format!("/covers/{}.png", INTERVIEW_COVERS[index])
}
