/// Icon shown on an extra-curricular activity card, picked from its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ActivityIcon {
    /// Positions of responsibility and the fallback for unmatched titles.
    #[default]
    Star,
    Camera,
    Users,
    Medal,
    Theater,
    Music,
}

const STAR_KEYWORDS: &[&str] =
    &["head", "secretary", "position", "responsibility"];
const CAMERA_KEYWORDS: &[&str] = &["photography"];
const USERS_KEYWORDS: &[&str] =
    &["community", "volunteer", "member", "committee"];
const MEDAL_KEYWORDS: &[&str] = &["achievement", "winner"];
const THEATER_KEYWORDS: &[&str] =
    &["ramayana", "mahabharat", "shivrajyabhishek", "drama", "geet"];
const MUSIC_KEYWORDS: &[&str] = &["dance"];

impl ActivityIcon {
    /// Classify a title by case-insensitive keyword match. Rules are checked
    /// in order and the first hit wins.
    pub fn for_title(title: &str) -> Self {
        let title = title.to_lowercase();
        let rules: [(&[&str], ActivityIcon); 6] = [
            (STAR_KEYWORDS, ActivityIcon::Star),
            (CAMERA_KEYWORDS, ActivityIcon::Camera),
            (USERS_KEYWORDS, ActivityIcon::Users),
            (MEDAL_KEYWORDS, ActivityIcon::Medal),
            (THEATER_KEYWORDS, ActivityIcon::Theater),
            (MUSIC_KEYWORDS, ActivityIcon::Music),
        ];
        rules
            .iter()
            .find(|(keywords, _)| keywords.iter().any(|k| title.contains(k)))
            .map(|(_, icon)| *icon)
            .unwrap_or_default()
    }
}
