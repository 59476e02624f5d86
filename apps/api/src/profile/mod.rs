// Job-seeker side: profile-strength scoring and profile analysis.

pub mod handlers;
pub mod strength;
